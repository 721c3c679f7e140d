use shape_engine::*;
use shape_testing::{FakeProcess, HandleLog, SequentialNumbers, ShadowKind};

const OK: ContractFlags = ContractFlags::new().with_fully_known(true);

const ONE_PARAM: &[ContractSpec] = &[
    ContractSpec::new("NtUserCallOneParam", 2, OK).combined(1),
    ContractSpec::new("NtUserGetThreadDesktop", 2, OK.with_requires_prefix(true)),
    ContractSpec::new("NtGdiCreateThing", 1, OK.with_creates_handle(true).with_ret_zero_fail(true)),
    ContractSpec::new("NtGdiDeleteThing", 1, OK.with_deletes_handle(true).with_ret_zero_fail(true)),
];

const POINT: &[FieldRule] = &[FieldRule::write(0, SizeExpr::literal(8))];
const ROUTINES: &[ContractSpec] = &[
    ContractSpec::new("NtUserCallOneParam.GETCURSORPOS", 2, OK).rules(POINT),
    ContractSpec::new("NtUserCallOneParam.WIN7ONLY", 2, OK),
];
const OPCODES: &[OpcodeRow] = &[
    OpcodeRow::new(
        "NtUserCallOneParam.GETCURSORPOS",
        [Some(0x2A), Some(0x29), Some(0x29), Some(0x25), Some(0x25), None],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.WIN7ONLY",
        [Some(0x30), None, None, None, None, None],
    ),
];

fn build(resolver: &dyn NumberResolver, version: OsVersion) -> Result<Engine, InitError> {
    Engine::builder(EngineOptions::default())
        .contracts(ONE_PARAM)
        .secondary_contracts(ROUTINES, OPCODES)
        .build(resolver, version)
}

#[test]
fn routines_get_the_release_opcode() {
    let numbers = SequentialNumbers::new();
    let w7 = build(&numbers, OsVersion::new(Release::Win7, 1)).unwrap();
    let xp = build(&numbers, OsVersion::new(Release::Xp, 3)).unwrap();
    assert_eq!(w7.secondary_opcode("NtUserCallOneParam.GETCURSORPOS"), Some(0x2A));
    assert_eq!(xp.secondary_opcode("NtUserCallOneParam.GETCURSORPOS"), Some(0x25));
    assert_eq!(xp.secondary_opcode("NtUserCallOneParam.WIN7ONLY"), None);
    assert!(xp.resolve_name("NtUserCallOneParam.WIN7ONLY").is_none());
}

#[test]
fn vista_service_pack_selects_the_column() {
    let numbers = SequentialNumbers::new();
    let sp2 = build(&numbers, OsVersion::new(Release::Vista, 2)).unwrap();
    let sp1 = build(&numbers, OsVersion::new(Release::Vista, 1)).unwrap();
    assert_eq!(sp2.opcodes().column(), OpcodeColumn::VistaSp2);
    assert_eq!(sp1.opcodes().column(), OpcodeColumn::VistaSp01);
}

#[test]
fn nt4_is_unsupported() {
    let numbers = SequentialNumbers::new();
    let err = build(&numbers, OsVersion::new(Release::Nt4, 6)).err();
    assert!(matches!(err, Some(InitError::UnsupportedVersion(_))));
}

#[test]
fn combined_ids_dispatch_to_routines() {
    let numbers = SequentialNumbers::new();
    let engine = build(&numbers, OsVersion::new(Release::Win7, 1)).unwrap();
    let primary = engine.resolve_name("NtUserCallOneParam").unwrap();
    let routine = engine
        .resolve_name("NtUserCallOneParam.GETCURSORPOS")
        .unwrap();
    assert_eq!(routine, CallId::combine(primary, 0x2A).unwrap());
    assert_eq!(routine.primary(), primary);
    assert_eq!(routine.opcode(), Some(0x2A));

    let process = FakeProcess::new();
    let point = process.alloc(8);
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let args = [point.as_u64(), 0x2A];
    let report = engine.on_call_pre(&mut thread, &env, primary, &args);
    assert_eq!(report.call, Some("NtUserCallOneParam.GETCURSORPOS"));
    assert_eq!(report.id, routine);
    engine.on_call_post(&mut thread, &env, primary, &args, 0);
    assert_eq!(
        process.events_of(ShadowKind::MarkWritten),
        vec![AddressRange::new(point, 8)]
    );
}

#[test]
fn unknown_opcodes_report_the_combined_id() {
    let numbers = SequentialNumbers::new();
    let engine = build(&numbers, OsVersion::new(Release::Win7, 1)).unwrap();
    let primary = engine.resolve_name("NtUserCallOneParam").unwrap();
    let process = FakeProcess::new();
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let report = engine.on_call_pre(&mut thread, &env, primary, &[0, 0x77]);
    assert_eq!(report.outcome, Outcome::Unknown);
    assert_eq!(report.call, Some("NtUserCallOneParam"));
    assert_eq!(
        report.diagnostics,
        vec![Diagnostic::UnknownCall(
            CallId::combine(primary, 0x77).unwrap()
        )]
    );
}

#[test]
fn bare_wrapper_names_resolve_unless_the_prefix_is_required() {
    let numbers = SequentialNumbers::new().without(&[
        "NtUserCallOneParam",
        "NtUserGetThreadDesktop",
        "NtGdiCreateThing",
    ]);
    let engine = build(&numbers, OsVersion::new(Release::Win7, 1)).unwrap();
    assert_eq!(
        engine.resolve_name("NtUserCallOneParam"),
        numbers.number_of("CallOneParam").map(CallId::new)
    );
    assert!(engine.resolve_name("NtGdiCreateThing").is_some());
    assert!(engine.resolve_name("NtUserGetThreadDesktop").is_none());
}

#[test]
fn unresolved_calls_are_left_out() {
    let numbers = SequentialNumbers::new().without(&["NtGdiDeleteThing", "DeleteThing"]);
    let engine = build(&numbers, OsVersion::new(Release::Win7, 1)).unwrap();
    assert!(engine.resolve_name("NtGdiDeleteThing").is_none());
    assert!(engine.resolve_name("NtGdiCreateThing").is_some());
}

#[test]
fn handles_are_tracked_when_enabled() {
    let numbers = SequentialNumbers::new();
    let engine = Engine::builder(EngineOptions {
        track_handles: true,
        ..EngineOptions::default()
    })
    .contracts(ONE_PARAM)
    .build(&numbers, OsVersion::new(Release::Win7, 1))
    .unwrap();
    let process = FakeProcess::new();
    let handles = HandleLog::default();
    let env = CallEnv::new(&process, &process).with_handles(&handles);
    let mut thread = engine.thread_init();

    let create = engine.resolve_name("NtGdiCreateThing").unwrap();
    engine.on_call_pre(&mut thread, &env, create, &[0]);
    engine.on_call_post(&mut thread, &env, create, &[0], 0x0101_0042);

    let delete = engine.resolve_name("NtGdiDeleteThing").unwrap();
    engine.on_call_pre(&mut thread, &env, delete, &[0x0101_0042]);
    engine.on_call_post(&mut thread, &env, delete, &[0x0101_0042], 1);

    // A failed creation produces no handle.
    engine.on_call_pre(&mut thread, &env, create, &[0]);
    engine.on_call_post(&mut thread, &env, create, &[0], 0);

    assert_eq!(
        *handles.created.borrow(),
        vec![("NtGdiCreateThing", 0x0101_0042)]
    );
    assert_eq!(
        *handles.released.borrow(),
        vec![("NtGdiDeleteThing", 0x0101_0042)]
    );
}

struct ClaimsSlot;

impl CallHandler for ClaimsSlot {
    fn claims(&self) -> &[usize] {
        &[0]
    }

    fn pre(&self, cx: &mut Checker<'_>, ctx: &mut CallContext) {
        let _ = (cx, ctx);
    }
}

#[test]
fn a_slot_cannot_have_two_authorities() {
    const CLAIMED: &[ContractSpec] = &[ContractSpec::new("NtUserCursor", 1, OK).rules(POINT)];
    let numbers = SequentialNumbers::new();
    let err = Engine::builder(EngineOptions::default())
        .contracts(CLAIMED)
        .call_handler("NtUserCursor", ClaimsSlot)
        .build(&numbers, OsVersion::new(Release::Win7, 1))
        .err();
    assert_eq!(
        err,
        Some(InitError::InvalidContract(
            ContractError::ConflictingAuthority {
                call: "NtUserCursor",
                slot: 0
            }
        ))
    );
}

/// Remembers the size a query call reported for a later call on the thread.
struct Remembering;

impl CallHandler for Remembering {
    fn pre(&self, cx: &mut Checker<'_>, ctx: &mut CallContext) {
        if let Some(size) = cx.recall("NtUserQuery.size") {
            ctx.stash("expected", size);
        }
    }

    fn post(&self, cx: &mut Checker<'_>, ctx: &mut CallContext) {
        match ctx.take("expected") {
            Some(size) => {
                let buf = cx.arg_addr(0);
                cx.mark_written(AddressRange::new(buf, size), "results");
                cx.forget("NtUserQuery.size");
            }
            None => {
                let size = cx.retval().unwrap_or(0);
                cx.remember("NtUserQuery.size", size);
            }
        }
    }
}

#[test]
fn handlers_carry_values_between_calls() {
    const QUERY: &[ContractSpec] = &[ContractSpec::new("NtUserQuery", 1, OK)];
    let numbers = SequentialNumbers::new();
    let engine = Engine::builder(EngineOptions::default())
        .contracts(QUERY)
        .call_handler("NtUserQuery", Remembering)
        .build(&numbers, OsVersion::new(Release::Win7, 1))
        .unwrap();
    let id = engine.resolve_name("NtUserQuery").unwrap();
    let process = FakeProcess::new();
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();

    engine.on_call_pre(&mut thread, &env, id, &[0]);
    engine.on_call_post(&mut thread, &env, id, &[0], 24);
    assert_eq!(thread.remembered("NtUserQuery.size"), Some(24));

    let buf = process.alloc(24);
    engine.on_call_pre(&mut thread, &env, id, &[buf.as_u64()]);
    engine.on_call_post(&mut thread, &env, id, &[buf.as_u64()], 0);
    assert!(process.is_defined(AddressRange::new(buf, 24)));
    assert_eq!(thread.remembered("NtUserQuery.size"), None);
}

#[test]
fn failed_calls_discard_the_stash() {
    const QUERY: &[ContractSpec] = &[ContractSpec::new("NtUserQuery", 1, OK)];
    let numbers = SequentialNumbers::new();
    let engine = Engine::builder(EngineOptions::default())
        .contracts(QUERY)
        .call_handler("NtUserQuery", Remembering)
        .build(&numbers, OsVersion::new(Release::Win7, 1))
        .unwrap();
    let id = engine.resolve_name("NtUserQuery").unwrap();
    let process = FakeProcess::new();
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();

    let buf = process.alloc(24);
    engine.on_call_pre(&mut thread, &env, id, &[buf.as_u64()]);
    let report = engine.on_call_post(&mut thread, &env, id, &[buf.as_u64()], 0xC000_0001);
    assert_eq!(report.outcome, Outcome::Failed);
    assert!(thread.in_flight().is_none());
    assert_eq!(thread.remembered("NtUserQuery.size"), None);
    assert!(process.events().is_empty());
}
