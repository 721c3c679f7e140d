use shape_engine::*;
use shape_testing::{FakeProcess, FixedNumbers, ShadowKind, ViolationKind};

const OK: ContractFlags = ContractFlags::new().with_fully_known(true);
const BOOL_OK: ContractFlags = OK.with_ret_zero_fail(true);

const GET_POINT: &[FieldRule] = &[FieldRule::write(0, SizeExpr::literal(8))];
const COPY_IN: &[FieldRule] = &[FieldRule::read(0, SizeExpr::arg(1))];
const COPY_ELEMS: &[FieldRule] = &[FieldRule::read(0, SizeExpr::arg_by_arg(1, 2))];
const GET_TEXT: &[FieldRule] = &[
    FieldRule::write(1, SizeExpr::arg_elems(2, 2)).pre_only(),
    FieldRule::write(1, SizeExpr::retval_elems(2)).post_only(),
];
const IN_OUT: &[FieldRule] = &[
    FieldRule::in_out(0, SizeExpr::arg(1), SizeExpr::arg_ptr(2)),
    FieldRule::read_write(2, SizeExpr::literal(4)),
];
const HEADER: &[FieldRule] = &[FieldRule::read(0, SizeExpr::field(0).limited(0x40))];
const LAST_WRITTEN: &[FieldRule] = &[
    FieldRule::write(0, SizeExpr::literal(16)),
    FieldRule::write(1, SizeExpr::literal(4)),
];

const CONTRACTS: &[ContractSpec] = &[
    ContractSpec::new("NtUserGetCursorPos", 1, BOOL_OK).rules(GET_POINT),
    ContractSpec::new("NtUserCopyIn", 2, OK).rules(COPY_IN),
    ContractSpec::new("NtUserCopyElems", 3, OK).rules(COPY_ELEMS),
    ContractSpec::new("NtUserGetText", 3, BOOL_OK).rules(GET_TEXT),
    ContractSpec::new("NtUserInOut", 3, OK).rules(IN_OUT),
    ContractSpec::new("NtUserHeader", 1, OK).rules(HEADER),
    ContractSpec::new("NtUserLastWritten", 2, OK.with_small_write_last(true)).rules(LAST_WRITTEN),
    ContractSpec::new("NtUserUnmodeled", 2, ContractFlags::new()),
];

const NUMBERS: &[(&str, u32)] = &[
    ("NtUserGetCursorPos", 0x1001),
    ("NtUserCopyIn", 0x1002),
    ("NtUserCopyElems", 0x1003),
    ("NtUserGetText", 0x1004),
    ("NtUserInOut", 0x1005),
    ("NtUserHeader", 0x1006),
    ("NtUserLastWritten", 0x1007),
    ("NtUserUnmodeled", 0x1008),
];

const STATUS_ACCESS_DENIED: u64 = 0xC000_0022;

fn engine() -> Engine {
    Engine::builder(EngineOptions::default())
        .contracts(CONTRACTS)
        .build(&FixedNumbers::new(NUMBERS), OsVersion::new(Release::Win7, 1))
        .unwrap()
}

struct Harness {
    engine: Engine,
    process: FakeProcess,
    thread: ThreadState,
}

impl Harness {
    fn new() -> Self {
        let engine = engine();
        let thread = engine.thread_init();
        Self {
            engine,
            process: FakeProcess::new(),
            thread,
        }
    }

    fn id(&self, name: &str) -> CallId {
        self.engine.resolve_name(name).unwrap()
    }

    fn pre(&mut self, name: &str, args: &[u64]) -> CallReport {
        let id = self.id(name);
        let env = CallEnv::new(&self.process, &self.process);
        self.engine.on_call_pre(&mut self.thread, &env, id, args)
    }

    fn post(&mut self, name: &str, args: &[u64], retval: u64) -> CallReport {
        let id = self.id(name);
        let env = CallEnv::new(&self.process, &self.process);
        self.engine
            .on_call_post(&mut self.thread, &env, id, args, retval)
    }

    fn call(&mut self, name: &str, args: &[u64], retval: u64) -> (CallReport, CallReport) {
        (self.pre(name, args), self.post(name, args, retval))
    }
}

#[test]
fn exact_size_output_is_marked_defined() {
    let mut h = Harness::new();
    let point = h.process.alloc(8);
    let (pre, post) = h.call("NtUserGetCursorPos", &[point.as_u64()], 1);
    assert!(pre.is_clean());
    assert!(post.is_clean());
    assert_eq!(
        h.process.events_of(ShadowKind::CheckAddressable),
        vec![AddressRange::new(point, 8)]
    );
    assert_eq!(
        h.process.events_of(ShadowKind::MarkWritten),
        vec![AddressRange::new(point, 8)]
    );
    assert!(h.process.is_defined(AddressRange::new(point, 8)));
    assert!(h.process.violations().is_empty());
}

#[test]
fn one_byte_short_output_is_unaddressable() {
    let mut h = Harness::new();
    let point = h.process.alloc(7);
    h.pre("NtUserGetCursorPos", &[point.as_u64()]);
    let violations = h.process.violations();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].kind, ViolationKind::Unaddressable);
    assert_eq!(violations[0].addr, point + 7);
    assert_eq!(violations[0].call, "NtUserGetCursorPos");
}

#[test]
fn null_arguments_are_skipped() {
    let mut h = Harness::new();
    let (pre, post) = h.call("NtUserGetCursorPos", &[0], 1);
    assert!(pre.is_clean() && post.is_clean());
    assert!(h.process.events().is_empty());
}

#[test]
fn input_size_follows_the_size_argument() {
    let mut h = Harness::new();
    let buf = h.process.alloc_bytes(&[0x5A; 32]);
    h.pre("NtUserCopyIn", &[buf.as_u64(), 32]);
    assert_eq!(
        h.process.events_of(ShadowKind::CheckDefined),
        vec![AddressRange::new(buf, 32)]
    );
    assert!(h.process.violations().is_empty());

    h.process.clear_log();
    h.pre("NtUserCopyIn", &[buf.as_u64(), 64]);
    assert_eq!(h.process.violations()[0].kind, ViolationKind::Unaddressable);
}

#[test]
fn partially_initialized_input_is_undefined() {
    let mut h = Harness::new();
    let buf = h.process.alloc(16);
    h.process.write_u64(buf, 1);
    h.pre("NtUserCopyIn", &[buf.as_u64(), 16]);
    let violations = h.process.violations();
    assert_eq!(violations[0].kind, ViolationKind::Undefined);
    assert_eq!(violations[0].addr, buf + 8);
}

#[test]
fn element_size_can_come_from_another_argument() {
    let mut h = Harness::new();
    let buf = h.process.alloc_bytes(&[0; 24]);
    h.pre("NtUserCopyElems", &[buf.as_u64(), 3, 8]);
    assert_eq!(
        h.process.events_of(ShadowKind::CheckDefined),
        vec![AddressRange::new(buf, 24)]
    );
}

#[test]
fn negative_counts_are_rejected() {
    let mut h = Harness::new();
    let buf = h.process.alloc_bytes(&[0; 8]);
    let report = h.pre("NtUserCopyIn", &[buf.as_u64(), u64::MAX]);
    assert!(matches!(
        report.diagnostics.as_slice(),
        [Diagnostic::SizeRejected { raw: u64::MAX, .. }]
    ));
    assert!(h.process.events().is_empty());
}

#[test]
fn overflowing_products_are_rejected() {
    let mut h = Harness::new();
    let buf = h.process.alloc_bytes(&[0; 8]);
    let report = h.pre("NtUserCopyElems", &[buf.as_u64(), 1 << 29, 1 << 29]);
    assert!(matches!(
        report.diagnostics.as_slice(),
        [Diagnostic::SizeRejected { .. }]
    ));
}

#[test]
fn return_value_sizes_the_written_text() {
    let mut h = Harness::new();
    let text = h.process.alloc(64);
    let args = [0, text.as_u64(), 32];
    h.pre("NtUserGetText", &args);
    assert_eq!(
        h.process.events_of(ShadowKind::CheckAddressable),
        vec![AddressRange::new(text, 64)]
    );
    h.post("NtUserGetText", &args, 5);
    assert_eq!(
        h.process.events_of(ShadowKind::MarkWritten),
        vec![AddressRange::new(text, 10)]
    );
}

#[test]
fn return_value_beyond_capacity_is_clamped() {
    let mut h = Harness::new();
    let text = h.process.alloc(64);
    let args = [0, text.as_u64(), 32];
    h.pre("NtUserGetText", &args);
    let report = h.post("NtUserGetText", &args, 1000);
    assert!(matches!(
        report.diagnostics.as_slice(),
        [Diagnostic::ShapeClamped {
            declared: 2000,
            bytes: 64,
            ..
        }]
    ));
    assert_eq!(
        h.process.events_of(ShadowKind::MarkWritten),
        vec![AddressRange::new(text, 64)]
    );
}

#[test]
fn in_out_buffers_split_capacity_and_length() {
    let mut h = Harness::new();
    let buf = h.process.alloc(32);
    h.process.write(buf, &[1; 12]);
    let len = h.process.alloc(4);
    h.process.write_u32(len, 12);
    let args = [buf.as_u64(), 32, len.as_u64()];

    h.pre("NtUserInOut", &args);
    assert_eq!(
        h.process.events_of(ShadowKind::CheckAddressable),
        vec![AddressRange::new(buf, 32)]
    );
    assert!(
        h.process
            .events_of(ShadowKind::CheckDefined)
            .contains(&AddressRange::new(buf, 12))
    );
    assert!(h.process.violations().is_empty());

    h.process.kernel_write_u32(len, 20);
    h.post("NtUserInOut", &args, 0);
    assert!(
        h.process
            .events_of(ShadowKind::MarkWritten)
            .contains(&AddressRange::new(buf, 20))
    );
    assert!(h.process.is_defined(AddressRange::new(buf, 20)));
}

#[test]
fn header_sizes_are_limited() {
    let mut h = Harness::new();
    let buf = h.process.alloc(0x40);
    h.process.write(buf, &[0; 0x40]);
    h.process.write_u32(buf, 0x1000);
    let report = h.pre("NtUserHeader", &[buf.as_u64()]);
    assert!(matches!(
        report.diagnostics.as_slice(),
        [Diagnostic::ShapeClamped {
            declared: 0x1000,
            bytes: 0x40,
            ..
        }]
    ));
    assert!(
        h.process
            .events_of(ShadowKind::CheckDefined)
            .contains(&AddressRange::new(buf, 0x40))
    );
    assert!(h.process.violations().is_empty());
}

#[test]
fn unreadable_header_is_reported() {
    let mut h = Harness::new();
    let report = h.pre("NtUserHeader", &[0x7FFF_0000]);
    assert!(
        report
            .diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::Unreadable { .. }))
    );
}

#[test]
fn failed_calls_are_not_marked() {
    let mut h = Harness::new();
    let point = h.process.alloc(8);
    let (_, post) = h.call("NtUserGetCursorPos", &[point.as_u64()], 0);
    assert_eq!(post.outcome, Outcome::Failed);
    assert!(h.process.events_of(ShadowKind::MarkWritten).is_empty());
    assert!(!h.process.is_defined(AddressRange::new(point, 8)));
}

#[test]
fn small_write_last_survives_failure() {
    let mut h = Harness::new();
    let big = h.process.alloc(16);
    let small = h.process.alloc(4);
    let args = [big.as_u64(), small.as_u64()];
    let (_, post) = h.call("NtUserLastWritten", &args, STATUS_ACCESS_DENIED);
    assert_eq!(post.outcome, Outcome::Failed);
    assert_eq!(
        h.process.events_of(ShadowKind::MarkWritten),
        vec![AddressRange::new(small, 4)]
    );
}

#[test]
fn unknown_calls_are_reported_once() {
    let mut h = Harness::new();
    let env = CallEnv::new(&h.process, &h.process);
    let report = h
        .engine
        .on_call_pre(&mut h.thread, &env, CallId::new(0x1FFF), &[1, 2]);
    assert_eq!(report.outcome, Outcome::Unknown);
    assert_eq!(
        report.diagnostics,
        vec![Diagnostic::UnknownCall(CallId::new(0x1FFF))]
    );
    let report = h
        .engine
        .on_call_post(&mut h.thread, &env, CallId::new(0x1FFF), &[1, 2], 0);
    assert_eq!(report.outcome, Outcome::Unknown);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn unmodeled_calls_are_flagged() {
    let mut h = Harness::new();
    let report = h.pre("NtUserUnmodeled", &[0, 0]);
    assert!(report.is_clean());
    assert_eq!(
        report.diagnostics,
        vec![Diagnostic::PartiallyModeled {
            what: "NtUserUnmodeled"
        }]
    );
}

#[test]
fn post_without_pre_still_checks() {
    let mut h = Harness::new();
    let point = h.process.alloc(8);
    let report = h.post("NtUserGetCursorPos", &[point.as_u64()], 1);
    assert_eq!(
        report.diagnostics,
        vec![Diagnostic::UnpairedPost(h.id("NtUserGetCursorPos"))]
    );
    assert!(h.process.is_defined(AddressRange::new(point, 8)));
}

#[test]
fn contexts_do_not_outlive_the_call() {
    let mut h = Harness::new();
    let point = h.process.alloc(8);
    h.pre("NtUserGetCursorPos", &[point.as_u64()]);
    assert_eq!(
        h.thread.in_flight().map(CallContext::phase),
        Some(CallPhase::PreChecked)
    );
    h.post("NtUserGetCursorPos", &[point.as_u64()], 1);
    assert!(h.thread.in_flight().is_none());
}

#[test]
fn oversized_ranges_are_clamped() {
    let options = EngineOptions {
        max_check_size: 16,
        ..EngineOptions::default()
    };
    let engine = Engine::builder(options)
        .contracts(CONTRACTS)
        .build(&FixedNumbers::new(NUMBERS), OsVersion::new(Release::Win7, 1))
        .unwrap();
    let process = FakeProcess::new();
    let buf = process.alloc_bytes(&[0; 32]);
    let mut thread = engine.thread_init();
    let env = CallEnv::new(&process, &process);
    let report = engine.on_call_pre(
        &mut thread,
        &env,
        engine.resolve_name("NtUserCopyIn").unwrap(),
        &[buf.as_u64(), 32],
    );
    assert!(matches!(
        report.diagnostics.as_slice(),
        [Diagnostic::ShapeClamped {
            declared: 32,
            bytes: 16,
            ..
        }]
    ));
    assert_eq!(
        process.events_of(ShadowKind::CheckDefined),
        vec![AddressRange::new(buf, 16)]
    );
}
