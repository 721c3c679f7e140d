use shape_engine::*;
use shape_testing::{FakeProcess, HandleLog, SequentialNumbers, ShadowKind};
use shape_win32k::usercall;

const RELEASES: [(Release, u16); 6] = [
    (Release::Win7, 1),
    (Release::Vista, 2),
    (Release::Vista, 1),
    (Release::Server2003, 2),
    (Release::Xp, 3),
    (Release::Win2000, 4),
];

fn options(track_handles: bool) -> EngineOptions {
    EngineOptions {
        track_handles,
        ..EngineOptions::default()
    }
}

fn table_opcode(name: &str, column: OpcodeColumn) -> Option<u16> {
    usercall::OPCODES
        .iter()
        .find(|row| row.name == name)
        .and_then(|row| row.opcode(column))
}

#[test]
fn builds_for_every_supported_release() {
    for (release, sp) in RELEASES {
        let numbers = SequentialNumbers::new();
        let engine = shape_win32k::engine(&numbers, OsVersion::new(release, sp), options(false))
            .unwrap_or_else(|err| panic!("{release:?} SP{sp}: {err}"));
        assert!(engine.resolve_name("NtUserGetDC").is_some());
        assert!(engine.resolve_name("NtGdiOpenDCW").is_some());
    }
}

#[test]
fn nt4_is_rejected() {
    let numbers = SequentialNumbers::new();
    let err = shape_win32k::engine(&numbers, OsVersion::new(Release::Nt4, 6), options(false)).err();
    assert!(matches!(err, Some(InitError::UnsupportedVersion(_))));
}

#[test]
fn routines_follow_the_release_column() {
    let numbers = SequentialNumbers::new();
    let w7 = shape_win32k::engine(&numbers, OsVersion::new(Release::Win7, 1), options(false))
        .unwrap();
    let xp = shape_win32k::engine(&numbers, OsVersion::new(Release::Xp, 3), options(false))
        .unwrap();

    let name = "NtUserCallOneParam.GETCURSORPOS";
    assert_eq!(w7.secondary_opcode(name), table_opcode(name, OpcodeColumn::Win7));
    assert_eq!(xp.secondary_opcode(name), table_opcode(name, OpcodeColumn::Xp));

    let pump = "NtUserCallNoParam.INIT_MESSAGE_PUMP";
    assert!(w7.resolve_name(pump).is_some());
    assert!(xp.resolve_name(pump).is_none());
}

#[test]
fn one_param_cursor_position_is_written() {
    let numbers = SequentialNumbers::new();
    let engine = shape_win32k::engine(&numbers, OsVersion::new(Release::Win7, 1), options(false))
        .unwrap();
    let primary = engine.resolve_name("NtUserCallOneParam").unwrap();
    let opcode = engine
        .secondary_opcode("NtUserCallOneParam.GETCURSORPOS")
        .unwrap();

    let process = FakeProcess::new();
    let point = process.alloc(8);
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let args = [point.as_u64(), u64::from(opcode)];

    let report = engine.on_call_pre(&mut thread, &env, primary, &args);
    assert_eq!(report.call, Some("NtUserCallOneParam.GETCURSORPOS"));
    engine.on_call_post(&mut thread, &env, primary, &args, 1);
    assert_eq!(
        process.events_of(ShadowKind::MarkWritten),
        vec![AddressRange::new(point, 8)]
    );
    assert!(process.violations().is_empty());
}

#[test]
fn release_dc_routine_releases_its_handle() {
    let numbers = SequentialNumbers::new();
    let engine = shape_win32k::engine(&numbers, OsVersion::new(Release::Xp, 3), options(true))
        .unwrap();
    let primary = engine.resolve_name("NtUserCallOneParam").unwrap();
    let opcode = engine
        .secondary_opcode("NtUserCallOneParam.RELEASEDC")
        .unwrap();

    let process = FakeProcess::new();
    let handles = HandleLog::default();
    let env = CallEnv::new(&process, &process).with_handles(&handles);
    let mut thread = engine.thread_init();
    let hdc = 0x0101_0055;
    let args = [hdc, u64::from(opcode)];

    engine.on_call_pre(&mut thread, &env, primary, &args);
    engine.on_call_post(&mut thread, &env, primary, &args, 1);
    assert_eq!(
        *handles.released.borrow(),
        vec![("NtUserCallOneParam.RELEASEDC", hdc)]
    );
}

#[test]
fn failed_release_dc_keeps_the_handle() {
    let numbers = SequentialNumbers::new();
    let engine = shape_win32k::engine(&numbers, OsVersion::new(Release::Win7, 1), options(true))
        .unwrap();
    let primary = engine.resolve_name("NtUserCallOneParam").unwrap();
    let opcode = engine
        .secondary_opcode("NtUserCallOneParam.RELEASEDC")
        .unwrap();

    let process = FakeProcess::new();
    let handles = HandleLog::default();
    let env = CallEnv::new(&process, &process).with_handles(&handles);
    let mut thread = engine.thread_init();
    let args = [0x0101_0055, u64::from(opcode)];

    engine.on_call_pre(&mut thread, &env, primary, &args);
    let report = engine.on_call_post(&mut thread, &env, primary, &args, 0);
    assert_eq!(report.outcome, Outcome::Failed);
    assert!(handles.released.borrow().is_empty());
}

#[test]
fn device_contexts_are_recorded_on_creation() {
    let numbers = SequentialNumbers::new();
    let engine = shape_win32k::engine(&numbers, OsVersion::new(Release::Win7, 1), options(true))
        .unwrap();
    let get_dc = engine.resolve_name("NtUserGetDC").unwrap();

    let process = FakeProcess::new();
    let handles = HandleLog::default();
    let env = CallEnv::new(&process, &process).with_handles(&handles);
    let mut thread = engine.thread_init();

    engine.on_call_pre(&mut thread, &env, get_dc, &[0]);
    engine.on_call_post(&mut thread, &env, get_dc, &[0], 0x0101_0077);
    assert_eq!(*handles.created.borrow(), vec![("NtUserGetDC", 0x0101_0077)]);
}

#[test]
fn unknown_routine_is_reported_through_its_primary() {
    let numbers = SequentialNumbers::new();
    let engine = shape_win32k::engine(&numbers, OsVersion::new(Release::Win7, 1), options(false))
        .unwrap();
    let primary = engine.resolve_name("NtUserCallNoParam").unwrap();

    let process = FakeProcess::new();
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let report = engine.on_call_pre(&mut thread, &env, primary, &[0x3FF]);
    assert_eq!(report.outcome, Outcome::Unknown);
    assert_eq!(report.call, Some("NtUserCallNoParam"));
}

#[test]
fn window_text_atoms_are_not_dereferenced() {
    let numbers = SequentialNumbers::new();
    let engine = shape_win32k::engine(&numbers, OsVersion::new(Release::Win7, 1), options(false))
        .unwrap();
    let set_text = engine.resolve_name("NtUserDefSetText").unwrap();

    let process = FakeProcess::new();
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let args = [0x0001_0010, 0xC001];
    let report = engine.on_call_pre(&mut thread, &env, set_text, &args);
    assert!(report.diagnostics.is_empty());
    assert!(process.events().is_empty());
    assert!(process.violations().is_empty());
}

#[test]
fn window_text_content_must_be_defined() {
    let numbers = SequentialNumbers::new();
    let engine = shape_win32k::engine(&numbers, OsVersion::new(Release::Win7, 1), options(false))
        .unwrap();
    let set_text = engine.resolve_name("NtUserDefSetText").unwrap();

    let process = FakeProcess::new();
    let text = process.alloc(16);
    process.write(text, &[b'h', 0, b'i', 0]);
    let header = process.alloc(16);
    process.write_u32(header, 4);
    process.write_u32(header + 4, 16);
    process.write_u64(header + 8, text.as_u64());

    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    engine.on_call_pre(&mut thread, &env, set_text, &[0x0001_0010, header.as_u64()]);
    assert!(
        process
            .events_of(ShadowKind::CheckDefined)
            .contains(&AddressRange::new(text, 4))
    );
    assert!(process.violations().is_empty());
}

#[test]
fn display_settings_change_is_partially_modeled() {
    let numbers = SequentialNumbers::new();
    let engine = shape_win32k::engine(&numbers, OsVersion::new(Release::Win7, 1), options(false))
        .unwrap();
    let change = engine.resolve_name("NtUserChangeDisplaySettings").unwrap();

    let process = FakeProcess::new();
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    // lParam points nowhere the checker may look.
    let args = [0, 0, 0, 0x4, 0x7FFF_0000];
    let report = engine.on_call_pre(&mut thread, &env, change, &args);
    assert_eq!(
        report.diagnostics,
        vec![Diagnostic::PartiallyModeled {
            what: "NtUserChangeDisplaySettings"
        }]
    );
    assert!(process.events().is_empty());
}

#[test]
fn locale_name_is_written_up_to_its_terminator() {
    let numbers = SequentialNumbers::new();
    let engine = shape_win32k::engine(&numbers, OsVersion::new(Release::Win7, 1), options(false))
        .unwrap();
    let nls = engine.resolve_name("NtWow64CsrBasepNlsGetUserInfo").unwrap();

    let process = FakeProcess::new();
    let buffer = process.alloc(64);
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let args = [buffer.as_u64(), 64];
    engine.on_call_pre(&mut thread, &env, nls, &args);
    assert_eq!(
        process.events_of(ShadowKind::CheckAddressable),
        vec![AddressRange::new(buffer, 64)]
    );
    process.kernel_write(buffer, &shape_testing::wide("en-US"));
    engine.on_call_post(&mut thread, &env, nls, &args, 0);
    assert_eq!(
        process.events_of(ShadowKind::MarkWritten),
        vec![AddressRange::new(buffer, 12)]
    );
}

#[test]
fn activation_context_creation_is_partially_modeled() {
    let numbers = SequentialNumbers::new();
    let engine = shape_win32k::engine(&numbers, OsVersion::new(Release::Win7, 1), options(false))
        .unwrap();
    let create = engine.resolve_name("NtWow64CsrBasepCreateActCtx").unwrap();

    let process = FakeProcess::new();
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let report = engine.on_call_pre(&mut thread, &env, create, &[0x0200_0000]);
    assert_eq!(
        report.diagnostics,
        vec![Diagnostic::PartiallyModeled {
            what: "NtWow64CsrBasepCreateActCtx"
        }]
    );
}
