use shape_engine::*;
use shape_testing::{FakeProcess, SequentialNumbers, ShadowKind};

const SPI_GETBEEP: u64 = 0x0001;
const SPI_GETNONCLIENTMETRICS: u64 = 0x0029;
const SPI_GETICONMETRICS: u64 = 0x002D;
const SPI_GETSERIALKEYS: u64 = 0x003E;
const SPI_SETSERIALKEYS: u64 = 0x003F;
const SPI_GETSOUNDSENTRY: u64 = 0x0040;
const SPI_SETHIGHCONTRAST: u64 = 0x0043;
const SPI_GETHUNGAPPTIMEOUT: u64 = 0x0078;
const SPI_SETHUNGAPPTIMEOUT: u64 = 0x0079;
const SPI_SETMOUSEDOCKTHRESHOLD: u64 = 0x007F;
const UNDESCRIBED_ACTION: u64 = 0x0007;

fn build(release: Release, sp: u16) -> Engine {
    shape_win32k::engine(
        &SequentialNumbers::new(),
        OsVersion::new(release, sp),
        EngineOptions::default(),
    )
    .unwrap()
}

fn spi(engine: &Engine) -> CallId {
    engine.resolve_name("NtUserSystemParametersInfo").unwrap()
}

#[test]
fn get_beep_writes_a_bool() {
    let engine = build(Release::Win7, 1);
    let process = FakeProcess::new();
    let pv = process.alloc(4);
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let args = [SPI_GETBEEP, 0, pv.as_u64(), 0];

    engine.on_call_pre(&mut thread, &env, spi(&engine), &args);
    assert_eq!(
        process.events_of(ShadowKind::CheckAddressable),
        vec![AddressRange::new(pv, 4)]
    );
    engine.on_call_post(&mut thread, &env, spi(&engine), &args, 1);
    assert_eq!(
        process.events_of(ShadowKind::MarkWritten),
        vec![AddressRange::new(pv, 4)]
    );
}

#[test]
fn failed_query_writes_nothing() {
    let engine = build(Release::Win7, 1);
    let process = FakeProcess::new();
    let pv = process.alloc(4);
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let args = [SPI_GETBEEP, 0, pv.as_u64(), 0];

    engine.on_call_pre(&mut thread, &env, spi(&engine), &args);
    let report = engine.on_call_post(&mut thread, &env, spi(&engine), &args, 0);
    assert_eq!(report.outcome, Outcome::Failed);
    assert!(process.events_of(ShadowKind::MarkWritten).is_empty());
}

#[test]
fn undescribed_action_is_partially_modeled() {
    let engine = build(Release::Win7, 1);
    let process = FakeProcess::new();
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let args = [UNDESCRIBED_ACTION, 0, 0, 0];

    let report = engine.on_call_pre(&mut thread, &env, spi(&engine), &args);
    assert_eq!(
        report.diagnostics,
        vec![Diagnostic::PartiallyModeled {
            what: "SystemParametersInfo action"
        }]
    );
    assert!(process.events().is_empty());
}

fn nonclient_metrics_post(release: Release, sp: u16) -> Vec<String> {
    let engine = build(release, sp);
    let process = FakeProcess::new();
    let metrics = process.alloc(504);
    process.write_u32(metrics, 504);
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let args = [SPI_GETNONCLIENTMETRICS, 504, metrics.as_u64(), 0];

    engine.on_call_pre(&mut thread, &env, spi(&engine), &args);
    assert!(process.violations().is_empty());
    process.clear_log();
    engine.on_call_post(&mut thread, &env, spi(&engine), &args, 1);
    process
        .events()
        .into_iter()
        .filter(|event| {
            event.kind == ShadowKind::MarkWritten
                && event.range == AddressRange::new(metrics + 500, 4)
        })
        .map(|event| event.what)
        .collect()
}

#[test]
fn padded_border_is_opaque_before_vista() {
    assert_eq!(
        nonclient_metrics_post(Release::Xp, 3),
        vec!["NONCLIENTMETRICSW beyond known layout"]
    );
}

#[test]
fn padded_border_is_a_field_from_vista_on() {
    assert_eq!(
        nonclient_metrics_post(Release::Vista, 2),
        vec!["NONCLIENTMETRICSW.iPaddedBorderWidth"]
    );
    assert_eq!(
        nonclient_metrics_post(Release::Win7, 1),
        vec!["NONCLIENTMETRICSW.iPaddedBorderWidth"]
    );
}

#[test]
fn nonclient_metrics_fonts_are_written_post_call() {
    let engine = build(Release::Win7, 1);
    let process = FakeProcess::new();
    let metrics = process.alloc(504);
    process.write_u32(metrics, 504);
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let args = [SPI_GETNONCLIENTMETRICS, 504, metrics.as_u64(), 0];

    engine.on_call_pre(&mut thread, &env, spi(&engine), &args);
    engine.on_call_post(&mut thread, &env, spi(&engine), &args, 1);
    let written = process.events_of(ShadowKind::MarkWritten);
    // Integers ahead of lfCaptionFont, then the caption font's fixed part.
    assert!(written.contains(&AddressRange::new(metrics, 24)));
    assert!(written.contains(&AddressRange::new(metrics + 24, 28)));
}

#[test]
fn hung_app_timeout_is_queried_through_a_pointer() {
    let engine = build(Release::Win7, 1);
    let process = FakeProcess::new();
    let pv = process.alloc(4);
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let args = [SPI_GETHUNGAPPTIMEOUT, 0, pv.as_u64(), 0];

    let report = engine.on_call_pre(&mut thread, &env, spi(&engine), &args);
    assert!(report.diagnostics.is_empty());
    assert_eq!(
        process.events_of(ShadowKind::CheckAddressable),
        vec![AddressRange::new(pv, 4)]
    );
    engine.on_call_post(&mut thread, &env, spi(&engine), &args, 1);
    assert_eq!(
        process.events_of(ShadowKind::MarkWritten),
        vec![AddressRange::new(pv, 4)]
    );
}

#[test]
fn hung_app_timeout_is_set_inline() {
    let engine = build(Release::Win7, 1);
    let process = FakeProcess::new();
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let args = [SPI_SETHUNGAPPTIMEOUT, 5000, 0, 0];

    let report = engine.on_call_pre(&mut thread, &env, spi(&engine), &args);
    assert!(report.diagnostics.is_empty());
    engine.on_call_post(&mut thread, &env, spi(&engine), &args, 1);
    assert!(process.events().is_empty());
}

#[test]
fn dock_threshold_is_read_from_a_pointer() {
    let engine = build(Release::Win7, 1);
    let process = FakeProcess::new();
    let pv = process.alloc_bytes(&96u32.to_le_bytes());
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let args = [SPI_SETMOUSEDOCKTHRESHOLD, 0, pv.as_u64(), 0];

    let report = engine.on_call_pre(&mut thread, &env, spi(&engine), &args);
    assert!(report.diagnostics.is_empty());
    assert_eq!(
        process.events_of(ShadowKind::CheckDefined),
        vec![AddressRange::new(pv, 4)]
    );
    assert!(process.violations().is_empty());
}

#[test]
fn icon_metrics_font_and_tail_are_written() {
    let engine = build(Release::Win7, 1);
    let process = FakeProcess::new();
    let metrics = process.alloc(116);
    process.write_u32(metrics, 116);
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let args = [SPI_GETICONMETRICS, 116, metrics.as_u64(), 0];

    engine.on_call_pre(&mut thread, &env, spi(&engine), &args);
    assert_eq!(
        process.events_of(ShadowKind::CheckAddressable),
        vec![AddressRange::new(metrics, 116)]
    );
    process.clear_log();
    engine.on_call_post(&mut thread, &env, spi(&engine), &args, 1);
    let written = process.events_of(ShadowKind::MarkWritten);
    // iHorzSpacing .. iTitleWrap, then the font's integers.
    assert!(written.contains(&AddressRange::new(metrics, 16)));
    assert!(written.contains(&AddressRange::new(metrics + 16, 28)));
    assert!(written.contains(&AddressRange::new(metrics + 108, 8)));
}

#[test]
fn serial_keys_size_is_limited_to_the_structure() {
    let engine = build(Release::Win7, 1);
    let process = FakeProcess::new();
    let keys = process.alloc(40);
    process.write_u32(keys, 0x0100_0000);
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let args = [SPI_GETSERIALKEYS, 0, keys.as_u64(), 0];

    let report = engine.on_call_pre(&mut thread, &env, spi(&engine), &args);
    assert_eq!(
        report.diagnostics,
        vec![Diagnostic::ShapeClamped {
            what: "SERIALKEYSW",
            declared: 0x0100_0000,
            bytes: 40
        }]
    );
    assert_eq!(
        process.events_of(ShadowKind::CheckAddressable),
        vec![AddressRange::new(keys, 40)]
    );
    assert!(process.violations().is_empty());
}

#[test]
fn serial_keys_port_names_are_read() {
    let engine = build(Release::Win7, 1);
    let process = FakeProcess::new();
    let port = process.alloc_wide("COM1");
    let keys = process.alloc(40);
    process.write(keys, &[0; 40]);
    process.write_u32(keys, 40);
    process.write_u64(keys + 16, port.as_u64());
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let args = [SPI_SETSERIALKEYS, 0, keys.as_u64(), 0];

    engine.on_call_pre(&mut thread, &env, spi(&engine), &args);
    let defined = process.events_of(ShadowKind::CheckDefined);
    assert!(defined.contains(&AddressRange::new(keys, 40)));
    assert!(defined.contains(&AddressRange::new(port, 10)));
    assert!(process.violations().is_empty());
}

#[test]
fn embedded_scheme_name_is_sized_by_its_terminator() {
    let engine = build(Release::Win7, 1);
    let process = FakeProcess::new();
    let scheme = process.alloc_wide("High Contrast Black");
    let contrast = process.alloc(16);
    process.write_u32(contrast, 16);
    process.write_u32(contrast + 4, 1);
    process.write_u64(contrast + 8, scheme.as_u64());
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let args = [SPI_SETHIGHCONTRAST, 16, contrast.as_u64(), 0];

    engine.on_call_pre(&mut thread, &env, spi(&engine), &args);
    let defined = process.events_of(ShadowKind::CheckDefined);
    assert!(defined.contains(&AddressRange::new(contrast, 16)));
    assert!(defined.contains(&AddressRange::new(scheme, 40)));
    assert!(process.violations().is_empty());
}

#[test]
fn sound_sentry_too_small_for_its_string_pointer_skips_it() {
    let engine = build(Release::Win7, 1);
    let process = FakeProcess::new();
    let sentry = process.alloc(40);
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let args = [SPI_GETSOUNDSENTRY, 40, sentry.as_u64(), 0];

    let report = engine.on_call_pre(&mut thread, &env, spi(&engine), &args);
    assert!(report.diagnostics.is_empty());
    assert_eq!(
        process.events_of(ShadowKind::CheckAddressable),
        vec![AddressRange::new(sentry, 40)]
    );
    engine.on_call_post(&mut thread, &env, spi(&engine), &args, 1);
    assert_eq!(
        process.events_of(ShadowKind::MarkWritten),
        vec![AddressRange::new(sentry, 40)]
    );
}
