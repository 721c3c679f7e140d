use shape_engine::*;
use shape_testing::{FakeProcess, SequentialNumbers, ShadowKind, wide};

const ETO_PDY: u64 = 0x2000;

fn build(release: Release, sp: u16) -> Engine {
    shape_win32k::engine(
        &SequentialNumbers::new(),
        OsVersion::new(release, sp),
        EngineOptions::default(),
    )
    .unwrap()
}

#[test]
fn inbound_palette_entries_are_read() {
    let engine = build(Release::Win7, 1);
    let process = FakeProcess::new();
    let entries = process.alloc(12);
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let id = engine.resolve_name("NtGdiDoPalette").unwrap();
    // The count's high word is not part of it.
    let args = [0x0008_0010, 0, 0xFFFF_0003, entries.as_u64(), 1, 1];

    engine.on_call_pre(&mut thread, &env, id, &args);
    assert_eq!(
        process.events_of(ShadowKind::CheckDefined),
        vec![AddressRange::new(entries, 12)]
    );
    engine.on_call_post(&mut thread, &env, id, &args, 3);
    assert!(process.events_of(ShadowKind::MarkWritten).is_empty());
}

#[test]
fn outbound_palette_entries_are_written() {
    let engine = build(Release::Win7, 1);
    let process = FakeProcess::new();
    let entries = process.alloc(12);
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let id = engine.resolve_name("NtGdiDoPalette").unwrap();
    let args = [0x0008_0010, 0, 3, entries.as_u64(), 2, 0];

    engine.on_call_pre(&mut thread, &env, id, &args);
    assert_eq!(
        process.events_of(ShadowKind::CheckAddressable),
        vec![AddressRange::new(entries, 12)]
    );
    engine.on_call_post(&mut thread, &env, id, &args, 3);
    assert_eq!(
        process.events_of(ShadowKind::MarkWritten),
        vec![AddressRange::new(entries, 12)]
    );
}

fn text_out_checks(flags: u64) -> Vec<AddressRange> {
    let engine = build(Release::Win7, 1);
    let process = FakeProcess::new();
    let text = process.alloc_bytes(&wide("ab"));
    let advances = process.alloc_bytes(&[1; 16]);
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let id = engine.resolve_name("NtGdiExtTextOutW").unwrap();
    let args = [0x0101_0010, 5, 5, flags, 0, text.as_u64(), 2, advances.as_u64(), 0];

    engine.on_call_pre(&mut thread, &env, id, &args);
    assert!(process.violations().is_empty());
    process
        .events_of(ShadowKind::CheckDefined)
        .into_iter()
        .filter(|range| range.start() >= advances && range.start() < advances + 16)
        .collect()
}

#[test]
fn vertical_advances_follow_the_horizontal_ones() {
    let checks = text_out_checks(ETO_PDY);
    let advances = checks[0].start();
    assert_eq!(
        checks,
        vec![
            AddressRange::new(advances, 8),
            AddressRange::new(advances + 8, 8)
        ]
    );
}

#[test]
fn plain_text_out_reads_one_advance_per_char() {
    let checks = text_out_checks(0);
    assert_eq!(checks.len(), 1);
    assert_eq!(checks[0].len(), 8);
}

fn open_dc_driver_check(release: Release, sp: u16, slot: usize) -> bool {
    let engine = build(release, sp);
    let process = FakeProcess::new();
    let driver = process.alloc_bytes(&[0; 48]);
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let id = engine.resolve_name("NtGdiOpenDCW").unwrap();
    let mut args = [0; 8];
    args[slot] = driver.as_u64();

    engine.on_call_pre(&mut thread, &env, id, &args);
    process
        .events_of(ShadowKind::CheckDefined)
        .contains(&AddressRange::new(driver, 48))
}

#[test]
fn driver_info_moved_one_slot_in_vista() {
    assert!(open_dc_driver_check(Release::Xp, 3, 5));
    assert!(open_dc_driver_check(Release::Vista, 2, 6));
    assert!(open_dc_driver_check(Release::Win7, 1, 6));
    assert!(!open_dc_driver_check(Release::Win7, 1, 5));
}

#[test]
fn palette_creation_reads_every_entry() {
    let engine = build(Release::Win7, 1);
    let process = FakeProcess::new();
    let palette = process.alloc(4 + 2 * 4);
    process.write_u32(palette, 0x0002_0300);
    process.write_u32(palette + 4, 0x00FF_00FF);
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let id = engine.resolve_name("NtGdiCreatePaletteInternal").unwrap();

    engine.on_call_pre(&mut thread, &env, id, &[palette.as_u64(), 2]);
    let violations = process.violations();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].addr, palette + 8);
}

#[test]
fn bitmap_check_results_are_one_byte_per_pixel() {
    let engine = build(Release::Win7, 1);
    let process = FakeProcess::new();
    let results = process.alloc(6);
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let id = engine.resolve_name("NtGdiCheckBitmapBits").unwrap();
    let args = [0x0101_0010, 0, 0, 0, 3, 2, 0, results.as_u64()];

    engine.on_call_pre(&mut thread, &env, id, &args);
    engine.on_call_post(&mut thread, &env, id, &args, 1);
    assert_eq!(
        process.events_of(ShadowKind::MarkWritten),
        vec![AddressRange::new(results, 6)]
    );
}

/// Maps an `ENUMLOGFONTEXDVW` of `total` bytes declaring `axes` design axes.
fn font_with_axes(process: &FakeProcess, total: usize, axes: u32) -> AppAddress {
    let font = process.alloc(total);
    process.write(font, &vec![0; total]);
    process.write_u32(font + 352, axes);
    font
}

#[test]
fn design_axes_beyond_the_maximum_are_clamped() {
    let engine = build(Release::Win7, 1);
    let process = FakeProcess::new();
    let font = font_with_axes(&process, 420, 20);
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let id = engine.resolve_name("NtGdiHfontCreate").unwrap();

    let report = engine.on_call_pre(&mut thread, &env, id, &[font.as_u64(), 420, 0, 0, 0]);
    assert_eq!(
        report.diagnostics,
        vec![Diagnostic::ShapeClamped {
            what: "DESIGNVECTOR.dvNumAxes",
            declared: 20,
            bytes: 16
        }]
    );
    assert!(
        process
            .events_of(ShadowKind::CheckDefined)
            .contains(&AddressRange::new(font + 348, 72))
    );
    assert!(process.violations().is_empty());
}

#[test]
fn font_size_disagreeing_with_its_design_vector_is_reported() {
    let engine = build(Release::Win7, 1);
    let process = FakeProcess::new();
    let font = font_with_axes(&process, 420, 2);
    let env = CallEnv::new(&process, &process);
    let mut thread = engine.thread_init();
    let id = engine.resolve_name("NtGdiHfontCreate").unwrap();

    let report = engine.on_call_pre(&mut thread, &env, id, &[font.as_u64(), 420, 0, 0, 0]);
    assert_eq!(
        report.diagnostics,
        vec![Diagnostic::SizeMismatch {
            what: "ENUMLOGFONTEXDVW",
            expected: 364,
            actual: 420
        }]
    );
    assert!(
        process
            .events_of(ShadowKind::CheckAddressable)
            .contains(&AddressRange::new(font, 420))
    );
    assert!(
        process
            .events_of(ShadowKind::CheckDefined)
            .contains(&AddressRange::new(font + 348, 16))
    );
}

fn create_dib_section(with_regions: bool) -> (FakeProcess, AppAddress) {
    let engine = build(Release::Win7, 1);
    let process = FakeProcess::new();
    let bits = process.alloc(4096);
    let out = process.alloc(8);
    let env = if with_regions {
        CallEnv::new(&process, &process).with_regions(&process)
    } else {
        CallEnv::new(&process, &process)
    };
    let mut thread = engine.thread_init();
    let id = engine.resolve_name("NtGdiCreateDIBSection").unwrap();
    let args = [0x0101_0010, 0, 0, 0, 0, 0, 0, 0, out.as_u64()];

    engine.on_call_pre(&mut thread, &env, id, &args);
    // The kernel may hand back an address inside the mapping.
    process.kernel_write(out, &(bits + 0x40).as_u64().to_le_bytes());
    let report = engine.on_call_post(&mut thread, &env, id, &args, 0x0505_0001);
    assert!(report.diagnostics.is_empty());
    assert_eq!(
        process.events_of(ShadowKind::MarkWritten),
        vec![AddressRange::new(out, 8)]
    );
    (process, bits)
}

#[test]
fn dib_section_mapping_is_defined_after_creation() {
    let (process, bits) = create_dib_section(true);
    assert_eq!(
        process.events_of(ShadowKind::MarkDefined),
        vec![AddressRange::new(bits, 4096)]
    );
}

#[test]
fn dib_section_without_region_lookup_stays_untouched() {
    let (process, _) = create_dib_section(false);
    assert!(process.events_of(ShadowKind::MarkDefined).is_empty());
}
