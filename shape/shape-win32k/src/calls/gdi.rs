//! Graphics calls whose buffers are sized by products of arguments, by
//! flags, or by headers inside them.

use crate::layouts::{
    DRIVER_INFO_2W, LOGPALETTE_HEADER, PALETTEENTRY, PTR, enum_logfont_dv as elf, logfont as lf,
};
use crate::types::logfont;
use log::{debug, warn};
use shape_engine::{
    Access, AddressRange, CallContext, CallHandler, Checker, Diagnostic, VersionGate,
};

/// `NtGdiCreatePaletteInternal(pLogPal, cEntries)`: a `LOGPALETTE` with
/// `cEntries` entries.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CreatePaletteInternal;

impl CallHandler for CreatePaletteInternal {
    fn claims(&self) -> &[usize] {
        &[0]
    }

    fn pre(&self, cx: &mut Checker<'_>, _ctx: &mut CallContext) {
        let entries = u64::from(cx.arg_u32(1));
        cx.check_defined(
            AddressRange::new(cx.arg_addr(0), LOGPALETTE_HEADER + entries * PALETTEENTRY),
            "LOGPALETTE",
        );
    }
}

/// `NtGdiCheckBitmapBits(hdc, hColorTransform, pvBits, bmFormat, dwWidth,
/// dwHeight, dwStride, paResults)`: one result byte per pixel.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CheckBitmapBits;

impl CheckBitmapBits {
    const RESULTS: usize = 7;

    fn run(cx: &mut Checker<'_>) {
        let width = u64::from(cx.arg_u32(4));
        let height = u64::from(cx.arg_u32(5));
        let results = cx.arg_addr(Self::RESULTS);
        cx.check(
            Access::Write,
            AddressRange::new(results, width * height),
            "paResults",
        );
    }
}

impl CallHandler for CheckBitmapBits {
    fn claims(&self) -> &[usize] {
        &[Self::RESULTS]
    }

    fn pre(&self, cx: &mut Checker<'_>, _ctx: &mut CallContext) {
        Self::run(cx);
    }

    fn post(&self, cx: &mut Checker<'_>, _ctx: &mut CallContext) {
        Self::run(cx);
    }
}

/// `NtGdiDoPalette(hpal, iStart, cEntries, pPalEntries, iFunc, bInbound)`:
/// the entries are read when `bInbound` is set and filled in otherwise.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DoPalette;

impl DoPalette {
    const ENTRIES: usize = 3;

    fn run(cx: &mut Checker<'_>) {
        // cEntries is a WORD.
        let count = cx.arg(2) & 0xFFFF;
        let access = if cx.arg_u32(5) == 0 {
            Access::Write
        } else {
            Access::Read
        };
        let entries = cx.arg_addr(Self::ENTRIES);
        cx.check(
            access,
            AddressRange::new(entries, count * PALETTEENTRY),
            "pPalEntries",
        );
    }
}

impl CallHandler for DoPalette {
    fn claims(&self) -> &[usize] {
        &[Self::ENTRIES]
    }

    fn pre(&self, cx: &mut Checker<'_>, _ctx: &mut CallContext) {
        Self::run(cx);
    }

    fn post(&self, cx: &mut Checker<'_>, _ctx: &mut CallContext) {
        Self::run(cx);
    }
}

const ETO_PDY: u32 = 0x2000;

/// `NtGdiExtTextOutW(hdc, x, y, flags, lprc, pwsz, cwc, pdx, dwCodePage)`.
///
/// The rules cover the string and one advance per character; with
/// `ETO_PDY` the kernel also reads a vertical advance per character, stored
/// after the horizontal ones.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ExtTextOut;

impl CallHandler for ExtTextOut {
    fn pre(&self, cx: &mut Checker<'_>, _ctx: &mut CallContext) {
        if cx.arg_u32(3) & ETO_PDY == 0 {
            return;
        }
        let chars = u64::from(cx.arg_u32(6));
        let advances = cx.arg_addr(7);
        cx.check_defined(
            AddressRange::new(advances + chars * 4, chars * 4),
            "pdx vertical advances",
        );
    }
}

/// `NtGdiOpenDCW`: Vista inserted `bDisplay`, moving the driver info and
/// the user-mode driver handle one slot up.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct OpenDc {
    slots: [usize; 2],
}

impl OpenDc {
    #[must_use]
    pub const fn for_gate(gate: &VersionGate) -> Self {
        let slots = if gate.vista_or_later() { [6, 7] } else { [5, 6] };
        Self { slots }
    }

    fn run(&self, cx: &mut Checker<'_>) {
        let [driver, pump] = self.slots;
        let driver = cx.arg_addr(driver);
        let pump = cx.arg_addr(pump);
        cx.check(
            Access::Read,
            AddressRange::new(driver, DRIVER_INFO_2W),
            "DRIVER_INFO_2W",
        );
        cx.check(Access::Write, AddressRange::new(pump, PTR), "pUMdhpdev");
    }
}

impl CallHandler for OpenDc {
    fn claims(&self) -> &[usize] {
        &self.slots
    }

    fn pre(&self, cx: &mut Checker<'_>, _ctx: &mut CallContext) {
        self.run(cx);
    }

    fn post(&self, cx: &mut Checker<'_>, _ctx: &mut CallContext) {
        self.run(cx);
    }
}

/// `NtGdiHfontCreate(pelfw, cjElfw, lft, fl, pvCliData)`: an
/// `ENUMLOGFONTEXDVW` whose design vector is sized by its own axis count.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct HfontCreate;

impl CallHandler for HfontCreate {
    fn claims(&self) -> &[usize] {
        &[0]
    }

    fn pre(&self, cx: &mut Checker<'_>, _ctx: &mut CallContext) {
        let base = cx.arg_addr(0);
        if base.is_null() {
            return;
        }
        let total = u64::from(cx.arg_u32(1));
        cx.check_addressable(AddressRange::new(base, total), "ENUMLOGFONTEXDVW");
        logfont(cx, base, lf::SIZE, Access::Read);
        cx.wide_string(
            Access::Read,
            base + elf::FULL_NAME,
            Some(elf::FULL_NAME_BYTES),
            "ENUMLOGFONTEXW.elfFullName",
        );
        cx.wide_string(
            Access::Read,
            base + elf::STYLE,
            Some(elf::NAME_BYTES),
            "ENUMLOGFONTEXW.elfStyle",
        );
        cx.wide_string(
            Access::Read,
            base + elf::SCRIPT,
            Some(elf::NAME_BYTES),
            "ENUMLOGFONTEXW.elfScript",
        );

        let Some(mut axes) = cx.read_u32(base + elf::AXES, "DESIGNVECTOR.dvNumAxes") else {
            return;
        };
        if axes > elf::MAX_AXES {
            cx.clamped(
                "DESIGNVECTOR.dvNumAxes",
                u64::from(axes),
                u64::from(elf::MAX_AXES),
            );
            axes = elf::MAX_AXES;
        }
        let vector = elf::DV_VALUES + u64::from(axes) * 4;
        let expected = elf::DESIGN_VECTOR + vector;
        if expected != total {
            cx.note(Diagnostic::SizeMismatch {
                what: "ENUMLOGFONTEXDVW",
                expected,
                actual: total,
            });
        }
        cx.check_defined(
            AddressRange::new(base + elf::DESIGN_VECTOR, vector),
            "DESIGNVECTOR",
        );
    }
}

/// `NtGdiCreateDIBSection(hdc, hSectionApp, dwOffset, pbmi, iUsage,
/// cjHeader, fl, dwColorSpace, ppvBits)`: the kernel maps the new bitmap's
/// pixels into the process and stores their address in `*ppvBits`. The
/// whole mapping starts out defined.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CreateDibSection;

impl CreateDibSection {
    const BITS: usize = 8;
}

impl CallHandler for CreateDibSection {
    fn pre(&self, _cx: &mut Checker<'_>, _ctx: &mut CallContext) {}

    fn post(&self, cx: &mut Checker<'_>, _ctx: &mut CallContext) {
        let out = cx.arg_addr(Self::BITS);
        if out.is_null() {
            return;
        }
        let Some(bits) = cx.read_ptr(out, "ppvBits") else {
            return;
        };
        if bits.is_null() {
            return;
        }
        match cx.region_containing(bits) {
            Some(mapping) => {
                debug!("{}: DIB section mapped at {mapping}", cx.call());
                cx.mark_defined(mapping, "DIB section");
            }
            None => warn!("{}: no mapping found for DIB section at {bits}", cx.call()),
        }
    }
}
