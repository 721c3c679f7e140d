//! # Font and Metrics Structures
//!
//! `LOGFONTW` is plain integers followed by a face name whose terminator,
//! not the array size, ends the meaningful part. `NONCLIENTMETRICSW` and
//! `ICONMETRICSW` embed `LOGFONTW`s between runs of integers and carry a
//! `cbSize` header.
//!
//! ```text
//! NONCLIENTMETRICSW
//!   0 ┌──────────────┐ cbSize .. iCaptionHeight
//!  24 ├──────────────┤ lfCaptionFont
//! 116 ├──────────────┤ iSmCaptionWidth, iSmCaptionHeight
//! 124 ├──────────────┤ lfSmCaptionFont
//! 216 ├──────────────┤ iMenuWidth, iMenuHeight
//! 224 ├──────────────┤ lfMenuFont
//! 316 ├──────────────┤ lfStatusFont
//! 408 ├──────────────┤ lfMessageFont
//! 500 ├──────────────┤ iPaddedBorderWidth (Vista and later)
//! 504 └──────────────┘
//! ```
//!
//! The metrics structures are walked region by region up to the smaller of
//! the declared size and the layout the running release knows. Anything
//! declared beyond that is opaque: it must be addressable and is marked
//! written, but no field inside it is interpreted.

use super::Snapshot;
use crate::layouts::{icon_metrics as im, logfont as lf, nonclient_metrics as ncm};
use shape_engine::{Access, AddressRange, AppAddress, Checker, TypeHandler, TypeTarget, VersionGate};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LogFont;

impl TypeHandler for LogFont {
    fn check(&self, cx: &mut Checker<'_>, target: &TypeTarget) {
        logfont(cx, target.base, target.size.unwrap_or(0), target.access);
    }
}

/// Checks a `LOGFONTW` of `size` bytes; zero means the full structure.
pub(crate) fn logfont(cx: &mut Checker<'_>, base: AppAddress, size: u64, access: Access) {
    let size = if size == 0 { lf::SIZE } else { size };
    if (cx.is_pre() && access.writes()) || size <= lf::FACE_NAME {
        cx.check(access, AddressRange::new(base, size), "LOGFONTW");
        return;
    }
    cx.check(access, AddressRange::new(base, lf::FACE_NAME), "LOGFONTW");
    let bound = (size - lf::FACE_NAME).min(lf::FACE_NAME_BYTES);
    cx.wide_string(access, base + lf::FACE_NAME, Some(bound), "LOGFONTW.lfFaceName");
}

/// Layout facts of the metrics structures, fixed by the release.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MetricsLayout {
    /// Size of `NONCLIENTMETRICSW` on this release.
    pub nonclient_size: u64,
    /// Whether callers fill in `NONCLIENTMETRICSW.cbSize` reliably.
    pub trust_cb_size: bool,
}

impl MetricsLayout {
    #[must_use]
    pub const fn for_gate(gate: &VersionGate) -> Self {
        Self {
            nonclient_size: if gate.vista_or_later() {
                ncm::SIZE_VISTA
            } else {
                ncm::SIZE_PRE_VISTA
            },
            trust_cb_size: gate.win7_or_later(),
        }
    }
}

#[derive(Debug, Copy, Clone)]
enum Region {
    Plain {
        offset: u64,
        len: u64,
        what: &'static str,
    },
    Font {
        offset: u64,
    },
}

impl Region {
    const fn offset(&self) -> u64 {
        match *self {
            Self::Plain { offset, .. } | Self::Font { offset } => offset,
        }
    }

    const fn len(&self) -> u64 {
        match *self {
            Self::Plain { len, .. } => len,
            Self::Font { .. } => lf::SIZE,
        }
    }
}

const NONCLIENT_REGIONS: &[Region] = &[
    Region::Plain {
        offset: 0,
        len: ncm::CAPTION_FONT,
        what: "NONCLIENTMETRICSW",
    },
    Region::Font {
        offset: ncm::CAPTION_FONT,
    },
    Region::Plain {
        offset: ncm::SM_CAPTION_WIDTH,
        len: ncm::SM_CAPTION_FONT - ncm::SM_CAPTION_WIDTH,
        what: "NONCLIENTMETRICSW.iSmCaptionWidth",
    },
    Region::Font {
        offset: ncm::SM_CAPTION_FONT,
    },
    Region::Plain {
        offset: ncm::MENU_WIDTH,
        len: ncm::MENU_FONT - ncm::MENU_WIDTH,
        what: "NONCLIENTMETRICSW.iMenuWidth",
    },
    Region::Font {
        offset: ncm::MENU_FONT,
    },
    Region::Font {
        offset: ncm::STATUS_FONT,
    },
    Region::Font {
        offset: ncm::MESSAGE_FONT,
    },
    Region::Plain {
        offset: ncm::SIZE_PRE_VISTA,
        len: ncm::SIZE_VISTA - ncm::SIZE_PRE_VISTA,
        what: "NONCLIENTMETRICSW.iPaddedBorderWidth",
    },
];

const ICON_REGIONS: &[Region] = &[
    Region::Plain {
        offset: 0,
        len: im::FONT,
        what: "ICONMETRICSW",
    },
    Region::Font { offset: im::FONT },
];

/// Walks `regions` up to `min(size, boundary)` and treats the rest as opaque.
fn walk(
    cx: &mut Checker<'_>,
    base: AppAddress,
    size: u64,
    boundary: u64,
    regions: &[Region],
    access: Access,
    what: &'static str,
) {
    let limit = size.min(boundary);
    for region in regions {
        let offset = region.offset();
        if offset >= limit {
            break;
        }
        let len = region.len().min(limit - offset);
        match *region {
            Region::Plain { what, .. } => {
                cx.check(access, AddressRange::new(base + offset, len), what);
            }
            Region::Font { .. } => logfont(cx, base + offset, len, access),
        }
    }
    if size > boundary {
        let rest = AddressRange::new(base + boundary, size - boundary);
        if cx.is_pre() {
            cx.check_addressable(rest, what);
        } else if access.writes() {
            cx.mark_written(rest, what);
        }
    }
}

/// `NONCLIENTMETRICSW` behind an omnibus settings pointer; `declared` is the
/// caller's separate size argument.
pub(crate) fn nonclient_metrics(
    cx: &mut Checker<'_>,
    base: AppAddress,
    declared: u64,
    access: Access,
    layout: MetricsLayout,
) {
    let Some(header) = Snapshot::<4>::read(cx, base, "NONCLIENTMETRICSW.cbSize") else {
        return;
    };
    // Older callers pass the ANSI size and leave cbSize unset; the kernel
    // writes the real size back.
    let size = if layout.trust_cb_size || (cx.is_post() && access.writes()) {
        u64::from(header.u32(0))
    } else {
        layout.nonclient_size.max(declared)
    };
    if cx.is_pre() && access.writes() {
        cx.check(access, AddressRange::new(base, size), "NONCLIENTMETRICSW");
        return;
    }
    walk(
        cx,
        base,
        size,
        layout.nonclient_size,
        NONCLIENT_REGIONS,
        access,
        "NONCLIENTMETRICSW beyond known layout",
    );
}

pub(crate) fn icon_metrics(cx: &mut Checker<'_>, base: AppAddress, access: Access) {
    let Some(header) = Snapshot::<4>::read(cx, base, "ICONMETRICSW.cbSize") else {
        return;
    };
    let size = u64::from(header.u32(0));
    if cx.is_pre() && access.writes() {
        cx.check(access, AddressRange::new(base, size), "ICONMETRICSW");
        return;
    }
    walk(
        cx,
        base,
        size,
        im::SIZE,
        ICON_REGIONS,
        access,
        "ICONMETRICSW beyond known layout",
    );
}
