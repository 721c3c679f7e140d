//! Input and window-switching calls with self-describing buffers.

use crate::layouts::track_mouse_event as tme;
use crate::types::{Snapshot, declared_size};
use shape_engine::{Access, AddressRange, CallContext, CallHandler, Checker};

const TME_QUERY: u32 = 0x4000_0000;

/// `NtUserTrackMouseEvent(lpEventTrack)`: filled in by the kernel when
/// `dwFlags` asks for a query, read otherwise.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TrackMouseEvent;

impl TrackMouseEvent {
    fn run(cx: &mut Checker<'_>) {
        let base = cx.arg_addr(0);
        if base.is_null() {
            return;
        }
        if cx.is_pre() {
            cx.check_defined(
                AddressRange::new(base, tme::HEADER),
                "TRACKMOUSEEVENT.cbSize and dwFlags",
            );
        }
        let Some(header) = Snapshot::<{ tme::HEADER as usize }>::read(cx, base, "TRACKMOUSEEVENT")
        else {
            return;
        };
        let size = declared_size(cx, header.u32(0), tme::SIZE, "TRACKMOUSEEVENT");
        let access = if header.u32(tme::FLAGS) & TME_QUERY != 0 {
            Access::Write
        } else {
            Access::Read
        };
        if size > tme::HEADER {
            cx.check(
                access,
                AddressRange::new(base + tme::HEADER, size - tme::HEADER),
                "TRACKMOUSEEVENT",
            );
        }
    }
}

impl CallHandler for TrackMouseEvent {
    fn claims(&self) -> &[usize] {
        &[0]
    }

    fn pre(&self, cx: &mut Checker<'_>, _ctx: &mut CallContext) {
        Self::run(cx);
    }

    fn post(&self, cx: &mut Checker<'_>, _ctx: &mut CallContext) {
        Self::run(cx);
    }
}

/// `NtUserGetAltTabInfo(hwnd, iItem, pati, pszItemText, cchItemText, bAnsi)`:
/// the item text buffer holds ANSI or wide characters, as `bAnsi` says.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GetAltTabInfo;

impl GetAltTabInfo {
    const TEXT: usize = 3;
    const CHARS: usize = 4;
    const ANSI: usize = 5;

    fn run(cx: &mut Checker<'_>) {
        let chars = u64::from(cx.arg_u32(Self::CHARS));
        let width = if cx.arg_u32(Self::ANSI) == 0 { 2 } else { 1 };
        let text = cx.arg_addr(Self::TEXT);
        cx.check(
            Access::Write,
            AddressRange::new(text, chars * width),
            "pszItemText",
        );
    }
}

impl CallHandler for GetAltTabInfo {
    fn claims(&self) -> &[usize] {
        &[Self::TEXT]
    }

    fn pre(&self, cx: &mut Checker<'_>, _ctx: &mut CallContext) {
        Self::run(cx);
    }

    fn post(&self, cx: &mut Checker<'_>, _ctx: &mut CallContext) {
        Self::run(cx);
    }
}
