//! # Type Handlers
//!
//! Structures whose shape depends on their own contents. Each is reachable
//! two ways: through a rule of kind `Complex(tag)` (the engine's type
//! registry calls the handler below) and directly from call handlers that
//! find the structure behind a pointer the rules never see.
//!
//! | Tag | Handler | Shape source |
//! |-----|---------|--------------|
//! | [`UNICODE_STRING`] | [`UnicodeString`] | `Length` / `MaximumLength` / `Buffer` |
//! | [`UNICODE_STRING_NOLEN`] | [`UnicodeString`] | terminator; the kernel leaves `Length` alone |
//! | [`LARGE_STRING`] | [`LargeString`] | 32-bit lengths, atom pointers skipped |
//! | [`OBJECT_ATTRIBUTES`] | [`ObjectAttributes`] | embedded `ObjectName` |
//! | [`DEVMODEW`] | [`DevMode`] | `dmSize` + `dmDriverExtra` |
//! | [`WNDCLASSEXW`] | [`WndClassEx`] | `cbSize`, name pointers |
//! | [`CLSMENUNAME`] | [`ClsMenuName`] | partially modeled |
//! | [`MENUITEMINFOW`] | [`MenuItemInfo`] | `cbSize` + `fMask` |
//! | [`LOGFONTW`] | [`LogFont`] | face name terminator |

mod devmode;
mod menu;
mod metrics;
mod strings;
mod wndclass;

pub use devmode::DevMode;
pub use menu::MenuItemInfo;
pub use metrics::{LogFont, MetricsLayout};
pub use strings::{LargeString, ObjectAttributes, UnicodeString};
pub use wndclass::{ClsMenuName, WndClassEx};

pub(crate) use menu::menu_item_info;
pub(crate) use metrics::{icon_metrics, logfont, nonclient_metrics};
pub(crate) use strings::unicode_string;

use shape_engine::{AppAddress, Checker, EngineBuilder, TypeTag};

pub const UNICODE_STRING: TypeTag = TypeTag::new("UNICODE_STRING");
pub const UNICODE_STRING_NOLEN: TypeTag = TypeTag::new("UNICODE_STRING_NOLEN");
pub const LARGE_STRING: TypeTag = TypeTag::new("LARGE_STRING");
pub const OBJECT_ATTRIBUTES: TypeTag = TypeTag::new("OBJECT_ATTRIBUTES");
pub const DEVMODEW: TypeTag = TypeTag::new("DEVMODEW");
pub const WNDCLASSEXW: TypeTag = TypeTag::new("WNDCLASSEXW");
pub const CLSMENUNAME: TypeTag = TypeTag::new("CLSMENUNAME");
pub const MENUITEMINFOW: TypeTag = TypeTag::new("MENUITEMINFOW");
pub const LOGFONTW: TypeTag = TypeTag::new("LOGFONTW");

/// Registers a handler for every tag the contract tables use.
#[must_use]
pub fn register(builder: EngineBuilder) -> EngineBuilder {
    builder
        .type_handler(UNICODE_STRING, UnicodeString::KERNEL_SETS_LENGTH)
        .type_handler(UNICODE_STRING_NOLEN, UnicodeString::TERMINATED)
        .type_handler(LARGE_STRING, LargeString)
        .type_handler(OBJECT_ATTRIBUTES, ObjectAttributes)
        .type_handler(DEVMODEW, DevMode)
        .type_handler(WNDCLASSEXW, WndClassEx)
        .type_handler(CLSMENUNAME, ClsMenuName)
        .type_handler(MENUITEMINFOW, MenuItemInfo)
        .type_handler(LOGFONTW, LogFont)
}

/// The size a structure declares in its `cbSize`, limited to the layout
/// known here. A larger claim is reported once, pre-call.
pub(crate) fn declared_size(
    cx: &mut Checker<'_>,
    declared: u32,
    known: u64,
    what: &'static str,
) -> u64 {
    let declared = u64::from(declared);
    if declared <= known {
        return declared;
    }
    if cx.is_pre() {
        cx.clamped(what, declared, known);
    }
    known
}

/// A structure copied out of application memory with a single read, so a
/// handler sees one consistent version of it.
pub(crate) struct Snapshot<const N: usize>([u8; N]);

impl<const N: usize> Snapshot<N> {
    pub(crate) fn read(cx: &mut Checker<'_>, at: AppAddress, what: &'static str) -> Option<Self> {
        let mut buf = [0u8; N];
        cx.read_into(at, &mut buf, what).then_some(Self(buf))
    }

    /// Reads only the first `len` bytes; the rest read as zero.
    pub(crate) fn read_prefix(
        cx: &mut Checker<'_>,
        at: AppAddress,
        len: u64,
        what: &'static str,
    ) -> Option<Self> {
        let mut buf = [0u8; N];
        let len = usize::try_from(len).map_or(N, |len| len.min(N));
        cx.read_into(at, &mut buf[..len], what).then_some(Self(buf))
    }

    fn bytes<const W: usize>(&self, offset: u64) -> [u8; W] {
        let mut out = [0u8; W];
        let field = usize::try_from(offset)
            .ok()
            .and_then(|start| self.0.get(start..start.checked_add(W)?));
        if let Some(field) = field {
            out.copy_from_slice(field);
        }
        out
    }

    pub(crate) fn u16(&self, offset: u64) -> u16 {
        u16::from_le_bytes(self.bytes(offset))
    }

    pub(crate) fn u32(&self, offset: u64) -> u32 {
        u32::from_le_bytes(self.bytes(offset))
    }

    pub(crate) fn ptr(&self, offset: u64) -> AppAddress {
        AppAddress::new(u64::from_le_bytes(self.bytes(offset)))
    }
}
