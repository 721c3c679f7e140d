//! `MENUITEMINFOW`: which fields are meaningful is selected by `fMask`, and
//! only fields that fit inside the caller's `cbSize` exist at all.
//!
//! | `fMask` bit | Fields |
//! |-------------|--------|
//! | `MIIM_STATE` | `fState` |
//! | `MIIM_ID` | `wID` |
//! | `MIIM_SUBMENU` | `hSubMenu` |
//! | `MIIM_CHECKMARKS` | `hbmpChecked`, `hbmpUnchecked` |
//! | `MIIM_TYPE` | `fType`, `dwTypeData` (only without the three bits below) |
//! | `MIIM_DATA` | `dwItemData` |
//! | `MIIM_STRING` | `dwTypeData` |
//! | `MIIM_BITMAP` | `hbmpItem` |
//! | `MIIM_FTYPE` | `fType` |
//!
//! The text behind `dwTypeData` is `cch + 1` wide characters. A `cbSize`
//! beyond the known layout is clamped to it.

use super::{Snapshot, declared_size};
use crate::layouts::{PTR, WCHAR, menu_item_info as mii};
use shape_engine::{Access, AddressRange, AppAddress, Checker, TypeHandler, TypeTarget};

pub const MIIM_STATE: u32 = 0x0001;
pub const MIIM_ID: u32 = 0x0002;
pub const MIIM_SUBMENU: u32 = 0x0004;
pub const MIIM_CHECKMARKS: u32 = 0x0008;
pub const MIIM_TYPE: u32 = 0x0010;
pub const MIIM_DATA: u32 = 0x0020;
pub const MIIM_STRING: u32 = 0x0040;
pub const MIIM_BITMAP: u32 = 0x0080;
pub const MIIM_FTYPE: u32 = 0x0100;

/// Bits that supersede `MIIM_TYPE`.
const MIIM_TYPE_SUCCESSORS: u32 = MIIM_BITMAP | MIIM_FTYPE | MIIM_STRING;

struct Field {
    mask: u32,
    offset: u64,
    len: u64,
    what: &'static str,
}

const FIELDS: [Field; 10] = [
    Field { mask: MIIM_STATE, offset: mii::STATE, len: 4, what: "MENUITEMINFOW.fState" },
    Field { mask: MIIM_ID, offset: mii::ID, len: 4, what: "MENUITEMINFOW.wID" },
    Field { mask: MIIM_SUBMENU, offset: mii::SUBMENU, len: PTR, what: "MENUITEMINFOW.hSubMenu" },
    Field { mask: MIIM_CHECKMARKS, offset: mii::CHECKED, len: PTR, what: "MENUITEMINFOW.hbmpChecked" },
    Field { mask: MIIM_CHECKMARKS, offset: mii::UNCHECKED, len: PTR, what: "MENUITEMINFOW.hbmpUnchecked" },
    Field { mask: MIIM_DATA, offset: mii::ITEM_DATA, len: PTR, what: "MENUITEMINFOW.dwItemData" },
    Field { mask: MIIM_FTYPE, offset: mii::TYPE, len: 4, what: "MENUITEMINFOW.fType" },
    Field { mask: MIIM_STRING, offset: mii::TYPE_DATA, len: PTR, what: "MENUITEMINFOW.dwTypeData" },
    Field { mask: MIIM_BITMAP, offset: mii::BITMAP, len: PTR, what: "MENUITEMINFOW.hbmpItem" },
    Field { mask: MIIM_TYPE, offset: mii::TYPE, len: 4, what: "MENUITEMINFOW.fType" },
];

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MenuItemInfo;

impl TypeHandler for MenuItemInfo {
    fn check(&self, cx: &mut Checker<'_>, target: &TypeTarget) {
        menu_item_info(cx, target.base, target.access);
    }
}

/// Selects the mask bits whose fields a structure with this mask carries.
const fn effective_mask(mask: u32) -> u32 {
    if mask & MIIM_TYPE != 0 && mask & MIIM_TYPE_SUCCESSORS == 0 {
        mask | MIIM_STRING
    } else {
        mask & !MIIM_TYPE
    }
}

pub(crate) fn menu_item_info(cx: &mut Checker<'_>, base: AppAddress, access: Access) {
    if base.is_null() {
        return;
    }
    if cx.is_pre() {
        cx.check_defined(AddressRange::new(base, mii::HEADER), "MENUITEMINFOW.cbSize and fMask");
    }
    let Some(header) =
        Snapshot::<{ mii::HEADER as usize }>::read(cx, base, "MENUITEMINFOW.cbSize and fMask")
    else {
        return;
    };
    let size = declared_size(cx, header.u32(0), mii::SIZE, "MENUITEMINFOW");
    let mask = effective_mask(header.u32(mii::MASK));
    if cx.is_pre() {
        cx.check_addressable(AddressRange::new(base, size), "MENUITEMINFOW");
    }
    if size <= mii::HEADER {
        return;
    }
    let Some(info) = Snapshot::<{ mii::SIZE as usize }>::read_prefix(cx, base, size, "MENUITEMINFOW")
    else {
        return;
    };

    let fits = |offset: u64, len: u64| offset + len <= size;
    for field in &FIELDS {
        if mask & field.mask != 0 && fits(field.offset, field.len) {
            cx.check(access, AddressRange::new(base + field.offset, field.len), field.what);
        }
    }
    if mask & MIIM_STRING != 0 && fits(mii::TYPE_DATA, PTR) && fits(mii::CCH, 4) {
        let text = info.ptr(mii::TYPE_DATA);
        if !text.is_null() {
            let chars = u64::from(info.u32(mii::CCH)) + 1;
            cx.check(
                access,
                AddressRange::new(text, chars * WCHAR),
                "MENUITEMINFOW.dwTypeData text",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_type_bit_stands_for_type_and_text() {
        let mask = effective_mask(MIIM_TYPE);
        assert_ne!(mask & MIIM_STRING, 0);
        assert_eq!(mask & MIIM_FTYPE, 0);
    }

    #[test]
    fn legacy_type_bit_yields_to_its_successors() {
        let mask = effective_mask(MIIM_TYPE | MIIM_BITMAP);
        assert_eq!(mask & MIIM_TYPE, 0);
        assert_eq!(mask & MIIM_STRING, 0);
        assert_ne!(mask & MIIM_BITMAP, 0);
    }
}
