//! Menu calls that either read or fill their structure, depending on a flag
//! argument.

use crate::layouts::menu_info;
use crate::types::{declared_size, menu_item_info};
use shape_engine::{Access, AddressRange, CallContext, CallHandler, Checker};

const fn direction(set: u64) -> Access {
    if set == 0 { Access::Write } else { Access::Read }
}

/// `NtUserMenuInfo(hMenu, lpmi, fSet)`: a `MENUINFO` sized by its `cbSize`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MenuInfo;

impl MenuInfo {
    const INFO: usize = 1;
    const SET: usize = 2;

    fn run(cx: &mut Checker<'_>) {
        let base = cx.arg_addr(Self::INFO);
        if base.is_null() {
            return;
        }
        if cx.is_pre() {
            cx.check_defined(AddressRange::new(base, 4), "MENUINFO.cbSize");
        }
        let Some(declared) = cx.read_u32(base, "MENUINFO.cbSize") else {
            return;
        };
        let size = declared_size(cx, declared, menu_info::SIZE, "MENUINFO");
        let access = direction(cx.arg(Self::SET));
        cx.check(access, AddressRange::new(base, size), "MENUINFO");
    }
}

impl CallHandler for MenuInfo {
    fn claims(&self) -> &[usize] {
        &[Self::INFO]
    }

    fn pre(&self, cx: &mut Checker<'_>, _ctx: &mut CallContext) {
        Self::run(cx);
    }

    fn post(&self, cx: &mut Checker<'_>, _ctx: &mut CallContext) {
        Self::run(cx);
    }
}

/// `NtUserMenuItemInfo(hMenu, uItem, fByPosition, lpmii, fSet)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MenuItemInfo;

impl MenuItemInfo {
    const INFO: usize = 3;
    const SET: usize = 4;

    fn run(cx: &mut Checker<'_>) {
        let base = cx.arg_addr(Self::INFO);
        let access = direction(cx.arg(Self::SET));
        menu_item_info(cx, base, access);
    }
}

impl CallHandler for MenuItemInfo {
    fn claims(&self) -> &[usize] {
        &[Self::INFO]
    }

    fn pre(&self, cx: &mut Checker<'_>, _ctx: &mut CallContext) {
        Self::run(cx);
    }

    fn post(&self, cx: &mut Checker<'_>, _ctx: &mut CallContext) {
        Self::run(cx);
    }
}
