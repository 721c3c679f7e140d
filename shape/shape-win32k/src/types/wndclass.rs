//! Window class registration structures.

use super::{Snapshot, declared_size};
use crate::layouts::{PTR, clsmenuname, wndclassex as wc};
use shape_engine::{AddressRange, Checker, TypeHandler, TypeTarget};

/// `WNDCLASSEXW`. Callers that register a class set `cbSize`; callers that
/// query one often do not, so writes use the full structure size.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct WndClassEx;

impl TypeHandler for WndClassEx {
    fn check(&self, cx: &mut Checker<'_>, target: &TypeTarget) {
        let base = target.base;
        let access = target.access;
        let use_cb_size = access.reads();
        if cx.is_pre() && use_cb_size {
            cx.check_defined(AddressRange::new(base, 4), "WNDCLASSEXW.cbSize");
        }
        let size = if use_cb_size {
            let Some(declared) = cx.read_u32(base, "WNDCLASSEXW.cbSize") else {
                return;
            };
            declared_size(cx, declared, wc::SIZE, "WNDCLASSEXW")
        } else {
            wc::SIZE
        };
        cx.check(access, AddressRange::new(base, size), "WNDCLASSEXW");

        // Written names have no capacity to check before the call.
        let names = if cx.is_pre() {
            access.reads()
        } else {
            access.writes()
        };
        if !names {
            return;
        }
        let Some(class) =
            Snapshot::<{ wc::SIZE as usize }>::read_prefix(cx, base, size, "WNDCLASSEXW")
        else {
            return;
        };
        // The menu name may be a resource id and the class name an atom.
        let menu = class.ptr(wc::MENU_NAME);
        if wc::MENU_NAME + PTR <= size && !menu.is_atom() {
            cx.wide_string(access, menu, None, "WNDCLASSEXW.lpszMenuName");
        }
        let name = class.ptr(wc::CLASS_NAME);
        if wc::CLASS_NAME + PTR <= size && !name.is_atom() {
            cx.wide_string(access, name, None, "WNDCLASSEXW.lpszClassName");
        }
    }
}

/// `CLSMENUNAME`. Its layout does not match the documented one on every
/// release, so only the container is checked.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ClsMenuName;

impl TypeHandler for ClsMenuName {
    fn check(&self, cx: &mut Checker<'_>, target: &TypeTarget) {
        let size = target.size.unwrap_or(clsmenuname::SIZE);
        cx.check(
            target.access,
            AddressRange::new(target.base, size),
            "CLSMENUNAME",
        );
        let names = if cx.is_pre() {
            target.access.reads()
        } else {
            target.access.writes()
        };
        if names {
            cx.partially_modeled("CLSMENUNAME");
        }
    }
}
