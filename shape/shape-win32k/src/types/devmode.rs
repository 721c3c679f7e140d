//! `DEVMODEW`: a header whose `dmSize` grew across releases, followed by
//! `dmDriverExtra` bytes of private driver data.

use super::Snapshot;
use crate::layouts::devmode as dm;
use shape_engine::{AddressRange, Checker, TypeHandler, TypeTarget};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DevMode;

impl TypeHandler for DevMode {
    fn check(&self, cx: &mut Checker<'_>, target: &TypeTarget) {
        let base = target.base;
        let access = target.access;
        if cx.is_pre() {
            cx.check_defined(
                AddressRange::new(base, dm::FIELDS),
                "DEVMODEW through dmDriverExtra",
            );
        }
        let Some(head) = Snapshot::<4>::read(cx, base + dm::DM_SIZE, "DEVMODEW.dmSize") else {
            return;
        };
        let size = u64::from(head.u16(0));
        let extra = u64::from(head.u16(dm::DRIVER_EXTRA - dm::DM_SIZE));
        if size <= dm::FORM_NAME {
            cx.rejected("DEVMODEW.dmSize", size);
            return;
        }
        cx.check(
            access,
            AddressRange::new(base + dm::FIELDS, dm::COLLATE_END - dm::FIELDS),
            "DEVMODEW dmFields through dmCollate",
        );
        cx.check(
            access,
            AddressRange::new(base + dm::FORM_NAME, size - dm::FORM_NAME),
            "DEVMODEW dmFormName onward",
        );
        cx.check(
            access,
            AddressRange::new(base + size, extra),
            "DEVMODEW driver extra",
        );
    }
}
