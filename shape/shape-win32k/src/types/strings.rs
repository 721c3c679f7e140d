//! Counted strings and the structures that embed them.
//!
//! A counted string is a small header pointing at a separate buffer. The
//! header tells how much of the buffer is valid (`Length`) and how much the
//! kernel may write (`MaximumLength`). Both are byte counts.

use super::Snapshot;
use crate::layouts::{PTR, counted_string as cs, object_attributes as oa};
use log::trace;
use shape_engine::{Access, AddressRange, AppAddress, Checker, TypeHandler, TypeTarget};

/// A `LARGE_STRING` capacity above this, and above its length, is more
/// likely uninitialized than real.
const SUSPICIOUS_CAPACITY: u32 = 1024;

/// `UNICODE_STRING`, either with the kernel reporting the written length in
/// `Length` or with the result found by its terminator.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct UnicodeString {
    kernel_sets_length: bool,
}

impl UnicodeString {
    pub const KERNEL_SETS_LENGTH: Self = Self {
        kernel_sets_length: true,
    };
    pub const TERMINATED: Self = Self {
        kernel_sets_length: false,
    };
}

impl TypeHandler for UnicodeString {
    fn check(&self, cx: &mut Checker<'_>, target: &TypeTarget) {
        unicode_string(cx, target.base, target.access, self.kernel_sets_length);
    }
}

pub(crate) fn unicode_string(
    cx: &mut Checker<'_>,
    base: AppAddress,
    access: Access,
    kernel_sets_length: bool,
) {
    if base.is_null() || (cx.is_post() && !access.writes()) {
        return;
    }
    if cx.is_pre() {
        if access.reads() {
            cx.check_defined(AddressRange::new(base, 4), "UNICODE_STRING.Length");
        } else {
            cx.check_defined(
                AddressRange::new(base + cs::UNICODE_MAXIMUM_LENGTH, 2),
                "UNICODE_STRING.MaximumLength",
            );
            if kernel_sets_length {
                cx.check_addressable(AddressRange::new(base, 2), "UNICODE_STRING.Length");
            }
        }
        cx.check_defined(
            AddressRange::new(base + cs::BUFFER, PTR),
            "UNICODE_STRING.Buffer",
        );
    }

    let Some(header) = Snapshot::<{ cs::SIZE as usize }>::read(cx, base, "UNICODE_STRING") else {
        return;
    };
    let length = u64::from(header.u16(cs::LENGTH));
    let capacity = u64::from(header.u16(cs::UNICODE_MAXIMUM_LENGTH));
    let buffer = header.ptr(cs::BUFFER);
    trace!("UNICODE_STRING Buffer={buffer} Length={length} MaximumLength={capacity}");

    if cx.is_pre() {
        if access.reads() {
            cx.check_defined(AddressRange::new(buffer, length), "UNICODE_STRING content");
        }
        if access.writes() {
            cx.check_addressable(
                AddressRange::new(buffer, capacity),
                "UNICODE_STRING capacity",
            );
        }
    } else if kernel_sets_length {
        let length = if length > capacity {
            cx.clamped("UNICODE_STRING.Length", length, capacity);
            capacity
        } else {
            length
        };
        cx.mark_written(AddressRange::new(base, 2), "UNICODE_STRING.Length");
        cx.mark_written(AddressRange::new(buffer, length), "UNICODE_STRING content");
    } else {
        cx.wide_string(
            Access::Write,
            buffer,
            Some(capacity),
            "UNICODE_STRING content",
        );
    }
}

/// `LARGE_STRING`: 32-bit lengths and an ANSI flag folded into the capacity.
/// Window-text arguments may carry an atom instead of a pointer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LargeString;

impl TypeHandler for LargeString {
    fn check(&self, cx: &mut Checker<'_>, target: &TypeTarget) {
        let base = target.base;
        if base.is_atom() || (cx.is_post() && !target.access.writes()) {
            return;
        }
        if cx.is_pre() {
            cx.check_defined(AddressRange::new(base, 4), "LARGE_STRING.Length");
            cx.check_defined(
                AddressRange::new(base + cs::BUFFER, PTR),
                "LARGE_STRING.Buffer",
            );
        }
        let Some(header) = Snapshot::<{ cs::SIZE as usize }>::read(cx, base, "LARGE_STRING")
        else {
            return;
        };
        let length = header.u32(cs::LENGTH);
        let capacity = header.u32(cs::LARGE_MAXIMUM_LENGTH) & !cs::LARGE_ANSI_BIT;
        let buffer = header.ptr(cs::BUFFER);

        if cx.is_pre() {
            // The capacity and ANSI flag are assembled with bit operations the
            // shadow state cannot follow; only a capacity that looks wrong is
            // held against the caller.
            let capacity_field = AddressRange::new(base + cs::LARGE_MAXIMUM_LENGTH, 4);
            if capacity > length && capacity > SUSPICIOUS_CAPACITY {
                cx.check_defined(capacity_field, "LARGE_STRING.MaximumLength");
            } else {
                cx.mark_defined(capacity_field, "LARGE_STRING.MaximumLength");
            }
            cx.check_addressable(
                AddressRange::new(buffer, u64::from(capacity)),
                "LARGE_STRING capacity",
            );
            if target.access.reads() {
                cx.check_defined(
                    AddressRange::new(buffer, u64::from(length)),
                    "LARGE_STRING content",
                );
            }
        } else {
            cx.mark_written(
                AddressRange::new(buffer, u64::from(length.min(capacity))),
                "LARGE_STRING content",
            );
        }
    }
}

/// `OBJECT_ATTRIBUTES`: always caller input, with the object's name as a
/// `UNICODE_STRING` behind `ObjectName`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ObjectAttributes;

impl TypeHandler for ObjectAttributes {
    fn check(&self, cx: &mut Checker<'_>, target: &TypeTarget) {
        let base = target.base;
        // Padding follows the 4-byte Length.
        cx.check(
            target.access,
            AddressRange::new(base, 4),
            "OBJECT_ATTRIBUTES.Length",
        );
        cx.check(
            target.access,
            AddressRange::new(base + PTR, oa::SIZE - PTR),
            "OBJECT_ATTRIBUTES",
        );
        if !cx.is_pre() {
            return;
        }
        if let Some(name) = cx.read_ptr(base + oa::OBJECT_NAME, "OBJECT_ATTRIBUTES.ObjectName") {
            unicode_string(cx, name, Access::Read, true);
        }
    }
}
