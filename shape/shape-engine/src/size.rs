//! # Size Expressions
//!
//! A field rule needs to know how many bytes the kernel touches. The answer is
//! rarely a constant: it may come from another argument, from a count stored
//! behind a pointer argument, from the call's return value, or from a size
//! header inside the very structure being checked.
//!
//! | Expression | Meaning | Available |
//! |------------|---------|-----------|
//! | [`SizeExpr::Literal`] | a fixed byte count | always |
//! | [`SizeExpr::Arg`] | `args[slot] * elem` | always |
//! | [`SizeExpr::ArgPtr`] | `*(u32*)args[slot] * elem` | always (re-read post-call) |
//! | [`SizeExpr::RetVal`] | `retval * elem` | post-call only |
//! | [`SizeExpr::Field`] | 2- or 4-byte header at `target + offset` | always |
//!
//! Element sizes ([`ElemSize`]) are either fixed or taken from another
//! argument.
//!
//! Resolution never fails hard. Negative, implausibly large, or overflowing
//! counts resolve to [`Resolution::Rejected`] (the rule proceeds with zero
//! bytes), unreadable pointers or headers to [`Resolution::Unreadable`], and
//! headers larger than the rule's known-safe limit to
//! [`Resolution::Clamped`].

use crate::env::{MemoryReader, MemoryReaderExt, ReadFault};
use shape_addresses::AppAddress;

/// Size of one element of a counted buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ElemSize {
    Bytes(u32),
    /// The element size is the value of another argument.
    Arg(usize),
}

impl ElemSize {
    /// The argument slot the element size is read from.
    #[inline]
    #[must_use]
    pub const fn slot(self) -> Option<usize> {
        match self {
            Self::Arg(slot) => Some(slot),
            Self::Bytes(_) => None,
        }
    }
}

/// Width of an embedded size header.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HeaderWidth {
    U16,
    U32,
}

impl HeaderWidth {
    #[inline]
    #[must_use]
    pub const fn bytes(self) -> u64 {
        match self {
            Self::U16 => 2,
            Self::U32 => 4,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SizeExpr {
    Literal(u64),
    Arg {
        slot: usize,
        elem: ElemSize,
    },
    ArgPtr {
        slot: usize,
        elem: ElemSize,
    },
    RetVal {
        elem: ElemSize,
    },
    Field {
        offset: u32,
        width: HeaderWidth,
        limit: Option<u32>,
    },
}

impl SizeExpr {
    #[must_use]
    pub const fn literal(bytes: u64) -> Self {
        Self::Literal(bytes)
    }

    /// `args[slot]` bytes.
    #[must_use]
    pub const fn arg(slot: usize) -> Self {
        Self::Arg {
            slot,
            elem: ElemSize::Bytes(1),
        }
    }

    /// `args[slot]` elements of `elem` bytes.
    #[must_use]
    pub const fn arg_elems(slot: usize, elem: u32) -> Self {
        Self::Arg {
            slot,
            elem: ElemSize::Bytes(elem),
        }
    }

    /// `args[slot]` elements whose size is `args[elem_slot]`.
    #[must_use]
    pub const fn arg_by_arg(slot: usize, elem_slot: usize) -> Self {
        Self::Arg {
            slot,
            elem: ElemSize::Arg(elem_slot),
        }
    }

    /// The 32-bit count behind the pointer in `args[slot]`, in bytes.
    #[must_use]
    pub const fn arg_ptr(slot: usize) -> Self {
        Self::ArgPtr {
            slot,
            elem: ElemSize::Bytes(1),
        }
    }

    #[must_use]
    pub const fn arg_ptr_elems(slot: usize, elem: u32) -> Self {
        Self::ArgPtr {
            slot,
            elem: ElemSize::Bytes(elem),
        }
    }

    /// The return value, in bytes.
    #[must_use]
    pub const fn retval() -> Self {
        Self::RetVal {
            elem: ElemSize::Bytes(1),
        }
    }

    #[must_use]
    pub const fn retval_elems(elem: u32) -> Self {
        Self::RetVal {
            elem: ElemSize::Bytes(elem),
        }
    }

    /// A 32-bit size header at `offset` inside the target.
    #[must_use]
    pub const fn field(offset: u32) -> Self {
        Self::Field {
            offset,
            width: HeaderWidth::U32,
            limit: None,
        }
    }

    /// A 16-bit size header at `offset` inside the target.
    #[must_use]
    pub const fn field_u16(offset: u32) -> Self {
        Self::Field {
            offset,
            width: HeaderWidth::U16,
            limit: None,
        }
    }

    /// Caps a header-derived size at a known-safe maximum.
    #[must_use]
    pub const fn limited(self, max: u32) -> Self {
        match self {
            Self::Field { offset, width, .. } => Self::Field {
                offset,
                width,
                limit: Some(max),
            },
            other => other,
        }
    }

    /// Whether the value only exists after the call returned.
    #[inline]
    #[must_use]
    pub const fn is_post_only(&self) -> bool {
        matches!(self, Self::RetVal { .. })
    }

    /// The argument slots this expression reads, besides the rule's target.
    #[must_use]
    pub const fn referenced_slots(&self) -> [Option<usize>; 2] {
        match *self {
            Self::Arg { slot, elem } | Self::ArgPtr { slot, elem } => [Some(slot), elem.slot()],
            Self::RetVal { elem } => [elem.slot(), None],
            Self::Literal(_) | Self::Field { .. } => [None, None],
        }
    }
}

/// The outcome of resolving a [`SizeExpr`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Resolution {
    Bytes(u64),
    /// Depends on the return value, which does not exist yet.
    Deferred,
    /// The count was negative, implausibly large, or overflowed when scaled.
    Rejected { raw: u64 },
    /// A header declared more than the known-safe maximum.
    Clamped { declared: u64, bytes: u64 },
    Unreadable(ReadFault),
}

impl Resolution {
    /// The byte count to check, if any range should be checked at all.
    #[must_use]
    pub const fn bytes(self) -> Option<u64> {
        match self {
            Self::Bytes(n) | Self::Clamped { bytes: n, .. } => Some(n),
            Self::Rejected { .. } => Some(0),
            Self::Deferred | Self::Unreadable(_) => None,
        }
    }
}

/// What a size expression may look at.
pub struct SizeInputs<'a> {
    pub args: &'a [u64],
    pub retval: Option<u64>,
    /// Address of the buffer the rule targets; header fields are relative to it.
    pub target: AppAddress,
    pub memory: &'a dyn MemoryReader,
    /// Largest count accepted before it is treated as garbage.
    pub max_count: u64,
}

impl SizeInputs<'_> {
    fn slot(&self, slot: usize) -> u64 {
        self.args.get(slot).copied().unwrap_or(0)
    }

    fn scale(&self, count: u64, elem: ElemSize) -> Resolution {
        if plausible(count, self.max_count).is_none() {
            return Resolution::Rejected { raw: count };
        }
        let elem = match elem {
            ElemSize::Bytes(n) => u64::from(n),
            ElemSize::Arg(slot) => {
                let raw = self.slot(slot);
                match plausible(raw, self.max_count) {
                    Some(n) => n,
                    None => return Resolution::Rejected { raw },
                }
            }
        };
        match count.checked_mul(elem) {
            Some(n) if n <= self.max_count => Resolution::Bytes(n),
            _ => Resolution::Rejected { raw: count },
        }
    }
}

/// Counts are signed in most of the interfaces; a set top bit is a negative
/// value, not a huge size.
#[allow(clippy::cast_possible_wrap)]
const fn plausible(raw: u64, max: u64) -> Option<u64> {
    if (raw as i64) < 0 || raw > max {
        None
    } else {
        Some(raw)
    }
}

/// Resolves `expr` against the call's state.
#[must_use]
pub fn resolve(expr: &SizeExpr, inputs: &SizeInputs<'_>) -> Resolution {
    match *expr {
        SizeExpr::Literal(n) => Resolution::Bytes(n),
        SizeExpr::Arg { slot, elem } => inputs.scale(inputs.slot(slot), elem),
        SizeExpr::ArgPtr { slot, elem } => {
            let ptr = AppAddress::new(inputs.slot(slot));
            if ptr.is_null() {
                return Resolution::Bytes(0);
            }
            match inputs.memory.read_u32(ptr) {
                Ok(count) => inputs.scale(u64::from(count), elem),
                Err(fault) => Resolution::Unreadable(fault),
            }
        }
        SizeExpr::RetVal { elem } => match inputs.retval {
            Some(ret) => inputs.scale(ret, elem),
            None => Resolution::Deferred,
        },
        SizeExpr::Field {
            offset,
            width,
            limit,
        } => {
            if inputs.target.is_null() {
                return Resolution::Bytes(0);
            }
            let at = inputs.target + u64::from(offset);
            let declared = match width {
                HeaderWidth::U16 => inputs.memory.read_u16(at).map(u64::from),
                HeaderWidth::U32 => inputs.memory.read_u32(at).map(u64::from),
            };
            let declared = match declared {
                Ok(v) => v,
                Err(fault) => return Resolution::Unreadable(fault),
            };
            let ceiling = limit.map_or(inputs.max_count, |l| u64::from(l).min(inputs.max_count));
            if declared > ceiling {
                Resolution::Clamped {
                    declared,
                    bytes: ceiling,
                }
            } else {
                Resolution::Bytes(declared)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A single readable window of memory.
    struct Window {
        base: u64,
        bytes: Vec<u8>,
    }

    impl MemoryReader for Window {
        fn read(&self, addr: AppAddress, buf: &mut [u8]) -> Result<(), ReadFault> {
            let fault = ReadFault::new(addr, buf.len());
            let start = addr.as_u64().checked_sub(self.base).ok_or(fault)?;
            let start = usize::try_from(start).map_err(|_| fault)?;
            let src = self.bytes.get(start..start + buf.len()).ok_or(fault)?;
            buf.copy_from_slice(src);
            Ok(())
        }
    }

    fn inputs<'a>(args: &'a [u64], retval: Option<u64>, window: &'a Window) -> SizeInputs<'a> {
        SizeInputs {
            args,
            retval,
            target: AppAddress::new(window.base),
            memory: window,
            max_count: 1 << 30,
        }
    }

    fn empty() -> Window {
        Window {
            base: 0x1000,
            bytes: Vec::new(),
        }
    }

    #[test]
    fn literal_and_scaled_argument() {
        let w = empty();
        let args = [4, 0x5000];
        let i = inputs(&args, None, &w);
        assert_eq!(resolve(&SizeExpr::literal(12), &i), Resolution::Bytes(12));
        assert_eq!(resolve(&SizeExpr::arg_elems(0, 8), &i), Resolution::Bytes(32));
    }

    #[test]
    fn doubling_the_count_doubles_the_size() {
        let w = empty();
        let expr = SizeExpr::arg_elems(0, 6);
        let a = resolve(&expr, &inputs(&[10], None, &w)).bytes().unwrap();
        let b = resolve(&expr, &inputs(&[20], None, &w)).bytes().unwrap();
        assert_eq!(b, 2 * a);
    }

    #[test]
    fn element_size_from_another_argument() {
        let w = empty();
        let args = [3, 24];
        let expr = SizeExpr::arg_by_arg(0, 1);
        assert_eq!(resolve(&expr, &inputs(&args, None, &w)), Resolution::Bytes(72));
    }

    #[test]
    fn negative_and_garbage_counts_are_rejected() {
        let w = empty();
        let negative = [u64::MAX];
        let r = resolve(&SizeExpr::arg(0), &inputs(&negative, None, &w));
        assert_eq!(r, Resolution::Rejected { raw: u64::MAX });
        assert_eq!(r.bytes(), Some(0));

        let huge = [1 << 40];
        let r = resolve(&SizeExpr::arg(0), &inputs(&huge, None, &w));
        assert!(matches!(r, Resolution::Rejected { .. }));

        let overflow = [1 << 29];
        let r = resolve(&SizeExpr::arg_elems(0, 8), &inputs(&overflow, None, &w));
        assert!(matches!(r, Resolution::Rejected { .. }));
    }

    #[test]
    fn return_value_waits_for_the_call() {
        let w = empty();
        let expr = SizeExpr::retval_elems(2);
        assert_eq!(resolve(&expr, &inputs(&[], None, &w)), Resolution::Deferred);
        assert_eq!(resolve(&expr, &inputs(&[], Some(5), &w)), Resolution::Bytes(10));
    }

    #[test]
    fn header_field_is_read_from_the_target() {
        let w = Window {
            base: 0x1000,
            bytes: vec![0x30, 0, 0, 0, 0x10, 0],
        };
        let i = inputs(&[], None, &w);
        assert_eq!(resolve(&SizeExpr::field(0), &i), Resolution::Bytes(0x30));
        assert_eq!(resolve(&SizeExpr::field_u16(4), &i), Resolution::Bytes(0x10));
        assert_eq!(
            resolve(&SizeExpr::field(0).limited(0x20), &i),
            Resolution::Clamped {
                declared: 0x30,
                bytes: 0x20
            }
        );
    }

    #[test]
    fn unreadable_header_fails_softly() {
        let w = empty();
        let r = resolve(&SizeExpr::field(0), &inputs(&[], None, &w));
        assert!(matches!(r, Resolution::Unreadable(_)));
        assert_eq!(r.bytes(), None);
    }

    #[test]
    fn count_behind_pointer() {
        let w = Window {
            base: 0x1000,
            bytes: vec![7, 0, 0, 0],
        };
        let args = [0x1000, 0];
        let i = inputs(&args, None, &w);
        assert_eq!(resolve(&SizeExpr::arg_ptr_elems(0, 2), &i), Resolution::Bytes(14));
        assert_eq!(resolve(&SizeExpr::arg_ptr(1), &i), Resolution::Bytes(0));
    }

    #[test]
    fn referenced_slots_cover_element_sources() {
        assert_eq!(SizeExpr::arg_by_arg(2, 3).referenced_slots(), [Some(2), Some(3)]);
        assert_eq!(SizeExpr::retval().referenced_slots(), [None, None]);
        assert_eq!(SizeExpr::field(0).referenced_slots(), [None, None]);
    }
}
