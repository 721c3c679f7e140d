//! # Application Address Types
//!
//! Strongly typed wrappers for addresses and byte ranges inside the address
//! space of the application being checked.
//!
//! ## Overview
//!
//! Every value the checker pulls out of a kernel call's argument vector is a
//! raw 64-bit word. Some of those words are pointers into the application,
//! some are counts, some are handles. The types here mark the ones that are
//! pointers so they cannot be confused with counts, and give ranges a single
//! overflow-safe representation.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`AppAddress`] | A raw 64-bit address in the checked application. |
//! | [`AddressRange`] | A start address plus a length in bytes. |
//!
//! ## Typical Usage
//!
//! ```rust
//! # use shape_addresses::*;
//! let base = AppAddress::new(0x0000_7FF6_1000_0000);
//! let range = AddressRange::new(base, 80);
//!
//! // A field of a structure is a sub-range at an offset.
//! let field = range.field(16, 8).unwrap();
//! assert_eq!(field.start(), base + 16);
//!
//! // Ranges never run past the end of the address space.
//! assert!(AddressRange::new(AppAddress::new(u64::MAX), 2).end().is_none());
//! ```
//!
//! ## Design Notes
//!
//! - The types are `#[repr(transparent)]` / plain `Copy` values and implement
//!   `Eq`, `Ord`, and `Hash`, making them suitable as map keys.
//! - Arithmetic on [`AppAddress`] wraps: argument words come from untrusted
//!   code and must never make the checker itself panic. Range helpers that need
//!   an exact end use checked arithmetic instead.
//! - Values below [`AppAddress::ATOM_LIMIT`] are never mapped on Windows. The
//!   windowing calls overload pointer arguments with atoms and integer
//!   resource identifiers in that range.

#![cfg_attr(not(any(test, doctest)), no_std)]

use core::fmt;
use core::ops::{Add, AddAssign};

/// Principal raw address inside the checked application.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct AppAddress(u64);

impl AppAddress {
    /// The null pointer.
    pub const NULL: Self = Self(0);

    /// Everything below this address is an atom or an integer resource id.
    pub const ATOM_LIMIT: u64 = 0x1_0000;

    #[inline]
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Whether the value is an atom or `MAKEINTRESOURCE` id rather than a pointer.
    #[inline]
    #[must_use]
    pub const fn is_atom(self) -> bool {
        self.0 < Self::ATOM_LIMIT
    }

    /// Checked add of a byte offset, returning `None` on overflow.
    #[inline]
    #[must_use]
    pub const fn checked_add(self, offset: u64) -> Option<Self> {
        match self.0.checked_add(offset) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Wrapping add of a byte offset.
    #[inline]
    #[must_use]
    pub const fn wrapping_add(self, offset: u64) -> Self {
        Self(self.0.wrapping_add(offset))
    }
}

impl fmt::Debug for AppAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AppAddress(0x{:016X})", self.0)
    }
}

impl fmt::Display for AppAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016X}", self.as_u64())
    }
}

impl Add<u64> for AppAddress {
    type Output = Self;
    #[inline]
    fn add(self, rhs: u64) -> Self::Output {
        self.wrapping_add(rhs)
    }
}

impl AddAssign<u64> for AppAddress {
    #[inline]
    fn add_assign(&mut self, rhs: u64) {
        *self = self.wrapping_add(rhs);
    }
}

impl From<u64> for AppAddress {
    #[inline]
    fn from(v: u64) -> Self {
        Self::new(v)
    }
}

impl From<AppAddress> for u64 {
    #[inline]
    fn from(a: AppAddress) -> Self {
        a.as_u64()
    }
}

/// A contiguous range of application memory.
///
/// The length is a byte count; an empty range is valid and is what checks
/// degrade to when a size could not be determined.
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct AddressRange {
    start: AppAddress,
    len: u64,
}

impl AddressRange {
    #[inline]
    #[must_use]
    pub const fn new(start: AppAddress, len: u64) -> Self {
        Self { start, len }
    }

    #[inline]
    #[must_use]
    pub const fn from_raw(start: u64, len: u64) -> Self {
        Self::new(AppAddress::new(start), len)
    }

    #[inline]
    #[must_use]
    pub const fn start(self) -> AppAddress {
        self.start
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> u64 {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// One past the last byte, or `None` if the range wraps the address space.
    #[inline]
    #[must_use]
    pub const fn end(self) -> Option<AppAddress> {
        self.start.checked_add(self.len)
    }

    /// Whether `addr` lies inside the range.
    #[inline]
    #[must_use]
    pub const fn contains(self, addr: AppAddress) -> bool {
        addr.as_u64() >= self.start.as_u64() && addr.as_u64() - self.start.as_u64() < self.len
    }

    /// Whether `other` lies entirely inside this range.
    #[must_use]
    pub fn covers(self, other: Self) -> bool {
        if other.is_empty() {
            return true;
        }
        match (self.end(), other.end()) {
            (Some(end), Some(other_end)) => other.start >= self.start && other_end <= end,
            _ => false,
        }
    }

    /// The range shortened to at most `max` bytes.
    #[inline]
    #[must_use]
    pub const fn truncate(self, max: u64) -> Self {
        if self.len > max {
            Self::new(self.start, max)
        } else {
            self
        }
    }

    /// The sub-range `[offset, offset + len)` relative to the start, if it
    /// lies entirely inside this range.
    #[must_use]
    pub const fn field(self, offset: u64, len: u64) -> Option<Self> {
        match offset.checked_add(len) {
            Some(end) if end <= self.len => Some(Self::new(self.start.wrapping_add(offset), len)),
            _ => None,
        }
    }

    /// Everything from `offset` to the end of the range; empty if `offset`
    /// is past the end.
    #[must_use]
    pub const fn tail(self, offset: u64) -> Self {
        if offset >= self.len {
            Self::new(self.start.wrapping_add(self.len), 0)
        } else {
            Self::new(self.start.wrapping_add(offset), self.len - offset)
        }
    }
}

impl fmt::Debug for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AddressRange(0x{:016X}+{:#X})", self.start.0, self.len)
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[0x{:016X}+{:#X}]", self.start.0, self.len)
    }
}
