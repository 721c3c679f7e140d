use core::fmt;

/// Numeric identifier of a kernel call as the substrate reports it.
///
/// Combined calls (one kernel entry point that multiplexes many operations
/// through an opcode argument) are keyed by a packed id: the primary number
/// in the low 16 bits and `opcode + 1` in the high 16 bits. The `+ 1` keeps
/// opcode 0 distinct from a plain, uncombined id.
///
/// ```text
///  31                16 15                 0
/// ┌────────────────────┬────────────────────┐
/// │   opcode + 1 (or 0)│   primary number   │
/// └────────────────────┴────────────────────┘
/// ```
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct CallId(u32);

impl CallId {
    const PRIMARY_BITS: u32 = 16;
    const PRIMARY_MASK: u32 = (1 << Self::PRIMARY_BITS) - 1;

    #[inline]
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Packs a primary id and an opcode into one id.
    ///
    /// Returns `None` if the primary does not fit in 16 bits or is itself
    /// already combined, or if the opcode is `u16::MAX`.
    #[must_use]
    pub const fn combine(primary: Self, opcode: u16) -> Option<Self> {
        if primary.0 > Self::PRIMARY_MASK || opcode == u16::MAX {
            return None;
        }
        Some(Self(primary.0 | ((opcode as u32 + 1) << Self::PRIMARY_BITS)))
    }

    /// The primary part of a combined id; plain ids are returned unchanged.
    #[inline]
    #[must_use]
    pub const fn primary(self) -> Self {
        Self(self.0 & Self::PRIMARY_MASK)
    }

    /// The opcode of a combined id.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn opcode(self) -> Option<u16> {
        match self.0 >> Self::PRIMARY_BITS {
            0 => None,
            hi => Some((hi - 1) as u16),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_combined(self) -> bool {
        self.0 > Self::PRIMARY_MASK
    }
}

impl fmt::Debug for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CallId({self})")
    }
}

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.opcode() {
            Some(op) => write!(f, "{:#06X}.{op:#X}", self.primary().0),
            None => write!(f, "{:#06X}", self.0),
        }
    }
}

impl From<u32> for CallId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::new(raw)
    }
}
