//! Collaborators the engine consumes from its host.
//!
//! The engine never touches application memory directly. It reads through a
//! [`MemoryReader`] that must fail softly on unmapped memory, and reports its
//! conclusions to a [`ShadowMemory`] that owns the per-byte state.

use core::fmt;
use shape_addresses::{AddressRange, AppAddress};

/// A bounded read of application memory failed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
#[error("unable to read {len} bytes at {addr}")]
pub struct ReadFault {
    pub addr: AppAddress,
    pub len: usize,
}

impl ReadFault {
    #[inline]
    #[must_use]
    pub const fn new(addr: AppAddress, len: usize) -> Self {
        Self { addr, len }
    }
}

/// Crash-safe access to the application's memory.
pub trait MemoryReader {
    /// Fills `buf` from `addr`; fails without side effects if any byte is
    /// not readable.
    ///
    /// # Errors
    /// Any byte of `[addr, addr + buf.len())` is not mapped or not readable.
    fn read(&self, addr: AppAddress, buf: &mut [u8]) -> Result<(), ReadFault>;
}

/// Little-endian scalar reads on top of [`MemoryReader`].
pub trait MemoryReaderExt: MemoryReader {
    /// # Errors
    /// The bytes are not readable.
    fn read_array<const N: usize>(&self, addr: AppAddress) -> Result<[u8; N], ReadFault> {
        let mut buf = [0u8; N];
        self.read(addr, &mut buf)?;
        Ok(buf)
    }

    /// # Errors
    /// The bytes are not readable.
    fn read_u16(&self, addr: AppAddress) -> Result<u16, ReadFault> {
        self.read_array(addr).map(u16::from_le_bytes)
    }

    /// # Errors
    /// The bytes are not readable.
    fn read_u32(&self, addr: AppAddress) -> Result<u32, ReadFault> {
        self.read_array(addr).map(u32::from_le_bytes)
    }

    /// # Errors
    /// The bytes are not readable.
    fn read_u64(&self, addr: AppAddress) -> Result<u64, ReadFault> {
        self.read_array(addr).map(u64::from_le_bytes)
    }
}

impl<T: MemoryReader + ?Sized> MemoryReaderExt for T {}

/// Maps kernel call names to the numbers the running OS uses for them.
pub trait NumberResolver {
    fn resolve_number(&self, name: &str) -> Option<u32>;
}

/// Identifies what a shadow-memory operation is about, for the host's reports.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Label<'a> {
    /// Name of the kernel call being checked.
    pub call: &'static str,
    /// The parameter or field, e.g. `"MENUITEMINFOW.hbmpItem"`.
    pub what: &'a str,
}

impl fmt::Display for Label<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.call, self.what)
    }
}

/// The host's per-byte memory state.
///
/// The engine only issues requests; recording violations and choosing how to
/// report them belongs to the host.
pub trait ShadowMemory {
    /// The kernel may write `range`; it must be allocated.
    fn check_addressable(&self, range: AddressRange, label: &Label<'_>);

    /// The kernel reads `range`; it must be allocated and initialized.
    fn check_defined(&self, range: AddressRange, label: &Label<'_>);

    /// The kernel wrote `range`.
    fn mark_written(&self, range: AddressRange, label: &Label<'_>);

    /// `range` is known to be initialized without having been written by this call.
    fn mark_defined(&self, range: AddressRange, label: &Label<'_>);
}

/// Receives handle lifecycle events for calls flagged as creating or
/// destroying kernel objects.
pub trait HandleTracker {
    fn created(&self, call: &'static str, handle: u64);
    fn released(&self, call: &'static str, handle: u64);
}

/// Answers which mapping an address belongs to.
pub trait RegionQuery {
    /// The whole mapped region containing `addr`, or `None` if it is not
    /// mapped.
    fn region_containing(&self, addr: AppAddress) -> Option<AddressRange>;
}

/// One shadow-memory request.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MemoryOp {
    CheckAddressable,
    CheckDefined,
    MarkWritten,
    MarkDefined,
}

impl MemoryOp {
    pub(crate) fn apply(self, shadow: &dyn ShadowMemory, range: AddressRange, label: &Label<'_>) {
        match self {
            Self::CheckAddressable => shadow.check_addressable(range, label),
            Self::CheckDefined => shadow.check_defined(range, label),
            Self::MarkWritten => shadow.mark_written(range, label),
            Self::MarkDefined => shadow.mark_defined(range, label),
        }
    }
}

/// Everything a single call check needs from the host.
#[derive(Copy, Clone)]
pub struct CallEnv<'a> {
    pub memory: &'a dyn MemoryReader,
    pub shadow: &'a dyn ShadowMemory,
    pub handles: Option<&'a dyn HandleTracker>,
    pub regions: Option<&'a dyn RegionQuery>,
}

impl<'a> CallEnv<'a> {
    #[must_use]
    pub const fn new(memory: &'a dyn MemoryReader, shadow: &'a dyn ShadowMemory) -> Self {
        Self {
            memory,
            shadow,
            handles: None,
            regions: None,
        }
    }

    #[must_use]
    pub const fn with_handles(mut self, handles: &'a dyn HandleTracker) -> Self {
        self.handles = Some(handles);
        self
    }

    #[must_use]
    pub const fn with_regions(mut self, regions: &'a dyn RegionQuery) -> Self {
        self.regions = Some(regions);
        self
    }
}
