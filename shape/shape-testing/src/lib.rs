//! # Test Doubles for the Shape Engine
//!
//! A byte-level model of an application address space that plays both host
//! roles the engine needs: [`MemoryReader`] for crash-safe reads and
//! [`ShadowMemory`] for addressability and definedness.
//!
//! Every byte the test maps is *addressable*; a byte becomes *defined* when
//! the test writes a value into it or the engine marks it. Every shadow
//! request is recorded as a [`ShadowEvent`], and requests that hit
//! unaddressable or undefined bytes are also recorded as [`Violation`]s.
//!
//! ```
//! # use shape_testing::*;
//! # use shape_engine::{AddressRange, AppAddress};
//! let process = FakeProcess::new();
//! let buf = process.alloc(16);
//! process.write_u32(buf, 0x30);
//! assert!(process.is_defined(AddressRange::new(buf, 4)));
//! assert!(!process.is_defined(AddressRange::new(buf, 5)));
//! ```

use shape_engine::{
    AddressRange, AppAddress, HandleTracker, Label, MemoryReader, NumberResolver, ReadFault,
    RegionQuery, ShadowMemory,
};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

/// Allocations start here and are spaced so that every buffer is followed by
/// unmapped memory.
const HEAP_BASE: u64 = 0x0000_0200_0000_0000;
const ALLOC_SPACING: u64 = 0x1_0000;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShadowKind {
    CheckAddressable,
    CheckDefined,
    MarkWritten,
    MarkDefined,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ShadowEvent {
    pub kind: ShadowKind,
    pub range: AddressRange,
    pub call: &'static str,
    pub what: String,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ViolationKind {
    Unaddressable,
    Undefined,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Violation {
    pub kind: ViolationKind,
    /// The first offending byte.
    pub addr: AppAddress,
    pub call: &'static str,
    pub what: String,
}

#[derive(Debug, Clone)]
struct Region {
    bytes: Vec<u8>,
    defined: Vec<bool>,
}

#[derive(Default)]
pub struct FakeProcess {
    regions: RefCell<BTreeMap<u64, Region>>,
    next: Cell<u64>,
    events: RefCell<Vec<ShadowEvent>>,
    violations: RefCell<Vec<Violation>>,
}

impl FakeProcess {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: Cell::new(HEAP_BASE),
            ..Self::default()
        }
    }

    /// Maps `len` addressable but undefined bytes.
    pub fn alloc(&self, len: usize) -> AppAddress {
        let base = self.next.get();
        let spacing = (len as u64).div_ceil(ALLOC_SPACING).max(1) * ALLOC_SPACING + ALLOC_SPACING;
        self.next.set(base + spacing);
        self.map(AppAddress::new(base), len);
        AppAddress::new(base)
    }

    /// Maps `len` bytes at a fixed address.
    pub fn map(&self, at: AppAddress, len: usize) {
        self.regions.borrow_mut().insert(
            at.as_u64(),
            Region {
                bytes: vec![0; len],
                defined: vec![false; len],
            },
        );
    }

    /// Maps `bytes` at a fresh address and marks them defined.
    pub fn alloc_bytes(&self, bytes: &[u8]) -> AppAddress {
        let at = self.alloc(bytes.len());
        self.write(at, bytes);
        at
    }

    /// Maps a nul-terminated UTF-16 copy of `text`.
    pub fn alloc_wide(&self, text: &str) -> AppAddress {
        self.alloc_bytes(&wide(text))
    }

    /// Stores `bytes` as the application would: the bytes become defined.
    ///
    /// # Panics
    /// The range is not mapped.
    pub fn write(&self, at: AppAddress, bytes: &[u8]) {
        self.with_bytes(at, bytes.len(), |data, defined| {
            data.copy_from_slice(bytes);
            defined.fill(true);
        })
        .expect("write to unmapped test memory");
    }

    pub fn write_u16(&self, at: AppAddress, value: u16) {
        self.write(at, &value.to_le_bytes());
    }

    pub fn write_u32(&self, at: AppAddress, value: u32) {
        self.write(at, &value.to_le_bytes());
    }

    pub fn write_u64(&self, at: AppAddress, value: u64) {
        self.write(at, &value.to_le_bytes());
    }

    /// Stores a value the way the kernel would, without touching definedness.
    ///
    /// # Panics
    /// The range is not mapped.
    pub fn kernel_write(&self, at: AppAddress, bytes: &[u8]) {
        self.with_bytes(at, bytes.len(), |data, _| data.copy_from_slice(bytes))
            .expect("kernel write to unmapped test memory");
    }

    pub fn kernel_write_u32(&self, at: AppAddress, value: u32) {
        self.kernel_write(at, &value.to_le_bytes());
    }

    #[must_use]
    pub fn is_defined(&self, range: AddressRange) -> bool {
        self.with_bytes(range.start(), len_of(range), |_, defined| {
            defined.iter().all(|d| *d)
        })
        .unwrap_or(false)
    }

    #[must_use]
    pub fn is_addressable(&self, range: AddressRange) -> bool {
        self.with_bytes(range.start(), len_of(range), |_, _| ()).is_some()
    }

    /// All shadow requests so far.
    #[must_use]
    pub fn events(&self) -> Vec<ShadowEvent> {
        self.events.borrow().clone()
    }

    /// Shadow requests of one kind.
    #[must_use]
    pub fn events_of(&self, kind: ShadowKind) -> Vec<AddressRange> {
        self.events
            .borrow()
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.range)
            .collect()
    }

    #[must_use]
    pub fn violations(&self) -> Vec<Violation> {
        self.violations.borrow().clone()
    }

    /// Forgets recorded events and violations; memory stays as it is.
    pub fn clear_log(&self) {
        self.events.borrow_mut().clear();
        self.violations.borrow_mut().clear();
    }

    fn with_bytes<R>(
        &self,
        at: AppAddress,
        len: usize,
        f: impl FnOnce(&mut [u8], &mut [bool]) -> R,
    ) -> Option<R> {
        let mut regions = self.regions.borrow_mut();
        let (base, region) = regions.range_mut(..=at.as_u64()).next_back()?;
        let start = usize::try_from(at.as_u64() - base).ok()?;
        let end = start.checked_add(len)?;
        if end > region.bytes.len() {
            return None;
        }
        Some(f(
            &mut region.bytes[start..end],
            &mut region.defined[start..end],
        ))
    }

    /// The first byte of `range` that is unmapped, or undefined when
    /// `need_defined`.
    fn first_bad_byte(&self, range: AddressRange, need_defined: bool) -> Option<(AppAddress, ViolationKind)> {
        let regions = self.regions.borrow();
        let mut offset = 0;
        while offset < range.len() {
            let addr = range.start() + offset;
            let byte = regions
                .range(..=addr.as_u64())
                .next_back()
                .and_then(|(base, region)| {
                    let i = usize::try_from(addr.as_u64() - base).ok()?;
                    region.defined.get(i).copied()
                });
            match byte {
                None => return Some((addr, ViolationKind::Unaddressable)),
                Some(false) if need_defined => return Some((addr, ViolationKind::Undefined)),
                _ => {}
            }
            offset += 1;
        }
        None
    }

    fn record(&self, kind: ShadowKind, range: AddressRange, label: &Label<'_>) {
        self.events.borrow_mut().push(ShadowEvent {
            kind,
            range,
            call: label.call,
            what: label.what.to_string(),
        });
    }

    fn check(&self, range: AddressRange, need_defined: bool, label: &Label<'_>) {
        if let Some((addr, kind)) = self.first_bad_byte(range, need_defined) {
            self.violations.borrow_mut().push(Violation {
                kind,
                addr,
                call: label.call,
                what: label.what.to_string(),
            });
        }
    }

    fn define(&self, range: AddressRange) {
        let mut offset = 0;
        while offset < range.len() {
            let addr = range.start() + offset;
            // Unmapped bytes stay unmapped; the engine already reported them.
            let _ = self.with_bytes(addr, 1, |_, defined| defined[0] = true);
            offset += 1;
        }
    }
}

fn len_of(range: AddressRange) -> usize {
    usize::try_from(range.len()).unwrap_or(usize::MAX)
}

/// UTF-16LE bytes of `text` plus a terminator.
#[must_use]
pub fn wide(text: &str) -> Vec<u8> {
    let mut bytes: Vec<u8> = text.encode_utf16().flat_map(u16::to_le_bytes).collect();
    bytes.extend_from_slice(&[0, 0]);
    bytes
}

impl MemoryReader for FakeProcess {
    fn read(&self, addr: AppAddress, buf: &mut [u8]) -> Result<(), ReadFault> {
        self.with_bytes(addr, buf.len(), |data, _| buf.copy_from_slice(data))
            .ok_or(ReadFault::new(addr, buf.len()))
    }
}

impl RegionQuery for FakeProcess {
    fn region_containing(&self, addr: AppAddress) -> Option<AddressRange> {
        let regions = self.regions.borrow();
        let (base, region) = regions.range(..=addr.as_u64()).next_back()?;
        let len = region.bytes.len() as u64;
        (addr.as_u64() - base < len).then(|| AddressRange::new(AppAddress::new(*base), len))
    }
}

impl ShadowMemory for FakeProcess {
    fn check_addressable(&self, range: AddressRange, label: &Label<'_>) {
        self.record(ShadowKind::CheckAddressable, range, label);
        self.check(range, false, label);
    }

    fn check_defined(&self, range: AddressRange, label: &Label<'_>) {
        self.record(ShadowKind::CheckDefined, range, label);
        self.check(range, true, label);
    }

    fn mark_written(&self, range: AddressRange, label: &Label<'_>) {
        self.record(ShadowKind::MarkWritten, range, label);
        self.check(range, false, label);
        self.define(range);
    }

    fn mark_defined(&self, range: AddressRange, label: &Label<'_>) {
        self.record(ShadowKind::MarkDefined, range, label);
        self.define(range);
    }
}

/// Hands out consecutive numbers to every name asked about, starting at the
/// first number the windowing calls use.
pub struct SequentialNumbers {
    next: Cell<u32>,
    assigned: RefCell<BTreeMap<String, u32>>,
    unknown: Vec<&'static str>,
}

impl SequentialNumbers {
    pub const FIRST: u32 = 0x1000;

    #[must_use]
    pub fn new() -> Self {
        Self {
            next: Cell::new(Self::FIRST),
            assigned: RefCell::default(),
            unknown: Vec::new(),
        }
    }

    /// Names that should not resolve, as if missing from the system.
    #[must_use]
    pub fn without(mut self, names: &[&'static str]) -> Self {
        self.unknown.extend_from_slice(names);
        self
    }

    #[must_use]
    pub fn number_of(&self, name: &str) -> Option<u32> {
        self.assigned.borrow().get(name).copied()
    }
}

impl Default for SequentialNumbers {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberResolver for SequentialNumbers {
    fn resolve_number(&self, name: &str) -> Option<u32> {
        if self.unknown.contains(&name) {
            return None;
        }
        let mut assigned = self.assigned.borrow_mut();
        if let Some(number) = assigned.get(name) {
            return Some(*number);
        }
        let number = self.next.get();
        self.next.set(number + 1);
        assigned.insert(name.to_string(), number);
        Some(number)
    }
}

/// Resolves exactly the names it was given.
#[derive(Default)]
pub struct FixedNumbers(BTreeMap<&'static str, u32>);

impl FixedNumbers {
    #[must_use]
    pub fn new(entries: &[(&'static str, u32)]) -> Self {
        Self(entries.iter().copied().collect())
    }
}

impl NumberResolver for FixedNumbers {
    fn resolve_number(&self, name: &str) -> Option<u32> {
        self.0.get(name).copied()
    }
}

/// Records handle lifecycle events.
#[derive(Default)]
pub struct HandleLog {
    pub created: RefCell<Vec<(&'static str, u64)>>,
    pub released: RefCell<Vec<(&'static str, u64)>>,
}

impl HandleTracker for HandleLog {
    fn created(&self, call: &'static str, handle: u64) {
        self.created.borrow_mut().push((call, handle));
    }

    fn released(&self, call: &'static str, handle: u64) {
        self.released.borrow_mut().push((call, handle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocations_are_separated_by_unmapped_memory() {
        let p = FakeProcess::new();
        let a = p.alloc(8);
        let b = p.alloc(8);
        assert!(p.is_addressable(AddressRange::new(a, 8)));
        assert!(!p.is_addressable(AddressRange::new(a, 9)));
        assert_ne!(a, b);
    }

    #[test]
    fn reads_fail_past_the_end() {
        let p = FakeProcess::new();
        let a = p.alloc_bytes(&[1, 2, 3, 4]);
        let mut buf = [0u8; 4];
        assert!(p.read(a, &mut buf).is_ok());
        assert_eq!(buf, [1, 2, 3, 4]);
        let mut buf = [0u8; 5];
        assert!(p.read(a, &mut buf).is_err());
    }

    #[test]
    fn checks_record_violations() {
        let p = FakeProcess::new();
        let a = p.alloc(8);
        p.write_u32(a, 7);
        let label = Label {
            call: "NtTest",
            what: "buf",
        };
        p.check_defined(AddressRange::new(a, 4), &label);
        assert!(p.violations().is_empty());
        p.check_defined(AddressRange::new(a, 8), &label);
        assert_eq!(p.violations()[0].kind, ViolationKind::Undefined);
        assert_eq!(p.violations()[0].addr, a + 4);
        p.check_addressable(AddressRange::new(a, 9), &label);
        assert_eq!(p.violations()[1].kind, ViolationKind::Unaddressable);
    }

    #[test]
    fn marking_defines_bytes() {
        let p = FakeProcess::new();
        let a = p.alloc(8);
        let label = Label {
            call: "NtTest",
            what: "buf",
        };
        p.mark_written(AddressRange::new(a, 8), &label);
        assert!(p.is_defined(AddressRange::new(a, 8)));
    }

    #[test]
    fn regions_are_found_from_interior_addresses() {
        let p = FakeProcess::new();
        let a = p.alloc(64);
        assert_eq!(p.region_containing(a + 63), Some(AddressRange::new(a, 64)));
        assert_eq!(p.region_containing(a + 64), None);
        assert_eq!(p.region_containing(AppAddress::new(1)), None);
    }

    #[test]
    fn sequential_numbers_are_stable() {
        let n = SequentialNumbers::new().without(&["NtGone"]);
        let a = n.resolve_number("NtA").unwrap();
        let b = n.resolve_number("NtB").unwrap();
        assert_eq!(n.resolve_number("NtA"), Some(a));
        assert_eq!(b, a + 1);
        assert_eq!(n.resolve_number("NtGone"), None);
    }
}
