//! Raw input queries.
//!
//! All three follow the same protocol: called without a data buffer, the
//! kernel reports the needed size through `pcbSize`; called again with a
//! buffer, it fills up to that size. `NtUserGetRawInputBuffer` carries the
//! reported size from the first call to the second on the same thread.

use shape_engine::{Access, AddressRange, CallContext, CallHandler, Checker};

const UINT: u64 = 4;
const RIDI_DEVICENAME: u32 = 0x2000_0007;

/// Thread memory key for the size `NtUserGetRawInputBuffer` last reported.
pub const RAW_INPUT_BUFFER_SIZE: &str = "NtUserGetRawInputBuffer.size";

/// `NtUserGetRawInputBuffer(pData, pcbSize, cbSizeHeader)`.
///
/// Returns the number of `RAWINPUT` entries copied; the kernel stores the
/// entry size in `*pcbSize`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GetRawInputBuffer;

impl GetRawInputBuffer {
    const DATA: usize = 0;
    const SIZE: usize = 1;
    const HEADER: usize = 2;
}

impl CallHandler for GetRawInputBuffer {
    fn claims(&self) -> &[usize] {
        &[Self::DATA, Self::SIZE]
    }

    fn pre(&self, cx: &mut Checker<'_>, _ctx: &mut CallContext) {
        let data = cx.arg_addr(Self::DATA);
        let size = cx.arg_addr(Self::SIZE);
        if data.is_null() {
            cx.check_addressable(AddressRange::new(size, UINT), "pcbSize");
            return;
        }
        cx.check_defined(AddressRange::new(size, UINT), "pcbSize");
        match cx.recall(RAW_INPUT_BUFFER_SIZE) {
            Some(bytes) => cx.check_addressable(AddressRange::new(data, bytes), "pData"),
            None => cx.partially_modeled("pData without a prior size query"),
        }
    }

    fn post(&self, cx: &mut Checker<'_>, _ctx: &mut CallContext) {
        let data = cx.arg_addr(Self::DATA);
        let size = cx.arg_addr(Self::SIZE);
        if data.is_null() {
            cx.mark_written(AddressRange::new(size, UINT), "pcbSize");
            if let Some(bytes) = cx.read_u32(size, "pcbSize") {
                cx.remember(RAW_INPUT_BUFFER_SIZE, u64::from(bytes));
            }
            return;
        }
        let Some(entry) = cx.read_u32(size, "pcbSize") else {
            return;
        };
        let entries = cx.retval().map_or(0, |count| count & 0xFFFF_FFFF);
        let header = u64::from(cx.arg_u32(Self::HEADER));
        let Some(bytes) = u64::from(entry)
            .checked_mul(entries)
            .and_then(|bytes| bytes.checked_add(header))
        else {
            cx.rejected("RAWINPUT entries", entries);
            return;
        };
        cx.mark_written(AddressRange::new(data, bytes), "pData");
    }
}

/// `NtUserGetRawInputData(hRawInput, uiCommand, pData, pcbSize, cbSizeHeader)`:
/// `pcbSize` is an output without `pData` and an input with it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GetRawInputData;

impl GetRawInputData {
    const DATA: usize = 2;
    const SIZE: usize = 3;

    fn run(cx: &mut Checker<'_>) {
        let access = if cx.arg_addr(Self::DATA).is_null() {
            Access::Write
        } else {
            Access::Read
        };
        let size = cx.arg_addr(Self::SIZE);
        cx.check(access, AddressRange::new(size, UINT), "pcbSize");
    }
}

impl CallHandler for GetRawInputData {
    fn claims(&self) -> &[usize] {
        &[Self::SIZE]
    }

    fn pre(&self, cx: &mut Checker<'_>, _ctx: &mut CallContext) {
        Self::run(cx);
    }

    fn post(&self, cx: &mut Checker<'_>, _ctx: &mut CallContext) {
        Self::run(cx);
    }
}

/// `NtUserGetRawInputDeviceInfo(hDevice, uiCommand, pData, pcbSize)`.
///
/// `*pcbSize` counts wide characters for `RIDI_DEVICENAME` and bytes for
/// everything else. The kernel rewrites it, so the written range is clamped
/// to the capacity the caller declared.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GetRawInputDeviceInfo;

impl GetRawInputDeviceInfo {
    const COMMAND: usize = 1;
    const DATA: usize = 2;
    const SIZE: usize = 3;
    const CAPACITY: &'static str = "capacity";

    fn bytes(cx: &mut Checker<'_>) -> Option<u64> {
        let size = cx.arg_addr(Self::SIZE);
        let count = u64::from(cx.read_u32(size, "pcbSize")?);
        if cx.arg_u32(Self::COMMAND) == RIDI_DEVICENAME {
            Some(count * 2)
        } else {
            Some(count)
        }
    }
}

impl CallHandler for GetRawInputDeviceInfo {
    fn claims(&self) -> &[usize] {
        &[Self::DATA, Self::SIZE]
    }

    fn pre(&self, cx: &mut Checker<'_>, ctx: &mut CallContext) {
        let data = cx.arg_addr(Self::DATA);
        let size = cx.arg_addr(Self::SIZE);
        if data.is_null() {
            cx.check_addressable(AddressRange::new(size, UINT), "pcbSize");
            return;
        }
        cx.check_defined(AddressRange::new(size, UINT), "pcbSize");
        let Some(capacity) = Self::bytes(cx) else {
            return;
        };
        cx.check_addressable(AddressRange::new(data, capacity), "pData");
        ctx.stash(Self::CAPACITY, capacity);
    }

    fn post(&self, cx: &mut Checker<'_>, ctx: &mut CallContext) {
        let data = cx.arg_addr(Self::DATA);
        let size = cx.arg_addr(Self::SIZE);
        if data.is_null() {
            cx.mark_written(AddressRange::new(size, UINT), "pcbSize");
            return;
        }
        let Some(mut bytes) = Self::bytes(cx) else {
            return;
        };
        if let Some(capacity) = ctx.take(Self::CAPACITY)
            && bytes > capacity
        {
            cx.clamped("pData", bytes, capacity);
            bytes = capacity;
        }
        cx.mark_written(AddressRange::new(data, bytes), "pData");
    }
}
