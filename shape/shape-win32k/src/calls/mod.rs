//! # Call Handlers
//!
//! Calls whose shape depends on flags, on other arguments in ways a size
//! expression cannot say, or on a previous call. Each handler claims the
//! slots it alone describes; the contract's rules cover the rest.
//!
//! | Call | Handler | Claims |
//! |------|---------|--------|
//! | `NtUserSystemParametersInfo` | [`SystemParametersInfo`] | `pvParam` |
//! | `NtUserMenuInfo` | [`MenuInfo`] | `lpmi` |
//! | `NtUserMenuItemInfo` | [`MenuItemInfo`] | `lpmii` |
//! | `NtUserTrackMouseEvent` | [`TrackMouseEvent`] | `lpEventTrack` |
//! | `NtUserGetAltTabInfo` | [`GetAltTabInfo`] | `pszItemText` |
//! | `NtUserGetRawInputBuffer` | [`GetRawInputBuffer`] | `pData`, `pcbSize` |
//! | `NtUserGetRawInputData` | [`GetRawInputData`] | `pcbSize` |
//! | `NtUserGetRawInputDeviceInfo` | [`GetRawInputDeviceInfo`] | `pData`, `pcbSize` |
//! | `NtGdiCreatePaletteInternal` | [`CreatePaletteInternal`] | `pLogPal` |
//! | `NtGdiCheckBitmapBits` | [`CheckBitmapBits`] | `paResults` |
//! | `NtGdiDoPalette` | [`DoPalette`] | `pPalEntries` |
//! | `NtGdiExtTextOutW` | [`ExtTextOut`] | none |
//! | `NtGdiOpenDCW` | [`OpenDc`] | driver info, `pUMdhpdev` |
//! | `NtGdiHfontCreate` | [`HfontCreate`] | `pelfw` |
//! | `NtGdiCreateDIBSection` | [`CreateDibSection`] | none |

mod gdi;
mod input;
mod menu;
mod raw_input;
mod spi;

pub use gdi::{
    CheckBitmapBits, CreateDibSection, CreatePaletteInternal, DoPalette, ExtTextOut, HfontCreate,
    OpenDc,
};
pub use input::{GetAltTabInfo, TrackMouseEvent};
pub use menu::{MenuInfo, MenuItemInfo};
pub use raw_input::{
    GetRawInputBuffer, GetRawInputData, GetRawInputDeviceInfo, RAW_INPUT_BUFFER_SIZE,
};
pub use spi::SystemParametersInfo;

use crate::types::MetricsLayout;
use alloc::sync::Arc;
use shape_engine::{CallHandler, EngineBuilder};

/// Registers every call handler under its call's name.
#[must_use]
pub fn register(builder: EngineBuilder) -> EngineBuilder {
    builder
        .call_handler_for_version("NtUserSystemParametersInfo", |gate| -> Arc<dyn CallHandler> {
            Arc::new(SystemParametersInfo::new(MetricsLayout::for_gate(gate)))
        })
        .call_handler("NtUserMenuInfo", MenuInfo)
        .call_handler("NtUserMenuItemInfo", MenuItemInfo)
        .call_handler("NtUserTrackMouseEvent", TrackMouseEvent)
        .call_handler("NtUserGetAltTabInfo", GetAltTabInfo)
        .call_handler("NtUserGetRawInputBuffer", GetRawInputBuffer)
        .call_handler("NtUserGetRawInputData", GetRawInputData)
        .call_handler("NtUserGetRawInputDeviceInfo", GetRawInputDeviceInfo)
        .call_handler("NtGdiCreatePaletteInternal", CreatePaletteInternal)
        .call_handler("NtGdiCheckBitmapBits", CheckBitmapBits)
        .call_handler("NtGdiDoPalette", DoPalette)
        .call_handler("NtGdiExtTextOutW", ExtTextOut)
        .call_handler_for_version("NtGdiOpenDCW", |gate| -> Arc<dyn CallHandler> {
            Arc::new(OpenDc::for_gate(gate))
        })
        .call_handler("NtGdiHfontCreate", HfontCreate)
        .call_handler("NtGdiCreateDIBSection", CreateDibSection)
}
