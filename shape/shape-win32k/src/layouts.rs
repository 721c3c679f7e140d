//! # Structure Layouts
//!
//! Offsets and sizes of the structures the windowing calls pass by pointer,
//! for a 64-bit application. Pointers and handles are 8 bytes; `LONG`,
//! `UINT` and `DWORD` are 4; `WCHAR` is 2.
//!
//! Only the fields some check looks at are named. Sizes are those of the
//! newest layout; structures that grew across releases have their older
//! boundaries listed next to them.

pub const PTR: u64 = 8;
pub const WCHAR: u64 = 2;

/// Element sizes for counted arrays.
pub const WCHAR_ELEM: u32 = 2;
pub const DWORD_ELEM: u32 = 4;

pub const POINT: u64 = 8;
pub const RECT: u64 = 16;
pub const SIZE: u64 = 8;
pub const MSG: u64 = 48;
pub const PAINTSTRUCT: u64 = 72;
pub const ACCEL: u32 = 6;
pub const PALETTEENTRY: u64 = 4;
pub const HANDLE: u32 = 8;
pub const RAWINPUTDEVICELIST: u32 = 16;

/// `UNICODE_STRING` and `LARGE_STRING` share a 16-byte shape.
pub mod counted_string {
    pub const SIZE: u64 = 16;
    /// `USHORT Length` for `UNICODE_STRING`, `ULONG Length` for `LARGE_STRING`.
    pub const LENGTH: u64 = 0;
    /// `USHORT MaximumLength` at 2 for `UNICODE_STRING`.
    pub const UNICODE_MAXIMUM_LENGTH: u64 = 2;
    /// `ULONG MaximumLength : 31` plus `bAnsi : 1` for `LARGE_STRING`.
    pub const LARGE_MAXIMUM_LENGTH: u64 = 4;
    pub const LARGE_ANSI_BIT: u32 = 1 << 31;
    pub const BUFFER: u64 = 8;
}

pub mod object_attributes {
    pub const SIZE: u64 = 48;
    pub const OBJECT_NAME: u64 = 16;
}

pub mod logfont {
    pub const SIZE: u64 = 92;
    /// Everything up to the face name is plain integers.
    pub const FACE_NAME: u64 = 28;
    /// `LF_FACESIZE` wide chars.
    pub const FACE_NAME_BYTES: u64 = 64;
}

/// `NONCLIENTMETRICSW` regions, in walk order. `iPaddedBorderWidth` was
/// appended in Vista.
pub mod nonclient_metrics {
    pub const CAPTION_FONT: u64 = 24;
    pub const SM_CAPTION_WIDTH: u64 = 116;
    pub const SM_CAPTION_FONT: u64 = 124;
    pub const MENU_WIDTH: u64 = 216;
    pub const MENU_FONT: u64 = 224;
    pub const STATUS_FONT: u64 = 316;
    pub const MESSAGE_FONT: u64 = 408;
    pub const SIZE_PRE_VISTA: u64 = 500;
    pub const SIZE_VISTA: u64 = 504;
}

pub mod icon_metrics {
    pub const FONT: u64 = 16;
    pub const SIZE: u64 = 108;
}

pub mod serial_keys {
    pub const SIZE: u64 = 40;
    pub const ACTIVE_PORT: u64 = 8;
    pub const PORT: u64 = 16;
}

pub mod sound_sentry {
    pub const EFFECT_DLL: u64 = 40;
}

pub mod high_contrast {
    pub const DEFAULT_SCHEME: u64 = 8;
}

pub mod devmode {
    pub const DM_SIZE: u64 = 68;
    pub const DRIVER_EXTRA: u64 = 70;
    /// `dmSize` and `dmDriverExtra` lie before this offset.
    pub const FIELDS: u64 = 72;
    /// One past `dmCollate`; padding follows up to `dmFormName`.
    pub const COLLATE_END: u64 = 102;
    pub const FORM_NAME: u64 = 102;
    pub const SIZE: u64 = 220;
}

pub mod wndclassex {
    pub const SIZE: u64 = 80;
    pub const MENU_NAME: u64 = 56;
    pub const CLASS_NAME: u64 = 64;
}

/// `CLSMENUNAME`: two ANSI/wide name pointers and a `UNICODE_STRING*`.
pub mod clsmenuname {
    pub const SIZE: u64 = 24;
}

pub mod menu_item_info {
    pub const SIZE: u64 = 80;
    /// `cbSize` and `fMask`.
    pub const HEADER: u64 = 8;
    pub const MASK: u64 = 4;
    pub const TYPE: u64 = 8;
    pub const STATE: u64 = 12;
    pub const ID: u64 = 16;
    pub const SUBMENU: u64 = 24;
    pub const CHECKED: u64 = 32;
    pub const UNCHECKED: u64 = 40;
    pub const ITEM_DATA: u64 = 48;
    pub const TYPE_DATA: u64 = 56;
    pub const CCH: u64 = 64;
    pub const BITMAP: u64 = 72;
}

pub mod menu_info {
    pub const SIZE: u64 = 40;
}

pub mod track_mouse_event {
    /// `cbSize` and `dwFlags`.
    pub const HEADER: u64 = 8;
    pub const FLAGS: u64 = 4;
    pub const SIZE: u64 = 24;
}

/// `ENUMLOGFONTEXDVW`: an `ENUMLOGFONTEXW` followed by a `DESIGNVECTOR`.
pub mod enum_logfont_dv {
    pub const FULL_NAME: u64 = 92;
    /// `LF_FULLFACESIZE` wide chars.
    pub const FULL_NAME_BYTES: u64 = 128;
    pub const STYLE: u64 = 220;
    pub const SCRIPT: u64 = 284;
    /// `LF_FACESIZE` wide chars, for style and script.
    pub const NAME_BYTES: u64 = 64;
    pub const DESIGN_VECTOR: u64 = 348;
    pub const AXES: u64 = 352;
    /// `dvReserved` and `dvNumAxes` precede the values.
    pub const DV_VALUES: u64 = 8;
    pub const MAX_AXES: u32 = 16;
}

/// `LOGPALETTE` header: `palVersion` and `palNumEntries`.
pub const LOGPALETTE_HEADER: u64 = 4;
pub const DRIVER_INFO_2W: u64 = 48;
