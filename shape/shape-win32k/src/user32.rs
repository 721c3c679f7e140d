//! # `NtUser*` Contracts
//!
//! One entry per user-interface call: argument count, flags, and the rules
//! for every pointer argument whose shape is static or follows from other
//! arguments. Calls listed here with a handler in [`crate::calls`] leave
//! the slots that handler claims without rules.
//!
//! The `NtUserCall*` multiplexers are listed here as primaries; their
//! routines live in [`crate::usercall`].

use crate::layouts::{
    ACCEL, DWORD_ELEM, HANDLE, MSG, PAINTSTRUCT, POINT, PTR, RAWINPUTDEVICELIST, RECT, SIZE, WCHAR,
    WCHAR_ELEM, clsmenuname, counted_string, devmode, menu_info, menu_item_info, object_attributes,
    wndclassex,
};
use crate::types::{
    CLSMENUNAME, DEVMODEW, LARGE_STRING, MENUITEMINFOW, OBJECT_ATTRIBUTES, UNICODE_STRING,
    UNICODE_STRING_NOLEN, WNDCLASSEXW,
};
use crate::{CREATES, IMM32, OK, UNKNOWN, ZERO_FAIL};
use shape_engine::{Access, ContractSpec, FieldRule, SizeExpr};

const US: u64 = counted_string::SIZE;
const UINT: u64 = 4;
const KL_NAMELENGTH: u64 = 9;
const SECURITY_QUALITY_OF_SERVICE: u64 = 12;
const ICONINFO: u64 = 32;
const MINMAXINFO: u64 = 40;

const fn unicode_string(slot: usize, access: Access) -> FieldRule {
    FieldRule::complex(slot, US, access, UNICODE_STRING)
}

const fn large_string(slot: usize) -> FieldRule {
    FieldRule::complex(slot, US, Access::Read, LARGE_STRING)
}

const fn object_attrs(slot: usize) -> FieldRule {
    FieldRule::complex(slot, object_attributes::SIZE, Access::Read, OBJECT_ATTRIBUTES)
}

const fn dev_mode(slot: usize, access: Access) -> FieldRule {
    FieldRule::complex(slot, devmode::SIZE, access, DEVMODEW)
}

/// A structure whose first `DWORD` is its size.
const fn sized_by_header(slot: usize, access: Access) -> FieldRule {
    FieldRule::new(slot, SizeExpr::field(0), access)
}

const fn rect(slot: usize, access: Access) -> FieldRule {
    FieldRule::new(slot, SizeExpr::literal(RECT), access)
}

const BEGIN_PAINT: &[FieldRule] = &[FieldRule::write(1, SizeExpr::literal(PAINTSTRUCT))];
const BUILD_HIMC_LIST: &[FieldRule] = &[
    FieldRule::write(2, SizeExpr::arg_elems(1, HANDLE)),
    FieldRule::write(3, SizeExpr::literal(UINT)),
];
const BUILD_HWND_LIST: &[FieldRule] = &[
    FieldRule::write(5, SizeExpr::arg_ptr_elems(6, HANDLE)),
    FieldRule::read_write(6, SizeExpr::literal(UINT)),
];
const BUILD_MENU_ITEM_LIST: &[FieldRule] = &[FieldRule::write(1, SizeExpr::arg(2))];
const BUILD_NAME_LIST: &[FieldRule] = &[
    FieldRule::write(2, SizeExpr::arg(1)).pre_only(),
    FieldRule::write(2, SizeExpr::arg_ptr(3)),
    FieldRule::write(3, SizeExpr::literal(UINT)),
];
const BUILD_PROP_LIST: &[FieldRule] = &[
    FieldRule::write(1, SizeExpr::arg(2)).pre_only(),
    FieldRule::write(1, SizeExpr::arg_ptr(3)),
    FieldRule::write(3, SizeExpr::literal(UINT)),
];
const CALL_MSG_FILTER: &[FieldRule] = &[FieldRule::read_write(0, SizeExpr::literal(MSG))];
/// `lParam` is a `VIDEOPARAMETERS` only under `CDS_VIDEOPARAMETERS` and is
/// left unchecked.
const CHANGE_DISPLAY_SETTINGS: &[FieldRule] =
    &[unicode_string(0, Access::Read), dev_mode(1, Access::Read)];
const CLIP_CURSOR: &[FieldRule] = &[rect(0, Access::Read)];
const COPY_ACCELERATOR_TABLE: &[FieldRule] = &[FieldRule::write(1, SizeExpr::arg_elems(2, ACCEL))];
const CREATE_ACCELERATOR_TABLE: &[FieldRule] =
    &[FieldRule::read(0, SizeExpr::arg_elems(1, ACCEL))];
const CREATE_DESKTOP: &[FieldRule] = &[
    object_attrs(0),
    unicode_string(1, Access::Read),
    dev_mode(2, Access::Read),
];
const CREATE_LOCAL_MEM_HANDLE: &[FieldRule] =
    &[FieldRule::write(1, SizeExpr::arg(2)), FieldRule::write(3, SizeExpr::literal(UINT))];
const CREATE_WINDOW_EX: &[FieldRule] = &[large_string(1), large_string(2), large_string(3)];
const CREATE_WINDOW_STATION: &[FieldRule] = &[object_attrs(0)];
const DDE_GET_QUALITY_OF_SERVICE: &[FieldRule] =
    &[FieldRule::write(2, SizeExpr::literal(SECURITY_QUALITY_OF_SERVICE))];
const DDE_SET_QUALITY_OF_SERVICE: &[FieldRule] = &[
    FieldRule::read(1, SizeExpr::literal(SECURITY_QUALITY_OF_SERVICE)),
    FieldRule::write(2, SizeExpr::literal(SECURITY_QUALITY_OF_SERVICE)),
];
const DEF_SET_TEXT: &[FieldRule] = &[large_string(1)];
const DISPATCH_MESSAGE: &[FieldRule] = &[FieldRule::read(0, SizeExpr::literal(MSG))];
const DRAW_ANIMATED_RECTS: &[FieldRule] = &[rect(2, Access::Read), rect(3, Access::Read)];
const DRAW_CAPTION: &[FieldRule] = &[rect(2, Access::Read)];
const DRAW_CAPTION_TEMP: &[FieldRule] = &[rect(2, Access::Read), unicode_string(5, Access::Read)];
const DRAW_MENU_BAR_TEMP: &[FieldRule] = &[rect(2, Access::Read)];
const END_PAINT: &[FieldRule] = &[FieldRule::read(1, SizeExpr::literal(PAINTSTRUCT))];
const ENUM_DISPLAY_DEVICES: &[FieldRule] = &[
    unicode_string(0, Access::Read),
    sized_by_header(2, Access::Write),
];
const ENUM_DISPLAY_MONITORS: &[FieldRule] = &[rect(1, Access::Read)];
const ENUM_DISPLAY_SETTINGS: &[FieldRule] = &[
    unicode_string(0, Access::Read),
    dev_mode(2, Access::Write),
];
const FIND_WINDOW_EX: &[FieldRule] = &[
    unicode_string(2, Access::Read),
    unicode_string(3, Access::Read),
];
const FLASH_WINDOW_EX: &[FieldRule] = &[sized_by_header(0, Access::Read)];
const GET_ALT_TAB_INFO: &[FieldRule] = &[sized_by_header(2, Access::Write)];
const GET_ATOM_NAME: &[FieldRule] =
    &[FieldRule::complex(1, US, Access::Write, UNICODE_STRING_NOLEN)];
const GET_CARET_POS: &[FieldRule] = &[FieldRule::write(0, SizeExpr::literal(POINT))];
const GET_CLASS_INFO: &[FieldRule] = &[
    unicode_string(1, Access::Read),
    FieldRule::complex(2, wndclassex::SIZE, Access::Write, WNDCLASSEXW),
    FieldRule::write(3, SizeExpr::literal(PTR)),
];
const GET_CLASS_NAME: &[FieldRule] =
    &[FieldRule::complex(2, US, Access::Write, UNICODE_STRING_NOLEN)];
const GET_CLIPBOARD_DATA: &[FieldRule] = &[FieldRule::write(1, SizeExpr::literal(12))];
const GET_CLIPBOARD_FORMAT_NAME: &[FieldRule] = &[unicode_string(1, Access::Write)];
const GET_CLIP_CURSOR: &[FieldRule] = &[rect(0, Access::Write)];
const GET_ICON_INFO: &[FieldRule] = &[
    FieldRule::write(1, SizeExpr::literal(ICONINFO)),
    FieldRule::complex(2, US, Access::Write, UNICODE_STRING_NOLEN),
    unicode_string(3, Access::Write),
    FieldRule::write(4, SizeExpr::literal(UINT)),
];
const GET_ICON_SIZE: &[FieldRule] = &[
    FieldRule::write(2, SizeExpr::literal(4)),
    FieldRule::write(3, SizeExpr::literal(4)),
];
const GET_INTERNAL_WINDOW_POS: &[FieldRule] =
    &[rect(1, Access::Write), FieldRule::write(2, SizeExpr::literal(POINT))];
const GET_KEYBOARD_LAYOUT_LIST: &[FieldRule] = &[
    FieldRule::write(1, SizeExpr::arg_elems(0, HANDLE)).pre_only(),
    FieldRule::write(1, SizeExpr::retval_elems(HANDLE)),
];
const GET_KEYBOARD_LAYOUT_NAME: &[FieldRule] = &[FieldRule::bounded_wide_string(
    0,
    SizeExpr::literal(KL_NAMELENGTH * WCHAR),
    Access::Write,
)];
const GET_KEYBOARD_STATE: &[FieldRule] = &[FieldRule::write(0, SizeExpr::literal(256))];
const GET_KEY_NAME_TEXT: &[FieldRule] = &[
    FieldRule::write(1, SizeExpr::arg_elems(2, WCHAR_ELEM)).pre_only(),
    FieldRule::write(1, SizeExpr::retval_elems(WCHAR_ELEM)),
];
const GET_LAYERED_WINDOW_ATTRIBUTES: &[FieldRule] = &[
    FieldRule::write(1, SizeExpr::literal(UINT)),
    FieldRule::write(2, SizeExpr::literal(1)),
    FieldRule::write(3, SizeExpr::literal(UINT)),
];
const GET_MENU_BAR_INFO: &[FieldRule] = &[sized_by_header(3, Access::Write)];
const GET_MENU_ITEM_RECT: &[FieldRule] = &[rect(3, Access::Write)];
const GET_MESSAGE: &[FieldRule] = &[FieldRule::write(0, SizeExpr::literal(MSG))];
const GET_MIN_MAX_INFO: &[FieldRule] = &[FieldRule::write(1, SizeExpr::literal(MINMAXINFO))];
const GET_MOUSE_MOVE_POINTS_EX: &[FieldRule] = &[
    FieldRule::read(1, SizeExpr::arg(0)),
    FieldRule::write(2, SizeExpr::arg_by_arg(3, 0)),
];
const GET_OBJECT_INFORMATION: &[FieldRule] = &[
    FieldRule::write(2, SizeExpr::arg(3)).pre_only(),
    FieldRule::write(2, SizeExpr::arg_ptr(4)),
    FieldRule::write(4, SizeExpr::literal(UINT)),
];
const GET_PRIORITY_CLIPBOARD_FORMAT: &[FieldRule] =
    &[FieldRule::read(0, SizeExpr::arg_elems(1, DWORD_ELEM))];
const GET_RAW_INPUT_DATA: &[FieldRule] = &[
    FieldRule::write(2, SizeExpr::arg_ptr(3)).pre_only(),
    FieldRule::write(2, SizeExpr::retval()),
];
const GET_RAW_INPUT_DEVICE_LIST: &[FieldRule] = &[
    FieldRule::write(0, SizeExpr::arg_ptr_elems(1, RAWINPUTDEVICELIST)).pre_only(),
    FieldRule::write(0, SizeExpr::retval_elems(RAWINPUTDEVICELIST)),
    FieldRule::read_write(1, SizeExpr::literal(UINT)),
];
const GET_SCROLL_BAR_INFO: &[FieldRule] = &[sized_by_header(2, Access::Write)];
const GET_UPDATE_RECT: &[FieldRule] = &[rect(1, Access::Write)];
const GET_WOW_CLASS: &[FieldRule] = &[unicode_string(1, Access::Read)];
const HEADER_AT_0: &[FieldRule] = &[sized_by_header(0, Access::Write)];
const HEADER_AT_1: &[FieldRule] = &[sized_by_header(1, Access::Write)];
const INTERNAL_GET_WINDOW_TEXT: &[FieldRule] = &[FieldRule::bounded_wide_string(
    1,
    SizeExpr::arg_elems(2, WCHAR_ELEM),
    Access::Write,
)];
const INVALIDATE_RECT: &[FieldRule] = &[rect(1, Access::Read)];
const LOAD_KEYBOARD_LAYOUT_EX: &[FieldRule] = &[
    unicode_string(2, Access::Read),
    unicode_string(4, Access::Read),
];
const MONITOR_FROM_RECT: &[FieldRule] = &[rect(0, Access::Read)];
const OBJECT_ATTRS_AT_0: &[FieldRule] = &[object_attrs(0)];
const PEEK_MESSAGE: &[FieldRule] = &[FieldRule::write(0, SizeExpr::literal(MSG))];
const REAL_INTERNAL_GET_MESSAGE: &[FieldRule] = &[FieldRule::write(0, SizeExpr::literal(MSG))];
const REDRAW_WINDOW: &[FieldRule] = &[rect(1, Access::Read)];
const REGISTER_CLASS_EX_WOW: &[FieldRule] = &[
    FieldRule::complex(0, wndclassex::SIZE, Access::Read, WNDCLASSEXW),
    unicode_string(1, Access::Read),
    unicode_string(2, Access::Read),
    FieldRule::complex(3, clsmenuname::SIZE, Access::Read, CLSMENUNAME),
    FieldRule::read(6, SizeExpr::literal(UINT)),
];
const REGISTER_RAW_INPUT_DEVICES: &[FieldRule] = &[FieldRule::read(0, SizeExpr::arg_by_arg(1, 2))];
const REGISTER_USER_API_HOOK: &[FieldRule] =
    &[unicode_string(0, Access::Read), unicode_string(1, Access::Read)];
const REGISTER_WINDOW_MESSAGE: &[FieldRule] = &[unicode_string(0, Access::Read)];
const SCROLL_DC: &[FieldRule] = &[
    rect(3, Access::Read),
    rect(4, Access::Read),
    rect(6, Access::Write),
];
const SCROLL_WINDOW_EX: &[FieldRule] =
    &[rect(3, Access::Read), rect(4, Access::Read), rect(6, Access::Write)];
const SEND_INPUT: &[FieldRule] = &[FieldRule::read(1, SizeExpr::arg_by_arg(0, 2))];
const SET_CURSOR_CONTENTS: &[FieldRule] = &[FieldRule::read(1, SizeExpr::literal(ICONINFO))];
const SET_CURSOR_ICON_DATA: &[FieldRule] = &[
    FieldRule::read(1, SizeExpr::literal(4)),
    FieldRule::read(2, SizeExpr::literal(POINT)),
];
const SET_INTERNAL_WINDOW_POS: &[FieldRule] =
    &[rect(2, Access::Read), FieldRule::read(3, SizeExpr::literal(POINT))];
const SET_KEYBOARD_STATE: &[FieldRule] = &[FieldRule::read(0, SizeExpr::literal(256))];
const SET_OBJECT_INFORMATION: &[FieldRule] = &[FieldRule::read(2, SizeExpr::arg(3))];
const SET_SCROLL_INFO: &[FieldRule] = &[sized_by_header(2, Access::Read)];
const SET_SYS_COLORS: &[FieldRule] = &[
    FieldRule::read(1, SizeExpr::arg_elems(0, DWORD_ELEM)),
    FieldRule::read(2, SizeExpr::arg_elems(0, DWORD_ELEM)),
];
const SET_WINDOWS_HOOK_EX: &[FieldRule] = &[unicode_string(1, Access::Read)];
const SET_WINDOW_PLACEMENT: &[FieldRule] = &[sized_by_header(1, Access::Read)];
const SET_WIN_EVENT_HOOK: &[FieldRule] = &[unicode_string(3, Access::Read)];
const THUNKED_MENU_INFO: &[FieldRule] = &[FieldRule::read(1, SizeExpr::literal(menu_info::SIZE))];
const THUNKED_MENU_ITEM_INFO: &[FieldRule] = &[
    FieldRule::complex(4, menu_item_info::SIZE, Access::Read, MENUITEMINFOW),
    unicode_string(5, Access::Read),
];
const TO_UNICODE_EX: &[FieldRule] = &[
    FieldRule::read(2, SizeExpr::literal(256)),
    FieldRule::write(3, SizeExpr::arg_elems(4, WCHAR_ELEM)),
];
const TRACK_POPUP_MENU_EX: &[FieldRule] = &[sized_by_header(5, Access::Read)];
const TRANSLATE_ACCELERATOR: &[FieldRule] = &[FieldRule::read(2, SizeExpr::literal(MSG))];
const TRANSLATE_MESSAGE: &[FieldRule] = &[FieldRule::read(0, SizeExpr::literal(MSG))];
const UNREGISTER_CLASS: &[FieldRule] = &[
    unicode_string(0, Access::Read),
    FieldRule::complex(2, clsmenuname::SIZE, Access::Write, CLSMENUNAME),
];
const UPDATE_LAYERED_WINDOW: &[FieldRule] = &[
    FieldRule::read(2, SizeExpr::literal(POINT)),
    FieldRule::read(3, SizeExpr::literal(SIZE)),
    FieldRule::read(5, SizeExpr::literal(POINT)),
    FieldRule::read(7, SizeExpr::literal(UINT)),
    rect(9, Access::Read),
];
const USER_CONNECT_TO_SERVER: &[FieldRule] = &[
    FieldRule::wide_string(0, Access::Read),
    FieldRule::write(1, SizeExpr::arg_ptr(2)),
    FieldRule::read(2, SizeExpr::literal(UINT)),
];
const VALIDATE_RECT: &[FieldRule] = &[rect(1, Access::Read)];

/// Sorted by name.
pub const CONTRACTS: &[ContractSpec] = &[
    ContractSpec::new("GetThreadDesktop", 2, OK),
    ContractSpec::new("NtUserActivateKeyboardLayout", 2, OK),
    ContractSpec::new("NtUserAlterWindowStyle", 3, OK),
    ContractSpec::new("NtUserAssociateInputContext", 3, IMM32),
    ContractSpec::new("NtUserAttachThreadInput", 3, OK),
    ContractSpec::new("NtUserBeginPaint", 2, CREATES).rules(BEGIN_PAINT),
    ContractSpec::new("NtUserBitBltSysBmp", 8, OK),
    ContractSpec::new("NtUserBlockInput", 1, OK),
    ContractSpec::new("NtUserBuildHimcList", 4, IMM32).rules(BUILD_HIMC_LIST),
    ContractSpec::new("NtUserBuildHwndList", 7, OK).rules(BUILD_HWND_LIST),
    ContractSpec::new("NtUserBuildMenuItemList", 4, OK).rules(BUILD_MENU_ITEM_LIST),
    ContractSpec::new("NtUserBuildNameList", 4, OK).rules(BUILD_NAME_LIST),
    ContractSpec::new("NtUserBuildPropList", 4, OK).rules(BUILD_PROP_LIST),
    ContractSpec::new("NtUserCalcMenuBar", 5, OK),
    ContractSpec::new("NtUserCallHwnd", 2, OK).combined(1),
    ContractSpec::new("NtUserCallHwndLock", 2, OK).combined(1),
    ContractSpec::new("NtUserCallHwndOpt", 2, OK).combined(1),
    ContractSpec::new("NtUserCallHwndParam", 3, OK).combined(2),
    ContractSpec::new("NtUserCallHwndParamLock", 3, OK).combined(2),
    ContractSpec::new("NtUserCallMsgFilter", 2, UNKNOWN).rules(CALL_MSG_FILTER),
    ContractSpec::new("NtUserCallNextHookEx", 4, UNKNOWN),
    ContractSpec::new("NtUserCallNoParam", 1, OK).combined(0),
    ContractSpec::new("NtUserCallOneParam", 2, OK).combined(1),
    ContractSpec::new("NtUserCallTwoParam", 3, OK).combined(2),
    ContractSpec::new("NtUserChangeClipboardChain", 2, OK),
    ContractSpec::new("NtUserChangeDisplaySettings", 5, UNKNOWN).rules(CHANGE_DISPLAY_SETTINGS),
    ContractSpec::new("NtUserCheckDesktopByThreadId", 1, OK),
    ContractSpec::new("NtUserCheckImeHotKey", 2, OK),
    ContractSpec::new("NtUserCheckMenuItem", 3, OK),
    ContractSpec::new("NtUserCheckWindowThreadDesktop", 3, OK),
    ContractSpec::new("NtUserChildWindowFromPointEx", 4, OK),
    ContractSpec::new("NtUserClipCursor", 1, OK).rules(CLIP_CURSOR),
    ContractSpec::new("NtUserCloseClipboard", 0, OK),
    ContractSpec::new("NtUserCloseDesktop", 1, OK),
    ContractSpec::new("NtUserCloseWindowStation", 1, OK),
    ContractSpec::new("NtUserConsoleControl", 3, OK),
    ContractSpec::new("NtUserConvertMemHandle", 2, OK),
    ContractSpec::new("NtUserCopyAcceleratorTable", 3, OK).rules(COPY_ACCELERATOR_TABLE),
    ContractSpec::new("NtUserCountClipboardFormats", 0, OK),
    ContractSpec::new("NtUserCreateAcceleratorTable", 2, CREATES).rules(CREATE_ACCELERATOR_TABLE),
    ContractSpec::new("NtUserCreateCaret", 4, OK),
    ContractSpec::new("NtUserCreateDesktop", 5, CREATES).rules(CREATE_DESKTOP),
    ContractSpec::new("NtUserCreateInputContext", 1, CREATES.with_imm32(true)),
    ContractSpec::new("NtUserCreateLocalMemHandle", 4, CREATES).rules(CREATE_LOCAL_MEM_HANDLE),
    ContractSpec::new("NtUserCreateWindowEx", 15, CREATES).rules(CREATE_WINDOW_EX),
    ContractSpec::new("NtUserCreateWindowStation", 7, CREATES).rules(CREATE_WINDOW_STATION),
    ContractSpec::new("NtUserCtxDisplayIOCtl", 3, OK),
    ContractSpec::new("NtUserDdeGetQualityOfService", 3, OK).rules(DDE_GET_QUALITY_OF_SERVICE),
    ContractSpec::new("NtUserDdeInitialize", 5, OK),
    ContractSpec::new("NtUserDdeSetQualityOfService", 3, OK).rules(DDE_SET_QUALITY_OF_SERVICE),
    ContractSpec::new("NtUserDefSetText", 2, OK).rules(DEF_SET_TEXT),
    ContractSpec::new("NtUserDeferWindowPos", 8, OK),
    ContractSpec::new("NtUserDeleteMenu", 3, OK),
    ContractSpec::new("NtUserDestroyAcceleratorTable", 1, OK),
    ContractSpec::new("NtUserDestroyCursor", 2, OK),
    ContractSpec::new("NtUserDestroyInputContext", 1, IMM32),
    ContractSpec::new("NtUserDestroyMenu", 1, OK),
    ContractSpec::new("NtUserDestroyWindow", 1, OK),
    ContractSpec::new("NtUserDisableThreadIme", 1, IMM32),
    ContractSpec::new("NtUserDispatchMessage", 1, OK).rules(DISPATCH_MESSAGE),
    ContractSpec::new("NtUserDragDetect", 2, OK),
    ContractSpec::new("NtUserDragObject", 5, OK),
    ContractSpec::new("NtUserDrawAnimatedRects", 4, OK).rules(DRAW_ANIMATED_RECTS),
    ContractSpec::new("NtUserDrawCaption", 4, OK).rules(DRAW_CAPTION),
    ContractSpec::new("NtUserDrawCaptionTemp", 7, OK).rules(DRAW_CAPTION_TEMP),
    ContractSpec::new("NtUserDrawIconEx", 11, OK),
    ContractSpec::new("NtUserDrawMenuBarTemp", 5, OK).rules(DRAW_MENU_BAR_TEMP),
    ContractSpec::new("NtUserEmptyClipboard", 0, OK),
    ContractSpec::new("NtUserEnableMenuItem", 3, OK),
    ContractSpec::new("NtUserEnableScrollBar", 3, OK),
    ContractSpec::new("NtUserEndDeferWindowPosEx", 2, OK),
    ContractSpec::new("NtUserEndMenu", 0, OK),
    ContractSpec::new("NtUserEndPaint", 2, OK).rules(END_PAINT),
    ContractSpec::new("NtUserEnumDisplayDevices", 4, OK).rules(ENUM_DISPLAY_DEVICES),
    ContractSpec::new("NtUserEnumDisplayMonitors", 5, OK).rules(ENUM_DISPLAY_MONITORS),
    ContractSpec::new("NtUserEnumDisplaySettings", 4, OK).rules(ENUM_DISPLAY_SETTINGS),
    ContractSpec::new("NtUserEvent", 1, OK),
    ContractSpec::new("NtUserExcludeUpdateRgn", 2, OK),
    ContractSpec::new("NtUserFillWindow", 4, OK),
    ContractSpec::new("NtUserFindExistingCursorIcon", 4, OK),
    ContractSpec::new("NtUserFindWindowEx", 5, OK).rules(FIND_WINDOW_EX),
    ContractSpec::new("NtUserFlashWindowEx", 1, OK).rules(FLASH_WINDOW_EX),
    ContractSpec::new("NtUserGetAltTabInfo", 6, OK).rules(GET_ALT_TAB_INFO),
    ContractSpec::new("NtUserGetAncestor", 2, OK),
    ContractSpec::new("NtUserGetAppImeLevel", 1, IMM32),
    ContractSpec::new("NtUserGetAsyncKeyState", 1, OK),
    ContractSpec::new("NtUserGetAtomName", 2, OK).rules(GET_ATOM_NAME),
    ContractSpec::new("NtUserGetCPD", 3, OK),
    ContractSpec::new("NtUserGetCaretBlinkTime", 0, OK),
    ContractSpec::new("NtUserGetCaretPos", 1, OK).rules(GET_CARET_POS),
    ContractSpec::new("NtUserGetClassInfo", 5, OK).rules(GET_CLASS_INFO),
    ContractSpec::new("NtUserGetClassInfoEx", 5, OK).rules(GET_CLASS_INFO),
    ContractSpec::new("NtUserGetClassLong", 3, OK),
    ContractSpec::new("NtUserGetClassName", 3, OK).rules(GET_CLASS_NAME),
    ContractSpec::new("NtUserGetClipCursor", 1, OK).rules(GET_CLIP_CURSOR),
    ContractSpec::new("NtUserGetClipboardData", 2, OK).rules(GET_CLIPBOARD_DATA),
    ContractSpec::new("NtUserGetClipboardFormatName", 3, OK).rules(GET_CLIPBOARD_FORMAT_NAME),
    ContractSpec::new("NtUserGetClipboardOwner", 0, OK),
    ContractSpec::new("NtUserGetClipboardSequenceNumber", 0, OK),
    ContractSpec::new("NtUserGetClipboardViewer", 0, OK),
    ContractSpec::new("NtUserGetComboBoxInfo", 2, OK).rules(HEADER_AT_1),
    ContractSpec::new("NtUserGetControlBrush", 3, OK),
    ContractSpec::new("NtUserGetControlColor", 4, OK),
    ContractSpec::new("NtUserGetCursorFrameInfo", 4, OK),
    ContractSpec::new("NtUserGetCursorInfo", 1, OK).rules(HEADER_AT_0),
    ContractSpec::new("NtUserGetDC", 1, CREATES),
    ContractSpec::new("NtUserGetDCEx", 3, CREATES),
    ContractSpec::new("NtUserGetDoubleClickTime", 0, OK),
    ContractSpec::new("NtUserGetForegroundWindow", 0, OK),
    ContractSpec::new("NtUserGetGUIThreadInfo", 2, OK).rules(HEADER_AT_1),
    ContractSpec::new("NtUserGetGuiResources", 2, OK),
    ContractSpec::new("NtUserGetIconInfo", 6, OK).rules(GET_ICON_INFO),
    ContractSpec::new("NtUserGetIconSize", 4, OK).rules(GET_ICON_SIZE),
    ContractSpec::new("NtUserGetImeHotKey", 4, OK),
    ContractSpec::new("NtUserGetImeInfoEx", 2, UNKNOWN.with_imm32(true)),
    ContractSpec::new("NtUserGetInternalWindowPos", 3, OK).rules(GET_INTERNAL_WINDOW_POS),
    ContractSpec::new("NtUserGetKeyNameText", 3, OK).rules(GET_KEY_NAME_TEXT),
    ContractSpec::new("NtUserGetKeyState", 1, OK),
    ContractSpec::new("NtUserGetKeyboardLayout", 1, OK),
    ContractSpec::new("NtUserGetKeyboardLayoutList", 2, OK).rules(GET_KEYBOARD_LAYOUT_LIST),
    ContractSpec::new("NtUserGetKeyboardLayoutName", 1, OK).rules(GET_KEYBOARD_LAYOUT_NAME),
    ContractSpec::new("NtUserGetKeyboardState", 1, OK).rules(GET_KEYBOARD_STATE),
    ContractSpec::new("NtUserGetKeyboardType", 1, OK),
    ContractSpec::new("NtUserGetLastInputInfo", 1, OK).rules(HEADER_AT_0),
    ContractSpec::new("NtUserGetLayeredWindowAttributes", 4, OK)
        .rules(GET_LAYERED_WINDOW_ATTRIBUTES),
    ContractSpec::new("NtUserGetListBoxInfo", 1, OK),
    ContractSpec::new("NtUserGetMenuBarInfo", 4, OK).rules(GET_MENU_BAR_INFO),
    ContractSpec::new("NtUserGetMenuDefaultItem", 3, OK),
    ContractSpec::new("NtUserGetMenuIndex", 2, OK),
    ContractSpec::new("NtUserGetMenuItemRect", 4, OK).rules(GET_MENU_ITEM_RECT),
    ContractSpec::new("NtUserGetMessage", 4, OK).rules(GET_MESSAGE),
    ContractSpec::new("NtUserGetMinMaxInfo", 3, OK).rules(GET_MIN_MAX_INFO),
    ContractSpec::new("NtUserGetMonitorInfo", 2, OK).rules(HEADER_AT_1),
    ContractSpec::new("NtUserGetMouseMovePointsEx", 5, OK).rules(GET_MOUSE_MOVE_POINTS_EX),
    ContractSpec::new("NtUserGetObjectInformation", 5, OK.with_small_write_last(true))
        .rules(GET_OBJECT_INFORMATION),
    ContractSpec::new("NtUserGetOpenClipboardWindow", 0, OK),
    ContractSpec::new("NtUserGetPriorityClipboardFormat", 2, OK)
        .rules(GET_PRIORITY_CLIPBOARD_FORMAT),
    ContractSpec::new("NtUserGetProcessWindowStation", 0, OK),
    ContractSpec::new("NtUserGetProp", 2, OK),
    ContractSpec::new("NtUserGetRawInputBuffer", 3, OK),
    ContractSpec::new("NtUserGetRawInputData", 5, OK).rules(GET_RAW_INPUT_DATA),
    ContractSpec::new("NtUserGetRawInputDeviceInfo", 4, OK),
    ContractSpec::new("NtUserGetRawInputDeviceList", 3, OK).rules(GET_RAW_INPUT_DEVICE_LIST),
    ContractSpec::new("NtUserGetScrollBarInfo", 3, OK).rules(GET_SCROLL_BAR_INFO),
    ContractSpec::new("NtUserGetSystemMenu", 2, OK),
    ContractSpec::new("NtUserGetThreadDesktop", 2, OK.with_requires_prefix(true)),
    ContractSpec::new("NtUserGetThreadState", 1, OK),
    ContractSpec::new("NtUserGetTitleBarInfo", 2, OK).rules(HEADER_AT_1),
    ContractSpec::new("NtUserGetUpdateRect", 3, OK).rules(GET_UPDATE_RECT),
    ContractSpec::new("NtUserGetUpdateRgn", 3, OK),
    ContractSpec::new("NtUserGetWOWClass", 2, OK).rules(GET_WOW_CLASS),
    ContractSpec::new("NtUserGetWindowDC", 1, CREATES),
    ContractSpec::new("NtUserGetWindowPlacement", 2, OK).rules(HEADER_AT_1),
    ContractSpec::new("NtUserHardErrorControl", 3, OK),
    ContractSpec::new("NtUserHideCaret", 1, OK),
    ContractSpec::new("NtUserHiliteMenuItem", 4, OK),
    ContractSpec::new("NtUserImpersonateDdeClientWindow", 2, OK),
    ContractSpec::new("NtUserInitTask", 12, OK),
    ContractSpec::new("NtUserInitialize", 3, OK),
    ContractSpec::new("NtUserInternalGetWindowText", 3, OK).rules(INTERNAL_GET_WINDOW_TEXT),
    ContractSpec::new("NtUserInvalidateRect", 3, OK).rules(INVALIDATE_RECT),
    ContractSpec::new("NtUserInvalidateRgn", 3, OK),
    ContractSpec::new("NtUserIsClipboardFormatAvailable", 1, OK),
    ContractSpec::new("NtUserKillTimer", 2, OK),
    ContractSpec::new("NtUserLoadKeyboardLayoutEx", 7, OK).rules(LOAD_KEYBOARD_LAYOUT_EX),
    ContractSpec::new("NtUserLockWindowStation", 1, OK),
    ContractSpec::new("NtUserLockWindowUpdate", 1, OK),
    ContractSpec::new("NtUserLockWorkStation", 0, OK),
    ContractSpec::new("NtUserMNDragLeave", 0, OK),
    ContractSpec::new("NtUserMNDragOver", 2, OK),
    ContractSpec::new("NtUserMapVirtualKeyEx", 4, OK),
    ContractSpec::new("NtUserMenuInfo", 3, OK),
    ContractSpec::new("NtUserMenuItemFromPoint", 4, OK),
    ContractSpec::new("NtUserMenuItemInfo", 5, OK),
    ContractSpec::new("NtUserMessageCall", 7, OK),
    ContractSpec::new("NtUserMinMaximize", 3, OK),
    ContractSpec::new("NtUserModifyUserStartupInfoFlags", 2, OK),
    ContractSpec::new("NtUserMonitorFromPoint", 2, OK),
    ContractSpec::new("NtUserMonitorFromRect", 2, OK).rules(MONITOR_FROM_RECT),
    ContractSpec::new("NtUserMonitorFromWindow", 2, OK),
    ContractSpec::new("NtUserMoveWindow", 6, OK),
    ContractSpec::new("NtUserNotifyIMEStatus", 3, OK),
    ContractSpec::new("NtUserNotifyProcessCreate", 4, OK),
    ContractSpec::new("NtUserNotifyWinEvent", 4, OK),
    ContractSpec::new("NtUserOpenClipboard", 2, OK),
    ContractSpec::new("NtUserOpenDesktop", 3, OK).rules(OBJECT_ATTRS_AT_0),
    ContractSpec::new("NtUserOpenInputDesktop", 3, OK),
    ContractSpec::new("NtUserOpenWindowStation", 2, OK).rules(OBJECT_ATTRS_AT_0),
    ContractSpec::new("NtUserPaintDesktop", 1, OK),
    ContractSpec::new("NtUserPaintMenuBar", 6, OK),
    ContractSpec::new("NtUserPeekMessage", 5, OK).rules(PEEK_MESSAGE),
    ContractSpec::new("NtUserPostMessage", 4, OK),
    ContractSpec::new("NtUserPostThreadMessage", 4, OK),
    ContractSpec::new("NtUserPrintWindow", 3, OK),
    ContractSpec::new("NtUserQueryInformationThread", 5, OK),
    ContractSpec::new("NtUserQueryInputContext", 2, IMM32),
    ContractSpec::new("NtUserQuerySendMessage", 1, OK),
    ContractSpec::new("NtUserQueryUserCounters", 5, OK),
    ContractSpec::new("NtUserQueryWindow", 2, OK),
    ContractSpec::new("NtUserRealChildWindowFromPoint", 3, OK),
    ContractSpec::new("NtUserRealInternalGetMessage", 6, OK).rules(REAL_INTERNAL_GET_MESSAGE),
    ContractSpec::new("NtUserRealWaitMessageEx", 2, OK),
    ContractSpec::new("NtUserRedrawWindow", 4, OK).rules(REDRAW_WINDOW),
    ContractSpec::new("NtUserRegisterClassExWOW", 7, ZERO_FAIL).rules(REGISTER_CLASS_EX_WOW),
    ContractSpec::new("NtUserRegisterHotKey", 4, OK),
    ContractSpec::new("NtUserRegisterRawInputDevices", 3, OK).rules(REGISTER_RAW_INPUT_DEVICES),
    ContractSpec::new("NtUserRegisterTasklist", 1, OK),
    ContractSpec::new("NtUserRegisterUserApiHook", 4, OK).rules(REGISTER_USER_API_HOOK),
    ContractSpec::new("NtUserRegisterWindowMessage", 1, OK).rules(REGISTER_WINDOW_MESSAGE),
    ContractSpec::new("NtUserRemoteConnect", 3, OK),
    ContractSpec::new("NtUserRemoteRedrawRectangle", 4, OK),
    ContractSpec::new("NtUserRemoteRedrawScreen", 0, OK),
    ContractSpec::new("NtUserRemoteStopScreenUpdates", 0, OK),
    ContractSpec::new("NtUserRemoveMenu", 3, OK),
    ContractSpec::new("NtUserRemoveProp", 2, OK),
    ContractSpec::new("NtUserResolveDesktop", 4, OK),
    ContractSpec::new("NtUserResolveDesktopForWOW", 1, OK),
    ContractSpec::new("NtUserScrollDC", 7, OK).rules(SCROLL_DC),
    ContractSpec::new("NtUserScrollWindowEx", 8, OK).rules(SCROLL_WINDOW_EX),
    ContractSpec::new("NtUserSelectPalette", 3, OK),
    ContractSpec::new("NtUserSendInput", 3, OK).rules(SEND_INPUT),
    ContractSpec::new("NtUserSetActiveWindow", 1, OK),
    ContractSpec::new("NtUserSetAppImeLevel", 2, IMM32),
    ContractSpec::new("NtUserSetCapture", 1, OK),
    ContractSpec::new("NtUserSetClassLong", 4, OK),
    ContractSpec::new("NtUserSetClassWord", 3, OK),
    ContractSpec::new("NtUserSetClipboardData", 3, OK),
    ContractSpec::new("NtUserSetClipboardViewer", 1, OK),
    ContractSpec::new("NtUserSetConsoleReserveKeys", 2, OK),
    ContractSpec::new("NtUserSetCursor", 1, OK),
    ContractSpec::new("NtUserSetCursorContents", 2, OK).rules(SET_CURSOR_CONTENTS),
    ContractSpec::new("NtUserSetCursorIconData", 6, OK).rules(SET_CURSOR_ICON_DATA),
    ContractSpec::new("NtUserSetDbgTag", 2, OK),
    ContractSpec::new("NtUserSetFocus", 1, OK),
    ContractSpec::new("NtUserSetImeHotKey", 5, OK),
    ContractSpec::new("NtUserSetImeInfoEx", 1, IMM32),
    ContractSpec::new("NtUserSetImeOwnerWindow", 2, OK),
    ContractSpec::new("NtUserSetInformationProcess", 4, OK),
    ContractSpec::new("NtUserSetInformationThread", 4, OK),
    ContractSpec::new("NtUserSetInternalWindowPos", 4, OK).rules(SET_INTERNAL_WINDOW_POS),
    ContractSpec::new("NtUserSetKeyboardState", 1, OK).rules(SET_KEYBOARD_STATE),
    ContractSpec::new("NtUserSetLayeredWindowAttributes", 4, OK),
    ContractSpec::new("NtUserSetLogonNotifyWindow", 1, OK),
    ContractSpec::new("NtUserSetMenu", 3, OK),
    ContractSpec::new("NtUserSetMenuContextHelpId", 2, OK),
    ContractSpec::new("NtUserSetMenuDefaultItem", 3, OK),
    ContractSpec::new("NtUserSetMenuFlagRtoL", 1, OK),
    ContractSpec::new("NtUserSetObjectInformation", 4, OK).rules(SET_OBJECT_INFORMATION),
    ContractSpec::new("NtUserSetParent", 2, OK),
    ContractSpec::new("NtUserSetProcessWindowStation", 1, OK),
    ContractSpec::new("NtUserSetProp", 3, OK),
    ContractSpec::new("NtUserSetRipFlags", 2, OK),
    ContractSpec::new("NtUserSetScrollInfo", 4, OK).rules(SET_SCROLL_INFO),
    ContractSpec::new("NtUserSetShellWindowEx", 2, OK),
    ContractSpec::new("NtUserSetSysColors", 4, OK).rules(SET_SYS_COLORS),
    ContractSpec::new("NtUserSetSystemCursor", 2, OK),
    ContractSpec::new("NtUserSetSystemMenu", 2, OK),
    ContractSpec::new("NtUserSetSystemTimer", 4, OK),
    ContractSpec::new("NtUserSetThreadDesktop", 1, OK),
    ContractSpec::new("NtUserSetThreadLayoutHandles", 2, IMM32),
    ContractSpec::new("NtUserSetThreadState", 2, OK),
    ContractSpec::new("NtUserSetTimer", 4, OK),
    ContractSpec::new("NtUserSetWinEventHook", 8, OK).rules(SET_WIN_EVENT_HOOK),
    ContractSpec::new("NtUserSetWindowFNID", 2, OK),
    ContractSpec::new("NtUserSetWindowLong", 4, OK),
    ContractSpec::new("NtUserSetWindowPlacement", 2, OK).rules(SET_WINDOW_PLACEMENT),
    ContractSpec::new("NtUserSetWindowPos", 7, OK),
    ContractSpec::new("NtUserSetWindowRgn", 3, OK),
    ContractSpec::new("NtUserSetWindowStationUser", 4, OK),
    ContractSpec::new("NtUserSetWindowWord", 3, OK),
    ContractSpec::new("NtUserSetWindowsHookAW", 3, OK),
    ContractSpec::new("NtUserSetWindowsHookEx", 6, OK).rules(SET_WINDOWS_HOOK_EX),
    ContractSpec::new("NtUserShowCaret", 1, OK),
    ContractSpec::new("NtUserShowScrollBar", 3, OK),
    ContractSpec::new("NtUserShowWindow", 2, OK),
    ContractSpec::new("NtUserShowWindowAsync", 2, OK),
    ContractSpec::new("NtUserSoundSentry", 0, OK),
    ContractSpec::new("NtUserSwitchDesktop", 1, OK),
    ContractSpec::new("NtUserSystemParametersInfo", 4, ZERO_FAIL),
    ContractSpec::new("NtUserTestForInteractiveUser", 1, OK),
    ContractSpec::new("NtUserThunkedMenuInfo", 2, OK).rules(THUNKED_MENU_INFO),
    ContractSpec::new("NtUserThunkedMenuItemInfo", 6, OK).rules(THUNKED_MENU_ITEM_INFO),
    ContractSpec::new("NtUserToUnicodeEx", 7, OK).rules(TO_UNICODE_EX),
    ContractSpec::new("NtUserTrackMouseEvent", 1, OK),
    ContractSpec::new("NtUserTrackPopupMenuEx", 6, OK).rules(TRACK_POPUP_MENU_EX),
    ContractSpec::new("NtUserTranslateAccelerator", 3, OK).rules(TRANSLATE_ACCELERATOR),
    ContractSpec::new("NtUserTranslateMessage", 2, OK).rules(TRANSLATE_MESSAGE),
    ContractSpec::new("NtUserUnhookWinEvent", 1, OK),
    ContractSpec::new("NtUserUnhookWindowsHookEx", 1, OK),
    ContractSpec::new("NtUserUnloadKeyboardLayout", 1, OK),
    ContractSpec::new("NtUserUnlockWindowStation", 1, OK),
    ContractSpec::new("NtUserUnregisterClass", 3, UNKNOWN).rules(UNREGISTER_CLASS),
    ContractSpec::new("NtUserUnregisterHotKey", 2, OK),
    ContractSpec::new("NtUserUnregisterUserApiHook", 0, OK),
    ContractSpec::new("NtUserUpdateInputContext", 3, OK),
    ContractSpec::new("NtUserUpdateInstance", 3, OK),
    ContractSpec::new("NtUserUpdateLayeredWindow", 10, OK).rules(UPDATE_LAYERED_WINDOW),
    ContractSpec::new("NtUserUpdatePerUserSystemParameters", 2, OK),
    ContractSpec::new("NtUserUserConnectToServer", 3, OK).rules(USER_CONNECT_TO_SERVER),
    ContractSpec::new("NtUserUserHandleGrantAccess", 3, OK),
    ContractSpec::new("NtUserValidateHandleSecure", 2, OK),
    ContractSpec::new("NtUserValidateRect", 2, OK).rules(VALIDATE_RECT),
    ContractSpec::new("NtUserValidateTimerCallback", 3, OK),
    ContractSpec::new("NtUserVkKeyScanEx", 3, OK),
    ContractSpec::new("NtUserWaitForInputIdle", 3, OK),
    ContractSpec::new("NtUserWaitForMsgAndEvent", 1, OK),
    ContractSpec::new("NtUserWaitMessage", 0, OK),
    ContractSpec::new("NtUserWin32PoolAllocationStats", 6, OK),
    ContractSpec::new("NtUserWindowFromPhysicalPoint", 1, OK),
    ContractSpec::new("NtUserWindowFromPoint", 2, OK),
    ContractSpec::new("NtUserYieldTask", 0, OK),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_sorted_and_unique() {
        assert!(CONTRACTS.windows(2).all(|w| w[0].name < w[1].name));
    }

    #[test]
    fn every_contract_is_self_consistent() {
        for spec in CONTRACTS {
            assert_eq!(spec.validate(&[]), Ok(()), "{}", spec.name);
        }
    }
}
