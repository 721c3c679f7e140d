//! # `NtGdi*` Contracts
//!
//! Graphics calls. Most buffers here are sized by a neighboring count
//! argument; a return value often reports how much of a buffer was
//! actually filled, in which case the count only bounds the pre-call check.

use crate::layouts::{DWORD_ELEM, POINT, PTR, RECT, SIZE, WCHAR_ELEM, counted_string, devmode};
use crate::types::{DEVMODEW, UNICODE_STRING};
use crate::{CREATES, DELETES, OK, UNKNOWN, ZERO_FAIL};
use shape_engine::{Access, ContractSpec, FieldRule, SizeExpr};

const BITMAPINFO: u64 = 44;
const GLYPHMETRICS: u64 = 20;
const MAT2: u64 = 16;
const XFORM: u64 = 24;
const FONTSIGNATURE: u64 = 24;
const ABC: u32 = 12;
const KERNINGPAIR: u32 = 8;
const COLORADJUSTMENT: u64 = 24;
const DOCINFOW: u64 = 40;
const DRIVER_INFO_2W: u64 = 48;
const GCP_RESULTSW: u64 = 64;
const DESIGNVECTOR: u64 = 72;
const UNIVERSAL_FONT_ID: u32 = 8;
const TRIVERTEX: u32 = 16;
const POLYTEXTW: u32 = 56;
const POINT_ELEM: u32 = 8;
const PALETTEENTRY_ELEM: u32 = 4;

const fn rect(slot: usize, access: Access) -> FieldRule {
    FieldRule::new(slot, SizeExpr::literal(RECT), access)
}

const fn dword_out(slot: usize) -> FieldRule {
    FieldRule::write(slot, SizeExpr::literal(4))
}

const ADD_EMB_FONT_TO_DC: &[FieldRule] = &[FieldRule::read(1, SizeExpr::literal(PTR))];
const ADD_FONT_MEM_RESOURCE_EX: &[FieldRule] =
    &[FieldRule::read(2, SizeExpr::arg(3)), dword_out(4)];
const ADD_REMOTE_MM_INSTANCE_TO_DC: &[FieldRule] = &[FieldRule::read(1, SizeExpr::arg(2))];
const CHANGE_GHOST_FONT: &[FieldRule] = &[FieldRule::read(0, SizeExpr::literal(PTR))];
const COLOR_CORRECT_PALETTE: &[FieldRule] =
    &[FieldRule::read_write(4, SizeExpr::arg_elems(3, PALETTEENTRY_ELEM))];
const COMBINE_TRANSFORM: &[FieldRule] = &[
    FieldRule::write(0, SizeExpr::literal(XFORM)),
    FieldRule::read(1, SizeExpr::literal(XFORM)),
    FieldRule::read(2, SizeExpr::literal(XFORM)),
];
const CONVERT_METAFILE_RECT: &[FieldRule] = &[rect(1, Access::ReadWrite)];
const CREATE_BITMAP: &[FieldRule] = &[FieldRule::read(4, SizeExpr::literal(1))];
const CREATE_DIBITMAP_INTERNAL: &[FieldRule] = &[
    FieldRule::read(4, SizeExpr::arg(8)),
    FieldRule::read(5, SizeExpr::arg(7)),
];
const CREATE_DIB_SECTION: &[FieldRule] = &[
    FieldRule::read(3, SizeExpr::arg(5)),
    FieldRule::write(8, SizeExpr::literal(8)),
];
const CREATE_SERVER_META_FILE: &[FieldRule] = &[FieldRule::read(2, SizeExpr::arg(1))];
const DD_CREATE_FULLSCREEN_SPRITE: &[FieldRule] =
    &[FieldRule::write(2, SizeExpr::literal(PTR)), FieldRule::write(3, SizeExpr::literal(PTR))];
const DD_REENABLE_DIRECT_DRAW_OBJECT: &[FieldRule] =
    &[FieldRule::read_write(1, SizeExpr::literal(4))];
const DD_RELEASE_DC: &[FieldRule] = &[FieldRule::write(0, SizeExpr::literal(PTR))];
const DELETE_COLOR_SPACE: &[FieldRule] = &[FieldRule::read(0, SizeExpr::literal(PTR))];
const DESCRIBE_PIXEL_FORMAT: &[FieldRule] = &[FieldRule::write(3, SizeExpr::arg(2))];
const DO_BANDING: &[FieldRule] =
    &[FieldRule::write(2, SizeExpr::literal(POINT)), FieldRule::write(3, SizeExpr::literal(SIZE))];
const DRAW_ESCAPE: &[FieldRule] = &[FieldRule::read(3, SizeExpr::arg(2))];
const DWM_CAPTURE_SCREEN: &[FieldRule] = &[rect(0, Access::Read)];
const DWM_GET_HIGH_COLOR_MODE: &[FieldRule] = &[dword_out(0)];
const DXG_GENERIC_THUNK: &[FieldRule] = &[
    FieldRule::read_write(2, SizeExpr::literal(PTR)),
    FieldRule::read_write(3, SizeExpr::literal(PTR)),
    FieldRule::read_write(4, SizeExpr::literal(PTR)),
    FieldRule::read_write(5, SizeExpr::literal(PTR)),
];
const END_GDI_RENDERING: &[FieldRule] = &[dword_out(2)];
const ENG_CREATE_PALETTE: &[FieldRule] = &[FieldRule::read(2, SizeExpr::literal(4))];
const ENUM_FONTS: &[FieldRule] = &[
    FieldRule::read(4, SizeExpr::arg_elems(3, WCHAR_ELEM)),
    FieldRule::read_write(6, SizeExpr::literal(4)),
    FieldRule::write(7, SizeExpr::arg_ptr(6)),
];
const ENUM_OBJECTS: &[FieldRule] = &[FieldRule::write(3, SizeExpr::arg(2))];
const EUDC_LOAD_UNLOAD_LINK: &[FieldRule] = &[
    FieldRule::read(0, SizeExpr::arg_elems(1, WCHAR_ELEM)),
    FieldRule::read(2, SizeExpr::arg_elems(3, WCHAR_ELEM)),
];
const EXT_CREATE_PEN: &[FieldRule] = &[FieldRule::read(7, SizeExpr::arg_elems(6, DWORD_ELEM))];
const EXT_CREATE_REGION: &[FieldRule] = &[
    FieldRule::read(0, SizeExpr::literal(XFORM)),
    FieldRule::read(2, SizeExpr::arg(1)),
];
const EXT_ESCAPE: &[FieldRule] = &[
    FieldRule::read(1, SizeExpr::arg_elems(2, WCHAR_ELEM)),
    FieldRule::read(5, SizeExpr::arg(4)),
    FieldRule::write(7, SizeExpr::arg(6)),
];
const EXT_GET_OBJECT: &[FieldRule] = &[
    FieldRule::write(2, SizeExpr::arg(1)).pre_only(),
    FieldRule::write(2, SizeExpr::retval()),
];
const EXT_TEXT_OUT: &[FieldRule] = &[
    rect(4, Access::Read),
    FieldRule::read(5, SizeExpr::arg_elems(6, WCHAR_ELEM)),
    FieldRule::read(7, SizeExpr::arg_elems(6, DWORD_ELEM)),
];
const GET_AND_SET_DC_DWORD: &[FieldRule] = &[dword_out(3)];
const GET_APP_CLIP_BOX: &[FieldRule] = &[rect(1, Access::Write)];
const GET_BITMAP_BITS: &[FieldRule] = &[FieldRule::write(2, SizeExpr::arg(1))];
const GET_BITMAP_DIMENSION: &[FieldRule] = &[FieldRule::write(1, SizeExpr::literal(SIZE))];
const GET_BOUNDS_RECT: &[FieldRule] = &[rect(1, Access::Write)];
const GET_CHARACTER_PLACEMENT_W: &[FieldRule] = &[
    FieldRule::read(1, SizeExpr::arg_elems(2, WCHAR_ELEM)),
    FieldRule::read_write(4, SizeExpr::literal(GCP_RESULTSW)),
];
const GET_CHAR_ABC_WIDTHS: &[FieldRule] = &[
    FieldRule::read(3, SizeExpr::arg_elems(2, WCHAR_ELEM)),
    FieldRule::write(5, SizeExpr::arg_elems(2, ABC)),
];
const GET_CHAR_WIDTH: &[FieldRule] = &[
    FieldRule::read(3, SizeExpr::arg_elems(2, WCHAR_ELEM)),
    FieldRule::write(5, SizeExpr::arg_elems(2, DWORD_ELEM)),
];
const GET_COLOR_ADJUSTMENT: &[FieldRule] =
    &[FieldRule::write(1, SizeExpr::literal(COLORADJUSTMENT))];
const GET_DC_DWORD: &[FieldRule] = &[dword_out(2)];
const GET_DC_POINT: &[FieldRule] = &[FieldRule::write(2, SizeExpr::literal(POINT))];
const GET_DIBITS_INTERNAL: &[FieldRule] = &[
    FieldRule::write(4, SizeExpr::arg(7)),
    FieldRule::read_write(5, SizeExpr::literal(BITMAPINFO)),
];
const GET_EUDC_TIME_STAMP_EX: &[FieldRule] =
    &[FieldRule::read(0, SizeExpr::arg_elems(1, WCHAR_ELEM))];
const GET_FONT_DATA: &[FieldRule] = &[
    FieldRule::write(3, SizeExpr::arg(4)).pre_only(),
    FieldRule::write(3, SizeExpr::retval()),
];
const GET_FONT_FILE_DATA: &[FieldRule] =
    &[FieldRule::read(2, SizeExpr::literal(PTR)), FieldRule::write(3, SizeExpr::arg(4))];
const GET_FONT_FILE_INFO: &[FieldRule] =
    &[FieldRule::write(2, SizeExpr::arg(3)), FieldRule::write(4, SizeExpr::literal(PTR))];
const GET_FONT_RESOURCE_INFO_INTERNAL_W: &[FieldRule] = &[
    FieldRule::read(0, SizeExpr::arg_elems(1, WCHAR_ELEM)),
    dword_out(4),
    FieldRule::write(5, SizeExpr::arg(3)),
];
const GET_FONT_UNICODE_RANGES: &[FieldRule] = &[FieldRule::write(1, SizeExpr::retval())];
const GET_GLYPH_INDICES_W: &[FieldRule] = &[
    FieldRule::read(1, SizeExpr::arg_elems(2, WCHAR_ELEM)),
    FieldRule::write(3, SizeExpr::arg_elems(2, WCHAR_ELEM)),
];
const GET_GLYPH_INDICES_W_INTERNAL: &[FieldRule] = &[
    FieldRule::read(1, SizeExpr::arg_elems(2, WCHAR_ELEM)),
    FieldRule::write(3, SizeExpr::literal(2)),
];
const GET_GLYPH_OUTLINE: &[FieldRule] = &[
    FieldRule::write(3, SizeExpr::literal(GLYPHMETRICS)),
    FieldRule::write(5, SizeExpr::arg(4)),
    FieldRule::read(6, SizeExpr::literal(MAT2)),
];
const GET_KERNING_PAIRS: &[FieldRule] = &[
    FieldRule::write(2, SizeExpr::arg_elems(1, KERNINGPAIR)).pre_only(),
    FieldRule::write(2, SizeExpr::retval_elems(KERNINGPAIR)),
];
const GET_LINKED_UFIS: &[FieldRule] =
    &[FieldRule::write(1, SizeExpr::arg_elems(2, UNIVERSAL_FONT_ID))];
const GET_MITER_LIMIT: &[FieldRule] = &[dword_out(1)];
const GET_MONITOR_ID: &[FieldRule] = &[FieldRule::write(2, SizeExpr::arg(1))];
const GET_OBJECT_BITMAP_HANDLE: &[FieldRule] = &[dword_out(1)];
const GET_OUTLINE_TEXT_METRICS: &[FieldRule] = &[FieldRule::write(2, SizeExpr::arg(1))];
const GET_PATH: &[FieldRule] = &[
    FieldRule::write(1, SizeExpr::arg_elems(3, POINT_ELEM)),
    FieldRule::write(2, SizeExpr::arg_elems(3, 1)),
];
const GET_RASTERIZER_CAPS: &[FieldRule] = &[FieldRule::write(0, SizeExpr::arg(1))];
const GET_REGION_DATA: &[FieldRule] = &[
    FieldRule::write(2, SizeExpr::arg(1)).pre_only(),
    FieldRule::write(2, SizeExpr::retval()),
];
const GET_RGN_BOX: &[FieldRule] = &[rect(1, Access::Write)];
const GET_SERVER_META_FILE_BITS: &[FieldRule] = &[
    FieldRule::write(2, SizeExpr::arg(1)),
    dword_out(3),
    dword_out(4),
    dword_out(5),
    dword_out(6),
];
const GET_STATS: &[FieldRule] = &[FieldRule::write(3, SizeExpr::arg(4))];
const GET_STRING_BITMAP_W: &[FieldRule] =
    &[FieldRule::read(1, SizeExpr::literal(2)), FieldRule::write(4, SizeExpr::arg(3))];
const GET_TEXT_CHARSET_INFO: &[FieldRule] =
    &[FieldRule::write(1, SizeExpr::literal(FONTSIGNATURE))];
const GET_TEXT_EXTENT: &[FieldRule] = &[
    FieldRule::read(1, SizeExpr::arg_elems(2, WCHAR_ELEM)),
    FieldRule::write(3, SizeExpr::literal(SIZE)),
];
const GET_TEXT_EXTENT_EX: &[FieldRule] = &[
    FieldRule::read(1, SizeExpr::arg_elems(2, WCHAR_ELEM)),
    dword_out(4),
    FieldRule::write(5, SizeExpr::arg_elems(2, DWORD_ELEM)).pre_only(),
    FieldRule::write(5, SizeExpr::arg_ptr_elems(4, DWORD_ELEM)),
    FieldRule::write(6, SizeExpr::literal(SIZE)),
];
const GET_TEXT_FACE: &[FieldRule] = &[
    FieldRule::write(2, SizeExpr::arg_elems(1, WCHAR_ELEM)).pre_only(),
    FieldRule::write(2, SizeExpr::retval_elems(WCHAR_ELEM)),
];
const GET_TEXT_METRICS: &[FieldRule] = &[FieldRule::write(1, SizeExpr::arg(2))];
const GET_TRANSFORM: &[FieldRule] = &[FieldRule::write(2, SizeExpr::literal(XFORM))];
const GRADIENT_FILL: &[FieldRule] = &[FieldRule::read(1, SizeExpr::arg_elems(2, TRIVERTEX))];
const HT_GET_8BPP_FORMAT_PALETTE: &[FieldRule] =
    &[FieldRule::write(0, SizeExpr::retval_elems(PALETTEENTRY_ELEM))];
const HT_GET_8BPP_MASK_PALETTE: &[FieldRule] =
    &[FieldRule::write(0, SizeExpr::retval_elems(PALETTEENTRY_ELEM))];
const MAKE_FONT_DIR: &[FieldRule] =
    &[FieldRule::write(1, SizeExpr::arg(2)), FieldRule::read(3, SizeExpr::arg(4))];
const MODIFY_WORLD_TRANSFORM: &[FieldRule] = &[FieldRule::read(1, SizeExpr::literal(XFORM))];
const MOVE_TO: &[FieldRule] = &[FieldRule::write(3, SizeExpr::literal(POINT))];
const OPEN_DC: &[FieldRule] = &[
    FieldRule::complex(0, counted_string::SIZE, Access::Read, UNICODE_STRING),
    FieldRule::complex(1, devmode::SIZE, Access::Read, DEVMODEW),
    FieldRule::complex(2, counted_string::SIZE, Access::Read, UNICODE_STRING),
];
const POLY_DRAW: &[FieldRule] = &[
    FieldRule::read(1, SizeExpr::arg_elems(3, POINT_ELEM)),
    FieldRule::read(2, SizeExpr::arg_elems(3, 1)),
];
const POLY_POLY_DRAW: &[FieldRule] = &[
    FieldRule::read(1, SizeExpr::literal(POINT)),
    FieldRule::read(2, SizeExpr::arg_elems(3, DWORD_ELEM)),
];
const POLY_TEXT_OUT_W: &[FieldRule] = &[FieldRule::read(1, SizeExpr::arg_elems(2, POLYTEXTW))];
const QUERY_FONTS: &[FieldRule] = &[
    FieldRule::write(0, SizeExpr::arg_elems(1, UNIVERSAL_FONT_ID)),
    FieldRule::write(2, SizeExpr::literal(PTR)),
];
const RECT_IN_REGION: &[FieldRule] = &[rect(1, Access::ReadWrite)];
const RECT_VISIBLE: &[FieldRule] = &[rect(1, Access::Read)];
const REMOVE_FONT_RESOURCE_W: &[FieldRule] = &[
    FieldRule::read(0, SizeExpr::arg_elems(1, WCHAR_ELEM)),
    FieldRule::read(5, SizeExpr::literal(DESIGNVECTOR)),
];
const RESET_DC: &[FieldRule] = &[
    FieldRule::complex(1, devmode::SIZE, Access::Read, DEVMODEW),
    dword_out(2),
    FieldRule::read(3, SizeExpr::literal(DRIVER_INFO_2W)),
    FieldRule::write(4, SizeExpr::literal(PTR)),
];
const SCALE_VIEWPORT_EXT_EX: &[FieldRule] = &[FieldRule::write(5, SizeExpr::literal(SIZE))];
const SCALE_WINDOW_EXT_EX: &[FieldRule] = &[FieldRule::write(5, SizeExpr::literal(SIZE))];
const SET_BITMAP_BITS: &[FieldRule] = &[FieldRule::read(2, SizeExpr::arg(1))];
const SET_BITMAP_DIMENSION: &[FieldRule] = &[FieldRule::write(3, SizeExpr::literal(SIZE))];
const SET_BOUNDS_RECT: &[FieldRule] = &[rect(1, Access::Read)];
const SET_BRUSH_ORG: &[FieldRule] = &[FieldRule::write(3, SizeExpr::literal(POINT))];
const SET_COLOR_ADJUSTMENT: &[FieldRule] =
    &[FieldRule::read(1, SizeExpr::literal(COLORADJUSTMENT))];
const SET_DIBITS_TO_DEVICE: &[FieldRule] = &[
    FieldRule::read(9, SizeExpr::arg(12)),
    FieldRule::read(10, SizeExpr::literal(BITMAPINFO)),
];
const SET_LINKED_UFIS: &[FieldRule] =
    &[FieldRule::read(1, SizeExpr::arg_elems(2, UNIVERSAL_FONT_ID))];
const SET_MITER_LIMIT: &[FieldRule] = &[FieldRule::read_write(2, SizeExpr::literal(4))];
const SET_PUMPDOBJ: &[FieldRule] =
    &[FieldRule::read_write(2, SizeExpr::literal(PTR)), dword_out(3)];
const SFM_GET_NOTIFICATION_TOKENS: &[FieldRule] =
    &[dword_out(1), FieldRule::write(2, SizeExpr::arg(0))];
const START_DOC: &[FieldRule] = &[FieldRule::read(1, SizeExpr::literal(DOCINFOW)), dword_out(2)];
const TILE_BIT_BLT: &[FieldRule] =
    &[rect(1, Access::Read), rect(3, Access::Read), FieldRule::read(4, SizeExpr::literal(POINT))];
const TRANSFORM_POINTS: &[FieldRule] = &[
    FieldRule::read(1, SizeExpr::arg_elems(3, POINT_ELEM)),
    FieldRule::write(2, SizeExpr::arg_elems(3, POINT_ELEM)),
];
const UMPD_ENG_FREE_USER_MEM: &[FieldRule] = &[FieldRule::read(0, SizeExpr::literal(PTR))];
const UNLOAD_PRINTER_DRIVER: &[FieldRule] = &[FieldRule::read(0, SizeExpr::arg(1))];

/// Sorted by name.
pub const CONTRACTS: &[ContractSpec] = &[
    ContractSpec::new("NtGdiAbortDoc", 1, OK),
    ContractSpec::new("NtGdiAbortPath", 1, OK),
    ContractSpec::new("NtGdiAddEmbFontToDC", 2, OK).rules(ADD_EMB_FONT_TO_DC),
    ContractSpec::new("NtGdiAddFontMemResourceEx", 5, OK).rules(ADD_FONT_MEM_RESOURCE_EX),
    ContractSpec::new("NtGdiAddRemoteMMInstanceToDC", 3, OK).rules(ADD_REMOTE_MM_INSTANCE_TO_DC),
    ContractSpec::new("NtGdiAlphaBlend", 12, OK),
    ContractSpec::new("NtGdiAngleArc", 6, OK),
    ContractSpec::new("NtGdiAnyLinkedFonts", 0, OK),
    ContractSpec::new("NtGdiArcInternal", 10, OK),
    ContractSpec::new("NtGdiBeginGdiRendering", 2, OK),
    ContractSpec::new("NtGdiBeginPath", 1, OK),
    ContractSpec::new("NtGdiBitBlt", 11, OK),
    ContractSpec::new("NtGdiCancelDC", 1, OK),
    ContractSpec::new("NtGdiChangeGhostFont", 2, OK).rules(CHANGE_GHOST_FONT),
    ContractSpec::new("NtGdiCheckBitmapBits", 8, OK),
    ContractSpec::new("NtGdiClearBitmapAttributes", 2, OK),
    ContractSpec::new("NtGdiClearBrushAttributes", 2, OK),
    ContractSpec::new("NtGdiCloseFigure", 1, OK),
    ContractSpec::new("NtGdiColorCorrectPalette", 6, OK).rules(COLOR_CORRECT_PALETTE),
    ContractSpec::new("NtGdiCombineRgn", 4, OK),
    ContractSpec::new("NtGdiCombineTransform", 3, OK).rules(COMBINE_TRANSFORM),
    ContractSpec::new("NtGdiComputeXformCoefficients", 1, OK),
    ContractSpec::new("NtGdiConvertMetafileRect", 2, OK).rules(CONVERT_METAFILE_RECT),
    ContractSpec::new("NtGdiCreateBitmap", 5, CREATES).rules(CREATE_BITMAP),
    ContractSpec::new("NtGdiCreateBitmapFromDxSurface", 5, CREATES),
    ContractSpec::new("NtGdiCreateClientObj", 1, CREATES),
    ContractSpec::new("NtGdiCreateCompatibleBitmap", 3, CREATES),
    ContractSpec::new("NtGdiCreateCompatibleDC", 1, CREATES),
    ContractSpec::new("NtGdiCreateDIBBrush", 6, CREATES),
    ContractSpec::new("NtGdiCreateDIBSection", 9, CREATES).rules(CREATE_DIB_SECTION),
    ContractSpec::new("NtGdiCreateDIBitmapInternal", 11, CREATES).rules(CREATE_DIBITMAP_INTERNAL),
    ContractSpec::new("NtGdiCreateEllipticRgn", 4, CREATES),
    ContractSpec::new("NtGdiCreateHalftonePalette", 1, CREATES),
    ContractSpec::new("NtGdiCreateHatchBrushInternal", 3, CREATES),
    ContractSpec::new("NtGdiCreateMetafileDC", 1, CREATES),
    ContractSpec::new("NtGdiCreatePaletteInternal", 2, CREATES),
    ContractSpec::new("NtGdiCreatePatternBrushInternal", 3, CREATES),
    ContractSpec::new("NtGdiCreatePen", 4, CREATES),
    ContractSpec::new("NtGdiCreateRectRgn", 4, CREATES),
    ContractSpec::new("NtGdiCreateRoundRectRgn", 6, CREATES),
    ContractSpec::new("NtGdiCreateServerMetaFile", 6, CREATES).rules(CREATE_SERVER_META_FILE),
    ContractSpec::new("NtGdiCreateSolidBrush", 2, CREATES),
    ContractSpec::new("NtGdiDdAttachSurface", 2, OK),
    ContractSpec::new("NtGdiDdChangeSurfacePointer", 2, OK),
    ContractSpec::new("NtGdiDdCreateDirectDrawObject", 1, OK),
    ContractSpec::new("NtGdiDdCreateFullscreenSprite", 4, CREATES)
        .rules(DD_CREATE_FULLSCREEN_SPRITE),
    ContractSpec::new("NtGdiDdCreateSurfaceEx", 3, OK),
    ContractSpec::new("NtGdiDdDeleteDirectDrawObject", 1, OK),
    ContractSpec::new("NtGdiDdDeleteSurfaceObject", 1, OK),
    ContractSpec::new("NtGdiDdDestroyD3DBuffer", 1, OK),
    ContractSpec::new("NtGdiDdDestroyFullscreenSprite", 2, OK),
    ContractSpec::new("NtGdiDdDestroySurface", 2, OK),
    ContractSpec::new("NtGdiDdGetDxHandle", 3, OK),
    ContractSpec::new("NtGdiDdNotifyFullscreenSpriteUpdate", 2, OK),
    ContractSpec::new("NtGdiDdQueryVisRgnUniqueness", 0, OK),
    ContractSpec::new("NtGdiDdReenableDirectDrawObject", 2, OK)
        .rules(DD_REENABLE_DIRECT_DRAW_OBJECT),
    ContractSpec::new("NtGdiDdReleaseDC", 1, OK).rules(DD_RELEASE_DC),
    ContractSpec::new("NtGdiDdResetVisrgn", 2, OK),
    ContractSpec::new("NtGdiDdSetGammaRamp", 3, OK),
    ContractSpec::new("NtGdiDdUnattachSurface", 2, OK),
    ContractSpec::new("NtGdiDeleteClientObj", 1, OK),
    ContractSpec::new("NtGdiDeleteColorSpace", 1, OK).rules(DELETE_COLOR_SPACE),
    ContractSpec::new("NtGdiDeleteColorTransform", 2, OK),
    ContractSpec::new("NtGdiDeleteObjectApp", 1, DELETES),
    ContractSpec::new("NtGdiDescribePixelFormat", 4, OK).rules(DESCRIBE_PIXEL_FORMAT),
    ContractSpec::new("NtGdiDoBanding", 4, OK).rules(DO_BANDING),
    ContractSpec::new("NtGdiDoPalette", 6, OK),
    ContractSpec::new("NtGdiDrawEscape", 4, OK).rules(DRAW_ESCAPE),
    ContractSpec::new("NtGdiDrawStream", 3, OK),
    ContractSpec::new("NtGdiDvpReleaseNotification", 2, OK),
    ContractSpec::new("NtGdiDwmCaptureScreen", 2, OK).rules(DWM_CAPTURE_SCREEN),
    ContractSpec::new("NtGdiDwmGetHighColorMode", 1, OK).rules(DWM_GET_HIGH_COLOR_MODE),
    ContractSpec::new("NtGdiDwmSetHighColorMode", 1, OK),
    ContractSpec::new("NtGdiDxgGenericThunk", 6, OK).rules(DXG_GENERIC_THUNK),
    ContractSpec::new("NtGdiEllipse", 5, OK),
    ContractSpec::new("NtGdiEnableEudc", 1, OK),
    ContractSpec::new("NtGdiEndDoc", 1, OK),
    ContractSpec::new("NtGdiEndGdiRendering", 3, OK).rules(END_GDI_RENDERING),
    ContractSpec::new("NtGdiEndPage", 1, OK),
    ContractSpec::new("NtGdiEndPath", 1, OK),
    ContractSpec::new("NtGdiEngAssociateSurface", 3, OK),
    ContractSpec::new("NtGdiEngComputeGlyphSet", 3, OK),
    ContractSpec::new("NtGdiEngCreateBitmap", 5, OK),
    ContractSpec::new("NtGdiEngCreateClip", 0, OK),
    ContractSpec::new("NtGdiEngCreateDeviceBitmap", 3, OK),
    ContractSpec::new("NtGdiEngCreateDeviceSurface", 3, OK),
    ContractSpec::new("NtGdiEngCreatePalette", 6, OK).rules(ENG_CREATE_PALETTE),
    ContractSpec::new("NtGdiEngDeletePalette", 1, OK),
    ContractSpec::new("NtGdiEngDeleteSurface", 1, OK),
    ContractSpec::new("NtGdiEngLockSurface", 1, OK),
    ContractSpec::new("NtGdiEngMarkBandingSurface", 1, OK),
    ContractSpec::new("NtGdiEnumFonts", 8, OK).rules(ENUM_FONTS),
    ContractSpec::new("NtGdiEnumObjects", 4, OK).rules(ENUM_OBJECTS),
    ContractSpec::new("NtGdiEqualRgn", 2, OK),
    ContractSpec::new("NtGdiEudcLoadUnloadLink", 7, OK).rules(EUDC_LOAD_UNLOAD_LINK),
    ContractSpec::new("NtGdiExcludeClipRect", 5, OK),
    ContractSpec::new("NtGdiExtCreatePen", 11, ZERO_FAIL).rules(EXT_CREATE_PEN),
    ContractSpec::new("NtGdiExtCreateRegion", 3, ZERO_FAIL).rules(EXT_CREATE_REGION),
    ContractSpec::new("NtGdiExtEscape", 8, OK).rules(EXT_ESCAPE),
    ContractSpec::new("NtGdiExtFloodFill", 5, OK),
    ContractSpec::new("NtGdiExtGetObjectW", 3, OK).rules(EXT_GET_OBJECT),
    ContractSpec::new("NtGdiExtSelectClipRgn", 3, OK),
    ContractSpec::new("NtGdiExtTextOutW", 9, OK).rules(EXT_TEXT_OUT),
    ContractSpec::new("NtGdiFillPath", 1, OK),
    ContractSpec::new("NtGdiFillRgn", 3, OK),
    ContractSpec::new("NtGdiFlattenPath", 1, OK),
    ContractSpec::new("NtGdiFlush", 0, OK),
    ContractSpec::new("NtGdiFontIsLinked", 1, OK),
    ContractSpec::new("NtGdiFrameRgn", 5, OK),
    ContractSpec::new("NtGdiGetAndSetDCDword", 4, OK).rules(GET_AND_SET_DC_DWORD),
    ContractSpec::new("NtGdiGetAppClipBox", 2, OK).rules(GET_APP_CLIP_BOX),
    ContractSpec::new("NtGdiGetBitmapBits", 3, OK).rules(GET_BITMAP_BITS),
    ContractSpec::new("NtGdiGetBitmapDimension", 2, OK).rules(GET_BITMAP_DIMENSION),
    ContractSpec::new("NtGdiGetBoundsRect", 3, OK).rules(GET_BOUNDS_RECT),
    ContractSpec::new("NtGdiGetCharABCWidthsW", 6, OK).rules(GET_CHAR_ABC_WIDTHS),
    ContractSpec::new("NtGdiGetCharSet", 1, OK),
    ContractSpec::new("NtGdiGetCharWidthW", 6, OK).rules(GET_CHAR_WIDTH),
    ContractSpec::new("NtGdiGetCharacterPlacementW", 6, OK).rules(GET_CHARACTER_PLACEMENT_W),
    ContractSpec::new("NtGdiGetColorAdjustment", 2, OK).rules(GET_COLOR_ADJUSTMENT),
    ContractSpec::new("NtGdiGetColorSpaceforBitmap", 1, OK),
    ContractSpec::new("NtGdiGetDCDword", 3, OK).rules(GET_DC_DWORD),
    ContractSpec::new("NtGdiGetDCObject", 2, OK),
    ContractSpec::new("NtGdiGetDCPoint", 3, OK).rules(GET_DC_POINT),
    ContractSpec::new("NtGdiGetDCforBitmap", 1, CREATES),
    ContractSpec::new("NtGdiGetDIBitsInternal", 9, OK).rules(GET_DIBITS_INTERNAL),
    ContractSpec::new("NtGdiGetDeviceCaps", 2, OK),
    ContractSpec::new("NtGdiGetDeviceWidth", 1, OK),
    ContractSpec::new("NtGdiGetDhpdev", 1, OK),
    ContractSpec::new("NtGdiGetEmbedFonts", 0, OK),
    ContractSpec::new("NtGdiGetEudcTimeStampEx", 3, OK).rules(GET_EUDC_TIME_STAMP_EX),
    ContractSpec::new("NtGdiGetFontData", 5, OK).rules(GET_FONT_DATA),
    ContractSpec::new("NtGdiGetFontFileData", 5, OK).rules(GET_FONT_FILE_DATA),
    ContractSpec::new("NtGdiGetFontFileInfo", 5, OK).rules(GET_FONT_FILE_INFO),
    ContractSpec::new("NtGdiGetFontResourceInfoInternalW", 7, OK)
        .rules(GET_FONT_RESOURCE_INFO_INTERNAL_W),
    ContractSpec::new("NtGdiGetFontUnicodeRanges", 2, OK).rules(GET_FONT_UNICODE_RANGES),
    ContractSpec::new("NtGdiGetGlyphIndicesW", 5, OK).rules(GET_GLYPH_INDICES_W),
    ContractSpec::new("NtGdiGetGlyphIndicesWInternal", 6, OK).rules(GET_GLYPH_INDICES_W_INTERNAL),
    ContractSpec::new("NtGdiGetGlyphOutline", 8, OK).rules(GET_GLYPH_OUTLINE),
    ContractSpec::new("NtGdiGetKerningPairs", 3, OK).rules(GET_KERNING_PAIRS),
    ContractSpec::new("NtGdiGetLinkedUFIs", 3, OK).rules(GET_LINKED_UFIS),
    ContractSpec::new("NtGdiGetMiterLimit", 2, OK).rules(GET_MITER_LIMIT),
    ContractSpec::new("NtGdiGetMonitorID", 3, OK).rules(GET_MONITOR_ID),
    ContractSpec::new("NtGdiGetNearestColor", 2, OK),
    ContractSpec::new("NtGdiGetNearestPaletteIndex", 2, OK),
    ContractSpec::new("NtGdiGetObjectBitmapHandle", 2, ZERO_FAIL).rules(GET_OBJECT_BITMAP_HANDLE),
    ContractSpec::new("NtGdiGetOutlineTextMetricsInternalW", 4, UNKNOWN)
        .rules(GET_OUTLINE_TEXT_METRICS),
    ContractSpec::new("NtGdiGetPath", 4, OK).rules(GET_PATH),
    ContractSpec::new("NtGdiGetPixel", 3, OK),
    ContractSpec::new("NtGdiGetRandomRgn", 3, OK),
    ContractSpec::new("NtGdiGetRasterizerCaps", 2, OK).rules(GET_RASTERIZER_CAPS),
    ContractSpec::new("NtGdiGetRegionData", 3, OK).rules(GET_REGION_DATA),
    ContractSpec::new("NtGdiGetRgnBox", 2, OK).rules(GET_RGN_BOX),
    ContractSpec::new("NtGdiGetServerMetaFileBits", 7, OK).rules(GET_SERVER_META_FILE_BITS),
    ContractSpec::new("NtGdiGetStats", 5, OK).rules(GET_STATS),
    ContractSpec::new("NtGdiGetStockObject", 1, OK),
    ContractSpec::new("NtGdiGetStringBitmapW", 5, OK).rules(GET_STRING_BITMAP_W),
    ContractSpec::new("NtGdiGetSystemPaletteUse", 1, OK),
    ContractSpec::new("NtGdiGetTextCharsetInfo", 3, OK).rules(GET_TEXT_CHARSET_INFO),
    ContractSpec::new("NtGdiGetTextExtent", 5, OK).rules(GET_TEXT_EXTENT),
    ContractSpec::new("NtGdiGetTextExtentExW", 8, OK).rules(GET_TEXT_EXTENT_EX),
    ContractSpec::new("NtGdiGetTextFaceW", 4, OK).rules(GET_TEXT_FACE),
    ContractSpec::new("NtGdiGetTextMetricsW", 3, OK).rules(GET_TEXT_METRICS),
    ContractSpec::new("NtGdiGetTransform", 3, OK).rules(GET_TRANSFORM),
    ContractSpec::new("NtGdiGradientFill", 6, OK).rules(GRADIENT_FILL),
    ContractSpec::new("NtGdiHT_Get8BPPFormatPalette", 4, OK).rules(HT_GET_8BPP_FORMAT_PALETTE),
    ContractSpec::new("NtGdiHT_Get8BPPMaskPalette", 6, OK).rules(HT_GET_8BPP_MASK_PALETTE),
    ContractSpec::new("NtGdiHfontCreate", 5, OK),
    ContractSpec::new("NtGdiInit", 0, OK),
    ContractSpec::new("NtGdiIntersectClipRect", 5, OK),
    ContractSpec::new("NtGdiInvertRgn", 2, OK),
    ContractSpec::new("NtGdiLineTo", 3, OK),
    ContractSpec::new("NtGdiMakeFontDir", 5, OK).rules(MAKE_FONT_DIR),
    ContractSpec::new("NtGdiMakeInfoDC", 2, OK),
    ContractSpec::new("NtGdiMakeObjectUnXferable", 1, OK),
    ContractSpec::new("NtGdiMakeObjectXferable", 2, OK),
    ContractSpec::new("NtGdiMaskBlt", 13, OK),
    ContractSpec::new("NtGdiMirrorWindowOrg", 1, OK),
    ContractSpec::new("NtGdiModifyWorldTransform", 3, OK).rules(MODIFY_WORLD_TRANSFORM),
    ContractSpec::new("NtGdiMonoBitmap", 1, OK),
    ContractSpec::new("NtGdiMoveTo", 4, OK).rules(MOVE_TO),
    ContractSpec::new("NtGdiOffsetClipRgn", 3, OK),
    ContractSpec::new("NtGdiOffsetRgn", 3, OK),
    ContractSpec::new("NtGdiOpenDCW", 8, CREATES).rules(OPEN_DC),
    ContractSpec::new("NtGdiPatBlt", 6, OK),
    ContractSpec::new("NtGdiPathToRegion", 1, OK),
    ContractSpec::new("NtGdiPolyDraw", 4, OK).rules(POLY_DRAW),
    ContractSpec::new("NtGdiPolyPolyDraw", 5, OK).rules(POLY_POLY_DRAW),
    ContractSpec::new("NtGdiPolyTextOutW", 4, OK).rules(POLY_TEXT_OUT_W),
    ContractSpec::new("NtGdiPtInRegion", 3, OK),
    ContractSpec::new("NtGdiPtVisible", 3, OK),
    ContractSpec::new("NtGdiQueryFontAssocInfo", 1, OK),
    ContractSpec::new("NtGdiQueryFonts", 3, OK).rules(QUERY_FONTS),
    ContractSpec::new("NtGdiRectInRegion", 2, OK).rules(RECT_IN_REGION),
    ContractSpec::new("NtGdiRectVisible", 2, OK).rules(RECT_VISIBLE),
    ContractSpec::new("NtGdiRectangle", 5, OK),
    ContractSpec::new("NtGdiRemoveFontMemResourceEx", 1, OK),
    ContractSpec::new("NtGdiRemoveFontResourceW", 6, OK).rules(REMOVE_FONT_RESOURCE_W),
    ContractSpec::new("NtGdiResetDC", 5, OK).rules(RESET_DC),
    ContractSpec::new("NtGdiResizePalette", 2, OK),
    ContractSpec::new("NtGdiRestoreDC", 2, OK),
    ContractSpec::new("NtGdiRoundRect", 7, OK),
    ContractSpec::new("NtGdiSaveDC", 1, OK),
    ContractSpec::new("NtGdiScaleViewportExtEx", 6, OK).rules(SCALE_VIEWPORT_EXT_EX),
    ContractSpec::new("NtGdiScaleWindowExtEx", 6, OK).rules(SCALE_WINDOW_EXT_EX),
    ContractSpec::new("NtGdiSelectBitmap", 2, ZERO_FAIL),
    ContractSpec::new("NtGdiSelectBrush", 2, ZERO_FAIL),
    ContractSpec::new("NtGdiSelectClipPath", 2, OK),
    ContractSpec::new("NtGdiSelectFont", 2, ZERO_FAIL),
    ContractSpec::new("NtGdiSelectPen", 2, ZERO_FAIL),
    ContractSpec::new("NtGdiSetBitmapAttributes", 2, OK),
    ContractSpec::new("NtGdiSetBitmapBits", 3, OK).rules(SET_BITMAP_BITS),
    ContractSpec::new("NtGdiSetBitmapDimension", 4, OK).rules(SET_BITMAP_DIMENSION),
    ContractSpec::new("NtGdiSetBoundsRect", 3, OK).rules(SET_BOUNDS_RECT),
    ContractSpec::new("NtGdiSetBrushAttributes", 2, OK),
    ContractSpec::new("NtGdiSetBrushOrg", 4, OK).rules(SET_BRUSH_ORG),
    ContractSpec::new("NtGdiSetColorAdjustment", 2, OK).rules(SET_COLOR_ADJUSTMENT),
    ContractSpec::new("NtGdiSetColorSpace", 2, OK),
    ContractSpec::new("NtGdiSetDIBitsToDeviceInternal", 16, OK).rules(SET_DIBITS_TO_DEVICE),
    ContractSpec::new("NtGdiSetDeviceGammaRamp", 2, OK),
    ContractSpec::new("NtGdiSetFontEnumeration", 1, OK),
    ContractSpec::new("NtGdiSetFontXform", 3, OK),
    ContractSpec::new("NtGdiSetIcmMode", 3, OK),
    ContractSpec::new("NtGdiSetLayout", 3, OK),
    ContractSpec::new("NtGdiSetLinkedUFIs", 3, OK).rules(SET_LINKED_UFIS),
    ContractSpec::new("NtGdiSetMagicColors", 3, OK),
    ContractSpec::new("NtGdiSetMetaRgn", 1, OK),
    ContractSpec::new("NtGdiSetMiterLimit", 3, OK).rules(SET_MITER_LIMIT),
    ContractSpec::new("NtGdiSetPUMPDOBJ", 4, CREATES).rules(SET_PUMPDOBJ),
    ContractSpec::new("NtGdiSetPixel", 4, OK),
    ContractSpec::new("NtGdiSetPixelFormat", 2, OK),
    ContractSpec::new("NtGdiSetRectRgn", 5, OK),
    ContractSpec::new("NtGdiSetSizeDevice", 3, OK),
    ContractSpec::new("NtGdiSetSystemPaletteUse", 2, OK),
    ContractSpec::new("NtGdiSetTextJustification", 3, OK),
    ContractSpec::new("NtGdiSetVirtualResolution", 5, OK),
    ContractSpec::new("NtGdiSfmGetNotificationTokens", 3, OK).rules(SFM_GET_NOTIFICATION_TOKENS),
    ContractSpec::new("NtGdiSfmRegisterLogicalSurfaceForSignaling", 2, OK),
    ContractSpec::new("NtGdiStartDoc", 4, OK).rules(START_DOC),
    ContractSpec::new("NtGdiStartPage", 1, OK),
    ContractSpec::new("NtGdiStretchBlt", 12, OK),
    ContractSpec::new("NtGdiStrokeAndFillPath", 1, OK),
    ContractSpec::new("NtGdiStrokePath", 1, OK),
    ContractSpec::new("NtGdiSwapBuffers", 1, OK),
    ContractSpec::new("NtGdiTileBitBlt", 7, OK).rules(TILE_BIT_BLT),
    ContractSpec::new("NtGdiTransformPoints", 5, OK).rules(TRANSFORM_POINTS),
    ContractSpec::new("NtGdiTransparentBlt", 11, OK),
    ContractSpec::new("NtGdiUMPDEngFreeUserMem", 1, OK).rules(UMPD_ENG_FREE_USER_MEM),
    ContractSpec::new("NtGdiUnloadPrinterDriver", 2, OK).rules(UNLOAD_PRINTER_DRIVER),
    ContractSpec::new("NtGdiUnmapMemFont", 1, OK),
    ContractSpec::new("NtGdiUnrealizeObject", 1, OK),
    ContractSpec::new("NtGdiUpdateColors", 1, OK),
    ContractSpec::new("NtGdiUpdateTransform", 1, OK),
    ContractSpec::new("NtGdiWidenPath", 1, OK),
];
