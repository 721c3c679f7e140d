//! # `NtUserCall*` Routines
//!
//! The multiplexers carry a routine code in their last argument. Each
//! routine gets its own contract named `"<primary>.<ROUTINE>"`, with the
//! primary's argument count; the engine picks it once the code in the
//! combined slot resolves against [`OPCODES`].
//!
//! | Primary | Arguments | Routine slot |
//! |---------|-----------|--------------|
//! | `NtUserCallNoParam` | 1 | 0 |
//! | `NtUserCallOneParam` | 2 | 1 |
//! | `NtUserCallHwnd`, `NtUserCallHwndOpt`, `NtUserCallHwndLock` | 2 | 1 |
//! | `NtUserCallHwndParam`, `NtUserCallHwndParamLock` | 3 | 2 |
//! | `NtUserCallTwoParam` | 3 | 2 |
//!
//! Codes are assigned per release. A routine missing from a release has no
//! number in that column and is never matched there.

use crate::layouts::POINT;
use crate::{DELETES, OK, UNKNOWN};
use shape_engine::{Access, ContractSpec, FieldRule, OpcodeRow, SizeExpr};

/// `CCHDEVICENAME` wide characters.
const DEVICE_NAME_BYTES: u64 = 32 * 2;

const CURSOR_POS: &[FieldRule] = &[FieldRule::write(0, SizeExpr::literal(POINT))];
const PROC_DEF_LAYOUT: &[FieldRule] = &[FieldRule::write(0, SizeExpr::literal(4))];
const HDEV_NAME: &[FieldRule] = &[FieldRule::write(1, SizeExpr::literal(DEVICE_NAME_BYTES))];
const INIT_ANSI_OEM: &[FieldRule] = &[FieldRule::wide_string(1, Access::Write)];

/// Routine contracts, grouped by primary.
pub const ROUTINES: &[ContractSpec] = &[
    ContractSpec::new("NtUserCallNoParam.CREATEMENUPOPUP", 1, OK),
    ContractSpec::new("NtUserCallNoParam.DISABLEPROCWNDGHSTING", 1, OK),
    ContractSpec::new("NtUserCallNoParam.MSQCLEARWAKEMASK", 1, OK),
    ContractSpec::new("NtUserCallNoParam.ALLOWFOREGNDACTIVATION", 1, OK),
    ContractSpec::new("NtUserCallNoParam.CREATESYSTEMTHREADS", 1, OK),
    ContractSpec::new("NtUserCallNoParam.DESTROY_CARET", 1, OK),
    ContractSpec::new("NtUserCallNoParam.GETDEVICECHANGEINFO", 1, OK),
    ContractSpec::new("NtUserCallNoParam.GETIMESHOWSTATUS", 1, OK),
    ContractSpec::new("NtUserCallNoParam.GETINPUTDESKTOP", 1, OK),
    ContractSpec::new("NtUserCallNoParam.GETMSESSAGEPOS", 1, OK),
    ContractSpec::new("NtUserCallNoParam.GETREMOTEPROCID", 1, OK),
    ContractSpec::new("NtUserCallNoParam.HIDECURSORNOCAPTURE", 1, OK),
    ContractSpec::new("NtUserCallNoParam.LOADCURSANDICOS", 1, OK),
    ContractSpec::new("NtUserCallNoParam.PREPAREFORLOGOFF", 1, OK),
    ContractSpec::new("NtUserCallNoParam.RELEASECAPTURE", 1, OK),
    ContractSpec::new("NtUserCallNoParam.RESETDBLCLICK", 1, OK),
    ContractSpec::new("NtUserCallNoParam.ZAPACTIVEANDFOUS", 1, OK),
    ContractSpec::new("NtUserCallNoParam.REMOTECONSHDWSTOP", 1, OK),
    ContractSpec::new("NtUserCallNoParam.REMOTEDISCONNECT", 1, OK),
    ContractSpec::new("NtUserCallNoParam.REMOTELOGOFF", 1, OK),
    ContractSpec::new("NtUserCallNoParam.REMOTENTSECURITY", 1, OK),
    ContractSpec::new("NtUserCallNoParam.REMOTESHDWSETUP", 1, OK),
    ContractSpec::new("NtUserCallNoParam.REMOTESHDWSTOP", 1, OK),
    ContractSpec::new("NtUserCallNoParam.REMOTEPASSTHRUENABLE", 1, OK),
    ContractSpec::new("NtUserCallNoParam.REMOTEPASSTHRUDISABLE", 1, OK),
    ContractSpec::new("NtUserCallNoParam.REMOTECONNECTSTATE", 1, OK),
    ContractSpec::new("NtUserCallNoParam.UPDATEPERUSERIMMENABLING", 1, OK),
    ContractSpec::new("NtUserCallNoParam.USERPWRCALLOUTWORKER", 1, OK),
    ContractSpec::new("NtUserCallNoParam.WAKERITFORSHTDWN", 1, OK),
    ContractSpec::new("NtUserCallNoParam.INIT_MESSAGE_PUMP", 1, OK),
    ContractSpec::new("NtUserCallNoParam.UNINIT_MESSAGE_PUMP", 1, OK),
    ContractSpec::new("NtUserCallNoParam.LOADUSERAPIHOOK", 1, OK),

    ContractSpec::new("NtUserCallOneParam.BEGINDEFERWNDPOS", 2, OK),
    ContractSpec::new("NtUserCallOneParam.GETSENDMSGRECVR", 2, UNKNOWN),
    ContractSpec::new("NtUserCallOneParam.WINDOWFROMDC", 2, OK),
    ContractSpec::new("NtUserCallOneParam.ALLOWSETFOREGND", 2, UNKNOWN),
    ContractSpec::new("NtUserCallOneParam.CREATEEMPTYCUROBJECT", 2, OK),
    ContractSpec::new("NtUserCallOneParam.CREATESYSTEMTHREADS", 2, OK),
    ContractSpec::new("NtUserCallOneParam.CSDDEUNINITIALIZE", 2, UNKNOWN),
    ContractSpec::new("NtUserCallOneParam.DIRECTEDYIELD", 2, UNKNOWN),
    ContractSpec::new("NtUserCallOneParam.ENUMCLIPBOARDFORMATS", 2, OK),
    ContractSpec::new("NtUserCallOneParam.GETCURSORPOS", 2, OK).rules(CURSOR_POS),
    ContractSpec::new("NtUserCallOneParam.GETINPUTEVENT", 2, OK),
    ContractSpec::new("NtUserCallOneParam.GETKEYBOARDLAYOUT", 2, OK),
    ContractSpec::new("NtUserCallOneParam.GETKEYBOARDTYPE", 2, OK),
    ContractSpec::new("NtUserCallOneParam.GETPROCDEFLAYOUT", 2, OK).rules(PROC_DEF_LAYOUT),
    ContractSpec::new("NtUserCallOneParam.GETQUEUESTATUS", 2, OK),
    ContractSpec::new("NtUserCallOneParam.GETWINSTAINFO", 2, UNKNOWN),
    ContractSpec::new("NtUserCallOneParam.HANDLESYSTHRDCREATFAIL", 2, UNKNOWN),
    ContractSpec::new("NtUserCallOneParam.LOCKFOREGNDWINDOW", 2, UNKNOWN),
    ContractSpec::new("NtUserCallOneParam.LOADFONTS", 2, UNKNOWN),
    ContractSpec::new("NtUserCallOneParam.MAPDEKTOPOBJECT", 2, UNKNOWN),
    ContractSpec::new("NtUserCallOneParam.MESSAGEBEEP", 2, OK),
    ContractSpec::new("NtUserCallOneParam.PLAYEVENTSOUND", 2, UNKNOWN),
    ContractSpec::new("NtUserCallOneParam.POSTQUITMESSAGE", 2, OK),
    ContractSpec::new("NtUserCallOneParam.PREPAREFORLOGOFF", 2, UNKNOWN),
    ContractSpec::new("NtUserCallOneParam.REALIZEPALETTE", 2, OK),
    ContractSpec::new("NtUserCallOneParam.REGISTERLPK", 2, UNKNOWN),
    ContractSpec::new("NtUserCallOneParam.REGISTERSYSTEMTHREAD", 2, UNKNOWN),
    ContractSpec::new("NtUserCallOneParam.REMOTERECONNECT", 2, UNKNOWN),
    ContractSpec::new("NtUserCallOneParam.REMOTETHINWIRESTATUS", 2, UNKNOWN),
    ContractSpec::new("NtUserCallOneParam.RELEASEDC", 2, DELETES),
    ContractSpec::new("NtUserCallOneParam.REMOTENOTIFY", 2, UNKNOWN),
    ContractSpec::new("NtUserCallOneParam.REPLYMESSAGE", 2, OK),
    ContractSpec::new("NtUserCallOneParam.SETCARETBLINKTIME", 2, OK),
    ContractSpec::new("NtUserCallOneParam.SETDBLCLICKTIME", 2, UNKNOWN),
    ContractSpec::new("NtUserCallOneParam.SETIMESHOWSTATUS", 2, UNKNOWN),
    ContractSpec::new("NtUserCallOneParam.SETMESSAGEEXTRAINFO", 2, OK),
    ContractSpec::new("NtUserCallOneParam.SETPROCDEFLAYOUT", 2, OK),
    ContractSpec::new("NtUserCallOneParam.SETWATERMARKSTRINGS", 2, UNKNOWN),
    ContractSpec::new("NtUserCallOneParam.SHOWCURSOR", 2, OK),
    ContractSpec::new("NtUserCallOneParam.SHOWSTARTGLASS", 2, UNKNOWN),
    ContractSpec::new("NtUserCallOneParam.SWAPMOUSEBUTTON", 2, OK),

    ContractSpec::new("NtUserCallHwnd.DEREGISTERSHELLHOOKWINDOW", 2, OK),
    ContractSpec::new("NtUserCallHwnd.DWP_GETENABLEDPOPUP", 2, UNKNOWN),
    ContractSpec::new("NtUserCallHwnd.GETWNDCONTEXTHLPID", 2, OK),
    ContractSpec::new("NtUserCallHwnd.REGISTERSHELLHOOKWINDOW", 2, OK),

    ContractSpec::new("NtUserCallHwndOpt.SETPROGMANWINDOW", 2, OK),
    ContractSpec::new("NtUserCallHwndOpt.SETTASKMANWINDOW", 2, OK),

    ContractSpec::new("NtUserCallHwndParam.GETCLASSICOCUR", 3, UNKNOWN),
    ContractSpec::new("NtUserCallHwndParam.CLEARWINDOWSTATE", 3, UNKNOWN),
    ContractSpec::new("NtUserCallHwndParam.KILLSYSTEMTIMER", 3, OK),
    ContractSpec::new("NtUserCallHwndParam.SETDIALOGPOINTER", 3, OK),
    ContractSpec::new("NtUserCallHwndParam.SETVISIBLE", 3, UNKNOWN),
    ContractSpec::new("NtUserCallHwndParam.SETWNDCONTEXTHLPID", 3, OK),
    ContractSpec::new("NtUserCallHwndParam.SETWINDOWSTATE", 3, UNKNOWN),

    ContractSpec::new("NtUserCallHwndLock.WINDOWHASSHADOW", 2, OK),
    ContractSpec::new("NtUserCallHwndLock.ARRANGEICONICWINDOWS", 2, OK),
    ContractSpec::new("NtUserCallHwndLock.DRAWMENUBAR", 2, OK),
    ContractSpec::new("NtUserCallHwndLock.CHECKIMESHOWSTATUSINTHRD", 2, OK),
    ContractSpec::new("NtUserCallHwndLock.GETSYSMENUHANDLE", 2, OK),
    ContractSpec::new("NtUserCallHwndLock.REDRAWFRAME", 2, OK),
    ContractSpec::new("NtUserCallHwndLock.REDRAWFRAMEANDHOOK", 2, OK),
    ContractSpec::new("NtUserCallHwndLock.SETDLGSYSMENU", 2, OK),
    ContractSpec::new("NtUserCallHwndLock.SETFOREGROUNDWINDOW", 2, OK),
    ContractSpec::new("NtUserCallHwndLock.SETSYSMENU", 2, OK),
    ContractSpec::new("NtUserCallHwndLock.UPDATECKIENTRECT", 2, OK),
    ContractSpec::new("NtUserCallHwndLock.UPDATEWINDOW", 2, OK),

    ContractSpec::new("NtUserCallTwoParam.ENABLEWINDOW", 3, OK),
    ContractSpec::new("NtUserCallTwoParam.REDRAWTITLE", 3, UNKNOWN),
    ContractSpec::new("NtUserCallTwoParam.SHOWOWNEDPOPUPS", 3, OK),
    ContractSpec::new("NtUserCallTwoParam.SWITCHTOTHISWINDOW", 3, UNKNOWN),
    ContractSpec::new("NtUserCallTwoParam.UPDATEWINDOWS", 3, UNKNOWN),
    ContractSpec::new("NtUserCallTwoParam.CHANGEWNDMSGFILTER", 3, UNKNOWN),
    ContractSpec::new("NtUserCallTwoParam.GETCURSORPOS", 3, OK).rules(CURSOR_POS),
    ContractSpec::new("NtUserCallTwoParam.GETHDEVNAME", 3, OK).rules(HDEV_NAME),
    ContractSpec::new("NtUserCallTwoParam.INITANSIOEM", 3, OK).rules(INIT_ANSI_OEM),
    ContractSpec::new("NtUserCallTwoParam.NLSSENDIMENOTIFY", 3, UNKNOWN),
    ContractSpec::new("NtUserCallTwoParam.REGISTERGHSTWND", 3, UNKNOWN),
    ContractSpec::new("NtUserCallTwoParam.REGISTERLOGONPROCESS", 3, OK),
    ContractSpec::new("NtUserCallTwoParam.REGISTERSYSTEMTHREAD", 3, UNKNOWN),
    ContractSpec::new("NtUserCallTwoParam.REGISTERSBLFROSTWND", 3, UNKNOWN),
    ContractSpec::new("NtUserCallTwoParam.REGISTERUSERHUNGAPPHANDLERS", 3, UNKNOWN),
    ContractSpec::new("NtUserCallTwoParam.SHADOWCLEANUP", 3, UNKNOWN),
    ContractSpec::new("NtUserCallTwoParam.REMOTESHADOWSTART", 3, UNKNOWN),
    ContractSpec::new("NtUserCallTwoParam.SETCARETPOS", 3, OK),
    ContractSpec::new("NtUserCallTwoParam.SETCURSORPOS", 3, OK),

    ContractSpec::new("NtUserCallHwndParamLock.VALIDATERGN", 3, OK),
];

/// Routine codes per release, in [`OpcodeRow::new`] column order.
pub const OPCODES: &[OpcodeRow] = &[
    OpcodeRow::new(
        "NtUserCallNoParam.CREATEMENUPOPUP",
        [Some(0x00), Some(0x00), Some(0x00), Some(0x00), Some(0x00), Some(0x00)],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.DISABLEPROCWNDGHSTING",
        [Some(0x01), Some(0x01), Some(0x01), Some(0x01), Some(0x01), None],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.MSQCLEARWAKEMASK",
        [Some(0x02), Some(0x02), Some(0x02), Some(0x02), Some(0x02), Some(0x01)],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.ALLOWFOREGNDACTIVATION",
        [Some(0x03), Some(0x03), Some(0x03), Some(0x03), Some(0x03), Some(0x02)],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.CREATESYSTEMTHREADS",
        [Some(0x04), Some(0x04), Some(0x04), Some(0x04), Some(0x04), Some(0x03)],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.DESTROY_CARET",
        [Some(0x05), Some(0x05), Some(0x05), Some(0x05), Some(0x05), Some(0x04)],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.GETDEVICECHANGEINFO",
        [Some(0x06), Some(0x06), Some(0x06), Some(0x06), Some(0x06), Some(0x05)],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.GETIMESHOWSTATUS",
        [Some(0x07), Some(0x07), Some(0x07), Some(0x07), Some(0x07), Some(0x06)],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.GETINPUTDESKTOP",
        [Some(0x08), Some(0x08), Some(0x08), Some(0x08), Some(0x08), Some(0x07)],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.GETMSESSAGEPOS",
        [Some(0x09), Some(0x09), Some(0x09), Some(0x09), Some(0x09), Some(0x08)],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.GETREMOTEPROCID",
        [Some(0x0A), Some(0x0A), Some(0x0A), Some(0x0A), Some(0x0A), Some(0x09)],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.HIDECURSORNOCAPTURE",
        [Some(0x0B), Some(0x0B), Some(0x0B), Some(0x0B), Some(0x0B), Some(0x0A)],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.LOADCURSANDICOS",
        [Some(0x0C), Some(0x0C), Some(0x0C), Some(0x0C), Some(0x0C), Some(0x0B)],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.PREPAREFORLOGOFF",
        [Some(0x0D), Some(0x0D), Some(0x0D), Some(0x0D), Some(0x0D), Some(0x0C)],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.RELEASECAPTURE",
        [Some(0x0E), Some(0x0E), Some(0x0E), Some(0x0E), Some(0x0E), Some(0x0D)],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.RESETDBLCLICK",
        [Some(0x0F), Some(0x0F), Some(0x0F), Some(0x0F), Some(0x0F), Some(0x0E)],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.ZAPACTIVEANDFOUS",
        [Some(0x10), Some(0x10), Some(0x10), Some(0x10), Some(0x10), None],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.REMOTECONSHDWSTOP",
        [Some(0x11), Some(0x11), Some(0x11), Some(0x11), Some(0x11), Some(0x0F)],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.REMOTEDISCONNECT",
        [Some(0x12), Some(0x12), Some(0x12), Some(0x12), Some(0x12), Some(0x10)],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.REMOTELOGOFF",
        [Some(0x13), Some(0x13), Some(0x13), Some(0x13), Some(0x13), Some(0x11)],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.REMOTENTSECURITY",
        [Some(0x14), Some(0x14), Some(0x14), Some(0x14), Some(0x14), Some(0x12)],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.REMOTESHDWSETUP",
        [Some(0x15), Some(0x15), Some(0x15), Some(0x15), Some(0x15), Some(0x13)],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.REMOTESHDWSTOP",
        [Some(0x16), Some(0x16), Some(0x16), Some(0x16), Some(0x16), Some(0x14)],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.REMOTEPASSTHRUENABLE",
        [Some(0x17), Some(0x17), Some(0x17), Some(0x17), Some(0x17), Some(0x15)],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.REMOTEPASSTHRUDISABLE",
        [Some(0x18), Some(0x18), Some(0x18), Some(0x18), Some(0x18), Some(0x16)],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.REMOTECONNECTSTATE",
        [Some(0x19), Some(0x19), Some(0x19), Some(0x19), Some(0x19), Some(0x17)],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.UPDATEPERUSERIMMENABLING",
        [Some(0x1A), Some(0x1A), Some(0x1A), Some(0x1A), Some(0x1A), None],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.USERPWRCALLOUTWORKER",
        [Some(0x1B), Some(0x1B), Some(0x1B), Some(0x1B), None, None],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.WAKERITFORSHTDWN",
        [Some(0x1C), Some(0x1C), Some(0x1C), Some(0x1C), None, None],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.INIT_MESSAGE_PUMP",
        [Some(0x1D), Some(0x1D), Some(0x1D), Some(0x1D), None, None],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.UNINIT_MESSAGE_PUMP",
        [Some(0x1E), Some(0x1E), Some(0x1E), Some(0x1E), None, None],
    ),
    OpcodeRow::new(
        "NtUserCallNoParam.LOADUSERAPIHOOK",
        [Some(0x1F), Some(0x1F), Some(0x1F), Some(0x1F), Some(0x1B), None],
    ),

    OpcodeRow::new(
        "NtUserCallOneParam.BEGINDEFERWNDPOS",
        [Some(0x00), Some(0x00), Some(0x00), Some(0x00), Some(0x00), Some(0x00)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.GETSENDMSGRECVR",
        [Some(0x01), Some(0x01), Some(0x01), Some(0x01), Some(0x01), Some(0x01)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.WINDOWFROMDC",
        [Some(0x02), Some(0x02), Some(0x02), Some(0x02), Some(0x02), Some(0x02)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.ALLOWSETFOREGND",
        [Some(0x03), Some(0x03), Some(0x03), Some(0x03), Some(0x03), Some(0x03)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.CREATEEMPTYCUROBJECT",
        [Some(0x04), Some(0x04), Some(0x04), Some(0x04), Some(0x04), Some(0x04)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.CREATESYSTEMTHREADS",
        [Some(0x05), Some(0x05), Some(0x05), Some(0x05), Some(0x05), Some(0x05)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.CSDDEUNINITIALIZE",
        [Some(0x06), Some(0x06), Some(0x06), Some(0x06), Some(0x06), Some(0x06)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.DIRECTEDYIELD",
        [Some(0x07), Some(0x07), Some(0x07), Some(0x07), Some(0x07), Some(0x07)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.ENUMCLIPBOARDFORMATS",
        [Some(0x08), Some(0x08), Some(0x08), Some(0x08), Some(0x08), Some(0x08)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.GETCURSORPOS",
        [Some(0x09), Some(0x09), Some(0x09), Some(0x09), Some(0x09), Some(0x09)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.GETINPUTEVENT",
        [Some(0x0A), Some(0x0A), Some(0x0A), Some(0x0A), Some(0x0A), Some(0x0A)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.GETKEYBOARDLAYOUT",
        [Some(0x0B), Some(0x0B), Some(0x0B), Some(0x0B), Some(0x0B), Some(0x0B)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.GETKEYBOARDTYPE",
        [Some(0x0C), Some(0x0C), Some(0x0C), Some(0x0C), Some(0x0C), Some(0x0C)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.GETPROCDEFLAYOUT",
        [Some(0x0D), Some(0x0D), Some(0x0D), Some(0x0D), Some(0x0D), Some(0x0D)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.GETQUEUESTATUS",
        [Some(0x0E), Some(0x0E), Some(0x0E), Some(0x0E), Some(0x0E), Some(0x0E)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.GETWINSTAINFO",
        [Some(0x0F), Some(0x0F), Some(0x0F), None, None, None],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.HANDLESYSTHRDCREATFAIL",
        [Some(0x10), Some(0x10), Some(0x10), Some(0x0F), Some(0x0F), Some(0x0F)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.LOCKFOREGNDWINDOW",
        [Some(0x11), Some(0x11), Some(0x11), Some(0x10), Some(0x10), Some(0x10)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.LOADFONTS",
        [Some(0x12), Some(0x12), Some(0x12), Some(0x11), Some(0x11), Some(0x11)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.MAPDEKTOPOBJECT",
        [Some(0x13), Some(0x13), Some(0x13), Some(0x12), Some(0x12), Some(0x12)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.MESSAGEBEEP",
        [Some(0x14), Some(0x14), Some(0x14), Some(0x13), Some(0x13), Some(0x13)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.PLAYEVENTSOUND",
        [Some(0x15), Some(0x15), Some(0x15), Some(0x14), Some(0x14), Some(0x14)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.POSTQUITMESSAGE",
        [Some(0x16), Some(0x16), Some(0x16), Some(0x15), Some(0x15), Some(0x15)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.PREPAREFORLOGOFF",
        [Some(0x17), Some(0x17), Some(0x17), Some(0x16), Some(0x16), Some(0x16)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.REALIZEPALETTE",
        [Some(0x18), Some(0x18), Some(0x18), Some(0x17), Some(0x17), Some(0x17)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.REGISTERLPK",
        [Some(0x19), Some(0x19), Some(0x19), Some(0x18), Some(0x18), Some(0x18)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.REGISTERSYSTEMTHREAD",
        [Some(0x1A), Some(0x1A), Some(0x1A), Some(0x19), Some(0x19), Some(0x19)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.REMOTERECONNECT",
        [Some(0x1B), Some(0x1B), Some(0x1B), Some(0x1A), Some(0x1A), Some(0x1A)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.REMOTETHINWIRESTATUS",
        [Some(0x1C), Some(0x1C), Some(0x1C), Some(0x1B), Some(0x1B), Some(0x1B)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.RELEASEDC",
        [Some(0x1D), Some(0x1D), Some(0x1D), Some(0x1C), Some(0x1C), Some(0x1C)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.REMOTENOTIFY",
        [Some(0x1E), Some(0x1E), Some(0x1E), Some(0x1D), Some(0x1D), Some(0x1D)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.REPLYMESSAGE",
        [Some(0x1F), Some(0x1F), Some(0x1F), Some(0x1E), Some(0x1E), Some(0x1E)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.SETCARETBLINKTIME",
        [Some(0x20), Some(0x20), Some(0x20), Some(0x1F), Some(0x1F), Some(0x1F)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.SETDBLCLICKTIME",
        [Some(0x21), Some(0x21), Some(0x21), Some(0x20), Some(0x20), Some(0x20)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.SETIMESHOWSTATUS",
        [Some(0x22), Some(0x22), Some(0x22), Some(0x21), Some(0x21), Some(0x21)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.SETMESSAGEEXTRAINFO",
        [Some(0x23), Some(0x23), Some(0x23), Some(0x22), Some(0x22), Some(0x22)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.SETPROCDEFLAYOUT",
        [Some(0x24), Some(0x24), Some(0x24), Some(0x23), Some(0x23), Some(0x23)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.SETWATERMARKSTRINGS",
        [Some(0x25), Some(0x25), Some(0x25), None, None, None],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.SHOWCURSOR",
        [Some(0x26), Some(0x26), Some(0x26), Some(0x24), Some(0x24), Some(0x24)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.SHOWSTARTGLASS",
        [Some(0x27), Some(0x27), Some(0x27), Some(0x25), Some(0x25), Some(0x25)],
    ),
    OpcodeRow::new(
        "NtUserCallOneParam.SWAPMOUSEBUTTON",
        [Some(0x28), Some(0x28), Some(0x28), Some(0x26), Some(0x26), Some(0x26)],
    ),

    OpcodeRow::new(
        "NtUserCallHwnd.DEREGISTERSHELLHOOKWINDOW",
        [Some(0x00), Some(0x00), Some(0x00), Some(0x00), Some(0x00), Some(0x00)],
    ),
    OpcodeRow::new(
        "NtUserCallHwnd.DWP_GETENABLEDPOPUP",
        [Some(0x01), Some(0x01), Some(0x01), Some(0x01), Some(0x01), Some(0x01)],
    ),
    OpcodeRow::new(
        "NtUserCallHwnd.GETWNDCONTEXTHLPID",
        [Some(0x02), Some(0x02), Some(0x02), Some(0x02), Some(0x02), Some(0x02)],
    ),
    OpcodeRow::new(
        "NtUserCallHwnd.REGISTERSHELLHOOKWINDOW",
        [Some(0x03), Some(0x03), Some(0x03), Some(0x03), Some(0x03), Some(0x03)],
    ),

    OpcodeRow::new(
        "NtUserCallHwndOpt.SETPROGMANWINDOW",
        [Some(0x00), Some(0x00), Some(0x00), Some(0x00), Some(0x00), Some(0x00)],
    ),
    OpcodeRow::new(
        "NtUserCallHwndOpt.SETTASKMANWINDOW",
        [Some(0x01), Some(0x01), Some(0x01), Some(0x01), Some(0x01), Some(0x01)],
    ),

    OpcodeRow::new(
        "NtUserCallHwndParam.GETCLASSICOCUR",
        [Some(0x00), Some(0x00), Some(0x00), None, None, None],
    ),
    OpcodeRow::new(
        "NtUserCallHwndParam.CLEARWINDOWSTATE",
        [Some(0x01), None, None, None, None, None],
    ),
    OpcodeRow::new(
        "NtUserCallHwndParam.KILLSYSTEMTIMER",
        [Some(0x02), Some(0x01), Some(0x01), Some(0x00), Some(0x00), Some(0x00)],
    ),
    OpcodeRow::new(
        "NtUserCallHwndParam.SETDIALOGPOINTER",
        [Some(0x03), Some(0x02), Some(0x02), Some(0x01), Some(0x01), Some(0x01)],
    ),
    OpcodeRow::new("NtUserCallHwndParam.SETVISIBLE", [Some(0x04), None, None, None, None, None]),
    OpcodeRow::new(
        "NtUserCallHwndParam.SETWNDCONTEXTHLPID",
        [Some(0x05), Some(0x03), Some(0x03), Some(0x02), Some(0x02), Some(0x02)],
    ),
    OpcodeRow::new(
        "NtUserCallHwndParam.SETWINDOWSTATE",
        [Some(0x06), None, None, None, None, None],
    ),

    OpcodeRow::new(
        "NtUserCallHwndLock.WINDOWHASSHADOW",
        [Some(0x00), Some(0x00), Some(0x00), Some(0x00), None, None],
    ),
    OpcodeRow::new(
        "NtUserCallHwndLock.ARRANGEICONICWINDOWS",
        [Some(0x01), Some(0x01), Some(0x01), Some(0x01), Some(0x00), Some(0x00)],
    ),
    OpcodeRow::new(
        "NtUserCallHwndLock.DRAWMENUBAR",
        [Some(0x02), Some(0x02), Some(0x02), Some(0x02), Some(0x01), Some(0x01)],
    ),
    OpcodeRow::new(
        "NtUserCallHwndLock.CHECKIMESHOWSTATUSINTHRD",
        [Some(0x03), Some(0x03), Some(0x03), Some(0x03), Some(0x02), Some(0x02)],
    ),
    OpcodeRow::new(
        "NtUserCallHwndLock.GETSYSMENUHANDLE",
        [Some(0x04), Some(0x04), Some(0x04), Some(0x04), Some(0x03), Some(0x03)],
    ),
    OpcodeRow::new(
        "NtUserCallHwndLock.REDRAWFRAME",
        [Some(0x05), Some(0x05), Some(0x05), Some(0x05), Some(0x04), Some(0x04)],
    ),
    OpcodeRow::new(
        "NtUserCallHwndLock.REDRAWFRAMEANDHOOK",
        [Some(0x06), Some(0x06), Some(0x06), Some(0x06), Some(0x05), Some(0x05)],
    ),
    OpcodeRow::new(
        "NtUserCallHwndLock.SETDLGSYSMENU",
        [Some(0x07), Some(0x07), Some(0x07), Some(0x07), Some(0x06), Some(0x06)],
    ),
    OpcodeRow::new(
        "NtUserCallHwndLock.SETFOREGROUNDWINDOW",
        [Some(0x08), Some(0x08), Some(0x08), Some(0x08), Some(0x07), Some(0x07)],
    ),
    OpcodeRow::new(
        "NtUserCallHwndLock.SETSYSMENU",
        [Some(0x09), Some(0x09), Some(0x09), Some(0x09), Some(0x08), Some(0x08)],
    ),
    OpcodeRow::new(
        "NtUserCallHwndLock.UPDATECKIENTRECT",
        [Some(0x0A), Some(0x0A), Some(0x0A), Some(0x0A), Some(0x09), Some(0x09)],
    ),
    OpcodeRow::new(
        "NtUserCallHwndLock.UPDATEWINDOW",
        [Some(0x0B), Some(0x0B), Some(0x0B), Some(0x0B), Some(0x0A), Some(0x0A)],
    ),

    OpcodeRow::new(
        "NtUserCallTwoParam.ENABLEWINDOW",
        [Some(0x00), Some(0x00), Some(0x00), Some(0x00), Some(0x00), Some(0x00)],
    ),
    OpcodeRow::new(
        "NtUserCallTwoParam.REDRAWTITLE",
        [Some(0x01), Some(0x01), Some(0x01), Some(0x01), Some(0x01), Some(0x01)],
    ),
    OpcodeRow::new(
        "NtUserCallTwoParam.SHOWOWNEDPOPUPS",
        [Some(0x02), Some(0x02), Some(0x02), Some(0x02), Some(0x02), Some(0x02)],
    ),
    OpcodeRow::new(
        "NtUserCallTwoParam.SWITCHTOTHISWINDOW",
        [Some(0x03), Some(0x03), Some(0x03), Some(0x03), Some(0x03), Some(0x03)],
    ),
    OpcodeRow::new(
        "NtUserCallTwoParam.UPDATEWINDOWS",
        [Some(0x04), Some(0x04), Some(0x04), Some(0x04), Some(0x04), Some(0x04)],
    ),
    OpcodeRow::new(
        "NtUserCallTwoParam.CHANGEWNDMSGFILTER",
        [Some(0x05), Some(0x05), Some(0x05), Some(0x05), Some(0x05), Some(0x05)],
    ),
    OpcodeRow::new(
        "NtUserCallTwoParam.GETCURSORPOS",
        [Some(0x06), Some(0x06), Some(0x06), Some(0x06), Some(0x06), Some(0x06)],
    ),
    OpcodeRow::new(
        "NtUserCallTwoParam.GETHDEVNAME",
        [Some(0x07), Some(0x07), Some(0x07), Some(0x07), Some(0x07), Some(0x07)],
    ),
    OpcodeRow::new(
        "NtUserCallTwoParam.INITANSIOEM",
        [Some(0x08), Some(0x08), Some(0x08), Some(0x08), Some(0x08), Some(0x08)],
    ),
    OpcodeRow::new(
        "NtUserCallTwoParam.NLSSENDIMENOTIFY",
        [Some(0x09), Some(0x09), Some(0x09), Some(0x09), Some(0x09), Some(0x09)],
    ),
    OpcodeRow::new(
        "NtUserCallTwoParam.REGISTERGHSTWND",
        [Some(0x0A), Some(0x0A), Some(0x0A), Some(0x0A), Some(0x0A), Some(0x0A)],
    ),
    OpcodeRow::new(
        "NtUserCallTwoParam.REGISTERLOGONPROCESS",
        [Some(0x0B), Some(0x0B), Some(0x0B), Some(0x0B), Some(0x0B), Some(0x0B)],
    ),
    OpcodeRow::new(
        "NtUserCallTwoParam.REGISTERSYSTEMTHREAD",
        [Some(0x0C), Some(0x0C), Some(0x0C), Some(0x0C), Some(0x0C), Some(0x0C)],
    ),
    OpcodeRow::new(
        "NtUserCallTwoParam.REGISTERSBLFROSTWND",
        [Some(0x0D), Some(0x0D), Some(0x0D), None, None, None],
    ),
    OpcodeRow::new(
        "NtUserCallTwoParam.REGISTERUSERHUNGAPPHANDLERS",
        [Some(0x0E), Some(0x0E), Some(0x0E), Some(0x0D), Some(0x0D), Some(0x0D)],
    ),
    OpcodeRow::new(
        "NtUserCallTwoParam.SHADOWCLEANUP",
        [Some(0x0F), Some(0x0F), None, None, None, None],
    ),
    OpcodeRow::new(
        "NtUserCallTwoParam.REMOTESHADOWSTART",
        [Some(0x10), Some(0x10), None, None, None, None],
    ),
    OpcodeRow::new(
        "NtUserCallTwoParam.SETCARETPOS",
        [Some(0x11), Some(0x11), Some(0x0F), Some(0x0E), Some(0x0E), Some(0x0E)],
    ),
    OpcodeRow::new(
        "NtUserCallTwoParam.SETCURSORPOS",
        [Some(0x12), Some(0x12), Some(0x10), Some(0x0F), Some(0x0F), Some(0x0F)],
    ),

    OpcodeRow::new(
        "NtUserCallHwndParamLock.VALIDATERGN",
        [Some(0x00), Some(0x00), Some(0x00), Some(0x00), Some(0x00), Some(0x00)],
    ),
];
