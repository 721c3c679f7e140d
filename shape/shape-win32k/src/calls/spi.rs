//! `NtUserSystemParametersInfo`.
//!
//! The action in `uiAction` decides everything: whether `pvParam` is read or
//! written, and whether its size is fixed, given by `uiParam`, or read from
//! a header. Actions that pass their value inline in `uiParam` or `pvParam`
//! touch no memory at all.

use crate::layouts::{PTR, RECT, high_contrast, serial_keys as sk, sound_sentry};
use crate::types::{
    MetricsLayout, declared_size, icon_metrics, logfont, nonclient_metrics, unicode_string,
};
use log::trace;
use shape_engine::{Access, AddressRange, AppAddress, CallContext, CallHandler, Checker};

const UI_ACTION: usize = 0;
const UI_PARAM: usize = 1;
const PV_PARAM: usize = 2;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Buffer {
    /// The value travels in `uiParam` or `pvParam` itself.
    Inline,
    Fixed(u64),
    /// `uiParam` bytes.
    UiParam,
    /// Up to `uiParam` wide chars, terminated.
    UiParamChars,
    UnicodeString,
    /// A `LOGFONTW` of `uiParam` bytes.
    LogFont,
    NonClientMetrics,
    IconMetrics,
    SerialKeys,
    /// `uiParam` bytes with a string pointer at `offset`, present only when
    /// `uiParam` covers it.
    WithString { offset: u64, what: &'static str },
    /// Queried through `pvParam` when one is given, set through `uiParam`
    /// otherwise.
    Spacing,
}

impl Buffer {
    const fn uses_pointer(self) -> bool {
        !matches!(self, Self::Inline | Self::Spacing)
    }
}

#[derive(Debug, Copy, Clone)]
struct Action {
    action: u32,
    get: bool,
    buffer: Buffer,
}

const fn get(action: u32, buffer: Buffer) -> Action {
    Action {
        action,
        get: true,
        buffer,
    }
}

const fn set(action: u32, buffer: Buffer) -> Action {
    Action {
        action,
        get: false,
        buffer,
    }
}

const INT: Buffer = Buffer::Fixed(4);
const HKL: Buffer = Buffer::Fixed(8);
const MOUSE: Buffer = Buffer::Fixed(12);
const WORK_AREA: Buffer = Buffer::Fixed(RECT);
const SOUND_SENTRY: Buffer = Buffer::WithString {
    offset: sound_sentry::EFFECT_DLL,
    what: "SOUNDSENTRYW.lpszWindowsEffectDLL",
};
const HIGH_CONTRAST: Buffer = Buffer::WithString {
    offset: high_contrast::DEFAULT_SCHEME,
    what: "HIGHCONTRASTW.lpszDefaultScheme",
};

/// Sorted by action.
const ACTIONS: &[Action] = &[
    get(0x0001, INT),                  // GETBEEP
    set(0x0002, Buffer::Inline),       // SETBEEP
    get(0x0003, MOUSE),                // GETMOUSE
    set(0x0004, MOUSE),                // SETMOUSE
    get(0x0005, INT),                  // GETBORDER
    set(0x0006, Buffer::Inline),       // SETBORDER
    get(0x000A, INT),                  // GETKEYBOARDSPEED
    set(0x000B, Buffer::Inline),       // SETKEYBOARDSPEED
    get(0x000D, Buffer::Spacing),      // ICONHORIZONTALSPACING
    get(0x000E, INT),                  // GETSCREENSAVETIMEOUT
    set(0x000F, Buffer::Inline),       // SETSCREENSAVETIMEOUT
    get(0x0010, INT),                  // GETSCREENSAVEACTIVE
    set(0x0011, Buffer::Inline),       // SETSCREENSAVEACTIVE
    get(0x0012, INT),                  // GETGRIDGRANULARITY
    set(0x0013, Buffer::Inline),       // SETGRIDGRANULARITY
    set(0x0014, Buffer::UnicodeString), // SETDESKWALLPAPER
    set(0x0015, Buffer::Inline),       // SETDESKPATTERN
    get(0x0016, INT),                  // GETKEYBOARDDELAY
    set(0x0017, Buffer::Inline),       // SETKEYBOARDDELAY
    get(0x0018, Buffer::Spacing),      // ICONVERTICALSPACING
    get(0x0019, INT),                  // GETICONTITLEWRAP
    set(0x001A, Buffer::Inline),       // SETICONTITLEWRAP
    get(0x001B, INT),                  // GETMENUDROPALIGNMENT
    set(0x001C, Buffer::Inline),       // SETMENUDROPALIGNMENT
    set(0x001D, Buffer::Inline),       // SETDOUBLECLKWIDTH
    set(0x001E, Buffer::Inline),       // SETDOUBLECLKHEIGHT
    get(0x001F, Buffer::LogFont),      // GETICONTITLELOGFONT
    set(0x0020, Buffer::Inline),       // SETDOUBLECLICKTIME
    set(0x0021, Buffer::Inline),       // SETMOUSEBUTTONSWAP
    set(0x0022, Buffer::LogFont),      // SETICONTITLELOGFONT
    get(0x0023, INT),                  // GETFASTTASKSWITCH
    set(0x0024, Buffer::Inline),       // SETFASTTASKSWITCH
    set(0x0025, Buffer::Inline),       // SETDRAGFULLWINDOWS
    get(0x0026, INT),                  // GETDRAGFULLWINDOWS
    get(0x0029, Buffer::NonClientMetrics), // GETNONCLIENTMETRICS
    set(0x002A, Buffer::NonClientMetrics), // SETNONCLIENTMETRICS
    get(0x002B, Buffer::UiParam),      // GETMINIMIZEDMETRICS
    set(0x002C, Buffer::UiParam),      // SETMINIMIZEDMETRICS
    get(0x002D, Buffer::IconMetrics),  // GETICONMETRICS
    set(0x002E, Buffer::IconMetrics),  // SETICONMETRICS
    set(0x002F, WORK_AREA),            // SETWORKAREA
    get(0x0030, WORK_AREA),            // GETWORKAREA
    set(0x0031, Buffer::Inline),       // SETPENWINDOWS
    get(0x0032, Buffer::UiParam),      // GETFILTERKEYS
    set(0x0033, Buffer::UiParam),      // SETFILTERKEYS
    get(0x0034, Buffer::UiParam),      // GETTOGGLEKEYS
    set(0x0035, Buffer::UiParam),      // SETTOGGLEKEYS
    get(0x0036, Buffer::UiParam),      // GETMOUSEKEYS
    set(0x0037, Buffer::UiParam),      // SETMOUSEKEYS
    get(0x0038, INT),                  // GETSHOWSOUNDS
    set(0x0039, Buffer::Inline),       // SETSHOWSOUNDS
    get(0x003A, Buffer::UiParam),      // GETSTICKYKEYS
    set(0x003B, Buffer::UiParam),      // SETSTICKYKEYS
    get(0x003C, Buffer::UiParam),      // GETACCESSTIMEOUT
    set(0x003D, Buffer::UiParam),      // SETACCESSTIMEOUT
    get(0x003E, Buffer::SerialKeys),   // GETSERIALKEYS
    set(0x003F, Buffer::SerialKeys),   // SETSERIALKEYS
    get(0x0040, SOUND_SENTRY),         // GETSOUNDSENTRY
    set(0x0041, SOUND_SENTRY),         // SETSOUNDSENTRY
    get(0x0042, HIGH_CONTRAST),        // GETHIGHCONTRAST
    set(0x0043, HIGH_CONTRAST),        // SETHIGHCONTRAST
    get(0x0044, INT),                  // GETKEYBOARDPREF
    set(0x0045, Buffer::Inline),       // SETKEYBOARDPREF
    get(0x0046, INT),                  // GETSCREENREADER
    set(0x0047, Buffer::Inline),       // SETSCREENREADER
    get(0x0048, Buffer::UiParam),      // GETANIMATION
    set(0x0049, Buffer::UiParam),      // SETANIMATION
    get(0x004A, INT),                  // GETFONTSMOOTHING
    set(0x004B, Buffer::Inline),       // SETFONTSMOOTHING
    set(0x004C, Buffer::Inline),       // SETDRAGWIDTH
    set(0x004D, Buffer::Inline),       // SETDRAGHEIGHT
    set(0x004E, Buffer::Inline),       // SETHANDHELD
    get(0x004F, INT),                  // GETLOWPOWERTIMEOUT
    get(0x0050, INT),                  // GETPOWEROFFTIMEOUT
    set(0x0051, Buffer::Inline),       // SETLOWPOWERTIMEOUT
    set(0x0052, Buffer::Inline),       // SETPOWEROFFTIMEOUT
    get(0x0053, INT),                  // GETLOWPOWERACTIVE
    get(0x0054, INT),                  // GETPOWEROFFACTIVE
    set(0x0055, Buffer::Inline),       // SETLOWPOWERACTIVE
    set(0x0056, Buffer::Inline),       // SETPOWEROFFACTIVE
    set(0x0057, Buffer::Inline),       // SETCURSORS
    set(0x0058, Buffer::Inline),       // SETICONS
    get(0x0059, HKL),                  // GETDEFAULTINPUTLANG
    set(0x005A, HKL),                  // SETDEFAULTINPUTLANG
    set(0x005B, Buffer::Inline),       // SETLANGTOGGLE
    set(0x005D, Buffer::Inline),       // SETMOUSETRAILS
    get(0x005E, INT),                  // GETMOUSETRAILS
    get(0x005F, INT),                  // GETSNAPTODEFBUTTON
    set(0x0060, Buffer::Inline),       // SETSNAPTODEFBUTTON
    get(0x0062, INT),                  // GETMOUSEHOVERWIDTH
    set(0x0063, Buffer::Inline),       // SETMOUSEHOVERWIDTH
    get(0x0064, INT),                  // GETMOUSEHOVERHEIGHT
    set(0x0065, Buffer::Inline),       // SETMOUSEHOVERHEIGHT
    get(0x0066, INT),                  // GETMOUSEHOVERTIME
    set(0x0067, Buffer::Inline),       // SETMOUSEHOVERTIME
    get(0x0068, INT),                  // GETWHEELSCROLLLINES
    set(0x0069, Buffer::Inline),       // SETWHEELSCROLLLINES
    get(0x006A, INT),                  // GETMENUSHOWDELAY
    set(0x006B, Buffer::Inline),       // SETMENUSHOWDELAY
    get(0x006C, INT),                  // GETWHEELSCROLLCHARS
    set(0x006D, Buffer::Inline),       // SETWHEELSCROLLCHARS
    get(0x006E, INT),                  // GETSHOWIMEUI
    set(0x006F, Buffer::Inline),       // SETSHOWIMEUI
    get(0x0070, INT),                  // GETMOUSESPEED
    set(0x0071, Buffer::Inline),       // SETMOUSESPEED
    get(0x0072, INT),                  // GETSCREENSAVERRUNNING
    get(0x0073, Buffer::UiParamChars), // GETDESKWALLPAPER
    get(0x0074, Buffer::UiParam),      // GETAUDIODESCRIPTION
    set(0x0075, Buffer::UiParam),      // SETAUDIODESCRIPTION
    get(0x0076, INT),                  // GETSCREENSAVESECURE
    set(0x0077, Buffer::Inline),       // SETSCREENSAVESECURE
    get(0x0078, INT),                  // GETHUNGAPPTIMEOUT
    set(0x0079, Buffer::Inline),       // SETHUNGAPPTIMEOUT
    get(0x007A, INT),                  // GETWAITTOKILLTIMEOUT
    set(0x007B, Buffer::Inline),       // SETWAITTOKILLTIMEOUT
    get(0x007C, INT),                  // GETWAITTOKILLSERVICETIMEOUT
    set(0x007D, Buffer::Inline),       // SETWAITTOKILLSERVICETIMEOUT
    get(0x007E, INT),                  // GETMOUSEDOCKTHRESHOLD
    set(0x007F, INT),                  // SETMOUSEDOCKTHRESHOLD
    get(0x0080, INT),                  // GETPENDOCKTHRESHOLD
    set(0x0081, INT),                  // SETPENDOCKTHRESHOLD
    get(0x0082, INT),                  // GETWINARRANGING
    set(0x0083, Buffer::Inline),       // SETWINARRANGING
    get(0x0084, INT),                  // GETMOUSEDRAGOUTTHRESHOLD
    set(0x0085, INT),                  // SETMOUSEDRAGOUTTHRESHOLD
    get(0x0086, INT),                  // GETPENDRAGOUTTHRESHOLD
    set(0x0087, INT),                  // SETPENDRAGOUTTHRESHOLD
    get(0x0088, INT),                  // GETMOUSESIDEMOVETHRESHOLD
    set(0x0089, INT),                  // SETMOUSESIDEMOVETHRESHOLD
    get(0x008A, INT),                  // GETPENSIDEMOVETHRESHOLD
    set(0x008B, INT),                  // SETPENSIDEMOVETHRESHOLD
    get(0x008C, INT),                  // GETDRAGFROMMAXIMIZE
    set(0x008D, Buffer::Inline),       // SETDRAGFROMMAXIMIZE
    get(0x008E, INT),                  // GETSNAPSIZING
    set(0x008F, Buffer::Inline),       // SETSNAPSIZING
    get(0x0090, INT),                  // GETDOCKMOVING
    set(0x0091, Buffer::Inline),       // SETDOCKMOVING
    get(0x1000, INT),                  // GETACTIVEWINDOWTRACKING
    set(0x1001, Buffer::Inline),       // SETACTIVEWINDOWTRACKING
    get(0x1002, INT),                  // GETMENUANIMATION
    set(0x1003, Buffer::Inline),       // SETMENUANIMATION
    get(0x1004, INT),                  // GETCOMBOBOXANIMATION
    set(0x1005, Buffer::Inline),       // SETCOMBOBOXANIMATION
    get(0x1006, INT),                  // GETLISTBOXSMOOTHSCROLLING
    set(0x1007, Buffer::Inline),       // SETLISTBOXSMOOTHSCROLLING
    get(0x1008, INT),                  // GETGRADIENTCAPTIONS
    set(0x1009, Buffer::Inline),       // SETGRADIENTCAPTIONS
    get(0x100A, INT),                  // GETKEYBOARDCUES
    set(0x100B, Buffer::Inline),       // SETKEYBOARDCUES
    get(0x100C, INT),                  // GETACTIVEWNDTRKZORDER
    set(0x100D, Buffer::Inline),       // SETACTIVEWNDTRKZORDER
    get(0x100E, INT),                  // GETHOTTRACKING
    set(0x100F, Buffer::Inline),       // SETHOTTRACKING
    get(0x1012, INT),                  // GETMENUFADE
    set(0x1013, Buffer::Inline),       // SETMENUFADE
    get(0x1014, INT),                  // GETSELECTIONFADE
    set(0x1015, Buffer::Inline),       // SETSELECTIONFADE
    get(0x1016, INT),                  // GETTOOLTIPANIMATION
    set(0x1017, Buffer::Inline),       // SETTOOLTIPANIMATION
    get(0x1018, INT),                  // GETTOOLTIPFADE
    set(0x1019, Buffer::Inline),       // SETTOOLTIPFADE
    get(0x101A, INT),                  // GETCURSORSHADOW
    set(0x101B, Buffer::Inline),       // SETCURSORSHADOW
    get(0x101C, INT),                  // GETMOUSESONAR
    set(0x101D, Buffer::Inline),       // SETMOUSESONAR
    get(0x101E, INT),                  // GETMOUSECLICKLOCK
    set(0x101F, Buffer::Inline),       // SETMOUSECLICKLOCK
    get(0x1020, INT),                  // GETMOUSEVANISH
    set(0x1021, Buffer::Inline),       // SETMOUSEVANISH
    get(0x1022, INT),                  // GETFLATMENU
    set(0x1023, Buffer::Inline),       // SETFLATMENU
    get(0x1024, INT),                  // GETDROPSHADOW
    set(0x1025, Buffer::Inline),       // SETDROPSHADOW
    get(0x1026, INT),                  // GETBLOCKSENDINPUTRESETS
    set(0x1027, Buffer::Inline),       // SETBLOCKSENDINPUTRESETS
    get(0x103E, INT),                  // GETUIEFFECTS
    set(0x103F, Buffer::Inline),       // SETUIEFFECTS
    get(0x1040, INT),                  // GETDISABLEOVERLAPPEDCONTENT
    set(0x1041, Buffer::Inline),       // SETDISABLEOVERLAPPEDCONTENT
    get(0x1042, INT),                  // GETCLIENTAREAANIMATION
    set(0x1043, Buffer::Inline),       // SETCLIENTAREAANIMATION
    get(0x1048, INT),                  // GETCLEARTYPE
    set(0x1049, Buffer::Inline),       // SETCLEARTYPE
    get(0x104A, INT),                  // GETSPEECHRECOGNITION
    set(0x104B, Buffer::Inline),       // SETSPEECHRECOGNITION
    get(0x2000, INT),                  // GETFOREGROUNDLOCKTIMEOUT
    set(0x2001, Buffer::Inline),       // SETFOREGROUNDLOCKTIMEOUT
    get(0x2002, INT),                  // GETACTIVEWNDTRKTIMEOUT
    set(0x2003, Buffer::Inline),       // SETACTIVEWNDTRKTIMEOUT
    get(0x2004, INT),                  // GETFOREGROUNDFLASHCOUNT
    set(0x2005, Buffer::Inline),       // SETFOREGROUNDFLASHCOUNT
    get(0x2006, INT),                  // GETCARETWIDTH
    set(0x2007, Buffer::Inline),       // SETCARETWIDTH
    get(0x2008, INT),                  // GETMOUSECLICKLOCKTIME
    set(0x2009, Buffer::Inline),       // SETMOUSECLICKLOCKTIME
    get(0x200A, INT),                  // GETFONTSMOOTHINGTYPE
    set(0x200B, Buffer::Inline),       // SETFONTSMOOTHINGTYPE
    get(0x200C, INT),                  // GETFONTSMOOTHINGCONTRAST
    set(0x200D, Buffer::Inline),       // SETFONTSMOOTHINGCONTRAST
    get(0x200E, INT),                  // GETFOCUSBORDERWIDTH
    set(0x200F, Buffer::Inline),       // SETFOCUSBORDERWIDTH
    get(0x2010, INT),                  // GETFOCUSBORDERHEIGHT
    set(0x2011, Buffer::Inline),       // SETFOCUSBORDERHEIGHT
    get(0x2012, INT),                  // GETFONTSMOOTHINGORIENTATION
    set(0x2013, Buffer::Inline),       // SETFONTSMOOTHINGORIENTATION
    get(0x2016, INT),                  // GETMESSAGEDURATION
    set(0x2017, Buffer::Inline),       // SETMESSAGEDURATION
];

fn lookup(action: u32) -> Option<&'static Action> {
    ACTIONS
        .binary_search_by_key(&action, |entry| entry.action)
        .ok()
        .and_then(|index| ACTIONS.get(index))
}

/// Checks `pvParam` by action; the metrics structures follow the layout of
/// the running release.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SystemParametersInfo {
    layout: MetricsLayout,
}

impl SystemParametersInfo {
    #[must_use]
    pub const fn new(layout: MetricsLayout) -> Self {
        Self { layout }
    }

    fn run(&self, cx: &mut Checker<'_>) {
        let action = cx.arg_u32(UI_ACTION);
        let ui_param = u64::from(cx.arg_u32(UI_PARAM));
        let pv = cx.arg_addr(PV_PARAM);

        let Some(entry) = lookup(action) else {
            if cx.is_pre() {
                trace!("SPI action {action:#X} has no description");
                cx.partially_modeled("SystemParametersInfo action");
            }
            return;
        };
        if pv.is_null() && entry.buffer.uses_pointer() {
            return;
        }
        let access = if entry.get { Access::Write } else { Access::Read };

        match entry.buffer {
            Buffer::Inline => {}
            Buffer::Fixed(bytes) => cx.check(access, AddressRange::new(pv, bytes), "pvParam"),
            Buffer::UiParam => cx.check(access, AddressRange::new(pv, ui_param), "pvParam"),
            Buffer::UiParamChars => {
                cx.wide_string(access, pv, Some(ui_param * 2), "pvParam");
            }
            Buffer::UnicodeString => unicode_string(cx, pv, access, true),
            Buffer::LogFont => logfont(cx, pv, ui_param, access),
            Buffer::NonClientMetrics => nonclient_metrics(cx, pv, ui_param, access, self.layout),
            Buffer::IconMetrics => icon_metrics(cx, pv, access),
            Buffer::SerialKeys => serial_keys(cx, pv, access),
            Buffer::WithString { offset, what } => {
                if offset + PTR <= ui_param {
                    embedded_string(cx, pv + offset, access, what);
                }
                cx.check(access, AddressRange::new(pv, ui_param), "pvParam");
            }
            Buffer::Spacing => {
                if !pv.is_null() {
                    cx.check(Access::Write, AddressRange::new(pv, 4), "pvParam");
                }
            }
        }
    }
}

impl CallHandler for SystemParametersInfo {
    fn claims(&self) -> &[usize] {
        &[PV_PARAM]
    }

    fn pre(&self, cx: &mut Checker<'_>, _ctx: &mut CallContext) {
        self.run(cx);
    }

    fn post(&self, cx: &mut Checker<'_>, _ctx: &mut CallContext) {
        self.run(cx);
    }
}

/// `SERIALKEYSW`: sized by its own `cbSize`, with two port name strings.
fn serial_keys(cx: &mut Checker<'_>, base: AppAddress, access: Access) {
    let Some(declared) = cx.read_u32(base, "SERIALKEYSW.cbSize") else {
        return;
    };
    let size = declared_size(cx, declared, sk::SIZE, "SERIALKEYSW");
    cx.check(access, AddressRange::new(base, size), "SERIALKEYSW");
    if sk::ACTIVE_PORT + PTR <= size {
        embedded_string(cx, base + sk::ACTIVE_PORT, access, "SERIALKEYSW.lpszActivePort");
    }
    if sk::PORT + PTR <= size {
        embedded_string(cx, base + sk::PORT, access, "SERIALKEYSW.lpszPort");
    }
}

/// A wide string behind a pointer field. The caller supplies the buffer even
/// when the kernel fills it, so its length is only known by its terminator.
fn embedded_string(cx: &mut Checker<'_>, field: AppAddress, access: Access, what: &'static str) {
    if let Some(text) = cx.read_ptr(field, what) {
        cx.wide_string(access, text, None, what);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_are_sorted_and_unique() {
        assert!(ACTIONS.windows(2).all(|w| w[0].action < w[1].action));
    }

    #[test]
    fn lookup_finds_gets_and_sets() {
        let beep = lookup(0x0001).unwrap();
        assert!(beep.get);
        assert_eq!(beep.buffer, Buffer::Fixed(4));
        let wallpaper = lookup(0x0014).unwrap();
        assert!(!wallpaper.get);
        assert_eq!(wallpaper.buffer, Buffer::UnicodeString);
        assert!(lookup(0x0007).is_none());
    }
}
