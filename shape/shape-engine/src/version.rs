//! # Version Gate
//!
//! The kernel interface changes between Windows releases: combined-call
//! opcodes are renumbered, structures grow trailing fields, and arguments
//! move. All of that is decided once, at initialization, from the host OS
//! version.
//!
//! | Release | Opcode column |
//! |---------|---------------|
//! | Windows 7 | [`OpcodeColumn::Win7`] |
//! | Vista SP2 | [`OpcodeColumn::VistaSp2`] |
//! | Vista SP0 / SP1 | [`OpcodeColumn::VistaSp01`] |
//! | Server 2003 | [`OpcodeColumn::Server2003`] |
//! | XP | [`OpcodeColumn::Xp`] |
//! | Windows 2000 | [`OpcodeColumn::Win2000`] |
//! | NT 4.0 | unsupported |

use core::fmt;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Release {
    Nt4,
    Win2000,
    Xp,
    Server2003,
    Vista,
    Win7,
}

impl Release {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nt4 => "NT 4.0",
            Self::Win2000 => "2000",
            Self::Xp => "XP",
            Self::Server2003 => "Server 2003",
            Self::Vista => "Vista",
            Self::Win7 => "7",
        }
    }
}

/// The host OS version as reported by the substrate.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct OsVersion {
    pub release: Release,
    pub service_pack_major: u16,
    pub service_pack_minor: u16,
}

impl OsVersion {
    #[must_use]
    pub const fn new(release: Release, service_pack_major: u16) -> Self {
        Self {
            release,
            service_pack_major,
            service_pack_minor: 0,
        }
    }
}

impl fmt::Display for OsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Windows {}", self.release.name())?;
        match (self.service_pack_major, self.service_pack_minor) {
            (0, 0) => Ok(()),
            (major, 0) => write!(f, " SP{major}"),
            (major, minor) => write!(f, " SP{major}.{minor}"),
        }
    }
}

/// One column of per-release opcode numbers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum OpcodeColumn {
    Win7,
    VistaSp2,
    VistaSp01,
    Server2003,
    Xp,
    Win2000,
}

impl OpcodeColumn {
    pub const COUNT: usize = 6;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Win7,
        Self::VistaSp2,
        Self::VistaSp01,
        Self::Server2003,
        Self::Xp,
        Self::Win2000,
    ];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
#[error("{0} is not supported")]
pub struct UnsupportedVersion(pub OsVersion);

/// Version facts fixed at initialization.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VersionGate {
    version: OsVersion,
    column: OpcodeColumn,
}

impl VersionGate {
    /// # Errors
    /// The release predates Windows 2000.
    pub const fn new(version: OsVersion) -> Result<Self, UnsupportedVersion> {
        let column = match version.release {
            Release::Win7 => OpcodeColumn::Win7,
            Release::Vista if version.service_pack_major >= 2 => OpcodeColumn::VistaSp2,
            Release::Vista => OpcodeColumn::VistaSp01,
            Release::Server2003 => OpcodeColumn::Server2003,
            Release::Xp => OpcodeColumn::Xp,
            Release::Win2000 => OpcodeColumn::Win2000,
            Release::Nt4 => return Err(UnsupportedVersion(version)),
        };
        Ok(Self { version, column })
    }

    #[inline]
    #[must_use]
    pub const fn version(&self) -> OsVersion {
        self.version
    }

    #[inline]
    #[must_use]
    pub const fn column(&self) -> OpcodeColumn {
        self.column
    }

    #[inline]
    #[must_use]
    pub const fn at_least(&self, release: Release) -> bool {
        self.version.release as u8 >= release as u8
    }

    #[inline]
    #[must_use]
    pub const fn vista_or_later(&self) -> bool {
        self.at_least(Release::Vista)
    }

    #[inline]
    #[must_use]
    pub const fn win7_or_later(&self) -> bool {
        self.at_least(Release::Win7)
    }
}
