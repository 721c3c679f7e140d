//! Non-fatal conditions found while checking a call.

use crate::id::CallId;
use crate::env::ReadFault;
use alloc::vec::Vec;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Severity {
    Info,
    Warning,
}

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum Diagnostic {
    /// No contract describes the call; its memory effects are unchecked.
    #[error("unknown kernel call {0}")]
    UnknownCall(CallId),
    #[error("unreadable parameter {what}: {fault}")]
    Unreadable {
        what: &'static str,
        fault: ReadFault,
    },
    #[error("rejected size {raw:#X} for {what}")]
    SizeRejected { what: &'static str, raw: u64 },
    #[error("{what} declares {declared:#X} bytes, clamped to {bytes:#X}")]
    ShapeClamped {
        what: &'static str,
        declared: u64,
        bytes: u64,
    },
    #[error("{what} is {actual:#X} bytes, expected {expected:#X}")]
    SizeMismatch {
        what: &'static str,
        expected: u64,
        actual: u64,
    },
    /// Part of the call's shape is deliberately left unchecked.
    #[error("{what} is only partially modeled")]
    PartiallyModeled { what: &'static str },
    #[error("post-call check for {0} without a matching pre-call check")]
    UnpairedPost(CallId),
}

impl Diagnostic {
    /// Unknown or partially modeled shapes are weaker evidence than a
    /// concrete bad access and are reported below warning level.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::UnknownCall(_) | Self::PartiallyModeled { .. } | Self::UnpairedPost(_) => {
                Severity::Info
            }
            Self::Unreadable { .. }
            | Self::SizeRejected { .. }
            | Self::ShapeClamped { .. }
            | Self::SizeMismatch { .. } => Severity::Warning,
        }
    }
}

/// How far the engine got with a call.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// The contract's checks ran for the phase.
    Checked,
    /// No contract was found.
    Unknown,
    /// The call failed; post-call checks were skipped.
    Failed,
}

/// The result of one pre- or post-call check.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CallReport {
    pub id: CallId,
    pub call: Option<&'static str>,
    pub outcome: Outcome,
    pub diagnostics: Vec<Diagnostic>,
}

impl CallReport {
    pub(crate) const fn new(id: CallId, call: Option<&'static str>, outcome: Outcome) -> Self {
        Self {
            id,
            call,
            outcome,
            diagnostics: Vec::new(),
        }
    }

    /// No diagnostic at warning level or above.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics
            .iter()
            .all(|d| d.severity() < Severity::Warning)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == Severity::Warning)
    }
}
