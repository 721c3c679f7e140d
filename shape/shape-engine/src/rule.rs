//! Field rules: one memory region a call touches through one argument slot.

use crate::env::MemoryOp;
use crate::size::SizeExpr;
use core::fmt;

/// Direction of the kernel's access to a region.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Access {
    /// The kernel reads caller-initialized data.
    Read,
    /// The kernel writes; the caller only provides space.
    Write,
    /// The kernel reads initialized data and writes it back.
    ReadWrite,
    /// The caller provides a capacity and declares a length inside it; the
    /// kernel reports a new length when it returns.
    InOut,
}

impl Access {
    #[inline]
    #[must_use]
    pub const fn reads(self) -> bool {
        matches!(self, Self::Read | Self::ReadWrite | Self::InOut)
    }

    #[inline]
    #[must_use]
    pub const fn writes(self) -> bool {
        matches!(self, Self::Write | Self::ReadWrite | Self::InOut)
    }

    /// The shadow-memory request for a whole region in the given phase.
    ///
    /// `InOut` regions are split into capacity and length by the interpreter;
    /// here they count as writable space before the call.
    #[must_use]
    pub const fn op(self, phase: Phase) -> Option<MemoryOp> {
        match (phase, self) {
            (Phase::Pre, Self::Read | Self::ReadWrite) => Some(MemoryOp::CheckDefined),
            (Phase::Pre, Self::Write | Self::InOut) => Some(MemoryOp::CheckAddressable),
            (Phase::Post, Self::Write | Self::ReadWrite | Self::InOut) => {
                Some(MemoryOp::MarkWritten)
            }
            (Phase::Post, Self::Read) => None,
        }
    }
}

/// Which side of the kernel call a check runs on.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    Pre,
    Post,
}

/// The phases a rule participates in.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phases {
    Both,
    PreOnly,
    PostOnly,
}

impl Phases {
    #[inline]
    #[must_use]
    pub const fn includes(self, phase: Phase) -> bool {
        matches!(
            (self, phase),
            (Self::Both, _) | (Self::PreOnly, Phase::Pre) | (Self::PostOnly, Phase::Post)
        )
    }
}

/// Names a complex type whose layout needs a [`TypeHandler`](crate::TypeHandler).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TypeTag(&'static str);

impl TypeTag {
    #[inline]
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeTag({})", self.0)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// What the region contains.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FieldKind {
    /// Plain bytes; the rule's size is authoritative.
    Bytes,
    /// A nul-terminated UTF-16 string. When `bounded`, the rule's size caps
    /// the scan; otherwise only the terminator does.
    WideString { bounded: bool },
    /// A nul-terminated 8-bit string.
    AnsiString { bounded: bool },
    /// A structure interpreted by the type handler registered for the tag.
    Complex(TypeTag),
}

/// One region a call touches, described declaratively.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FieldRule {
    pub slot: usize,
    pub size: SizeExpr,
    pub access: Access,
    pub kind: FieldKind,
    pub phases: Phases,
    /// For [`Access::InOut`]: the length inside the capacity, declared by the
    /// caller before the call and reported by the kernel after it.
    pub length: Option<SizeExpr>,
}

impl FieldRule {
    #[must_use]
    pub const fn new(slot: usize, size: SizeExpr, access: Access) -> Self {
        Self {
            slot,
            size,
            access,
            kind: FieldKind::Bytes,
            phases: Phases::Both,
            length: None,
        }
    }

    #[must_use]
    pub const fn read(slot: usize, size: SizeExpr) -> Self {
        Self::new(slot, size, Access::Read)
    }

    #[must_use]
    pub const fn write(slot: usize, size: SizeExpr) -> Self {
        Self::new(slot, size, Access::Write)
    }

    #[must_use]
    pub const fn read_write(slot: usize, size: SizeExpr) -> Self {
        Self::new(slot, size, Access::ReadWrite)
    }

    /// A buffer of `capacity` bytes holding `length` valid bytes.
    #[must_use]
    pub const fn in_out(slot: usize, capacity: SizeExpr, length: SizeExpr) -> Self {
        let mut rule = Self::new(slot, capacity, Access::InOut);
        rule.length = Some(length);
        rule
    }

    /// A fixed-size structure handled by the type handler for `tag`.
    #[must_use]
    pub const fn complex(slot: usize, size: u64, access: Access, tag: TypeTag) -> Self {
        Self::new(slot, SizeExpr::Literal(size), access).kind(FieldKind::Complex(tag))
    }

    /// A nul-terminated wide string with no size bound.
    #[must_use]
    pub const fn wide_string(slot: usize, access: Access) -> Self {
        Self::new(slot, SizeExpr::Literal(0), access).kind(FieldKind::WideString { bounded: false })
    }

    /// A nul-terminated wide string inside a buffer of `size` bytes.
    #[must_use]
    pub const fn bounded_wide_string(slot: usize, size: SizeExpr, access: Access) -> Self {
        Self::new(slot, size, access).kind(FieldKind::WideString { bounded: true })
    }

    #[must_use]
    pub const fn ansi_string(slot: usize, access: Access) -> Self {
        Self::new(slot, SizeExpr::Literal(0), access).kind(FieldKind::AnsiString { bounded: false })
    }

    #[must_use]
    pub const fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub const fn pre_only(mut self) -> Self {
        self.phases = Phases::PreOnly;
        self
    }

    #[must_use]
    pub const fn post_only(mut self) -> Self {
        self.phases = Phases::PostOnly;
        self
    }

    /// Whether the rule has work to do in `phase`.
    #[must_use]
    pub const fn runs_in(&self, phase: Phase) -> bool {
        if !self.phases.includes(phase) {
            return false;
        }
        match phase {
            Phase::Pre => !self.size.is_post_only(),
            Phase::Post => self.access.writes() || matches!(self.kind, FieldKind::Complex(_)),
        }
    }

    /// All argument slots the rule depends on: its target and any slot its
    /// size or length expressions read.
    pub fn slots(&self) -> impl Iterator<Item = usize> + '_ {
        let length = self
            .length
            .map_or([None, None], |expr| expr.referenced_slots());
        core::iter::once(self.slot)
            .chain(self.size.referenced_slots().into_iter().flatten())
            .chain(length.into_iter().flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_maps_to_memory_ops() {
        assert_eq!(Access::Read.op(Phase::Pre), Some(MemoryOp::CheckDefined));
        assert_eq!(Access::Read.op(Phase::Post), None);
        assert_eq!(Access::Write.op(Phase::Pre), Some(MemoryOp::CheckAddressable));
        assert_eq!(Access::Write.op(Phase::Post), Some(MemoryOp::MarkWritten));
        assert_eq!(Access::ReadWrite.op(Phase::Pre), Some(MemoryOp::CheckDefined));
        assert_eq!(Access::InOut.op(Phase::Post), Some(MemoryOp::MarkWritten));
    }

    #[test]
    fn return_sized_rules_skip_the_pre_phase() {
        let rule = FieldRule::write(1, SizeExpr::retval());
        assert!(!rule.runs_in(Phase::Pre));
        assert!(rule.runs_in(Phase::Post));
    }

    #[test]
    fn read_rules_have_no_post_work() {
        let rule = FieldRule::read(0, SizeExpr::literal(8));
        assert!(rule.runs_in(Phase::Pre));
        assert!(!rule.runs_in(Phase::Post));
    }

    #[test]
    fn phase_restrictions() {
        let rule = FieldRule::write(0, SizeExpr::arg(1)).pre_only();
        assert!(rule.runs_in(Phase::Pre));
        assert!(!rule.runs_in(Phase::Post));
    }

    #[test]
    fn slots_include_size_sources() {
        let rule = FieldRule::in_out(1, SizeExpr::arg(2), SizeExpr::arg_ptr(3));
        let slots: Vec<_> = rule.slots().collect();
        assert_eq!(slots, vec![1, 2, 3]);
    }
}
