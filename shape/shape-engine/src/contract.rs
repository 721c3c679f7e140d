//! # Contracts
//!
//! A contract is everything known about one kernel call's memory shape: its
//! argument count, its ordered field rules, and optionally a call handler for
//! what the rules cannot say. Contracts start life as `const`
//! [`ContractSpec`] values in a static table and become [`Contract`]s once the
//! running system's number for the call is known.
//!
//! ## Flags
//!
//! | Bit | Flag | Meaning |
//! |-----|------|---------|
//! | 0 | `fully_known` | every argument's shape is modeled |
//! | 1 | `creates_handle` | the return value is a new kernel object handle |
//! | 2 | `deletes_handle` | argument 0 is a handle being destroyed |
//! | 3 | `ret_zero_fail` | zero return means failure (otherwise `NTSTATUS`) |
//! | 4 | `small_write_last` | on failure the last argument is still written |
//! | 5 | `combined` | an argument selects a sub-contract |
//! | 6 | `imm32` | the user-mode wrapper lives in `imm32.dll` |
//! | 7 | `requires_prefix` | only resolvable by its `Nt`-prefixed name |

use crate::handler::CallHandler;
use crate::id::CallId;
use crate::rule::FieldRule;
use alloc::sync::Arc;
use bitfield_struct::bitfield;
use core::fmt;

#[bitfield(u16, order = Lsb)]
#[derive(Eq, PartialEq)]
pub struct ContractFlags {
    pub fully_known: bool,
    pub creates_handle: bool,
    pub deletes_handle: bool,
    pub ret_zero_fail: bool,
    pub small_write_last: bool,
    pub combined: bool,
    pub imm32: bool,
    pub requires_prefix: bool,
    #[bits(8)]
    __: u8,
}

/// How a call reports failure.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SuccessConvention {
    /// `NTSTATUS`: negative means failure.
    NtStatus,
    /// `BOOL` or handle: zero means failure.
    NonZero,
}

impl SuccessConvention {
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const fn succeeded(self, retval: u64) -> bool {
        match self {
            Self::NtStatus => (retval as u32 as i32) >= 0,
            Self::NonZero => retval != 0,
        }
    }
}

/// Static description of one call.
#[derive(Debug, Copy, Clone)]
pub struct ContractSpec {
    pub name: &'static str,
    pub args: usize,
    pub flags: ContractFlags,
    pub rules: &'static [FieldRule],
    /// For combined calls: the slot holding the opcode.
    pub opcode_slot: Option<usize>,
}

impl ContractSpec {
    #[must_use]
    pub const fn new(name: &'static str, args: usize, flags: ContractFlags) -> Self {
        Self {
            name,
            args,
            flags,
            rules: &[],
            opcode_slot: None,
        }
    }

    #[must_use]
    pub const fn rules(mut self, rules: &'static [FieldRule]) -> Self {
        self.rules = rules;
        self
    }

    /// Marks the call as a multiplexer whose opcode sits in `slot`.
    #[must_use]
    pub const fn combined(mut self, slot: usize) -> Self {
        self.opcode_slot = Some(slot);
        self.flags = self.flags.with_combined(true);
        self
    }

    /// Checks the static description against itself and against the slots
    /// a handler claims.
    ///
    /// # Errors
    /// A rule or the opcode slot references an argument past `args`, or a
    /// handler claims a slot a declarative rule also covers.
    pub fn validate(&self, claims: &[usize]) -> Result<(), ContractError> {
        for (index, rule) in self.rules.iter().enumerate() {
            if let Some(slot) = rule.slots().find(|slot| *slot >= self.args) {
                return Err(ContractError::SlotOutOfRange {
                    call: self.name,
                    rule: index,
                    slot,
                    args: self.args,
                });
            }
            if claims.contains(&rule.slot) {
                return Err(ContractError::ConflictingAuthority {
                    call: self.name,
                    slot: rule.slot,
                });
            }
        }
        if let Some(&slot) = claims.iter().find(|slot| **slot >= self.args) {
            return Err(ContractError::SlotOutOfRange {
                call: self.name,
                rule: usize::MAX,
                slot,
                args: self.args,
            });
        }
        match self.opcode_slot {
            Some(slot) if slot >= self.args => Err(ContractError::OpcodeSlotOutOfRange {
                call: self.name,
                slot,
            }),
            _ => Ok(()),
        }
    }

    #[must_use]
    pub const fn success(&self) -> SuccessConvention {
        if self.flags.ret_zero_fail() {
            SuccessConvention::NonZero
        } else {
            SuccessConvention::NtStatus
        }
    }
}

/// A static table entry that does not describe a consistent call.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum ContractError {
    #[error("{call}: rule {rule} references slot {slot} but the call takes {args} arguments")]
    SlotOutOfRange {
        call: &'static str,
        rule: usize,
        slot: usize,
        args: usize,
    },
    #[error("{call}: slot {slot} is covered by both a rule and the call handler")]
    ConflictingAuthority { call: &'static str, slot: usize },
    #[error("{call}: opcode slot {slot} is out of range")]
    OpcodeSlotOutOfRange { call: &'static str, slot: usize },
    #[error("{call}: number {id} cannot be combined with an opcode")]
    Uncombinable { call: &'static str, id: CallId },
}

/// A contract bound to the running system.
#[derive(Clone)]
pub struct Contract {
    pub id: CallId,
    pub spec: ContractSpec,
    pub handler: Option<Arc<dyn CallHandler>>,
}

impl Contract {
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.spec.name
    }

    #[inline]
    #[must_use]
    pub const fn flags(&self) -> ContractFlags {
        self.spec.flags
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &'static [FieldRule] {
        self.spec.rules
    }

    #[inline]
    #[must_use]
    pub const fn args(&self) -> usize {
        self.spec.args
    }

    #[must_use]
    pub fn claims(&self) -> &[usize] {
        match &self.handler {
            Some(handler) => handler.claims(),
            None => &[],
        }
    }
}

impl fmt::Debug for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Contract")
            .field("id", &self.id)
            .field("name", &self.spec.name)
            .field("args", &self.spec.args)
            .field("rules", &self.spec.rules.len())
            .field("handler", &self.handler.is_some())
            .finish()
    }
}
