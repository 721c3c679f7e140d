//! Per-call and per-thread state.
//!
//! A kernel call is checked twice, once on entry and once on exit, with the
//! kernel running in between. [`CallContext`] carries what the pre-call check
//! learned (capacities, values handlers stashed) to the post-call check.
//! [`ThreadState`] outlives individual calls: it holds the context of the call
//! in flight and values some calls need from an earlier call on the same
//! thread.
//!
//! ```text
//! Unseen ──pre──▶ PreChecked ──kernel──▶ Succeeded ──post──▶ PostChecked
//!                                   └──▶ Failed (stash discarded)
//! ```

use crate::id::CallId;
use alloc::collections::BTreeMap;
use alloc::vec;
use alloc::vec::Vec;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CallPhase {
    Unseen,
    PreChecked,
    Succeeded,
    Failed,
    PostChecked,
}

impl CallPhase {
    const fn may_advance_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Unseen, Self::PreChecked)
                | (Self::PreChecked, Self::Succeeded | Self::Failed)
                | (Self::Succeeded, Self::PostChecked)
        )
    }
}

/// State of one call between its pre- and post-call checks.
#[derive(Debug, Clone)]
pub struct CallContext {
    id: CallId,
    phase: CallPhase,
    /// Pre-call byte counts, indexed like the contract's rules.
    capacities: Vec<Option<u64>>,
    stash: BTreeMap<&'static str, u64>,
}

impl CallContext {
    #[must_use]
    pub fn new(id: CallId, rules: usize) -> Self {
        Self {
            id,
            phase: CallPhase::Unseen,
            capacities: vec![None; rules],
            stash: BTreeMap::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> CallId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> CallPhase {
        self.phase
    }

    /// Moves to `next` if the transition is legal.
    pub(crate) fn advance(&mut self, next: CallPhase) -> bool {
        if self.phase.may_advance_to(next) {
            self.phase = next;
            true
        } else {
            false
        }
    }

    pub(crate) fn set_capacity(&mut self, rule: usize, bytes: u64) {
        if let Some(slot) = self.capacities.get_mut(rule) {
            *slot = Some(bytes);
        }
    }

    /// The byte count validated pre-call for a rule.
    #[must_use]
    pub fn capacity(&self, rule: usize) -> Option<u64> {
        self.capacities.get(rule).copied().flatten()
    }

    /// Keeps a value for the post-call check.
    pub fn stash(&mut self, key: &'static str, value: u64) {
        self.stash.insert(key, value);
    }

    #[must_use]
    pub fn stashed(&self, key: &'static str) -> Option<u64> {
        self.stash.get(key).copied()
    }

    pub fn take(&mut self, key: &'static str) -> Option<u64> {
        self.stash.remove(key)
    }

    /// Drops everything learned pre-call.
    pub fn discard(&mut self) {
        self.stash.clear();
        self.capacities.iter_mut().for_each(|c| *c = None);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stash.is_empty() && self.capacities.iter().all(Option::is_none)
    }
}

/// State owned by one application thread.
#[derive(Debug, Default)]
pub struct ThreadState {
    pub(crate) current: Option<CallContext>,
    pub(crate) remembered: BTreeMap<&'static str, u64>,
}

impl ThreadState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The call between its pre- and post-call checks, if any.
    #[must_use]
    pub const fn in_flight(&self) -> Option<&CallContext> {
        self.current.as_ref()
    }

    /// A value an earlier call on this thread left behind.
    #[must_use]
    pub fn remembered(&self, key: &'static str) -> Option<u64> {
        self.remembered.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_transitions() {
        let mut ctx = CallContext::new(CallId::new(1), 0);
        assert!(ctx.advance(CallPhase::PreChecked));
        assert!(ctx.advance(CallPhase::Succeeded));
        assert!(ctx.advance(CallPhase::PostChecked));
        assert_eq!(ctx.phase(), CallPhase::PostChecked);
    }

    #[test]
    fn failure_is_terminal() {
        let mut ctx = CallContext::new(CallId::new(1), 0);
        assert!(ctx.advance(CallPhase::PreChecked));
        assert!(ctx.advance(CallPhase::Failed));
        assert!(!ctx.advance(CallPhase::PostChecked));
        assert_eq!(ctx.phase(), CallPhase::Failed);
    }

    #[test]
    fn post_requires_pre() {
        let mut ctx = CallContext::new(CallId::new(1), 0);
        assert!(!ctx.advance(CallPhase::Succeeded));
        assert_eq!(ctx.phase(), CallPhase::Unseen);
    }

    #[test]
    fn discard_clears_stash_and_capacities() {
        let mut ctx = CallContext::new(CallId::new(1), 2);
        ctx.stash("capacity", 64);
        ctx.set_capacity(1, 32);
        assert_eq!(ctx.stashed("capacity"), Some(64));
        assert_eq!(ctx.capacity(1), Some(32));
        ctx.discard();
        assert!(ctx.is_empty());
        assert_eq!(ctx.capacity(1), None);
    }

    #[test]
    fn out_of_range_capacity_is_ignored() {
        let mut ctx = CallContext::new(CallId::new(1), 1);
        ctx.set_capacity(5, 32);
        assert_eq!(ctx.capacity(5), None);
    }
}
