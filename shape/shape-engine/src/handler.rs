//! Extension points for shapes the declarative rules cannot express.
//!
//! A [`CallHandler`] owns whole argument slots of one call: it claims them,
//! and the contract's declarative rules must leave them alone. It may also
//! touch ranges no rule covers without claiming anything. A [`TypeHandler`]
//! interprets one complex structure wherever a rule of kind
//! [`FieldKind::Complex`](crate::FieldKind::Complex) refers to it.

use crate::checker::Checker;
use crate::context::CallContext;
use crate::rule::{Access, TypeTag};
use alloc::collections::BTreeMap;
use alloc::sync::Arc;
use shape_addresses::AppAddress;

pub trait CallHandler: Send + Sync {
    /// Argument slots this handler is the only authority for.
    fn claims(&self) -> &[usize] {
        &[]
    }

    fn pre(&self, cx: &mut Checker<'_>, ctx: &mut CallContext);

    /// Runs only after the call succeeded.
    fn post(&self, cx: &mut Checker<'_>, ctx: &mut CallContext) {
        let _ = (cx, ctx);
    }

    /// Runs instead of [`post`](Self::post) when the call failed.
    fn failed(&self, ctx: &mut CallContext) {
        ctx.discard();
    }
}

/// The structure instance a type handler is asked to check.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TypeTarget {
    pub base: AppAddress,
    /// The size the rule declared, if it could be resolved.
    pub size: Option<u64>,
    pub access: Access,
}

impl TypeTarget {
    #[must_use]
    pub const fn new(base: AppAddress, size: Option<u64>, access: Access) -> Self {
        Self { base, size, access }
    }
}

pub trait TypeHandler: Send + Sync {
    /// Called in both phases; use [`Checker::phase`] to tell them apart.
    fn check(&self, cx: &mut Checker<'_>, target: &TypeTarget);
}

/// Type handlers by tag.
#[derive(Default, Clone)]
pub struct TypeRegistry {
    handlers: BTreeMap<TypeTag, Arc<dyn TypeHandler>>,
}

impl TypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler`, returning the one it replaced.
    pub fn register(
        &mut self,
        tag: TypeTag,
        handler: Arc<dyn TypeHandler>,
    ) -> Option<Arc<dyn TypeHandler>> {
        self.handlers.insert(tag, handler)
    }

    #[must_use]
    pub fn get(&self, tag: TypeTag) -> Option<&Arc<dyn TypeHandler>> {
        self.handlers.get(&tag)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
