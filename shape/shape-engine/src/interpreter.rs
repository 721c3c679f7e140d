//! Walks a contract's field rules for one phase.

use crate::checker::Checker;
use crate::context::CallContext;
use crate::contract::Contract;
use crate::diag::Diagnostic;
use crate::handler::TypeTarget;
use crate::rule::{Access, FieldKind, FieldRule, Phase};
use crate::size::{self, Resolution, SizeExpr, SizeInputs};
use crate::strings::CharWidth;
use log::trace;
use shape_addresses::{AddressRange, AppAddress};

const SLOT_LABELS: [&str; 12] = [
    "arg 0", "arg 1", "arg 2", "arg 3", "arg 4", "arg 5", "arg 6", "arg 7", "arg 8", "arg 9",
    "arg 10", "arg 11",
];

fn slot_label(slot: usize) -> &'static str {
    SLOT_LABELS.get(slot).copied().unwrap_or("argument")
}

/// Runs every rule of `contract` that applies to the checker's phase.
/// With `only_slot`, rules targeting other slots are skipped.
pub(crate) fn run(
    cx: &mut Checker<'_>,
    ctx: &mut CallContext,
    contract: &Contract,
    only_slot: Option<usize>,
) {
    let phase = cx.phase();
    let claims = contract.claims();
    for (index, rule) in contract.rules().iter().enumerate() {
        if !rule.runs_in(phase) || claims.contains(&rule.slot) {
            continue;
        }
        if only_slot.is_some_and(|slot| slot != rule.slot) {
            continue;
        }
        let base = cx.arg_addr(rule.slot);
        if base.is_null() {
            trace!("{}: {} is NULL", contract.name(), slot_label(rule.slot));
            continue;
        }
        match rule.kind {
            FieldKind::Bytes => bytes(cx, ctx, contract, index, rule, base),
            FieldKind::WideString { bounded } => string(cx, rule, base, CharWidth::Wide, bounded),
            FieldKind::AnsiString { bounded } => {
                string(cx, rule, base, CharWidth::Narrow, bounded);
            }
            FieldKind::Complex(tag) => {
                let what = slot_label(rule.slot);
                if phase == Phase::Pre {
                    require_header(cx, &rule.size, base);
                }
                let size = resolve_size(cx, &rule.size, base, what);
                if let Some(bytes) = size {
                    ctx.set_capacity(index, bytes);
                }
                cx.check_type(tag, &TypeTarget::new(base, size, rule.access));
            }
        }
    }
}

fn bytes(
    cx: &mut Checker<'_>,
    ctx: &mut CallContext,
    contract: &Contract,
    index: usize,
    rule: &FieldRule,
    base: AppAddress,
) {
    let what = slot_label(rule.slot);
    match cx.phase() {
        Phase::Pre => {
            require_header(cx, &rule.size, base);
            let Some(bytes) = resolve_size(cx, &rule.size, base, what) else {
                return;
            };
            ctx.set_capacity(index, bytes);
            let range = AddressRange::new(base, bytes);
            match (rule.access, &rule.length) {
                (Access::InOut, Some(length)) => {
                    cx.check_addressable(range, what);
                    require_header(cx, length, base);
                    if let Some(declared) = resolve_size(cx, length, base, what) {
                        cx.check_defined(AddressRange::new(base, declared.min(bytes)), what);
                    }
                }
                (access, _) => cx.check(access, range, what),
            }
        }
        Phase::Post => {
            let expr = match (rule.access, &rule.length) {
                (Access::InOut, Some(length)) => length,
                _ => &rule.size,
            };
            let Some(mut bytes) = resolve_size(cx, expr, base, what) else {
                return;
            };
            let capacity = ctx
                .capacity(index)
                .or_else(|| sibling_capacity(ctx, contract, index, rule.slot));
            match capacity {
                Some(capacity) if bytes > capacity => {
                    cx.clamped(what, bytes, capacity);
                    bytes = capacity;
                }
                _ => {}
            }
            cx.check(rule.access, AddressRange::new(base, bytes), what);
        }
    }
}

/// The largest pre-call capacity another rule established for the same slot.
fn sibling_capacity(
    ctx: &CallContext,
    contract: &Contract,
    index: usize,
    slot: usize,
) -> Option<u64> {
    contract
        .rules()
        .iter()
        .enumerate()
        .filter(|(i, rule)| *i != index && rule.slot == slot)
        .filter_map(|(i, _)| ctx.capacity(i))
        .max()
}

fn string(
    cx: &mut Checker<'_>,
    rule: &FieldRule,
    base: AppAddress,
    width: CharWidth,
    bounded: bool,
) {
    let what = slot_label(rule.slot);
    let bound = if bounded {
        match resolve_size(cx, &rule.size, base, what) {
            Some(bound) => Some(bound),
            None => return,
        }
    } else {
        None
    };
    cx.string(rule.access, base, width, bound, what);
}

/// The caller must initialize an embedded size header before the call.
fn require_header(cx: &mut Checker<'_>, expr: &SizeExpr, base: AppAddress) {
    if let SizeExpr::Field { offset, width, .. } = *expr {
        cx.check_defined(
            AddressRange::new(base + u64::from(offset), width.bytes()),
            "size header",
        );
    }
}

fn resolve_size(
    cx: &mut Checker<'_>,
    expr: &SizeExpr,
    target: AppAddress,
    what: &'static str,
) -> Option<u64> {
    let inputs = SizeInputs {
        args: cx.args(),
        retval: cx.retval(),
        target,
        memory: cx.memory(),
        max_count: cx.options().max_count,
    };
    match size::resolve(expr, &inputs) {
        Resolution::Bytes(n) => Some(n),
        Resolution::Deferred => None,
        Resolution::Rejected { raw } => {
            cx.rejected(what, raw);
            Some(0)
        }
        Resolution::Clamped { declared, bytes } => {
            cx.clamped(what, declared, bytes);
            Some(bytes)
        }
        Resolution::Unreadable(fault) => {
            cx.note(Diagnostic::Unreadable { what, fault });
            None
        }
    }
}
