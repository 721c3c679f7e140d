//! # Engine
//!
//! The entry points the host calls.
//!
//! | Operation | When |
//! |-----------|------|
//! | [`EngineBuilder::build`] | once, at process start |
//! | [`Engine::thread_init`] / [`Engine::thread_exit`] | per application thread |
//! | [`Engine::on_call_pre`] | at every intercepted kernel call entry |
//! | [`Engine::on_call_post`] | at the matching exit |
//! | [`Engine::teardown`] | once, at process exit |
//!
//! The engine is immutable once built and may be shared across threads; all
//! mutable state of a thread lives in the [`ThreadState`] the host keeps for
//! it.
//!
//! ## Example
//! ```
//! # use shape_engine::*;
//! struct Numbers;
//! impl NumberResolver for Numbers {
//!     fn resolve_number(&self, name: &str) -> Option<u32> {
//!         (name == "NtUserGetCursorPos").then_some(0x1020)
//!     }
//! }
//!
//! const POINT: &[FieldRule] = &[FieldRule::write(0, SizeExpr::literal(8))];
//! const CONTRACTS: &[ContractSpec] = &[ContractSpec::new(
//!     "NtUserGetCursorPos",
//!     1,
//!     ContractFlags::new().with_fully_known(true).with_ret_zero_fail(true),
//! )
//! .rules(POINT)];
//!
//! let engine = Engine::builder(EngineOptions::default())
//!     .contracts(CONTRACTS)
//!     .build(&Numbers, OsVersion::new(Release::Win7, 1))
//!     .unwrap();
//! assert_eq!(engine.resolve_name("NtUserGetCursorPos"), Some(CallId::new(0x1020)));
//! ```

use crate::checker::Checker;
use crate::context::{CallContext, CallPhase, ThreadState};
use crate::contract::{Contract, ContractError, ContractSpec};
use crate::diag::{CallReport, Diagnostic, Outcome};
use crate::env::{CallEnv, NumberResolver};
use crate::handler::{CallHandler, TypeHandler, TypeRegistry};
use crate::id::CallId;
use crate::interpreter;
use crate::rule::TypeTag;
use crate::secondary::{self, OpcodeRow, SecondaryMap};
use crate::table::{ContractTable, Dispatch};
use crate::version::{OsVersion, UnsupportedVersion, VersionGate};
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::sync::Arc;
use alloc::vec::Vec;
use log::{debug, info, trace, warn};

/// Prefixes the user-mode wrappers may be exported without.
const WRAPPER_PREFIXES: [&str; 2] = ["NtUser", "NtGdi"];

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct EngineOptions {
    /// Largest single range handed to shadow memory.
    pub max_check_size: u64,
    /// Largest count or header value accepted as a size.
    pub max_count: u64,
    /// Longest string scan, in bytes.
    pub max_string_scan: u64,
    /// Report calls without a contract.
    pub report_unknown: bool,
    /// Forward handle creation and destruction to the [`HandleTracker`](crate::HandleTracker).
    pub track_handles: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_check_size: 256 * 1024 * 1024,
            max_count: 1 << 30,
            max_string_scan: 64 * 1024,
            report_unknown: true,
            track_handles: false,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum InitError {
    #[error(transparent)]
    UnsupportedVersion(#[from] UnsupportedVersion),
    #[error(transparent)]
    InvalidContract(#[from] ContractError),
}

type HandlerFactory = Box<dyn FnOnce(&VersionGate) -> Arc<dyn CallHandler>>;

/// Collects static configuration; [`build`](Self::build) binds it to the
/// running system.
pub struct EngineBuilder {
    options: EngineOptions,
    contracts: Vec<&'static [ContractSpec]>,
    secondary: Vec<&'static [ContractSpec]>,
    opcode_rows: Vec<&'static [OpcodeRow]>,
    call_handlers: Vec<(&'static str, HandlerFactory)>,
    types: TypeRegistry,
}

impl EngineBuilder {
    #[must_use]
    pub fn new(options: EngineOptions) -> Self {
        Self {
            options,
            contracts: Vec::new(),
            secondary: Vec::new(),
            opcode_rows: Vec::new(),
            call_handlers: Vec::new(),
            types: TypeRegistry::new(),
        }
    }

    #[must_use]
    pub fn contracts(mut self, specs: &'static [ContractSpec]) -> Self {
        self.contracts.push(specs);
        self
    }

    /// Sub-contracts of combined calls, named `"<primary>.<ROUTINE>"`, and the
    /// per-release opcode numbers for those names.
    #[must_use]
    pub fn secondary_contracts(
        mut self,
        specs: &'static [ContractSpec],
        rows: &'static [OpcodeRow],
    ) -> Self {
        self.secondary.push(specs);
        self.opcode_rows.push(rows);
        self
    }

    #[must_use]
    pub fn call_handler<H: CallHandler + 'static>(self, call: &'static str, handler: H) -> Self {
        self.call_handler_for_version(call, move |_| -> Arc<dyn CallHandler> { Arc::new(handler) })
    }

    /// Registers a handler whose behavior depends on the OS version; the
    /// factory runs once, during [`build`](Self::build).
    #[must_use]
    pub fn call_handler_for_version<F>(mut self, call: &'static str, factory: F) -> Self
    where
        F: FnOnce(&VersionGate) -> Arc<dyn CallHandler> + 'static,
    {
        self.call_handlers.push((call, Box::new(factory)));
        self
    }

    #[must_use]
    pub fn type_handler<H: TypeHandler + 'static>(mut self, tag: TypeTag, handler: H) -> Self {
        if self.types.register(tag, Arc::new(handler)).is_some() {
            warn!("replacing type handler for {tag}");
        }
        self
    }

    /// Resolves every contract against the running system.
    ///
    /// # Errors
    /// The OS version is unsupported, or a contract is inconsistent with
    /// itself or its handler.
    pub fn build(
        self,
        resolver: &dyn NumberResolver,
        version: OsVersion,
    ) -> Result<Engine, InitError> {
        let gate = VersionGate::new(version)?;
        info!("Checking kernel calls for {version}");

        let mut handlers: BTreeMap<&'static str, Arc<dyn CallHandler>> = BTreeMap::new();
        for (call, factory) in self.call_handlers {
            if handlers.insert(call, factory(&gate)).is_some() {
                warn!("replacing call handler for {call}");
            }
        }

        let mut table = ContractTable::new();
        for spec in self.contracts.iter().flat_map(|specs| specs.iter()) {
            let handler = handlers.get(spec.name).cloned();
            spec.validate(claims_of(handler.as_deref()))?;
            let Some(number) = resolve_number(resolver, spec) else {
                debug!("{}: no number on this system", spec.name);
                continue;
            };
            table.insert(Contract {
                id: CallId::new(number),
                spec: *spec,
                handler,
            });
        }

        let rows: Vec<OpcodeRow> = self
            .opcode_rows
            .iter()
            .flat_map(|rows| rows.iter().copied())
            .collect();
        let opcodes = SecondaryMap::build(&rows, gate.column());
        for spec in self.secondary.iter().flat_map(|specs| specs.iter()) {
            let handler = handlers.get(spec.name).cloned();
            spec.validate(claims_of(handler.as_deref()))?;
            let Some(primary_name) = secondary::primary_name(spec.name) else {
                warn!("{}: secondary contract without a primary", spec.name);
                continue;
            };
            let Some(primary) = table.lookup_name(primary_name) else {
                debug!("{}: primary {primary_name} not resolved", spec.name);
                continue;
            };
            if !primary.flags().combined() {
                warn!("{}: {primary_name} does not dispatch on an opcode", spec.name);
                continue;
            }
            let Some(opcode) = opcodes.opcode(spec.name) else {
                debug!("{}: unavailable on {version}", spec.name);
                continue;
            };
            let id = CallId::combine(primary.id, opcode).ok_or(ContractError::Uncombinable {
                call: spec.name,
                id: primary.id,
            })?;
            table.insert(Contract {
                id,
                spec: *spec,
                handler,
            });
        }

        for call in handlers.keys() {
            if table.id_of(call).is_none() {
                debug!("call handler for {call} has no resolved contract");
            }
        }
        info!(
            "{} contracts resolved, {} routine opcodes, {} type handlers",
            table.len(),
            opcodes.len(),
            self.types.len()
        );

        Ok(Engine {
            options: self.options,
            gate,
            table,
            opcodes,
            types: self.types,
        })
    }
}

fn claims_of(handler: Option<&dyn CallHandler>) -> &[usize] {
    match handler {
        Some(handler) => handler.claims(),
        None => &[],
    }
}

/// Tries the name as written, then the bare wrapper name.
fn resolve_number(resolver: &dyn NumberResolver, spec: &ContractSpec) -> Option<u32> {
    if let Some(number) = resolver.resolve_number(spec.name) {
        return Some(number);
    }
    if spec.flags.requires_prefix() {
        return None;
    }
    WRAPPER_PREFIXES
        .iter()
        .find_map(|prefix| spec.name.strip_prefix(prefix))
        .and_then(|bare| resolver.resolve_number(bare))
}

pub struct Engine {
    options: EngineOptions,
    gate: VersionGate,
    table: ContractTable,
    opcodes: SecondaryMap,
    types: TypeRegistry,
}

impl Engine {
    #[must_use]
    pub fn builder(options: EngineOptions) -> EngineBuilder {
        EngineBuilder::new(options)
    }

    #[inline]
    #[must_use]
    pub const fn options(&self) -> &EngineOptions {
        &self.options
    }

    #[inline]
    #[must_use]
    pub const fn version_gate(&self) -> &VersionGate {
        &self.gate
    }

    #[inline]
    #[must_use]
    pub const fn table(&self) -> &ContractTable {
        &self.table
    }

    /// The contract registered under `id`, combined ids included.
    #[must_use]
    pub fn lookup_contract(&self, id: CallId) -> Option<&Contract> {
        self.table.lookup(id)
    }

    /// The id a contract name resolved to.
    #[must_use]
    pub fn resolve_name(&self, name: &str) -> Option<CallId> {
        self.table.id_of(name)
    }

    /// The running release's opcode for a combined-call routine.
    #[must_use]
    pub fn secondary_opcode(&self, name: &str) -> Option<u16> {
        self.opcodes.opcode(name)
    }

    #[must_use]
    pub const fn opcodes(&self) -> &SecondaryMap {
        &self.opcodes
    }

    #[must_use]
    pub fn thread_init(&self) -> ThreadState {
        ThreadState::new()
    }

    pub fn thread_exit(&self, state: ThreadState) {
        if let Some(ctx) = state.current {
            debug!("thread exited inside {}", ctx.id());
        }
    }

    /// Checks a call on entry. `args` are the raw argument words.
    pub fn on_call_pre(
        &self,
        thread: &mut ThreadState,
        env: &CallEnv<'_>,
        id: CallId,
        args: &[u64],
    ) -> CallReport {
        if let Some(stale) = thread.current.take() {
            debug!("{} never returned through a post-call check", stale.id());
        }
        let contract = match self.table.dispatch(id, args) {
            Dispatch::Known(contract) => contract,
            Dispatch::UnknownSecondary { primary, id } => {
                return self.unknown(id, Some(primary.name()));
            }
            Dispatch::Unknown(id) => return self.unknown(id, None),
        };

        let mut report = CallReport::new(contract.id, Some(contract.name()), Outcome::Checked);
        let mut ctx = CallContext::new(contract.id, contract.rules().len());
        ctx.advance(CallPhase::PreChecked);
        {
            let mut cx = Checker::new(
                *env,
                contract.name(),
                args,
                None,
                &self.options,
                &self.types,
                &mut thread.remembered,
                &mut report.diagnostics,
            );
            if !contract.flags().fully_known() {
                cx.partially_modeled(contract.name());
            }
            interpreter::run(&mut cx, &mut ctx, contract, None);
            if let Some(handler) = &contract.handler {
                handler.pre(&mut cx, &mut ctx);
            }
        }
        thread.current = Some(ctx);
        report
    }

    /// Checks a call on exit. `args` must be the words seen on entry.
    ///
    /// Post-call rules and handlers run only if the call succeeded by its
    /// contract's convention.
    pub fn on_call_post(
        &self,
        thread: &mut ThreadState,
        env: &CallEnv<'_>,
        id: CallId,
        args: &[u64],
        retval: u64,
    ) -> CallReport {
        let in_flight = thread.current.take();
        let contract = match self.table.dispatch(id, args) {
            Dispatch::Known(contract) => contract,
            Dispatch::UnknownSecondary { primary, id } => {
                return CallReport::new(id, Some(primary.name()), Outcome::Unknown);
            }
            Dispatch::Unknown(id) => return CallReport::new(id, None, Outcome::Unknown),
        };

        let mut report = CallReport::new(contract.id, Some(contract.name()), Outcome::Checked);
        let mut ctx = match in_flight {
            Some(ctx) if ctx.id() == contract.id && ctx.phase() == CallPhase::PreChecked => ctx,
            _ => {
                let diag = Diagnostic::UnpairedPost(contract.id);
                debug!("{}: {diag}", contract.name());
                report.diagnostics.push(diag);
                let mut ctx = CallContext::new(contract.id, contract.rules().len());
                ctx.advance(CallPhase::PreChecked);
                ctx
            }
        };

        if !contract.spec.success().succeeded(retval) {
            trace!("{} failed with {retval:#X}", contract.name());
            ctx.advance(CallPhase::Failed);
            report.outcome = Outcome::Failed;
            if contract.flags().small_write_last() && contract.args() > 0 {
                let mut cx = Checker::new(
                    *env,
                    contract.name(),
                    args,
                    Some(retval),
                    &self.options,
                    &self.types,
                    &mut thread.remembered,
                    &mut report.diagnostics,
                );
                interpreter::run(&mut cx, &mut ctx, contract, Some(contract.args() - 1));
            }
            match &contract.handler {
                Some(handler) => handler.failed(&mut ctx),
                None => ctx.discard(),
            }
            return report;
        }

        ctx.advance(CallPhase::Succeeded);
        {
            let mut cx = Checker::new(
                *env,
                contract.name(),
                args,
                Some(retval),
                &self.options,
                &self.types,
                &mut thread.remembered,
                &mut report.diagnostics,
            );
            interpreter::run(&mut cx, &mut ctx, contract, None);
            if let Some(handler) = &contract.handler {
                handler.post(&mut cx, &mut ctx);
            }
        }
        self.track_handles(env, contract, args, retval);
        ctx.advance(CallPhase::PostChecked);
        report
    }

    fn unknown(&self, id: CallId, via: Option<&'static str>) -> CallReport {
        let mut report = CallReport::new(id, via, Outcome::Unknown);
        if self.options.report_unknown {
            let diag = Diagnostic::UnknownCall(id);
            match via {
                Some(primary) => info!("{diag} (via {primary})"),
                None => info!("{diag}"),
            }
            report.diagnostics.push(diag);
        }
        report
    }

    fn track_handles(&self, env: &CallEnv<'_>, contract: &Contract, args: &[u64], retval: u64) {
        if !self.options.track_handles {
            return;
        }
        let Some(handles) = env.handles else {
            return;
        };
        let flags = contract.flags();
        if flags.creates_handle() {
            handles.created(contract.name(), retval);
        }
        if flags.deletes_handle() {
            handles.released(contract.name(), args.first().copied().unwrap_or(0));
        }
    }

    pub fn teardown(self) {
        info!(
            "Shutting down kernel-call checks ({} contracts)",
            self.table.len()
        );
    }
}
