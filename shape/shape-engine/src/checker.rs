//! The view of one call that rules and handlers work through.
//!
//! A [`Checker`] knows the call's arguments, the phase, and (post-call) the
//! return value. It turns "the kernel reads/writes this range" into the right
//! shadow-memory request for the phase, reads application memory softly, and
//! records diagnostics both in the call's report and in the log.

use crate::diag::Diagnostic;
use crate::engine::EngineOptions;
use crate::env::{CallEnv, Label, MemoryOp, MemoryReader, MemoryReaderExt};
use crate::handler::{TypeRegistry, TypeTarget};
use crate::rule::{Access, Phase, TypeTag};
use crate::strings::{CharWidth, scan_terminated};
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use log::{debug, info, trace, warn};
use shape_addresses::{AddressRange, AppAddress};

pub struct Checker<'a> {
    env: CallEnv<'a>,
    call: &'static str,
    args: &'a [u64],
    retval: Option<u64>,
    phase: Phase,
    options: &'a EngineOptions,
    types: &'a TypeRegistry,
    remembered: &'a mut BTreeMap<&'static str, u64>,
    diagnostics: &'a mut Vec<Diagnostic>,
}

impl<'a> Checker<'a> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        env: CallEnv<'a>,
        call: &'static str,
        args: &'a [u64],
        retval: Option<u64>,
        options: &'a EngineOptions,
        types: &'a TypeRegistry,
        remembered: &'a mut BTreeMap<&'static str, u64>,
        diagnostics: &'a mut Vec<Diagnostic>,
    ) -> Self {
        let phase = if retval.is_some() {
            Phase::Post
        } else {
            Phase::Pre
        };
        Self {
            env,
            call,
            args,
            retval,
            phase,
            options,
            types,
            remembered,
            diagnostics,
        }
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn is_pre(&self) -> bool {
        matches!(self.phase, Phase::Pre)
    }

    #[inline]
    #[must_use]
    pub const fn is_post(&self) -> bool {
        matches!(self.phase, Phase::Post)
    }

    /// Name of the call being checked.
    #[inline]
    #[must_use]
    pub const fn call(&self) -> &'static str {
        self.call
    }

    #[inline]
    #[must_use]
    pub const fn args(&self) -> &'a [u64] {
        self.args
    }

    /// The raw argument word; missing slots read as zero.
    #[must_use]
    pub fn arg(&self, slot: usize) -> u64 {
        self.args.get(slot).copied().unwrap_or(0)
    }

    /// The low 32 bits of an argument, for `UINT`/`DWORD`/`BOOL` parameters.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn arg_u32(&self, slot: usize) -> u32 {
        self.arg(slot) as u32
    }

    #[must_use]
    pub fn arg_addr(&self, slot: usize) -> AppAddress {
        AppAddress::new(self.arg(slot))
    }

    /// The return value; `None` pre-call.
    #[inline]
    #[must_use]
    pub const fn retval(&self) -> Option<u64> {
        self.retval
    }

    #[inline]
    #[must_use]
    pub const fn options(&self) -> &EngineOptions {
        self.options
    }

    #[inline]
    #[must_use]
    pub const fn memory(&self) -> &'a dyn MemoryReader {
        self.env.memory
    }

    /// The mapped region containing `addr`; `None` when the host cannot
    /// tell or the address is unmapped.
    #[must_use]
    pub fn region_containing(&self, addr: AppAddress) -> Option<AddressRange> {
        self.env.regions?.region_containing(addr)
    }

    /// Issues the request `access` implies for the current phase.
    ///
    /// Post-call, `Read` regions need nothing; pre-call, `Write` regions are
    /// only required to be addressable.
    pub fn check(&mut self, access: Access, range: AddressRange, what: &'static str) {
        if let Some(op) = access.op(self.phase) {
            self.apply(op, range, what);
        }
    }

    /// Issues `op` for `range`. Null and empty ranges are skipped; ranges
    /// above [`EngineOptions::max_check_size`] are clamped and reported.
    pub fn apply(&mut self, op: MemoryOp, range: AddressRange, what: &'static str) {
        if range.is_empty() {
            return;
        }
        if range.start().is_null() {
            debug!("{}: skipping NULL {what}", self.call);
            return;
        }
        let mut range = range;
        if range.len() > self.options.max_check_size {
            self.note(Diagnostic::ShapeClamped {
                what,
                declared: range.len(),
                bytes: self.options.max_check_size,
            });
            range = range.truncate(self.options.max_check_size);
        }
        trace!("{}: {op:?} {range} {what}", self.call);
        let label = Label {
            call: self.call,
            what,
        };
        op.apply(self.env.shadow, range, &label);
    }

    pub fn check_addressable(&mut self, range: AddressRange, what: &'static str) {
        self.apply(MemoryOp::CheckAddressable, range, what);
    }

    pub fn check_defined(&mut self, range: AddressRange, what: &'static str) {
        self.apply(MemoryOp::CheckDefined, range, what);
    }

    pub fn mark_written(&mut self, range: AddressRange, what: &'static str) {
        self.apply(MemoryOp::MarkWritten, range, what);
    }

    pub fn mark_defined(&mut self, range: AddressRange, what: &'static str) {
        self.apply(MemoryOp::MarkDefined, range, what);
    }

    /// Copies application memory into `buf`; reports and returns `false` if
    /// it is unreadable.
    pub fn read_into(&mut self, addr: AppAddress, buf: &mut [u8], what: &'static str) -> bool {
        match self.env.memory.read(addr, buf) {
            Ok(()) => true,
            Err(fault) => {
                self.note(Diagnostic::Unreadable { what, fault });
                false
            }
        }
    }

    pub fn read_u16(&mut self, addr: AppAddress, what: &'static str) -> Option<u16> {
        self.soft(self.env.memory.read_u16(addr), what)
    }

    pub fn read_u32(&mut self, addr: AppAddress, what: &'static str) -> Option<u32> {
        self.soft(self.env.memory.read_u32(addr), what)
    }

    pub fn read_u64(&mut self, addr: AppAddress, what: &'static str) -> Option<u64> {
        self.soft(self.env.memory.read_u64(addr), what)
    }

    /// Reads a pointer-sized field (the checked application is 64-bit).
    pub fn read_ptr(&mut self, addr: AppAddress, what: &'static str) -> Option<AppAddress> {
        self.read_u64(addr, what).map(AppAddress::new)
    }

    fn soft<T>(&mut self, value: Result<T, crate::ReadFault>, what: &'static str) -> Option<T> {
        match value {
            Ok(v) => Some(v),
            Err(fault) => {
                self.note(Diagnostic::Unreadable { what, fault });
                None
            }
        }
    }

    /// Checks a nul-terminated string at `addr`.
    ///
    /// The scan is bounded by `bound` (if given) and by
    /// [`EngineOptions::max_string_scan`]; the terminator, not any
    /// surrounding container, decides the length. Pre-call, a string the
    /// kernel only writes is checked for `bound` bytes of space, or not at
    /// all when no bound is known. Post-call, written strings are marked up
    /// to their terminator.
    pub fn string(
        &mut self,
        access: Access,
        addr: AppAddress,
        width: CharWidth,
        bound: Option<u64>,
        what: &'static str,
    ) {
        if addr.is_null() {
            return;
        }
        let limit = bound.map_or(self.options.max_string_scan, |b| {
            b.min(self.options.max_string_scan)
        });
        match (self.phase, access) {
            (Phase::Pre, Access::Write) => {
                if let Some(bound) = bound {
                    self.check_addressable(AddressRange::new(addr, bound), what);
                }
            }
            (Phase::Pre, _) => {
                if let Some(bytes) = self.scan(addr, width, limit, what) {
                    self.check_defined(AddressRange::new(addr, bytes), what);
                }
            }
            (Phase::Post, Access::Read) => {}
            (Phase::Post, _) => {
                if let Some(bytes) = self.scan(addr, width, limit, what) {
                    self.mark_written(AddressRange::new(addr, bytes), what);
                }
            }
        }
    }

    pub fn wide_string(
        &mut self,
        access: Access,
        addr: AppAddress,
        bound: Option<u64>,
        what: &'static str,
    ) {
        self.string(access, addr, CharWidth::Wide, bound, what);
    }

    fn scan(
        &mut self,
        addr: AppAddress,
        width: CharWidth,
        limit: u64,
        what: &'static str,
    ) -> Option<u64> {
        match scan_terminated(self.env.memory, addr, width, limit) {
            Ok(extent) => {
                if !extent.terminated {
                    debug!(
                        "{}: {what} not terminated within {} bytes",
                        self.call, extent.bytes
                    );
                }
                Some(extent.bytes)
            }
            Err(fault) => {
                self.note(Diagnostic::Unreadable { what, fault });
                None
            }
        }
    }

    /// Hands a structure to the type handler registered for `tag`.
    pub fn check_type(&mut self, tag: TypeTag, target: &TypeTarget) {
        let types = self.types;
        match types.get(tag) {
            Some(handler) => handler.check(self, target),
            None => self.partially_modeled(tag.name()),
        }
    }

    /// Keeps a value for later calls on this thread.
    pub fn remember(&mut self, key: &'static str, value: u64) {
        self.remembered.insert(key, value);
    }

    #[must_use]
    pub fn recall(&self, key: &'static str) -> Option<u64> {
        self.remembered.get(key).copied()
    }

    pub fn forget(&mut self, key: &'static str) -> Option<u64> {
        self.remembered.remove(key)
    }

    pub fn partially_modeled(&mut self, what: &'static str) {
        self.note(Diagnostic::PartiallyModeled { what });
    }

    /// A size header disagreed with the known layout; the check proceeds
    /// with `bytes`.
    pub fn clamped(&mut self, what: &'static str, declared: u64, bytes: u64) {
        self.note(Diagnostic::ShapeClamped {
            what,
            declared,
            bytes,
        });
    }

    pub fn rejected(&mut self, what: &'static str, raw: u64) {
        self.note(Diagnostic::SizeRejected { what, raw });
    }

    /// Records `diag` in the report and logs it at a level matching its
    /// severity.
    pub fn note(&mut self, diag: Diagnostic) {
        match diag {
            Diagnostic::UnknownCall(_) => info!("{diag}"),
            Diagnostic::PartiallyModeled { .. } | Diagnostic::UnpairedPost(_) => {
                debug!("{}: {diag}", self.call);
            }
            _ => warn!("{}: {diag}", self.call),
        }
        self.diagnostics.push(diag);
    }
}
