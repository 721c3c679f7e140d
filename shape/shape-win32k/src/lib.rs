//! # Windowing-Subsystem Call Shapes
//!
//! Contracts, type handlers and call handlers for the user-interface and
//! graphics kernel calls (`NtUser*` and `NtGdi*`) and the few base-library
//! calls that share their entry (`NtWow64Csr*`), ready to be installed into
//! a [`shape_engine`] engine.
//!
//! ```text
//! ┌──────────────┐   ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ kernel32     │   │ user32 table  │   │ gdi32 table   │   │ usercall      │
//! │  NtWow64Csr* │   │  NtUser*      │   │  NtGdi*       │   │  routines +   │
//! └──────┬───────┘   └──────┬────────┘   └──────┬────────┘   │  opcode rows  │
//!        │                  │                   │            └──────┬────────┘
//!        └──────────────────┴─────────┬─────────┴───────────────────┘
//!                                     ▼
//!                              ┌─────────────┐   types::register   ┌──────────────┐
//!                              │  install()  │────────────────────▶│ type handlers│
//!                              └──────┬──────┘   calls::register   └──────────────┘
//!                                     ▼
//!                      EngineBuilder::build(resolver, version)
//! ```
//!
//! ## Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`layouts`] | Offsets and sizes of the structures passed by pointer. |
//! | [`types`] | Handlers for self-describing structures. |
//! | [`calls`] | Handlers for calls the rules cannot describe alone. |
//! | [`kernel32`] | `NtWow64Csr*` contracts. |
//! | [`user32`] | `NtUser*` contracts. |
//! | [`gdi32`] | `NtGdi*` contracts. |
//! | [`usercall`] | Routines of the `NtUserCall*` multiplexers and their opcodes. |

#![cfg_attr(not(any(test, doctest)), no_std)]

extern crate alloc;

pub mod calls;
pub mod gdi32;
pub mod kernel32;
pub mod layouts;
pub mod types;
pub mod user32;
pub mod usercall;

use shape_engine::{
    ContractFlags, Engine, EngineBuilder, EngineOptions, InitError, NumberResolver, OsVersion,
};

/// The call's memory effects are completely described.
pub(crate) const OK: ContractFlags = ContractFlags::new().with_fully_known(true);
/// Some effects are known but the description is incomplete.
pub(crate) const UNKNOWN: ContractFlags = ContractFlags::new();
/// Returns `BOOL`, or a count that is zero on failure.
pub(crate) const ZERO_FAIL: ContractFlags = OK.with_ret_zero_fail(true);
/// Returns a new handle, or null on failure.
pub(crate) const CREATES: ContractFlags = ZERO_FAIL.with_creates_handle(true);
/// Releases the handle in its first argument.
pub(crate) const DELETES: ContractFlags = ZERO_FAIL.with_deletes_handle(true);
/// Lives in the input-method library rather than the user-interface one.
pub(crate) const IMM32: ContractFlags = OK.with_imm32(true);

/// Adds every windowing-subsystem contract and handler to `builder`.
#[must_use]
pub fn install(builder: EngineBuilder) -> EngineBuilder {
    let builder = builder
        .contracts(kernel32::CONTRACTS)
        .contracts(user32::CONTRACTS)
        .contracts(gdi32::CONTRACTS)
        .secondary_contracts(usercall::ROUTINES, usercall::OPCODES);
    calls::register(types::register(builder))
}

/// Builds an engine that checks the windowing-subsystem calls of the
/// running system.
///
/// # Errors
/// The OS version is unsupported, or a table entry is inconsistent.
pub fn engine(
    resolver: &dyn NumberResolver,
    version: OsVersion,
    options: EngineOptions,
) -> Result<Engine, InitError> {
    install(Engine::builder(options)).build(resolver, version)
}
