//! # Kernel-Call Memory-Shape Engine
//!
//! This crate decides, for each intercepted kernel call, which regions of the
//! application's memory the kernel may read or write and how large they are.
//! A host memory checker feeds it the raw argument words at call entry and the
//! return value at call exit; the engine answers by driving the host's shadow
//! memory through the [`ShadowMemory`] trait.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                     Engine                          │
//! │    • init from static contracts + OS version        │
//! │    • pre/post entry points, success gating          │
//! └─────────────────┬───────────────────────────────────┘
//!                   │ CallId + args
//! ┌─────────────────▼───────────────────────────────────┐
//! │         Contract Table / Secondary Dispatch         │
//! │    • id → contract                                  │
//! │    • (primary, opcode) → sub-contract               │
//! └─────────────────┬───────────────────────────────────┘
//!                   │ Contract
//! ┌─────────────────▼───────────────────────────────────┐
//! │       Field-Rule Interpreter / Custom Handlers      │
//! │    • size expressions → byte ranges                 │
//! │    • per-type and per-call shape logic              │
//! └─────────────────┬───────────────────────────────────┘
//!                   │ ranges
//! ┌─────────────────▼───────────────────────────────────┐
//! │          ShadowMemory (host collaborator)           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! ## Core Components
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`size`] | Size expressions and their resolution to byte counts. |
//! | [`rule`] | Field rules: slot, size, access direction, kind, phases. |
//! | [`contract`] | Per-call contracts, flags, and their validation. |
//! | [`table`] | Lookup of contracts by id and by name; combined dispatch. |
//! | [`secondary`] | Per-version opcode maps for combined calls. |
//! | [`version`] | OS version facts and opcode column selection. |
//! | [`handler`] | Call and type handler traits and the type registry. |
//! | [`checker`] | The phase-aware view handlers use to inspect memory. |
//! | [`context`] | Per-call phase state and per-thread memory. |
//! | [`engine`] | The init / pre / post / lookup / teardown entry points. |
//!
//! ## Failure Model
//!
//! Only initialization can fail. Everything that goes wrong while a call is
//! being checked (unreadable pointers, garbage sizes, headers that disagree
//! with known layouts, calls nobody described) becomes a [`Diagnostic`] in
//! the returned [`CallReport`] and a `log` record. The intercepted call
//! itself is never affected.

#![cfg_attr(not(any(test, doctest)), no_std)]

extern crate alloc;

pub mod checker;
pub mod context;
pub mod contract;
mod diag;
pub mod engine;
mod env;
pub mod handler;
mod id;
mod interpreter;
pub mod rule;
pub mod secondary;
pub mod size;
mod strings;
pub mod table;
pub mod version;

pub use checker::Checker;
pub use context::{CallContext, CallPhase, ThreadState};
pub use contract::{Contract, ContractError, ContractFlags, ContractSpec, SuccessConvention};
pub use diag::{CallReport, Diagnostic, Outcome, Severity};
pub use engine::{Engine, EngineBuilder, EngineOptions, InitError};
pub use env::{
    CallEnv, HandleTracker, Label, MemoryOp, MemoryReader, MemoryReaderExt, NumberResolver,
    ReadFault, RegionQuery, ShadowMemory,
};
pub use handler::{CallHandler, TypeHandler, TypeRegistry, TypeTarget};
pub use id::CallId;
pub use rule::{Access, FieldKind, FieldRule, Phase, Phases, TypeTag};
pub use secondary::{OpcodeRow, SecondaryMap};
pub use size::{ElemSize, HeaderWidth, Resolution, SizeExpr};
pub use strings::{CharWidth, StringExtent};
pub use version::{OpcodeColumn, OsVersion, Release, UnsupportedVersion, VersionGate};

pub use shape_addresses::{AddressRange, AppAddress};
