//! # Contracts
//!
//! Frozen interface contracts shared by the emitter workspace.
//! Business crates depend on this crate only; reverse dependencies are prohibited.
//!
//! ## Contents
//! - `EmitterConfig`: construction-time emitter configuration
//! - `DiagnosticSink`: the diagnostic output stream consumed by the emitter
//! - `ContractError`: configuration and I/O errors

mod config;
mod diagnostics;
mod error;

pub use config::*;
pub use diagnostics::DiagnosticSink;
pub use error::*;

/// Reserved event name used for error reporting.
pub const ERROR_EVENT: &str = "error";
