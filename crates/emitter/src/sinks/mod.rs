//! Diagnostic sink implementations
//!
//! Contains StderrSink, LogSink, and MemorySink.

mod log;
mod memory;
mod stderr;

use contracts::{DiagnosticSink, DiagnosticSinkKind};

pub use self::log::LogSink;
pub use self::memory::MemorySink;
pub use self::stderr::StderrSink;

/// Create the built-in sink for a configured kind
pub fn create_sink(kind: DiagnosticSinkKind) -> Box<dyn DiagnosticSink> {
    match kind {
        DiagnosticSinkKind::Stderr => Box::new(StderrSink::new("stderr")),
        DiagnosticSinkKind::Log => Box::new(LogSink::new("log")),
    }
}
