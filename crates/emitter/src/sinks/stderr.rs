//! StderrSink - the process standard error stream

use std::io::{self, Write};

use contracts::DiagnosticSink;

/// Sink that writes each line to standard error
pub struct StderrSink {
    name: String,
}

impl StderrSink {
    /// Create a new StderrSink with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for StderrSink {
    fn default() -> Self {
        Self::new("stderr")
    }
}

impl DiagnosticSink for StderrSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn write_line(&self, line: &str) {
        let mut stderr = io::stderr().lock();
        // Nowhere left to report a failed diagnostic write
        let _ = writeln!(stderr, "{line}");
    }
}
