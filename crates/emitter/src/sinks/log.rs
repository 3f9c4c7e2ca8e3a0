//! LogSink - forwards diagnostic lines to tracing

use contracts::DiagnosticSink;
use tracing::error;

/// Sink that reports diagnostics as `tracing` error events
pub struct LogSink {
    name: String,
}

impl LogSink {
    /// Create a new LogSink with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl DiagnosticSink for LogSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn write_line(&self, line: &str) {
        error!(sink = %self.name, "{line}");
    }
}
