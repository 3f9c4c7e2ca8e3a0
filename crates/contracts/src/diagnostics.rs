//! DiagnosticSink trait - emitter diagnostic output interface
//!
//! The emitter writes to its sink in two situations only: an `error` event
//! emitted with nobody listening, and a failing `error` listener under
//! fault-isolated emission. Verbose mode adds one trace line per emission.

/// Line-oriented diagnostic output.
///
/// Implementations must not fail; a write that cannot be delivered is dropped.
pub trait DiagnosticSink {
    /// Sink name (used for logging)
    fn name(&self) -> &str;

    /// Write one diagnostic line. `line` carries no terminator.
    fn write_line(&self, line: &str);
}
