//! Emitter metrics for observability

use std::cell::Cell;

/// Counters for a single emitter
#[derive(Debug, Default)]
pub struct EmitterMetrics {
    /// Total `emit` / `emit_safe` calls, including nested error reports
    emit_count: Cell<u64>,
    /// Total listener invocations
    invocation_count: Cell<u64>,
    /// Total listener failures (errors and caught panics)
    failure_count: Cell<u64>,
    /// Total `error` events reported with nobody listening
    unhandled_count: Cell<u64>,
}

impl EmitterMetrics {
    /// Create new metrics instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get emit count
    pub fn emit_count(&self) -> u64 {
        self.emit_count.get()
    }

    /// Increment emit count
    pub fn inc_emit_count(&self) {
        self.emit_count.set(self.emit_count.get() + 1);
    }

    /// Get invocation count
    pub fn invocation_count(&self) -> u64 {
        self.invocation_count.get()
    }

    /// Increment invocation count
    pub fn inc_invocation_count(&self) {
        self.invocation_count.set(self.invocation_count.get() + 1);
    }

    /// Get failure count
    pub fn failure_count(&self) -> u64 {
        self.failure_count.get()
    }

    /// Increment failure count
    pub fn inc_failure_count(&self) {
        self.failure_count.set(self.failure_count.get() + 1);
    }

    /// Get unhandled error count
    pub fn unhandled_count(&self) -> u64 {
        self.unhandled_count.get()
    }

    /// Increment unhandled error count
    pub fn inc_unhandled_count(&self) {
        self.unhandled_count.set(self.unhandled_count.get() + 1);
    }

    /// Get snapshot of all metrics
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            emit_count: self.emit_count(),
            invocation_count: self.invocation_count(),
            failure_count: self.failure_count(),
            unhandled_count: self.unhandled_count(),
        }
    }
}

/// Snapshot of emitter metrics (for reporting)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub emit_count: u64,
    pub invocation_count: u64,
    pub failure_count: u64,
    pub unhandled_count: u64,
}
