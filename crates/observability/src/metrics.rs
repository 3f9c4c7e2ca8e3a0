//! Emitter metrics recorded through the `metrics` facade.
//!
//! Without an installed recorder every call here is a no-op.

use metrics::counter;

/// Record one `emit` / `emit_safe` call
///
/// # Example
///
/// ```ignore
/// use observability::metrics::record_emit;
///
/// record_emit("roar", "fail_fast");
/// ```
pub fn record_emit(event: &str, mode: &str) {
    counter!(
        "event_emitter_emits_total",
        "event" => event.to_string(),
        "mode" => mode.to_string()
    )
    .increment(1);
}

/// Record a listener failure (error or caught panic)
pub fn record_listener_failure(event: &str) {
    counter!(
        "event_emitter_listener_failures_total",
        "event" => event.to_string()
    )
    .increment(1);
}

/// Record an `error` event that nobody was listening for
pub fn record_unhandled_error() {
    counter!("event_emitter_unhandled_errors_total").increment(1);
}
