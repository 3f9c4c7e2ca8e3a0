//! Listener trait - the capability behind every subscription

use serde_json::Value;

use crate::emitter::EventEmitter;

/// Something that can be invoked with an emitter and an event payload.
///
/// Any `Fn(&EventEmitter, &[Value]) -> anyhow::Result<()>` closure is a listener.
/// Listeners may subscribe or unsubscribe on `emitter` while running; those
/// changes only affect later emissions.
pub trait Listener {
    /// Handle one emission.
    ///
    /// # Errors
    /// Any error is a listener failure: it aborts `emit` and is routed to the
    /// `error` event by `emit_safe`.
    fn call(&self, emitter: &EventEmitter, args: &[Value]) -> anyhow::Result<()>;
}

impl<F> Listener for F
where
    F: Fn(&EventEmitter, &[Value]) -> anyhow::Result<()>,
{
    fn call(&self, emitter: &EventEmitter, args: &[Value]) -> anyhow::Result<()> {
        self(emitter, args)
    }
}
