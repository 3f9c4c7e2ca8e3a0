//! OneShot - self-removing subscription wrapper

use serde_json::Value;

use crate::emitter::EventEmitter;
use crate::handle::Handle;
use crate::listener::Listener;

/// Wrapped callback plus the event it is registered under.
///
/// The wrapper's identity is the `Handle` that owns it; the dispatcher passes
/// that handle back in on invocation so no self-reference is stored.
pub struct OneShot {
    event: String,
    callback: Box<dyn Listener>,
}

impl OneShot {
    pub(crate) fn new<L: Listener + 'static>(event: impl Into<String>, callback: L) -> Self {
        Self {
            event: event.into(),
            callback: Box::new(callback),
        }
    }

    /// Event name the wrapper removes itself from
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Unsubscribe `me`, then delegate to the callback.
    pub(crate) fn fire(
        &self,
        me: &Handle,
        emitter: &EventEmitter,
        args: &[Value],
    ) -> anyhow::Result<()> {
        emitter.unsubscribe(&self.event, me);
        self.callback.call(emitter, args)
    }
}
