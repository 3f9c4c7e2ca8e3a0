//! EventEmitter - subscription registry plus synchronous dispatch
//!
//! Every emission takes a snapshot of the listener list before invoking
//! anything. Listeners may subscribe or unsubscribe on the emitter while they
//! run; those changes are only visible to later emissions.

use std::any::Any;
use std::borrow::Cow;
use std::cell::RefCell;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use anyhow::anyhow;
use serde_json::Value;
use tracing::{debug, trace, warn};

use contracts::{DiagnosticSink, EmitterConfig, ERROR_EVENT};

use crate::error::EmitterError;
use crate::handle::Handle;
use crate::metrics::EmitterMetrics;
use crate::once::OneShot;
use crate::registry::Registry;
use crate::sinks::create_sink;

/// Emission mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitMode {
    /// First listener failure aborts the emission and reaches the caller
    FailFast,
    /// Listener failures are rerouted to the `error` event
    Isolated,
}

impl EmitMode {
    /// Label used in logs and metrics
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FailFast => "fail_fast",
            Self::Isolated => "isolated",
        }
    }
}

/// Builder for creating an EventEmitter
pub struct EmitterBuilder {
    config: EmitterConfig,
    sink: Option<Box<dyn DiagnosticSink>>,
}

impl EmitterBuilder {
    /// Create a new EmitterBuilder
    pub fn new(config: EmitterConfig) -> Self {
        Self { config, sink: None }
    }

    /// Use `sink` instead of the configured sink kind
    pub fn sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Trace every emission to the diagnostic sink
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.diagnostics.verbose = verbose;
        self
    }

    /// Build the emitter
    pub fn build(self) -> EventEmitter {
        let sink = self
            .sink
            .unwrap_or_else(|| create_sink(self.config.diagnostics.sink));

        debug!(
            sink = sink.name(),
            verbose = self.config.diagnostics.verbose,
            "Event emitter created"
        );

        EventEmitter {
            registry: RefCell::new(Registry::new()),
            sink,
            verbose: self.config.diagnostics.verbose,
            metrics: EmitterMetrics::new(),
        }
    }
}

/// Event source that listeners subscribe to by name.
///
/// Single-threaded: the emitter is neither `Send` nor `Sync`, and all
/// dispatch runs on the caller's stack.
pub struct EventEmitter {
    registry: RefCell<Registry>,
    sink: Box<dyn DiagnosticSink>,
    verbose: bool,
    metrics: EmitterMetrics,
}

impl EventEmitter {
    /// Create an emitter that reports to standard error
    pub fn new() -> Self {
        EmitterBuilder::new(EmitterConfig::default()).build()
    }

    /// Create an emitter from configuration
    pub fn with_config(config: &EmitterConfig) -> Self {
        EmitterBuilder::new(config.clone()).build()
    }

    /// Start building an emitter from the default configuration
    pub fn builder() -> EmitterBuilder {
        EmitterBuilder::new(EmitterConfig::default())
    }

    /// Get emitter metrics
    pub fn metrics(&self) -> &EmitterMetrics {
        &self.metrics
    }

    /// Append `handle` to `name` and hand it back for later removal
    pub fn subscribe(&self, name: &str, handle: Handle) -> Handle {
        self.registry.borrow_mut().subscribe(name, handle.clone());
        debug!(event = name, once = handle.is_once(), "Listener subscribed");
        handle
    }

    /// Subscribe a closure
    pub fn on<F>(&self, name: &str, listener: F) -> Handle
    where
        F: Fn(&EventEmitter, &[Value]) -> anyhow::Result<()> + 'static,
    {
        self.subscribe(name, Handle::from_fn(listener))
    }

    /// Subscribe a closure that fires at most once.
    ///
    /// Returns the wrapper handle; unsubscribe that, not the closure, to
    /// cancel before it fires.
    pub fn once<F>(&self, name: &str, listener: F) -> Handle
    where
        F: Fn(&EventEmitter, &[Value]) -> anyhow::Result<()> + 'static,
    {
        self.subscribe(name, Handle::one_shot(OneShot::new(name, listener)))
    }

    /// Remove every occurrence of `handle` from `name`
    pub fn unsubscribe(&self, name: &str, handle: &Handle) -> &Self {
        let removed = self.registry.borrow_mut().unsubscribe(name, handle);
        debug!(event = name, removed, "Listener unsubscribed");
        self
    }

    /// Remove all listeners of `name`
    pub fn unsubscribe_all(&self, name: &str) -> &Self {
        self.registry.borrow_mut().unsubscribe_all(name);
        debug!(event = name, "All listeners unsubscribed");
        self
    }

    /// Current listeners of `name`.
    ///
    /// The returned list is a copy; changing it does not change the emitter.
    pub fn subscribers(&self, name: &str) -> Vec<Handle> {
        self.registry.borrow_mut().subscribers(name).to_vec()
    }

    /// Number of listeners of `name`
    pub fn subscriber_count(&self, name: &str) -> usize {
        self.registry.borrow().count(name)
    }

    /// True if `name` has at least one listener
    pub fn has_subscribers(&self, name: &str) -> bool {
        self.registry.borrow().has_subscribers(name)
    }

    /// Emit `name` to every listener, stopping at the first failure.
    ///
    /// An `error` event with no listeners writes its first argument to the
    /// diagnostic sink.
    ///
    /// # Errors
    /// Returns `EmitterError::HandlerFailed` for the first listener that
    /// fails; listeners after it are not invoked.
    pub fn emit(&self, name: &str, args: &[Value]) -> Result<&Self, EmitterError> {
        let snapshot = self.begin(name, EmitMode::FailFast);
        if snapshot.is_empty() {
            self.report_unhandled(name, args);
            return Ok(self);
        }

        for handle in &snapshot {
            self.metrics.inc_invocation_count();
            handle.invoke(self, args).map_err(|source| {
                self.record_failure(name);
                EmitterError::handler_failed(name, source)
            })?;
        }

        Ok(self)
    }

    /// Emit `name` to every listener, isolating failures.
    ///
    /// A failing listener never stops its siblings. Its failure is emitted as
    /// `error` with the message `Event "<name>" failed: <reason>`; a failing
    /// `error` listener is written to the diagnostic sink instead.
    ///
    /// A panicking listener counts as failing with `panicked: <message>`. The
    /// process panic hook still runs first, so the default hook prints its own
    /// `thread ... panicked at` report to stderr, outside the diagnostic sink.
    pub fn emit_safe(&self, name: &str, args: &[Value]) -> &Self {
        let snapshot = self.begin(name, EmitMode::Isolated);
        if snapshot.is_empty() {
            self.report_unhandled(name, args);
            return self;
        }

        for handle in &snapshot {
            self.metrics.inc_invocation_count();
            let Err(source) = self.invoke_isolated(handle, args) else {
                continue;
            };

            self.record_failure(name);
            let message = EmitterError::handler_failed(name, source).to_string();
            warn!(event = name, error = %message, "Listener failed");

            if name == ERROR_EVENT {
                self.sink.write_line(&message);
            } else {
                self.emit_safe(ERROR_EVENT, &[Value::String(message)]);
            }
        }

        self
    }

    /// Count the emission and take the listener snapshot
    fn begin(&self, name: &str, mode: EmitMode) -> Vec<Handle> {
        self.metrics.inc_emit_count();
        observability::record_emit(name, mode.as_str());

        if self.verbose {
            self.sink.write_line(&format!("-- Emit {name} in"));
        }

        let snapshot = self.registry.borrow().snapshot(name);
        trace!(
            event = name,
            mode = mode.as_str(),
            listeners = snapshot.len(),
            "Dispatching event"
        );
        snapshot
    }

    fn invoke_isolated(&self, handle: &Handle, args: &[Value]) -> anyhow::Result<()> {
        match panic::catch_unwind(AssertUnwindSafe(|| handle.invoke(self, args))) {
            Ok(result) => result,
            Err(payload) => Err(anyhow!("panicked: {}", panic_message(&*payload))),
        }
    }

    fn report_unhandled(&self, name: &str, args: &[Value]) {
        if name != ERROR_EVENT {
            return;
        }
        self.metrics.inc_unhandled_count();
        observability::record_unhandled_error();
        self.sink.write_line(&describe(args.first()));
    }

    fn record_failure(&self, name: &str) {
        self.metrics.inc_failure_count();
        observability::record_listener_failure(name);
    }
}

impl Default for EventEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("registry", &self.registry)
            .field("sink", &self.sink.name())
            .field("verbose", &self.verbose)
            .field("metrics", &self.metrics.snapshot())
            .finish()
    }
}

/// Text written for an unhandled `error` payload
fn describe(value: Option<&Value>) -> Cow<'_, str> {
    match value {
        None => Cow::Borrowed(""),
        Some(Value::String(s)) => Cow::Borrowed(s),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}
