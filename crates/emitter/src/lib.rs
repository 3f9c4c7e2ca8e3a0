//! # Emitter
//!
//! Synchronous in-process publish/subscribe.
//!
//! Responsibilities:
//! - Keep an ordered list of listeners per event name (`Registry`)
//! - Dispatch events to a snapshot of those listeners, either fail-fast
//!   (`emit`) or fault-isolated (`emit_safe`)
//! - One-shot subscriptions that remove themselves before they run
//! - Report unhandled `error` events to a `DiagnosticSink`
//!
//! # Example
//!
//! ```
//! use emitter::{EventEmitter, MemorySink};
//! use serde_json::json;
//!
//! let sink = MemorySink::new("doc");
//! let events = EventEmitter::builder().sink(sink.clone()).build();
//!
//! events.on("roar", |_, args| {
//!     let times = args.first().and_then(|v| v.as_u64()).unwrap_or(0);
//!     for _ in 0..times {
//!         println!("RAWR!");
//!     }
//!     Ok(())
//! });
//!
//! events.emit("roar", &[json!(3)]).unwrap();
//! events.emit("error", &[json!("nobody listens")]).unwrap();
//! assert_eq!(sink.lines(), vec!["nobody listens".to_string()]);
//! ```

pub mod emitter;
pub mod error;
pub mod handle;
pub mod listener;
pub mod metrics;
pub mod once;
pub mod registry;
pub mod sinks;

pub use contracts::{DiagnosticSink, EmitterConfig, ERROR_EVENT};
pub use emitter::{EmitMode, EmitterBuilder, EventEmitter};
pub use error::EmitterError;
pub use handle::Handle;
pub use listener::Listener;
pub use metrics::{EmitterMetrics, MetricsSnapshot};
pub use registry::Registry;
pub use serde_json::Value;
pub use sinks::{LogSink, MemorySink, StderrSink};
