//! Emitter error types

use thiserror::Error;

/// Emitter-specific errors
#[derive(Debug, Error)]
pub enum EmitterError {
    /// A listener failed during fail-fast emission
    #[error("Event \"{event}\" failed: {source:#}")]
    HandlerFailed {
        event: String,
        #[source]
        source: anyhow::Error,
    },
}

impl EmitterError {
    /// Create a listener failure error
    pub fn handler_failed(event: impl Into<String>, source: anyhow::Error) -> Self {
        Self::HandlerFailed {
            event: event.into(),
            source,
        }
    }

    /// Name of the event whose listener failed
    pub fn event(&self) -> &str {
        match self {
            Self::HandlerFailed { event, .. } => event,
        }
    }

    /// Unwrap the listener's own error
    pub fn into_source(self) -> anyhow::Error {
        match self {
            Self::HandlerFailed { source, .. } => source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Context};

    #[test]
    fn test_handler_failed_display() {
        let err = EmitterError::handler_failed("test2", anyhow!("boom"));
        assert_eq!(err.to_string(), "Event \"test2\" failed: boom");
        assert_eq!(err.event(), "test2");
    }

    #[test]
    fn test_handler_failed_includes_context_chain() {
        let source = Err::<(), _>(anyhow!("disk full"))
            .context("write failed")
            .unwrap_err();
        let err = EmitterError::handler_failed("save", source);
        assert_eq!(
            err.to_string(),
            "Event \"save\" failed: write failed: disk full"
        );
    }

    #[test]
    fn test_into_source_keeps_original() {
        let err = EmitterError::handler_failed("die", anyhow!("works!"));
        assert_eq!(err.into_source().to_string(), "works!");
    }
}
