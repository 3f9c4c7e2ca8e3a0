//! Emitter configuration contracts that can be shared across crates.

use serde::{Deserialize, Serialize};

/// Construction-time emitter configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitterConfig {
    /// Diagnostic output configuration
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl EmitterConfig {
    /// Config with verbose diagnostics switched on
    pub fn verbose() -> Self {
        Self {
            diagnostics: DiagnosticsConfig {
                verbose: true,
                ..DiagnosticsConfig::default()
            },
        }
    }
}

/// Diagnostic output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Where diagnostic lines go
    #[serde(default)]
    pub sink: DiagnosticSinkKind,

    /// Trace every emission to the diagnostic sink
    #[serde(default)]
    pub verbose: bool,
}

/// Built-in diagnostic sink kinds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticSinkKind {
    /// Process standard error
    #[default]
    Stderr,
    /// `tracing` error events
    Log,
}

impl DiagnosticSinkKind {
    /// Parse a sink kind from its config spelling
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "stderr" => Some(Self::Stderr),
            "log" => Some(Self::Log),
            _ => None,
        }
    }
}
