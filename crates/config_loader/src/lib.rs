//! # Config Loader
//!
//! Emitter configuration loading.
//!
//! Responsibilities:
//! - Parse TOML/JSON configuration files
//! - Apply environment overrides
//! - Produce an `EmitterConfig`
//!
//! # Example
//!
//! ```no_run
//! use config_loader::ConfigLoader;
//! use std::path::Path;
//!
//! let config = ConfigLoader::load_from_path(Path::new("emitter.toml")).unwrap();
//! let config = ConfigLoader::apply_env_overrides(config).unwrap();
//! println!("verbose: {}", config.diagnostics.verbose);
//! ```

mod env;
mod parser;

pub use contracts::EmitterConfig;
pub use env::{DEBUG_VAR, SINK_VAR};
pub use parser::ConfigFormat;

use contracts::ContractError;
use std::path::Path;
use tracing::debug;

/// Configuration loader
///
/// Provides static methods to load configuration from files or strings.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from file path
    ///
    /// Automatically detects format from file extension (.toml / .json).
    ///
    /// # Errors
    /// - File read failure
    /// - Unsupported format
    /// - Parse failure
    pub fn load_from_path(path: &Path) -> Result<EmitterConfig, ContractError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        debug!(path = %path.display(), ?format, "Loading emitter config");
        Self::load_from_str(&content, format)
    }

    /// Load configuration from string
    ///
    /// # Errors
    /// - Parse failure
    pub fn load_from_str(
        content: &str,
        format: ConfigFormat,
    ) -> Result<EmitterConfig, ContractError> {
        parser::parse(content, format)
    }

    /// Apply `EVENT_EMITTER_*` variables from the process environment
    ///
    /// # Errors
    /// - A variable holds an invalid value
    pub fn apply_env_overrides(config: EmitterConfig) -> Result<EmitterConfig, ContractError> {
        Self::apply_overrides(config, |key| std::env::var(key).ok())
    }

    /// Apply `EVENT_EMITTER_*` overrides from an arbitrary lookup
    ///
    /// # Errors
    /// - A variable holds an invalid value
    pub fn apply_overrides<F>(
        config: EmitterConfig,
        lookup: F,
    ) -> Result<EmitterConfig, ContractError>
    where
        F: Fn(&str) -> Option<String>,
    {
        env::apply_overrides(config, lookup)
    }

    /// Serialize EmitterConfig to TOML string
    pub fn to_toml(config: &EmitterConfig) -> Result<String, ContractError> {
        toml::to_string_pretty(config)
            .map_err(|e| ContractError::config_parse(format!("TOML serialize error: {e}")))
    }

    /// Serialize EmitterConfig to JSON string
    pub fn to_json(config: &EmitterConfig) -> Result<String, ContractError> {
        serde_json::to_string_pretty(config)
            .map_err(|e| ContractError::config_parse(format!("JSON serialize error: {e}")))
    }
}

impl ConfigLoader {
    /// Infer configuration format from file extension
    fn detect_format(path: &Path) -> Result<ConfigFormat, ContractError> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            ContractError::config_parse("cannot determine file format from extension")
        })?;

        ConfigFormat::from_extension(ext).ok_or_else(|| {
            ContractError::config_parse(format!("unsupported config format: .{ext}"))
        })
    }

    /// Read configuration file content
    fn read_file(path: &Path) -> Result<String, ContractError> {
        Ok(std::fs::read_to_string(path)?)
    }
}
