//! Fault Isolation Example
//!
//! A failing listener does not stop its siblings under `emit_safe`; the
//! failure arrives on the `error` event instead.
//!
//! Run with: cargo run -p emitter_demos --bin safe_emit -- [config.toml]

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use config_loader::ConfigLoader;
use emitter::{EventEmitter, Value};
use serde_json::json;

/// Emit one event to a mix of healthy and failing listeners
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Emitter config file (.toml / .json)
    config: Option<PathBuf>,

    /// Skip the `error` listener so failures reach the diagnostic sink
    #[arg(long)]
    unhandled: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    observability::init()?;

    let config = match &args.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading emitter config");
            ConfigLoader::load_from_path(path)?
        }
        None => contracts::EmitterConfig::default(),
    };
    let config = ConfigLoader::apply_env_overrides(config)?;

    let events = EventEmitter::with_config(&config);

    if !args.unhandled {
        events.on("error", |_, args| {
            let message = args.first().and_then(Value::as_str).unwrap_or_default();
            tracing::warn!(%message, "Listener reported an error");
            Ok(())
        });
    }
    events.on("greet", |_, args| {
        println!("echo: {}", args[0]);
        Ok(())
    });
    events.on("greet", |_, _| bail!("boom"));
    events.on("greet", |_, args| {
        println!("echo2: {}", args[0]);
        Ok(())
    });

    events.emit_safe("greet", &[json!("hello")]);

    let metrics = events.metrics().snapshot();
    tracing::info!(
        emits = metrics.emit_count,
        invocations = metrics.invocation_count,
        failures = metrics.failure_count,
        "Done"
    );

    Ok(())
}
