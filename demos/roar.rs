//! Roar Example
//!
//! An event source embedding an emitter: the cat knows nothing about who
//! listens to its `roar`.
//!
//! Run with: cargo run -p emitter_demos --bin roar -- --times 3

use std::ops::Deref;

use anyhow::Result;
use clap::Parser;
use emitter::EventEmitter;
use observability::{LogFormat, ObservabilityConfig};
use serde_json::json;

/// Poke a cat and count its roars
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// How many times the cat roars per poke
    #[arg(short, long, default_value_t = 3)]
    times: u64,

    /// Trace every emission to standard error
    #[arg(short, long, env = "EVENT_EMITTER_DEBUG")]
    verbose: bool,

    /// Log format: json, pretty or compact
    #[arg(long, default_value = "compact", value_parser = parse_log_format)]
    log_format: LogFormat,
}

fn parse_log_format(name: &str) -> Result<LogFormat, String> {
    LogFormat::from_name(name)
        .ok_or_else(|| format!("unknown log format '{name}', expected json, pretty or compact"))
}

struct Cat {
    events: EventEmitter,
}

impl Cat {
    fn new(verbose: bool) -> Self {
        Self {
            events: EventEmitter::builder().verbose(verbose).build(),
        }
    }

    fn poke(&self, times: u64) -> Result<()> {
        self.emit("roar", &[json!(times)])?;
        Ok(())
    }
}

impl Deref for Cat {
    type Target = EventEmitter;

    fn deref(&self) -> &EventEmitter {
        &self.events
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    observability::init_with_config(ObservabilityConfig {
        log_format: args.log_format,
        default_log_level: "info".to_string(),
    })?;

    let tiger = Cat::new(args.verbose);
    tiger.on("roar", |_, args| {
        let times = args.last().and_then(|v| v.as_u64()).unwrap_or(0);
        for _ in 0..times {
            println!("RAWR!");
        }
        Ok(())
    });
    tiger.once("roar", |_, _| {
        tracing::info!("First poke, the cat is awake now");
        Ok(())
    });

    tiger.poke(args.times)?;
    tiger.poke(1)?;

    Ok(())
}
