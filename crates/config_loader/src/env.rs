//! Environment overrides
//!
//! Variables:
//! - `EVENT_EMITTER_DEBUG`: boolean, switches verbose diagnostics
//! - `EVENT_EMITTER_SINK`: `stderr` or `log`

use contracts::{ContractError, DiagnosticSinkKind, EmitterConfig};

/// Verbose diagnostics switch
pub const DEBUG_VAR: &str = "EVENT_EMITTER_DEBUG";

/// Diagnostic sink kind
pub const SINK_VAR: &str = "EVENT_EMITTER_SINK";

/// Apply overrides looked up through `lookup`.
///
/// Unset variables leave the config untouched.
pub fn apply_overrides<F>(
    mut config: EmitterConfig,
    lookup: F,
) -> Result<EmitterConfig, ContractError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(DEBUG_VAR) {
        config.diagnostics.verbose = parse_bool(DEBUG_VAR, &raw)?;
    }

    if let Some(raw) = lookup(SINK_VAR) {
        config.diagnostics.sink = DiagnosticSinkKind::from_name(&raw).ok_or_else(|| {
            ContractError::config_validation(
                SINK_VAR,
                format!("unknown sink '{raw}', expected 'stderr' or 'log'"),
            )
        })?;
    }

    Ok(config)
}

fn parse_bool(field: &str, raw: &str) -> Result<bool, ContractError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ContractError::config_validation(
            field,
            format!("expected a boolean, got '{raw}'"),
        )),
    }
}
