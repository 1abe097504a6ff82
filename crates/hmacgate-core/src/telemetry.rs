//! Tracing subscriber setup for the binaries.

use tracing_subscriber::EnvFilter;

use crate::error::{GateError, GateResult};

/// Install the global `fmt` subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
pub fn init_tracing(log_level: &str) -> GateResult<()> {
    let filter = build_filter(log_level, std::env::var_os("RUST_LOG").is_some())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    Ok(())
}

fn build_filter(log_level: &str, rust_log_set: bool) -> GateResult<EnvFilter> {
    if rust_log_set {
        return Ok(EnvFilter::from_default_env());
    }
    EnvFilter::try_new(log_level).map_err(|_| GateError::InvalidSetting {
        name: "LOG_LEVEL",
        value: log_level.to_owned(),
    })
}
