//! Global subscriber installation.
//!
//! Composes a registry from an `EnvFilter`, an optional stderr fmt layer and
//! the sink layer. Installing twice is a no-op.

use once_cell::sync::OnceCell;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;
use crate::sink_layer::log_sink_layer;

const DEFAULT_FILTER: &str = "warn";

static INSTALLED: OnceCell<String> = OnceCell::new();

/// Builds the level filter: explicit config first, then `RUST_LOG`, then "warn".
pub fn env_filter(config: &ObservabilityConfig) -> Result<EnvFilter, ObservabilityError> {
    match config.log_level.as_deref() {
        Some(level) => EnvFilter::try_new(level).map_err(|source| ObservabilityError::InvalidFilter {
            filter: level.to_string(),
            source,
        }),
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Install the global subscriber described by `config`.
///
/// Returns `Ok(())` when this or an earlier call installed it.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }

    let filter = env_filter(&config)?;
    let fmt_layer = config.enable_console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
    });
    let sink_layer = log_sink_layer(config.log_sink.clone());

    Registry::default()
        .with(filter)
        .with(fmt_layer)
        .with(sink_layer)
        .try_init()?;

    let _ = INSTALLED.set(config.service_name.clone());
    tracing::debug!(service.name = %config.service_name, "logging initialized");
    Ok(())
}

/// Initialize from environment variables (see [`ObservabilityConfig::from_env`]).
pub fn init_from_env() -> Result<(), ObservabilityError> {
    init(ObservabilityConfig::from_env())
}

/// Service name passed to the first successful [`init`], if any.
pub fn installed_service() -> Option<&'static str> {
    INSTALLED.get().map(String::as_str)
}
