//! Configuration for logging

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Sink for formatted log lines (e.g. a test capture or an in-app log view). Must not block.
pub type LogSink = Arc<dyn Fn(String) + Send + Sync>;

const DEFAULT_SERVICE_NAME: &str = "acme-theme";

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Service name recorded on the startup event
    pub service_name: String,

    /// fmt output on stderr
    pub enable_console: bool,

    /// Level filter (e.g. "info", "acme_core=debug").
    /// Falls back to `RUST_LOG`, then "warn", when not set
    pub log_level: Option<String>,

    #[serde(skip)]
    pub log_sink: Option<LogSink>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            enable_console: true,
            log_level: None,
            log_sink: None,
        }
    }
}

impl fmt::Debug for ObservabilityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservabilityConfig")
            .field("service_name", &self.service_name)
            .field("enable_console", &self.enable_console)
            .field("log_level", &self.log_level)
            .field("log_sink", &self.log_sink.is_some())
            .finish()
    }
}

impl ObservabilityConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Forward every formatted line to `sink`.
    pub fn with_log_sink(mut self, sink: LogSink) -> Self {
        self.log_sink = Some(sink);
        self
    }

    /// `ACME_SERVICE_NAME`, `ACME_LOG` (else `RUST_LOG`) and `ACME_LOG_CONSOLE`
    /// (`0`, `false` or `off` silences stderr).
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(name) = lookup("ACME_SERVICE_NAME") {
            config.service_name = name;
        }
        config.log_level = lookup("ACME_LOG").or_else(|| lookup("RUST_LOG"));
        if let Some(console) = lookup("ACME_LOG_CONSOLE") {
            config.enable_console = !matches!(console.trim(), "0" | "false" | "off");
        }
        config
    }
}
