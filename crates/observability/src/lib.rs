//! Logging setup shared by the acme theme crates.
//!
//! Libraries only emit `tracing` events; binaries call [`init`] once.
//!
//! ```no_run
//! use acme_observability::{init, ObservabilityConfig};
//!
//! init(ObservabilityConfig::new("acme-theme").with_log_level("info"))?;
//! tracing::info!("started");
//! # Ok::<(), acme_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `ACME_SERVICE_NAME` - Service name
//! - `ACME_LOG` or `RUST_LOG` - Level filter
//! - `ACME_LOG_CONSOLE` - set to `0` to silence stderr output

pub mod config;
pub mod error;
pub mod sink_layer;
pub mod subscriber;
pub mod spans;

pub use config::{LogSink, ObservabilityConfig};
pub use error::ObservabilityError;
pub use sink_layer::{log_sink_layer, LogSinkLayer};
pub use subscriber::{init, init_from_env, installed_service};
pub use spans::record_error;
