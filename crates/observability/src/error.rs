//! Error types for observability crate

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;

#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// Level filter did not parse
    #[error("invalid log filter '{filter}': {source}")]
    InvalidFilter {
        filter: String,
        #[source]
        source: ParseError,
    },

    /// Another global subscriber is already installed
    #[error("a global subscriber is already installed: {0}")]
    AlreadyInstalled(#[from] TryInitError),
}
