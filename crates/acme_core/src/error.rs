use thiserror::Error;

use acme_constant::UnknownVariant;
use acme_types::UnknownSlot;

/// Message of [`ThemeError::MissingProvider`]. Consumers match on it verbatim.
pub const MISSING_PROVIDER_MESSAGE: &str = "useColors must be used within a ColorProvider";

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("useColors must be used within a ColorProvider")]
    MissingProvider,

    #[error("storage read error: {0}")]
    StorageRead(String),

    #[error("storage write error: {0}")]
    StorageWrite(String),

    #[error("malformed theme record under '{key}': {source}")]
    MalformedRecord {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    UnknownSlot(#[from] UnknownSlot),

    #[error(transparent)]
    UnknownVariant(#[from] UnknownVariant),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
