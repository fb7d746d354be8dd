use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Sync pipeline failures, tagged with the stage that failed.
///
/// Per-category fetch/parse failures never surface here; they are logged and
/// skipped inside the category loop. These variants cover the failures that
/// abort a whole sync pass.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("no market list configured for region {region}")]
    UnsupportedRegion { region: String },

    #[error("market list unavailable for region {region}: {reason}")]
    MarketList { region: String, reason: String },

    #[error("failed to persist daily snapshot: {reason}")]
    Persistence { reason: String },

    #[error("sync deadline of {seconds}s exceeded")]
    DeadlineExceeded { seconds: u64 },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
