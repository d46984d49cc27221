use std::path::PathBuf;

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

/// Catalog initialization errors.
///
/// All of these are fatal: a checkout system without its tool inventory
/// cannot function, so these propagate to the top-level caller instead of
/// being retried or recovered.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog data: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("invalid catalog entry \"{code}\": {source}")]
    InvalidEntry {
        code: String,
        #[source]
        source: DomainError,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("unknown tool code \"{code}\"")]
    UnknownToolCode { code: String },
}

pub type Result<T> = std::result::Result<T, Error>;
