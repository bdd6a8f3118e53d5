//! Error types for storefront QA

use thiserror::Error;

use crate::types::EntityKind;

/// Result type alias using the common Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the common crate
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{kind} validation failed: {}", errors.join(", "))]
    InvalidData {
        kind: EntityKind,
        errors: Vec<String>,
    },

    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),
}
