//! Error types for the spec module.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors that can occur while reading or rewriting descriptors and specs.
#[derive(Error, Debug)]
pub enum SpecError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Expected a mapping at '{0}'")]
    NotAMapping(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
