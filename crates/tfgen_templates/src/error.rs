//! Error types for templates.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur during template rendering.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(PathBuf),

    #[error("Template variable not provided: {0}")]
    MissingVariable(String),

    #[error("Unsupported template syntax: {0}")]
    UnsupportedSyntax(String),

    #[error("Template value for {path} cannot be rendered: {source}")]
    UnrenderableValue {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
