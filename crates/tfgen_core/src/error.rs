//! Error types for the pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that abort a pipeline run.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("No 'version' found in the descriptor file {}", .0.display())]
    MissingVersion(PathBuf),

    #[error(transparent)]
    Spec(#[from] tfgen_spec::SpecError),

    #[error(transparent)]
    Template(#[from] tfgen_templates::TemplateError),
}
