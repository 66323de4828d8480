//! Spec file writing.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::document::SpecDocument;
use crate::error::SpecResult;

/// Writer for deployment specs.
pub struct SpecWriter;

impl SpecWriter {
    /// Serialize the spec and overwrite `path` with it.
    ///
    /// The file is truncated and rewritten in place; there is no backup.
    pub fn write(document: &SpecDocument, path: impl AsRef<Path>) -> SpecResult<()> {
        let path = path.as_ref();
        let content = document.to_yaml_string()?;
        fs::write(path, content)?;
        info!("Updated file: {}", path.display());
        Ok(())
    }
}
