//! File readers for descriptors and specs.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::descriptor::Descriptor;
use crate::document::SpecDocument;
use crate::error::{SpecError, SpecResult};

/// Reader for build descriptors.
pub struct DescriptorReader;

impl DescriptorReader {
    /// Read and parse a TOML build descriptor.
    pub fn read(path: impl AsRef<Path>) -> SpecResult<Descriptor> {
        let content = read_existing(path.as_ref())?;
        Descriptor::from_toml_str(&content)
    }
}

/// Reader for deployment specs.
pub struct SpecReader;

impl SpecReader {
    /// Read and parse a YAML deployment spec.
    pub fn read(path: impl AsRef<Path>) -> SpecResult<SpecDocument> {
        let content = read_existing(path.as_ref())?;
        SpecDocument::from_yaml_str(&content)
    }
}

fn read_existing(path: &Path) -> SpecResult<String> {
    if !path.exists() {
        return Err(SpecError::NotFound(path.to_path_buf()));
    }

    debug!("Reading {:?}", path);
    Ok(fs::read_to_string(path)?)
}
