//! Build descriptor model.

use serde::Deserialize;
use tracing::warn;

use crate::error::SpecResult;

/// Typed view of a build descriptor.
///
/// Only the `[project]` table is interpreted; every other section is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Descriptor {
    #[serde(default)]
    project: toml::Table,
}

impl Descriptor {
    /// Parse a descriptor from TOML text.
    pub fn from_toml_str(content: &str) -> SpecResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The release version from `project.version`.
    ///
    /// Integers, floats and datetimes are stringified. Returns `None` when the
    /// section or key is missing, when the value is an empty string, or when it
    /// is a boolean, array or table.
    pub fn version(&self) -> Option<String> {
        match self.project.get("version")? {
            toml::Value::String(version) if !version.is_empty() => Some(version.clone()),
            toml::Value::String(_) => None,
            toml::Value::Integer(version) => Some(version.to_string()),
            toml::Value::Float(version) if version.fract() == 0.0 => {
                Some(format!("{:.1}", version))
            }
            toml::Value::Float(version) => Some(version.to_string()),
            toml::Value::Datetime(version) => Some(version.to_string()),
            other => {
                warn!(
                    "Ignoring non-string project.version of type {}",
                    other.type_str()
                );
                None
            }
        }
    }

    /// The project name, if the descriptor declares one.
    pub fn project_name(&self) -> Option<&str> {
        self.project.get("name").and_then(toml::Value::as_str)
    }
}
