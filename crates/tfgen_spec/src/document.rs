//! In-memory deployment spec.

use serde_yaml::Value;

use crate::error::{SpecError, SpecResult};

/// Top-level key receiving the release version.
pub const VERSION_KEY: &str = "version";

/// Top-level section holding the Terraform backend settings.
pub const BACKEND_KEY: &str = "backend";

/// Key inside the backend section receiving the deployment identifier.
pub const BACKEND_STATE_KEY: &str = "key";

/// A parsed deployment spec.
///
/// Wraps the raw YAML value so that every field the file carries survives a
/// rewrite and stays visible to templates. An empty file parses to a null
/// document.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecDocument {
    root: Value,
}

impl SpecDocument {
    /// Parse a spec from YAML text.
    pub fn from_yaml_str(content: &str) -> SpecResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self { root: Value::Null });
        }

        let root: Value = serde_yaml::from_str(content)?;
        Ok(Self { root })
    }

    /// Serialize to block-style YAML.
    pub fn to_yaml_string(&self) -> SpecResult<String> {
        Ok(serde_yaml::to_string(&self.root)?)
    }

    /// Stamp the spec with a release version and a deployment identifier.
    ///
    /// Sets the top-level `version` and `backend.key`. Nothing is modified
    /// unless both can be set.
    pub fn apply_deployment(&mut self, version: &str, identifier: &str) -> SpecResult<()> {
        let Value::Mapping(root) = &mut self.root else {
            return Err(SpecError::NotAMapping("<root>".to_string()));
        };

        match root.get(BACKEND_KEY) {
            Some(Value::Mapping(_)) => {}
            Some(_) => return Err(SpecError::NotAMapping(BACKEND_KEY.to_string())),
            None => return Err(SpecError::MissingField(BACKEND_KEY.to_string())),
        }

        root.insert(
            Value::String(VERSION_KEY.to_string()),
            Value::String(version.to_string()),
        );

        if let Some(Value::Mapping(backend)) = root.get_mut(BACKEND_KEY) {
            backend.insert(
                Value::String(BACKEND_STATE_KEY.to_string()),
                Value::String(identifier.to_string()),
            );
        }

        Ok(())
    }

    /// The top-level `version`, if it is a string.
    pub fn version(&self) -> Option<&str> {
        self.root.get(VERSION_KEY).and_then(Value::as_str)
    }

    /// The `backend.key` value, if it is a string.
    pub fn backend_key(&self) -> Option<&str> {
        self.root
            .get(BACKEND_KEY)
            .and_then(|backend| backend.get(BACKEND_STATE_KEY))
            .and_then(Value::as_str)
    }

    /// Consume the document, returning the YAML value.
    pub fn into_value(self) -> Value {
        self.root
    }
}
