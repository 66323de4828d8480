//! Template rendering.

use std::fs;
use std::path::Path;

use regex::Regex;
use serde_yaml::Value;
use tracing::{debug, info, warn};

use crate::error::{TemplateError, TemplateResult};

/// How unresolved placeholders are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Unresolved placeholders render as an empty string.
    #[default]
    Lenient,
    /// Unresolved placeholders are an error.
    Strict,
}

/// Renders `{{ path }}` placeholders against a YAML context.
pub struct TemplateRenderer {
    placeholder: Regex,
    unsupported: Regex,
    mode: RenderMode,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Create a lenient renderer.
    pub fn new() -> Self {
        Self::with_mode(RenderMode::default())
    }

    /// Create a renderer with the given mode.
    pub fn with_mode(mode: RenderMode) -> Self {
        Self {
            // Match {{ name }} and {{ dotted.path.0 }}
            placeholder: Regex::new(r"\{\{\s*([A-Za-z0-9_-]+(?:\.[A-Za-z0-9_-]+)*)\s*\}\}")
                .expect("placeholder pattern is valid"),
            // Any other {{ expression }} or {% tag %}
            unsupported: Regex::new(r"(?s)\{\{.*?\}\}|\{%.*?%\}")
                .expect("unsupported syntax pattern is valid"),
            mode,
        }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Render a template file to `output_path`, overwriting it.
    pub fn render_file(
        &self,
        template_path: &Path,
        output_path: &Path,
        context: &Value,
    ) -> TemplateResult<()> {
        if !template_path.exists() {
            return Err(TemplateError::NotFound(template_path.to_path_buf()));
        }

        debug!("Rendering {:?} to {:?}", template_path, output_path);
        let content = fs::read_to_string(template_path)?;
        let rendered = self.render_content(&content, context)?;
        fs::write(output_path, rendered)?;

        info!("Generated file: {}", output_path.display());
        Ok(())
    }

    /// Render content by replacing placeholders.
    ///
    /// Only `{{ dotted.path }}` is substituted. Other expressions (filters,
    /// subscripts) and `{% %}` tags are copied through with a warning, or
    /// rejected in strict mode.
    pub fn render_content(&self, content: &str, context: &Value) -> TemplateResult<String> {
        let mut rendered = String::with_capacity(content.len());
        let mut last = 0;

        for caps in self.placeholder.captures_iter(content) {
            let Some(whole) = caps.get(0) else { continue };
            let path = &caps[1];

            self.push_literal(&content[last..whole.start()], &mut rendered)?;
            match lookup(context, path) {
                Some(value) => rendered.push_str(&format_value(path, value)?),
                None if self.mode == RenderMode::Strict => {
                    return Err(TemplateError::MissingVariable(path.to_string()));
                }
                None => warn!("Template variable '{}' is not defined, rendering empty", path),
            }
            last = whole.end();
        }

        self.push_literal(&content[last..], &mut rendered)?;
        Ok(rendered)
    }

    /// Copy text between placeholders, checking it for syntax we cannot render.
    fn push_literal(&self, text: &str, rendered: &mut String) -> TemplateResult<()> {
        if let Some(found) = self.unsupported.find(text) {
            let syntax = found.as_str().to_string();
            if self.mode == RenderMode::Strict {
                return Err(TemplateError::UnsupportedSyntax(syntax));
            }
            for extra in self.unsupported.find_iter(text) {
                warn!("Unsupported template syntax '{}' copied verbatim", extra.as_str());
            }
        }

        rendered.push_str(text);
        Ok(())
    }
}

/// Resolve a dotted path. Numeric segments index into sequences.
fn lookup<'a>(context: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(context, |value, segment| match untag(value) {
        Value::Mapping(map) => map.get(segment),
        Value::Sequence(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

fn format_value(path: &str, value: &Value) -> TemplateResult<String> {
    match untag(value) {
        Value::Null => Ok(String::new()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s.clone()),
        composite => serde_json::to_string(composite).map_err(|source| {
            TemplateError::UnrenderableValue {
                path: path.to_string(),
                source,
            }
        }),
    }
}
