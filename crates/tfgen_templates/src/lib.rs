//! # tfgen_templates
//!
//! Placeholder rendering for Terraform variable and backend templates.
//!
//! Templates are plain text with `{{ path }}` placeholders. A path is a dotted
//! lookup into a YAML context: `{{ version }}`, `{{ backend.key }}`, or
//! `{{ subnets.0 }}` for sequence items.
//!
//! ## Example
//!
//! ```rust
//! use tfgen_templates::TemplateRenderer;
//!
//! let context: serde_yaml::Value =
//!     serde_yaml::from_str("version: 1.2.3\nbackend:\n  key: prod\n").unwrap();
//!
//! let renderer = TemplateRenderer::new();
//! let rendered = renderer
//!     .render_content("key = \"{{ backend.key }}/{{version}}\"", &context)
//!     .unwrap();
//! assert_eq!(rendered, "key = \"prod/1.2.3\"");
//! ```

pub mod error;
pub mod renderer;

pub use error::{TemplateError, TemplateResult};
pub use renderer::{RenderMode, TemplateRenderer};
