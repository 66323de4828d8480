//! Descriptor → spec → Terraform files.

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, info};

use tfgen_spec::{DescriptorReader, SpecReader, SpecWriter};
use tfgen_templates::TemplateRenderer;

use crate::error::{CoreError, CoreResult};
use crate::options::RunOptions;

/// A file the pipeline has just persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    SpecUpdated(PathBuf),
    Rendered(PathBuf),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpecUpdated(path) => write!(f, "Updated file: {}", path.display()),
            Self::Rendered(path) => write!(f, "Generated file: {}", path.display()),
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub version: String,
    pub identifier: String,
    pub rendered: Vec<PathBuf>,
}

/// The linear tfgen pipeline.
///
/// Steps run strictly in order and nothing is rolled back: once the spec has
/// been rewritten it stays rewritten even if rendering fails afterwards.
pub struct Pipeline {
    options: RunOptions,
    renderer: TemplateRenderer,
}

impl Pipeline {
    pub fn new(options: RunOptions) -> Self {
        let renderer = TemplateRenderer::with_mode(options.mode);
        Self { options, renderer }
    }

    /// Run every step, calling `on_step` after each file is written.
    pub fn run(&self, mut on_step: impl FnMut(&Step)) -> CoreResult<RunReport> {
        let options = &self.options;
        info!(
            "Preparing Terraform files for '{}' from {:?}",
            options.identifier, options.spec_file
        );

        let descriptor = DescriptorReader::read(&options.descriptor_file)?;
        let version = descriptor
            .version()
            .ok_or_else(|| CoreError::MissingVersion(options.descriptor_file.clone()))?;
        debug!(
            "Descriptor version {} (project {:?})",
            version,
            descriptor.project_name()
        );

        let mut spec = SpecReader::read(&options.spec_file)?;
        spec.apply_deployment(&version, &options.identifier)?;
        debug!(
            "Stamped spec with version {:?} and backend.key {:?}",
            spec.version(),
            spec.backend_key()
        );
        SpecWriter::write(&spec, &options.spec_file)?;
        on_step(&Step::SpecUpdated(options.spec_file.clone()));

        // Render from what was persisted, not from the in-memory copy.
        let context = SpecReader::read(&options.spec_file)?.into_value();

        let mut rendered = Vec::new();
        for (template, output) in options.render_targets() {
            self.renderer.render_file(&template, &output, &context)?;
            on_step(&Step::Rendered(output.clone()));
            rendered.push(output);
        }

        Ok(RunReport {
            version,
            identifier: options.identifier.clone(),
            rendered,
        })
    }
}
