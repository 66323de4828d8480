//! Run parameters.

use std::path::PathBuf;

use tfgen_templates::RenderMode;

/// Template for the Terraform variable file.
pub const TFVARS_TEMPLATE: &str = "terraform.tfvars.j2";

/// Template for the Terraform backend configuration.
pub const BACKEND_TEMPLATE: &str = "terraform.conf.j2";

/// Everything a pipeline run needs.
///
/// The template names are fixed; they and the rendered outputs are resolved
/// against `working_dir`. An empty `working_dir` (the default) leaves them
/// relative to the process working directory.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub identifier: String,
    pub spec_file: PathBuf,
    pub descriptor_file: PathBuf,
    pub working_dir: PathBuf,
    pub mode: RenderMode,
}

impl RunOptions {
    pub fn new(
        identifier: impl Into<String>,
        spec_file: impl Into<PathBuf>,
        descriptor_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            spec_file: spec_file.into(),
            descriptor_file: descriptor_file.into(),
            working_dir: PathBuf::new(),
            mode: RenderMode::default(),
        }
    }

    /// Resolve templates and outputs against `dir`.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = dir.into();
        self
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn tfvars_template(&self) -> PathBuf {
        self.working_dir.join(TFVARS_TEMPLATE)
    }

    pub fn backend_template(&self) -> PathBuf {
        self.working_dir.join(BACKEND_TEMPLATE)
    }

    /// `terraform.<identifier>.tfvars`
    pub fn tfvars_output(&self) -> PathBuf {
        self.output_path("tfvars")
    }

    /// `terraform.<identifier>.conf`
    pub fn backend_output(&self) -> PathBuf {
        self.output_path("conf")
    }

    fn output_path(&self, extension: &str) -> PathBuf {
        self.working_dir.join(format!("terraform.{}.{}", self.identifier, extension))
    }

    /// Template/output pairs in render order.
    pub fn render_targets(&self) -> [(PathBuf, PathBuf); 2] {
        [
            (self.tfvars_template(), self.tfvars_output()),
            (self.backend_template(), self.backend_output()),
        ]
    }
}
