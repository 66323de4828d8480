//! # tfgen_core
//!
//! The tfgen pipeline: read the release version from a build descriptor,
//! stamp it and the deployment identifier into the deployment spec, then
//! render the Terraform variable and backend files from the stamped spec.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tfgen_core::{Pipeline, RunOptions};
//!
//! let options = RunOptions::new("prod", "deploy.yaml", "pyproject.toml");
//! let report = Pipeline::new(options).run(|step| println!("{}", step)).unwrap();
//! println!("Deployed version {}", report.version);
//! ```

pub mod error;
pub mod options;
pub mod pipeline;

pub use error::{CoreError, CoreResult};
pub use options::{RunOptions, BACKEND_TEMPLATE, TFVARS_TEMPLATE};
pub use pipeline::{Pipeline, RunReport, Step};
pub use tfgen_templates::RenderMode;
