//! # tfgen_spec
//!
//! Reading and rewriting of the two documents tfgen works on:
//!
//! - **Build descriptor**: a TOML file whose `[project]` section carries the
//!   release `version`.
//! - **Deployment spec**: a YAML document holding deployment variables. It is
//!   stamped with the version and the deployment identifier, written back in
//!   place, and later used as the rendering context for Terraform templates.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tfgen_spec::{DescriptorReader, SpecReader, SpecWriter};
//!
//! let descriptor = DescriptorReader::read("pyproject.toml").unwrap();
//! let version = descriptor.version().expect("descriptor has no version");
//!
//! let mut spec = SpecReader::read("deploy.yaml").unwrap();
//! spec.apply_deployment(&version, "prod").unwrap();
//! SpecWriter::write(&spec, "deploy.yaml").unwrap();
//! ```

pub mod descriptor;
pub mod document;
pub mod error;
pub mod reader;
pub mod writer;

pub use descriptor::Descriptor;
pub use document::SpecDocument;
pub use error::{SpecError, SpecResult};
pub use reader::{DescriptorReader, SpecReader};
pub use writer::SpecWriter;
