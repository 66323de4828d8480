//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

pub mod render;

/// tfgen - stamp a deployment spec and render Terraform files from it
#[derive(Parser)]
#[command(name = "tfgen")]
#[command(version, about = "Stamp a deployment spec and render Terraform files from it")]
#[command(long_about = r#"
tfgen reads the release version from a TOML build descriptor ([project].version),
writes it and the deployment identifier into a YAML deployment spec (version and
backend.key), then renders two templates from the working directory using the
rewritten spec:

  terraform.tfvars.j2  →  terraform.<IDENTIFIER>.tfvars
  terraform.conf.j2    →  terraform.<IDENTIFIER>.conf

Placeholders look like {{ version }} or {{ backend.key }}.

EXIT CODES:
  0 - Success
  1 - Missing version, bad arguments, or general error
  2 - Descriptor or spec error
  3 - Template error
"#)]
pub struct Cli {
    /// Deployment identifier, used as backend.key and in output filenames
    pub identifier: String,

    /// YAML deployment spec to stamp (rewritten in place)
    pub spec_file: PathBuf,

    /// TOML build descriptor holding [project].version
    pub descriptor_file: PathBuf,

    /// Fail on template placeholders missing from the spec instead of rendering them empty
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}
