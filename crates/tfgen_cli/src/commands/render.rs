//! Render command - stamp the spec and render the Terraform files.

use anyhow::{Context, Result};
use tracing::info;

use tfgen_core::{Pipeline, RenderMode, RunOptions, RunReport};

use super::Cli;

pub fn execute(cli: &Cli) -> Result<RunReport> {
    let mode = if cli.strict {
        RenderMode::Strict
    } else {
        RenderMode::Lenient
    };

    let options = RunOptions::new(
        cli.identifier.clone(),
        cli.spec_file.clone(),
        cli.descriptor_file.clone(),
    )
    .with_mode(mode);

    let quiet = cli.quiet;
    let report = Pipeline::new(options)
        .run(|step| {
            if !quiet {
                println!("{}", step);
            }
        })
        .with_context(|| format!("Failed to prepare Terraform files for '{}'", cli.identifier))?;

    info!(
        "Prepared version {} for '{}' ({} files rendered)",
        report.version,
        report.identifier,
        report.rendered.len()
    );

    Ok(report)
}
