//! tfgen CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Missing version, bad arguments, or general error
//! - 2: Descriptor or spec error
//! - 3: Template error

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tfgen_core::CoreError;

mod commands;

use commands::Cli;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const SPEC_ERROR: u8 = 2;
    pub const TEMPLATE_ERROR: u8 = 3;
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                // Usage problems go to stdout with a plain failure code.
                println!("{}", e.render());
                return ExitCode::from(ExitCodes::GENERAL_ERROR);
            }
        },
    };

    init_logging(cli.verbose);

    match commands::render::execute(&cli) {
        Ok(_) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            if let Some(missing @ CoreError::MissingVersion(_)) = e.downcast_ref::<CoreError>() {
                println!("{}", missing);
            } else {
                eprintln!("Error: {:?}", e);
            }
            ExitCode::from(categorize_error(&e))
        }
    }
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "tfgen=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // Already initialized is fine.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    match e.downcast_ref::<CoreError>() {
        Some(CoreError::Spec(_)) => ExitCodes::SPEC_ERROR,
        Some(CoreError::Template(_)) => ExitCodes::TEMPLATE_ERROR,
        Some(CoreError::MissingVersion(_)) | None => ExitCodes::GENERAL_ERROR,
    }
}
