//! Command line interface for the uberjar build driver.
//!
//! This module provides argument parsing, the runtime output configuration
//! and the top-level `run` entry point used by the binary.

mod args;
mod output;

pub use args::{Args, LEGACY_SHOW_FLAG, RuntimeConfig, normalize_args};
pub use output::OutputManager;

use crate::builder::{BuildOutcome, JarBuilder};
use crate::error::Result;
use crate::options::Chip;

/// Main CLI entry point
///
/// Parses the process arguments (clap exits with code 2 on invalid input),
/// resolves the build options and runs the pipeline.
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    run_with_args(&args).await
}

/// Runs the pipeline for already parsed arguments
pub async fn run_with_args(args: &Args) -> Result<i32> {
    let runtime_config = RuntimeConfig::from(args);
    let options = args.build_options()?;

    runtime_config.verbose_println(&format!(
        "Building {} / spin {} / chip {} from {}",
        options.os(),
        options.spin(),
        options.chip(),
        options.source().display()
    ))?;

    if options.chip() == Chip::Arm && options.spin().includes_python() {
        runtime_config.warn("Python bundling is not encouraged with ARM; consider --spin minimal or pmml")?;
    }
    if options.spin().includes_pmml() {
        runtime_config.verbose_println("PMML support is AGPL licensed; use --spin minimal or python to leave it out")?;
    }

    match JarBuilder::new(options, runtime_config).run().await? {
        BuildOutcome::Shown { .. } => log::debug!("Printed build command only"),
        BuildOutcome::Built { delivered, .. } => {
            log::info!("Build complete: {}", delivered.display())
        }
    }

    Ok(0)
}
