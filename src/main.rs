//! build_jar - Konduit Serving uberjar build driver.
//!
//! This binary builds the uberjar for a chosen platform, chip and spin and
//! copies it to the requested output path.

use konduit_build_jar::cli::{self, OutputManager};
use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            let output = OutputManager::new(false, false);
            let _ = output.error(&e.to_string());
            for suggestion in e.recovery_suggestions() {
                let _ = output.indent(&format!("hint: {}", suggestion));
            }
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
