//! Build driver for Konduit Serving uberjars
//!
//! Wraps the Maven build of a konduit-serving checkout:
//! - resolves platform, chip and spin options (detecting the host platform)
//! - reads the project version from `pom.xml`
//! - assembles and runs the `mvnw` invocation, or only prints it
//! - copies the produced uberjar to the requested location
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod builder;
pub mod cli;
pub mod error;
pub mod metadata;
pub mod options;
pub mod utils;

// Re-export commonly used types
pub use error::{BuildError, CliError, ConfigError, Result};
