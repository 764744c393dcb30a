//! Error types for the build driver.
//!
//! Every failure is terminal for the run. Each variant carries enough context
//! for `main` to print an actionable message and pick an exit code.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for build driver operations
pub type Result<T> = std::result::Result<T, BuildError>;

/// Main error type for all build driver operations
#[derive(Error, Debug)]
pub enum BuildError {
    /// Configuration errors, reported before any work is done
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Process spawning errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// The version manifest could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Manifest {
        /// Path of the manifest that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The manifest has no `<version>X.Y.Z...</version>` element
    #[error("No <version>X.Y.Z</version> element found in {}", path.display())]
    VersionNotFound {
        /// Path of the manifest that was searched
        path: PathBuf,
    },

    /// The external build tool terminated unsuccessfully
    #[error("Build failed ({}): {command}", describe_exit(*code))]
    BuildFailed {
        /// Space-joined command that was run
        command: String,
        /// Exit code, `None` when the process was terminated by a signal
        code: Option<i32>,
    },

    /// The build did not produce the expected artifact
    #[error("Expected artifact not found: {}", path.display())]
    ArtifactMissing {
        /// Path where the artifact was expected
        path: PathBuf,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The running platform does not map to any known classifier
    #[error(
        "Unrecognized platform '{identifier}'. Please specify '--os'. Possible values are: {}",
        allowed.join(", ")
    )]
    UnrecognizedPlatform {
        /// Host OS identifier that failed to map
        identifier: String,
        /// Accepted `--os` values
        allowed: Vec<&'static str>,
    },

    /// The Maven wrapper is not present in the source directory
    #[error("Maven wrapper not found at {}", path.display())]
    WrapperMissing {
        /// Expected wrapper location
        path: PathBuf,
        /// System `mvn` found on PATH, if any
        system_mvn: Option<PathBuf>,
    },
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

impl BuildError {
    /// Process exit code for this error.
    ///
    /// Configuration problems exit with 2, matching clap's convention for
    /// invalid arguments. Everything else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildError::Config(_) => 2,
            _ => 1,
        }
    }

    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            BuildError::Config(ConfigError::UnrecognizedPlatform { .. }) => {
                vec!["Pass the target platform explicitly, e.g. '--os linux-x86_64'".to_string()]
            }
            BuildError::Config(ConfigError::WrapperMissing { system_mvn, .. }) => {
                let mut hints =
                    vec!["Point '--source' at the root of a konduit-serving checkout".to_string()];
                if let Some(mvn) = system_mvn {
                    hints.push(format!(
                        "A system Maven was found at {}; regenerate the wrapper with 'mvn wrapper:wrapper'",
                        mvn.display()
                    ));
                }
                hints
            }
            BuildError::Manifest { .. } | BuildError::VersionNotFound { .. } => {
                vec!["Check that '--source' contains the project's pom.xml".to_string()]
            }
            BuildError::BuildFailed { .. } => {
                vec!["Scroll up for the Maven output describing the failure".to_string()]
            }
            BuildError::ArtifactMissing { .. } => vec![
                "The build finished but produced a differently named jar".to_string(),
                "Check that the pom.xml version and the --spin/--os/--chip values match the build profiles"
                    .to_string(),
            ],
            BuildError::Cli(_) | BuildError::Io(_) => {
                vec!["Check the error message above for specific details".to_string()]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_exit_with_usage_code() {
        let err = BuildError::from(ConfigError::UnrecognizedPlatform {
            identifier: "plan9".to_string(),
            allowed: vec!["linux-x86_64"],
        });
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("--os"));
        assert!(err.to_string().contains("linux-x86_64"));
    }

    #[test]
    fn build_failure_names_exit_code() {
        let err = BuildError::BuildFailed {
            command: "./mvnw clean".to_string(),
            code: Some(3),
        };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "Build failed (exit code 3): ./mvnw clean");
    }

    #[test]
    fn wrapper_hint_mentions_system_maven() {
        let err = BuildError::from(ConfigError::WrapperMissing {
            path: PathBuf::from("src/mvnw"),
            system_mvn: Some(PathBuf::from("/usr/bin/mvn")),
        });
        let hints = err.recovery_suggestions();
        assert!(hints.iter().any(|h| h.contains("/usr/bin/mvn")));
    }
}
