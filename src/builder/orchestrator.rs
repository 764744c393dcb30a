//! Main build orchestration.
//!
//! The pipeline is linear: resolve the version, assemble the command, print
//! it or run it, then deliver the jar.

use super::{
    artifact::{copy_artifact, copy_secondary},
    checksum::calculate_sha256,
    command::BuildCommand,
    runner::run_build,
    tool_detection::find_wrapper,
};
use crate::cli::RuntimeConfig;
use crate::error::{BuildError, Result};
use crate::metadata::extract_version;
use crate::options::BuildOptions;
use std::path::PathBuf;

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// `--show_build_command`: the command was printed, nothing ran.
    Shown { command: BuildCommand },

    /// The build ran and the jar was delivered.
    Built {
        /// Version read from `pom.xml`.
        version: String,
        /// `<source>/<target>`
        delivered: PathBuf,
        /// `<source>/python/tests/konduit.jar`, if that directory exists.
        secondary: Option<PathBuf>,
        /// Hex SHA-256 of the delivered jar.
        checksum: String,
    },
}

/// Drives one uberjar build.
///
/// # Examples
///
/// ```no_run
/// use konduit_build_jar::builder::JarBuilder;
/// use konduit_build_jar::cli::RuntimeConfig;
/// use konduit_build_jar::options::{BuildOptionsBuilder, Spin};
///
/// # async fn example() -> konduit_build_jar::Result<()> {
/// let options = BuildOptionsBuilder::new()
///     .spin(Spin::Minimal)
///     .source("../konduit-serving")
///     .build()?;
/// let outcome = JarBuilder::new(options, RuntimeConfig::default()).run().await?;
/// println!("{:?}", outcome);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct JarBuilder {
    options: BuildOptions,
    runtime_config: RuntimeConfig,
}

impl JarBuilder {
    pub fn new(options: BuildOptions, runtime_config: RuntimeConfig) -> Self {
        Self {
            options,
            runtime_config,
        }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// The Maven invocation this builder runs.
    pub fn command(&self) -> BuildCommand {
        BuildCommand::from_options(&self.options)
    }

    /// Runs the pipeline.
    ///
    /// The version is read before the show-only check, so printing the
    /// command also requires a readable `pom.xml`.
    ///
    /// # Errors
    ///
    /// - Manifest/version errors from [`extract_version`]
    /// - [`ConfigError::WrapperMissing`](crate::error::ConfigError::WrapperMissing)
    /// - [`BuildError::BuildFailed`] when Maven exits unsuccessfully; nothing
    ///   is copied in that case
    /// - [`BuildError::ArtifactMissing`] when the expected jar is absent
    pub async fn run(&self) -> Result<BuildOutcome> {
        let source = self.options.source();
        let version = extract_version(source).await?;
        let command = self.command();

        log::debug!(
            "Resolved options: os={} spin={} chip={} version={}",
            self.options.os(),
            self.options.spin(),
            self.options.chip(),
            version
        );

        if self.options.show_only() {
            self.runtime_config.payload(&command.to_string())?;
            return Ok(BuildOutcome::Shown { command });
        }

        let wrapper = find_wrapper(source)?;
        self.runtime_config
            .progress(&format!("Building konduit-serving {} uberjar", version))?;

        self.runtime_config
            .payload(&format!("Running command: {}", command))?;
        let status = run_build(&command, &wrapper, source).await?;
        if !status.success() {
            return Err(BuildError::BuildFailed {
                command: command.to_string(),
                code: status.code(),
            });
        }

        self.runtime_config.section("Delivering artifact")?;
        let delivered = copy_artifact(&self.options, &version).await?;
        let checksum = calculate_sha256(&delivered).await?;
        log::info!("SHA256 {}  {}", checksum, delivered.display());
        self.runtime_config
            .success(&format!("Built {}", delivered.display()))?;
        self.runtime_config.indent(&format!("SHA256: {}", checksum))?;

        let secondary = copy_secondary(&self.options).await?;
        match &secondary {
            Some(path) => self
                .runtime_config
                .indent(&format!("Also copied to {}", path.display()))?,
            None => self
                .runtime_config
                .verbose_println("No python/tests directory, skipped test copy")?,
        }

        Ok(BuildOutcome::Built {
            version,
            delivered,
            secondary,
            checksum,
        })
    }
}
