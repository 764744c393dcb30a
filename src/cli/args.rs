//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap. Option values are
//! closed enums, so invalid platforms, spins and chips are rejected by clap
//! before any work is done.

use crate::error::ConfigError;
use crate::options::{
    BuildOptions, BuildOptionsBuilder, Chip, DEFAULT_SOURCE, DEFAULT_TARGET, Platform, Spin,
};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Legacy single-dash spelling of `--show_build_command`.
pub const LEGACY_SHOW_FLAG: &str = "-sbc";

/// Build a Konduit Serving uberjar
#[derive(Parser, Debug)]
#[command(
    name = "build_jar",
    version,
    about = "Build a Konduit JAR.",
    long_about = "Builds the Konduit Serving uberjar through the Maven wrapper of a source checkout \
and copies it to the requested location.

Usage:
  build_jar --os linux-x86_64
  build_jar --spin minimal --chip gpu --target dist/konduit-gpu.jar
  build_jar --source ../konduit-serving -sbc

Exit code 0 = the jar exists at <source>/<target> (or the command was only printed)."
)]
pub struct Args {
    /// The javacpp.platform to use (default: detected from the host)
    #[arg(long, value_enum, value_name = "PLATFORM", env = "KONDUIT_OS")]
    pub os: Option<Platform>,

    /// Whether to bundle Python, PMML, both or neither
    ///
    /// Python bundling is not encouraged with ARM, and PMML bundling is not
    /// encouraged if the AGPL license is an issue.
    #[arg(long, value_enum, default_value_t = Spin::All, env = "KONDUIT_SPIN")]
    pub spin: Spin,

    /// Chip architecture: cpu, gpu (CUDA) or arm
    #[arg(long, value_enum, default_value_t = Chip::Cpu, env = "KONDUIT_CHIP")]
    pub chip: Chip,

    /// Path to the konduit-serving source checkout
    #[arg(long, value_name = "DIR", default_value = DEFAULT_SOURCE, env = "KONDUIT_SOURCE")]
    pub source: PathBuf,

    /// Output jar path, relative to the source directory
    #[arg(long, value_name = "PATH", default_value = DEFAULT_TARGET, env = "KONDUIT_TARGET")]
    pub target: PathBuf,

    /// Show the build command without running it (also accepted as -sbc)
    #[arg(long = "show_build_command", visible_alias = "show-build-command")]
    pub show_build_command: bool,

    /// Print additional progress details
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors and the build command
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Parse an explicit argument list (first item is the program name)
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }

    /// Resolves the parsed flags into [`BuildOptions`].
    ///
    /// Detects the host platform if `--os` was not given.
    pub fn build_options(&self) -> Result<BuildOptions, ConfigError> {
        self.options_builder().build()
    }

    fn options_builder(&self) -> BuildOptionsBuilder {
        BuildOptionsBuilder::new()
            .maybe_os(self.os)
            .spin(self.spin)
            .chip(self.chip)
            .source(&self.source)
            .target(&self.target)
            .show_only(self.show_build_command)
    }
}

/// Rewrites `-sbc` to `--show_build_command`.
///
/// clap treats a single dash as a cluster of one-letter flags, so the legacy
/// spelling has to be translated before parsing. Tokens after `--` are left
/// untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            if passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                arg
            } else if arg == LEGACY_SHOW_FLAG {
                OsString::from("--show_build_command")
            } else {
                arg
            }
        })
        .collect()
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, args.quiet),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            output: super::OutputManager::new(false, false),
        }
    }
}

impl RuntimeConfig {
    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }

    /// Print command payload to stdout, never suppressed
    pub fn payload(&self, message: &str) -> std::io::Result<()> {
        self.output.payload(message)
    }
}
