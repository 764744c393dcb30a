//! Builder for constructing BuildOptions.

use super::{BuildOptions, Chip, Platform, Spin};
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Default source directory.
pub const DEFAULT_SOURCE: &str = ".";

/// Default output jar name.
pub const DEFAULT_TARGET: &str = "konduit.jar";

/// Builder for constructing [`BuildOptions`].
///
/// Unset fields take their CLI defaults. The platform is only detected from
/// the host when it was not set, so an explicit platform works on any host.
///
/// # Examples
///
/// ```
/// use konduit_build_jar::options::{BuildOptionsBuilder, Chip, Platform, Spin};
///
/// let options = BuildOptionsBuilder::new()
///     .os(Platform::LinuxArmhf)
///     .chip(Chip::Arm)
///     .spin(Spin::Minimal)
///     .source("/src/konduit-serving")
///     .build()
///     .unwrap();
/// assert_eq!(options.target().to_str(), Some("konduit.jar"));
/// ```
#[derive(Default)]
pub struct BuildOptionsBuilder {
    os: Option<Platform>,
    spin: Spin,
    chip: Chip,
    source: Option<PathBuf>,
    target: Option<PathBuf>,
    show_only: bool,
}

impl BuildOptionsBuilder {
    /// Creates a new options builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the target platform.
    ///
    /// Default: detected from the running host
    pub fn os(mut self, os: Platform) -> Self {
        self.os = Some(os);
        self
    }

    /// Sets the platform only if one is given; `None` keeps host detection.
    pub fn maybe_os(mut self, os: Option<Platform>) -> Self {
        self.os = os.or(self.os);
        self
    }

    /// Default: [`Spin::All`]
    pub fn spin(mut self, spin: Spin) -> Self {
        self.spin = spin;
        self
    }

    /// Default: [`Chip::Cpu`]
    pub fn chip(mut self, chip: Chip) -> Self {
        self.chip = chip;
        self
    }

    /// Sets the source checkout directory.
    ///
    /// Default: `.`
    pub fn source<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the output jar path, resolved against the source directory.
    ///
    /// Default: `konduit.jar`
    pub fn target<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.target = Some(path.as_ref().to_path_buf());
        self
    }

    /// Default: false
    pub fn show_only(mut self, show_only: bool) -> Self {
        self.show_only = show_only;
        self
    }

    /// Builds the options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnrecognizedPlatform`] if no platform was set
    /// and the host platform is not recognized.
    pub fn build(self) -> Result<BuildOptions, ConfigError> {
        self.build_with_host(Platform::detect)
    }

    /// Builds the options with a custom host platform probe.
    pub fn build_with_host<F>(self, detect: F) -> Result<BuildOptions, ConfigError>
    where
        F: FnOnce() -> Result<Platform, ConfigError>,
    {
        let os = match self.os {
            Some(os) => os,
            None => {
                let detected = detect()?;
                log::debug!("No --os given, detected host platform {}", detected);
                detected
            }
        };

        Ok(BuildOptions::new(
            os,
            self.spin,
            self.chip,
            self.source.unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE)),
            self.target.unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET)),
            self.show_only,
        ))
    }
}
