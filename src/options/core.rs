//! Core BuildOptions struct and path helpers.

use super::{Chip, Platform, Spin};
use std::path::{Path, PathBuf};

/// Directory of the uberjar module inside the source tree.
pub const UBERJAR_MODULE: &str = "konduit-serving-uberjar";

/// Fully resolved options for one build run.
///
/// Constructed via [`BuildOptionsBuilder`](super::BuildOptionsBuilder), which
/// fills in defaults and detects the host platform when none was given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    /// javacpp platform classifier.
    os: Platform,

    /// Feature bundle.
    spin: Spin,

    /// Chip architecture.
    chip: Chip,

    /// Root of the konduit-serving checkout.
    ///
    /// Kept exactly as given; the build command's wrapper token is derived
    /// from its textual form.
    source: PathBuf,

    /// Output jar path, relative to `source` unless absolute.
    target: PathBuf,

    /// Print the build command instead of running it.
    show_only: bool,
}

impl BuildOptions {
    pub(super) fn new(
        os: Platform,
        spin: Spin,
        chip: Chip,
        source: PathBuf,
        target: PathBuf,
        show_only: bool,
    ) -> Self {
        Self {
            os,
            spin,
            chip,
            source,
            target,
            show_only,
        }
    }

    pub fn os(&self) -> Platform {
        self.os
    }

    pub fn spin(&self) -> Spin {
        self.spin
    }

    pub fn chip(&self) -> Chip {
        self.chip
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn show_only(&self) -> bool {
        self.show_only
    }

    /// `<source>/pom.xml`
    pub fn pom_path(&self) -> PathBuf {
        self.source.join("pom.xml")
    }

    /// Where the primary copy lands: `<source>/<target>`.
    pub fn target_path(&self) -> PathBuf {
        self.source.join(&self.target)
    }

    /// `<source>/konduit-serving-uberjar/target`
    pub fn artifact_dir(&self) -> PathBuf {
        self.source.join(UBERJAR_MODULE).join("target")
    }

    /// `<source>/python/tests`, the optional secondary copy destination.
    pub fn python_tests_dir(&self) -> PathBuf {
        self.source.join("python").join("tests")
    }
}
