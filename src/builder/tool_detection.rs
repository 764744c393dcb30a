//! Maven wrapper detection.
//!
//! The build is always driven through the wrapper shipped in the source
//! tree. A system `mvn` is only looked up to improve the error message when
//! the wrapper is missing.

use super::command::WRAPPER_NAME;
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

static WINDOWS_CANDIDATES: [&str; 2] = ["mvnw.cmd", WRAPPER_NAME];
static UNIX_CANDIDATES: [&str; 1] = [WRAPPER_NAME];

/// Locates the Maven wrapper script inside `source`.
///
/// On Windows the shell resolves `mvnw` to `mvnw.cmd`, so either file is
/// accepted there.
pub fn find_wrapper(source: &Path) -> Result<PathBuf, ConfigError> {
    let candidates = if cfg!(windows) {
        WINDOWS_CANDIDATES.as_slice()
    } else {
        UNIX_CANDIDATES.as_slice()
    };

    for candidate in candidates {
        let path = source.join(candidate);
        if path.is_file() {
            log::debug!("Found Maven wrapper at: {}", path.display());
            return Ok(path);
        }
    }

    let system_mvn = match which::which("mvn") {
        Ok(path) => {
            log::debug!("Wrapper missing, system mvn available at: {}", path.display());
            Some(path)
        }
        Err(e) => {
            log::debug!("mvn not found in PATH: {}", e);
            None
        }
    };

    Err(ConfigError::WrapperMissing {
        path: source.join(WRAPPER_NAME),
        system_mvn,
    })
}
