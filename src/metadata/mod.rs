//! Project version discovery from the Maven `pom.xml`.

use crate::error::{BuildError, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Matches `<version>X.Y.Z...</version>`.
///
/// The dots are unescaped, so any separator between the numeric components
/// matches. Suffixes such as `-SNAPSHOT` are part of the capture.
#[allow(clippy::expect_used)]
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<version>(\d+.\d+.\d+\S*)</version>").expect("version pattern is valid")
});

/// Returns the first `<version>` in `content`, or `None` if there is none.
///
/// # Examples
///
/// ```
/// use konduit_build_jar::metadata::find_version;
///
/// let pom = "<project><version>1.2.3-SNAPSHOT</version></project>";
/// assert_eq!(find_version(pom), Some("1.2.3-SNAPSHOT"));
/// ```
pub fn find_version(content: &str) -> Option<&str> {
    VERSION_PATTERN
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Reads `<source>/pom.xml` and extracts the project version.
///
/// # Errors
///
/// - [`BuildError::Manifest`] if the file cannot be read
/// - [`BuildError::VersionNotFound`] if it contains no version element
pub async fn extract_version(source: &Path) -> Result<String> {
    let pom_path = source.join("pom.xml");

    let content = tokio::fs::read_to_string(&pom_path)
        .await
        .map_err(|e| BuildError::Manifest {
            path: pom_path.clone(),
            source: e,
        })?;

    let version = find_version(&content).ok_or_else(|| BuildError::VersionNotFound {
        path: pom_path.clone(),
    })?;

    log::debug!("Found version {} in {}", version, pom_path.display());
    Ok(version.to_string())
}
