//! Uberjar artifact naming and delivery.

use crate::error::Result;
use crate::options::{BuildOptions, UBERJAR_MODULE};
use crate::utils::fs::{copy_file, is_dir};
use std::path::PathBuf;

/// File name of the secondary copy used by the Python test suite.
pub const PYTHON_TESTS_JAR: &str = "konduit.jar";

/// `konduit-serving-uberjar-<version>-<spin>-<os>-<chip>.jar`
pub fn artifact_name(options: &BuildOptions, version: &str) -> String {
    format!(
        "{}-{}-{}-{}-{}.jar",
        UBERJAR_MODULE,
        version,
        options.spin(),
        options.os(),
        options.chip()
    )
}

/// Where Maven leaves the uberjar for this build.
pub fn artifact_path(options: &BuildOptions, version: &str) -> PathBuf {
    options.artifact_dir().join(artifact_name(options, version))
}

/// Copies the built uberjar to `<source>/<target>`.
///
/// # Returns
///
/// The destination path.
///
/// # Errors
///
/// [`BuildError::ArtifactMissing`](crate::error::BuildError::ArtifactMissing)
/// when the expected jar does not exist, e.g. because the pom version and the
/// produced file name disagree.
pub async fn copy_artifact(options: &BuildOptions, version: &str) -> Result<PathBuf> {
    let from = artifact_path(options, version);
    let to = options.target_path();
    copy_file(&from, &to).await?;
    log::info!("Copied {} to {}", from.display(), to.display());
    Ok(to)
}

/// Copies the delivered jar into `<source>/python/tests` when that directory
/// exists.
///
/// # Returns
///
/// `Some(destination)` if a copy was made, `None` if the directory is absent.
pub async fn copy_secondary(options: &BuildOptions) -> Result<Option<PathBuf>> {
    let tests_dir = options.python_tests_dir();
    if !is_dir(&tests_dir).await {
        log::debug!(
            "{} not present, skipping secondary copy",
            tests_dir.display()
        );
        return Ok(None);
    }

    let to = tests_dir.join(PYTHON_TESTS_JAR);
    copy_file(&options.target_path(), &to).await?;
    log::info!("Copied jar to {}", to.display());
    Ok(Some(to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BuildError;
    use crate::options::{BuildOptionsBuilder, Chip, Platform, Spin};
    use std::path::Path;

    fn options(source: &Path) -> BuildOptions {
        options_with_target(source, "out.jar")
    }

    fn options_with_target(source: &Path, target: &str) -> BuildOptions {
        BuildOptionsBuilder::new()
            .os(Platform::LinuxX86_64)
            .spin(Spin::Minimal)
            .chip(Chip::Cpu)
            .source(source)
            .target(target)
            .build()
            .unwrap()
    }

    fn write_artifact(options: &BuildOptions, version: &str, contents: &[u8]) {
        let path = artifact_path(options, version);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    #[test]
    fn name_follows_maven_classifier_layout() {
        let opts = options(Path::new("/repo"));
        assert_eq!(
            artifact_name(&opts, "9.9.9"),
            "konduit-serving-uberjar-9.9.9-minimal-linux-x86_64-cpu.jar"
        );
        assert_eq!(
            artifact_path(&opts, "9.9.9"),
            Path::new(
                "/repo/konduit-serving-uberjar/target/konduit-serving-uberjar-9.9.9-minimal-linux-x86_64-cpu.jar"
            )
        );
    }

    #[tokio::test]
    async fn copies_built_jar_to_target() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(dir.path());
        write_artifact(&opts, "9.9.9", b"uberjar");

        let delivered = copy_artifact(&opts, "9.9.9").await.unwrap();
        assert_eq!(delivered, dir.path().join("out.jar"));
        assert_eq!(std::fs::read(delivered).unwrap(), b"uberjar");
    }

    #[tokio::test]
    async fn version_mismatch_reports_expected_path() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(dir.path());
        write_artifact(&opts, "1.0.0", b"uberjar");

        match copy_artifact(&opts, "2.0.0").await {
            Err(BuildError::ArtifactMissing { path }) => {
                assert_eq!(path, artifact_path(&opts, "2.0.0"));
            }
            other => panic!("expected ArtifactMissing, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn secondary_copy_only_when_tests_dir_exists() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(dir.path());
        std::fs::write(opts.target_path(), b"uberjar").unwrap();

        assert_eq!(copy_secondary(&opts).await.unwrap(), None);

        std::fs::create_dir_all(opts.python_tests_dir()).unwrap();
        let copied = copy_secondary(&opts).await.unwrap().unwrap();
        assert_eq!(copied, dir.path().join("python/tests/konduit.jar"));
        assert_eq!(std::fs::read(copied).unwrap(), b"uberjar");
    }

    #[tokio::test]
    async fn target_inside_python_tests_is_not_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options_with_target(dir.path(), "python/tests/konduit.jar");
        std::fs::create_dir_all(opts.python_tests_dir()).unwrap();
        write_artifact(&opts, "9.9.9", b"uberjar");

        let delivered = copy_artifact(&opts, "9.9.9").await.unwrap();
        let copied = copy_secondary(&opts).await.unwrap().unwrap();
        assert_eq!(copied, delivered);
        assert_eq!(std::fs::read(delivered).unwrap(), b"uberjar");
    }

    #[tokio::test]
    async fn target_equal_to_built_jar_is_not_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let target = format!(
            "konduit-serving-uberjar/target/{}",
            artifact_name(&options(dir.path()), "9.9.9")
        );
        let opts = options_with_target(dir.path(), &target);
        write_artifact(&opts, "9.9.9", b"uberjar");

        let delivered = copy_artifact(&opts, "9.9.9").await.unwrap();
        assert_eq!(delivered, artifact_path(&opts, "9.9.9"));
        assert_eq!(std::fs::read(delivered).unwrap(), b"uberjar");
    }
}
