//! File system utilities for artifact delivery.

use crate::error::{BuildError, Result};
use std::path::Path;
use tokio::fs;

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Overwrites an existing destination. When both paths resolve to the same
/// file nothing is written and the file is left as is. Fails with
/// [`BuildError::ArtifactMissing`] if the source does not exist or is not a
/// regular file.
pub async fn copy_file(from: &Path, to: &Path) -> Result<u64> {
    let len = match fs::metadata(from).await {
        Ok(metadata) if metadata.is_file() => metadata.len(),
        Ok(_) => {
            log::warn!("{} exists but is not a file", from.display());
            return Err(BuildError::ArtifactMissing {
                path: from.to_path_buf(),
            });
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(BuildError::ArtifactMissing {
                path: from.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    if is_same_file(from, to).await? {
        log::debug!(
            "{} and {} are the same file, skipping copy",
            from.display(),
            to.display()
        );
        return Ok(len);
    }

    if let Some(dest_dir) = to.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dest_dir).await?;
    }

    let bytes = fs::copy(from, to).await?;
    log::debug!(
        "Copied {} -> {} ({} bytes)",
        from.display(),
        to.display(),
        bytes
    );
    Ok(bytes)
}

/// Whether `to` already exists and resolves to the same file as `from`.
async fn is_same_file(from: &Path, to: &Path) -> Result<bool> {
    let to = match fs::canonicalize(to).await {
        Ok(path) => path,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e.into()),
    };
    Ok(fs::canonicalize(from).await? == to)
}

/// Whether `path` exists and is a directory. Errors count as absent.
pub async fn is_dir(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}
