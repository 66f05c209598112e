//! Temporary file management utilities.
//!
//! Scratch directories for encoder output, and staging files that the encoder
//! writes into before the result is moved to its final path. Both are removed
//! on drop unless explicitly kept, so a failed run leaves nothing behind and
//! never touches a file that already exists at the destination.

use crate::error::CoreResult;
use crate::utils::ensure_parent_dir;
use std::path::{Path, PathBuf};
use tempfile::{Builder as TempFileBuilder, TempDir, TempPath};

/// Creates a temporary directory with prefix under the system temp dir.
/// Auto-cleaned when dropped.
pub fn create_temp_dir(prefix: &str) -> CoreResult<TempDir> {
    Ok(TempFileBuilder::new().prefix(prefix).tempdir()?)
}

/// Disables cleanup of `dir` and returns its path.
#[must_use]
pub fn keep_temp_dir(dir: TempDir) -> PathBuf {
    dir.keep()
}

/// Reserves a staging file next to `output_path`, with the same extension so
/// the encoder picks the same container. Deleted on drop.
pub fn staging_path_for(output_path: &Path) -> CoreResult<TempPath> {
    ensure_parent_dir(output_path)?;
    let parent = output_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let suffix = output_path
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    let file = TempFileBuilder::new()
        .prefix(".vidslider_")
        .suffix(&suffix)
        .tempfile_in(parent)?;
    Ok(file.into_temp_path())
}

/// Moves a finished staging file over `output_path`.
pub fn commit_staged(staged: TempPath, output_path: &Path) -> CoreResult<()> {
    staged.persist(output_path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_removed_on_drop() -> CoreResult<()> {
        let dir = create_temp_dir("vidslider_")?;
        let path = dir.path().to_path_buf();
        assert!(path.exists());
        assert!(
            path.file_name()
                .is_some_and(|n| n.to_string_lossy().starts_with("vidslider_"))
        );
        drop(dir);
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_kept_dir_survives_drop() -> CoreResult<()> {
        let path = keep_temp_dir(create_temp_dir("kept_")?);
        assert!(path.exists());
        std::fs::remove_dir_all(&path)?;
        Ok(())
    }

    #[test]
    fn test_staging_file_sits_next_to_output() -> CoreResult<()> {
        let base = tempfile::tempdir()?;
        let output = base.path().join("clips").join("red.mp4");
        let staged = staging_path_for(&output)?;

        assert_eq!(staged.parent(), output.parent());
        assert_eq!(staged.extension().and_then(|e| e.to_str()), Some("mp4"));
        assert!(staged.exists());
        assert!(!output.exists());
        Ok(())
    }

    #[test]
    fn test_dropped_staging_file_keeps_existing_output() -> CoreResult<()> {
        let base = tempfile::tempdir()?;
        let output = base.path().join("keep.mp4");
        std::fs::write(&output, b"previous clip")?;

        let staged = staging_path_for(&output)?;
        let staged_path = staged.to_path_buf();
        drop(staged);

        assert!(!staged_path.exists());
        assert_eq!(std::fs::read(&output)?, b"previous clip");
        Ok(())
    }

    #[test]
    fn test_commit_replaces_output() -> CoreResult<()> {
        let base = tempfile::tempdir()?;
        let output = base.path().join("blue.mp4");
        std::fs::write(&output, b"old")?;

        let staged = staging_path_for(&output)?;
        std::fs::write(&staged, b"new")?;
        commit_staged(staged, &output)?;

        assert_eq!(std::fs::read(&output)?, b"new");
        Ok(())
    }
}
