use crate::shared::Result;
use anyhow::{bail, Context};
use std::fs;
use std::path::Path;

/// Maximum size of an analysis result or captured body file (50 MB)
pub const MAX_INPUT_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Rejects `path` if it is itself a symbolic link.
///
/// The link is inspected, not its target. `operation` names what the caller
/// was about to do, for the error message.
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).with_context(|| {
        format!(
            "Failed to inspect {} before {}",
            path.display(),
            operation
        )
    })?;

    if metadata.is_symlink() {
        bail!(
            "Security: refusing to {} through symbolic link {}",
            operation,
            path.display()
        );
    }
    Ok(())
}

/// Checks that an input file can be read safely and returns its size.
///
/// The path must be a regular file (symbolic links and directories are
/// rejected) no larger than `max_size` bytes.
pub fn validate_input_file(path: &Path, description: &str, max_size: u64) -> Result<u64> {
    let metadata = fs::symlink_metadata(path)
        .with_context(|| format!("Failed to inspect {} {}", description, path.display()))?;

    if metadata.is_symlink() {
        bail!(
            "Security: {} {} is a symbolic link, which is not allowed",
            description,
            path.display()
        );
    }
    if !metadata.is_file() {
        bail!("{} {} is not a regular file", description, path.display());
    }
    if metadata.len() > max_size {
        bail!(
            "Security: {} {} is too large ({} bytes, limit {} bytes)",
            description,
            path.display(),
            metadata.len(),
            max_size
        );
    }
    Ok(metadata.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_not_symlink_accepts_regular_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.html");
        fs::write(&path, "<html>").unwrap();
        assert!(validate_not_symlink(&path, "write").is_ok());
    }

    #[test]
    fn test_not_symlink_missing_path() {
        let dir = TempDir::new().unwrap();
        assert!(validate_not_symlink(&dir.path().join("missing"), "write").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_rejected() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("target.json");
        let link = dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = validate_not_symlink(&link, "write").unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
        let err = validate_input_file(&link, "analysis result", MAX_INPUT_FILE_SIZE).unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }

    #[test]
    fn test_input_file_returns_size() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("body.bin");
        fs::write(&path, [0u8; 42]).unwrap();
        assert_eq!(
            validate_input_file(&path, "body", MAX_INPUT_FILE_SIZE).unwrap(),
            42
        );
    }

    #[test]
    fn test_input_file_rejects_directory() {
        let dir = TempDir::new().unwrap();
        let err = validate_input_file(dir.path(), "analysis result", MAX_INPUT_FILE_SIZE)
            .unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
    }

    #[test]
    fn test_input_file_rejects_oversized() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("body.bin");
        fs::write(&path, [0u8; 16]).unwrap();
        let err = validate_input_file(&path, "body", 8).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }
}
