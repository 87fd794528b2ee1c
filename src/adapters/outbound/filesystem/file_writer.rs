use crate::ports::outbound::OutputSink;
use crate::shared::error::AppError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::cell::RefCell;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSink adapter for streaming rendered output into a file
///
/// The file is created (or truncated) once, then every chunk the formatter
/// emits is appended in order.
pub struct FileSink {
    output_path: PathBuf,
    file: RefCell<File>,
}

impl FileSink {
    /// Creates the output file after validating its location
    ///
    /// # Errors
    /// Returns an error if:
    /// - The parent directory does not exist
    /// - The output path exists and is a symbolic link
    /// - The file cannot be created
    pub fn create(output_path: PathBuf) -> Result<Self> {
        Self::validate_parent_directory(&output_path)?;
        Self::validate_output_security(&output_path)?;

        let file = File::create(&output_path).map_err(|e| AppError::FileWriteError {
            path: output_path.clone(),
            details: e.to_string(),
        })?;

        Ok(Self {
            output_path,
            file: RefCell::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.output_path
    }

    fn validate_parent_directory(output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(AppError::FileWriteError {
                    path: output_path.to_path_buf(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Rejects writing through an existing symbolic link
    fn validate_output_security(output_path: &Path) -> Result<()> {
        if output_path.symlink_metadata().is_ok() {
            validate_not_symlink(output_path, "write").map_err(|e| AppError::FileWriteError {
                path: output_path.to_path_buf(),
                details: e.to_string(),
            })?;
        }
        Ok(())
    }
}

impl OutputSink for FileSink {
    fn write(&self, chunk: &str) -> Result<()> {
        self.file
            .borrow_mut()
            .write_all(chunk.as_bytes())
            .map_err(|e| {
                AppError::FileWriteError {
                    path: self.output_path.clone(),
                    details: e.to_string(),
                }
                .into()
            })
    }
}

/// StdoutSink adapter for streaming rendered output to stdout
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for StdoutSink {
    fn write(&self, chunk: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(chunk.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))
    }
}
