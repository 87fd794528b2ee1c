use crate::ports::outbound::AnalysisResultReader;
use crate::report::domain::AnalysisResult;
use crate::shared::error::AppError;
use crate::shared::security::{validate_input_file, MAX_INPUT_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading analysis output from the file system
///
/// Implements the AnalysisResultReader port: analysis results are JSON
/// documents, bodies are read as raw bytes.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a whole input file after the symlink, file type and size checks
    fn safe_read_file(&self, path: &Path, description: &str) -> Result<Vec<u8>> {
        validate_input_file(path, description, MAX_INPUT_FILE_SIZE)?;
        fs::read(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", description, e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisResultReader for FileSystemReader {
    fn read_result(&self, path: &Path) -> Result<AnalysisResult> {
        if !path.exists() {
            return Err(AppError::ResultFileNotFound {
                path: path.to_path_buf(),
                suggestion: "Pass the JSON document written by the analysis engine with --input."
                    .to_string(),
            }
            .into());
        }

        let content = self
            .safe_read_file(path, "analysis result")
            .map_err(|e| AppError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        serde_json::from_slice(&content).map_err(|e| {
            AppError::ResultParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn read_body(&self, path: &Path) -> Result<Vec<u8>> {
        self.safe_read_file(path, "response body").map_err(|e| {
            AppError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
