use red_formatter::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock AnalysisResultReader serving results and bodies from memory
#[derive(Default)]
#[allow(dead_code)]
pub struct MockResultReader {
    results: HashMap<PathBuf, AnalysisResult>,
    bodies: HashMap<PathBuf, Vec<u8>>,
}

#[allow(dead_code)]
impl MockResultReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_result(mut self, path: impl Into<PathBuf>, result: AnalysisResult) -> Self {
        self.results.insert(path.into(), result);
        self
    }

    pub fn with_body(mut self, path: impl Into<PathBuf>, body: impl Into<Vec<u8>>) -> Self {
        self.bodies.insert(path.into(), body.into());
        self
    }
}

impl AnalysisResultReader for MockResultReader {
    fn read_result(&self, path: &Path) -> Result<AnalysisResult> {
        self.results.get(path).cloned().ok_or_else(|| {
            AppError::ResultFileNotFound {
                path: path.to_path_buf(),
                suggestion: "mock has no result for this path".to_string(),
            }
            .into()
        })
    }

    fn read_body(&self, path: &Path) -> Result<Vec<u8>> {
        self.bodies.get(path).cloned().ok_or_else(|| {
            AppError::FileReadError {
                path: path.to_path_buf(),
                details: "mock has no body for this path".to_string(),
            }
            .into()
        })
    }
}
