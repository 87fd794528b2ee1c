use crate::report::domain::AnalysisResult;
use crate::shared::Result;
use std::path::Path;

/// AnalysisResultReader port for loading what the analysis engine produced
///
/// Abstracts where serialized analysis results and captured response
/// bodies come from, so the rendering use case can be tested without the
/// filesystem.
pub trait AnalysisResultReader {
    /// Reads and deserializes an analysis result
    ///
    /// # Errors
    /// Returns an error if the source is missing, unreadable or not a valid
    /// analysis result document
    fn read_result(&self, path: &Path) -> Result<AnalysisResult>;

    /// Reads a captured response body
    ///
    /// # Errors
    /// Returns an error if the source is missing or unreadable
    fn read_body(&self, path: &Path) -> Result<Vec<u8>>;
}
