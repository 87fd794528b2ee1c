use crate::report::domain::{AnalysisResult, Header};

/// RenderRequest - Input DTO for the report rendering use case
///
/// Bundles the requested format with everything a formatter is
/// constructed from and fed with.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Requested format name; unknown names fall back to the default format
    pub format: String,
    /// Whether the caller needs one output stream for several subjects
    pub multiple: bool,
    /// The analysis result to render
    pub result: AnalysisResult,
    /// Captured response body, fed to the formatter in samples
    pub body: Vec<u8>,
    /// Base URI of the user interface for cross-links
    pub ui_uri: String,
    /// Request headers that produced the analyzed response
    pub request_headers: Vec<Header>,
    /// Language tag for the output
    pub lang: String,
}

impl RenderRequest {
    pub fn new(format: impl Into<String>, result: AnalysisResult) -> Self {
        Self {
            format: format.into(),
            multiple: false,
            result,
            body: Vec::new(),
            ui_uri: String::new(),
            request_headers: Vec::new(),
            lang: "en".to_string(),
        }
    }

    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn with_ui_uri(mut self, ui_uri: impl Into<String>) -> Self {
        self.ui_uri = ui_uri.into();
        self
    }

    pub fn with_request_headers(mut self, request_headers: Vec<Header>) -> Self {
        self.request_headers = request_headers;
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Multi-subject rendering is needed when asked for explicitly or when
    /// the result carries several subjects
    pub fn needs_multiple(&self) -> bool {
        self.multiple || self.result.has_subjects()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = RenderRequest::new("txt", AnalysisResult::new("http://example.com/"));
        assert_eq!(request.format, "txt");
        assert_eq!(request.lang, "en");
        assert!(request.body.is_empty());
        assert!(!request.needs_multiple());
    }

    #[test]
    fn test_needs_multiple_from_flag() {
        let request = RenderRequest::new("txt", AnalysisResult::new("http://example.com/"))
            .with_multiple(true);
        assert!(request.needs_multiple());
    }

    #[test]
    fn test_needs_multiple_from_subjects() {
        let result = AnalysisResult::new("http://example.com/")
            .with_subject(AnalysisResult::new("http://example.com/a"));
        assert!(RenderRequest::new("txt", result).needs_multiple());
    }
}
