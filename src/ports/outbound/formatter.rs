use crate::ports::outbound::OutputSink;
use crate::report::domain::{AnalysisResult, Header};
use crate::shared::error::FormatterError;
use crate::shared::Result;

/// Formatter port: renders one analysis report in a presentation format.
///
/// A formatter is driven through `start_output`, zero or more `feed`
/// calls, and `finish_output`; `status` may be called at any point.
/// Every operation fails with [`FormatterError::NotImplemented`] unless the
/// implementation overrides it, so a formatter that forgets part of its
/// lifecycle reports a hard error instead of producing partial output.
///
/// All output goes through the [`OutputSink`] given at construction as
/// Unicode text; formatters never encode bytes themselves.
pub trait Formatter {
    /// Feeds one body sample together with the analysis accumulated so far
    ///
    /// # Arguments
    /// * `result` - The analysis result built so far
    /// * `sample` - The next chunk of the subject's body
    fn feed(&mut self, result: &AnalysisResult, sample: &[u8]) -> Result<()> {
        let _ = (result, sample);
        Err(not_implemented::<Self>("feed"))
    }

    /// Emits the preamble (document head, opening markup)
    fn start_output(&mut self) -> Result<()> {
        Err(not_implemented::<Self>("start_output"))
    }

    /// Emits a transient progress message
    ///
    /// Must not assume `start_output` has been called.
    fn status(&mut self, message: &str) -> Result<()> {
        let _ = message;
        Err(not_implemented::<Self>("status"))
    }

    /// Emits the closing content summarizing the final analysis
    ///
    /// This is the last lifecycle call for an instance.
    fn finish_output(&mut self, result: &AnalysisResult) -> Result<()> {
        let _ = result;
        Err(not_implemented::<Self>("finish_output"))
    }
}

fn not_implemented<T: ?Sized>(operation: &'static str) -> anyhow::Error {
    FormatterError::NotImplemented {
        formatter: std::any::type_name::<T>(),
        operation,
    }
    .into()
}

/// Static description of a formatter implementation type.
///
/// Implementing this trait is what makes a formatter registrable: the
/// registry reads `NAME`, `MEDIA_TYPE` and `CAN_MULTIPLE` when the type is
/// registered and later builds instances through [`FormatterClass::create`].
/// A `NAME` of `None` marks a shared base that is never selectable.
pub trait FormatterClass: Formatter + Sized + 'static {
    /// Name the implementation is selectable under
    const NAME: Option<&'static str>;

    /// Media type of the produced output (informational)
    const MEDIA_TYPE: &'static str;

    /// Whether one output stream can hold several analyzed subjects
    const CAN_MULTIPLE: bool = false;

    /// Builds an instance for one request
    fn create(context: FormatterContext) -> Self;
}

/// Per-request inputs every formatter is constructed from.
pub struct FormatterContext {
    /// Base URI of the user interface, used for cross-links in output
    pub ui_uri: String,
    /// URI of the resource being analyzed
    pub uri: String,
    /// Request headers that produced the analyzed response
    pub request_headers: Vec<Header>,
    /// Language tag for the output
    pub lang: String,
    /// Destination for rendered text
    pub output: Box<dyn OutputSink>,
}

impl FormatterContext {
    pub fn new(uri: impl Into<String>, output: Box<dyn OutputSink>) -> Self {
        Self {
            ui_uri: String::new(),
            uri: uri.into(),
            request_headers: Vec::new(),
            lang: "en".to_string(),
            output,
        }
    }

    pub fn with_ui_uri(mut self, ui_uri: impl Into<String>) -> Self {
        self.ui_uri = ui_uri.into();
        self
    }

    pub fn with_request_headers(mut self, headers: Vec<Header>) -> Self {
        self.request_headers = headers;
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Writes one chunk to the output sink
    pub fn write(&self, chunk: &str) -> Result<()> {
        self.output.write(chunk)
    }
}

impl std::fmt::Debug for FormatterContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatterContext")
            .field("ui_uri", &self.ui_uri)
            .field("uri", &self.uri)
            .field("request_headers", &self.request_headers)
            .field("lang", &self.lang)
            .finish_non_exhaustive()
    }
}
