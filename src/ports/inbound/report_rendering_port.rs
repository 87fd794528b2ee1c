use crate::application::dto::{RenderRequest, RenderResponse};
use crate::ports::outbound::OutputSink;
use crate::shared::Result;

/// ReportRenderingPort - Inbound port for rendering an analysis report
///
/// This port defines the interface that external adapters (CLI, web
/// front-end, etc.) use to turn an analysis result into formatted output.
pub trait ReportRenderingPort {
    /// Renders the request's analysis result into `output`
    ///
    /// # Errors
    /// Returns an error if:
    /// - No formatter satisfies the requested name and multiplicity
    /// - The selected formatter fails during its lifecycle
    /// - Writing to the output sink fails
    fn render(&self, request: RenderRequest, output: Box<dyn OutputSink>) -> Result<RenderResponse>;

    /// Names that can be passed as `RenderRequest::format`
    fn available_formats(&self) -> Vec<&'static str>;
}
