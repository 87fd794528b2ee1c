use crate::application::dto::{RenderRequest, RenderResponse};
use crate::application::factories::FormatterFactory;
use crate::application::registry::FormatterRegistry;
use crate::ports::inbound::ReportRenderingPort;
use crate::ports::outbound::{Formatter, FormatterContext, OutputSink, ProgressReporter};
use crate::shared::Result;
use anyhow::Context;
use std::sync::Arc;
use tracing::debug;

/// Size of the body samples fed to a formatter (bytes)
pub const SAMPLE_CHUNK_SIZE: usize = 8 * 1024;

/// RenderReportUseCase - Drives one formatter through its output lifecycle
///
/// Selects the implementation for the request from the injected registry,
/// instantiates it, then calls `start_output`, `status`, `feed` for each
/// body sample and finally `finish_output`.
///
/// # Type Parameters
/// * `PR` - ProgressReporter implementation
pub struct RenderReportUseCase<PR> {
    registry: Arc<FormatterRegistry>,
    progress_reporter: PR,
}

impl<PR> RenderReportUseCase<PR>
where
    PR: ProgressReporter,
{
    /// Creates a new RenderReportUseCase with injected dependencies
    pub fn new(registry: Arc<FormatterRegistry>, progress_reporter: PR) -> Self {
        Self {
            registry,
            progress_reporter,
        }
    }

    /// Executes the rendering use case
    ///
    /// # Arguments
    /// * `request` - What to render and how
    /// * `output` - Where the formatter writes its output
    ///
    /// # Returns
    /// RenderResponse naming the implementation that rendered the report
    pub fn execute(
        &self,
        request: RenderRequest,
        output: Box<dyn OutputSink>,
    ) -> Result<RenderResponse> {
        self.execute_with(request, move || Ok(output))
    }

    /// Executes the rendering use case, opening the output only once a
    /// formatter has been selected
    ///
    /// A request that cannot be served never touches its destination, so
    /// an existing output file is not truncated by a failed selection.
    pub fn execute_with<F>(
        &self,
        request: RenderRequest,
        open_output: F,
    ) -> Result<RenderResponse>
    where
        F: FnOnce() -> Result<Box<dyn OutputSink>>,
    {
        self.try_execute(&request, open_output)
            .inspect_err(|_| {
                self.progress_reporter
                    .report_error(&format!("Rendering {} aborted", request.result.uri));
            })
    }

    fn try_execute<F>(&self, request: &RenderRequest, open_output: F) -> Result<RenderResponse>
    where
        F: FnOnce() -> Result<Box<dyn OutputSink>>,
    {
        // Step 1: Select the implementation
        let factory = FormatterFactory::new(&self.registry);
        let descriptor = factory.select(&request.format, request.needs_multiple())?;
        self.progress_reporter
            .report(&FormatterFactory::progress_message(descriptor));

        // Step 2: Instantiate it for this request
        let context = FormatterContext::new(request.result.uri.clone(), open_output()?)
            .with_ui_uri(request.ui_uri.clone())
            .with_request_headers(request.request_headers.clone())
            .with_lang(request.lang.clone());
        let mut formatter = descriptor.instantiate(context);
        let formatter_name = descriptor.short_type_name();

        // Step 3: Drive the lifecycle
        formatter
            .start_output()
            .with_context(|| format!("{} failed to start output", formatter_name))?;
        formatter
            .status(&format!("Rendering {}", request.result.uri))
            .with_context(|| format!("{} failed to report status", formatter_name))?;

        let samples_fed = self.feed_body(formatter.as_mut(), request, formatter_name)?;

        formatter
            .finish_output(&request.result)
            .with_context(|| format!("{} failed to finish output", formatter_name))?;

        self.progress_reporter.report_completion(&format!(
            "✅ Rendered {} ({})",
            request.result.uri,
            descriptor.media_type()
        ));

        Ok(RenderResponse {
            format: descriptor.name().unwrap_or_default(),
            formatter: formatter_name,
            media_type: descriptor.media_type(),
            samples_fed,
        })
    }

    /// Feeds the body in `SAMPLE_CHUNK_SIZE` samples, reporting progress
    fn feed_body(
        &self,
        formatter: &mut dyn Formatter,
        request: &RenderRequest,
        formatter_name: &str,
    ) -> Result<usize> {
        let total = request.body.len().div_ceil(SAMPLE_CHUNK_SIZE);
        debug!(bytes = request.body.len(), samples = total, "Feeding body");

        for (index, sample) in request.body.chunks(SAMPLE_CHUNK_SIZE).enumerate() {
            formatter
                .feed(&request.result, sample)
                .with_context(|| format!("{} failed on body sample {}", formatter_name, index))?;
            self.progress_reporter
                .report_progress(index + 1, total, Some(&request.result.uri));
        }

        Ok(total)
    }
}

impl<PR> ReportRenderingPort for RenderReportUseCase<PR>
where
    PR: ProgressReporter,
{
    fn render(
        &self,
        request: RenderRequest,
        output: Box<dyn OutputSink>,
    ) -> Result<RenderResponse> {
        self.execute(request, output)
    }

    fn available_formats(&self) -> Vec<&'static str> {
        self.registry.available_formatters().into_iter().collect()
    }
}
