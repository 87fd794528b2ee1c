use super::markup::{escape_html, js_string_literal, note_breakdown, subject_link};
use crate::application::registry::FormatterRegistry;
use crate::ports::outbound::{Formatter, FormatterClass, FormatterContext};
use crate::report::domain::{AnalysisResult, Header, LifecycleState};
use crate::shared::{FormatterResult, Result};

const MEDIA_TYPE: &str = "text/html";

/// Registers the HTML formatters in definition order
pub(super) fn register(registry: &mut FormatterRegistry) -> FormatterResult<()> {
    registry.register::<BaseHtmlFormatter>()?;
    registry.register::<SingleEntryHtmlFormatter>()?;
    registry.register::<TableHtmlFormatter>()?;
    Ok(())
}

/// Shared base of the HTML formatters
///
/// Owns the document preamble, status updates and body sampling; the
/// selectable formatters wrap it and render their own closing content.
/// It has no name, so registering it never makes it selectable.
///
/// A status received before `start_output` is held back and written right
/// after the preamble, so the document always begins with its doctype.
pub struct BaseHtmlFormatter {
    context: FormatterContext,
    state: LifecycleState,
    sampled_bytes: usize,
    pending_status: Option<String>,
}

impl BaseHtmlFormatter {
    fn start(&mut self, formatter: &'static str) -> Result<()> {
        self.state.start(formatter)?;
        let lang = escape_html(&self.context.lang);
        let title = escape_html(&self.context.uri);
        self.context.write(&format!(
            "<!DOCTYPE html>\n\
             <html lang=\"{lang}\">\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <title>RED: {title}</title>\n\
             </head>\n\
             <body>\n\
             <div id=\"red_status\"></div>\n"
        ))?;
        match self.pending_status.take() {
            Some(message) => self.write_status_script(&message),
            None => Ok(()),
        }
    }

    fn write_status(&mut self, formatter: &'static str, message: &str) -> Result<()> {
        self.state.status(formatter)?;
        if self.state == LifecycleState::Constructed {
            // Only the latest message is visible in the status element
            self.pending_status = Some(message.to_string());
            return Ok(());
        }
        self.write_status_script(message)
    }

    fn write_status_script(&self, message: &str) -> Result<()> {
        self.context.write(&format!(
            "<script>document.getElementById('red_status').textContent = {};</script>\n",
            js_string_literal(message)
        ))
    }

    fn sample(&mut self, formatter: &'static str, sample: &[u8]) -> Result<()> {
        self.state.feed(formatter)?;
        self.sampled_bytes += sample.len();
        Ok(())
    }

    fn finish(&mut self, formatter: &'static str, content: &str) -> Result<()> {
        self.state.finish(formatter)?;
        self.context.write(content)?;
        self.context.write("</body>\n</html>\n")
    }

    fn link(&self, uri: &str) -> String {
        escape_html(&subject_link(&self.context.ui_uri, uri))
    }
}

fn render_headers(output: &mut String, class: &str, headers: &[Header]) {
    output.push_str(&format!("<pre class=\"{}\">", class));
    for header in headers {
        output.push_str(&escape_html(&header.to_string()));
        output.push('\n');
    }
    output.push_str("</pre>\n");
}

impl Formatter for BaseHtmlFormatter {
    fn feed(&mut self, _result: &AnalysisResult, sample: &[u8]) -> Result<()> {
        self.sample("BaseHtmlFormatter", sample)
    }

    fn start_output(&mut self) -> Result<()> {
        self.start("BaseHtmlFormatter")
    }

    fn status(&mut self, message: &str) -> Result<()> {
        self.write_status("BaseHtmlFormatter", message)
    }

    fn finish_output(&mut self, _result: &AnalysisResult) -> Result<()> {
        self.finish("BaseHtmlFormatter", "")
    }
}

impl FormatterClass for BaseHtmlFormatter {
    const NAME: Option<&'static str> = None;
    const MEDIA_TYPE: &'static str = MEDIA_TYPE;

    fn create(context: FormatterContext) -> Self {
        Self {
            context,
            state: LifecycleState::default(),
            sampled_bytes: 0,
            pending_status: None,
        }
    }
}

/// HTML report for a single analyzed resource
pub struct SingleEntryHtmlFormatter {
    base: BaseHtmlFormatter,
}

impl SingleEntryHtmlFormatter {
    const TYPE_NAME: &'static str = "SingleEntryHtmlFormatter";

    fn render(&self, result: &AnalysisResult) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "<h1><a href=\"{}\">{}</a></h1>\n",
            self.base.link(&result.uri),
            escape_html(&result.uri)
        ));
        output.push_str(&format!(
            "<p class=\"status\">{}</p>\n",
            escape_html(&result.status_line())
        ));

        if !self.base.context.request_headers.is_empty() {
            output.push_str("<h2>Request Headers</h2>\n");
            render_headers(
                &mut output,
                "request-headers",
                &self.base.context.request_headers,
            );
        }

        output.push_str("<h2>Response Headers</h2>\n");
        render_headers(&mut output, "response-headers", &result.response_headers);

        if self.base.sampled_bytes > 0 {
            output.push_str(&format!(
                "<p class=\"body-sample\">{} body bytes sampled</p>\n",
                self.base.sampled_bytes
            ));
        }

        output.push_str("<h2>Notes</h2>\n<ul class=\"notes\">\n");
        for note in &result.notes {
            output.push_str(&format!(
                "<li class=\"note {}\">{}</li>\n",
                note.level,
                escape_html(&note.summary)
            ));
        }
        output.push_str("</ul>\n");
        output
    }
}

impl Formatter for SingleEntryHtmlFormatter {
    fn feed(&mut self, _result: &AnalysisResult, sample: &[u8]) -> Result<()> {
        self.base.sample(Self::TYPE_NAME, sample)
    }

    fn start_output(&mut self) -> Result<()> {
        self.base.start(Self::TYPE_NAME)
    }

    fn status(&mut self, message: &str) -> Result<()> {
        self.base.write_status(Self::TYPE_NAME, message)
    }

    fn finish_output(&mut self, result: &AnalysisResult) -> Result<()> {
        let content = self.render(result);
        self.base.finish(Self::TYPE_NAME, &content)
    }
}

impl FormatterClass for SingleEntryHtmlFormatter {
    const NAME: Option<&'static str> = Some("html");
    const MEDIA_TYPE: &'static str = MEDIA_TYPE;

    fn create(context: FormatterContext) -> Self {
        Self {
            base: BaseHtmlFormatter::create(context),
        }
    }
}

/// HTML table summarizing several analyzed resources, one row each
pub struct TableHtmlFormatter {
    base: BaseHtmlFormatter,
}

impl TableHtmlFormatter {
    const TYPE_NAME: &'static str = "TableHtmlFormatter";

    fn render(&self, result: &AnalysisResult) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "<h1>{}</h1>\n",
            escape_html(&result.uri)
        ));
        output.push_str("<table class=\"subjects\">\n");
        output.push_str("<tr><th>URI</th><th>Status</th><th>Notes</th></tr>\n");
        for subject in result.rendered_subjects() {
            output.push_str(&format!(
                "<tr><td><a href=\"{}\">{}</a></td><td>{}</td><td>{}</td></tr>\n",
                self.base.link(&subject.uri),
                escape_html(&subject.uri),
                escape_html(&subject.status_line()),
                note_breakdown(&subject.notes)
            ));
        }
        output.push_str("</table>\n");
        output
    }
}

impl Formatter for TableHtmlFormatter {
    fn feed(&mut self, _result: &AnalysisResult, sample: &[u8]) -> Result<()> {
        self.base.sample(Self::TYPE_NAME, sample)
    }

    fn start_output(&mut self) -> Result<()> {
        self.base.start(Self::TYPE_NAME)
    }

    fn status(&mut self, message: &str) -> Result<()> {
        self.base.write_status(Self::TYPE_NAME, message)
    }

    fn finish_output(&mut self, result: &AnalysisResult) -> Result<()> {
        let content = self.render(result);
        self.base.finish(Self::TYPE_NAME, &content)
    }
}

impl FormatterClass for TableHtmlFormatter {
    const NAME: Option<&'static str> = Some("html");
    const MEDIA_TYPE: &'static str = MEDIA_TYPE;
    const CAN_MULTIPLE: bool = true;

    fn create(context: FormatterContext) -> Self {
        Self {
            base: BaseHtmlFormatter::create(context),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::memory::BufferSink;
    use crate::report::domain::NoteLevel;
    use crate::shared::error::FormatterError;

    fn context(sink: &BufferSink) -> FormatterContext {
        FormatterContext::new("http://example.com/", Box::new(sink.clone()))
            .with_ui_uri("https://redbot.example/")
    }

    fn sample_result() -> AnalysisResult {
        AnalysisResult::new("http://example.com/")
            .with_status(200, "OK")
            .with_header("Content-Type", "text/html")
            .with_note(NoteLevel::Good, "The resource is <cacheable>")
    }

    #[test]
    fn test_single_entry_full_lifecycle() {
        let sink = BufferSink::new();
        let mut formatter = SingleEntryHtmlFormatter::create(context(&sink));
        let result = sample_result();

        formatter.start_output().unwrap();
        formatter.feed(&result, b"<html>").unwrap();
        formatter.feed(&result, b"</html>").unwrap();
        formatter.finish_output(&result).unwrap();

        let html = sink.contents();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("<p class=\"status\">200 OK</p>"));
        assert!(html.contains("Content-Type: text/html"));
        assert!(html.contains("13 body bytes sampled"));
        assert!(html.contains("<li class=\"note good\">The resource is &lt;cacheable&gt;</li>"));
        assert!(html.contains(
            "href=\"https://redbot.example/?uri=http%3A%2F%2Fexample.com%2F\""
        ));
        assert!(html.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn test_request_headers_rendered_when_present() {
        let sink = BufferSink::new();
        let context =
            context(&sink).with_request_headers(vec![Header::new("Accept-Encoding", "gzip")]);
        let mut formatter = SingleEntryHtmlFormatter::create(context);
        formatter.start_output().unwrap();
        formatter.finish_output(&sample_result()).unwrap();

        let html = sink.contents();
        assert!(html.contains("<h2>Request Headers</h2>"));
        assert!(html.contains("Accept-Encoding: gzip"));
        assert!(!html.contains("body bytes sampled"));
    }

    #[test]
    fn test_status_before_start_is_written_after_preamble() {
        let sink = BufferSink::new();
        let mut formatter = SingleEntryHtmlFormatter::create(context(&sink));
        formatter.status("Connecting").unwrap();
        formatter.status("Fetching \"/\"...").unwrap();
        assert!(sink.is_empty());

        formatter.start_output().unwrap();
        let html = sink.contents();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with(
            "<div id=\"red_status\"></div>\n\
             <script>document.getElementById('red_status').textContent = \"Fetching \\\"/\\\"...\";</script>\n"
        ));
        assert!(!html.contains("Connecting"));
    }

    #[test]
    fn test_status_after_start_is_written_immediately() {
        let sink = BufferSink::new();
        let mut formatter = TableHtmlFormatter::create(context(&sink));
        formatter.start_output().unwrap();
        formatter.status("Checking 3 resources").unwrap();
        assert!(sink
            .contents()
            .ends_with("textContent = \"Checking 3 resources\";</script>\n"));
    }

    #[test]
    fn test_status_after_finish_is_rejected() {
        let sink = BufferSink::new();
        let mut formatter = SingleEntryHtmlFormatter::create(context(&sink));
        formatter.start_output().unwrap();
        formatter.finish_output(&sample_result()).unwrap();

        let err = formatter.status("late").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FormatterError>(),
            Some(FormatterError::InvalidLifecycle {
                formatter: "SingleEntryHtmlFormatter",
                operation: "status",
                state: "finished",
            })
        ));
        assert!(sink.contents().ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn test_base_status_after_finish_is_rejected() {
        let sink = BufferSink::new();
        let mut formatter = BaseHtmlFormatter::create(context(&sink));
        formatter.start_output().unwrap();
        formatter.finish_output(&sample_result()).unwrap();
        assert!(formatter.status("late").is_err());
        assert!(!sink.contents().contains("late"));
    }

    #[test]
    fn test_finish_before_start_is_rejected() {
        let sink = BufferSink::new();
        let mut formatter = SingleEntryHtmlFormatter::create(context(&sink));
        let err = formatter.finish_output(&sample_result()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FormatterError>(),
            Some(FormatterError::InvalidLifecycle {
                operation: "finish_output",
                ..
            })
        ));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_table_renders_row_per_subject() {
        let sink = BufferSink::new();
        let mut formatter = TableHtmlFormatter::create(context(&sink));
        let result = AnalysisResult::new("http://example.com/")
            .with_subject(
                AnalysisResult::new("http://example.com/a.css")
                    .with_status(200, "OK")
                    .with_note(NoteLevel::Warning, "no validator"),
            )
            .with_subject(AnalysisResult::new("http://example.com/b.js").with_status(404, "Not Found"));

        formatter.start_output().unwrap();
        formatter.finish_output(&result).unwrap();

        let html = sink.contents();
        assert_eq!(html.matches("<tr><td>").count(), 2);
        assert!(html.contains("http%3A%2F%2Fexample.com%2Fa.css"));
        assert!(html.contains("<td>1 warning</td>"));
        assert!(html.contains("<td>404 Not Found</td>"));
        assert!(html.contains("<td>no notes</td>"));
    }

    #[test]
    fn test_base_formatter_is_usable_but_unnamed() {
        assert!(BaseHtmlFormatter::NAME.is_none());

        let sink = BufferSink::new();
        let mut formatter = BaseHtmlFormatter::create(context(&sink));
        formatter.start_output().unwrap();
        formatter.finish_output(&sample_result()).unwrap();
        assert!(sink.contents().ends_with("<div id=\"red_status\"></div>\n</body>\n</html>\n"));
    }

    #[test]
    fn test_register_skips_base() {
        let mut registry = FormatterRegistry::new();
        register(&mut registry).unwrap();
        let html = registry.formatters_for("html");
        assert_eq!(html.len(), 2);
        assert!(html[0].is::<SingleEntryHtmlFormatter>());
        assert!(html[1].is::<TableHtmlFormatter>());
    }
}
