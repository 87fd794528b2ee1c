use crate::application::registry::FormatterRegistry;
use crate::ports::outbound::{Formatter, FormatterClass, FormatterContext};
use crate::report::domain::{AnalysisResult, LifecycleState};
use crate::shared::{FormatterResult, Result};

const MEDIA_TYPE: &str = "text/plain";

/// Registers the plain text formatters in definition order
pub(super) fn register(registry: &mut FormatterRegistry) -> FormatterResult<()> {
    registry.register::<TextFormatter>()?;
    registry.register::<TextListFormatter>()?;
    Ok(())
}

fn render_notes(output: &mut String, result: &AnalysisResult, indent: &str) {
    for note in &result.notes {
        output.push_str(&format!("{}* [{}] {}\n", indent, note.level, note.summary));
    }
}

/// Plain text report for a single analyzed resource
///
/// Text output has no preamble and no place for transient status, so
/// `start_output` and `status` write nothing. Both are still checked
/// against the lifecycle.
pub struct TextFormatter {
    context: FormatterContext,
    state: LifecycleState,
    sampled_bytes: usize,
}

impl TextFormatter {
    const TYPE_NAME: &'static str = "TextFormatter";

    fn render(&self, result: &AnalysisResult) -> String {
        let mut output = String::new();
        output.push_str(&result.status_line());
        output.push('\n');
        for header in &result.response_headers {
            output.push_str(&header.to_string());
            output.push('\n');
        }
        output.push('\n');

        if self.sampled_bytes > 0 {
            output.push_str(&format!("Body: {} bytes sampled\n\n", self.sampled_bytes));
        }

        if result.notes.is_empty() {
            output.push_str("Notes: none\n");
        } else {
            output.push_str("Notes:\n");
            render_notes(&mut output, result, "  ");
        }
        output
    }
}

impl Formatter for TextFormatter {
    fn feed(&mut self, _result: &AnalysisResult, sample: &[u8]) -> Result<()> {
        self.state.feed(Self::TYPE_NAME)?;
        self.sampled_bytes += sample.len();
        Ok(())
    }

    fn start_output(&mut self) -> Result<()> {
        self.state.start(Self::TYPE_NAME)?;
        Ok(())
    }

    fn status(&mut self, _message: &str) -> Result<()> {
        self.state.status(Self::TYPE_NAME)?;
        Ok(())
    }

    fn finish_output(&mut self, result: &AnalysisResult) -> Result<()> {
        self.state.finish(Self::TYPE_NAME)?;
        self.context.write(&self.render(result))
    }
}

impl FormatterClass for TextFormatter {
    const NAME: Option<&'static str> = Some("txt");
    const MEDIA_TYPE: &'static str = MEDIA_TYPE;

    fn create(context: FormatterContext) -> Self {
        Self {
            context,
            state: LifecycleState::default(),
            sampled_bytes: 0,
        }
    }
}

/// Plain text report listing several analyzed resources
pub struct TextListFormatter {
    context: FormatterContext,
    state: LifecycleState,
}

impl TextListFormatter {
    const TYPE_NAME: &'static str = "TextListFormatter";
}

impl Formatter for TextListFormatter {
    fn feed(&mut self, _result: &AnalysisResult, _sample: &[u8]) -> Result<()> {
        self.state.feed(Self::TYPE_NAME)?;
        Ok(())
    }

    fn start_output(&mut self) -> Result<()> {
        self.state.start(Self::TYPE_NAME)?;
        Ok(())
    }

    fn status(&mut self, _message: &str) -> Result<()> {
        self.state.status(Self::TYPE_NAME)?;
        Ok(())
    }

    fn finish_output(&mut self, result: &AnalysisResult) -> Result<()> {
        self.state.finish(Self::TYPE_NAME)?;
        for subject in result.rendered_subjects() {
            let mut block = format!("== {} ==\n{}\n", subject.uri, subject.status_line());
            render_notes(&mut block, subject, "  ");
            block.push('\n');
            self.context.write(&block)?;
        }
        Ok(())
    }
}

impl FormatterClass for TextListFormatter {
    const NAME: Option<&'static str> = Some("txt");
    const MEDIA_TYPE: &'static str = MEDIA_TYPE;
    const CAN_MULTIPLE: bool = true;

    fn create(context: FormatterContext) -> Self {
        Self {
            context,
            state: LifecycleState::default(),
        }
    }
}
