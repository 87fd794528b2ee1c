use red_formatter::prelude::*;

/// Writes `<tag>:<lifecycle call>;` for every call it receives, so tests can
/// tell which implementation handled a request.
macro_rules! recording_formatter {
    ($type:ident, $name:expr, $multiple:expr, $tag:literal) => {
        #[allow(dead_code)]
        pub struct $type {
            context: FormatterContext,
        }

        impl Formatter for $type {
            fn feed(&mut self, _result: &AnalysisResult, sample: &[u8]) -> Result<()> {
                self.context
                    .write(&format!("{}:feed({});", $tag, sample.len()))
            }

            fn start_output(&mut self) -> Result<()> {
                self.context.write(&format!("{}:start;", $tag))
            }

            fn status(&mut self, message: &str) -> Result<()> {
                self.context.write(&format!("{}:status({});", $tag, message))
            }

            fn finish_output(&mut self, result: &AnalysisResult) -> Result<()> {
                self.context
                    .write(&format!("{}:finish({});", $tag, result.subjects.len()))
            }
        }

        impl FormatterClass for $type {
            const NAME: Option<&'static str> = $name;
            const MEDIA_TYPE: &'static str = "text/plain";
            const CAN_MULTIPLE: bool = $multiple;

            fn create(context: FormatterContext) -> Self {
                Self { context }
            }
        }
    };
}

recording_formatter!(SingleOnlyFormatter, Some("text"), false, "single");
recording_formatter!(MultiOnlyFormatter, Some("text"), true, "multi");
recording_formatter!(LateMultiFormatter, Some("text"), true, "late");
recording_formatter!(AbstractBaseFormatter, None, false, "abstract");
