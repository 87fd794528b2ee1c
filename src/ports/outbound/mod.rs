/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses to
/// render reports and talk to the outside world (sinks, console, etc.).
pub mod analysis_result_reader;
pub mod formatter;
pub mod output_sink;
pub mod progress_reporter;

pub use analysis_result_reader::AnalysisResultReader;
pub use formatter::{Formatter, FormatterClass, FormatterContext};
pub use output_sink::OutputSink;
pub use progress_reporter::ProgressReporter;
