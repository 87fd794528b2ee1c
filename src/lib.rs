//! red-formatter - pluggable output formatters for HTTP resource analysis
//!
//! This library turns the result of an HTTP resource analysis into a
//! report in one of several presentation formats (HTML, plain text, HAR).
//! Formatter implementations register themselves in a [`FormatterRegistry`]
//! under a format name; the registry then selects the implementation for a
//! requested name and multiplicity, falling back to `html` for unknown names.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`report`): Analysis results and the formatter lifecycle
//! - **Application Layer** (`application`): Registry, selection and use cases
//! - **Ports** (`ports`): The formatter contract and infrastructure interfaces
//! - **Adapters** (`adapters`): Builtin formatters, sinks and console output
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use red_formatter::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut registry = FormatterRegistry::new();
//! register_builtin_formatters(&mut registry)?;
//!
//! let descriptor = registry.find_formatter("txt", false)?;
//! assert!(descriptor.is::<TextFormatter>());
//!
//! let sink = BufferSink::new();
//! let context = FormatterContext::new("http://example.com/", Box::new(sink.clone()));
//! let mut formatter = descriptor.instantiate(context);
//!
//! let result = AnalysisResult::new("http://example.com/").with_status(200, "OK");
//! formatter.start_output()?;
//! formatter.feed(&result, b"<html></html>")?;
//! formatter.finish_output(&result)?;
//! assert!(sink.contents().starts_with("200 OK"));
//! # Ok(())
//! # }
//! ```
//!
//! [`FormatterRegistry`]: application::registry::FormatterRegistry

pub mod adapters;
pub mod application;
pub mod ports;
pub mod report;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSink, FileSystemReader, StdoutSink};
    pub use crate::adapters::outbound::formatters::{
        register_builtin_formatters, BaseHtmlFormatter, HarFormatter, SingleEntryHtmlFormatter,
        TableHtmlFormatter, TextFormatter, TextListFormatter,
    };
    pub use crate::adapters::outbound::memory::BufferSink;
    pub use crate::application::dto::{RenderRequest, RenderResponse};
    pub use crate::application::factories::{FormatterFactory, SinkFactory, SinkType};
    pub use crate::application::registry::{
        FormatterDescriptor, FormatterRegistry, DEFAULT_FORMATTER,
    };
    pub use crate::application::use_cases::RenderReportUseCase;
    pub use crate::ports::inbound::ReportRenderingPort;
    pub use crate::ports::outbound::{
        AnalysisResultReader, Formatter, FormatterClass, FormatterContext, OutputSink,
        ProgressReporter,
    };
    pub use crate::report::domain::{AnalysisResult, Header, LifecycleState, Note, NoteLevel};
    pub use crate::shared::error::{AppError, ExitCode, FormatterError};
    pub use crate::shared::{FormatterResult, Result};
}
