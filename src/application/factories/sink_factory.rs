use crate::adapters::outbound::filesystem::{FileSink, StdoutSink};
use crate::ports::outbound::OutputSink;
use crate::shared::Result;
use std::path::PathBuf;

/// Sink type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkType {
    Stdout,
    File(PathBuf),
}

impl SinkType {
    /// File sink when a path is given, stdout otherwise
    pub fn from_output(output: Option<PathBuf>) -> Self {
        output.map(SinkType::File).unwrap_or(SinkType::Stdout)
    }
}

/// Factory for creating output sinks
///
/// Keeps the choice of infrastructure adapter out of the front-end: callers
/// describe where output goes and receive a ready sink.
pub struct SinkFactory;

impl SinkFactory {
    /// Creates a sink for the specified type
    ///
    /// # Errors
    /// Returns an error if a file sink cannot create its file
    ///
    /// # Examples
    /// ```
    /// use red_formatter::application::factories::{SinkFactory, SinkType};
    ///
    /// let sink = SinkFactory::create(SinkType::Stdout).unwrap();
    /// ```
    pub fn create(sink_type: SinkType) -> Result<Box<dyn OutputSink>> {
        match sink_type {
            SinkType::Stdout => Ok(Box::new(StdoutSink::new())),
            SinkType::File(path) => Ok(Box::new(FileSink::create(path)?)),
        }
    }
}
