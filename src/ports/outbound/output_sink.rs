use crate::shared::Result;

/// OutputSink port for streaming rendered output
///
/// Receives Unicode text chunks in the order a formatter emits them and is
/// responsible for any encoding and transport (stdout, file, buffer, etc.).
pub trait OutputSink {
    /// Writes one chunk of rendered text
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the destination fails
    /// - File permissions prevent writing
    fn write(&self, chunk: &str) -> Result<()>;
}

impl<F> OutputSink for F
where
    F: Fn(&str) -> Result<()>,
{
    fn write(&self, chunk: &str) -> Result<()> {
        self(chunk)
    }
}
