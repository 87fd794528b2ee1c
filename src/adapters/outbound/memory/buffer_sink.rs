use crate::ports::outbound::OutputSink;
use crate::shared::Result;
use std::sync::{Arc, Mutex, PoisonError};

/// BufferSink adapter collecting rendered output in memory
///
/// Clones share the same buffer, so a host can hand one clone to a
/// formatter and read the rendered text back through another.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    buffer: Arc<Mutex<String>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl OutputSink for BufferSink {
    fn write(&self, chunk: &str) -> Result<()> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_str(chunk);
        Ok(())
    }
}
