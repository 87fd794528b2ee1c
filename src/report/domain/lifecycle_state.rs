use crate::shared::error::FormatterError;
use std::fmt;

/// Position of a formatter instance in its output lifecycle:
/// `Constructed → Started → Feeding* → Finished`.
///
/// `status` is legal in every state but `Finished` and never moves the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Constructed,
    Started,
    Feeding,
    Finished,
}

impl LifecycleState {
    pub fn as_str(self) -> &'static str {
        match self {
            LifecycleState::Constructed => "constructed",
            LifecycleState::Started => "started",
            LifecycleState::Feeding => "feeding",
            LifecycleState::Finished => "finished",
        }
    }

    /// Moves to `Started`. Only legal from `Constructed`.
    pub fn start(&mut self, formatter: &'static str) -> Result<(), FormatterError> {
        self.advance(
            formatter,
            "start_output",
            &[LifecycleState::Constructed],
            LifecycleState::Started,
        )
    }

    /// Moves to `Feeding`. Legal once output has started and until it finishes.
    pub fn feed(&mut self, formatter: &'static str) -> Result<(), FormatterError> {
        self.advance(
            formatter,
            "feed",
            &[LifecycleState::Started, LifecycleState::Feeding],
            LifecycleState::Feeding,
        )
    }

    /// Moves to `Finished`, the terminal state.
    pub fn finish(&mut self, formatter: &'static str) -> Result<(), FormatterError> {
        self.advance(
            formatter,
            "finish_output",
            &[LifecycleState::Started, LifecycleState::Feeding],
            LifecycleState::Finished,
        )
    }

    /// Checks that a status update is still allowed. Only `Finished`
    /// rejects it; the state is left unchanged.
    pub fn status(&self, formatter: &'static str) -> Result<(), FormatterError> {
        if *self == LifecycleState::Finished {
            return Err(FormatterError::InvalidLifecycle {
                formatter,
                operation: "status",
                state: self.as_str(),
            });
        }
        Ok(())
    }

    fn advance(
        &mut self,
        formatter: &'static str,
        operation: &'static str,
        allowed: &[LifecycleState],
        next: LifecycleState,
    ) -> Result<(), FormatterError> {
        if !allowed.contains(self) {
            return Err(FormatterError::InvalidLifecycle {
                formatter,
                operation,
                state: self.as_str(),
            });
        }
        *self = next;
        Ok(())
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
