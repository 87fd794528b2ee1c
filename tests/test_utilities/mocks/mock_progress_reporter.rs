use red_formatter::prelude::*;
use std::sync::{Arc, Mutex};

/// One call received by [`MockProgressReporter`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub enum ProgressEvent {
    Message(String),
    Progress {
        current: usize,
        total: usize,
        subject: Option<String>,
    },
    Error(String),
    Completion(String),
}

impl ProgressEvent {
    fn render(&self) -> String {
        match self {
            ProgressEvent::Message(message) => message.clone(),
            ProgressEvent::Progress {
                current,
                total,
                subject: Some(subject),
            } => format!("Progress: {}/{} - {}", current, total, subject),
            ProgressEvent::Progress { current, total, .. } => {
                format!("Progress: {}/{}", current, total)
            }
            ProgressEvent::Error(message) => format!("Error: {}", message),
            ProgressEvent::Completion(message) => format!("Completed: {}", message),
        }
    }
}

/// Mock ProgressReporter that records every call
///
/// Clones share the event log, so a test can keep one clone while the use
/// case owns another.
#[derive(Default, Clone)]
#[allow(dead_code)]
pub struct MockProgressReporter {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

#[allow(dead_code)]
impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Events rendered as one line each
    pub fn get_messages(&self) -> Vec<String> {
        self.events().iter().map(ProgressEvent::render).collect()
    }

    pub fn message_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    fn record(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.record(ProgressEvent::Message(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.record(ProgressEvent::Progress {
            current,
            total,
            subject: message.map(str::to_string),
        });
    }

    fn report_error(&self, message: &str) {
        self.record(ProgressEvent::Error(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.record(ProgressEvent::Completion(message.to_string()));
    }
}
