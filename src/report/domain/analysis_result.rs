use serde::{Deserialize, Serialize};
use std::fmt;

/// A single HTTP header as it appeared on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Parses a `Name: value` line. Returns `None` when there is no colon
    /// or the name is empty.
    pub fn parse(line: &str) -> Option<Self> {
        let (name, value) = line.split_once(':')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self::new(name, value.trim()))
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Severity of an analysis note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteLevel {
    Good,
    Info,
    Warning,
    Bad,
}

impl NoteLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            NoteLevel::Good => "good",
            NoteLevel::Info => "info",
            NoteLevel::Warning => "warning",
            NoteLevel::Bad => "bad",
        }
    }
}

impl fmt::Display for NoteLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An observation the analysis engine made about a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub level: NoteLevel,
    pub summary: String,
}

impl Note {
    pub fn new(level: NoteLevel, summary: impl Into<String>) -> Self {
        Self {
            level,
            summary: summary.into(),
        }
    }
}

/// Accumulated analysis of one HTTP resource.
///
/// Produced by the analysis engine and passed through the formatter
/// lifecycle unchanged. Multi-subject reports carry one child result per
/// analyzed resource in `subjects`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub uri: String,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub status_phrase: Option<String>,
    #[serde(default)]
    pub response_headers: Vec<Header>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub subjects: Vec<AnalysisResult>,
}

impl AnalysisResult {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, code: u16, phrase: impl Into<String>) -> Self {
        self.status_code = Some(code);
        self.status_phrase = Some(phrase.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.response_headers.push(Header::new(name, value));
        self
    }

    pub fn with_note(mut self, level: NoteLevel, summary: impl Into<String>) -> Self {
        self.notes.push(Note::new(level, summary));
        self
    }

    pub fn with_subject(mut self, subject: AnalysisResult) -> Self {
        self.subjects.push(subject);
        self
    }

    /// True when this result describes more than one analyzed resource.
    pub fn has_subjects(&self) -> bool {
        !self.subjects.is_empty()
    }

    /// The results a multi-subject formatter should render: the child
    /// subjects, or the result itself when it has none.
    pub fn rendered_subjects(&self) -> Vec<&AnalysisResult> {
        if self.subjects.is_empty() {
            vec![self]
        } else {
            self.subjects.iter().collect()
        }
    }

    /// `200 OK`, `200` or `-` depending on what the engine recorded.
    pub fn status_line(&self) -> String {
        match (self.status_code, self.status_phrase.as_deref()) {
            (Some(code), Some(phrase)) if !phrase.is_empty() => format!("{} {}", code, phrase),
            (Some(code), _) => code.to_string(),
            (None, _) => "-".to_string(),
        }
    }
}
