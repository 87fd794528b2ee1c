use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a missing formatter from
/// argument and I/O failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report rendered
    Success = 0,
    /// No registered formatter satisfies the requested name and multiplicity
    NoFormatterAvailable = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O error, malformed analysis result, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code matching an application error chain.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<FormatterError>() {
            Some(FormatterError::NoFormatterAvailable { .. }) => ExitCode::NoFormatterAvailable,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::NoFormatterAvailable => write!(f, "No Formatter Available (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised by the formatter registry and the formatter lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatterError {
    /// No implementation under the (possibly defaulted) name satisfies the
    /// requested multiplicity.
    #[error("No formatter available for '{name}' (multiple: {multiple})")]
    NoFormatterAvailable { name: String, multiple: bool },

    /// A lifecycle operation was invoked on an implementation that does not
    /// override it.
    #[error("{formatter} does not implement {operation}()")]
    NotImplemented {
        formatter: &'static str,
        operation: &'static str,
    },

    /// The same implementation was registered twice under one name.
    #[error("{formatter} is already registered under '{name}'")]
    AlreadyRegistered {
        name: &'static str,
        formatter: &'static str,
    },

    /// A lifecycle operation was called out of order.
    #[error("{formatter}: {operation}() is not allowed in state {state}")]
    InvalidLifecycle {
        formatter: &'static str,
        operation: &'static str,
        state: &'static str,
    },
}

/// Application-specific errors for report rendering.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the hint lines next to the variants they belong to.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Analysis result file not found: {path}\n\n💡 Hint: {suggestion}")]
    ResultFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse analysis result: {path}\nDetails: {details}\n\n💡 Hint: The input must be the JSON document produced by the analysis engine")]
    ResultParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for request values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::NoFormatterAvailable.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::NoFormatterAvailable),
            "No Formatter Available (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_exit_code_for_missing_formatter() {
        let error: anyhow::Error = FormatterError::NoFormatterAvailable {
            name: "txt".to_string(),
            multiple: true,
        }
        .into();
        assert_eq!(ExitCode::for_error(&error), ExitCode::NoFormatterAvailable);
    }

    #[test]
    fn test_exit_code_for_other_errors() {
        let error = anyhow::anyhow!("disk full");
        assert_eq!(ExitCode::for_error(&error), ExitCode::ApplicationError);

        let error: anyhow::Error = FormatterError::NotImplemented {
            formatter: "X",
            operation: "feed",
        }
        .into();
        assert_eq!(ExitCode::for_error(&error), ExitCode::ApplicationError);
    }

    #[test]
    fn test_no_formatter_available_display() {
        let error = FormatterError::NoFormatterAvailable {
            name: "txt".to_string(),
            multiple: true,
        };
        let display = error.to_string();
        assert!(display.contains("No formatter available"));
        assert!(display.contains("'txt'"));
        assert!(display.contains("multiple: true"));
    }

    #[test]
    fn test_not_implemented_display() {
        let error = FormatterError::NotImplemented {
            formatter: "my::Formatter",
            operation: "start_output",
        };
        assert_eq!(
            error.to_string(),
            "my::Formatter does not implement start_output()"
        );
    }

    #[test]
    fn test_invalid_lifecycle_display() {
        let error = FormatterError::InvalidLifecycle {
            formatter: "TextFormatter",
            operation: "feed",
            state: "constructed",
        };
        let display = error.to_string();
        assert!(display.contains("feed()"));
        assert!(display.contains("constructed"));
    }

    #[test]
    fn test_result_file_not_found_display() {
        let error = AppError::ResultFileNotFound {
            path: PathBuf::from("/test/result.json"),
            suggestion: "Run the analysis first".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Analysis result file not found"));
        assert!(display.contains("/test/result.json"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Run the analysis first"));
    }

    #[test]
    fn test_result_parse_error_display() {
        let error = AppError::ResultParseError {
            path: PathBuf::from("/test/result.json"),
            details: "expected value at line 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse analysis result"));
        assert!(display.contains("expected value at line 1"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = AppError::FileWriteError {
            path: PathBuf::from("/test/output.html"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/output.html"));
        assert!(display.contains("Permission denied"));
    }
}
