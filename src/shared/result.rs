use crate::shared::error::FormatterError;

/// Type alias for Result with anyhow::Error as the error type.
/// Used by adapters and the application layer, where I/O and parse
/// failures need context attached.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Result of a registry or selection operation.
///
/// Registry lookups report their failures as a typed [`FormatterError`]
/// so hosts can match on the reason instead of inspecting strings.
pub type FormatterResult<T> = std::result::Result<T, FormatterError>;
