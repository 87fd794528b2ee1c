/// Builtin formatter adapters
///
/// Each formatter module registers the implementations it defines, in
/// definition order, through its own `register` function.
mod har_formatter;
mod html_formatter;
mod markup;
mod text_formatter;

pub use har_formatter::HarFormatter;
pub use html_formatter::{BaseHtmlFormatter, SingleEntryHtmlFormatter, TableHtmlFormatter};
pub use text_formatter::{TextFormatter, TextListFormatter};

use crate::application::registry::FormatterRegistry;
use crate::shared::FormatterResult;

/// Registers every builtin formatter
///
/// # Errors
/// Returns `AlreadyRegistered` if the registry already holds a builtin
pub fn register_builtin_formatters(registry: &mut FormatterRegistry) -> FormatterResult<()> {
    html_formatter::register(registry)?;
    text_formatter::register(registry)?;
    har_formatter::register(registry)?;
    Ok(())
}
