/// Formatter registry: the name-keyed catalog of formatter
/// implementations and the selection rules that resolve a requested
/// format into one of them.
mod formatter_descriptor;
mod formatter_registry;

pub use formatter_descriptor::FormatterDescriptor;
pub use formatter_registry::{FormatterRegistry, DEFAULT_FORMATTER};
