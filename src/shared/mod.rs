/// Shared kernel: error types, result aliases and filesystem guards
/// used by every layer of the crate.
pub mod error;
pub mod result;
pub mod security;

pub use result::{FormatterResult, Result};
