/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports: the builtin
/// formatters, output sinks and console reporting.
pub mod outbound;
