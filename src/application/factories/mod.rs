mod formatter_factory;
mod sink_factory;

pub use formatter_factory::FormatterFactory;
pub use sink_factory::{SinkFactory, SinkType};
