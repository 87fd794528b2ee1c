/// Filesystem adapters for reading analysis output and writing reports
mod file_reader;
mod file_writer;

pub use file_reader::FileSystemReader;
pub use file_writer::{FileSink, StdoutSink};
