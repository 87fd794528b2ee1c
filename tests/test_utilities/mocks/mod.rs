/// Mock implementations for testing
mod mock_formatters;
mod mock_progress_reporter;
mod mock_result_reader;

#[allow(unused_imports)]
pub use mock_formatters::{
    AbstractBaseFormatter, LateMultiFormatter, MultiOnlyFormatter, SingleOnlyFormatter,
};
#[allow(unused_imports)]
pub use mock_progress_reporter::{MockProgressReporter, ProgressEvent};
#[allow(unused_imports)]
pub use mock_result_reader::MockResultReader;
