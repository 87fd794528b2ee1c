/// Use cases module containing application business logic orchestration
mod render_report;

pub use render_report::{RenderReportUseCase, SAMPLE_CHUNK_SIZE};
