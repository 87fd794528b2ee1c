pub mod analysis_result;
pub mod lifecycle_state;

pub use analysis_result::{AnalysisResult, Header, Note, NoteLevel};
pub use lifecycle_state::LifecycleState;
