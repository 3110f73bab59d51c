pub mod extract;
pub mod orchestrator;
pub mod summarize;

pub use orchestrator::{summarize_from_text, MeetingNotes, PipelineError};
