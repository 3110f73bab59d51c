//! Application layer — text in, meeting notes out.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{CHUNK_MAX_CHARS, MAX_TEXT_LENGTH};
use crate::pipeline::extract::{self, MergedDate};
use crate::pipeline::summarize::{self, SummarizeError, Summarizer};

/// Everything the pipeline produces for one transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingNotes {
    pub summary: String,
    pub actions: Vec<String>,
    pub dates: Vec<MergedDate>,
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Text input too long. Maximum allowed is {max} characters.")]
    TextTooLong { max: usize },

    #[error(transparent)]
    Summarize(#[from] SummarizeError),
}

/// Summarize and extract from `text` against one reference date.
///
/// The anchor is captured once per call so every date expression in the
/// input resolves against the same "today". Empty input is not an error:
/// it yields empty actions/dates and the sentinel summary. Input over
/// [`MAX_TEXT_LENGTH`] characters is rejected here, at the boundary.
pub fn summarize_from_text(
    backend: &dyn Summarizer,
    text: &str,
    today: NaiveDate,
) -> Result<MeetingNotes, PipelineError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(MeetingNotes {
            summary: summarize::EMPTY_SUMMARY.to_string(),
            actions: Vec::new(),
            dates: Vec::new(),
        });
    }
    if text.chars().count() > MAX_TEXT_LENGTH {
        return Err(PipelineError::TextTooLong {
            max: MAX_TEXT_LENGTH,
        });
    }

    let summary = summarize::summarize_text(backend, text, CHUNK_MAX_CHARS)?;
    let extraction = extract::extract(text, today);

    tracing::debug!(
        actions = extraction.actions.len(),
        dates = extraction.dates.len(),
        "pipeline finished"
    );

    Ok(MeetingNotes {
        summary,
        actions: extraction.actions,
        dates: extraction.dates,
    })
}
