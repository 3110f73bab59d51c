//! Abstractive summarization over character-bounded chunks.
//!
//! The model itself lives behind the [`Summarizer`] trait; this module
//! owns the chunking and the map-reduce recombination contract.

pub mod chunker;
pub mod ollama;

use thiserror::Error;

/// Summary returned for empty or whitespace-only input.
pub const EMPTY_SUMMARY: &str = "No content provided.";

#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("Summarization backend is not running at {0}")]
    Connection(String),

    #[error("Summarization backend returned error (status {status}): {body}")]
    Backend { status: u16, body: String },

    #[error("No compatible summarization model available")]
    NoModelAvailable,

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),
}

/// Seam for the abstractive summarization backend.
pub trait Summarizer {
    fn summarize(&self, text: &str) -> Result<String, SummarizeError>;
}

/// Summarize `text` chunk by chunk, then recombine.
///
/// Each chunk is summarized independently and the partial summaries are
/// joined with single spaces. When more than one chunk was produced, the
/// joined text goes through one final summarization pass so the output
/// reads as a single summary rather than a concatenation.
pub fn summarize_text(
    backend: &dyn Summarizer,
    text: &str,
    max_chars: usize,
) -> Result<String, SummarizeError> {
    let chunks = chunker::chunk_text(text, max_chars);
    if chunks.is_empty() {
        return Ok(EMPTY_SUMMARY.to_string());
    }

    let mut partials = Vec::with_capacity(chunks.len());
    for chunk in &chunks {
        partials.push(backend.summarize(chunk)?);
    }

    let combined = partials.join(" ");
    if chunks.len() > 1 {
        tracing::debug!(chunks = chunks.len(), "re-summarizing combined partials");
        backend.summarize(&combined)
    } else {
        Ok(combined)
    }
}
