//! Rule-based extraction of action items and calendar dates.
//!
//! Everything here is pure: the reference date ("today") is an explicit
//! parameter, never an ambient clock, so a fixed anchor always yields the
//! same output. One call owns all its intermediate values; nothing is
//! shared across calls.

pub mod actions;
pub mod explicit;
pub mod merge;
pub mod sentence;
pub mod weekday;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use sentence::split_sentences;

/// A single resolved date plus the sentence that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateCandidate {
    /// `YYYY-MM-DD`, always a valid calendar date.
    pub iso_date: String,
    /// The exact trimmed sentence the date was found in.
    pub context: String,
}

/// Dates grouped by originating sentence, ready for display or export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedDate {
    /// One or more ISO dates joined with `", "`, deduplicated.
    pub date: String,
    pub context: String,
}

/// Output of a single extraction pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Extraction {
    /// Sentences flagged as action items, in source order.
    pub actions: Vec<String>,
    /// One record per context sentence that mentioned a date.
    pub dates: Vec<MergedDate>,
}

/// Run action detection and date resolution over `text`.
///
/// Per sentence, weekday candidates precede explicit-date candidates;
/// the merger then groups everything by context sentence.
pub fn extract(text: &str, today: NaiveDate) -> Extraction {
    let mut actions = Vec::new();
    let mut candidates = Vec::new();

    for sent in split_sentences(text) {
        if actions::is_action_item(&sent) {
            actions.push(sent.clone());
        }
        candidates.extend(weekday::weekday_dates(&sent, today));
        candidates.extend(explicit::explicit_dates(&sent, today));
    }

    Extraction {
        actions,
        dates: merge::merge_candidates(candidates),
    }
}
