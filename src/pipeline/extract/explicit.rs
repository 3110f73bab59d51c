//! Explicit date resolution ("5 March", "March 5th 2023").
//!
//! Two orderings are recognized: "day month [year]" and "month day [year]".
//! Purely numeric formats like "12/05/2024" are intentionally not handled.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use super::DateCandidate;

const MONTH_NAMES: &str = "january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sep|sept|oct|nov|dec";

static DAY_MONTH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(\d{{1,2}})(?:st|nd|rd|th)?\s+({MONTH_NAMES})\s*(\d{{4}})?\b"
    ))
    .unwrap()
});

static MONTH_DAY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b({MONTH_NAMES})\s+(\d{{1,2}})(?:st|nd|rd|th)?\s*(\d{{4}})?\b"
    ))
    .unwrap()
});

fn month_number(name: &str) -> Option<u32> {
    let num = match name {
        "january" | "jan" => 1,
        "february" | "feb" => 2,
        "march" | "mar" => 3,
        "april" | "apr" => 4,
        "may" => 5,
        "june" | "jun" => 6,
        "july" | "jul" => 7,
        "august" | "aug" => 8,
        "september" | "sep" | "sept" => 9,
        "october" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        _ => return None,
    };
    Some(num)
}

/// Apply the year policy and validate the calendar date.
///
/// An explicit year is honored exactly, past or not. A missing year
/// assumes the anchor's year and rolls forward one year when the result
/// would land strictly before the anchor. Day/month pairs that form no
/// valid calendar date (Feb 31, Jun 31, Feb 29 off leap years) resolve
/// to `None` and are dropped by the caller.
fn resolve_date(day: u32, month: u32, year: Option<i32>, today: NaiveDate) -> Option<NaiveDate> {
    match year {
        Some(y) => NaiveDate::from_ymd_opt(y, month, day),
        None => {
            let date = NaiveDate::from_ymd_opt(today.year(), month, day)?;
            if date < today {
                NaiveDate::from_ymd_opt(today.year() + 1, month, day)
            } else {
                Some(date)
            }
        }
    }
}

/// Resolve every "day month [year]" and "month day [year]" mention in
/// `sentence` against `today`. Invalid constructions are silently skipped.
pub fn explicit_dates(sentence: &str, today: NaiveDate) -> Vec<DateCandidate> {
    let mut candidates = Vec::new();

    for cap in DAY_MONTH_PATTERN.captures_iter(sentence) {
        let day = cap[1].parse::<u32>().ok();
        let month = month_number(&cap[2].to_lowercase());
        let year = cap.get(3).and_then(|m| m.as_str().parse::<i32>().ok());
        push_candidate(&mut candidates, sentence, day, month, year, today);
    }

    for cap in MONTH_DAY_PATTERN.captures_iter(sentence) {
        let month = month_number(&cap[1].to_lowercase());
        let day = cap[2].parse::<u32>().ok();
        let year = cap.get(3).and_then(|m| m.as_str().parse::<i32>().ok());
        push_candidate(&mut candidates, sentence, day, month, year, today);
    }

    candidates
}

fn push_candidate(
    candidates: &mut Vec<DateCandidate>,
    sentence: &str,
    day: Option<u32>,
    month: Option<u32>,
    year: Option<i32>,
    today: NaiveDate,
) {
    let (Some(day), Some(month)) = (day, month) else {
        return;
    };
    if let Some(date) = resolve_date(day, month, year, today) {
        candidates.push(DateCandidate {
            iso_date: date.format("%Y-%m-%d").to_string(),
            context: sentence.to_string(),
        });
    }
}
