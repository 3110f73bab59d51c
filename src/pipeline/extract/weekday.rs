//! Relative weekday resolution ("this Friday", "next Monday", bare "Tuesday").

use std::sync::LazyLock;

use chrono::{Datelike, Duration, NaiveDate};
use regex::Regex;

use super::DateCandidate;

/// Optional `next`/`this` qualifier immediately before a weekday name.
static WEEKDAY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(next|this)?\s*(monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b")
        .unwrap()
});

fn weekday_index(name: &str) -> Option<i64> {
    let idx = match name {
        "monday" => 0,
        "tuesday" => 1,
        "wednesday" => 2,
        "thursday" => 3,
        "friday" => 4,
        "saturday" => 5,
        "sunday" => 6,
        _ => return None,
    };
    Some(idx)
}

/// Resolve every weekday mention in `sentence` against `today`.
///
/// Qualifier rules:
/// - bare weekday, or `this` with the day already past this week → the
///   occurrence within the next 7 days (`this <today's weekday>` is today);
/// - `next` → one full week beyond the nearest ordinary occurrence, so it
///   never lands inside the current week (including today).
///
/// Candidates come out in left-to-right mention order, each carrying the
/// full sentence as context.
pub fn weekday_dates(sentence: &str, today: NaiveDate) -> Vec<DateCandidate> {
    let today_idx = today.weekday().num_days_from_monday() as i64;
    let mut candidates = Vec::new();

    for cap in WEEKDAY_PATTERN.captures_iter(sentence) {
        let prefix = cap.get(1).map(|m| m.as_str().to_lowercase());
        let name = cap[2].to_lowercase();
        let Some(target_idx) = weekday_index(&name) else {
            continue;
        };

        let mut diff = target_idx - today_idx;
        match prefix.as_deref() {
            Some("next") => {
                if diff <= 0 {
                    diff += 7;
                }
                diff += 7;
            }
            _ => {
                if diff < 0 {
                    diff += 7;
                }
            }
        }

        let date = today + Duration::days(diff);
        candidates.push(DateCandidate {
            iso_date: date.format("%Y-%m-%d").to_string(),
            context: sentence.to_string(),
        });
    }

    candidates
}
