//! Candidate merging — one record per context sentence, dates deduplicated.

use std::collections::HashMap;

use super::{DateCandidate, MergedDate};

/// Group raw candidates by trimmed context sentence.
///
/// Contexts keep first-appearance order; within a group, ISO date strings
/// are deduplicated by exact match preserving first-seen order, then
/// joined with `", "` for display.
pub fn merge_candidates(candidates: Vec<DateCandidate>) -> Vec<MergedDate> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<String>> = HashMap::new();

    for candidate in candidates {
        let context = candidate.context.trim().to_string();
        let dates = groups.entry(context.clone()).or_insert_with(|| {
            order.push(context.clone());
            Vec::new()
        });
        if !dates.iter().any(|d| *d == candidate.iso_date) {
            dates.push(candidate.iso_date);
        }
    }

    order
        .into_iter()
        .map(|context| {
            let dates = groups.remove(&context).unwrap_or_default();
            MergedDate {
                date: dates.join(", "),
                context,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(iso: &str, context: &str) -> DateCandidate {
        DateCandidate {
            iso_date: iso.to_string(),
            context: context.to_string(),
        }
    }

    #[test]
    fn groups_by_context_joined_with_comma() {
        let context = "Call John on Friday and again next Friday";
        let merged = merge_candidates(vec![
            candidate("2024-06-14", context),
            candidate("2024-06-21", context),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].date, "2024-06-14, 2024-06-21");
        assert_eq!(merged[0].context, context);
    }

    #[test]
    fn repeated_date_collapses() {
        let merged = merge_candidates(vec![
            candidate("2024-06-14", "Friday, yes Friday"),
            candidate("2024-06-14", "Friday, yes Friday"),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].date, "2024-06-14");
    }

    #[test]
    fn contexts_keep_first_appearance_order() {
        let merged = merge_candidates(vec![
            candidate("2024-07-01", "First sentence."),
            candidate("2024-08-01", "Second sentence."),
            candidate("2024-07-02", "First sentence."),
        ]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].context, "First sentence.");
        assert_eq!(merged[0].date, "2024-07-01, 2024-07-02");
        assert_eq!(merged[1].context, "Second sentence.");
    }

    #[test]
    fn contexts_are_unique_in_output() {
        let merged = merge_candidates(vec![
            candidate("2024-06-14", "Same context"),
            candidate("2024-06-21", "Same context"),
            candidate("2024-06-28", "Same context"),
        ]);
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn empty_input_empty_output() {
        assert!(merge_candidates(Vec::new()).is_empty());
    }
}
