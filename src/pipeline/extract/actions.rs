//! Keyword-based action item detection.

use std::sync::LazyLock;

use regex::Regex;

/// Fixed action vocabulary. A sentence containing any of these (as whole
/// words, case-insensitive) is flagged once, no matter how many match.
static ACTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(should|to do|action|follow up|deadline|assign|send|prepare|review|meet|schedule|email|submit|call)\b",
    )
    .unwrap()
});

/// Whether a sentence reads like an action item.
pub fn is_action_item(sentence: &str) -> bool {
    ACTION_PATTERN.is_match(sentence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_action_sentence() {
        assert!(is_action_item("Please review the document"));
        assert!(is_action_item("We should follow up with the vendor"));
        assert!(is_action_item("Deadline is Friday"));
    }

    #[test]
    fn ignores_plain_statement() {
        assert!(!is_action_item("The weather is nice today"));
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(is_action_item("SUBMIT the report by noon"));
        assert!(is_action_item("Schedule a sync with design"));
    }

    #[test]
    fn requires_word_boundaries() {
        // "actionable" and "recall" embed keywords but are not whole-word hits.
        assert!(!is_action_item("That plan is actionable"));
        assert!(!is_action_item("Total recall of the figures"));
    }

    #[test]
    fn multiword_keywords_match() {
        assert!(is_action_item("Add this to do list item"));
        assert!(is_action_item("We need to follow up next week"));
    }
}
