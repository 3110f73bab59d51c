//! Sentence segmentation for the extraction and chunking passes.

/// Split raw text into trimmed, non-empty sentences.
///
/// A sentence ends at `.`, `!` or `?` followed by whitespace. Text with
/// no terminal punctuation comes back as a single sentence; empty or
/// whitespace-only input yields nothing.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            if let Some(&(next_i, next_c)) = chars.peek() {
                if next_c.is_whitespace() {
                    let sentence = text[start..i + c.len_utf8()].trim();
                    if !sentence.is_empty() {
                        sentences.push(sentence.to_string());
                    }
                    start = next_i;
                }
            }
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminal_punctuation() {
        let sentences = split_sentences("First point. Second point! Third point? Done.");
        assert_eq!(
            sentences,
            vec!["First point.", "Second point!", "Third point?", "Done."]
        );
    }

    #[test]
    fn no_terminal_punctuation_single_sentence() {
        let sentences = split_sentences("just a fragment with no ending");
        assert_eq!(sentences, vec!["just a fragment with no ending"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t  ").is_empty());
    }

    #[test]
    fn mid_token_punctuation_does_not_split() {
        // No whitespace after the dot — "v1.2" stays intact.
        let sentences = split_sentences("We shipped v1.2 today. Next release soon.");
        assert_eq!(sentences, vec!["We shipped v1.2 today.", "Next release soon."]);
    }

    #[test]
    fn consecutive_punctuation_stays_with_sentence() {
        let sentences = split_sentences("Really?! I had no idea.");
        assert_eq!(sentences, vec!["Really?!", "I had no idea."]);
    }

    #[test]
    fn trims_and_drops_blank_entries() {
        let sentences = split_sentences("  One.   \n\n  Two.  ");
        assert_eq!(sentences, vec!["One.", "Two."]);
        assert!(sentences.iter().all(|s| !s.trim().is_empty()));
    }

    #[test]
    fn handles_multibyte_text() {
        let sentences = split_sentences("Réunion à 9h. Déjeuner après!");
        assert_eq!(sentences, vec!["Réunion à 9h.", "Déjeuner après!"]);
    }
}
