//! Character-bounded sentence chunking for the summarization backend.

use crate::pipeline::extract::split_sentences;

/// Greedily pack consecutive sentences into chunks of at most `max_chars`.
///
/// Sentences are joined with a single space. A sentence that alone
/// exceeds the bound becomes its own oversized chunk — it is never split,
/// so re-joining all chunks in order reproduces the sentence sequence
/// exactly.
pub fn chunk_sentences(sentences: &[String], max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut buf = String::new();

    for sent in sentences {
        if buf.is_empty() {
            buf.push_str(sent);
        } else if buf.len() + 1 + sent.len() <= max_chars {
            buf.push(' ');
            buf.push_str(sent);
        } else {
            chunks.push(std::mem::take(&mut buf));
            buf.push_str(sent);
        }
    }

    if !buf.is_empty() {
        chunks.push(buf);
    }

    chunks
}

/// Split `text` into sentences and chunk them.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    chunk_sentences(&split_sentences(text), max_chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn packs_sentences_up_to_bound() {
        let input = sentences(&["One two.", "Three four.", "Five six."]);
        // "One two. Three four." is 20 chars, adding "Five six." would overflow.
        let chunks = chunk_sentences(&input, 20);
        assert_eq!(chunks, vec!["One two. Three four.", "Five six."]);
    }

    #[test]
    fn rejoining_chunks_reproduces_sentences() {
        let input = sentences(&["Alpha.", "Bravo.", "Charlie.", "Delta.", "Echo."]);
        let chunks = chunk_sentences(&input, 15);
        let rejoined = chunks.join(" ");
        assert_eq!(rejoined, input.join(" "));
    }

    #[test]
    fn oversized_sentence_becomes_own_chunk() {
        let long = "This single sentence is far longer than the configured bound.";
        let input = sentences(&["Short.", long, "Tail."]);
        let chunks = chunk_sentences(&input, 20);
        assert_eq!(chunks, vec!["Short.", long, "Tail."]);
    }

    #[test]
    fn no_empty_chunks_emitted() {
        let long = "An oversized opener that exceeds any reasonable tiny bound here.";
        let chunks = chunk_sentences(&sentences(&[long]), 10);
        assert_eq!(chunks.len(), 1);
        assert!(chunks.iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        assert!(chunk_sentences(&[], 100).is_empty());
        assert!(chunk_text("", 100).is_empty());
    }

    #[test]
    fn chunk_text_splits_then_packs() {
        let chunks = chunk_text("First point. Second point. Third point.", 27);
        assert_eq!(chunks, vec!["First point. Second point.", "Third point."]);
        for chunk in &chunks {
            assert!(chunk.len() <= 27);
        }
    }
}
