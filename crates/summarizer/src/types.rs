use serde::{Deserialize, Serialize};

/// A sentence as segmented from the source document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sentence {
    /// Position in the document (0-indexed)
    pub index: usize,

    /// Byte offset of the first char in the source document
    pub start: usize,

    /// Byte offset one past the last char in the source document
    pub end: usize,

    /// Sentence text, trimmed of surrounding whitespace
    pub text: String,
}

impl Sentence {
    #[must_use]
    pub fn new(index: usize, start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            start,
            end,
            text: text.into(),
        }
    }
}

/// A sentence together with its significance score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredSentence {
    /// Position in the document (first occurrence for collapsed duplicates)
    pub index: usize,

    pub text: String,

    /// `significant_count² / token_count`
    pub score: f64,

    /// Significant-word occurrences, with repetition
    pub significant_count: usize,

    /// All tokens including punctuation
    pub token_count: usize,
}

/// Result of summarizing a document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    /// Selected sentences in descending score order
    pub sentences: Vec<ScoredSentence>,

    /// Significant words, sorted alphabetically
    pub significant_words: Vec<String>,

    /// Number of sentences the document was segmented into
    pub total_sentences: usize,
}

impl Summary {
    /// Selected sentences joined with a single space
    #[must_use]
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(index: usize, text: &str, score: f64) -> ScoredSentence {
        ScoredSentence {
            index,
            text: text.to_string(),
            score,
            significant_count: 0,
            token_count: 1,
        }
    }

    #[test]
    fn text_joins_with_single_space() {
        let summary = Summary {
            sentences: vec![scored(2, "Second one.", 2.0), scored(0, "First one.", 1.0)],
            significant_words: vec![],
            total_sentences: 3,
        };
        assert_eq!(summary.text(), "Second one. First one.");
        assert_eq!(summary.len(), 2);
    }

    #[test]
    fn empty_summary_text_is_empty() {
        let summary = Summary::default();
        assert!(summary.is_empty());
        assert_eq!(summary.text(), "");
    }
}
