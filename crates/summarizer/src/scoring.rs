use crate::config::DuplicatePolicy;
use crate::frequency::SignificantWordSet;
use crate::tokenize::tokenize;
use crate::types::{ScoredSentence, Sentence};
use std::collections::HashSet;

/// Scores sentences by the density of significant words they contain
#[derive(Debug, Clone, Copy)]
pub struct SentenceScorer<'a> {
    significant: &'a SignificantWordSet,
}

impl<'a> SentenceScorer<'a> {
    #[must_use]
    pub const fn new(significant: &'a SignificantWordSet) -> Self {
        Self { significant }
    }

    /// Score one sentence; `None` when it has no tokens at all
    ///
    /// The denominator counts every token, punctuation included.
    #[must_use]
    pub fn score_one(&self, sentence: &Sentence) -> Option<ScoredSentence> {
        let tokens = tokenize(&sentence.text);
        if tokens.is_empty() {
            return None;
        }

        let significant_count = tokens
            .iter()
            .filter(|token| self.significant.contains(token))
            .count();
        let token_count = tokens.len();

        Some(ScoredSentence {
            index: sentence.index,
            text: sentence.text.clone(),
            score: (significant_count as f64).powi(2) / token_count as f64,
            significant_count,
            token_count,
        })
    }

    /// Score sentences in document order
    pub fn score(&self, sentences: &[Sentence], duplicates: DuplicatePolicy) -> Vec<ScoredSentence> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut scored = Vec::with_capacity(sentences.len());

        for sentence in sentences {
            if duplicates == DuplicatePolicy::Collapse && !seen.insert(sentence.text.as_str()) {
                continue;
            }
            if let Some(entry) = self.score_one(sentence) {
                log::trace!(
                    "sentence {} scored {:.4} ({} significant / {} tokens)",
                    entry.index,
                    entry.score,
                    entry.significant_count,
                    entry.token_count
                );
                scored.push(entry);
            }
        }

        scored
    }
}

/// Keep the `limit` best sentences, highest score first; equal scores keep document order
#[must_use]
pub fn select_top(mut scored: Vec<ScoredSentence>, limit: usize) -> Vec<ScoredSentence> {
    scored.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.index.cmp(&b.index))
    });
    scored.truncate(limit);
    scored
}
