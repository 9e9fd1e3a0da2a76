use crate::error::{Result, SummarizerError};
use crate::language::LanguageResources;
use crate::tokenize::is_alphanumeric_token;
use std::collections::{HashMap, HashSet};

/// Raw and normalized counts of eligible words in one document
///
/// A token is eligible when it is alphanumeric and not a stopword. Normalized frequency is
/// `count / max_count`, so the most frequent eligible word(s) sit at exactly `1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct WordFrequencyTable {
    counts: HashMap<String, usize>,
    max_count: usize,
}

impl WordFrequencyTable {
    /// Count eligible tokens from a whole-document token stream
    ///
    /// Fails with [`SummarizerError::EmptyVocabulary`] when no token is eligible.
    pub fn build<I, S>(tokens: I, resources: &LanguageResources) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in tokens {
            let token = token.as_ref();
            if is_alphanumeric_token(token) && !resources.is_stopword(token) {
                *counts.entry(token.to_string()).or_insert(0) += 1;
            }
        }

        let max_count = counts
            .values()
            .copied()
            .max()
            .ok_or(SummarizerError::EmptyVocabulary)?;

        Ok(Self { counts, max_count })
    }

    /// Normalized frequency in `(0, 1]`, or `None` for words not in the table
    #[must_use]
    pub fn frequency(&self, word: &str) -> Option<f64> {
        self.counts
            .get(word)
            .map(|&count| count as f64 / self.max_count as f64)
    }

    #[must_use]
    pub fn raw_count(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    #[must_use]
    pub const fn max_count(&self) -> usize {
        self.max_count
    }

    /// Number of distinct eligible words
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Words with their normalized frequency, most frequent first, ties alphabetical
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
            .into_iter()
            .map(|(word, count)| (word, count as f64 / self.max_count as f64))
            .collect()
    }

    /// Words whose normalized frequency is `>= threshold`
    #[must_use]
    pub fn significant_words(&self, threshold: f64) -> SignificantWordSet {
        let words: HashSet<String> = self
            .counts
            .iter()
            .filter(|&(_, &count)| count as f64 / self.max_count as f64 >= threshold)
            .map(|(word, _)| word.clone())
            .collect();
        SignificantWordSet { words }
    }
}

/// Words considered significant for sentence scoring
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignificantWordSet {
    words: HashSet<String>,
}

impl SignificantWordSet {
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// True when every word of `self` is also in `other`
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.words.is_subset(&other.words)
    }

    /// Words in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<String> {
        let mut words: Vec<String> = self.words.iter().cloned().collect();
        words.sort();
        words
    }
}
