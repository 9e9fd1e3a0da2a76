//! Read-only language resources: stopwords and sentence-boundary abbreviations.
//!
//! Resources are built once and shared behind an [`Arc`]; nothing in the pipeline mutates them.

use crate::error::{Result, SummarizerError};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

// Lowercase, without the trailing period.
const ENGLISH_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "e.g", "i.e", "cf",
    "al", "inc", "ltd", "co", "corp", "dept", "approx", "fig", "vol", "pp", "u.s",
    "u.k", "gen", "gov", "sen", "rep", "rev", "capt", "lt", "col", "sgt",
];

static ENGLISH: Lazy<Arc<LanguageResources>> = Lazy::new(|| {
    log::debug!(
        "Loading built-in English resources ({} stopwords, {} abbreviations)",
        ENGLISH_STOPWORDS.len(),
        ENGLISH_ABBREVIATIONS.len()
    );
    Arc::new(LanguageResources {
        language: "english".to_string(),
        stopwords: ENGLISH_STOPWORDS.iter().map(|w| (*w).to_string()).collect(),
        abbreviations: ENGLISH_ABBREVIATIONS.iter().map(|w| (*w).to_string()).collect(),
    })
});

/// Stopword set and abbreviation list for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageResources {
    language: String,
    stopwords: HashSet<String>,
    abbreviations: HashSet<String>,
}

impl LanguageResources {
    /// Shared built-in English resources, initialised on first use
    #[must_use]
    pub fn english() -> Arc<Self> {
        Arc::clone(&ENGLISH)
    }

    /// Resolve bundled resources by language name (`english` / `en`)
    pub fn for_language(name: &str) -> Result<Arc<Self>> {
        match name.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Self::english()),
            other => Err(SummarizerError::resource_unavailable(format!(
                "no stopword list bundled for language '{other}'"
            ))),
        }
    }

    /// Build resources from a custom stopword list, keeping the English abbreviations
    ///
    /// An empty list is rejected with `ResourceUnavailable`.
    pub fn from_stopwords<I, S>(language: impl Into<String>, words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let language = language.into();
        let stopwords: HashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        if stopwords.is_empty() {
            return Err(SummarizerError::resource_unavailable(format!(
                "stopword list for '{language}' is empty"
            )));
        }

        Ok(Self {
            language,
            stopwords,
            abbreviations: ENGLISH.abbreviations.clone(),
        })
    }

    /// Load a stopword list from a file with one word per line (`#` starts a comment line)
    pub fn from_stopword_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| {
            SummarizerError::resource_unavailable(format!(
                "cannot read stopword list {}: {err}",
                path.display()
            ))
        })?;

        let language = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("custom")
            .to_string();
        let words = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.starts_with('#'));

        Self::from_stopwords(language, words)
    }

    /// Builder: replace the abbreviation list used by sentence segmentation
    #[must_use]
    pub fn with_abbreviations<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.abbreviations = words
            .into_iter()
            .map(|w| w.as_ref().trim().trim_end_matches('.').to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        self
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Check a lowercase token against the stopword set
    #[must_use]
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Check a lowercase word (without its trailing period) against the abbreviation list
    #[must_use]
    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations.contains(word)
    }

    #[must_use]
    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }
}
