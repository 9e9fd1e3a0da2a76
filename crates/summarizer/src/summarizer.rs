use crate::config::SummarizerConfig;
use crate::error::{Result, SummarizerError};
use crate::frequency::WordFrequencyTable;
use crate::language::LanguageResources;
use crate::scoring::{select_top, SentenceScorer};
use crate::segment::SentenceSegmenter;
use crate::tokenize::tokenize;
use crate::types::Summary;
use std::sync::Arc;

/// Main summarizer interface
///
/// Holds read-only language resources and a configuration; every call is independent,
/// so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Summarizer {
    resources: Arc<LanguageResources>,
    config: SummarizerConfig,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(SummarizerConfig::default())
    }
}

impl Summarizer {
    /// Create a summarizer backed by the built-in English resources
    #[must_use]
    pub fn new(config: SummarizerConfig) -> Self {
        Self::with_resources(LanguageResources::english(), config)
    }

    /// Create a summarizer with explicit language resources
    #[must_use]
    pub fn with_resources(resources: Arc<LanguageResources>, config: SummarizerConfig) -> Self {
        Self { resources, config }
    }

    /// Create a summarizer resolving resources from `config.language`
    pub fn for_config(config: SummarizerConfig) -> Result<Self> {
        let resources = LanguageResources::for_language(&config.language)?;
        Ok(Self::with_resources(resources, config))
    }

    #[must_use]
    pub const fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    #[must_use]
    pub fn resources(&self) -> &LanguageResources {
        &self.resources
    }

    /// Summarize `text` into the selected sentences joined by a single space
    pub fn summarize(&self, text: &str) -> Result<String> {
        Ok(self.summarize_detailed(text)?.text())
    }

    /// Summarize `text`, keeping per-sentence scores
    ///
    /// An empty or blank document yields an empty summary. Otherwise the configuration is
    /// validated and a document without eligible words fails with `EmptyVocabulary`.
    pub fn summarize_detailed(&self, text: &str) -> Result<Summary> {
        let sentences = SentenceSegmenter::new(&self.resources).split(text);
        if sentences.is_empty() {
            log::debug!("Document has no sentences, returning empty summary");
            return Ok(Summary::default());
        }

        self.config
            .validate()
            .map_err(SummarizerError::InvalidArgument)?;

        let frequencies = WordFrequencyTable::build(tokenize(text), &self.resources)?;
        let significant = frequencies.significant_words(self.config.threshold);
        log::debug!(
            "{} sentences, {} eligible words (max count {}), {} significant at threshold {}",
            sentences.len(),
            frequencies.len(),
            frequencies.max_count(),
            significant.len(),
            self.config.threshold
        );

        let scored = SentenceScorer::new(&significant).score(&sentences, self.config.duplicates);
        let selected = select_top(scored, self.config.summary_length);

        Ok(Summary {
            sentences: selected,
            significant_words: significant.sorted(),
            total_sentences: sentences.len(),
        })
    }
}

/// Summarize `text` with the built-in English resources
///
/// Selects up to `summary_length` sentences whose significant-word density is highest,
/// where a word is significant when its normalized frequency is `>= threshold`.
pub fn summarize(text: &str, summary_length: usize, threshold: f64) -> Result<String> {
    let config = SummarizerConfig::default()
        .with_summary_length(summary_length)
        .with_threshold(threshold);
    Summarizer::new(config).summarize(text)
}
