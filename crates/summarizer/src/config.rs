use crate::error::{Result, SummarizerError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of sentences in a summary
pub const DEFAULT_SUMMARY_LENGTH: usize = 3;

/// Default normalized-frequency threshold for significant words
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Configuration for summarization behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Maximum number of sentences to select
    pub summary_length: usize,

    /// Words whose normalized frequency is at least this value are significant
    pub threshold: f64,

    /// How textually identical sentences are scored
    pub duplicates: DuplicatePolicy,

    /// Language whose stopwords and abbreviations are used
    pub language: String,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            summary_length: DEFAULT_SUMMARY_LENGTH,
            threshold: DEFAULT_THRESHOLD,
            duplicates: DuplicatePolicy::Collapse,
            language: "english".to_string(),
        }
    }
}

impl SummarizerConfig {
    /// Builder: set summary length
    #[must_use]
    pub fn with_summary_length(mut self, summary_length: usize) -> Self {
        self.summary_length = summary_length;
        self
    }

    /// Builder: set significance threshold
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Builder: set duplicate sentence policy
    #[must_use]
    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Builder: set language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Parse configuration from TOML; missing keys take their defaults
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|err| SummarizerError::config(err.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&raw)
    }

    /// Validate configuration
    ///
    /// Thresholds outside `[0, 1]` are accepted: they simply produce a full or an empty
    /// significant-word set.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.summary_length == 0 {
            return Err("summary_length must be > 0".to_string());
        }

        if !self.threshold.is_finite() {
            return Err(format!(
                "threshold must be a finite number, got {}",
                self.threshold
            ));
        }

        if self.language.trim().is_empty() {
            return Err("language must not be empty".to_string());
        }

        Ok(())
    }
}

/// Policy for sentences whose text appears more than once in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Score by sentence text: repeated sentences collapse into one candidate,
    /// positioned at their first occurrence
    #[default]
    Collapse,

    /// Score every sentence position independently
    Keep,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = SummarizerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.summary_length, 3);
        assert_eq!(config.threshold, 0.5);
        assert_eq!(config.duplicates, DuplicatePolicy::Collapse);
    }

    #[test]
    fn test_config_validation() {
        let mut config = SummarizerConfig::default();

        config.summary_length = 0;
        assert!(config.validate().is_err());

        config.summary_length = 2;
        config.threshold = f64::NAN;
        assert!(config.validate().is_err());

        config.threshold = f64::INFINITY;
        assert!(config.validate().is_err());

        // Out-of-range but finite thresholds are fine
        config.threshold = 1.7;
        assert!(config.validate().is_ok());
        config.threshold = -0.2;
        assert!(config.validate().is_ok());

        config.language = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = SummarizerConfig::from_toml_str("threshold = 0.75\n").unwrap();
        assert_eq!(config.threshold, 0.75);
        assert_eq!(config.summary_length, DEFAULT_SUMMARY_LENGTH);
        assert_eq!(config.language, "english");
    }

    #[test]
    fn test_toml_duplicate_policy() {
        let config =
            SummarizerConfig::from_toml_str("summary_length = 5\nduplicates = \"keep\"\n").unwrap();
        assert_eq!(config.summary_length, 5);
        assert_eq!(config.duplicates, DuplicatePolicy::Keep);
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = SummarizerConfig::from_toml_str("summary_length = \"three\"").unwrap_err();
        assert!(matches!(err, SummarizerError::Config(_)));
    }
}
