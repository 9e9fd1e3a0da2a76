//! # Luhn Summarizer
//!
//! Extractive summarization by significant-word density (Luhn's heuristic).
//!
//! ## Philosophy
//!
//! The summarizer picks sentences verbatim from the document:
//! - Frequent content words are "significant"
//! - Sentences dense in significant words score highest
//! - The whole pipeline is a pure function of (text, config, language resources)
//!
//! ## Architecture
//!
//! ```text
//! Document
//!     │
//!     ├──> Sentence Segmentation (UAX #29 + abbreviation joins)
//!     │
//!     ├──> Tokenization (lowercase, word boundaries, punctuation kept)
//!     │
//!     ├──> Frequency Model
//!     │    ├─> Keep alphanumeric, non-stopword tokens
//!     │    └─> Normalize counts by the maximum count
//!     │
//!     ├──> Significance Filter (frequency >= threshold)
//!     │
//!     └──> Sentence Scoring & Selection
//!          ├─> score = significant_count² / token_count
//!          └─> Top-N by score, joined with a single space
//! ```
//!
//! ## Example
//!
//! ```rust
//! use luhn_summarizer::{Summarizer, SummarizerConfig};
//!
//! let config = SummarizerConfig::default()
//!     .with_summary_length(1)
//!     .with_threshold(0.75);
//! let summarizer = Summarizer::new(config);
//!
//! let text = "Cats are great pets. Dogs are loyal companions. \
//!             Cats and dogs are both popular.";
//!
//! let summary = summarizer.summarize(text).unwrap();
//! assert_eq!(summary, "Cats and dogs are both popular.");
//! ```

mod config;
mod error;
mod frequency;
mod language;
mod scoring;
mod segment;
mod summarizer;
mod tokenize;
mod types;

pub use config::{DuplicatePolicy, SummarizerConfig, DEFAULT_SUMMARY_LENGTH, DEFAULT_THRESHOLD};
pub use error::{Result, SummarizerError};
pub use frequency::{SignificantWordSet, WordFrequencyTable};
pub use language::LanguageResources;
pub use scoring::{select_top, SentenceScorer};
pub use segment::SentenceSegmenter;
pub use summarizer::{summarize, Summarizer};
pub use tokenize::{is_alphanumeric_token, tokenize};
pub use types::{ScoredSentence, Sentence, Summary};
