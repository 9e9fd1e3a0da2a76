use thiserror::Error;

/// Result type for summarizer operations
pub type Result<T> = std::result::Result<T, SummarizerError>;

/// Errors that can occur while summarizing a document
#[derive(Error, Debug)]
pub enum SummarizerError {
    /// The document has no alphanumeric, non-stopword tokens to build frequencies from
    #[error("Empty vocabulary: document contains no eligible (alphanumeric, non-stopword) words")]
    EmptyVocabulary,

    /// A caller-supplied argument is out of range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Stopword or segmentation resources could not be loaded
    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),

    /// Configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SummarizerError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a resource unavailable error
    pub fn resource_unavailable(msg: impl Into<String>) -> Self {
        Self::ResourceUnavailable(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
