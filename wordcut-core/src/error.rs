//! Error types for wordcut-core organized by processing stage.

use thiserror::Error;

/// Cut pipeline error variants organized by processing stage.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration stage error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Transcript loading stage error
    #[error(transparent)]
    Transcript(#[from] TranscriptError),

    /// Segment building stage error
    #[error(transparent)]
    MalformedCutPoints(#[from] CutPointError),
}

/// Configuration errors (offset, threshold, control tokens).
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Offset must be finite and non-negative
    #[error("invalid offset: {0}s (must be finite and >= 0)")]
    InvalidOffset(f64),

    /// Silence threshold must be finite and non-negative
    #[error("invalid silence threshold: {0}s (must be finite and >= 0)")]
    InvalidThreshold(f64),

    /// Media duration must be finite and positive
    #[error("invalid media duration: {0}s (must be finite and > 0)")]
    InvalidDuration(f64),

    /// Control token is empty after normalization
    #[error("control token {0:?} is empty after normalization")]
    EmptyToken(String),

    /// Start and end tokens normalize to the same word
    #[error("start and end tokens are indistinguishable: {start:?} / {end:?}")]
    AmbiguousTokens { start: String, end: String },
}

/// Transcript loading and validation errors.
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// Word records out of time order
    #[error("non-monotonic input: word {index} starts at {start}s before previous start {previous}s")]
    NonMonotonicInput {
        index: usize,
        start: f64,
        previous: f64,
    },

    /// Word ends before it starts
    #[error("word {index} ends at {end}s before it starts at {start}s")]
    InvertedWord { index: usize, start: f64, end: f64 },

    /// Word timestamp is NaN or infinite
    #[error("word {index} has a non-finite timestamp")]
    NonFinite { index: usize },

    /// IO error during transcript loading
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON does not match any supported transcript layout
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Cut point validation errors raised by the segment builder.
#[derive(Debug, Error, PartialEq)]
pub enum CutPointError {
    /// Different number of discard starts and discard ends
    #[error("malformed cut points: {starts} starts but {ends} ends")]
    Unbalanced { starts: usize, ends: usize },

    /// Discarded span ends before it starts
    #[error("malformed cut points: discarded span {index} ends at {end}s before it starts at {start}s")]
    InvertedSpan { index: usize, start: f64, end: f64 },

    /// Cut point is NaN or infinite
    #[error("malformed cut points: non-finite timestamp")]
    NonFinite,
}

/// Result type alias for wordcut-core operations.
pub type Result<T> = std::result::Result<T, Error>;

// Nested From implementations for automatic error conversion chains

// std::io::Error → TranscriptError → Error
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Transcript(TranscriptError::Io(e))
    }
}

// serde_json::Error → TranscriptError → Error
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Transcript(TranscriptError::Json(e))
    }
}
