//! Core error types (deterministic only)

use thiserror::Error;

/// Core errors (no I/O, no external failures)
///
/// Matching itself never fails; these cover sentence construction and
/// lexicon loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Word and tag sequences of different lengths
    #[error("word/tag length mismatch: {words} words, {tags} tags")]
    LengthMismatch {
        /// Number of words supplied
        words: usize,
        /// Number of tags supplied
        tags: usize,
    },

    /// A sentence without tokens
    #[error("tagged sentence must contain at least one token")]
    EmptySentence,

    /// Lexicon configuration failed to parse or validate
    #[error("invalid lexicon: {0}")]
    InvalidLexicon(String),

    /// No embedded lexicon for the requested code
    #[error("unknown lexicon code: {0}")]
    UnknownLexicon(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
