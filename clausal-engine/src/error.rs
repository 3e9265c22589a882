//! Engine error types

use clausal_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core error outside of any particular input line
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// A sentence record could not be turned into a tagged sentence
    #[error("invalid sentence at line {line}: {source}")]
    InvalidSentence {
        /// 1-based line of the record in the input
        line: usize,
        /// The underlying precondition failure
        source: CoreError,
    },

    /// Malformed input record
    #[error("failed to decode line {line}: {message}")]
    Decode {
        /// 1-based line of the record in the input
        line: usize,
        /// Decoder message
        message: String,
    },

    /// Parallel execution error
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    ParallelError(String),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Encoding error (UTF-8, etc.)
    #[error("encoding error: {0}")]
    EncodingError(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for EngineError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        EngineError::EncodingError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
