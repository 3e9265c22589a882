//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No input file matched the given patterns
    NoInput(String),
    /// Configuration file could not be used
    ConfigError(String),
    /// Lexicon file failed validation
    InvalidLexicon(String),
    /// Annotation pipeline failure
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInput(patterns) => write!(f, "No input files match: {patterns}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InvalidLexicon(msg) => write!(f, "Invalid lexicon: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CliError::NoInput("data/*.jsonl".to_string()).to_string(),
            "No input files match: data/*.jsonl"
        );
        assert_eq!(
            CliError::ConfigError("target_size must be at least 1".to_string()).to_string(),
            "Configuration error: target_size must be at least 1"
        );
        assert!(CliError::InvalidLexicon("empty code".to_string())
            .to_string()
            .starts_with("Invalid lexicon:"));
        assert!(CliError::ProcessingError("bad line".to_string())
            .to_string()
            .starts_with("Processing error:"));
    }

    #[test]
    fn test_converts_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::NoInput("*.txt".to_string()).into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
