//! Configuration types for the engine

use crate::error::{EngineError, Result};
use crate::ExecutionMode;

/// Default number of leading sentences considered per batch
pub const DEFAULT_SAMPLE_SIZE: usize = 400;

/// Default number of annotated sentences after which collection stops
pub const DEFAULT_TARGET_SIZE: usize = 120;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Only the first `sample_size` sentences are considered
    pub sample_size: usize,
    /// Collection stops once this many records are gathered
    pub target_size: usize,
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of threads for parallel execution (None = auto)
    pub threads: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            target_size: DEFAULT_TARGET_SIZE,
            execution_mode: ExecutionMode::Sequential,
            threads: None,
        }
    }
}

impl EngineConfig {
    /// Configuration using parallel execution with automatic thread count
    pub fn parallel() -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            ..Self::default()
        }
    }

    /// Reject configurations that can never emit a record
    pub fn validate(&self) -> Result<()> {
        if self.sample_size == 0 {
            return Err(EngineError::ConfigError(
                "sample_size must be at least 1".to_string(),
            ));
        }
        if self.target_size == 0 {
            return Err(EngineError::ConfigError(
                "target_size must be at least 1".to_string(),
            ));
        }
        if self.threads == Some(0) {
            return Err(EngineError::ConfigError(
                "thread count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
