//! Execution strategies for batch annotation

use crate::annotator::{Annotator, Outcome};
use crate::error::Result;
use clausal_core::TaggedSentence;

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Single-threaded, stops as soon as the target is reached
    Sequential,
    /// Sentences annotated on the rayon pool, then reduced in input order
    Parallel,
}

/// Trait for execution strategies
///
/// Implementations return outcomes in input order. They may stop early
/// once `target` sentences have been annotated, but must never skip or
/// reorder outcomes before that point.
pub trait Executor: Send + Sync {
    /// Annotate `sentences` in order
    fn annotate(
        &self,
        annotator: &Annotator,
        sentences: &[TaggedSentence],
        target: usize,
    ) -> Result<Vec<Outcome>>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Build the executor for `mode`
///
/// Without the `parallel` feature a parallel request falls back to the
/// sequential executor.
pub fn executor_for(mode: ExecutionMode, threads: Option<usize>) -> Result<Box<dyn Executor>> {
    match mode {
        ExecutionMode::Sequential => Ok(Box::new(SequentialExecutor)),
        #[cfg(feature = "parallel")]
        ExecutionMode::Parallel => {
            let executor = ParallelExecutor::new(threads)?;
            log::debug!("parallel executor with {} worker thread(s)", executor.threads());
            Ok(Box::new(executor))
        }
        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Parallel => {
            let _ = threads;
            log::warn!("parallel execution not compiled in, running sequentially");
            Ok(Box::new(SequentialExecutor))
        }
    }
}
