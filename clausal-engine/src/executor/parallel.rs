//! Parallel execution strategy

use crate::{
    annotator::{Annotator, Outcome},
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor},
};
use clausal_core::TaggedSentence;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Parallel multi-threaded executor
///
/// Every sentence is annotated; the early stop happens in the reduce
/// that follows, so the result matches the sequential executor.
#[derive(Debug)]
pub struct ParallelExecutor {
    pool: Option<ThreadPool>,
}

impl ParallelExecutor {
    /// Create a parallel executor
    ///
    /// With `threads` set a dedicated pool of that size is built;
    /// otherwise the global rayon pool is used.
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let pool = threads
            .map(|count| {
                ThreadPoolBuilder::new()
                    .num_threads(count)
                    .build()
                    .map_err(|e| EngineError::ParallelError(e.to_string()))
            })
            .transpose()?;
        Ok(Self { pool })
    }

    /// Number of worker threads that will be used
    pub fn threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }
}

impl Executor for ParallelExecutor {
    fn annotate(
        &self,
        annotator: &Annotator,
        sentences: &[TaggedSentence],
        _target: usize,
    ) -> Result<Vec<Outcome>> {
        let run = || {
            sentences
                .par_iter()
                .map(|sentence| annotator.annotate(sentence))
                .collect::<Vec<_>>()
        };

        Ok(match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
