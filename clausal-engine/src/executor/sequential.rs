//! Sequential execution strategy

use crate::{
    annotator::{Annotator, Outcome},
    error::Result,
    executor::{ExecutionMode, Executor},
};
use clausal_core::TaggedSentence;

/// Sequential single-threaded executor
#[derive(Debug, Clone)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn annotate(
        &self,
        annotator: &Annotator,
        sentences: &[TaggedSentence],
        target: usize,
    ) -> Result<Vec<Outcome>> {
        let mut outcomes = Vec::new();
        let mut annotated = 0;

        for sentence in sentences {
            if annotated >= target {
                break;
            }
            let outcome = annotator.annotate(sentence);
            if matches!(outcome, Outcome::Annotated(_)) {
                annotated += 1;
            }
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
