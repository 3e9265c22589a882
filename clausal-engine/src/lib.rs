//! Annotation pipeline for clause extraction
//!
//! This crate turns a dataset of tagged sentences into annotation
//! records: it decodes the input, keeps the first `sample_size`
//! sentences, drops sentences with quoted speech or without clauses, and
//! closes the batch once `target_size` records have been gathered.
//! Sequential and parallel execution give identical batches.

#![warn(missing_docs)]

pub mod annotator;
pub mod config;
pub mod error;
pub mod executor;
pub mod input;
pub mod processor;
pub mod record;

// Re-export key types
pub use annotator::{Annotator, Outcome};
pub use config::{EngineConfig, DEFAULT_SAMPLE_SIZE, DEFAULT_TARGET_SIZE};
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor};
pub use input::{decode_sentences, Input, InputFormat, RawSentence};
pub use processor::{
    collect_batch, AnnotationProcessor, AnnotationProcessorBuilder, Batch, BatchStats,
};
pub use record::{AnnotationRecord, ClauseTexts};

// Re-export from core for convenience
pub use clausal_core::{get_lexicon, ClauseExtractor, Lexicon, TaggedSentence, Token};
