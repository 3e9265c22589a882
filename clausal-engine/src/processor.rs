//! Batch annotation processor and builder

use crate::{
    annotator::{Annotator, Outcome},
    config::EngineConfig,
    error::Result,
    executor::{executor_for, ExecutionMode, Executor},
    input::{decode_sentences, Input, InputFormat},
    record::AnnotationRecord,
};
use clausal_core::{get_lexicon, ClauseExtractor, Lemmatizer, Lexicon, TaggedSentence};
use std::ops::ControlFlow;
use std::sync::Arc;

/// Counters for one processed batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Sentences decoded from the input
    pub sentences_read: usize,
    /// Sentences examined before the batch closed
    pub considered: usize,
    /// Sentences rejected by the quoted-speech filter
    pub filtered: usize,
    /// Sentences without any clause
    pub without_clauses: usize,
    /// Records emitted
    pub emitted: usize,
}

/// Records of one batch and how they were obtained
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    /// Emitted records, indexed 1..=N
    pub records: Vec<AnnotationRecord>,
    /// Batch counters
    pub stats: BatchStats,
}

/// Fold outcomes in input order, closing the batch at `target` records
pub fn collect_batch<I>(outcomes: I, target: usize) -> Batch
where
    I: IntoIterator<Item = Outcome>,
{
    let folded = outcomes
        .into_iter()
        .try_fold(Batch::default(), |mut batch, outcome| {
            if batch.records.len() >= target {
                return ControlFlow::Break(batch);
            }
            batch.stats.considered += 1;
            match outcome {
                Outcome::Filtered => batch.stats.filtered += 1,
                Outcome::NoClauses => batch.stats.without_clauses += 1,
                Outcome::Annotated(texts) => {
                    let index = batch.records.len() + 1;
                    batch.records.push(texts.into_record(index));
                    batch.stats.emitted = index;
                }
            }
            ControlFlow::Continue(batch)
        });

    match folded {
        ControlFlow::Continue(batch) | ControlFlow::Break(batch) => batch,
    }
}

/// Main annotation processor
pub struct AnnotationProcessor {
    annotator: Annotator,
    executor: Box<dyn Executor>,
    config: EngineConfig,
}

impl std::fmt::Debug for AnnotationProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnnotationProcessor")
            .field("mode", &self.executor.mode())
            .field("config", &self.config)
            .finish()
    }
}

impl AnnotationProcessor {
    /// Create a processor with the English lexicon and default configuration
    pub fn new() -> Result<Self> {
        AnnotationProcessorBuilder::new().build()
    }

    /// Create a processor with a custom configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        AnnotationProcessorBuilder::new().config(config).build()
    }

    /// Decode `input` and annotate it as one batch
    pub fn process(&self, input: Input, format: Option<InputFormat>) -> Result<Batch> {
        let text = input.to_text()?;
        let format = format.unwrap_or_else(|| InputFormat::detect(&text));
        log::debug!("decoding input as {}", format.as_str());

        let sentences = decode_sentences(&text, format)?;
        self.process_sentences(&sentences)
    }

    /// Annotate already decoded sentences as one batch
    pub fn process_sentences(&self, sentences: &[TaggedSentence]) -> Result<Batch> {
        let sample = &sentences[..sentences.len().min(self.config.sample_size)];
        log::info!(
            "annotating {} of {} sentences ({:?}, target {})",
            sample.len(),
            sentences.len(),
            self.executor.mode(),
            self.config.target_size
        );

        let outcomes = self
            .executor
            .annotate(&self.annotator, sample, self.config.target_size)?;

        let mut batch = collect_batch(outcomes, self.config.target_size);
        batch.stats.sentences_read = sentences.len();
        log::debug!("batch stats: {:?}", batch.stats);
        Ok(batch)
    }

    /// Execution mode actually used
    pub fn mode(&self) -> ExecutionMode {
        self.executor.mode()
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Builder for AnnotationProcessor
#[derive(Default)]
pub struct AnnotationProcessorBuilder {
    config: EngineConfig,
    lexicon: Option<Arc<Lexicon>>,
    lemmatizer: Option<Arc<dyn Lemmatizer>>,
}

impl AnnotationProcessorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the number of leading sentences considered
    pub fn sample_size(mut self, size: usize) -> Self {
        self.config.sample_size = size;
        self
    }

    /// Set the number of records after which collection stops
    pub fn target_size(mut self, size: usize) -> Self {
        self.config.target_size = size;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Use a lexicon other than the embedded English one
    pub fn lexicon(mut self, lexicon: Arc<Lexicon>) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Override the lemmatizer used for trigger lookups
    pub fn lemmatizer(mut self, lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        self.lemmatizer = Some(lemmatizer);
        self
    }

    /// Build the processor
    pub fn build(self) -> Result<AnnotationProcessor> {
        self.config.validate()?;

        let lexicon = match self.lexicon {
            Some(lexicon) => lexicon,
            None => get_lexicon("en")?,
        };
        let mut extractor = ClauseExtractor::new(lexicon);
        if let Some(lemmatizer) = self.lemmatizer {
            extractor = extractor.with_lemmatizer(lemmatizer);
        }

        let executor = executor_for(self.config.execution_mode, self.config.threads)?;

        Ok(AnnotationProcessor {
            annotator: Annotator::new(extractor),
            executor,
            config: self.config,
        })
    }
}
