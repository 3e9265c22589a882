//! Per-sentence annotation: filter, extract, render

use crate::record::ClauseTexts;
use clausal_core::{contains_quoted_speech, ClauseExtractor, TaggedSentence};

/// What happened to one considered sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Rejected by the quoted-speech filter
    Filtered,
    /// No matcher fired
    NoClauses,
    /// At least one clause found
    Annotated(ClauseTexts),
}

/// Applies the sentence filter and the clause extractor
#[derive(Debug, Clone)]
pub struct Annotator {
    extractor: ClauseExtractor,
}

impl Annotator {
    /// Create an annotator around an extractor
    pub fn new(extractor: ClauseExtractor) -> Self {
        Self { extractor }
    }

    /// Annotate a single sentence
    pub fn annotate(&self, sentence: &TaggedSentence) -> Outcome {
        if contains_quoted_speech(sentence) {
            return Outcome::Filtered;
        }

        let clauses = self.extractor.extract(sentence);
        if clauses.is_empty() {
            return Outcome::NoClauses;
        }
        Outcome::Annotated(ClauseTexts::render(sentence, &clauses))
    }
}
