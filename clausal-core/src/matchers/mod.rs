//! Clause matchers over tagged token sequences
//!
//! Each matcher is a single left-to-right pass with bounded lookahead and
//! lookbehind. Matchers hold only read-only lexicon data, so one instance
//! can be shared across threads and applied to any number of sentences;
//! running a matcher twice on the same sentence yields the same matches in
//! the same order.
//!
//! # Example
//!
//! ```rust
//! use clausal_core::{ClauseExtractor, TaggedSentence};
//!
//! let extractor = ClauseExtractor::english().unwrap();
//! let sentence = TaggedSentence::from_pairs(&[
//!     ("He", "PRP"),
//!     ("said", "VBD"),
//!     ("that", "IN"),
//!     ("he", "PRP"),
//!     ("was", "VBD"),
//!     ("tired", "JJ"),
//!     (".", "."),
//! ])
//! .unwrap();
//!
//! let clauses = extractor.extract(&sentence);
//! assert_eq!(clauses.noun[0].text(&sentence), "that he was tired");
//! ```

pub mod adverbial;
pub mod attributive;
pub mod noun;

use crate::error::Result;
use crate::lemma::Lemmatizer;
use crate::lexicon::{get_lexicon, Lexicon};
use crate::token::{AttributiveClause, ClauseSpan, HasSpan, TaggedSentence};
use std::fmt;
use std::sync::Arc;

pub use adverbial::AdverbialMatcher;
pub use attributive::AttributiveMatcher;
pub use noun::NounClauseMatcher;

/// The three clause families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClauseKind {
    /// Relative clause modifying a preceding noun
    Attributive,
    /// Object or appositive clause
    Noun,
    /// Clause led by a subordinating conjunction
    Adverbial,
}

impl ClauseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClauseKind::Attributive => "attributive",
            ClauseKind::Noun => "noun",
            ClauseKind::Adverbial => "adverbial",
        }
    }
}

impl fmt::Display for ClauseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pattern matcher producing clause matches for one sentence
pub trait ClauseMatcher: Send + Sync {
    /// Match type produced
    type Match: HasSpan;

    /// All matches in discovery order; empty when nothing fires
    fn find(&self, sentence: &TaggedSentence) -> Vec<Self::Match>;

    /// Which clause family this matcher detects
    fn kind(&self) -> ClauseKind;
}

/// Clauses found in one sentence, grouped by family
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceClauses {
    pub attributive: Vec<AttributiveClause>,
    pub noun: Vec<ClauseSpan>,
    pub adverbial: Vec<ClauseSpan>,
}

impl SentenceClauses {
    /// True when no matcher fired
    pub fn is_empty(&self) -> bool {
        self.attributive.is_empty() && self.noun.is_empty() && self.adverbial.is_empty()
    }

    /// Total number of clauses across all families
    pub fn total(&self) -> usize {
        self.attributive.len() + self.noun.len() + self.adverbial.len()
    }
}

/// Runs all three matchers over a sentence
#[derive(Debug, Clone)]
pub struct ClauseExtractor {
    attributive: AttributiveMatcher,
    noun: NounClauseMatcher,
    adverbial: AdverbialMatcher,
}

impl ClauseExtractor {
    /// Create an extractor over `lexicon`, lemmatizing with its own tables
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            attributive: AttributiveMatcher::new(),
            noun: NounClauseMatcher::new(lexicon.clone()),
            adverbial: AdverbialMatcher::new(lexicon),
        }
    }

    /// Extractor with the embedded English lexicon
    pub fn english() -> Result<Self> {
        Ok(Self::new(get_lexicon("en")?))
    }

    /// Replace the lemmatizer used by the noun-clause matcher
    pub fn with_lemmatizer(mut self, lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        self.noun = self.noun.with_lemmatizer(lemmatizer);
        self
    }

    /// Run every matcher
    pub fn extract(&self, sentence: &TaggedSentence) -> SentenceClauses {
        SentenceClauses {
            attributive: self.attributive.find(sentence),
            noun: self.noun.find(sentence),
            adverbial: self.adverbial.find(sentence),
        }
    }

    /// The individual matchers
    pub fn attributive(&self) -> &AttributiveMatcher {
        &self.attributive
    }

    pub fn noun(&self) -> &NounClauseMatcher {
        &self.noun
    }

    pub fn adverbial(&self) -> &AdverbialMatcher {
        &self.adverbial
    }
}
