//! Heuristic clause extraction over part-of-speech-tagged English
//!
//! This crate finds three families of subordinate clauses in sentences that
//! have already been tokenized and tagged with the Penn Treebank tagset:
//!
//! - **Attributive** (relative) clauses and their antecedents
//! - **Noun** clauses: objects of reporting/cognition verbs and appositives
//!   of abstract nouns, with or without an explicit "that"
//! - **Adverbial** clauses led by single- or multi-word subordinating
//!   conjunctions
//!
//! Every matcher is a single linear pass over the tokens driven by fixed
//! tag classes and a read-only [`Lexicon`]. Nothing is parsed into a tree
//! and nothing is learned; a matcher either fires or returns no match.
//!
//! # Architecture
//!
//! - [`token`]: tokens, sentences and clause spans
//! - [`tagset`]: tag classes and per-matcher punctuation
//! - [`lexicon`]: TOML-backed lexicon tables (English embedded)
//! - [`lemma`]: dictionary lemmatizer with part-of-speech hints
//! - [`matchers`]: the three matchers and the combined extractor
//! - [`filter`]: sentence pre-filtering
//!
//! # Example
//!
//! ```rust
//! use clausal_core::{ClauseExtractor, TaggedSentence, Token};
//!
//! let extractor = ClauseExtractor::english().unwrap();
//! let sentence = TaggedSentence::from_parts(
//!     vec!["The", "book", "that", "she", "read", "was", "long", "."],
//!     vec!["DT", "NN", "WDT", "PRP", "VBD", "VBD", "JJ", "."],
//! )
//! .unwrap();
//!
//! let clauses = extractor.extract(&sentence);
//! assert_eq!(clauses.attributive[0].antecedent, Token::new("book", "NN"));
//! assert_eq!(clauses.attributive[0].span.text(&sentence), "that she read");
//! ```

pub mod error;
pub mod filter;
pub mod lemma;
pub mod lexicon;
pub mod matchers;
pub mod tagset;
pub mod token;

pub use error::{CoreError, Result};
pub use filter::contains_quoted_speech;
pub use lemma::{Lemmatizer, MorphyLemmatizer, WordClass};
pub use lexicon::{get_lexicon, Lexicon, LexiconConfig};
pub use matchers::{
    AdverbialMatcher, AttributiveMatcher, ClauseExtractor, ClauseKind, ClauseMatcher,
    NounClauseMatcher, SentenceClauses,
};
pub use token::{AttributiveClause, ClauseSpan, HasSpan, TaggedSentence, Token};
