//! Lexicon sets driving the clause matchers
//!
//! A lexicon bundles the subordinating conjunctions, the object-clause
//! trigger verbs and the appositive trigger nouns, together with the
//! lemmatizer tables used to reduce inflected forms before lookup. The
//! English lexicon is embedded in the crate; other lexicons can be loaded
//! from TOML files with the same schema.

pub mod config;
pub(crate) mod loader;
pub mod tables;

use crate::error::{CoreError, Result};
use crate::lemma::{Lemmatizer, MorphyLemmatizer, WordClass};
use std::path::Path;

pub use config::LexiconConfig;
pub use loader::{available_lexicons, get_lexicon, EMBEDDED_ENGLISH};
pub use tables::{ConjunctionTable, Phrase, WordSet};

/// Read-only lexicon tables
#[derive(Debug, Clone)]
pub struct Lexicon {
    code: String,
    name: String,
    conjunctions: ConjunctionTable,
    trigger_verbs: WordSet,
    appositive_nouns: WordSet,
    lemmatizer: MorphyLemmatizer,
}

impl Lexicon {
    /// Build runtime tables from a configuration
    pub fn from_config(config: &LexiconConfig) -> Result<Self> {
        config.validate().map_err(CoreError::InvalidLexicon)?;

        let lemmatizer = MorphyLemmatizer::new()
            .with_vocabulary(WordClass::Verb, &config.trigger_verbs.entries)
            .with_vocabulary(WordClass::Verb, &config.lemmas.verbs)
            .with_vocabulary(WordClass::Noun, &config.appositive_nouns.entries)
            .with_vocabulary(WordClass::Noun, &config.lemmas.nouns)
            .with_exceptions(WordClass::Verb, &config.exceptions.verbs)
            .with_exceptions(WordClass::Noun, &config.exceptions.nouns);

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            conjunctions: ConjunctionTable::from_entries(&config.conjunctions.entries),
            trigger_verbs: WordSet::from_entries(&config.trigger_verbs.entries),
            appositive_nouns: WordSet::from_entries(&config.appositive_nouns.entries),
            lemmatizer,
        })
    }

    /// Parse and build from a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: LexiconConfig =
            toml::from_str(source).map_err(|e| CoreError::InvalidLexicon(e.to_string()))?;
        Self::from_config(&config)
    }

    /// Load from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            CoreError::InvalidLexicon(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&source)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn conjunctions(&self) -> &ConjunctionTable {
        &self.conjunctions
    }

    pub fn trigger_verbs(&self) -> &WordSet {
        &self.trigger_verbs
    }

    pub fn appositive_nouns(&self) -> &WordSet {
        &self.appositive_nouns
    }

    /// Lemmatizer built from this lexicon's vocabulary and exceptions
    pub fn lemmatizer(&self) -> &MorphyLemmatizer {
        &self.lemmatizer
    }

    /// Whether `word`, read as a verb, reduces to a trigger verb
    pub fn is_trigger_verb(&self, word: &str, lemmatizer: &dyn Lemmatizer) -> bool {
        self.trigger_verbs
            .contains(&lemmatizer.lemmatize(word, WordClass::Verb))
    }

    /// Whether `word`, read as a noun, reduces to an appositive noun
    pub fn is_appositive_noun(&self, word: &str, lemmatizer: &dyn Lemmatizer) -> bool {
        self.appositive_nouns
            .contains(&lemmatizer.lemmatize(word, WordClass::Noun))
    }
}
