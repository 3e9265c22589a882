//! Configuration structures and validation
//!
//! This module defines the TOML schema for lexicon files.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root lexicon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: Metadata,
    pub conjunctions: WordList,
    pub trigger_verbs: WordList,
    pub appositive_nouns: WordList,
    #[serde(default)]
    pub lemmas: ExtraLemmas,
    #[serde(default)]
    pub exceptions: Exceptions,
}

/// Lexicon metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Flat list of lexicon entries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordList {
    pub entries: Vec<String>,
}

/// Known lemmas beyond the trigger lists, used to accept
/// suffix-stripping candidates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtraLemmas {
    #[serde(default)]
    pub verbs: Vec<String>,
    #[serde(default)]
    pub nouns: Vec<String>,
}

/// Irregular inflections: surface form -> lemma
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Exceptions {
    #[serde(default)]
    pub verbs: HashMap<String, String>,
    #[serde(default)]
    pub nouns: HashMap<String, String>,
}

impl LexiconConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("Lexicon code must not be empty".to_string());
        }

        let lists = [
            ("conjunctions", &self.conjunctions),
            ("trigger_verbs", &self.trigger_verbs),
            ("appositive_nouns", &self.appositive_nouns),
        ];
        for (name, list) in lists {
            if list.entries.is_empty() {
                return Err(format!("No {name} entries defined"));
            }
            if list.entries.iter().any(|entry| entry.trim().is_empty()) {
                return Err(format!("Blank entry in {name}"));
            }
        }

        let exceptions = self.exceptions.verbs.iter().chain(&self.exceptions.nouns);
        for (form, lemma) in exceptions {
            if form.trim().is_empty() || lemma.trim().is_empty() {
                return Err(format!("Blank exception mapping: {form:?} -> {lemma:?}"));
            }
        }

        Ok(())
    }
}
