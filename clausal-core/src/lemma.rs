//! Dictionary-based lemmatization with part-of-speech hints
//!
//! [`MorphyLemmatizer`] follows the WordNet morphy procedure: irregular
//! forms come from an exception table, regular forms from suffix
//! detachment rules whose candidates must appear in the vocabulary of the
//! requested word class. Words that cannot be resolved come back
//! lower-cased but otherwise unchanged.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

/// Part-of-speech hint for lemmatization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    Noun,
    Verb,
}

/// Maps inflected forms to their base form
pub trait Lemmatizer: Send + Sync + Debug {
    /// Lemma of `word` read as `class`; never fails
    fn lemmatize(&self, word: &str, class: WordClass) -> String;
}

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

#[derive(Debug, Clone, Default)]
struct ClassTable {
    exceptions: HashMap<String, String>,
    vocabulary: HashSet<String>,
}

/// Exception-table plus suffix-rule lemmatizer
#[derive(Debug, Clone, Default)]
pub struct MorphyLemmatizer {
    nouns: ClassTable,
    verbs: ClassTable,
}

impl MorphyLemmatizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register known lemmas for a word class
    pub fn with_vocabulary<I, S>(mut self, class: WordClass, lemmas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.table_mut(class)
            .vocabulary
            .extend(lemmas.into_iter().map(|lemma| lemma.as_ref().to_lowercase()));
        self
    }

    /// Register irregular `(form, lemma)` pairs for a word class
    ///
    /// Exception lemmas join the vocabulary as well.
    pub fn with_exceptions<I, F, L>(mut self, class: WordClass, pairs: I) -> Self
    where
        I: IntoIterator<Item = (F, L)>,
        F: AsRef<str>,
        L: AsRef<str>,
    {
        let table = self.table_mut(class);
        for (form, lemma) in pairs {
            let lemma = lemma.as_ref().to_lowercase();
            table.vocabulary.insert(lemma.clone());
            table.exceptions.insert(form.as_ref().to_lowercase(), lemma);
        }
        self
    }

    fn table(&self, class: WordClass) -> &ClassTable {
        match class {
            WordClass::Noun => &self.nouns,
            WordClass::Verb => &self.verbs,
        }
    }

    fn table_mut(&mut self, class: WordClass) -> &mut ClassTable {
        match class {
            WordClass::Noun => &mut self.nouns,
            WordClass::Verb => &mut self.verbs,
        }
    }
}

impl Lemmatizer for MorphyLemmatizer {
    fn lemmatize(&self, word: &str, class: WordClass) -> String {
        let word = word.to_lowercase();
        let table = self.table(class);

        if let Some(lemma) = table.exceptions.get(&word) {
            return lemma.clone();
        }

        let rules = match class {
            WordClass::Noun => NOUN_RULES,
            WordClass::Verb => VERB_RULES,
        };

        let mut candidates = vec![word.clone()];
        for (suffix, replacement) in rules {
            if let Some(stem) = word.strip_suffix(suffix) {
                if !stem.is_empty() {
                    candidates.push(format!("{stem}{replacement}"));
                }
            }
        }
        if class == WordClass::Verb {
            candidates.extend(undouble(&word));
        }

        // Shortest known candidate, first one on ties
        candidates
            .into_iter()
            .filter(|candidate| table.vocabulary.contains(candidate))
            .min_by_key(String::len)
            .unwrap_or(word)
    }
}

/// `admitted` -> `admit`, `betting` -> `bet`
fn undouble(word: &str) -> Option<String> {
    let stem = word
        .strip_suffix("ed")
        .or_else(|| word.strip_suffix("ing"))?;
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let previous = chars.next()?;

    if last == previous && !matches!(last, 'a' | 'e' | 'i' | 'o' | 'u' | 's' | 'l') {
        Some(stem[..stem.len() - last.len_utf8()].to_string())
    } else {
        None
    }
}
