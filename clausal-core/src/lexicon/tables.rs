//! Runtime lookup tables built from lexicon configuration
//!
//! Entries are normalized to lower case with single spaces when the table
//! is built, so lookups never allocate beyond the lower-cased probe.

use crate::token::Token;
use smallvec::SmallVec;
use std::collections::HashSet;

/// Words of one multi-word conjunction
pub type Phrase = SmallVec<[String; 4]>;

/// Case-insensitive set of single entries
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    /// Build from raw entries
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: entries
                .into_iter()
                .map(|entry| normalize(entry.as_ref()))
                .filter(|entry| !entry.is_empty())
                .collect(),
        }
    }

    /// Membership test, ignoring case
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Subordinating conjunctions, single- and multi-word
#[derive(Debug, Clone, Default)]
pub struct ConjunctionTable {
    /// Every entry, multi-word ones space-joined
    entries: HashSet<String>,
    /// Multi-word entries, longest first
    phrases: Vec<Phrase>,
}

impl ConjunctionTable {
    /// Build from raw entries
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();

        for entry in entries {
            let normalized = normalize(entry.as_ref());
            if normalized.is_empty() || !table.entries.insert(normalized.clone()) {
                continue;
            }

            let words: Phrase = normalized.split(' ').map(str::to_string).collect();
            if words.len() > 1 {
                table.phrases.push(words);
            }
        }

        // Stable, so equal-length phrases keep configuration order
        table.phrases.sort_by(|a, b| b.len().cmp(&a.len()));
        table
    }

    /// Whether `phrase` (space-separated) is a known conjunction
    pub fn contains(&self, phrase: &str) -> bool {
        self.entries.contains(&normalize(phrase))
    }

    /// Width in tokens of the longest multi-word conjunction starting at
    /// `start`, if any
    pub fn longest_phrase_at(&self, tokens: &[Token], start: usize) -> Option<usize> {
        let rest = tokens.get(start..)?;

        self.phrases
            .iter()
            .find(|phrase| {
                phrase.len() <= rest.len()
                    && phrase
                        .iter()
                        .zip(rest)
                        .all(|(word, token)| token.is_word(word))
            })
            .map(|phrase| phrase.len())
    }

    /// Multi-word entries, longest first
    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Lower-case and collapse internal whitespace
fn normalize(entry: &str) -> String {
    entry
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
