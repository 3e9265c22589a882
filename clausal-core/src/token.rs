//! Tagged tokens, sentences and clause spans

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A single (surface text, POS tag) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Surface text as it appeared in the corpus
    pub text: String,
    /// Penn Treebank part-of-speech tag
    pub tag: String,
}

impl Token {
    /// Create a new token
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
        }
    }

    /// Case-insensitive comparison of the surface text
    #[inline]
    pub fn is_word(&self, word: &str) -> bool {
        self.text.eq_ignore_ascii_case(word)
    }

    /// Whether the tag is one of `tags`
    #[inline]
    pub fn has_tag(&self, tags: &[&str]) -> bool {
        tags.contains(&self.tag.as_str())
    }

    /// Whether the surface text is one of `texts`
    #[inline]
    pub fn has_text(&self, texts: &[&str]) -> bool {
        texts.contains(&self.text.as_str())
    }
}

impl From<(&str, &str)> for Token {
    fn from((text, tag): (&str, &str)) -> Self {
        Self::new(text, tag)
    }
}

/// Ordered, non-empty sequence of tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedSentence {
    tokens: Vec<Token>,
}

impl TaggedSentence {
    /// Create a sentence from tokens
    pub fn new(tokens: Vec<Token>) -> Result<Self> {
        if tokens.is_empty() {
            return Err(CoreError::EmptySentence);
        }
        Ok(Self { tokens })
    }

    /// Zip parallel word and tag sequences into a sentence
    pub fn from_parts<W, T>(words: Vec<W>, tags: Vec<T>) -> Result<Self>
    where
        W: Into<String>,
        T: Into<String>,
    {
        if words.len() != tags.len() {
            return Err(CoreError::LengthMismatch {
                words: words.len(),
                tags: tags.len(),
            });
        }

        Self::new(
            words
                .into_iter()
                .zip(tags)
                .map(|(word, tag)| Token::new(word, tag))
                .collect(),
        )
    }

    /// Build from borrowed `(word, tag)` pairs
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self> {
        Self::new(pairs.iter().copied().map(Token::from).collect())
    }

    /// Number of tokens
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All tokens in order
    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Token at `index`, if any
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Space-joined surface text
    pub fn text(&self) -> String {
        join_words(&self.tokens)
    }
}

impl Index<usize> for TaggedSentence {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

/// Inclusive token range `[start, end]` within a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClauseSpan {
    /// First token of the clause
    pub start: usize,
    /// Last token of the clause (inclusive)
    pub end: usize,
}

impl ClauseSpan {
    /// Create a span; `start` must not exceed `end`
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "clause span start {start} > end {end}");
        Self { start, end }
    }

    /// Number of tokens covered
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Spans always cover at least one token
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `index` falls inside the span
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }

    /// Tokens covered by the span
    pub fn tokens<'a>(&self, sentence: &'a TaggedSentence) -> &'a [Token] {
        &sentence.tokens()[self.start..=self.end]
    }

    /// Space-joined text of the covered tokens
    pub fn text(&self, sentence: &TaggedSentence) -> String {
        join_words(self.tokens(sentence))
    }
}

/// A relative clause and the noun it modifies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributiveClause {
    /// Noun, pronoun or determiner the clause attaches to
    pub antecedent: Token,
    /// Clause tokens, starting at the relative word
    pub span: ClauseSpan,
}

/// Anything that resolves to a clause span
pub trait HasSpan {
    /// The underlying span
    fn span(&self) -> ClauseSpan;
}

impl HasSpan for ClauseSpan {
    fn span(&self) -> ClauseSpan {
        *self
    }
}

impl HasSpan for AttributiveClause {
    fn span(&self) -> ClauseSpan {
        self.span
    }
}

fn join_words(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
