//! Input sources and sentence decoding
//!
//! Sentences arrive either as JSON records with parallel `words` and
//! `labels` arrays (one object per line, or a single JSON array of such
//! objects), or as plain text with one sentence of `word/TAG` tokens per
//! line. Blank lines are skipped in both layouts. Every decoding error
//! carries the 1-based line it was found on.

use crate::error::{EngineError, Result};
use clausal_core::{TaggedSentence, Token};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

/// Unified input abstraction
pub enum Input {
    /// Direct text
    Text(String),
    /// File path to read from
    File(PathBuf),
    /// Bytes to decode as UTF-8
    Bytes(Vec<u8>),
    /// Reader stream (stdin and the like)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&format!("<{} bytes>", bytes.len()))
                .finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the whole input as a string
    pub fn to_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path)
                .map_err(|e| EngineError::IoError(format!("Failed to read file {path:?}: {e}"))),
            Input::Bytes(bytes) => String::from_utf8(bytes)
                .map_err(|e| EngineError::EncodingError(format!("Invalid UTF-8: {e}"))),
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(|e| {
                    EngineError::IoError(format!("Failed to read from stream: {e}"))
                })?;
                String::from_utf8(buffer).map_err(|e| {
                    EngineError::EncodingError(format!("Invalid UTF-8 from stream: {e}"))
                })
            }
        }
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}

/// Layout of the sentence input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// JSON records with `words` and `labels`, one per line or in an array
    Jsonl,
    /// One sentence per line of `word/TAG` tokens
    Tagged,
}

impl InputFormat {
    /// Guess the layout from the first non-blank character
    pub fn detect(text: &str) -> Self {
        match text.trim_start().chars().next() {
            Some('{') | Some('[') => InputFormat::Jsonl,
            _ => InputFormat::Tagged,
        }
    }

    /// Format name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Jsonl => "jsonl",
            InputFormat::Tagged => "tagged",
        }
    }
}

impl FromStr for InputFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "jsonl" | "json" => Ok(InputFormat::Jsonl),
            "tagged" | "text" => Ok(InputFormat::Tagged),
            other => Err(EngineError::ConfigError(format!(
                "unknown input format '{other}'"
            ))),
        }
    }
}

/// One dataset record: parallel word and tag arrays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSentence {
    /// Surface tokens
    pub words: Vec<String>,
    /// Penn Treebank tags, one per word
    pub labels: Vec<String>,
}

impl RawSentence {
    fn into_sentence(self, line: usize) -> Result<TaggedSentence> {
        TaggedSentence::from_parts(self.words, self.labels)
            .map_err(|source| EngineError::InvalidSentence { line, source })
    }
}

/// Decode every sentence in `text`
pub fn decode_sentences(text: &str, format: InputFormat) -> Result<Vec<TaggedSentence>> {
    match format {
        InputFormat::Jsonl if text.trim_start().starts_with('[') => decode_json_array(text),
        InputFormat::Jsonl => decode_json_lines(text),
        InputFormat::Tagged => decode_tagged_lines(text),
    }
}

fn decode_json_lines(text: &str) -> Result<Vec<TaggedSentence>> {
    non_blank_lines(text)
        .map(|(line, content)| {
            let raw: RawSentence =
                serde_json::from_str(content).map_err(|e| EngineError::Decode {
                    line,
                    message: e.to_string(),
                })?;
            raw.into_sentence(line)
        })
        .collect()
}

fn decode_json_array(text: &str) -> Result<Vec<TaggedSentence>> {
    let records: Vec<RawSentence> =
        serde_json::from_str(text).map_err(|e| EngineError::Decode {
            line: e.line(),
            message: e.to_string(),
        })?;

    // Array elements have no line of their own; report the element position
    records
        .into_iter()
        .enumerate()
        .map(|(position, raw)| raw.into_sentence(position + 1))
        .collect()
}

fn decode_tagged_lines(text: &str) -> Result<Vec<TaggedSentence>> {
    non_blank_lines(text)
        .map(|(line, content)| {
            let tokens = content
                .split_whitespace()
                .map(|item| parse_tagged_token(item, line))
                .collect::<Result<Vec<_>>>()?;
            TaggedSentence::new(tokens)
                .map_err(|source| EngineError::InvalidSentence { line, source })
        })
        .collect()
}

/// Split `word/TAG` at the last slash, so "1/2/CD" is ("1/2", "CD")
fn parse_tagged_token(item: &str, line: usize) -> Result<Token> {
    match item.rsplit_once('/') {
        Some((word, tag)) if !word.is_empty() && !tag.is_empty() => Ok(Token::new(word, tag)),
        _ => Err(EngineError::Decode {
            line,
            message: format!("token '{item}' is not of the form word/TAG"),
        }),
    }
}

fn non_blank_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(index, content)| (index + 1, content.trim()))
        .filter(|(_, content)| !content.is_empty())
}
