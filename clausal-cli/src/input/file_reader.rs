//! File reading utilities

use anyhow::{Context, Result};
use clausal_engine::{decode_sentences, InputFormat, TaggedSentence};
use std::fs;
use std::path::Path;

/// Reads sentence files
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Read and decode all sentences of a file
    ///
    /// Without an explicit format the layout is detected from the content.
    pub fn read_sentences(path: &Path, format: Option<InputFormat>) -> Result<Vec<TaggedSentence>> {
        let text = Self::read_text(path)?;
        let format = format.unwrap_or_else(|| InputFormat::detect(&text));
        log::debug!("reading {} as {}", path.display(), format.as_str());

        decode_sentences(&text, format)
            .with_context(|| format!("Failed to decode {}", path.display()))
    }
}
