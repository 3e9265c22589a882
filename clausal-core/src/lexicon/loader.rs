//! Embedded lexicon loader
//!
//! Parses the built-in lexicons on first access and caches them for the
//! life of the process.

use super::Lexicon;
use crate::error::{CoreError, Result};
use std::sync::{Arc, OnceLock};

/// Built-in English lexicon source
pub const EMBEDDED_ENGLISH: &str = include_str!("../../configs/lexicon/english.toml");

static ENGLISH: OnceLock<Result<Arc<Lexicon>>> = OnceLock::new();

/// Load a built-in lexicon by code or name
pub fn get_lexicon(code: &str) -> Result<Arc<Lexicon>> {
    match code.to_ascii_lowercase().as_str() {
        "en" | "english" => ENGLISH
            .get_or_init(|| Lexicon::from_toml_str(EMBEDDED_ENGLISH).map(Arc::new))
            .clone(),
        _ => Err(CoreError::UnknownLexicon(code.to_string())),
    }
}

/// `(code, name)` of every built-in lexicon
pub fn available_lexicons() -> &'static [(&'static str, &'static str)] {
    &[("en", "English")]
}
