//! Sentence pre-filtering

use crate::tagset::{CLOSE_QUOTE, OPEN_QUOTE};
use crate::token::TaggedSentence;

/// Whether a sentence should be skipped because it carries quoted speech
///
/// True only when some token contains an opening double quote and some
/// (possibly other) token contains a closing one. A lone quote of either
/// kind does not exclude the sentence.
pub fn contains_quoted_speech(sentence: &TaggedSentence) -> bool {
    let tokens = sentence.tokens();
    tokens.iter().any(|token| token.text.contains(OPEN_QUOTE))
        && tokens.iter().any(|token| token.text.contains(CLOSE_QUOTE))
}
