//! Attributive (relative) clause matcher
//!
//! A relative pronoun or adverb opens the clause. An optional run of
//! nominal and modifier tokens (the clause subject) may precede its verb;
//! the verb group is then extended greedily. Without a verb the clause
//! runs to the next terminal punctuation mark. The clause is kept only
//! when a nominal antecedent sits directly before the relative word,
//! optionally separated by one punctuation token.

use super::{ClauseKind, ClauseMatcher};
use crate::tagset::{
    is_verb, terminals, CLAUSE_SEPARATORS, FINITE_VERBS, MODAL, MODIFIERS, NOMINALS, WH_WORDS,
};
use crate::token::{AttributiveClause, ClauseSpan, TaggedSentence, Token};

/// Finds relative clauses and their antecedents
#[derive(Debug, Clone, Default)]
pub struct AttributiveMatcher;

impl AttributiveMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl ClauseMatcher for AttributiveMatcher {
    type Match = AttributiveClause;

    fn find(&self, sentence: &TaggedSentence) -> Vec<AttributiveClause> {
        let tokens = sentence.tokens();
        let mut found = Vec::new();

        for (start, token) in tokens.iter().enumerate() {
            // "what" heads free relatives, which have no antecedent
            if !token.has_tag(WH_WORDS) || token.is_word("what") {
                continue;
            }

            let verb_at = skip_pre_verbal(tokens, start + 1);
            let end = match tokens.get(verb_at) {
                Some(verb) if is_verb(&verb.tag) => {
                    let has_modal = tokens[start + 1..verb_at].iter().any(|t| t.tag == MODAL);
                    extend_predicate(tokens, verb_at, has_modal)
                }
                _ => fragment_end(tokens, verb_at),
            };

            if let Some(antecedent) = antecedent(tokens, start) {
                found.push(AttributiveClause {
                    antecedent: antecedent.clone(),
                    span: ClauseSpan::new(start, end),
                });
            }
        }

        found
    }

    fn kind(&self) -> ClauseKind {
        ClauseKind::Attributive
    }
}

/// First index at or after `from` that is not part of the clause subject
fn skip_pre_verbal(tokens: &[Token], from: usize) -> usize {
    let mut index = from;
    while tokens.get(index).is_some_and(|token| {
        token.has_tag(NOMINALS)
            || token.has_tag(MODIFIERS)
            || token.tag == MODAL
            || token.has_tag(CLAUSE_SEPARATORS)
    }) {
        index += 1;
    }
    index
}

/// Last index of the verb group starting at `verb_at`
///
/// A second tensed verb after the clause already has one (tensed verb or
/// modal) belongs to the main clause and stops the extension.
fn extend_predicate(tokens: &[Token], verb_at: usize, has_modal: bool) -> usize {
    let mut end = verb_at;
    let mut tensed = has_modal || tokens[verb_at].has_tag(FINITE_VERBS);

    while let Some(next) = tokens.get(end + 1) {
        let is_finite = next.has_tag(FINITE_VERBS);
        if is_finite && tensed {
            break;
        }
        let continues = is_verb(&next.tag)
            || next.has_tag(MODIFIERS)
            || next.has_tag(NOMINALS)
            || next.has_tag(CLAUSE_SEPARATORS);
        if !continues {
            break;
        }
        tensed |= is_finite;
        end += 1;
    }

    end
}

/// Verbless clause: through the next terminal mark, or the last token
fn fragment_end(tokens: &[Token], from: usize) -> usize {
    let mut end = from;
    while end < tokens.len() && !tokens[end].has_text(terminals::ATTRIBUTIVE) {
        end += 1;
    }
    end.min(tokens.len() - 1)
}

fn antecedent(tokens: &[Token], start: usize) -> Option<&Token> {
    let mut index = start.checked_sub(1)?;
    if tokens[index].has_text(terminals::ATTRIBUTIVE) {
        index = index.checked_sub(1)?;
    }

    let candidate = &tokens[index];
    candidate.has_tag(NOMINALS).then_some(candidate)
}
