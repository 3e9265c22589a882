//! Adverbial clause matcher

use super::{ClauseKind, ClauseMatcher};
use crate::lexicon::Lexicon;
use crate::tagset::{is_verb, terminals, ADJECTIVE, PRESENT_PARTICIPLE, SUBORDINATOR, WH_ADVERB};
use crate::token::{ClauseSpan, TaggedSentence};
use std::sync::Arc;

/// Tags right after a conjunction that mark a false trigger
/// ("because of", "after doing", "as good")
const FALSE_TRIGGER_FOLLOWERS: &[&str] = &[SUBORDINATOR, PRESENT_PARTICIPLE, ADJECTIVE];

/// Finds clauses led by subordinating conjunctions
///
/// The clause runs from the conjunction to the token before the next
/// `,`, `.` or `;`, and is kept only if that stretch contains a verb.
/// Scanning resumes after the clause, so conjunctions inside it do not
/// trigger again.
#[derive(Debug, Clone)]
pub struct AdverbialMatcher {
    lexicon: Arc<Lexicon>,
}

impl AdverbialMatcher {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }
}

impl ClauseMatcher for AdverbialMatcher {
    type Match = ClauseSpan;

    fn find(&self, sentence: &TaggedSentence) -> Vec<ClauseSpan> {
        let tokens = sentence.tokens();
        let conjunctions = self.lexicon.conjunctions();
        let mut found = Vec::new();
        let mut index = 0;

        while index < tokens.len() {
            let token = &tokens[index];
            if token.tag != SUBORDINATOR && token.tag != WH_ADVERB {
                index += 1;
                continue;
            }

            let (width, known) = match conjunctions.longest_phrase_at(tokens, index) {
                Some(width) => (width, true),
                None => (1, conjunctions.contains(&token.text)),
            };

            let body = index + width;
            let Some(following) = tokens.get(body) else {
                index += 1;
                continue;
            };
            if following.has_tag(FALSE_TRIGGER_FOLLOWERS) {
                index = body;
                continue;
            }
            if !known {
                index += 1;
                continue;
            }

            let mut stop = body;
            let mut has_verb = false;
            while stop < tokens.len() && !tokens[stop].has_text(terminals::ADVERBIAL) {
                has_verb |= is_verb(&tokens[stop].tag);
                stop += 1;
            }

            if has_verb {
                found.push(ClauseSpan::new(index, stop - 1));
            }
            index = stop;
        }

        found
    }

    fn kind(&self) -> ClauseKind {
        ClauseKind::Adverbial
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::get_lexicon;

    fn find(pairs: &[(&str, &str)]) -> Vec<String> {
        let sentence = TaggedSentence::from_pairs(pairs).unwrap();
        AdverbialMatcher::new(get_lexicon("en").unwrap())
            .find(&sentence)
            .iter()
            .map(|span| span.text(&sentence))
            .collect()
    }

    #[test]
    fn test_single_word_conjunction() {
        let found = find(&[
            ("We", "PRP"),
            ("stayed", "VBD"),
            ("because", "IN"),
            ("it", "PRP"),
            ("rained", "VBD"),
            (".", "."),
        ]);
        assert_eq!(found, vec!["because it rained"]);
    }

    #[test]
    fn test_multi_word_conjunction_preferred() {
        let found = find(&[
            ("even", "IN"),
            ("though", "IN"),
            ("she", "PRP"),
            ("tried", "VBD"),
            (".", "."),
        ]);
        assert_eq!(found, vec!["even though she tried"]);
    }

    #[test]
    fn test_longest_phrase_wins_over_prefix() {
        let found = find(&[
            ("Stay", "VB"),
            ("as", "IN"),
            ("long", "RB"),
            ("as", "IN"),
            ("you", "PRP"),
            ("like", "VBP"),
            (",", ","),
            ("please", "UH"),
        ]);
        assert_eq!(found, vec!["as long as you like"]);
    }

    #[test]
    fn test_false_triggers_skipped() {
        let found = find(&[
            ("He", "PRP"),
            ("left", "VBD"),
            ("because", "IN"),
            ("of", "IN"),
            ("rain", "NN"),
            ("after", "IN"),
            ("eating", "VBG"),
            (".", "."),
        ]);
        assert!(found.is_empty());
    }

    #[test]
    fn test_adjective_after_conjunction_skipped() {
        let found = find(&[
            ("as", "IN"),
            ("good", "JJ"),
            ("as", "IN"),
            ("it", "PRP"),
            ("gets", "VBZ"),
        ]);
        // Only the second "as" opens a clause
        assert_eq!(found, vec!["as it gets"]);
    }

    #[test]
    fn test_clause_without_verb_discarded() {
        let found = find(&[
            ("Since", "IN"),
            ("Monday", "NNP"),
            (",", ","),
            ("it", "PRP"),
            ("rains", "VBZ"),
            (".", "."),
        ]);
        assert!(found.is_empty());
    }

    #[test]
    fn test_wh_adverb_trigger() {
        let found = find(&[
            ("Call", "VB"),
            ("me", "PRP"),
            ("when", "WRB"),
            ("you", "PRP"),
            ("arrive", "VBP"),
            (";", ":"),
            ("if", "IN"),
            ("you", "PRP"),
            ("can", "MD"),
            ("come", "VB"),
        ]);
        assert_eq!(found, vec!["when you arrive", "if you can come"]);
    }

    #[test]
    fn test_unknown_subordinator_ignored() {
        let found = find(&[
            ("He", "PRP"),
            ("sat", "VBD"),
            ("on", "IN"),
            ("it", "PRP"),
            ("and", "CC"),
            ("slept", "VBD"),
        ]);
        assert!(found.is_empty());
    }

    #[test]
    fn test_conjunction_at_sentence_end() {
        let found = find(&[("Come", "VB"), ("if", "IN")]);
        assert!(found.is_empty());
    }

    #[test]
    fn test_scan_resumes_after_clause() {
        // "before" sits inside the "because" clause and must not re-trigger
        let found = find(&[
            ("because", "IN"),
            ("he", "PRP"),
            ("left", "VBD"),
            ("before", "IN"),
            ("she", "PRP"),
            ("came", "VBD"),
            (".", "."),
        ]);
        assert_eq!(found, vec!["because he left before she came"]);
    }

    #[test]
    fn test_case_insensitive_conjunction() {
        let found = find(&[
            ("Although", "IN"),
            ("tired", "VBN"),
            ("they", "PRP"),
            ("won", "VBD"),
        ]);
        assert_eq!(found, vec!["Although tired they won"]);
    }
}
