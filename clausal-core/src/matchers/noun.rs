//! Noun clause matcher
//!
//! Two rules run side by side over each token:
//!
//! * **"that"-marked clauses**: `that/IN` after an appositive noun
//!   ("the belief that ...") or after a trigger verb ("said that ...").
//!   A preceding adverb ("so that", "so quickly that") disables both.
//! * **zero-marker clauses**: a trigger verb with a nominal subject whose
//!   object is itself a clause ("I think he left").
//!
//! Noun clauses run through commas; only `.` and `;` close them.

use super::{ClauseKind, ClauseMatcher};
use crate::lemma::Lemmatizer;
use crate::lexicon::Lexicon;
use crate::tagset::{
    is_verb, terminals, ADVERB, COMMA, COMMON_NOUNS, DETERMINERS_ADJECTIVES, EXISTENTIAL, MODAL,
    NOUNS_PRONOUNS, SUBORDINATOR,
};
use crate::token::{ClauseSpan, TaggedSentence, Token};
use std::sync::Arc;

/// Finds object and appositive clauses
#[derive(Debug, Clone)]
pub struct NounClauseMatcher {
    lexicon: Arc<Lexicon>,
    lemmatizer: Option<Arc<dyn Lemmatizer>>,
}

impl NounClauseMatcher {
    /// Matcher using the lexicon's own lemmatizer
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            lemmatizer: None,
        }
    }

    /// Use a different lemmatizer for trigger lookups
    pub fn with_lemmatizer(mut self, lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        self.lemmatizer = Some(lemmatizer);
        self
    }

    fn lemmatizer(&self) -> &dyn Lemmatizer {
        match &self.lemmatizer {
            Some(lemmatizer) => lemmatizer.as_ref(),
            None => self.lexicon.lemmatizer(),
        }
    }

    /// Clause introduced by `that` at `at`
    fn that_clause(&self, tokens: &[Token], at: usize) -> Option<ClauseSpan> {
        let previous = &tokens[at.checked_sub(1)?];
        if previous.tag == ADVERB {
            return None;
        }

        if at > 1
            && previous.has_tag(COMMON_NOUNS)
            && self
                .lexicon
                .is_appositive_noun(&previous.text, self.lemmatizer())
        {
            let mut head = at + 1;
            while tokens.get(head).is_some_and(|token| {
                token.has_tag(DETERMINERS_ADJECTIVES) || token.tag == SUBORDINATOR
            }) {
                head += 1;
            }
            if tokens
                .get(head)
                .is_some_and(|token| token.has_tag(NOUNS_PRONOUNS))
            {
                return Some(ClauseSpan::new(at, clause_end(tokens, head)));
            }
        }

        let verb = tokens[..at].iter().rposition(|token| is_verb(&token.tag))?;
        self.lexicon
            .is_trigger_verb(&tokens[verb].text, self.lemmatizer())
            .then(|| ClauseSpan::new(at, clause_end(tokens, at)))
    }

    /// Unmarked object clause after the trigger verb at `at`
    fn zero_marker_clause(&self, tokens: &[Token], at: usize) -> Option<ClauseSpan> {
        let subject = tokens[..at].iter().rposition(|token| token.tag != COMMA)?;
        if !tokens[subject].has_tag(NOUNS_PRONOUNS) {
            return None;
        }

        let mut verb = at + 1;
        if tokens.get(verb).is_some_and(|token| token.tag == EXISTENTIAL) {
            verb += 1;
        }
        while tokens.get(verb).is_some_and(|token| {
            token.has_tag(DETERMINERS_ADJECTIVES)
                || token.has_tag(NOUNS_PRONOUNS)
                || token.tag == MODAL
        }) {
            verb += 1;
        }
        if !tokens.get(verb).is_some_and(|token| is_verb(&token.tag)) {
            return None;
        }

        self.lexicon
            .is_trigger_verb(&tokens[at].text, self.lemmatizer())
            .then(|| ClauseSpan::new(at + 1, clause_end(tokens, verb)))
    }
}

impl ClauseMatcher for NounClauseMatcher {
    type Match = ClauseSpan;

    fn find(&self, sentence: &TaggedSentence) -> Vec<ClauseSpan> {
        let tokens = sentence.tokens();
        let mut found = Vec::new();

        for (index, token) in tokens.iter().enumerate() {
            if token.is_word("that") && token.tag == SUBORDINATOR {
                found.extend(self.that_clause(tokens, index));
            }
            if is_verb(&token.tag) {
                found.extend(self.zero_marker_clause(tokens, index));
            }
        }

        found
    }

    fn kind(&self) -> ClauseKind {
        ClauseKind::Noun
    }
}

/// Last token before the next `.`/`;` after `from`, or the last token
fn clause_end(tokens: &[Token], from: usize) -> usize {
    let mut end = from;
    while tokens
        .get(end + 1)
        .is_some_and(|token| !token.has_text(terminals::NOUN))
    {
        end += 1;
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lemma::WordClass;
    use crate::lexicon::get_lexicon;

    fn find(pairs: &[(&str, &str)]) -> (TaggedSentence, Vec<String>) {
        let sentence = TaggedSentence::from_pairs(pairs).unwrap();
        let matcher = NounClauseMatcher::new(get_lexicon("en").unwrap());
        let texts = matcher
            .find(&sentence)
            .iter()
            .map(|span| span.text(&sentence))
            .collect();
        (sentence, texts)
    }

    #[test]
    fn test_object_clause_after_trigger_verb() {
        let (_, found) = find(&[
            ("He", "PRP"),
            ("said", "VBD"),
            ("that", "IN"),
            ("he", "PRP"),
            ("was", "VBD"),
            ("tired", "JJ"),
            (".", "."),
        ]);
        assert_eq!(found, vec!["that he was tired"]);
    }

    #[test]
    fn test_so_that_is_excluded() {
        let (_, found) = find(&[
            ("He", "PRP"),
            ("said", "VBD"),
            ("so", "RB"),
            ("that", "IN"),
            ("it", "PRP"),
            ("worked", "VBD"),
            (".", "."),
        ]);
        assert!(found.is_empty());
    }

    #[test]
    fn test_appositive_clause() {
        let (_, found) = find(&[
            ("The", "DT"),
            ("beliefs", "NNS"),
            ("that", "IN"),
            ("the", "DT"),
            ("earth", "NN"),
            ("is", "VBZ"),
            ("flat", "JJ"),
            (",", ","),
            ("sadly", "RB"),
            ("persist", "VBP"),
            (";", ":"),
            ("still", "RB"),
        ]);
        // Commas do not close a noun clause
        assert_eq!(found, vec!["that the earth is flat , sadly persist"]);
    }

    #[test]
    fn test_appositive_without_noun_falls_back_to_verb_rule() {
        // "fact that" followed by a verb, with a trigger verb earlier
        let (_, found) = find(&[
            ("They", "PRP"),
            ("noted", "VBD"),
            ("the", "DT"),
            ("fact", "NN"),
            ("that", "IN"),
            ("seemed", "VBD"),
            ("odd", "JJ"),
            (".", "."),
        ]);
        assert_eq!(found, vec!["that seemed odd"]);
    }

    #[test]
    fn test_nearest_verb_decides() {
        // "left" is the nearest verb and is not a trigger
        let (_, found) = find(&[
            ("She", "PRP"),
            ("said", "VBD"),
            ("he", "PRP"),
            ("left", "VBD"),
            ("the", "DT"),
            ("day", "NN"),
            ("that", "IN"),
            ("it", "PRP"),
            ("rained", "VBD"),
            (".", "."),
        ]);
        // Only the zero-marker clause after "said" fires
        assert_eq!(found, vec!["he left the day that it rained"]);
    }

    #[test]
    fn test_that_at_sentence_start_is_ignored() {
        let (_, found) = find(&[
            ("That", "IN"),
            ("he", "PRP"),
            ("lied", "VBD"),
            ("is", "VBZ"),
            ("clear", "JJ"),
        ]);
        assert!(found.is_empty());
    }

    #[test]
    fn test_zero_marker_clause() {
        let (sentence, found) = find(&[
            ("I", "PRP"),
            ("think", "VBP"),
            ("there", "EX"),
            ("will", "MD"),
            ("be", "VB"),
            ("rain", "NN"),
            (".", "."),
        ]);
        assert_eq!(found, vec!["there will be rain"]);
        assert_eq!(sentence.len(), 7);
    }

    #[test]
    fn test_zero_marker_subject_behind_commas() {
        let (_, found) = find(&[
            ("Critics", "NNS"),
            (",", ","),
            ("argue", "VBP"),
            ("the", "DT"),
            ("plan", "NN"),
            ("failed", "VBD"),
            (";", ":"),
        ]);
        assert_eq!(found, vec!["the plan failed"]);
    }

    #[test]
    fn test_zero_marker_needs_subject_and_embedded_verb() {
        let (_, found) = find(&[("Say", "VB"), ("it", "PRP"), ("is", "VBZ")]);
        assert!(found.is_empty(), "no subject before the trigger");

        let (_, found) = find(&[
            ("We", "PRP"),
            ("know", "VBP"),
            ("the", "DT"),
            ("answer", "NN"),
            (".", "."),
        ]);
        assert!(found.is_empty(), "no embedded verb");
    }

    #[test]
    fn test_overlapping_clauses_are_kept() {
        let (_, found) = find(&[
            ("He", "PRP"),
            ("said", "VBD"),
            ("that", "IN"),
            ("he", "PRP"),
            ("knew", "VBD"),
            ("she", "PRP"),
            ("left", "VBD"),
            (".", "."),
        ]);
        assert_eq!(found, vec!["that he knew she left", "she left"]);
    }

    #[derive(Debug)]
    struct Identity;

    impl Lemmatizer for Identity {
        fn lemmatize(&self, word: &str, _class: WordClass) -> String {
            word.to_lowercase()
        }
    }

    #[test]
    fn test_custom_lemmatizer() {
        let sentence = TaggedSentence::from_pairs(&[
            ("He", "PRP"),
            ("said", "VBD"),
            ("that", "IN"),
            ("he", "PRP"),
            ("left", "VBD"),
        ])
        .unwrap();
        let matcher =
            NounClauseMatcher::new(get_lexicon("en").unwrap()).with_lemmatizer(Arc::new(Identity));

        assert!(matcher.find(&sentence).is_empty());
    }
}
