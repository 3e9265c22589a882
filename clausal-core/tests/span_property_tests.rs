//! Property tests for clause span invariants on arbitrary tagged input

use clausal_core::{
    tagset, AdverbialMatcher, AttributiveMatcher, ClauseExtractor, ClauseMatcher,
    NounClauseMatcher, TaggedSentence,
};
use proptest::prelude::*;

const VOCABULARY: &[(&str, &str)] = &[
    ("the", "DT"),
    ("a", "DT"),
    ("three", "CD"),
    ("old", "JJ"),
    ("quickly", "RB"),
    ("so", "RB"),
    ("man", "NN"),
    ("fact", "NN"),
    ("ideas", "NNS"),
    ("London", "NNP"),
    ("she", "PRP"),
    ("they", "PRP"),
    ("there", "EX"),
    ("will", "MD"),
    ("said", "VBD"),
    ("thinks", "VBZ"),
    ("know", "VBP"),
    ("left", "VBD"),
    ("go", "VB"),
    ("running", "VBG"),
    ("seen", "VBN"),
    ("that", "IN"),
    ("that", "WDT"),
    ("which", "WDT"),
    ("who", "WP"),
    ("what", "WP"),
    ("when", "WRB"),
    ("where", "WRB"),
    ("because", "IN"),
    ("even", "IN"),
    ("though", "IN"),
    ("as", "IN"),
    ("long", "RB"),
    ("of", "IN"),
    ("and", "CC"),
    (",", ","),
    (".", "."),
    (";", ":"),
    ("#", "#"),
];

fn sentences() -> impl Strategy<Value = Vec<(&'static str, &'static str)>> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 1..30)
}

proptest! {
    #[test]
    fn attributive_spans_are_well_formed(pairs in sentences()) {
        let sentence = TaggedSentence::from_pairs(&pairs).unwrap();
        for clause in AttributiveMatcher::new().find(&sentence) {
            prop_assert!(clause.span.start <= clause.span.end);
            prop_assert!(clause.span.end < sentence.len());
            prop_assert!(clause.span.start >= 1);
            prop_assert!(clause.antecedent.has_tag(tagset::NOMINALS));

            let opener = &sentence[clause.span.start];
            prop_assert!(opener.has_tag(tagset::WH_WORDS));
            prop_assert!(!opener.is_word("what"));
        }
    }

    #[test]
    fn noun_spans_are_well_formed(pairs in sentences()) {
        let sentence = TaggedSentence::from_pairs(&pairs).unwrap();
        let matcher = NounClauseMatcher::new(clausal_core::get_lexicon("en").unwrap());
        for span in matcher.find(&sentence) {
            prop_assert!(span.start >= 1);
            prop_assert!(span.start <= span.end);
            prop_assert!(span.end < sentence.len());
            for token in span.tokens(&sentence) {
                prop_assert!(!token.has_text(tagset::terminals::NOUN));
            }
        }
    }

    #[test]
    fn adverbial_spans_contain_a_verb(pairs in sentences()) {
        let sentence = TaggedSentence::from_pairs(&pairs).unwrap();
        let matcher = AdverbialMatcher::new(clausal_core::get_lexicon("en").unwrap());
        let spans = matcher.find(&sentence);

        for span in &spans {
            prop_assert!(span.start < span.end);
            prop_assert!(span.end < sentence.len());
            prop_assert!((span.start + 1..=span.end).any(|i| tagset::is_verb(&sentence[i].tag)));
        }
        // Scanning resumes after each clause
        for pair in spans.windows(2) {
            prop_assert!(pair[0].end < pair[1].start);
        }
    }

    #[test]
    fn extraction_is_deterministic(pairs in sentences()) {
        let sentence = TaggedSentence::from_pairs(&pairs).unwrap();
        let extractor = ClauseExtractor::english().unwrap();
        prop_assert_eq!(extractor.extract(&sentence), extractor.extract(&sentence));
    }
}
