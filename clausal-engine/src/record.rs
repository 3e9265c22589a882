//! Serialized annotation records

use clausal_core::{HasSpan, SentenceClauses, TaggedSentence};
use serde::{Deserialize, Serialize};

/// One annotated sentence as written to the output artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    /// 1-based position in the emitted batch
    pub index: usize,
    /// Space-joined sentence text
    pub sentence: String,
    /// Attributive clause texts in discovery order
    pub attributive_clauses: Vec<String>,
    /// Noun clause texts in discovery order
    pub noun_clauses: Vec<String>,
    /// Adverbial clause texts in discovery order
    pub adverbial_clauses: Vec<String>,
}

/// Clause texts for one sentence before it is given a batch position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseTexts {
    /// Space-joined sentence text
    pub sentence: String,
    /// Attributive clause texts
    pub attributive: Vec<String>,
    /// Noun clause texts
    pub noun: Vec<String>,
    /// Adverbial clause texts
    pub adverbial: Vec<String>,
}

impl ClauseTexts {
    /// Render every span of `clauses` against `sentence`
    pub fn render(sentence: &TaggedSentence, clauses: &SentenceClauses) -> Self {
        Self {
            sentence: sentence.text(),
            attributive: texts(sentence, &clauses.attributive),
            noun: texts(sentence, &clauses.noun),
            adverbial: texts(sentence, &clauses.adverbial),
        }
    }

    /// True when no clause of any family was found
    pub fn is_empty(&self) -> bool {
        self.attributive.is_empty() && self.noun.is_empty() && self.adverbial.is_empty()
    }

    /// Attach the batch position
    pub fn into_record(self, index: usize) -> AnnotationRecord {
        AnnotationRecord {
            index,
            sentence: self.sentence,
            attributive_clauses: self.attributive,
            noun_clauses: self.noun,
            adverbial_clauses: self.adverbial,
        }
    }
}

fn texts<M: HasSpan>(sentence: &TaggedSentence, matches: &[M]) -> Vec<String> {
    matches
        .iter()
        .map(|found| found.span().text(sentence))
        .collect()
}

impl AnnotationRecord {
    /// Total number of clauses in the record
    pub fn clause_count(&self) -> usize {
        self.attributive_clauses.len() + self.noun_clauses.len() + self.adverbial_clauses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clausal_core::ClauseExtractor;

    #[test]
    fn test_render_and_serialize() {
        let sentence = TaggedSentence::from_pairs(&[
            ("The", "DT"),
            ("book", "NN"),
            ("that", "WDT"),
            ("she", "PRP"),
            ("read", "VBD"),
            ("was", "VBD"),
            ("long", "JJ"),
            (".", "."),
        ])
        .unwrap();
        let clauses = ClauseExtractor::english().unwrap().extract(&sentence);

        let record = ClauseTexts::render(&sentence, &clauses).into_record(1);
        assert_eq!(record.sentence, "The book that she read was long .");
        assert_eq!(record.attributive_clauses, vec!["that she read"]);
        assert_eq!(record.clause_count(), 1);

        let value = serde_json::to_value(&record).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        for key in [
            "index",
            "sentence",
            "attributive_clauses",
            "noun_clauses",
            "adverbial_clauses",
        ] {
            assert!(keys.contains(&key), "missing {key}");
        }
        assert_eq!(value["index"], 1);
    }
}
