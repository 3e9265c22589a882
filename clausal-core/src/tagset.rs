//! Penn Treebank tag classes and punctuation groupings
//!
//! The matchers deliberately use slightly different groupings (the
//! attributive matcher counts `DT` as a possible antecedent, the noun
//! matcher does not), so each class is a plain slice and callers pick.

/// All verb tags
pub const VERBS: &[&str] = &["VB", "VBD", "VBG", "VBN", "VBP", "VBZ"];

/// Tensed verb tags; a second one usually starts a new clause
pub const FINITE_VERBS: &[&str] = &["VBD", "VBP", "VBZ"];

/// Nouns and pronouns
pub const NOUNS_PRONOUNS: &[&str] = &["PRP", "PRP$", "NN", "NNS", "NNP", "NNPS"];

/// Nouns, pronouns and determiners (attributive antecedents)
pub const NOMINALS: &[&str] = &["PRP", "PRP$", "NN", "NNS", "NNP", "NNPS", "DT"];

/// Common nouns (appositive heads)
pub const COMMON_NOUNS: &[&str] = &["NN", "NNS"];

/// Determiners, adjectives and cardinals
pub const DETERMINERS_ADJECTIVES: &[&str] = &["DT", "JJ", "CD"];

/// Determiners, adjectives, cardinals and adverbs
pub const MODIFIERS: &[&str] = &["DT", "JJ", "CD", "RB"];

/// Relative pronouns and relative adverbs
pub const WH_WORDS: &[&str] = &["WP", "WDT", "WP$", "WRB"];

/// Separators tolerated inside an attributive clause
pub const CLAUSE_SEPARATORS: &[&str] = &[",", "#"];

pub const ADJECTIVE: &str = "JJ";
pub const ADVERB: &str = "RB";
pub const COMMA: &str = ",";
pub const EXISTENTIAL: &str = "EX";
pub const MODAL: &str = "MD";
pub const PRESENT_PARTICIPLE: &str = "VBG";
pub const SUBORDINATOR: &str = "IN";
pub const WH_ADVERB: &str = "WRB";

/// Punctuation token texts that close a clause, per matcher
pub mod terminals {
    /// Attributive clauses end at periods, commas, markers and semicolons
    pub const ATTRIBUTIVE: &[&str] = &[".", ",", "#", ";"];
    /// Noun clauses run through commas
    pub const NOUN: &[&str] = &[".", ";"];
    pub const ADVERBIAL: &[&str] = &[",", ".", ";"];
}

/// Opening double-quote token (PTB `` `` ``)
pub const OPEN_QUOTE: &str = "``";
/// Closing double-quote token (PTB `''`)
pub const CLOSE_QUOTE: &str = "''";

/// Whether `tag` is any verb tag
#[inline]
pub fn is_verb(tag: &str) -> bool {
    VERBS.contains(&tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_classes() {
        for tag in FINITE_VERBS {
            assert!(is_verb(tag));
        }
        assert!(is_verb("VBG"));
        assert!(!is_verb("MD"));
        assert!(!is_verb("V"));
    }

    #[test]
    fn test_nominals_extend_nouns_with_determiners() {
        for tag in NOUNS_PRONOUNS {
            assert!(NOMINALS.contains(tag));
        }
        assert!(NOMINALS.contains(&"DT"));
        assert!(!NOUNS_PRONOUNS.contains(&"DT"));
    }

    #[test]
    fn test_noun_terminals_exclude_comma() {
        assert!(!terminals::NOUN.contains(&","));
        assert!(terminals::ATTRIBUTIVE.contains(&"#"));
    }
}
