//! Word categories and sentence tenses.
//!
//! Categories are the node labels of the grammar graph. Three of them are
//! structural: `BEGINNING` only ever acts as the start state, while `END` and
//! `END_ASK` hold punctuation rather than words.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A grammatical slot type used as a node in the grammar graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WordCategory {
    /// A thing: "car", "volcano".
    Noun,
    /// A pronoun, usually with a tense-dependent auxiliary: "I am", "I was".
    Pronoun,
    /// An action: "run", "eating".
    Verb,
    /// A describing word, articles included: "the", "shiny".
    Adjective,
    /// A manner or time word: "quickly", "soon".
    Adverb,
    /// A question opener: "who", "why".
    Ask,
    /// A linking word: "with", "on", "is".
    Between,
    /// Terminal punctuation of a statement.
    End,
    /// Terminal punctuation of a question.
    EndAsk,
    /// The start state of every sentence. Never emitted.
    Beginning,
}

impl WordCategory {
    /// Every category, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Noun,
        Self::Pronoun,
        Self::Verb,
        Self::Adjective,
        Self::Adverb,
        Self::Ask,
        Self::Between,
        Self::End,
        Self::EndAsk,
        Self::Beginning,
    ];

    /// Categories a sentence may end on when `end_on_good_word` is set.
    pub const ENDING: [Self; 2] = [Self::Noun, Self::Verb];

    /// Returns true for `BEGINNING`, `END` and `END_ASK`.
    pub fn is_structural(self) -> bool {
        matches!(self, Self::Beginning | Self::End | Self::EndAsk)
    }

    /// Returns true if a sentence body may end on this category.
    pub fn is_ending(self) -> bool {
        Self::ENDING.contains(&self)
    }

    /// Parse a category name like "noun" or "END_ASK" (case-insensitive,
    /// `-` accepted in place of `_`).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_uppercase().replace('-', "_");
        Self::ALL.into_iter().find(|c| c.to_string() == s)
    }
}

impl fmt::Display for WordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Noun => write!(f, "NOUN"),
            Self::Pronoun => write!(f, "PRONOUN"),
            Self::Verb => write!(f, "VERB"),
            Self::Adjective => write!(f, "ADJECTIVE"),
            Self::Adverb => write!(f, "ADVERB"),
            Self::Ask => write!(f, "ASK"),
            Self::Between => write!(f, "BETWEEN"),
            Self::End => write!(f, "END"),
            Self::EndAsk => write!(f, "END_ASK"),
            Self::Beginning => write!(f, "BEGINNING"),
        }
    }
}

/// The sentence-wide inflection mode. Indexes tense-variant word forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    /// Form 0.
    #[default]
    Present,
    /// Form 1.
    Past,
    /// Form 2.
    Future,
    /// Form 3.
    Continuous,
}

impl Tense {
    /// Every tense, ordered by form index.
    pub const ALL: [Self; 4] = [Self::Present, Self::Past, Self::Future, Self::Continuous];

    /// Position of this tense's form in a tense-variant entry.
    pub fn index(self) -> usize {
        match self {
            Self::Present => 0,
            Self::Past => 1,
            Self::Future => 2,
            Self::Continuous => 3,
        }
    }

    /// The tense at a form index, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse a tense from a string like "past" (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "present" => Some(Self::Present),
            "past" => Some(Self::Past),
            "future" => Some(Self::Future),
            "continuous" => Some(Self::Continuous),
            _ => None,
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => write!(f, "present"),
            Self::Past => write!(f, "past"),
            Self::Future => write!(f, "future"),
            Self::Continuous => write!(f, "continuous"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_and_ending() {
        assert!(WordCategory::Beginning.is_structural());
        assert!(WordCategory::End.is_structural());
        assert!(WordCategory::EndAsk.is_structural());
        assert!(!WordCategory::Ask.is_structural());

        assert!(WordCategory::Noun.is_ending());
        assert!(WordCategory::Verb.is_ending());
        assert!(!WordCategory::Adjective.is_ending());
        assert!(!WordCategory::End.is_ending());
    }

    #[test]
    fn category_parse() {
        assert_eq!(WordCategory::parse("noun"), Some(WordCategory::Noun));
        assert_eq!(WordCategory::parse("END_ASK"), Some(WordCategory::EndAsk));
        assert_eq!(WordCategory::parse("end-ask"), Some(WordCategory::EndAsk));
        assert_eq!(WordCategory::parse("gerund"), None);
    }

    #[test]
    fn category_serde_uses_screaming_names() {
        let json = serde_json::to_string(&WordCategory::EndAsk).unwrap();
        assert_eq!(json, "\"END_ASK\"");
        let back: WordCategory = serde_json::from_str("\"BETWEEN\"").unwrap();
        assert_eq!(back, WordCategory::Between);
    }

    #[test]
    fn tense_indices() {
        for (i, tense) in Tense::ALL.iter().enumerate() {
            assert_eq!(tense.index(), i);
            assert_eq!(Tense::from_index(i), Some(*tense));
        }
        assert_eq!(Tense::from_index(4), None);
    }

    #[test]
    fn tense_parse_and_display() {
        assert_eq!(Tense::parse("PAST"), Some(Tense::Past));
        assert_eq!(Tense::parse(" future "), Some(Tense::Future));
        assert_eq!(Tense::parse("pluperfect"), None);
        assert_eq!(Tense::Continuous.to_string(), "continuous");
    }
}
