//! Word entries: a single surface form or one form per tense.

use serde::{Deserialize, Serialize};

use crate::category::Tense;

/// One entry of a word list.
///
/// Surface forms carry their own leading space (`" car"`), so words are
/// concatenated verbatim. Punctuation entries usually have none (`"?"`).
///
/// In JSON an invariant entry is a string and a tense-variant entry is an
/// array of one to four strings. Missing tense forms fall back to the first
/// form when loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEntry", into = "RawEntry")]
pub enum WordEntry {
    /// The same form in every tense.
    Invariant(String),
    /// Forms indexed by [`Tense::index`].
    TenseVariant([String; 4]),
}

impl WordEntry {
    /// Create an invariant entry.
    pub fn invariant(form: impl Into<String>) -> Self {
        Self::Invariant(form.into())
    }

    /// Create a tense-variant entry from present, past, future and
    /// continuous forms.
    pub fn variant(
        present: impl Into<String>,
        past: impl Into<String>,
        future: impl Into<String>,
        continuous: impl Into<String>,
    ) -> Self {
        Self::TenseVariant([
            present.into(),
            past.into(),
            future.into(),
            continuous.into(),
        ])
    }

    /// Build an entry from up to four forms; missing forms repeat the first.
    pub fn from_forms(forms: Vec<String>) -> Result<Self, String> {
        if forms.len() > Tense::ALL.len() {
            return Err(format!(
                "a tense-variant entry has at most {} forms, got {}",
                Tense::ALL.len(),
                forms.len()
            ));
        }
        let mut forms = forms.into_iter();
        let first = forms
            .next()
            .ok_or_else(|| "a tense-variant entry needs at least one form".to_string())?;
        let rest: Vec<String> = forms.collect();
        let form = |i: usize| rest.get(i).cloned().unwrap_or_else(|| first.clone());
        Ok(Self::TenseVariant([first.clone(), form(0), form(1), form(2)]))
    }

    /// The surface form to emit in a sentence of the given tense.
    pub fn form(&self, tense: Tense) -> &str {
        match self {
            Self::Invariant(s) => s,
            Self::TenseVariant(forms) => &forms[tense.index()],
        }
    }

    /// Returns true if the form depends on the tense.
    pub fn is_variant(&self) -> bool {
        matches!(self, Self::TenseVariant(_))
    }
}

impl From<&str> for WordEntry {
    fn from(s: &str) -> Self {
        Self::invariant(s)
    }
}

impl From<[&str; 4]> for WordEntry {
    fn from(forms: [&str; 4]) -> Self {
        Self::TenseVariant(forms.map(str::to_string))
    }
}

/// Wire shape of a [`WordEntry`].
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    One(String),
    Many(Vec<String>),
}

impl TryFrom<RawEntry> for WordEntry {
    type Error = String;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        match raw {
            RawEntry::One(s) => Ok(Self::Invariant(s)),
            RawEntry::Many(forms) => Self::from_forms(forms),
        }
    }
}

impl From<WordEntry> for RawEntry {
    fn from(entry: WordEntry) -> Self {
        match entry {
            WordEntry::Invariant(s) => Self::One(s),
            WordEntry::TenseVariant(forms) => Self::Many(forms.into()),
        }
    }
}
