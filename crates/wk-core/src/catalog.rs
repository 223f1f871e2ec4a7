//! Word lists keyed by category.
//!
//! The built-in lists are plain English with a few deliberate oddities
//! (misspellings, a missing leading space on `"arm"`); they are the default
//! distribution and are kept verbatim.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::WordCategory;
use crate::entry::WordEntry;
use crate::error::{GenError, GenResult};

/// Noun surface forms.
pub const NOUNS: &[&str] = &[
    " this",
    " that",
    " car",
    " cat",
    " ice cream",
    " building",
    " house",
    " freezer",
    " doll",
    " art",
    " computer",
    " code",
    " table",
    " chair",
    " mouse",
    " keyboard",
    " monitor",
    " processor",
    " ram",
    " fruit",
    " vegetable",
    " desk",
    " pen",
    " pencil",
    " gun",
    " death",
    " paint",
    " brush",
    " shoe",
    " pants",
    " shirt",
    " glasses",
    " glass",
    " nose",
    " hair",
    " head",
    " eye",
    " leg",
    "arm",
    " sofa",
    " brain",
    " neuron",
    " dog",
    " parrot",
    " snake",
    " python",
    " hamster",
    " bird",
    " mamal",
    " human",
    " robot",
    " AI",
    " pig",
    " horse",
    " reptile",
    " box",
    " knee",
    " shoulder",
    " toe",
    " finger",
    " lamp",
    " rock",
    " mountain",
    " gease",
    " swan",
    " boulder",
    " spear",
    " phone",
    " letter",
    " word",
    " sentance",
    " board",
    " plane",
    " helicopter",
    " rocket",
    " space ship",
    " space station",
    " suit",
    " space suit",
    " sand",
    " concrete",
    " steel",
    " fire",
    " engine",
    " gas",
    " liquid",
    " water",
    " lava",
    " magma",
    " volcano",
    " universe",
    " galaxy",
    " star",
    " wood",
    " oxygen",
    " hydrogen",
    " door",
    " lazer",
    " Earth",
    " hat",
    " ball",
    " globe",
    " sphere",
    " Sun",
    " Europe",
    " Amerika",
    " moon",
    " city",
    " bridge",
    " village",
    " fuel",
    " explosion",
    " root",
    " tree",
    " plastic",
    " gold",
    " money",
    " diamond",
    " teeth",
    " glue",
    " medal",
    " cup",
];

/// Verbs whose form changes with the tense (present, past, future, continuous).
pub const VARIANT_VERBS: &[[&str; 4]] = &[
    [" eating", " ate", " eating", " eat"],
    [" giving", " gave", " giving", " give"],
];

/// Verbs with a single form.
pub const VERBS: &[&str] = &[
    " take",
    " do",
    " make",
    " destroy",
    " code",
    " can",
    " slap",
    " kick",
    " leave",
    " go",
    " morn",
    " capture",
    " run",
    " walk",
    " jog",
    " climb",
    " move",
    " sense",
    " hear",
    " see",
    " taste",
    " lick",
    " die",
    " answer",
    " fight",
    " travel",
    " touch",
    " feel",
    " live",
    " become",
    " pray",
    " cry",
    " clap",
    " think",
    " kill",
    " build",
    " laugh",
    " train",
    " excercierse",
    " read",
    " teach",
    " count",
    " begin",
    " bend",
    " break",
    " drink",
    " disapear",
    " shout",
    " transform",
    " finish",
    " restart",
    " imagine",
    " create",
    " lift",
    " bounce",
    " fall",
    " reach",
];

/// Adjective (and article) surface forms.
pub const ADJECTIVES: &[&str] = &[
    " a",
    " an",
    " the",
    " cute",
    " nice",
    " wrong",
    " medium",
    " big",
    " small",
    " hairy",
    " fat",
    " fast",
    " slow",
    " easy",
    " hard",
    " blue",
    " red",
    " green",
    " white",
    " black",
    " tall",
    " short",
    " wide",
    " thin",
    " angry",
    " happy",
    " sad",
    " growling",
    " surprised",
    " moved",
    " transparrent",
    " soft",
    " golden",
    " tough",
    " conductive",
    " light",
    " heavy",
    " pale",
    " matt",
    " shiny",
    " hungry",
    " full",
    " missing",
    " found",
    " interesting",
    " broken",
    " fixed",
    " trapped",
    " freed",
    " free",
    " boring",
    " automatic",
    " dramatic",
    " horifying",
    " agrovating",
    " stupid",
    " smart",
    " dumb",
];

/// Adverb surface forms.
pub const ADVERBS: &[&str] = &[
    " then",
    " quickly",
    " slowly",
    " now",
    " soon",
    " lately",
    " easily",
    " surprisingly",
    " accidentaly",
    " worryingly",
    " gently",
    " extremely",
    " carefully",
    " well",
    " amazingly",
    " totaly",
    " acrobaticly",
];

/// Question openers.
pub const ASK_WORDS: &[&str] = &[" who", " when", " why", " where", " what", " are", " is"];

/// Linking words.
pub const BETWEEN_WORDS: &[&str] = &[" is", " with", " at", " on", " in", " are", " have"];

/// Statement endings. The empty string means "no punctuation".
pub const END_MARKS: &[&str] = &[
    ".", "!", "?", "?!", "!?", " :)", " :(", " :D", " :C", " XD", "", "...",
];

/// Question endings.
pub const END_ASK_MARKS: &[&str] = &["?", "?!", "!?"];

/// Mapping from category to its ordered word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordCatalog {
    words: BTreeMap<WordCategory, Vec<WordEntry>>,
}

impl WordCatalog {
    /// Create an empty catalog.
    pub fn empty() -> Self {
        Self {
            words: BTreeMap::new(),
        }
    }

    /// The built-in English catalog.
    pub fn builtin() -> Self {
        let plain = |list: &[&str]| list.iter().map(|s| WordEntry::from(*s)).collect::<Vec<_>>();

        let pronouns = vec![
            WordEntry::from([" I am", " I was", " I will be", " I"]),
            WordEntry::from([" you are", " you were", " you will be", " you"]),
            WordEntry::from([" he is", " he was", " he will be", " he"]),
            WordEntry::from([" she is", " she was", " she will be", " she"]),
            WordEntry::from([" it is", " it was", " it will be", " it"]),
            WordEntry::from([" they are", " they were", " they will be", " they"]),
            WordEntry::from(" them"),
            WordEntry::from(" me"),
            WordEntry::from([" we are", " we were", " we will be", " we"]),
            WordEntry::from(" us"),
        ];

        let verbs = VARIANT_VERBS
            .iter()
            .map(|forms| WordEntry::from(*forms))
            .chain(plain(VERBS))
            .collect();

        let mut catalog = Self::empty();
        catalog.insert(WordCategory::Noun, plain(NOUNS));
        catalog.insert(WordCategory::Pronoun, pronouns);
        catalog.insert(WordCategory::Verb, verbs);
        catalog.insert(WordCategory::Adjective, plain(ADJECTIVES));
        catalog.insert(WordCategory::Adverb, plain(ADVERBS));
        catalog.insert(WordCategory::Ask, plain(ASK_WORDS));
        catalog.insert(WordCategory::Between, plain(BETWEEN_WORDS));
        catalog.insert(WordCategory::End, plain(END_MARKS));
        catalog.insert(WordCategory::EndAsk, plain(END_ASK_MARKS));
        catalog
    }

    /// The word list of a category.
    pub fn words(&self, category: WordCategory) -> GenResult<&[WordEntry]> {
        self.words
            .get(&category)
            .map(Vec::as_slice)
            .ok_or(GenError::MissingWords(category))
    }

    /// Returns true if the category has at least one word.
    pub fn has_words(&self, category: WordCategory) -> bool {
        self.words.get(&category).is_some_and(|w| !w.is_empty())
    }

    /// Replace the word list of a category, returning the previous one.
    pub fn insert(
        &mut self,
        category: WordCategory,
        entries: Vec<WordEntry>,
    ) -> Option<Vec<WordEntry>> {
        self.words.insert(category, entries)
    }

    /// Append one entry to a category's list, creating the list if needed.
    pub fn append(&mut self, category: WordCategory, entry: WordEntry) {
        self.words.entry(category).or_default().push(entry);
    }

    /// Drop a category entirely.
    pub fn remove(&mut self, category: WordCategory) -> Option<Vec<WordEntry>> {
        self.words.remove(&category)
    }

    /// Replace every category present in `other`.
    pub fn merge(&mut self, other: Self) {
        self.words.extend(other.words);
    }

    /// Iterate categories and their word lists in category order.
    pub fn iter(&self) -> impl Iterator<Item = (WordCategory, &[WordEntry])> {
        self.words.iter().map(|(c, w)| (*c, w.as_slice()))
    }
}

impl Default for WordCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
