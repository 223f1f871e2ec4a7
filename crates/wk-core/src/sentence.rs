//! Structured sentence generation.
//!
//! A sentence is a random walk over the grammar graph. The current category
//! is the walk state, the graph is the transition table, and `NOUN`/`VERB`
//! are the accepting states when `end_on_good_word` is set. Every step makes
//! two independent uniform draws: the next category among the successors of
//! the current one, then a word of that category.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::catalog::WordCatalog;
use crate::category::{Tense, WordCategory};
use crate::error::{GenError, GenResult};
use crate::grammar::Grammar;
use crate::graph::GrammarGraph;
use crate::rng::{RandomSource, pick_index};
use crate::text::{TextOptions, check_lengths, unstructured_random};

/// Options for [`SentenceGenerator::compose`].
#[derive(Debug, Clone)]
pub struct SentenceOptions {
    /// Minimum target word count (inclusive). Punctuation counts as a word.
    pub min_length: u64,
    /// Maximum target word count (inclusive).
    pub max_length: u64,
    /// Keep walking past the target until the last word is a noun or verb.
    pub end_on_good_word: bool,
    /// Append terminal punctuation.
    pub generate_end: bool,
    /// Fix the tense instead of drawing it.
    pub tense: Option<Tense>,
}

impl Default for SentenceOptions {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: 100,
            end_on_good_word: true,
            generate_end: true,
            tense: None,
        }
    }
}

impl SentenceOptions {
    /// Set both length bounds.
    pub fn with_length(mut self, min_length: u64, max_length: u64) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    /// Set whether the body must end on a noun or verb.
    pub fn with_end_on_good_word(mut self, end_on_good_word: bool) -> Self {
        self.end_on_good_word = end_on_good_word;
        self
    }

    /// Set whether terminal punctuation is appended.
    pub fn with_generate_end(mut self, generate_end: bool) -> Self {
        self.generate_end = generate_end;
        self
    }

    /// Use this tense for every sentence instead of drawing one.
    pub fn with_tense(mut self, tense: Tense) -> Self {
        self.tense = Some(tense);
        self
    }
}

/// One emitted word and the category it was drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Category the word was drawn from.
    pub category: WordCategory,
    /// The text as emitted, leading space included.
    pub text: String,
}

/// A generated sentence with the choices that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence-wide tense.
    pub tense: Tense,
    /// The drawn target word count.
    pub target_length: u64,
    /// Category of the first word, if a body was generated.
    pub beginning: Option<WordCategory>,
    /// Body words in order. The first is capitalized and has no leading space.
    pub words: Vec<Word>,
    /// Terminal punctuation, if requested. May be the empty string.
    pub ending: Option<String>,
}

impl Sentence {
    /// The full sentence text.
    pub fn text(&self) -> String {
        self.to_string()
    }

    /// The last body word, if any.
    pub fn last_word(&self) -> Option<&Word> {
        self.words.last()
    }

    /// Returns true if the sentence opened with a question word.
    pub fn is_question(&self) -> bool {
        self.beginning == Some(WordCategory::Ask)
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.words {
            write!(f, "{}", word.text)?;
        }
        if let Some(ending) = &self.ending {
            write!(f, "{ending}")?;
        }
        Ok(())
    }
}

/// Generates sentences from a validated [`Grammar`].
///
/// The generator holds no randomness of its own; every call takes the
/// random source to draw from. Generation borrows the generator immutably,
/// so the grammar cannot change halfway through a sentence.
#[derive(Debug, Clone, Default)]
pub struct SentenceGenerator {
    grammar: Grammar,
}

impl SentenceGenerator {
    /// Create a generator over a grammar.
    pub fn new(grammar: Grammar) -> Self {
        Self { grammar }
    }

    /// The grammar in use.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Replace the grammar. Takes effect on the next call.
    pub fn set_grammar(&mut self, grammar: Grammar) {
        self.grammar = grammar;
    }

    /// Edit the catalog and graph, then re-validate.
    ///
    /// The edit is applied to a copy; if validation fails the current
    /// grammar stays in place and the error is returned.
    pub fn update_grammar<F>(&mut self, edit: F) -> GenResult<()>
    where
        F: FnOnce(&mut WordCatalog, &mut GrammarGraph),
    {
        let (mut catalog, mut graph) = self.grammar.clone().into_parts();
        edit(&mut catalog, &mut graph);
        self.grammar = Grammar::new(catalog, graph)?;
        debug!("grammar updated");
        Ok(())
    }

    /// Generate a grammar-following sentence and return its text.
    pub fn structured_sentence<S: RandomSource + ?Sized>(
        &self,
        options: &SentenceOptions,
        rng: &mut S,
    ) -> GenResult<String> {
        Ok(self.compose(options, rng)?.text())
    }

    /// Generate unstructured random text. Does not use the grammar.
    pub fn unstructured_random<S: RandomSource + ?Sized>(
        &self,
        options: &TextOptions,
        rng: &mut S,
    ) -> GenResult<String> {
        unstructured_random(options, rng)
    }

    /// Generate a grammar-following sentence.
    ///
    /// A target length of 0 yields an empty sentence. A target of 1 with
    /// `generate_end` yields punctuation only. Otherwise the walk emits at
    /// least `target - 1` words, and with `end_on_good_word` continues until
    /// it lands on a noun or verb, with no upper bound.
    ///
    /// # Errors
    /// - [`GenError::InvalidArgument`] if `min_length > max_length`.
    /// - [`GenError::UnreachableEnding`] if `end_on_good_word` is set and the
    ///   walk still needs words while in a category from which no noun or
    ///   verb can be reached.
    pub fn compose<S: RandomSource + ?Sized>(
        &self,
        options: &SentenceOptions,
        rng: &mut S,
    ) -> GenResult<Sentence> {
        check_lengths(options.min_length, options.max_length)?;

        let tense = match options.tense {
            Some(tense) => tense,
            None => Tense::ALL[pick_index(rng, Tense::ALL.len())],
        };
        let target_length = rng.range_inclusive(options.min_length, options.max_length);

        let mut sentence = Sentence {
            tense,
            target_length,
            beginning: None,
            words: Vec::new(),
            ending: None,
        };
        if target_length == 0 {
            return Ok(sentence);
        }

        let just_end = options.generate_end && target_length == 1;
        if !just_end {
            let (mut previous, first) = self.next_word(WordCategory::Beginning, tense, rng)?;
            let first = first.strip_prefix(' ').unwrap_or(first);
            sentence.beginning = Some(previous);
            sentence.words.push(Word {
                category: previous,
                text: capitalize(first),
            });

            let mut emitted: u64 = 0;
            while emitted.saturating_add(2) < target_length
                || (options.end_on_good_word && !previous.is_ending())
            {
                if options.end_on_good_word && !self.grammar.can_reach_ending(previous) {
                    debug!(%previous, emitted, "walk cannot reach an ending");
                    return Err(GenError::UnreachableEnding);
                }
                emitted += 1;
                let (category, text) = self.next_word(previous, tense, rng)?;
                sentence.words.push(Word {
                    category,
                    text: text.to_string(),
                });
                previous = category;
            }
        }

        if options.generate_end {
            let marker = if sentence.is_question() {
                WordCategory::EndAsk
            } else {
                WordCategory::End
            };
            let (_, mark) = self.next_word(marker, tense, rng)?;
            sentence.ending = Some(mark.to_string());
        }

        debug!(
            %tense,
            target_length,
            words = sentence.words.len(),
            question = sentence.is_question(),
            "sentence composed"
        );
        Ok(sentence)
    }

    /// Draw the category following `previous`, then a word of it.
    fn next_word<S: RandomSource + ?Sized>(
        &self,
        previous: WordCategory,
        tense: Tense,
        rng: &mut S,
    ) -> GenResult<(WordCategory, &str)> {
        let successors = self.grammar.graph().successors(previous)?;
        let category = successors[pick_index(rng, successors.len())];

        let words = self.grammar.catalog().words(category)?;
        if words.is_empty() {
            return Err(GenError::MissingWords(category));
        }
        let word = words[pick_index(rng, words.len())].form(tense);
        trace!(%previous, %category, word, "picked word");
        Ok((category, word))
    }
}

/// Uppercase the first character.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::WordEntry;
    use crate::rng::{HighestSource, LowestSource, ScriptedSource};
    use WordCategory::*;

    fn generator() -> SentenceGenerator {
        SentenceGenerator::default()
    }

    fn fixed(min: u64, max: u64) -> SentenceOptions {
        SentenceOptions::default().with_length(min, max)
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("this"), "This");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn zero_length_is_empty() {
        let s = generator().compose(&fixed(0, 0), &mut HighestSource).unwrap();
        assert_eq!(s.text(), "");
        assert!(s.words.is_empty());
        assert!(s.ending.is_none());
    }

    #[test]
    fn length_one_is_punctuation_only() {
        let s = generator().compose(&fixed(1, 1), &mut LowestSource).unwrap();
        assert_eq!(s.text(), ".");
        assert!(s.beginning.is_none());
        assert!(s.words.is_empty());
    }

    #[test]
    fn length_one_without_end_still_has_a_word() {
        let opts = fixed(1, 1).with_generate_end(false);
        let s = generator().compose(&opts, &mut LowestSource).unwrap();
        assert_eq!(s.text(), "This");
        assert_eq!(s.beginning, Some(Noun));
    }

    #[test]
    fn lowest_source_fixture() {
        let s = generator().compose(&fixed(3, 3), &mut LowestSource).unwrap();
        assert_eq!(s.tense, Tense::Present);
        assert_eq!(s.text(), "This eating.");
        assert_eq!(s.last_word().map(|w| w.category), Some(Verb));
    }

    #[test]
    fn highest_source_fixture() {
        let s = generator().compose(&fixed(3, 3), &mut HighestSource).unwrap();
        assert_eq!(s.tense, Tense::Continuous);
        assert_eq!(s.beginning, Some(Ask));
        assert_eq!(s.text(), "Is have dumb cup!?");
        let categories: Vec<_> = s.words.iter().map(|w| w.category).collect();
        assert_eq!(categories, vec![Ask, Between, Adjective, Noun]);
    }

    #[test]
    fn length_target_without_good_ending() {
        let opts = fixed(5, 5).with_end_on_good_word(false);
        let s = generator().compose(&opts, &mut LowestSource).unwrap();
        assert_eq!(s.text(), "This eating this eating.");
        assert_eq!(s.words.len(), 4);
    }

    #[test]
    fn question_takes_question_mark() {
        // tense, length, BEGINNING -> ASK, " who", ASK -> ADJECTIVE, " a",
        // ADJECTIVE -> NOUN, " this", END_ASK, "?"
        let mut rng = ScriptedSource::new(vec![0, 0, 5, 0]);
        let s = generator().compose(&fixed(3, 3), &mut rng).unwrap();
        assert_eq!(s.text(), "Who a this?");
        assert!(s.is_question());
        assert_eq!(rng.draws(), 10);
    }

    #[test]
    fn fixed_tense_skips_the_tense_draw() {
        // BEGINNING -> PRONOUN, " I am"/" I was"/...
        let opts = fixed(2, 2).with_tense(Tense::Past).with_generate_end(false);
        let mut rng = ScriptedSource::new(vec![0, 1, 0, 0, 0]);
        let s = generator().compose(&opts, &mut rng).unwrap();
        assert_eq!(s.tense, Tense::Past);
        assert_eq!(s.text(), "I was ate");
        assert_eq!(s.words[1].text, " ate");
    }

    #[test]
    fn inverted_bounds_rejected() {
        let err = generator().compose(&fixed(4, 2), &mut LowestSource).unwrap_err();
        assert!(matches!(err, GenError::InvalidArgument(_)));
    }

    #[test]
    fn unendable_grammar_fails_fast() {
        let mut generator = generator();
        generator
            .update_grammar(|_, graph| {
                graph.insert(Beginning, vec![Adjective]);
                graph.insert(Adjective, vec![Adjective]);
            })
            .unwrap();
        let err = generator.compose(&fixed(3, 3), &mut LowestSource).unwrap_err();
        assert!(matches!(err, GenError::UnreachableEnding));

        let opts = fixed(3, 3).with_end_on_good_word(false);
        let text = generator.structured_sentence(&opts, &mut LowestSource).unwrap();
        assert_eq!(text, "A a.");
    }

    #[test]
    fn dead_end_elsewhere_in_the_graph_is_harmless() {
        let mut graph = GrammarGraph::empty();
        graph.insert(Beginning, vec![Noun]);
        graph.insert(Noun, vec![Adverb]);
        graph.insert(Adverb, vec![Adverb]);
        graph.insert(End, vec![End]);
        graph.insert(EndAsk, vec![EndAsk]);
        let grammar = Grammar::new(WordCatalog::builtin(), graph).unwrap();
        let generator = SentenceGenerator::new(grammar);
        assert!(!generator.grammar().can_always_end());

        let text = generator
            .structured_sentence(&fixed(2, 2), &mut LowestSource)
            .unwrap();
        assert_eq!(text, "This.");

        let err = generator.compose(&fixed(3, 3), &mut LowestSource).unwrap_err();
        assert!(matches!(err, GenError::UnreachableEnding));
    }

    #[test]
    fn grammar_updates_are_observed() {
        let mut generator = generator();
        generator
            .update_grammar(|catalog, _| {
                catalog.insert(Noun, vec![WordEntry::invariant(" zebra")]);
            })
            .unwrap();
        let text = generator
            .structured_sentence(&fixed(3, 3), &mut LowestSource)
            .unwrap();
        assert_eq!(text, "Zebra eating.");
    }

    #[test]
    fn failed_update_keeps_old_grammar() {
        let mut generator = generator();
        let err = generator
            .update_grammar(|catalog, _| {
                catalog.remove(Verb);
            })
            .unwrap_err();
        assert!(matches!(err, GenError::MissingWords(Verb)));
        assert_eq!(generator.grammar(), &Grammar::builtin());
    }

    #[test]
    fn display_matches_text() {
        let s = generator().compose(&fixed(4, 4), &mut HighestSource).unwrap();
        assert_eq!(format!("{s}"), s.text());
    }
}
