//! Integration tests for word and sentence generation.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use wk_core::catalog::{END_ASK_MARKS, END_MARKS};
use wk_core::{
    Grammar, GrammarGraph, HighestSource, LowestSource, SentenceGenerator, SentenceOptions, Tense,
    TextOptions, WordCatalog, WordCategory, WordEntry, unstructured_random,
};

fn sentence(min: u64, max: u64) -> SentenceOptions {
    SentenceOptions::default().with_length(min, max)
}

/// Verbs carry their tense index as the last character: " v0" .. " v3".
fn tense_marked_grammar() -> Grammar {
    use WordCategory::*;

    let mut catalog = WordCatalog::empty();
    catalog.insert(Verb, vec![WordEntry::variant(" v0", " v1", " v2", " v3")]);
    catalog.insert(Noun, vec![" n".into()]);
    catalog.insert(End, vec![".".into()]);
    catalog.insert(EndAsk, vec!["?".into()]);

    let mut graph = GrammarGraph::empty();
    graph.insert(Beginning, vec![Verb, Noun]);
    graph.insert(Verb, vec![Verb, Noun]);
    graph.insert(Noun, vec![Verb]);
    graph.insert(End, vec![End]);
    graph.insert(EndAsk, vec![EndAsk]);

    Grammar::new(catalog, graph).unwrap()
}

// ---------------------------------------------------------------------------
// pinned fixtures
// ---------------------------------------------------------------------------

#[test]
fn lowest_source_fixture() {
    let text = SentenceGenerator::default()
        .structured_sentence(&sentence(3, 3), &mut LowestSource)
        .unwrap();
    insta::assert_snapshot!(text, @"This eating.");
}

#[test]
fn highest_source_fixture() {
    let text = SentenceGenerator::default()
        .structured_sentence(&sentence(3, 3), &mut HighestSource)
        .unwrap();
    insta::assert_snapshot!(text, @"Is have dumb cup!?");
}

#[test]
fn unstructured_fixtures() {
    let opts = TextOptions::default().with_length(4, 9);
    insta::assert_snapshot!(unstructured_random(&opts, &mut LowestSource).unwrap(), @"aaaa");
    let opts = opts.with_letters("abc".chars());
    insta::assert_snapshot!(unstructured_random(&opts, &mut HighestSource).unwrap(), @"ccccccccc");
}

#[test]
fn fixed_sources_are_reproducible() {
    let generator = SentenceGenerator::default();
    let opts = sentence(2, 12);
    let first = generator.structured_sentence(&opts, &mut HighestSource).unwrap();
    for _ in 0..5 {
        assert_eq!(
            generator.structured_sentence(&opts, &mut HighestSource).unwrap(),
            first
        );
    }
}

#[test]
fn reloaded_default_grammar_reproduces_output() {
    let reloaded = Grammar::from_json_str(&Grammar::builtin().to_json_string().unwrap()).unwrap();
    let original = SentenceGenerator::default();
    let reloaded = SentenceGenerator::new(reloaded);
    let opts = sentence(1, 30);
    for seed in 0..20 {
        let a = original
            .structured_sentence(&opts, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        let b = reloaded
            .structured_sentence(&opts, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn mutation_is_observed_on_next_call() {
    let mut generator = SentenceGenerator::default();
    let opts = sentence(3, 3);
    assert_eq!(
        generator.structured_sentence(&opts, &mut LowestSource).unwrap(),
        "This eating."
    );
    generator
        .update_grammar(|catalog, _| {
            catalog.insert(
                WordCategory::Verb,
                vec![WordEntry::variant(" purring", " purred", " will purr", " purr")],
            );
        })
        .unwrap();
    assert_eq!(
        generator.structured_sentence(&opts, &mut LowestSource).unwrap(),
        "This purring."
    );
}

// ---------------------------------------------------------------------------
// properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn unstructured_length_within_bounds(seed: u64, min in 0u64..200, extra in 0u64..200) {
        let opts = TextOptions::default().with_length(min, min + extra);
        let text = unstructured_random(&opts, &mut StdRng::seed_from_u64(seed)).unwrap();
        let len = text.chars().count() as u64;
        prop_assert!(len >= min && len <= min + extra);
    }

    #[test]
    fn zero_length_sentence_is_empty(seed: u64, good: bool, end: bool) {
        let opts = sentence(0, 0).with_end_on_good_word(good).with_generate_end(end);
        let text = SentenceGenerator::default()
            .structured_sentence(&opts, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        prop_assert_eq!(text, "");
    }

    #[test]
    fn length_one_is_a_single_mark(seed: u64, good: bool) {
        let opts = sentence(1, 1).with_end_on_good_word(good);
        let s = SentenceGenerator::default()
            .compose(&opts, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        prop_assert!(s.words.is_empty());
        prop_assert!(s.beginning.is_none());
        let text = s.text();
        prop_assert!(END_MARKS.contains(&text.as_str()));
    }

    #[test]
    fn questions_end_with_question_marks(seed: u64) {
        let s = SentenceGenerator::default()
            .compose(&sentence(2, 15), &mut StdRng::seed_from_u64(seed))
            .unwrap();
        let ending = s.ending.clone().unwrap_or_default();
        if s.is_question() {
            prop_assert!(END_ASK_MARKS.contains(&ending.as_str()));
        } else {
            prop_assert!(END_MARKS.contains(&ending.as_str()));
        }
    }

    #[test]
    fn good_ending_lands_on_noun_or_verb(seed: u64, min in 2u64..20) {
        let s = SentenceGenerator::default()
            .compose(&sentence(min, min + 5), &mut StdRng::seed_from_u64(seed))
            .unwrap();
        let last = s.last_word().map(|w| w.category);
        prop_assert!(matches!(last, Some(WordCategory::Noun | WordCategory::Verb)));
        prop_assert!(s.words.len() as u64 + 1 >= s.target_length);
    }

    #[test]
    fn without_good_ending_word_count_is_exact(seed: u64, min in 2u64..20) {
        let opts = sentence(min, min + 5).with_end_on_good_word(false);
        let s = SentenceGenerator::default()
            .compose(&opts, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        prop_assert_eq!(s.words.len() as u64 + 1, s.target_length);
    }

    #[test]
    fn seeded_runs_are_reproducible(seed: u64) {
        let generator = SentenceGenerator::default();
        let opts = sentence(1, 40);
        let a = generator.structured_sentence(&opts, &mut StdRng::seed_from_u64(seed)).unwrap();
        let b = generator.structured_sentence(&opts, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn tense_is_fixed_for_the_whole_sentence(seed: u64, index in 0usize..4, fixed: bool) {
        let generator = SentenceGenerator::new(tense_marked_grammar());
        let mut opts = sentence(2, 12).with_generate_end(false);
        if fixed {
            opts = opts.with_tense(Tense::ALL[index]);
        }
        let s = generator.compose(&opts, &mut StdRng::seed_from_u64(seed)).unwrap();
        if fixed {
            prop_assert_eq!(s.tense, Tense::ALL[index]);
        }
        let marker = char::from_digit(s.tense.index() as u32, 10).unwrap();
        for word in s.words.iter().filter(|w| w.category == WordCategory::Verb) {
            prop_assert!(word.text.ends_with(marker), "{:?} in {:?}", word, s.tense);
        }
    }
}
