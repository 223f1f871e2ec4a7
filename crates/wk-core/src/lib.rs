//! Core of Wortwerk: grammar-graph sentence generation.
//!
//! A [`Grammar`] pairs a [`WordCatalog`] (words per category) with a
//! [`GrammarGraph`] (which category may follow which). The
//! [`SentenceGenerator`] walks the graph from `BEGINNING`, drawing a
//! category and a word at each step from an injected [`RandomSource`].
//!
//! ```
//! use wk_core::{LowestSource, SentenceGenerator, SentenceOptions};
//!
//! let generator = SentenceGenerator::default();
//! let options = SentenceOptions::default().with_length(3, 3);
//! let text = generator.structured_sentence(&options, &mut LowestSource).unwrap();
//! assert_eq!(text, "This eating.");
//! ```

/// Built-in word lists and the word catalog.
pub mod catalog;
/// Word categories and tenses.
pub mod category;
/// Word entries with per-tense forms.
pub mod entry;
/// Error types used throughout the crate.
pub mod error;
/// Validated grammar and grammar files.
pub mod grammar;
/// The grammar graph.
pub mod graph;
/// Random sources.
pub mod rng;
/// Structured sentence generation.
pub mod sentence;
/// Unstructured random text.
pub mod text;

/// Re-export table types.
pub use catalog::WordCatalog;
pub use category::{Tense, WordCategory};
pub use entry::WordEntry;
/// Re-export error types.
pub use error::{GenError, GenResult};
pub use grammar::{Grammar, GrammarOverrides};
pub use graph::GrammarGraph;
/// Re-export random sources.
pub use rng::{HighestSource, LowestSource, RandomSource, ScriptedSource};
/// Re-export generators.
pub use sentence::{Sentence, SentenceGenerator, SentenceOptions, Word};
pub use text::{DEFAULT_LETTERS, TextOptions, unstructured_random};
