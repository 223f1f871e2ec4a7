//! A validated word catalog and grammar graph.
//!
//! [`Grammar`] is the only way the generator sees the two tables, so every
//! lookup the walk can make is checked once, at construction, instead of
//! failing halfway through a sentence.
//!
//! Grammar files are JSON with two optional tables. Categories present in a
//! file replace the built-in ones; absent categories keep their defaults:
//!
//! ```json
//! {
//!   "words": { "NOUN": [" owl", " lynx"], "PRONOUN": [[" I am", " I was"], " me"] },
//!   "structure": { "ADJECTIVE": ["NOUN", "ADJECTIVE"] }
//! }
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::WordCatalog;
use crate::category::WordCategory;
use crate::error::{GenError, GenResult};
use crate::graph::GrammarGraph;

/// Word catalog plus grammar graph, checked for consistency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    catalog: WordCatalog,
    graph: GrammarGraph,
    endable: BTreeSet<WordCategory>,
    always_endable: bool,
}

impl Grammar {
    /// Validate a catalog and graph.
    ///
    /// # Errors
    /// - [`GenError::MissingSuccessors`] if `BEGINNING`, `END`, `END_ASK` or
    ///   any successor category has no graph entry.
    /// - [`GenError::MissingWords`] if a successor category has no words.
    /// - [`GenError::InvalidGrammar`] for empty successor lists or
    ///   `BEGINNING` used as a successor.
    pub fn new(catalog: WordCatalog, graph: GrammarGraph) -> GenResult<Self> {
        for required in [
            WordCategory::Beginning,
            WordCategory::End,
            WordCategory::EndAsk,
        ] {
            if !graph.contains(required) {
                return Err(GenError::MissingSuccessors(required));
            }
        }

        for (category, successors) in graph.iter() {
            if successors.is_empty() {
                return Err(GenError::InvalidGrammar(format!(
                    "{category} has no successors"
                )));
            }
            if successors.contains(&WordCategory::Beginning) {
                return Err(GenError::InvalidGrammar(format!(
                    "{category} lists BEGINNING as a successor"
                )));
            }
        }

        for destination in graph.destinations() {
            if !graph.contains(destination) {
                return Err(GenError::MissingSuccessors(destination));
            }
            if !catalog.has_words(destination) {
                return Err(GenError::MissingWords(destination));
            }
        }

        let grammar = Self::assemble(catalog, graph);
        debug!(always_endable = grammar.always_endable, "grammar validated");
        Ok(grammar)
    }

    /// The built-in English grammar.
    pub fn builtin() -> Self {
        Self::assemble(WordCatalog::builtin(), GrammarGraph::builtin())
    }

    /// Parse a grammar file and merge it over the built-in tables.
    pub fn from_json_str(json: &str) -> GenResult<Self> {
        let overrides: GrammarOverrides = serde_json::from_str(json)?;
        overrides.apply()
    }

    /// Serialize both tables in full, in grammar-file format.
    pub fn to_json_string(&self) -> GenResult<String> {
        let file = GrammarOverrides {
            words: Some(self.catalog.clone()),
            structure: Some(self.graph.clone()),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// The word catalog.
    pub fn catalog(&self) -> &WordCatalog {
        &self.catalog
    }

    /// The grammar graph.
    pub fn graph(&self) -> &GrammarGraph {
        &self.graph
    }

    /// Take the tables back out, e.g. to edit and re-validate them.
    pub fn into_parts(self) -> (WordCatalog, GrammarGraph) {
        (self.catalog, self.graph)
    }

    /// Returns true if, from every category a sentence can visit, some path
    /// leads to an ending category (`NOUN` or `VERB`).
    pub fn can_always_end(&self) -> bool {
        self.always_endable
    }

    /// Returns true if some path from `category` leads to `NOUN` or `VERB`.
    /// Ending categories reach themselves.
    pub fn can_reach_ending(&self, category: WordCategory) -> bool {
        self.endable.contains(&category)
    }

    fn assemble(catalog: WordCatalog, graph: GrammarGraph) -> Self {
        let endable = categories_reaching_ending(&graph);
        let always_endable = reachable_from_beginning(&graph).is_subset(&endable);
        Self {
            catalog,
            graph,
            endable,
            always_endable,
        }
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Every category the walk can visit after `BEGINNING`.
fn reachable_from_beginning(graph: &GrammarGraph) -> BTreeSet<WordCategory> {
    let successors = |c: WordCategory| graph.successors(c).unwrap_or(&[]);

    let mut visited = BTreeSet::new();
    let mut stack: Vec<WordCategory> = successors(WordCategory::Beginning).to_vec();
    while let Some(category) = stack.pop() {
        if visited.insert(category) {
            stack.extend_from_slice(successors(category));
        }
    }
    visited
}

/// Ending categories plus every category with a path to one.
fn categories_reaching_ending(graph: &GrammarGraph) -> BTreeSet<WordCategory> {
    let mut endable: BTreeSet<WordCategory> = WordCategory::ENDING.into_iter().collect();
    loop {
        let before = endable.len();
        for (category, successors) in graph.iter() {
            if successors.iter().any(|s| endable.contains(s)) {
                endable.insert(category);
            }
        }
        if endable.len() == before {
            return endable;
        }
    }
}

/// Partial tables loaded from a grammar file.
///
/// Keys other than `words` and `structure` are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GrammarOverrides {
    /// Word lists replacing the built-in lists of the same category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<WordCatalog>,
    /// Successor lists replacing the built-in entries of the same category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<GrammarGraph>,
}

impl GrammarOverrides {
    /// Merge over the built-in tables and validate the result.
    pub fn apply(self) -> GenResult<Grammar> {
        let mut catalog = WordCatalog::builtin();
        let mut graph = GrammarGraph::builtin();
        if let Some(words) = self.words {
            catalog.merge(words);
        }
        if let Some(structure) = self.structure {
            graph.merge(structure);
        }
        Grammar::new(catalog, graph)
    }
}
