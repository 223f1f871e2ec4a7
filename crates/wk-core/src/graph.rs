//! The grammar graph: which category may follow which.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::WordCategory;
use crate::error::{GenError, GenResult};

/// Directed graph over word categories. Each entry lists the categories that
/// may follow the key, in the order picks index into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrammarGraph {
    edges: BTreeMap<WordCategory, Vec<WordCategory>>,
}

impl GrammarGraph {
    /// Create a graph with no edges.
    pub fn empty() -> Self {
        Self {
            edges: BTreeMap::new(),
        }
    }

    /// The built-in sentence structure.
    pub fn builtin() -> Self {
        use WordCategory::*;

        let mut graph = Self::empty();
        graph.insert(Noun, vec![Verb, Between]);
        graph.insert(Pronoun, vec![Verb, Between]);
        graph.insert(Verb, vec![Noun, Verb, Between]);
        graph.insert(Adjective, vec![Noun]);
        graph.insert(Adverb, vec![Verb, Adjective, Adverb]);
        graph.insert(Ask, vec![Adjective, Between]);
        graph.insert(Between, vec![Noun, Verb, Adjective]);
        graph.insert(End, vec![End]);
        graph.insert(EndAsk, vec![EndAsk]);
        graph.insert(Beginning, vec![Noun, Pronoun, Verb, Adjective, Adverb, Ask]);
        graph
    }

    /// Categories that may follow `category`.
    pub fn successors(&self, category: WordCategory) -> GenResult<&[WordCategory]> {
        self.edges
            .get(&category)
            .map(Vec::as_slice)
            .ok_or(GenError::MissingSuccessors(category))
    }

    /// Returns true if the graph has an entry for `category`.
    pub fn contains(&self, category: WordCategory) -> bool {
        self.edges.contains_key(&category)
    }

    /// Replace the successors of a category, returning the previous list.
    pub fn insert(
        &mut self,
        category: WordCategory,
        successors: Vec<WordCategory>,
    ) -> Option<Vec<WordCategory>> {
        self.edges.insert(category, successors)
    }

    /// Add one successor to a category, creating the entry if needed.
    pub fn append(&mut self, category: WordCategory, successor: WordCategory) {
        self.edges.entry(category).or_default().push(successor);
    }

    /// Drop a category's entry.
    pub fn remove(&mut self, category: WordCategory) -> Option<Vec<WordCategory>> {
        self.edges.remove(&category)
    }

    /// Replace every entry present in `other`.
    pub fn merge(&mut self, other: Self) {
        self.edges.extend(other.edges);
    }

    /// Iterate entries in category order.
    pub fn iter(&self) -> impl Iterator<Item = (WordCategory, &[WordCategory])> {
        self.edges.iter().map(|(c, s)| (*c, s.as_slice()))
    }

    /// Every category that appears as a successor somewhere.
    pub fn destinations(&self) -> impl Iterator<Item = WordCategory> {
        let mut seen: Vec<WordCategory> = self.edges.values().flatten().copied().collect();
        seen.sort();
        seen.dedup();
        seen.into_iter()
    }
}

impl Default for GrammarGraph {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use WordCategory::*;

    #[test]
    fn builtin_beginning_successors() {
        let graph = GrammarGraph::builtin();
        assert_eq!(
            graph.successors(Beginning).unwrap(),
            &[Noun, Pronoun, Verb, Adjective, Adverb, Ask]
        );
        assert_eq!(graph.successors(End).unwrap(), &[End]);
        assert_eq!(graph.successors(EndAsk).unwrap(), &[EndAsk]);
    }

    #[test]
    fn missing_entry_is_an_error() {
        let graph = GrammarGraph::empty();
        assert!(matches!(
            graph.successors(Adverb),
            Err(GenError::MissingSuccessors(Adverb))
        ));
        assert!(!graph.contains(Adverb));
    }

    #[test]
    fn destinations_are_deduplicated() {
        let graph = GrammarGraph::builtin();
        let dests: Vec<_> = graph.destinations().collect();
        assert_eq!(
            dests,
            vec![Noun, Pronoun, Verb, Adjective, Adverb, Ask, Between, End, EndAsk]
        );
        assert!(!dests.contains(&Beginning));
    }

    #[test]
    fn append_and_merge() {
        let mut graph = GrammarGraph::builtin();
        graph.append(Adjective, Adjective);
        assert_eq!(graph.successors(Adjective).unwrap(), &[Noun, Adjective]);

        let mut overrides = GrammarGraph::empty();
        overrides.insert(Noun, vec![Verb]);
        graph.merge(overrides);
        assert_eq!(graph.successors(Noun).unwrap(), &[Verb]);
        assert_eq!(graph.successors(Pronoun).unwrap(), &[Verb, Between]);
    }

    #[test]
    fn json_round_trip_keeps_order() {
        let graph = GrammarGraph::builtin();
        let json = serde_json::to_string(&graph).unwrap();
        let back: GrammarGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(back, graph);
        assert!(json.contains(r#""ASK":["ADJECTIVE","BETWEEN"]"#));
    }
}
