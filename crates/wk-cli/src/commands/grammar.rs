use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use wk_core::{Tense, WordCategory};

const SAMPLE_WORDS: usize = 4;

pub fn run(path: Option<&Path>, json: bool) -> Result<(), String> {
    let grammar = super::load_grammar(path)?;

    if json {
        println!("{}", grammar.to_json_string().map_err(|e| e.to_string())?);
        return Ok(());
    }

    let catalog = grammar.catalog();
    let graph = grammar.graph();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Category", "Followed by", "Words", "Sample"]);

    for category in WordCategory::ALL {
        let successors = graph.successors(category).unwrap_or_default();
        let words = catalog.words(category).unwrap_or_default();
        if successors.is_empty() && words.is_empty() {
            continue;
        }

        let followed_by = if successors.is_empty() {
            "—".to_string()
        } else {
            successors
                .iter()
                .map(WordCategory::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        let sample = words
            .iter()
            .take(SAMPLE_WORDS)
            .map(|w| format!("'{}'", w.form(Tense::Present)))
            .collect::<Vec<_>>()
            .join(" ");

        table.add_row(vec![
            category.to_string(),
            followed_by,
            words.len().to_string(),
            sample,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {}", "Grammar OK".green().bold());
    if !grammar.can_always_end() {
        println!(
            "  {}",
            "warning: some walks can never reach a NOUN or VERB ending".yellow()
        );
    }

    Ok(())
}
