pub mod grammar;
pub mod random;
pub mod sentence;
pub mod typewrite;

use std::fs;
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;
use wk_core::{Grammar, SentenceOptions, Tense};

use crate::SentenceArgs;

/// Load a grammar file merged over the defaults, or the built-in grammar.
fn load_grammar(path: Option<&Path>) -> Result<Grammar, String> {
    let Some(path) = path else {
        return Ok(Grammar::builtin());
    };
    let json = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let grammar =
        Grammar::from_json_str(&json).map_err(|e| format!("{}: {e}", path.display()))?;
    debug!(
        path = %path.display(),
        always_endable = grammar.can_always_end(),
        "loaded grammar file"
    );
    Ok(grammar)
}

/// A seeded RNG, or one seeded from the OS when no seed is given.
fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Translate CLI flags into generator options.
fn sentence_options(args: &SentenceArgs) -> Result<SentenceOptions, String> {
    let mut options = SentenceOptions::default()
        .with_length(args.min, args.max)
        .with_end_on_good_word(!args.no_good_ending)
        .with_generate_end(!args.no_end);
    if let Some(name) = &args.tense {
        let tense = Tense::parse(name).ok_or_else(|| {
            format!("unknown tense '{name}' (expected present, past, future or continuous)")
        })?;
        options = options.with_tense(tense);
    }
    Ok(options)
}
