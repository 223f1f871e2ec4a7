//! CLI frontend for the Wortwerk sentence generator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "wk",
    about = "Wortwerk — random sentences from a grammar graph",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log generator decisions to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that generates sentences.
#[derive(Args, Debug, Clone)]
pub struct SentenceArgs {
    /// Minimum word count (punctuation counts as a word)
    #[arg(long, default_value = "1")]
    pub min: u64,

    /// Maximum word count
    #[arg(long, default_value = "100")]
    pub max: u64,

    /// Stop at the word count even if the last word is not a noun or verb
    #[arg(long)]
    pub no_good_ending: bool,

    /// Do not append punctuation
    #[arg(long)]
    pub no_end: bool,

    /// Use this tense for every sentence: present, past, future, continuous
    #[arg(long)]
    pub tense: Option<String>,

    /// JSON grammar file merged over the built-in grammar
    #[arg(short, long)]
    pub grammar: Option<PathBuf>,

    /// RNG seed for reproducible output
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of sentences
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate grammar-following sentences
    Sentence {
        #[command(flatten)]
        args: SentenceArgs,

        /// Print each sentence with its word categories as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate unstructured random letters
    Random {
        /// Minimum number of characters
        #[arg(long, default_value = "1")]
        min: u64,

        /// Maximum number of characters
        #[arg(long, default_value = "1000")]
        max: u64,

        /// Alphabet to draw from (default: a-z, A-Z and weighted spaces)
        #[arg(short, long)]
        letters: Option<String>,

        /// RNG seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of lines
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Type sentences out letter by letter, optionally with sound
    Type {
        #[command(flatten)]
        args: SentenceArgs,

        /// Type this text instead of generated sentences
        #[arg(short, long)]
        text: Option<String>,

        /// Milliseconds between letters (or for the whole line with --total)
        #[arg(long, default_value = "4")]
        delay_ms: u64,

        /// Treat --delay-ms as the time for the whole line
        #[arg(long)]
        total: bool,

        /// Ring the terminal bell before each line
        #[arg(long, conflicts_with = "player")]
        bell: bool,

        /// Audio program to run per cue, e.g. aplay or afplay
        #[arg(long)]
        player: Option<String>,

        /// Sound file played before each line
        #[arg(long, requires = "player")]
        begin_sound: Option<PathBuf>,

        /// Sound file played between letters
        #[arg(long, requires = "player")]
        letter_sound: Option<PathBuf>,

        /// Wait for the begin sound to finish before typing
        #[arg(long)]
        wait_begin: bool,

        /// Wait for each letter sound to finish before the next letter
        #[arg(long)]
        wait_letter: bool,
    },

    /// Validate and print the effective grammar
    Grammar {
        /// JSON grammar file merged over the built-in grammar
        #[arg(short, long)]
        grammar: Option<PathBuf>,

        /// Print the full grammar as JSON (a starting point for custom grammars)
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Sentence { args, json } => commands::sentence::run(&args, json),
        Commands::Random {
            min,
            max,
            letters,
            seed,
            count,
        } => commands::random::run(min, max, letters.as_deref(), seed, count),
        Commands::Type {
            args,
            text,
            delay_ms,
            total,
            bell,
            player,
            begin_sound,
            letter_sound,
            wait_begin,
            wait_letter,
        } => commands::typewrite::run(
            &args,
            text.as_deref(),
            commands::typewrite::Sound {
                delay_ms,
                total,
                bell,
                player,
                begin_sound,
                letter_sound,
                wait_begin,
                wait_letter,
            },
        ),
        Commands::Grammar { grammar, json } => commands::grammar::run(grammar.as_deref(), json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
