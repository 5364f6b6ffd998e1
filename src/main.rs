//! Wordle Assistant - CLI
//!
//! Recommends guesses from the words still consistent with your feedback,
//! ranked by positional letter frequency.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_assist::{
    commands::{run_assist, run_solve},
    core::Word,
    solver::ScoreOptions,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Wordle assistant using positional letter-frequency scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a newline-separated word list (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Jitter scores by a random factor in [0.8, 1.2] to vary recommendations
    #[arg(long, global = true)]
    jitter: bool,

    /// Score repeated letters at full weight instead of discounting them
    #[arg(long, global = true)]
    allow_repeats: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant (default)
    Assist,

    /// Auto-solve a known answer, printing each round
    Solve {
        /// The target word to solve
        word: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_words(cli.wordlist.as_deref())?;
    anyhow::ensure!(!words.is_empty(), "word list is empty");

    let opts = ScoreOptions {
        discount_repeats: !cli.allow_repeats,
        jitter: cli.jitter,
    };

    match cli.command.unwrap_or(Commands::Assist) {
        Commands::Assist => run_assist(words, opts).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { word } => run_solve(&word, words, opts).map_err(|e| anyhow::anyhow!(e)),
    }
}

/// Load the word list from a file, or fall back to the embedded list
fn load_words(path: Option<&str>) -> Result<Vec<Word>> {
    match path {
        Some(path) => {
            load_from_file(path).with_context(|| format!("failed to read word list '{path}'"))
        }
        None => Ok(words_from_slice(WORDS)),
    }
}
