//! Interactive assistant mode
//!
//! Text-based loop: print the recommendation, read the word the player
//! tried and the feedback the game gave, repeat until solved or exhausted.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::Word;
use crate::output::render_recommendation;
use crate::solver::{RoundOutcome, ScoreOptions, Session};

/// Run the interactive assistant
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_assist(words: Vec<Word>, opts: ScoreOptions) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle Assistant                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll recommend guesses; after each round tell me what you tried");
    println!("and what the game answered:\n");
    println!("  - Y = green (correct position)");
    println!("  - ? = amber (in the word, wrong position)");
    println!("  - N = grey (not in the word)\n");
    println!("Press Enter at the word prompt to use the recommendation.");
    println!("Type 'quit' at any prompt to exit.\n");

    let mut session = Session::new(words, opts);
    let mut round = 1;

    loop {
        let Some(recommendation) = session.recommendation().cloned() else {
            println!(
                "\n{} There are no possible words left. Are you sure you entered",
                "✗".bright_red()
            );
            println!("  the results correctly?");
            return Ok(());
        };

        if session.candidate_count() == 1 {
            println!(
                "\n{} The word must be: {}\n",
                "✓".bright_green(),
                render_recommendation(&recommendation)
            );
            return Ok(());
        }

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Round {round}: try {} ({} possible words remaining)",
            render_recommendation(&recommendation),
            session.candidate_count()
        );

        if session.candidate_count() <= 10 {
            println!("\nRemaining candidates:");
            for candidate in session.candidates() {
                println!("  • {}", candidate.text().to_uppercase());
            }
        }
        println!();

        let tried = match prompt("Word you tried (Enter = recommendation)")? {
            input if input.eq_ignore_ascii_case("quit") => return Ok(()),
            input if input.is_empty() => recommendation.text().to_string(),
            input => input,
        };

        let feedback = match prompt("Enter result (Y = green, ? = amber, N = grey, e.g. YYN?N)")? {
            input if input.eq_ignore_ascii_case("quit") => return Ok(()),
            input => input,
        };

        match session.submit_round(&tried, &feedback) {
            RoundOutcome::Rejected(reason) => {
                println!("\n{} {reason}. Try again.\n", "✗".bright_red());
            }
            RoundOutcome::Continue(_) | RoundOutcome::Solved(_) | RoundOutcome::Exhausted => {
                // Reported at the top of the next iteration
                round += 1;
            }
        }
    }
}

/// Get user input with a prompt
fn prompt(message: &str) -> Result<String, String> {
    print!("{message} > ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
