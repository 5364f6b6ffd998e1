//! Auto-solve a known answer
//!
//! Plays the assistant against itself: each round the recommendation is
//! graded against the target word and fed back in. Useful for checking how
//! quickly the heuristic converges on a given answer.

use colored::Colorize;

use crate::core::{Feedback, Word};
use crate::output::render_round;
use crate::solver::{RoundOutcome, ScoreOptions, Session};

/// Solve a specific target word, printing each round
///
/// # Errors
///
/// Returns an error if the target is not a valid word, is missing from the
/// word list, or the candidate set empties out (which would indicate a
/// filtering bug, not bad input).
pub fn run_solve(target: &str, words: Vec<Word>, opts: ScoreOptions) -> Result<(), String> {
    let answer = Word::new(target).map_err(|e| e.to_string())?;

    let mut session = Session::new(words, opts);
    if !session.candidates().any(|word| word == &answer) {
        return Err(format!("'{answer}' is not in the word list"));
    }

    println!("\nSolving {}...\n", answer.text().to_uppercase().bold());

    let mut round = 1;
    loop {
        let guess = session
            .recommendation()
            .ok_or("no candidates remain")?
            .clone();
        let feedback = Feedback::grade(&guess, &answer);

        println!(
            "  {round}. {}  ({} candidates)",
            render_round(&guess, &feedback),
            session.candidate_count()
        );

        if feedback.is_all_green() {
            println!(
                "\n{} Solved in {round} {}\n",
                "✓".bright_green(),
                if round == 1 { "round" } else { "rounds" }
            );
            return Ok(());
        }

        match session.submit_round(guess.text(), &feedback.encode()) {
            RoundOutcome::Exhausted => {
                return Err("candidate set emptied out on consistent feedback".to_string());
            }
            RoundOutcome::Continue(_) | RoundOutcome::Solved(_) => round += 1,
            RoundOutcome::Rejected(reason) => return Err(reason.to_string()),
        }
    }
}
