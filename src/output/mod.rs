//! Terminal output formatting

use colored::Colorize;

use crate::core::{Feedback, Mark, Word};

/// Render a tried word with its feedback, one colored letter per position
#[must_use]
pub fn render_round(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .to_uppercase()
        .chars()
        .zip(feedback.marks())
        .map(|(letter, mark)| match mark {
            Mark::Green => letter.to_string().bright_green().bold().to_string(),
            Mark::Amber => letter.to_string().yellow().bold().to_string(),
            Mark::Grey => letter.to_string().dimmed().to_string(),
        })
        .collect()
}

/// Render a recommendation prominently
#[must_use]
pub fn render_recommendation(word: &Word) -> String {
    word.text().to_uppercase().bright_cyan().bold().to_string()
}
