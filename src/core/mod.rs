//! Core domain types for the assistant
//!
//! This module contains the fundamental domain types with zero external
//! dependencies. All types here are pure and have clear properties.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, Mark};
pub use word::{Word, WordError};

/// Number of letters in a word
pub const WORD_LEN: usize = 5;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// Index of a lowercase ASCII letter in the alphabet (a = 0, z = 25)
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}
