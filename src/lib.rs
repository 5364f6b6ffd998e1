//! Wordle Assistant
//!
//! Tracks which dictionary words remain consistent with the feedback you have
//! received so far and recommends the next guess using a positional
//! letter-frequency heuristic.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assist::core::{Feedback, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("slate").unwrap();
//!
//! // Grade a guess against a known answer
//! let feedback = Feedback::grade(&guess, &answer);
//! assert_eq!(feedback.encode(), "NNYNY");
//! ```

// Core domain types
pub mod core;

// Constraint tracking, candidate filtering, and scoring
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
