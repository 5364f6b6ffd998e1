//! Constraint tracking, candidate filtering, and guess scoring
//!
//! The solver is split into three parts:
//! - [`constraints`]: the belief state built up from feedback (per-position
//!   letter domains and per-letter occurrence bounds)
//! - [`engine`]: filtering the word list against the belief state and
//!   ranking candidates by positional letter frequency
//! - [`session`]: the round-by-round state machine tying the two together

pub mod constraints;
pub mod engine;
pub mod session;

pub use constraints::{Bounds, ConstraintStore, LetterSet};
pub use engine::{PositionFrequency, ScoreOptions, filter, recommend, score};
pub use session::{RoundError, RoundOutcome, Session};
