//! Round-by-round session state machine
//!
//! A [`Session`] owns the word list, the precomputed frequency table, and
//! one [`ConstraintStore`]. Each round it hands out a recommendation, takes
//! the word the player actually tried plus the feedback string, tightens the
//! store, and refilters. Sessions are fully independent; nothing is shared
//! between them.

use std::fmt;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;

use super::constraints::ConstraintStore;
use super::engine::{self, PositionFrequency, ScoreOptions};
use crate::core::{Feedback, FeedbackError, WORD_LEN, Word, WordError};

/// Why a submitted round was rejected
///
/// All of these are recoverable: the session state is left untouched and the
/// caller should re-prompt for corrected input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// Feedback string was not exactly 5 characters
    InvalidFeedbackLength(usize),
    /// Feedback contained a character outside `{Y, ?, N}`
    InvalidFeedbackSymbol(char),
    /// The tried word was not a well-formed 5-letter word
    InvalidWord(WordError),
    /// The tried word is not in the loaded word list
    WordNotInList(String),
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFeedbackLength(len) => {
                write!(f, "Feedback must be exactly 5 characters, got {len}")
            }
            Self::InvalidFeedbackSymbol(ch) => {
                write!(f, "Invalid feedback character '{ch}', expected Y, ?, or N")
            }
            Self::InvalidWord(err) => write!(f, "{err}"),
            Self::WordNotInList(word) => {
                write!(f, "'{word}' is not in the loaded word list")
            }
        }
    }
}

impl std::error::Error for RoundError {}

/// Result of submitting one round of feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// More than one candidate remains; keep playing
    Continue(usize),
    /// Exactly one candidate remains: this must be the answer
    Solved(Word),
    /// No candidates remain. The feedback history is contradictory
    /// (mis-entered feedback, or a word missing from the list). Terminal.
    Exhausted,
    /// The submitted input was malformed; state is unchanged
    Rejected(RoundError),
}

/// One assistant session
pub struct Session<R: Rng = StdRng> {
    words: Vec<Word>,
    membership: FxHashSet<[u8; WORD_LEN]>,
    frequency: PositionFrequency,
    store: ConstraintStore,
    opts: ScoreOptions,
    rng: R,
    candidates: Vec<Word>,
    recommendation: Option<Word>,
}

impl Session<StdRng> {
    /// Create a session seeded from the operating system
    #[must_use]
    pub fn new(words: Vec<Word>, opts: ScoreOptions) -> Self {
        Self::with_rng(words, opts, StdRng::from_os_rng())
    }
}

impl<R: Rng> Session<R> {
    /// Create a session with an explicit random source
    ///
    /// The word list is deduplicated (first occurrence wins) and the
    /// positional frequency table is computed once, from the full list;
    /// it never changes as candidates narrow.
    #[must_use]
    pub fn with_rng(words: Vec<Word>, opts: ScoreOptions, rng: R) -> Self {
        let mut membership = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| membership.insert(*word.chars()))
            .collect();

        let frequency = PositionFrequency::from_words(&words);
        let mut session = Self {
            words,
            membership,
            frequency,
            store: ConstraintStore::new(),
            opts,
            rng,
            candidates: Vec::new(),
            recommendation: None,
        };
        session.refresh();
        session
    }

    /// The current recommended guess, or `None` once no candidates remain
    ///
    /// Cached per round: repeated calls between submissions return the same
    /// word, and a rejected submission does not change it.
    #[must_use]
    pub fn recommendation(&self) -> Option<&Word> {
        self.recommendation.as_ref()
    }

    /// Number of words still consistent with all feedback
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// The words still consistent with all feedback, in word-list order
    pub fn candidates(&self) -> impl Iterator<Item = &Word> {
        self.candidates.iter()
    }

    /// The current belief state (read-only)
    #[must_use]
    pub const fn store(&self) -> &ConstraintStore {
        &self.store
    }

    /// Whether the session has reached a terminal state
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.candidates.len() <= 1
    }

    /// Submit the word the player tried and the feedback the game gave
    ///
    /// Malformed input yields [`RoundOutcome::Rejected`] and leaves the
    /// session untouched; the caller should re-prompt. Once the session is
    /// terminal, further submissions return the terminal outcome again.
    pub fn submit_round(&mut self, tried: &str, feedback: &str) -> RoundOutcome {
        if self.is_finished() {
            return self.outcome();
        }

        let tried = match Word::new(tried) {
            Ok(word) => word,
            Err(err) => return RoundOutcome::Rejected(RoundError::InvalidWord(err)),
        };
        if !self.membership.contains(tried.chars()) {
            return RoundOutcome::Rejected(RoundError::WordNotInList(tried.text().to_string()));
        }

        let feedback = match Feedback::parse(feedback) {
            Ok(feedback) => feedback,
            Err(FeedbackError::InvalidLength(len)) => {
                return RoundOutcome::Rejected(RoundError::InvalidFeedbackLength(len));
            }
            Err(FeedbackError::InvalidSymbol(ch)) => {
                return RoundOutcome::Rejected(RoundError::InvalidFeedbackSymbol(ch));
            }
        };

        self.store.apply_feedback(&tried, &feedback);
        self.refresh();
        self.outcome()
    }

    /// Refilter from scratch and cache the next recommendation
    fn refresh(&mut self) {
        let kept = engine::filter(&self.words, &self.store);
        self.recommendation =
            engine::recommend(&kept, &self.frequency, self.opts, &mut self.rng).cloned();
        self.candidates = kept.into_iter().cloned().collect();
    }

    fn outcome(&self) -> RoundOutcome {
        match self.candidates.as_slice() {
            [] => RoundOutcome::Exhausted,
            [only] => RoundOutcome::Solved(only.clone()),
            rest => RoundOutcome::Continue(rest.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn session(texts: &[&str]) -> Session<StdRng> {
        Session::with_rng(
            words(texts),
            ScoreOptions::default(),
            StdRng::seed_from_u64(7),
        )
    }

    const FIXTURE: &[&str] = &[
        "crane", "crate", "grate", "irate", "board", "house", "mount", "slate", "speed", "sweet",
    ];

    #[test]
    fn initial_state_counts_whole_list() {
        let session = session(FIXTURE);
        assert_eq!(session.candidate_count(), FIXTURE.len());
        assert!(session.recommendation().is_some());
        assert!(!session.is_finished());
    }

    #[test]
    fn duplicate_words_collapse_on_load() {
        let session = session(&["crane", "crane", "crate"]);
        assert_eq!(session.candidate_count(), 2);
    }

    #[test]
    fn recommendation_is_stable_within_a_round() {
        let session = session(FIXTURE);
        let first = session.recommendation().cloned();
        let second = session.recommendation().cloned();
        assert_eq!(first, second);
    }

    #[test]
    fn candidate_count_narrows_monotonically() {
        let mut session = session(FIXTURE);
        let answer = Word::new("grate").unwrap();

        let mut previous = session.candidate_count();
        for _ in 0..4 {
            let guess = session.recommendation().unwrap().clone();
            let feedback = Feedback::grade(&guess, &answer);
            session.submit_round(guess.text(), &feedback.encode());

            let count = session.candidate_count();
            assert!(count <= previous, "candidates grew from {previous} to {count}");
            previous = count;

            if session.is_finished() {
                break;
            }
        }
    }

    #[test]
    fn true_answer_always_survives_consistent_feedback() {
        for answer_text in ["crane", "board", "sweet", "irate"] {
            let mut session = session(FIXTURE);
            let answer = Word::new(answer_text).unwrap();

            for _ in 0..6 {
                let guess = session.recommendation().unwrap().clone();
                let feedback = Feedback::grade(&guess, &answer);
                session.submit_round(guess.text(), &feedback.encode());

                assert!(
                    session.candidates().any(|w| w == &answer),
                    "answer {answer_text} was filtered out"
                );
                if session.is_finished() {
                    break;
                }
            }
        }
    }

    #[test]
    fn rejected_feedback_leaves_state_unchanged() {
        let mut session = session(FIXTURE);
        let before_recommendation = session.recommendation().cloned();
        let before_count = session.candidate_count();

        let outcome = session.submit_round("crane", "YYNN");
        assert_eq!(
            outcome,
            RoundOutcome::Rejected(RoundError::InvalidFeedbackLength(4))
        );

        assert_eq!(session.recommendation().cloned(), before_recommendation);
        assert_eq!(session.candidate_count(), before_count);
    }

    #[test]
    fn rejected_feedback_symbol() {
        let mut session = session(FIXTURE);
        let outcome = session.submit_round("crane", "YYXNN");
        assert_eq!(
            outcome,
            RoundOutcome::Rejected(RoundError::InvalidFeedbackSymbol('X'))
        );
    }

    #[test]
    fn rejected_word_not_in_list() {
        let mut session = session(FIXTURE);
        let outcome = session.submit_round("zzzzz", "NNNNN");
        assert_eq!(
            outcome,
            RoundOutcome::Rejected(RoundError::WordNotInList("zzzzz".to_string()))
        );
    }

    #[test]
    fn rejected_malformed_word() {
        let mut session = session(FIXTURE);
        let outcome = session.submit_round("cranes", "NNNNN");
        assert!(matches!(
            outcome,
            RoundOutcome::Rejected(RoundError::InvalidWord(WordError::InvalidLength(6)))
        ));
    }

    #[test]
    fn all_green_feedback_solves() {
        let mut session = session(FIXTURE);
        let outcome = session.submit_round("board", "YYYYY");
        assert_eq!(outcome, RoundOutcome::Solved(Word::new("board").unwrap()));
        assert!(session.is_finished());
        assert_eq!(session.recommendation().unwrap().text(), "board");
    }

    #[test]
    fn narrowing_to_one_candidate_solves() {
        let mut session = session(&["crane", "crate", "board"]);
        let answer = Word::new("crane").unwrap();

        // "board" vs "crane": a green at position 2, r amber at position 3.
        let feedback = Feedback::grade(&Word::new("board").unwrap(), &answer);
        let outcome = session.submit_round("board", &feedback.encode());
        assert_eq!(outcome, RoundOutcome::Continue(2));

        // "crate" vs "crane" splits the remaining pair.
        let feedback = Feedback::grade(&Word::new("crate").unwrap(), &answer);
        let outcome = session.submit_round("crate", &feedback.encode());
        assert_eq!(outcome, RoundOutcome::Solved(answer));
    }

    #[test]
    fn contradictory_feedback_exhausts() {
        let mut session = session(&["crane", "crate"]);

        // Claiming every letter of "crane" is absent excludes both words.
        let outcome = session.submit_round("crane", "NNNNN");
        assert_eq!(outcome, RoundOutcome::Exhausted);
        assert!(session.recommendation().is_none());
        assert_eq!(session.candidate_count(), 0);
    }

    #[test]
    fn terminal_state_is_sticky() {
        let mut session = session(&["crane", "crate"]);
        assert_eq!(session.submit_round("crane", "NNNNN"), RoundOutcome::Exhausted);

        // Further submissions keep reporting the terminal outcome.
        assert_eq!(session.submit_round("crate", "YYYYY"), RoundOutcome::Exhausted);
    }

    #[test]
    fn solved_state_is_sticky() {
        let mut session = session(FIXTURE);
        let solved = session.submit_round("house", "YYYYY");
        assert_eq!(solved, RoundOutcome::Solved(Word::new("house").unwrap()));

        assert_eq!(
            session.submit_round("house", "NNNNN"),
            RoundOutcome::Solved(Word::new("house").unwrap())
        );
    }

    #[test]
    fn bounds_tighten_across_rounds() {
        let mut session = session(FIXTURE);
        let answer = Word::new("grate").unwrap();

        let feedback = Feedback::grade(&Word::new("crate").unwrap(), &answer);
        assert!(matches!(
            session.submit_round("crate", &feedback.encode()),
            RoundOutcome::Continue(_)
        ));
        let first: Vec<_> = (b'a'..=b'z').map(|l| session.store().bounds(l)).collect();

        let feedback = Feedback::grade(&Word::new("irate").unwrap(), &answer);
        session.submit_round("irate", &feedback.encode());

        // Every letter's interval is a subset of the one after round one.
        for (letter, before) in (b'a'..=b'z').zip(first) {
            let after = session.store().bounds(letter);
            assert!(after.min >= before.min, "letter {}", letter as char);
            assert!(after.max <= before.max, "letter {}", letter as char);
        }
    }
}
