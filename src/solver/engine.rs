//! Candidate filtering and the letter-frequency scoring heuristic
//!
//! Scoring favors words whose letters are common at their positions across
//! the original word list. The frequency table is computed once per session
//! and deliberately never recomputed as candidates narrow, so the heuristic
//! keeps rewarding globally common letter placements.

use rand::Rng;
use rand::seq::SliceRandom;

use super::constraints::ConstraintStore;
use crate::core::{ALPHABET_LEN, WORD_LEN, Word, letter_index};

/// How often each letter appears at each position across a word list
///
/// Immutable for the session once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionFrequency {
    counts: [[u32; WORD_LEN]; ALPHABET_LEN],
}

impl PositionFrequency {
    /// Tally letter placements across the full word list
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        let mut counts = [[0u32; WORD_LEN]; ALPHABET_LEN];
        for word in words {
            for (position, &letter) in word.chars().iter().enumerate() {
                counts[letter_index(letter)][position] += 1;
            }
        }
        Self { counts }
    }

    /// How many words have `letter` at `position`
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn count(&self, letter: u8, position: usize) -> u32 {
        self.counts[letter_index(letter)][position]
    }
}

/// Options controlling the scoring heuristic
#[derive(Debug, Clone, Copy)]
pub struct ScoreOptions {
    /// Divide the n-th occurrence of a repeated letter's contribution by n,
    /// discouraging guesses with duplicate letters (they waste information)
    pub discount_repeats: bool,
    /// Multiply the final score by a uniform factor in `[0.8, 1.2]` to break
    /// ties non-deterministically across runs. Cosmetic only; never used for
    /// correctness-critical comparisons.
    pub jitter: bool,
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self {
            discount_repeats: true,
            jitter: false,
        }
    }
}

/// Keep the words consistent with the belief state, in word-list order
///
/// Recomputed from scratch each round; list sizes are small enough that
/// simplicity beats incremental maintenance.
#[must_use]
pub fn filter<'a>(words: &'a [Word], store: &ConstraintStore) -> Vec<&'a Word> {
    words.iter().filter(|word| store.permits(word)).collect()
}

/// Score a word by summing its letters' positional frequencies
///
/// Randomness is always injected through `rng`; it is only drawn from when
/// `opts.jitter` is set, so scoring without jitter is deterministic.
#[must_use]
pub fn score<R: Rng>(
    word: &Word,
    frequency: &PositionFrequency,
    opts: ScoreOptions,
    rng: &mut R,
) -> f64 {
    let mut seen = [0u8; ALPHABET_LEN];
    let mut total = 0.0;

    for (position, &letter) in word.chars().iter().enumerate() {
        let occurrence = &mut seen[letter_index(letter)];
        *occurrence += 1;

        let contribution = f64::from(frequency.count(letter, position));
        if opts.discount_repeats {
            total += contribution / f64::from(*occurrence);
        } else {
            total += contribution;
        }
    }

    if opts.jitter {
        total *= rng.random_range(0.8..=1.2);
    }

    total
}

/// Pick the highest-scoring candidate
///
/// The candidate order is shuffled before a stable max-scan, so ties are
/// broken fairly across runs even when scoring without jitter.
pub fn recommend<'a, R: Rng>(
    candidates: &[&'a Word],
    frequency: &PositionFrequency,
    opts: ScoreOptions,
    rng: &mut R,
) -> Option<&'a Word> {
    let mut order: Vec<&Word> = candidates.to_vec();
    order.shuffle(rng);

    let mut best: Option<(&Word, f64)> = None;
    for word in order {
        let word_score = score(word, frequency, opts, rng);
        match best {
            Some((_, best_score)) if word_score <= best_score => {}
            _ => best = Some((word, word_score)),
        }
    }

    best.map(|(word, _)| word)
}
