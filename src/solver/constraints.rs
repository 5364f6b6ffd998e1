//! The belief state built up from feedback
//!
//! A [`ConstraintStore`] owns two structures:
//! - one [`LetterSet`] per position: the letters still allowed there
//! - one [`Bounds`] per letter: an inclusive `[min, max]` on how many times
//!   the letter may appear in the answer
//!
//! Feedback only ever tightens the store. Each round is tallied locally
//! first, then merged into the persistent bounds by taking the larger min
//! and the smaller max, so information from earlier rounds is never
//! discarded even when the player ignores the recommendation.

use crate::core::{ALPHABET_LEN, Feedback, Mark, WORD_LEN, Word, letter_index};

/// A set of lowercase letters, stored as a 26-bit mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The full alphabet
    pub const FULL: Self = Self((1 << ALPHABET_LEN) - 1);

    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// The set containing exactly one letter
    #[inline]
    #[must_use]
    pub const fn only(letter: u8) -> Self {
        Self(1 << letter_index(letter))
    }

    /// Whether the set contains the given letter
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & (1 << letter_index(letter)) != 0
    }

    /// Remove a letter from the set
    #[inline]
    pub const fn remove(&mut self, letter: u8) {
        self.0 &= !(1 << letter_index(letter));
    }

    /// Add a letter to the set
    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        self.0 |= 1 << letter_index(letter);
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Whether the set is empty (a contradiction in a position domain)
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the letters in the set, in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_LEN as u8)
            .map(|i| i + b'a')
            .filter(move |&letter| self.contains(letter))
    }
}

/// Inclusive occurrence bounds for one letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: u8,
    pub max: u8,
}

impl Bounds {
    /// The initial, fully-unconstrained bounds
    pub const UNCONSTRAINED: Self = Self {
        min: 0,
        max: WORD_LEN as u8,
    };

    /// Whether `count` occurrences satisfy these bounds
    #[inline]
    #[must_use]
    pub const fn permits(self, count: u8) -> bool {
        self.min <= count && count <= self.max
    }
}

/// Belief state for one session: position domains plus occurrence bounds
///
/// Exclusively owned by one session; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintStore {
    domains: [LetterSet; WORD_LEN],
    bounds: [Bounds; ALPHABET_LEN],
}

impl Default for ConstraintStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintStore {
    /// Create a store with every position open to the full alphabet and
    /// every letter's occurrence bounds at `[0, 5]`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            domains: [LetterSet::FULL; WORD_LEN],
            bounds: [Bounds::UNCONSTRAINED; ALPHABET_LEN],
        }
    }

    /// Restore the initial, fully-unconstrained state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The set of letters still allowed at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn domain(&self, position: usize) -> LetterSet {
        self.domains[position]
    }

    /// The occurrence bounds for a lowercase letter
    #[inline]
    #[must_use]
    pub const fn bounds(&self, letter: u8) -> Bounds {
        self.bounds[letter_index(letter)]
    }

    /// Whether a word is consistent with the current belief state
    #[must_use]
    pub fn permits(&self, word: &Word) -> bool {
        for (i, domain) in self.domains.iter().enumerate() {
            if !domain.contains(word.char_at(i)) {
                return false;
            }
        }
        self.bounds
            .iter()
            .zip(word.letter_counts())
            .all(|(bounds, &count)| bounds.permits(count))
    }

    /// Narrow the store with one round of feedback for a tried word
    ///
    /// Marks are tallied into round-local bounds first:
    /// - Green at position `i`: the domain there collapses to exactly that
    ///   letter, and the letter's round-local min goes up by one.
    /// - Amber at position `i`: the letter leaves that domain but its
    ///   round-local min still goes up by one (it is somewhere else).
    /// - Grey at position `i`: the letter leaves that domain and is capped —
    ///   its round-local max becomes however many occurrences were confirmed
    ///   green/amber in this same round. A word like "sassy" answered
    ///   `N?NNN` therefore yields bounds `[1, 1]` for `s`, not `[1, 0]`.
    ///
    /// The local tally is then merged into the persistent bounds by
    /// tightening only: min can only rise, max can only fall.
    pub fn apply_feedback(&mut self, tried: &Word, feedback: &Feedback) {
        let mut local_min = [0u8; ALPHABET_LEN];
        let mut capped = [false; ALPHABET_LEN];

        for (i, mark) in feedback.marks().iter().enumerate() {
            let letter = tried.char_at(i);
            match mark {
                Mark::Green => {
                    self.domains[i] = LetterSet::only(letter);
                    local_min[letter_index(letter)] += 1;
                }
                Mark::Amber => {
                    self.domains[i].remove(letter);
                    local_min[letter_index(letter)] += 1;
                }
                Mark::Grey => {
                    self.domains[i].remove(letter);
                    capped[letter_index(letter)] = true;
                }
            }
        }

        for (i, bounds) in self.bounds.iter_mut().enumerate() {
            let local_max = if capped[i] {
                local_min[i]
            } else {
                WORD_LEN as u8
            };
            bounds.min = bounds.min.max(local_min[i]);
            bounds.max = bounds.max.min(local_max);
        }
    }

    #[cfg(test)]
    pub(crate) fn set_domain(&mut self, position: usize, domain: LetterSet) {
        self.domains[position] = domain;
    }
}
