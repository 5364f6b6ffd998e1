//! Feedback parsing, grading, and representation
//!
//! One round of feedback is five per-position marks:
//! - Green: the letter is in the correct position
//! - Amber: the letter is present but in the wrong position
//! - Grey: the letter is absent (or all its occurrences are already
//!   accounted for by green/amber marks in the same round)
//!
//! The wire encoding is a 5-character string over `{'Y', '?', 'N'}`,
//! matched positionally to the tried word: `Y` = green, `?` = amber,
//! `N` = grey.

use std::fmt;

use super::{WORD_LEN, Word, letter_index};

/// Per-position feedback judgment for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Correct letter, correct position
    Green,
    /// Letter present in the answer, wrong position
    Amber,
    /// Letter absent, or no further occurrences beyond those already marked
    Grey,
}

/// Feedback for one full round: exactly five marks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    marks: [Mark; WORD_LEN],
}

/// Error type for malformed feedback strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Feedback must be exactly 5 characters, got {len}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "Invalid feedback character '{ch}', expected Y, ?, or N")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// All greens (the guess was the answer)
    pub const ALL_GREEN: Self = Self {
        marks: [Mark::Green; WORD_LEN],
    };

    /// Create feedback directly from five marks
    #[inline]
    #[must_use]
    pub const fn from_marks(marks: [Mark; WORD_LEN]) -> Self {
        Self { marks }
    }

    /// The five marks, in position order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.marks
    }

    /// Whether every mark is green
    #[must_use]
    pub fn is_all_green(&self) -> bool {
        self.marks.iter().all(|&m| m == Mark::Green)
    }

    /// Parse feedback from its 5-character `Y`/`?`/`N` encoding
    ///
    /// `Y` and `N` are accepted in either case; `?` is literal.
    ///
    /// # Errors
    /// Returns `FeedbackError::InvalidLength` if the string is not exactly
    /// 5 characters, or `FeedbackError::InvalidSymbol` on the first
    /// character outside the alphabet.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Feedback, FeedbackError, Mark};
    ///
    /// let feedback = Feedback::parse("YN??N").unwrap();
    /// assert_eq!(feedback.marks()[0], Mark::Green);
    /// assert_eq!(feedback.marks()[2], Mark::Amber);
    ///
    /// assert_eq!(Feedback::parse("YNX?N"), Err(FeedbackError::InvalidSymbol('X')));
    /// ```
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LEN {
            return Err(FeedbackError::InvalidLength(chars.len()));
        }

        let mut marks = [Mark::Grey; WORD_LEN];
        for (i, ch) in chars.into_iter().enumerate() {
            marks[i] = match ch {
                'Y' | 'y' => Mark::Green,
                '?' => Mark::Amber,
                'N' | 'n' => Mark::Grey,
                _ => return Err(FeedbackError::InvalidSymbol(ch)),
            };
        }

        Ok(Self { marks })
    }

    /// Encode feedback back into its 5-character `Y`/`?`/`N` form
    #[must_use]
    pub fn encode(&self) -> String {
        self.marks
            .iter()
            .map(|m| match m {
                Mark::Green => 'Y',
                Mark::Amber => '?',
                Mark::Grey => 'N',
            })
            .collect()
    }

    /// Compute the feedback the game would give for `guess` against `answer`
    ///
    /// Implements the exact feedback rules, including duplicate letters:
    /// greens consume the answer's letter counts first, then ambers are
    /// awarded left to right while counts remain; everything else is grey.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// assert_eq!(Feedback::grade(&guess, &answer).encode(), "NNYNY");
    /// ```
    #[must_use]
    pub fn grade(guess: &Word, answer: &Word) -> Self {
        let mut marks = [Mark::Grey; WORD_LEN];
        let mut available = *answer.letter_counts();

        // First pass: greens consume from the available pool
        for i in 0..WORD_LEN {
            if guess.char_at(i) == answer.char_at(i) {
                marks[i] = Mark::Green;
                available[letter_index(guess.char_at(i))] -= 1;
            }
        }

        // Second pass: ambers from whatever pool remains
        for i in 0..WORD_LEN {
            if marks[i] == Mark::Green {
                continue;
            }
            let slot = &mut available[letter_index(guess.char_at(i))];
            if *slot > 0 {
                marks[i] = Mark::Amber;
                *slot -= 1;
            }
        }

        Self { marks }
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let feedback = Feedback::parse("Y?NNY").unwrap();
        assert_eq!(
            feedback.marks(),
            &[Mark::Green, Mark::Amber, Mark::Grey, Mark::Grey, Mark::Green]
        );
    }

    #[test]
    fn parse_case_insensitive_letters() {
        assert_eq!(Feedback::parse("ynYNy"), Feedback::parse("YNYNY"));
    }

    #[test]
    fn parse_invalid_length() {
        assert_eq!(Feedback::parse("YYNN"), Err(FeedbackError::InvalidLength(4)));
        assert_eq!(
            Feedback::parse("YYNNYY"),
            Err(FeedbackError::InvalidLength(6))
        );
        assert_eq!(Feedback::parse(""), Err(FeedbackError::InvalidLength(0)));
    }

    #[test]
    fn parse_invalid_symbol() {
        assert_eq!(
            Feedback::parse("YYGNN"),
            Err(FeedbackError::InvalidSymbol('G'))
        );
        assert_eq!(
            Feedback::parse("YY NN"),
            Err(FeedbackError::InvalidSymbol(' '))
        );
    }

    #[test]
    fn encode_round_trip() {
        let feedback = Feedback::parse("N?YN?").unwrap();
        assert_eq!(feedback.encode(), "N?YN?");
    }

    #[test]
    fn all_green_constant() {
        assert!(Feedback::ALL_GREEN.is_all_green());
        assert_eq!(Feedback::ALL_GREEN.encode(), "YYYYY");
    }

    #[test]
    fn grade_all_grey() {
        let guess = Word::new("fghij").unwrap();
        let answer = Word::new("crane").unwrap();
        assert_eq!(Feedback::grade(&guess, &answer).encode(), "NNNNN");
    }

    #[test]
    fn grade_all_green() {
        let word = Word::new("crane").unwrap();
        assert_eq!(Feedback::grade(&word, &word), Feedback::ALL_GREEN);
    }

    #[test]
    fn grade_duplicate_letters_yellow_pool() {
        // SPEED vs ERASE: S amber, P grey, both Es amber, D grey
        let guess = Word::new("speed").unwrap();
        let answer = Word::new("erase").unwrap();
        assert_eq!(Feedback::grade(&guess, &answer).encode(), "?N??N");
    }

    #[test]
    fn grade_duplicate_letters_green_consumes_first() {
        // ROBOT vs FLOOR: R amber, first O amber, B grey, second O green, T grey
        let guess = Word::new("robot").unwrap();
        let answer = Word::new("floor").unwrap();
        assert_eq!(Feedback::grade(&guess, &answer).encode(), "??NYN");
    }

    #[test]
    fn grade_grey_when_pool_exhausted() {
        // Only one S in the answer: green at position 0 consumes it, so the
        // second S in the guess is grey.
        let guess = Word::new("sassy").unwrap();
        let answer = Word::new("salad").unwrap();
        let feedback = Feedback::grade(&guess, &answer);
        assert_eq!(feedback.marks()[0], Mark::Green);
        assert_eq!(feedback.marks()[2], Mark::Grey);
    }
}
