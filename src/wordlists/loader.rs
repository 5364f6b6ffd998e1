//! Word list loading utilities
//!
//! The persisted format is a newline-separated list of lowercase 5-letter
//! words. Loading skips blank and invalid lines and collapses duplicates,
//! keeping the first occurrence's position.

use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

use crate::core::{WORD_LEN, Word};

/// Load words from a file
///
/// Returns deduplicated valid words in file order; invalid entries are
/// skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_assist::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordlist.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Convert the embedded string slice to a deduplicated Word vector
///
/// # Examples
/// ```
/// use wordle_assist::wordlists::WORDS;
/// use wordle_assist::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut seen: FxHashSet<[u8; WORD_LEN]> = FxHashSet::default();
    lines
        .filter_map(|line| Word::new(line.trim()).ok())
        .filter(|word| seen.insert(*word.chars()))
        .collect()
}
