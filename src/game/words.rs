//! Word list processing
//!
//! Turns raw candidate strings into a [`WordPool`]: trimmed, uppercased,
//! letters-only and sorted.

use super::error::GameError;
use super::validation::is_word;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// A single guessable word, guaranteed to match `^[A-Z]+$`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(String);

impl Word {
    /// Accept a candidate that is already a valid uppercase word.
    /// No trimming or case folding happens here; see [`normalize`].
    pub fn parse(candidate: &str) -> Option<Self> {
        is_word(candidate).then(|| Self(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters in the word
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a parsed word.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Count how many times `letter` appears in the word.
    pub fn occurrences(&self, letter: char) -> usize {
        self.0.chars().filter(|&c| c == letter).count()
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A sorted, non-empty list of words to draw secrets from.
///
/// Duplicates are allowed; only emptiness is ruled out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<Word>,
}

impl WordPool {
    /// Get the words in ascending order.
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Get the pool size (at least 1).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: an empty pool can't be built.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether `word` is in the pool. Exact, case-sensitive match.
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|w| w.as_str().cmp(word))
            .is_ok()
    }

    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }
}

impl<'a> IntoIterator for &'a WordPool {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Normalize a raw list of candidates into a [`WordPool`].
///
/// Each entry is trimmed (whitespace and U+FEFF) and uppercased; anything
/// that isn't then made up solely of the letters A-Z is dropped. Survivors
/// are sorted ascending.
/// Fails with [`GameError::EmptyWordList`] if nothing survives.
pub fn normalize<I, S>(raw: I) -> Result<WordPool, GameError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words: Vec<Word> = raw
        .into_iter()
        .filter_map(|entry| Word::parse(&trim_entry(entry.as_ref()).to_uppercase()))
        .collect();

    if words.is_empty() {
        return Err(GameError::EmptyWordList);
    }

    words.sort();
    log::debug!("normalized word list into {} words", words.len());
    Ok(WordPool { words })
}

/// Trim whitespace and byte order marks from both ends.
fn trim_entry(entry: &str) -> &str {
    entry.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Split newline-delimited text into raw candidates (one per line).
pub fn load_words_from_str(data: &str) -> Vec<String> {
    data.lines().map(str::to_string).collect()
}

/// Read a newline-delimited word file into raw candidates.
///
/// The lines are returned as-is; run them through [`normalize`] (or hand
/// them to [`GameConfig`](super::GameConfig)) to get a pool.
pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    reader.lines().collect()
}
