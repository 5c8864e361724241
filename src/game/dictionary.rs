//! Bundled default word pool
//!
//! Embeds `data/words.txt` at build time and normalizes it once, on first
//! use. Every configuration without its own words shares this pool.

use super::words::{load_words_from_str, normalize, WordPool};
use once_cell::sync::Lazy;

/// Embedded word list, one candidate per line.
/// Casing and surrounding whitespace don't matter; entries go through
/// normalization like any caller-supplied list.
static WORDS_DATA: &str = include_str!("../../data/words.txt");

/// Normalized default pool, built on first access
static DEFAULT_POOL: Lazy<WordPool> = Lazy::new(|| {
    let pool = normalize(load_words_from_str(WORDS_DATA)).expect("bundled word list has valid words");
    log::debug!("loaded {} bundled words", pool.len());
    pool
});

/// The bundled pool used when a configuration supplies no words.
pub fn default_pool() -> &'static WordPool {
    &DEFAULT_POOL
}

/// Returns the total number of words in the bundled pool
pub fn word_count() -> usize {
    DEFAULT_POOL.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::validation::is_word;

    #[test]
    fn test_word_count() {
        let count = word_count();
        assert!(count >= 300, "Expected 300+ words, got {}", count);
    }

    #[test]
    fn test_default_pool_is_valid() {
        let pool = default_pool();
        assert!(pool.iter().all(|w| is_word(w.as_str())));
        assert!(pool.as_slice().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_default_pool_is_shared() {
        assert!(std::ptr::eq(default_pool(), default_pool()));
    }

    #[test]
    fn test_known_words() {
        let pool = default_pool();
        assert!(pool.contains("MEGAHERTZ"));
        assert!(pool.contains("XYLOPHONE"));
        assert!(pool.contains("ZEBRA"));
    }
}
