pub mod loader;
pub mod mapping;
pub mod oracle;

pub use self::mapping::{as_text, map_characters, map_words, Glyph, MappedWord};
pub use self::oracle::{Dictionary, EnglishOracle};

use crate::cache::KeyCache;
use crate::corpus::Word;
use crate::key::Key;
use rayon::prelude::*;

/// Scores keys by the fraction of words they turn into recognised English.
pub struct Scorer<O> {
    oracle: O,
}

impl<O: EnglishOracle> Scorer<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Maps `words` through `key` and scores the result without touching any
    /// cache.
    ///
    /// Words still holding a raw symbol are not judged but stay in the
    /// denominator.
    ///
    /// # Panics
    /// If `words` is empty. A [`crate::corpus::WordCorpus`] never is.
    pub fn score(&self, words: &[Word], key: &Key) -> (Vec<MappedWord>, f64) {
        assert!(!words.is_empty(), "Cannot score a key against zero words");

        let mapped = map_words(words, key);
        let recognised = mapped
            .iter()
            .filter_map(|w| as_text(w))
            .filter(|text| self.oracle.is_english(text))
            .count();

        let score = recognised as f64 / words.len() as f64;
        (mapped, score)
    }

    /// Scores `key` and records the result under its canonical string,
    /// replacing any earlier entry.
    pub fn check_key(
        &self,
        cache: &mut KeyCache,
        words: &[Word],
        key: &Key,
    ) -> (Vec<MappedWord>, f64) {
        let (mapped, score) = self.score(words, key);
        cache.put(key, score);
        (mapped, score)
    }

    /// Scores a batch in parallel. Results line up with `keys`; the caller
    /// merges them into its cache.
    pub fn score_batch(&self, words: &[Word], keys: &[Key]) -> Vec<f64> {
        keys.par_iter()
            .map(|key| self.score(words, key).1)
            .collect()
    }

    /// The translated words the oracle accepted, in corpus order.
    pub fn recognized_words(&self, words: &[Word], key: &Key) -> Vec<String> {
        map_words(words, key)
            .iter()
            .filter_map(|w| as_text(w))
            .filter(|text| self.oracle.is_english(text))
            .collect()
    }
}
