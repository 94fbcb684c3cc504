pub mod mutation;
pub mod runner;
pub mod sampler;

pub use self::runner::{ProgressCallback, SearchOptions, SearchResult, Searcher};
pub use self::sampler::FrequencySampler;

use crate::cache::KeyCache;
use crate::key::Key;
use crate::puzzle::Symbol;
use fastrand::Rng;
use tracing::debug;

/// English letters, most frequent first.
pub const ENGLISH_BY_FREQUENCY: [char; 26] = [
    'e', 't', 'a', 'o', 'i', 'n', 's', 'h', 'r', 'd', 'l', 'c', 'u', 'm', 'w', 'f', 'g', 'y',
    'p', 'b', 'v', 'k', 'j', 'x', 'q', 'z',
];

pub const DEFAULT_MAX_GENERATE_ATTEMPTS: usize = 100;

/// Scales a sample in [0, 1] to a letter: near 0 is 'e', near 1 is 'z'.
#[inline]
pub fn letter_for_sample(value: f64) -> char {
    let last = ENGLISH_BY_FREQUENCY.len() - 1;
    let idx = (value.clamp(0.0, 1.0) * ENGLISH_BY_FREQUENCY.len() as f64) as usize;
    ENGLISH_BY_FREQUENCY[idx.min(last)]
}

/// Produces random candidate keys biased toward plausible assignments.
pub struct KeyGenerator {
    /// Unknown symbols, most frequent in the ciphertext first.
    ranked_symbols: Vec<Symbol>,
    max_attempts: usize,
    pub rng: Rng,
}

impl KeyGenerator {
    pub fn new(ranked_symbols: &[Symbol]) -> Self {
        Self::from_rng(ranked_symbols, Rng::new())
    }

    pub fn with_seed(ranked_symbols: &[Symbol], seed: u64) -> Self {
        Self::from_rng(ranked_symbols, Rng::with_seed(seed))
    }

    pub fn from_rng(ranked_symbols: &[Symbol], rng: Rng) -> Self {
        Self {
            ranked_symbols: ranked_symbols.to_vec(),
            max_attempts: DEFAULT_MAX_GENERATE_ATTEMPTS,
            rng,
        }
    }

    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// A fresh key of `min(length, symbol_count)` pairs, resampled while it is
    /// already in `cache`. Once the attempts run out the last candidate is
    /// returned even if it is a repeat.
    pub fn generate<S>(&mut self, sampler: &mut S, cache: &KeyCache, length: usize) -> Key
    where
        S: Iterator<Item = f64>,
    {
        self.generate_avoiding(sampler, |canonical| cache.contains_canonical(canonical), length)
            .0
    }

    /// Like [`KeyGenerator::generate`] with a caller-supplied notion of
    /// "already known". The flag is false when every attempt was a repeat.
    pub fn generate_avoiding<S, F>(&mut self, sampler: &mut S, is_known: F, length: usize) -> (Key, bool)
    where
        S: Iterator<Item = f64>,
        F: Fn(&str) -> bool,
    {
        let mut key = self.candidate(sampler, length);
        for attempt in 1..self.max_attempts {
            if !is_known(&key.canonical()) {
                return (key, true);
            }
            debug!("Key already checked, resampling (attempt {})", attempt);
            key = self.candidate(sampler, length);
        }
        let fresh = !is_known(&key.canonical());
        (key, fresh)
    }

    /// One unfiltered draw.
    ///
    /// Picks a random subset of symbols, draws one letter per symbol, then
    /// hands the most common letters drawn to the most frequent symbols. Pairs
    /// are ordered by symbol frequency so equal mappings render identically.
    fn candidate<S>(&mut self, sampler: &mut S, length: usize) -> Key
    where
        S: Iterator<Item = f64>,
    {
        let length = length.min(self.ranked_symbols.len());

        let mut ranks: Vec<usize> = (0..self.ranked_symbols.len()).collect();
        self.rng.shuffle(&mut ranks);
        ranks.truncate(length);
        ranks.sort_unstable();

        let mut draws: Vec<f64> = (0..length)
            .map(|_| sampler.next().unwrap_or(0.0))
            .collect();
        draws.sort_by(f64::total_cmp);

        let pairs = ranks
            .into_iter()
            .zip(draws)
            .map(|(rank, value)| (self.ranked_symbols[rank], letter_for_sample(value)))
            .collect();

        Key::from_distinct(pairs)
    }
}
