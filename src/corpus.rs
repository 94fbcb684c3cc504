use crate::error::{CfResult, CipherError};
use crate::puzzle::{Puzzle, Symbol};
use std::collections::{HashMap, HashSet};
use strum_macros::{Display, EnumIter, EnumString};

/// A maximal run of unknown symbols in the ciphertext.
pub type Word = Vec<Symbol>;

/// Which view of the word list keys are scored against.
///
/// `Full` keeps multiplicity, so frequent words weigh more; `Dedup` counts
/// each distinct word once.
#[derive(Debug, Clone, Copy, Default, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum CorpusMode {
    Full,
    #[default]
    Dedup,
}

/// The ciphertext split into words, in two views over the same list.
#[derive(Debug, Clone)]
pub struct WordCorpus {
    full: Vec<Word>,
    unique: Vec<Word>,
}

impl WordCorpus {
    /// Splits a symbol stream on assumed symbols. Empty runs are dropped.
    pub fn from_puzzle(puzzle: &Puzzle) -> CfResult<Self> {
        let mut full = Vec::new();
        let mut current = Word::new();

        for &symbol in &puzzle.characters {
            if puzzle.is_assumed(symbol) {
                if !current.is_empty() {
                    full.push(std::mem::take(&mut current));
                }
            } else {
                current.push(symbol);
            }
        }
        if !current.is_empty() {
            full.push(current);
        }

        Self::from_words(full)
    }

    pub fn from_words(full: Vec<Word>) -> CfResult<Self> {
        if full.is_empty() {
            return Err(CipherError::Validation(
                "Ciphertext contains no words".to_string(),
            ));
        }
        if full.iter().any(|w| w.is_empty()) {
            return Err(CipherError::Validation(
                "Word corpus contains an empty word".to_string(),
            ));
        }

        let unique = {
            let mut seen = HashSet::new();
            full.iter()
                .filter(|w| seen.insert(w.as_slice()))
                .cloned()
                .collect()
        };

        Ok(Self { full, unique })
    }

    /// All words in ciphertext order, repeats included.
    pub fn full(&self) -> &[Word] {
        &self.full
    }

    /// Distinct words, in order of first appearance.
    pub fn unique(&self) -> &[Word] {
        &self.unique
    }

    pub fn words(&self, mode: CorpusMode) -> &[Word] {
        match mode {
            CorpusMode::Full => self.full(),
            CorpusMode::Dedup => self.unique(),
        }
    }
}

/// Symbol counts over a word list, ranked most frequent first.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    counts: HashMap<Symbol, usize>,
    ranked: Vec<Symbol>,
}

impl FrequencyTable {
    pub fn from_words(words: &[Word]) -> Self {
        let mut counts: HashMap<Symbol, usize> = HashMap::new();
        let mut first_seen = Vec::new();

        for &symbol in words.iter().flatten() {
            let count = counts.entry(symbol).or_insert_with(|| {
                first_seen.push(symbol);
                0
            });
            *count += 1;
        }

        // Stable sort: ties keep first-encountered order
        let mut ranked = first_seen;
        ranked.sort_by(|a, b| counts[b].cmp(&counts[a]));

        Self { counts, ranked }
    }

    pub fn count(&self, symbol: Symbol) -> usize {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Symbols sorted by descending count.
    pub fn ranked(&self) -> &[Symbol] {
        &self.ranked
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

/// Static frequency facts about one puzzle instance.
#[derive(Debug, Clone)]
pub struct FrequencyModel {
    pub corpus: WordCorpus,
    pub full_freq: FrequencyTable,
    pub dedup_freq: FrequencyTable,
}

impl FrequencyModel {
    pub fn from_puzzle(puzzle: &Puzzle) -> CfResult<Self> {
        let corpus = WordCorpus::from_puzzle(puzzle)?;
        Ok(Self::from_corpus(corpus))
    }

    pub fn from_corpus(corpus: WordCorpus) -> Self {
        let full_freq = FrequencyTable::from_words(corpus.full());
        let dedup_freq = FrequencyTable::from_words(corpus.unique());
        Self {
            corpus,
            full_freq,
            dedup_freq,
        }
    }

    pub fn table(&self, mode: CorpusMode) -> &FrequencyTable {
        match mode {
            CorpusMode::Full => &self.full_freq,
            CorpusMode::Dedup => &self.dedup_freq,
        }
    }

    pub fn words(&self, mode: CorpusMode) -> &[Word] {
        self.corpus.words(mode)
    }

    pub fn unknown_count(&self) -> usize {
        self.full_freq.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::AssumedMap;

    fn tiny_puzzle() -> Puzzle {
        let mut assumed = AssumedMap::new();
        assumed.insert(40, ' ');
        assumed.insert(43, '\n');
        // "ab ab\ncab"
        Puzzle::new(vec![1, 2, 40, 1, 2, 43, 3, 1, 2], assumed).unwrap()
    }

    #[test]
    fn test_words_split_on_assumed_symbols() {
        let corpus = WordCorpus::from_puzzle(&tiny_puzzle()).unwrap();
        assert_eq!(corpus.full(), &[vec![1, 2], vec![1, 2], vec![3, 1, 2]]);
        assert_eq!(corpus.unique(), &[vec![1, 2], vec![3, 1, 2]]);
    }

    #[test]
    fn test_ranked_ties_keep_first_seen_order() {
        let table = FrequencyTable::from_words(&[vec![5, 6], vec![7]]);
        assert_eq!(table.ranked(), &[5, 6, 7]);
    }
}
