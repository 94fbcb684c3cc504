use crate::error::CfResult;
use crate::scorer::loader::load_word_list;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Boolean judge of whether a resolved string is an English word.
pub trait EnglishOracle: Send + Sync {
    fn is_english(&self, word: &str) -> bool;
}

impl<F> EnglishOracle for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_english(&self, word: &str) -> bool {
        self(word)
    }
}

/// Word-list oracle with a blacklist of known-bad matches.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
    blacklist: HashSet<String>,
}

impl Dictionary {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: normalize(words),
            blacklist: HashSet::new(),
        }
    }

    pub fn with_blacklist<I, S>(mut self, blacklist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.blacklist = normalize(blacklist);
        self
    }

    pub fn load_from_files<P: AsRef<Path>, B: AsRef<Path>>(
        dictionary: P,
        blacklist: Option<B>,
    ) -> CfResult<Self> {
        let mut dict = Self::new(load_word_list(dictionary.as_ref())?);
        if let Some(path) = blacklist {
            dict = dict.with_blacklist(load_word_list(path.as_ref())?);
        }
        info!(
            "Dictionary ready: {} words, {} blacklisted",
            dict.words.len(),
            dict.blacklist.len()
        );
        Ok(dict)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize<I, S>(words: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

impl EnglishOracle for Dictionary {
    fn is_english(&self, word: &str) -> bool {
        if word.is_empty() || !word.chars().all(char::is_alphabetic) {
            return false;
        }
        let lower = word.to_lowercase();
        !self.blacklist.contains(&lower) && self.words.contains(&lower)
    }
}
