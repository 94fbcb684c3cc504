#![allow(dead_code)] // Not every test binary uses every helper

use cipherforge::cache::KeyCache;
use cipherforge::corpus::Word;
use cipherforge::key::Key;
use cipherforge::puzzle::{AssumedMap, Puzzle, Symbol};
use cipherforge::scorer::Dictionary;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SPACE: Symbol = 40;
pub const NEWLINE: Symbol = 43;
pub const PERIOD: Symbol = 44;

pub fn dictionary(words: &[&str]) -> Dictionary {
    Dictionary::new(words.iter().copied())
}

pub fn key(pairs: &[(Symbol, char)]) -> Key {
    Key::new(pairs.to_vec()).expect("test key has duplicate symbols")
}

/// The single word "thud" and the key that solves it.
pub fn thud() -> (Vec<Word>, Key) {
    (
        vec![vec![33, 21, 4, 8]],
        key(&[(33, 't'), (21, 'h'), (4, 'u'), (8, 'd')]),
    )
}

pub fn cache_of(entries: &[(&str, f64)]) -> KeyCache {
    let mut cache = KeyCache::new();
    for (canonical, score) in entries {
        cache.put_canonical(canonical.to_string(), *score);
    }
    cache
}

/// The bundled ciphertext.
pub fn sample_puzzle() -> Puzzle {
    Puzzle::load_from_file(Path::new(env!("CARGO_MANIFEST_DIR")).join("data/puzzle.json"))
        .expect("bundled puzzle should load")
}

/// Builds small ciphertexts word by word, separated by a space symbol.
pub struct PuzzleBuilder {
    characters: Vec<Symbol>,
    assumed: AssumedMap,
}

impl PuzzleBuilder {
    pub fn new() -> Self {
        let mut assumed = AssumedMap::new();
        assumed.insert(SPACE, ' ');
        assumed.insert(NEWLINE, '\n');
        assumed.insert(PERIOD, '.');
        Self {
            characters: Vec::new(),
            assumed,
        }
    }

    pub fn word(mut self, symbols: &[Symbol]) -> Self {
        if !self.characters.is_empty() {
            self.characters.push(SPACE);
        }
        self.characters.extend_from_slice(symbols);
        self
    }

    pub fn raw(mut self, symbol: Symbol) -> Self {
        self.characters.push(symbol);
        self
    }

    pub fn assume(mut self, symbol: Symbol, plain: char) -> Self {
        self.assumed.insert(symbol, plain);
        self
    }

    pub fn build(self) -> Puzzle {
        Puzzle::new(self.characters, self.assumed).expect("test puzzle should validate")
    }
}

/// Writes a puzzle, dictionary and (optional) blacklist into a scratch
/// directory. The cache path points into the same directory but is not
/// created.
pub struct TestFiles {
    _dir: TempDir,
    pub root: PathBuf,
    pub puzzle: PathBuf,
    pub dictionary: PathBuf,
    pub blacklist: PathBuf,
    pub cache: PathBuf,
}

impl TestFiles {
    pub fn new(puzzle: &Puzzle, words: &[&str], blacklist: &[&str]) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = dir.path().to_path_buf();

        let puzzle_path = root.join("puzzle.json");
        fs::write(&puzzle_path, serde_json::to_string(puzzle).unwrap()).unwrap();

        let dictionary = root.join("words.txt");
        fs::write(&dictionary, words.join("\n")).unwrap();

        let blacklist_path = root.join("blacklist.txt");
        fs::write(&blacklist_path, blacklist.join("\n")).unwrap();

        Self {
            _dir: dir,
            cache: root.join("checked_keys.json"),
            root,
            puzzle: puzzle_path,
            dictionary,
            blacklist: blacklist_path,
        }
    }

    pub fn write_cache(&self, content: &str) {
        fs::write(&self.cache, content).unwrap();
    }
}
