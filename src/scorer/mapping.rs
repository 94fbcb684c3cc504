use crate::corpus::Word;
use crate::key::Key;
use crate::puzzle::{AssumedMap, Symbol};
use std::collections::HashMap;

/// One position after substitution: either resolved text or the raw symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Plain(char),
    Cipher(Symbol),
}

pub type MappedWord = Vec<Glyph>;

#[inline]
fn substitute(symbol: Symbol, mapping: &HashMap<Symbol, char>) -> Glyph {
    match mapping.get(&symbol) {
        Some(&letter) => Glyph::Plain(letter),
        None => Glyph::Cipher(symbol),
    }
}

/// Applies `key` to every word, preserving word boundaries. Symbols the key
/// does not cover stay raw.
pub fn map_words(words: &[Word], key: &Key) -> Vec<MappedWord> {
    let mapping = key.mapping();
    words
        .iter()
        .map(|word| word.iter().map(|&s| substitute(s, &mapping)).collect())
        .collect()
}

/// Applies the assumed map and then `key` to the full ciphertext stream.
/// Assumed symbols take precedence over the key.
pub fn map_characters(characters: &[Symbol], assumed: &AssumedMap, key: &Key) -> Vec<Glyph> {
    let mapping = key.mapping();
    characters
        .iter()
        .map(|s| match assumed.get(s) {
            Some(&text) => Glyph::Plain(text),
            None => substitute(*s, &mapping),
        })
        .collect()
}

/// Joins a fully resolved word. `None` if any symbol is still raw.
pub fn as_text(word: &[Glyph]) -> Option<String> {
    word.iter()
        .map(|g| match g {
            Glyph::Plain(c) => Some(*c),
            Glyph::Cipher(_) => None,
        })
        .collect()
}
