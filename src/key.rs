use crate::error::{CfResult, CipherError};
use crate::puzzle::Symbol;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::iter::Peekable;
use std::str::{Chars, FromStr};

/// A partial substitution key: ordered (cipher symbol, plaintext letter) pairs.
///
/// Identity is the ordered pair sequence. Two keys with the same mapping in a
/// different order are different keys and render to different canonical
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Key {
    pairs: Vec<(Symbol, char)>,
}

impl Key {
    /// Builds a key, rejecting repeated symbols.
    pub fn new(pairs: Vec<(Symbol, char)>) -> CfResult<Self> {
        let mut seen = HashSet::with_capacity(pairs.len());
        for (symbol, _) in &pairs {
            if !seen.insert(*symbol) {
                return Err(CipherError::Validation(format!(
                    "Symbol {} appears more than once in key",
                    symbol
                )));
            }
        }
        Ok(Self { pairs })
    }

    /// For callers that already guarantee distinct symbols.
    pub(crate) fn from_distinct(pairs: Vec<(Symbol, char)>) -> Self {
        debug_assert!(Self::new(pairs.clone()).is_ok());
        Self { pairs }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn pairs(&self) -> &[(Symbol, char)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn mapping(&self) -> HashMap<Symbol, char> {
        self.pairs.iter().copied().collect()
    }

    /// Same key with the letter at `index` replaced. Pair order is kept.
    pub fn with_letter(&self, index: usize, letter: char) -> Self {
        let mut pairs = self.pairs.clone();
        if let Some(pair) = pairs.get_mut(index) {
            pair.1 = letter;
        }
        Self { pairs }
    }

    /// The cache identity of this key.
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

/// Renders the pair sequence as a tuple literal, e.g. `((33, 't'), (21, 'h'))`.
/// A one-pair key keeps the trailing comma: `((33, 't'),)`.
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, (symbol, letter)) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", symbol, quote_letter(*letter))?;
        }
        if self.pairs.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

fn quote_letter(letter: char) -> String {
    match letter {
        '\'' => "\"'\"".to_string(),
        '\\' => "'\\\\'".to_string(),
        '\n' => "'\\n'".to_string(),
        c => format!("'{}'", c),
    }
}

impl FromStr for Key {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = KeyParser {
            chars: s.trim().chars().peekable(),
        };
        let pairs = parser.parse_key()?;
        parser.skip_ws();
        if let Some(c) = parser.chars.next() {
            return Err(CipherError::KeyParse(format!(
                "Unexpected trailing character '{}'",
                c
            )));
        }
        Key::new(pairs)
    }
}

struct KeyParser<'a> {
    chars: Peekable<Chars<'a>>,
}

impl KeyParser<'_> {
    fn skip_ws(&mut self) {
        while self.chars.peek().is_some_and(|c| c.is_whitespace()) {
            self.chars.next();
        }
    }

    fn expect(&mut self, wanted: char) -> CfResult<()> {
        self.skip_ws();
        match self.chars.next() {
            Some(c) if c == wanted => Ok(()),
            Some(c) => Err(CipherError::KeyParse(format!(
                "Expected '{}', found '{}'",
                wanted, c
            ))),
            None => Err(CipherError::KeyParse(format!(
                "Expected '{}', found end of input",
                wanted
            ))),
        }
    }

    fn peek_is(&mut self, wanted: char) -> bool {
        self.skip_ws();
        self.chars.peek() == Some(&wanted)
    }

    fn parse_key(&mut self) -> CfResult<Vec<(Symbol, char)>> {
        self.expect('(')?;
        let mut pairs = Vec::new();

        while !self.peek_is(')') {
            pairs.push(self.parse_pair()?);
            if self.peek_is(',') {
                self.chars.next();
            } else if !self.peek_is(')') {
                return Err(CipherError::KeyParse(
                    "Expected ',' or ')' after pair".to_string(),
                ));
            }
        }
        self.expect(')')?;
        Ok(pairs)
    }

    fn parse_pair(&mut self) -> CfResult<(Symbol, char)> {
        self.expect('(')?;
        let symbol = self.parse_symbol()?;
        self.expect(',')?;
        let letter = self.parse_letter()?;
        self.expect(')')?;
        Ok((symbol, letter))
    }

    fn parse_symbol(&mut self) -> CfResult<Symbol> {
        self.skip_ws();
        let mut digits = String::new();
        while let Some(c) = self.chars.peek().copied().filter(|c| c.is_ascii_digit()) {
            digits.push(c);
            self.chars.next();
        }
        digits
            .parse()
            .map_err(|_| CipherError::KeyParse(format!("Invalid symbol '{}'", digits)))
    }

    fn parse_letter(&mut self) -> CfResult<char> {
        self.skip_ws();
        let quote = match self.chars.next() {
            Some(q @ ('\'' | '"')) => q,
            other => {
                return Err(CipherError::KeyParse(format!(
                    "Expected quoted letter, found {:?}",
                    other
                )))
            }
        };

        let letter = match self.chars.next() {
            Some('\\') => match self.chars.next() {
                Some('n') => '\n',
                Some(c) => c,
                None => return Err(CipherError::KeyParse("Unterminated escape".to_string())),
            },
            Some(c) if c != quote => c,
            _ => return Err(CipherError::KeyParse("Empty letter".to_string())),
        };

        match self.chars.next() {
            Some(c) if c == quote => Ok(letter),
            _ => Err(CipherError::KeyParse(
                "Letters must be a single quoted character".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_matches_tuple_literal() {
        let key = Key::new(vec![(33, 't'), (21, 'h'), (4, 'u'), (8, 'd')]).unwrap();
        assert_eq!(
            key.canonical(),
            "((33, 't'), (21, 'h'), (4, 'u'), (8, 'd'))"
        );
    }

    #[test]
    fn test_single_pair_keeps_trailing_comma() {
        let key = Key::new(vec![(7, 'e')]).unwrap();
        assert_eq!(key.canonical(), "((7, 'e'),)");
        assert_eq!(Key::empty().canonical(), "()");
    }

    #[test]
    fn test_parse_accepts_canonical_forms() {
        for text in ["()", "((7, 'e'),)", "((33, 't'), (21, \"h\"))", " ( (1,'a') , (2,'b') ) "] {
            let key: Key = text.parse().unwrap();
            assert_eq!(key, key.canonical().parse::<Key>().unwrap());
        }
    }

    #[test]
    fn test_parse_rejects_duplicates_and_garbage() {
        assert!("((1, 'a'), (1, 'b'))".parse::<Key>().is_err());
        assert!("((1, 'ab'),)".parse::<Key>().is_err());
        assert!("((x, 'a'),)".parse::<Key>().is_err());
        assert!("((1, 'a'),) extra".parse::<Key>().is_err());
    }

    #[test]
    fn test_order_is_part_of_identity() {
        let a = Key::new(vec![(1, 'a'), (2, 'b')]).unwrap();
        let b = Key::new(vec![(2, 'b'), (1, 'a')]).unwrap();
        assert_eq!(a.mapping(), b.mapping());
        assert_ne!(a.canonical(), b.canonical());
    }
}
