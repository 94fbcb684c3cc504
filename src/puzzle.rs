use crate::error::{CfResult, CipherError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Integer code of one ciphertext glyph.
pub type Symbol = u16;

/// Symbols whose plaintext is already known (digits, punctuation, the
/// newline marker, letters solved with certainty).
pub type AssumedMap = BTreeMap<Symbol, char>;

/// One letter of English per unknown symbol at most.
pub const MAX_UNKNOWN_SYMBOLS: usize = 26;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Puzzle {
    pub assumed: AssumedMap,
    pub characters: Vec<Symbol>,

    /// Optional declared unknown set, cross-checked against the derived one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unknown: Option<BTreeSet<Symbol>>,
}

impl Puzzle {
    pub fn new(characters: Vec<Symbol>, assumed: AssumedMap) -> CfResult<Self> {
        let puzzle = Self {
            assumed,
            characters,
            unknown: None,
        };
        puzzle.validate()?;
        Ok(puzzle)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let path = path.as_ref();
        debug!("Loading puzzle from {:?}", path);
        let content = fs::read_to_string(path)?;
        let puzzle: Puzzle = serde_json::from_str(&content)?;
        puzzle.validate()?;
        Ok(puzzle)
    }

    /// Every symbol in the ciphertext that has no assumed plaintext.
    pub fn unknown_symbols(&self) -> BTreeSet<Symbol> {
        self.characters
            .iter()
            .copied()
            .filter(|s| !self.assumed.contains_key(s))
            .collect()
    }

    pub fn is_assumed(&self, symbol: Symbol) -> bool {
        self.assumed.contains_key(&symbol)
    }

    /// Static checks on the ciphertext. Violations are fatal at load time.
    pub fn validate(&self) -> CfResult<()> {
        let unknown = self.unknown_symbols();
        if unknown.len() > MAX_UNKNOWN_SYMBOLS {
            return Err(CipherError::Validation(format!(
                "{} unknown symbols cannot be explained by a {}-letter alphabet",
                unknown.len(),
                MAX_UNKNOWN_SYMBOLS
            )));
        }

        if let Some(declared) = &self.unknown {
            if *declared != unknown {
                let missing: Vec<_> = unknown.difference(declared).collect();
                let extra: Vec<_> = declared.difference(&unknown).collect();
                return Err(CipherError::Validation(format!(
                    "Declared unknown symbols disagree with ciphertext (undeclared: {:?}, absent: {:?})",
                    missing, extra
                )));
            }
        }

        if unknown.is_empty() {
            return Err(CipherError::Validation(
                "Ciphertext contains no unknown symbols".to_string(),
            ));
        }

        Ok(())
    }
}
