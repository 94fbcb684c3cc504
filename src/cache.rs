use crate::error::{CfResult, CipherError};
use crate::key::Key;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Every key scored so far, by canonical string.
///
/// Owned by the caller and passed explicitly. Not safe for several processes
/// sharing one file: the last `save` wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyCache {
    entries: BTreeMap<String, f64>,
}

impl KeyCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &Key) -> Option<f64> {
        self.get_canonical(&key.canonical())
    }

    pub fn get_canonical(&self, canonical: &str) -> Option<f64> {
        self.entries.get(canonical).copied()
    }

    pub fn contains(&self, key: &Key) -> bool {
        self.contains_canonical(&key.canonical())
    }

    pub fn contains_canonical(&self, canonical: &str) -> bool {
        self.entries.contains_key(canonical)
    }

    /// Records the latest score for `key`, replacing any earlier one.
    pub fn put(&mut self, key: &Key, score: f64) {
        self.put_canonical(key.canonical(), score);
    }

    pub fn put_canonical(&mut self, canonical: String, score: f64) {
        self.entries.insert(canonical, score);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in canonical-string order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Reads a persisted cache. A missing file is an error here; see
    /// [`KeyCache::load_or_empty`] for the lenient variant.
    pub fn load<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let entries: BTreeMap<String, f64> =
            serde_json::from_str(&content).map_err(|source| CipherError::CacheCorrupt {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some((key, score)) = entries.iter().find(|(_, s)| !(0.0..=1.0).contains(*s)) {
            return Err(CipherError::Validation(format!(
                "Cached score {} for {} is outside [0, 1]",
                score, key
            )));
        }

        info!("Loaded {} checked keys from {:?}", entries.len(), path);
        Ok(Self { entries })
    }

    /// Missing file starts an empty cache. A file that exists but cannot be
    /// parsed is still fatal, so a later `save` never clobbers it.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let path = path.as_ref();
        match Self::load(path) {
            Err(CipherError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                info!("No key cache at {:?}, starting empty", path);
                Ok(Self::new())
            }
            other => other,
        }
    }

    /// Rewrites the whole file atomically (temp file + rename).
    pub fn save<P: AsRef<Path>>(&self, path: P) -> CfResult<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let temp_file = NamedTempFile::new_in(parent)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            serde_json::to_writer(&mut writer, &self.entries)?;
            writer.flush()?;
        }
        temp_file.persist(path)?;

        debug!("Wrote {} checked keys to {:?}", self.entries.len(), path);
        Ok(())
    }
}

