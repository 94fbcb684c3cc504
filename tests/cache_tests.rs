mod common;

use cipherforge::cache::KeyCache;
use cipherforge::error::CipherError;
use common::{cache_of, key};
use std::fs;

#[test]
fn test_save_then_load_restores_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checked.json");

    let mut cache = KeyCache::new();
    cache.put(&key(&[(33, 't'), (21, 'h')]), 0.75);
    cache.put(&key(&[(7, 'e')]), 0.0);
    cache.put(&key(&[(1, '\'')]), 0.125);
    cache.save(&path).unwrap();

    let loaded = KeyCache::load(&path).unwrap();
    assert_eq!(loaded, cache);
    assert_eq!(loaded.get_canonical("((33, 't'), (21, 'h'))"), Some(0.75));
    assert_eq!(loaded.get_canonical("((7, 'e'),)"), Some(0.0));
}

#[test]
fn test_save_rewrites_whole_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checked.json");

    cache_of(&[("a", 0.1), ("b", 0.2)]).save(&path).unwrap();
    cache_of(&[("c", 0.3)]).save(&path).unwrap();

    let loaded = KeyCache::load(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert!(loaded.contains_canonical("c"));
    assert!(!loaded.contains_canonical("a"));
}

#[test]
fn test_saved_file_is_a_flat_json_object() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checked.json");
    cache_of(&[("((1, 'a'),)", 0.5)]).save(&path).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["((1, 'a'),)"], serde_json::json!(0.5));
}

#[test]
fn test_save_creates_missing_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/deeper/checked.json");

    cache_of(&[("x", 0.9)]).save(&path).unwrap();
    assert_eq!(KeyCache::load(&path).unwrap().get_canonical("x"), Some(0.9));
}

#[test]
fn test_missing_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never_written.json");

    assert!(matches!(KeyCache::load(&path), Err(CipherError::Io(_))));
    let cache = KeyCache::load_or_empty(&path).unwrap();
    assert!(cache.is_empty());
}

#[test]
fn test_corrupt_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checked.json");
    fs::write(&path, "{\"((1, 'a'),)\": 0.5,").unwrap();

    let err = KeyCache::load_or_empty(&path).unwrap_err();
    assert!(matches!(err, CipherError::CacheCorrupt { .. }), "got {err:?}");
    // The damaged file is left alone
    assert_eq!(fs::read_to_string(&path).unwrap(), "{\"((1, 'a'),)\": 0.5,");
}

#[test]
fn test_wrong_shape_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checked.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    assert!(matches!(
        KeyCache::load(&path),
        Err(CipherError::CacheCorrupt { .. })
    ));
}

#[test]
fn test_out_of_range_score_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checked.json");
    fs::write(&path, r#"{"((1, 'a'),)": 1.5}"#).unwrap();

    assert!(matches!(
        KeyCache::load(&path),
        Err(CipherError::Validation(_))
    ));
}

#[test]
fn test_reordered_keys_are_distinct_entries() {
    let mut cache = KeyCache::new();
    cache.put(&key(&[(1, 'a'), (2, 'b')]), 0.5);
    cache.put(&key(&[(2, 'b'), (1, 'a')]), 0.25);

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get(&key(&[(1, 'a'), (2, 'b')])), Some(0.5));
}
