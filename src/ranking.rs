use crate::cache::KeyCache;
use crate::error::{CfResult, CipherError};
use serde::Serialize;

/// One slot of a ranking query. `key` is `None` for padding slots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedKey {
    pub key: Option<String>,
    pub score: f64,
}

impl RankedKey {
    fn placeholder() -> Self {
        Self {
            key: None,
            score: 0.0,
        }
    }
}

/// The `n` best cached keys, best first, padded to exactly `n` slots.
///
/// An entry only displaces the weakest slot when it scores strictly higher,
/// so among equal scores the entry visited first wins. The cache is visited
/// in canonical-string order, which makes ties resolve to the
/// lexicographically smallest key. Zero-score entries never displace padding.
pub fn ranked(cache: &KeyCache, n: usize) -> CfResult<Vec<RankedKey>> {
    if n == 0 {
        return Err(CipherError::Validation(
            "Ranking requires at least one slot".to_string(),
        ));
    }

    let mut slots = vec![RankedKey::placeholder(); n];
    for (key, score) in cache.iter() {
        if score > slots[n - 1].score {
            slots[n - 1] = RankedKey {
                key: Some(key.to_string()),
                score,
            };
            slots.sort_by(|a, b| b.score.total_cmp(&a.score));
        }
    }
    Ok(slots)
}

/// Parallel (keys, scores) view of [`ranked`].
pub fn top_n(cache: &KeyCache, n: usize) -> CfResult<(Vec<Option<String>>, Vec<f64>)> {
    Ok(ranked(cache, n)?
        .into_iter()
        .map(|r| (r.key, r.score))
        .unzip())
}
