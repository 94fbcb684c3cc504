use crate::cache::KeyCache;
use crate::corpus::Word;
use crate::key::Key;
use crate::optimizer::letter_for_sample;
use crate::scorer::{EnglishOracle, Scorer};
use fastrand::Rng;
use tracing::info;

/// Reassigns the letter of one randomly chosen pair.
pub fn mutate_letter<S>(rng: &mut Rng, sampler: &mut S, key: &Key) -> Key
where
    S: Iterator<Item = f64>,
{
    if key.is_empty() {
        return key.clone();
    }
    let idx = rng.usize(0..key.len());
    let letter = letter_for_sample(sampler.next().unwrap_or(0.0));
    key.with_letter(idx, letter)
}

/// Hill-climbs from a known key, one letter change per round.
///
/// Every candidate goes through the cache: known keys reuse their stored
/// score, new ones are scored and recorded. A candidate replaces the current
/// key when it scores at least as well, so plateaus are walked.
pub fn polish_key<O, S>(
    scorer: &Scorer<O>,
    cache: &mut KeyCache,
    words: &[Word],
    rng: &mut Rng,
    sampler: &mut S,
    start: &Key,
    rounds: usize,
) -> (Key, f64)
where
    O: EnglishOracle,
    S: Iterator<Item = f64>,
{
    let (_, start_score) = scorer.check_key(cache, words, start);
    let mut current = start.clone();
    let mut current_score = start_score;

    for round in 0..rounds {
        let candidate = mutate_letter(rng, sampler, &current);
        if candidate == current {
            continue;
        }

        let score = match cache.get(&candidate) {
            Some(known) => known,
            None => scorer.check_key(cache, words, &candidate).1,
        };

        if score >= current_score {
            if score > current_score {
                info!("Round {}: {:.4} -> {:.4}", round, current_score, score);
            }
            current = candidate;
            current_score = score;
        }
    }

    (current, current_score)
}
