use crate::cache::KeyCache;
use crate::config::SearchParams;
use crate::corpus::{CorpusMode, FrequencyModel};
use crate::key::Key;
use crate::optimizer::{FrequencySampler, KeyGenerator};
use crate::scorer::{EnglishOracle, Scorer};
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

pub struct SearchOptions {
    pub iterations: usize,
    pub key_length: usize,
    pub batch_size: usize,
    pub max_generate_attempts: usize,
    pub corpus: CorpusMode,
    pub report_interval: usize,
    pub seed: Option<u64>,
}

impl From<&SearchParams> for SearchOptions {
    fn from(params: &SearchParams) -> Self {
        Self {
            iterations: params.iterations,
            key_length: params.key_length,
            batch_size: params.batch_size.max(1),
            max_generate_attempts: params.max_generate_attempts,
            corpus: params.corpus,
            report_interval: params.report_interval,
            seed: None, // Set manually if needed
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Keys scored and written to the cache this run.
    pub scored: usize,
    /// Keys that had not been seen before.
    pub fresh: usize,
    /// Best key produced by this run, not necessarily the best in the cache.
    pub best: Option<(Key, f64)>,
    pub elapsed: Duration,
}

/// Receives updates during a search.
/// Returning false stops the search after the current batch.
pub trait ProgressCallback {
    fn on_progress(&self, done: usize, best_score: f64, keys_per_sec: f64) -> bool;
}

/// Drives the generate → score → record loop over one corpus view.
pub struct Searcher<'a, O> {
    scorer: &'a Scorer<O>,
    model: &'a FrequencyModel,
    options: SearchOptions,
}

impl<'a, O: EnglishOracle> Searcher<'a, O> {
    pub fn new(scorer: &'a Scorer<O>, model: &'a FrequencyModel, options: SearchOptions) -> Self {
        Self {
            scorer,
            model,
            options,
        }
    }

    pub fn run<CB: ProgressCallback>(&self, cache: &mut KeyCache, callback: CB) -> SearchResult {
        let opts = &self.options;
        let words = self.model.words(opts.corpus);
        let ranked = self.model.table(opts.corpus).ranked();

        let (mut generator, mut sampler) = match opts.seed {
            Some(s) => (
                KeyGenerator::with_seed(ranked, s),
                FrequencySampler::with_seed(s.wrapping_add(9999)),
            ),
            None => (KeyGenerator::new(ranked), FrequencySampler::new()),
        };
        generator = generator.with_max_attempts(opts.max_generate_attempts);

        let start_time = Instant::now();
        let mut result = SearchResult {
            scored: 0,
            fresh: 0,
            best: None,
            elapsed: Duration::ZERO,
        };
        let mut saturated = 0;
        let mut next_report = opts.report_interval;

        while result.scored < opts.iterations {
            let batch_len = opts.batch_size.min(opts.iterations - result.scored);

            // 1. Generate sequentially so dedup sees the cache and this batch
            let mut in_flight: HashSet<String> = HashSet::with_capacity(batch_len);
            let mut batch = Vec::with_capacity(batch_len);
            for _ in 0..batch_len {
                let (key, fresh) = generator.generate_avoiding(
                    &mut sampler,
                    |c| cache.contains_canonical(c) || in_flight.contains(c),
                    opts.key_length,
                );
                if fresh {
                    result.fresh += 1;
                } else {
                    saturated += 1;
                }
                in_flight.insert(key.canonical());
                batch.push(key);
            }

            // 2. Score in parallel
            let scores = self.scorer.score_batch(words, &batch);

            // 3. Merge on this thread
            for (key, score) in batch.into_iter().zip(scores) {
                cache.put(&key, score);
                let improved = result.best.as_ref().map_or(true, |(_, best)| score > *best);
                if improved {
                    debug!("New best {:.4}: {}", score, key);
                    result.best = Some((key, score));
                }
            }
            result.scored += batch_len;

            // 4. Report
            if opts.report_interval > 0 && result.scored >= next_report {
                next_report = result.scored + opts.report_interval;
                let elapsed = start_time.elapsed().as_secs_f64();
                let kps = if elapsed > 0.0 {
                    result.scored as f64 / elapsed
                } else {
                    0.0
                };
                let best_score = result.best.as_ref().map_or(0.0, |(_, s)| *s);
                if !callback.on_progress(result.scored, best_score, kps) {
                    break;
                }
            }
        }

        if saturated > 0 {
            warn!(
                "{} generated keys were repeats after {} attempts each; the explored space may be saturated",
                saturated, opts.max_generate_attempts
            );
        }

        result.elapsed = start_time.elapsed();
        result
    }
}
