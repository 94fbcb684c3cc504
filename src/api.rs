use crate::cache::KeyCache;
use crate::config::DataPaths;
use crate::corpus::{CorpusMode, FrequencyModel};
use crate::error::CfResult;
use crate::key::Key;
use crate::optimizer::mutation::polish_key;
use crate::optimizer::{FrequencySampler, ProgressCallback, SearchOptions, SearchResult, Searcher};
use crate::puzzle::Puzzle;
use crate::ranking::{self, RankedKey};
use crate::render::render_text;
use crate::scorer::{Dictionary, EnglishOracle, MappedWord, Scorer};
use std::path::{Path, PathBuf};
use tracing::info;

/// Everything one solving run needs: static puzzle facts, the scorer and the
/// key cache with the path it is saved back to.
pub struct SolverSession<O = Dictionary> {
    pub puzzle: Puzzle,
    pub model: FrequencyModel,
    pub scorer: Scorer<O>,
    pub cache: KeyCache,
    cache_path: PathBuf,
}

impl SolverSession<Dictionary> {
    /// Loads puzzle, dictionary and cache from disk. A missing cache file
    /// starts empty; a corrupt one is an error.
    pub fn load(paths: &DataPaths) -> CfResult<Self> {
        info!("📂 Loading puzzle: {:?}", paths.puzzle);
        let puzzle = Puzzle::load_from_file(&paths.puzzle)?;

        info!("📖 Loading dictionary: {:?}", paths.dictionary);
        let dictionary = Dictionary::load_from_files(&paths.dictionary, paths.blacklist.as_ref())?;

        let cache = KeyCache::load_or_empty(&paths.cache)?;
        Self::new(puzzle, dictionary, cache, &paths.cache)
    }
}

impl<O: EnglishOracle> SolverSession<O> {
    pub fn new<P: AsRef<Path>>(
        puzzle: Puzzle,
        oracle: O,
        cache: KeyCache,
        cache_path: P,
    ) -> CfResult<Self> {
        let model = FrequencyModel::from_puzzle(&puzzle)?;
        info!(
            "Puzzle: {} symbols, {} unknown, {} words ({} distinct)",
            puzzle.characters.len(),
            model.unknown_count(),
            model.corpus.full().len(),
            model.corpus.unique().len()
        );

        Ok(Self {
            puzzle,
            model,
            scorer: Scorer::new(oracle),
            cache,
            cache_path: cache_path.as_ref().to_path_buf(),
        })
    }

    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    pub fn search<CB: ProgressCallback>(&mut self, options: SearchOptions, callback: CB) -> SearchResult {
        let searcher = Searcher::new(&self.scorer, &self.model, options);
        searcher.run(&mut self.cache, callback)
    }

    pub fn polish(
        &mut self,
        key: &Key,
        rounds: usize,
        corpus: CorpusMode,
        seed: Option<u64>,
    ) -> (Key, f64) {
        let (mut rng, mut sampler) = match seed {
            Some(s) => (fastrand::Rng::with_seed(s), FrequencySampler::with_seed(s.wrapping_add(9999))),
            None => (fastrand::Rng::new(), FrequencySampler::new()),
        };
        polish_key(
            &self.scorer,
            &mut self.cache,
            self.model.words(corpus),
            &mut rng,
            &mut sampler,
            key,
            rounds,
        )
    }

    pub fn check_key(&mut self, key: &Key, corpus: CorpusMode) -> (Vec<MappedWord>, f64) {
        self.scorer
            .check_key(&mut self.cache, self.model.words(corpus), key)
    }

    pub fn top(&self, n: usize) -> CfResult<Vec<RankedKey>> {
        ranking::ranked(&self.cache, n)
    }

    /// Highest-scoring cached key, if any scored above zero.
    pub fn best_key(&self) -> CfResult<Option<Key>> {
        match ranking::ranked(&self.cache, 1)?.into_iter().next() {
            Some(RankedKey { key: Some(k), .. }) => Ok(Some(k.parse()?)),
            _ => Ok(None),
        }
    }

    pub fn recognized_words(&self, key: &Key, corpus: CorpusMode) -> Vec<String> {
        self.scorer
            .recognized_words(self.model.words(corpus), key)
    }

    pub fn render(&self, key: &Key, show_symbols: bool) -> String {
        render_text(&self.puzzle, key, show_symbols)
    }

    pub fn save(&self) -> CfResult<()> {
        self.cache.save(&self.cache_path)?;
        info!("💾 Saved {} checked keys to {:?}", self.cache.len(), self.cache_path);
        Ok(())
    }
}
