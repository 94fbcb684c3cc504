use crate::corpus::CorpusMode;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct SearchParams {
    /// Number of keys to generate and score
    #[arg(long, default_value_t = 10_000)]
    pub iterations: usize,
    /// Number of cipher symbols each generated key assigns
    #[arg(long, default_value_t = 26)]
    pub key_length: usize,
    /// Keys generated before each parallel scoring pass
    #[arg(long, default_value_t = 256)]
    pub batch_size: usize,
    /// Resamples allowed before accepting an already-cached key
    #[arg(long, default_value_t = 100)]
    pub max_generate_attempts: usize,
    /// Which view of the ciphertext words keys are scored against
    #[arg(long, default_value_t = CorpusMode::Dedup)]
    pub corpus: CorpusMode,
    #[arg(long, default_value_t = 1_000)]
    pub polish_rounds: usize,
    #[arg(long, default_value_t = 1_000)]
    pub report_interval: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            key_length: 26,
            batch_size: 256,
            max_generate_attempts: 100,
            corpus: CorpusMode::Dedup,
            polish_rounds: 1_000,
            report_interval: 1_000,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct DataPaths {
    #[arg(global = true, long, default_value = "data/puzzle.json")]
    pub puzzle: PathBuf,
    #[arg(global = true, long, default_value = "data/words.txt")]
    pub dictionary: PathBuf,
    #[arg(global = true, long)]
    pub blacklist: Option<PathBuf>,
    #[arg(global = true, long, default_value = "checked_keys_dictionary.json")]
    pub cache: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            puzzle: PathBuf::from("data/puzzle.json"),
            dictionary: PathBuf::from("data/words.txt"),
            blacklist: None,
            cache: PathBuf::from("checked_keys_dictionary.json"),
        }
    }
}

impl SearchParams {
    /// Rejects parameter combinations the search loop cannot make progress with.
    pub fn validate(&self) -> crate::error::CfResult<()> {
        if self.batch_size == 0 {
            return Err(crate::error::CipherError::Config(
                "--batch-size must be at least 1".to_string(),
            ));
        }
        if self.max_generate_attempts == 0 {
            return Err(crate::error::CipherError::Config(
                "--max-generate-attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
