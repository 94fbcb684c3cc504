use crate::reports;
use cipherforge::api::SolverSession;
use cipherforge::config::SearchParams;
use cipherforge::error::CfResult;
use cipherforge::key::Key;
use cipherforge::optimizer::{ProgressCallback, SearchOptions};
use clap::Args;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub search: SearchParams,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Improve this key instead of generating new ones, e.g. "((33, 't'), (21, 'h'))"
    #[arg(short = 'p', long)]
    pub polish: Option<String>,
}

struct CliLogger;
impl ProgressCallback for CliLogger {
    fn on_progress(&self, done: usize, best_score: f64, keys_per_sec: f64) -> bool {
        info!(
            "Keys {:7} | Run Best: {:.4} | {:.0} keys/s",
            done, best_score, keys_per_sec
        );
        true
    }
}

pub fn run(args: SearchArgs, session: &mut SolverSession) -> CfResult<()> {
    args.search.validate()?;

    if let Some(text) = &args.polish {
        let start: Key = text.parse()?;
        info!("✨ Polishing key for {} rounds", args.search.polish_rounds);
        let (best, score) = session.polish(
            &start,
            args.search.polish_rounds,
            args.search.corpus,
            args.seed,
        );
        info!("Polished score: {:.4}", score);
        println!("{}", session.render(&best, false));
    } else {
        let mut options = SearchOptions::from(&args.search);
        options.seed = args.seed;

        info!(
            "🔎 Scoring {} keys of length {} against the {} corpus",
            options.iterations, options.key_length, options.corpus
        );
        let result = session.search(options, CliLogger);
        reports::print_search_summary(&result);
    }

    // Always end by writing the updated cache
    session.save()
}
