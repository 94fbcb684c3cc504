use crate::reports;
use cipherforge::api::SolverSession;
use cipherforge::corpus::CorpusMode;
use cipherforge::error::CfResult;
use cipherforge::key::Key;
use clap::Args;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    /// Number of results to examine
    #[arg(short = 'n', long, default_value_t = 3)]
    pub number: usize,

    /// Show only the words that made up each score
    #[arg(short = 'w', long, default_value_t = false)]
    pub words_only: bool,

    #[arg(long, default_value_t = CorpusMode::Dedup)]
    pub corpus: CorpusMode,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: RankArgs, session: &SolverSession) -> CfResult<()> {
    info!(
        "📊 Ranking top {} of {} keys in {:?}",
        args.number,
        session.cache.len(),
        session.cache_path()
    );
    let ranked = session.top(args.number)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    reports::print_ranking(&ranked);

    for entry in &ranked {
        let Some(text) = &entry.key else { continue };
        let key: Key = text.parse()?;
        if args.words_only {
            println!("{:?}", session.recognized_words(&key, args.corpus));
        } else {
            println!("{}", session.render(&key, false));
        }
        println!();
    }
    Ok(())
}
