use cipherforge::api::SolverSession;
use cipherforge::error::CfResult;
use cipherforge::key::Key;
use clap::Args;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Key to render; defaults to the best cached key
    #[arg(short, long)]
    pub key: Option<String>,

    /// Print unresolved symbols as .<n>. instead of ?
    #[arg(short = 's', long, default_value_t = false)]
    pub show_symbols: bool,
}

pub fn run(args: RenderArgs, session: &SolverSession) -> CfResult<()> {
    let key = match &args.key {
        Some(text) => text.parse()?,
        None => match session.best_key()? {
            Some(best) => {
                info!("Rendering best cached key");
                best
            }
            None => {
                warn!("⚠️  No scored keys in cache. Rendering with an empty key.");
                Key::empty()
            }
        },
    };

    println!("{}", session.render(&key, args.show_symbols));
    Ok(())
}
