use cipherforge::api::SolverSession;
use cipherforge::config::DataPaths;
use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    paths: DataPaths,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate and score new keys, or polish a known one
    Search(cmd::search::SearchArgs),
    /// Show the best keys found so far
    Rank(cmd::rank::RankArgs),
    /// Print the ciphertext translated by a key
    Render(cmd::render::RenderArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    // stdout carries reports and --json output only
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("🚀 Initializing CipherForge...");

    let mut session = SolverSession::load(&cli.paths).unwrap_or_else(|e| {
        error!("❌ FATAL ERROR LOADING SESSION:");
        error!("   {}", e);
        process::exit(1);
    });

    let outcome = match cli.command {
        Commands::Search(args) => cmd::search::run(args, &mut session),
        Commands::Rank(args) => cmd::rank::run(args, &session),
        Commands::Render(args) => cmd::render::run(args, &session),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
