mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::Args;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("splits=warn,splits_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(game) = args.game.as_deref() else {
        commands::usage::run();
        std::process::exit(1);
    };

    commands::score::run(game, args.lenient, args.breakdown, args.format)
}
