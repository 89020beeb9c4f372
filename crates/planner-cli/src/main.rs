mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use planner_config::Config;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let (config, config_path) = match cli.config {
        Some(path) => (Config::load_from(&path)?, path),
        None => (Config::load()?, Config::config_path()),
    };

    match cli.command {
        cli::Commands::Catalog { catalog, json } => commands::catalog::handle(catalog, json, &config),
        cli::Commands::Schedule(args) => commands::schedule::handle(args, &config),
        cli::Commands::Config { path } => commands::config::handle(&config, &config_path, path),
        cli::Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
