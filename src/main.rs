//! Strictly Minimax - unified CLI.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use std::path::Path;
use strictly_minimax::{FirstPlayer, GameConfig, analyze, console, tui};
use tracing::{Subscriber, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let Cli {
        config: config_path,
        engine_first,
        command,
    } = Cli::parse();

    match command.unwrap_or(Command::Play) {
        Command::Play => {
            stderr_subscriber().init();
            let config = load_config(&config_path, engine_first)?;
            let outcome = console::run_console(
                &config,
                io::BufReader::new(io::stdin()),
                io::stdout(),
                io::stdout(),
            )?;
            info!(%outcome, "Console game finished");
            Ok(())
        }
        Command::Tui => {
            // The log file comes from the config, so load it while logging
            // still goes to stderr.
            let config = tracing::subscriber::with_default(stderr_subscriber(), || {
                load_config(&config_path, engine_first)
            })?;
            initialize_file_tracing(config.log_file())?;
            tui::run_tui(&config)
        }
        Command::Analyze {
            board,
            to_move,
            format,
        } => {
            stderr_subscriber().init();
            let analysis = analyze::analyze(&board, to_move)?;
            print!("{}", analyze::render(&analysis, format)?);
            Ok(())
        }
    }
}

/// Loads the config file and applies command-line overrides.
fn load_config(path: &Path, engine_first: bool) -> Result<GameConfig> {
    let mut config = GameConfig::load(path)?;
    if engine_first {
        config = config.with_first_player(FirstPlayer::Engine);
    }
    Ok(config)
}

/// Logs to stderr; quiet unless RUST_LOG says otherwise.
fn stderr_subscriber() -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .finish()
}

/// Logs to a file so output does not interfere with the TUI.
fn initialize_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,strictly_minimax=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}
