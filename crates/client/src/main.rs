//! Scoreboard client binary.
//!
//! # Examples
//!
//! ```bash
//! # Walk through the five fixed scenarios
//! cargo run -p scoreboard-client -- demo
//!
//! # Record events for match 7 in the file store (the default)
//! cargo run -p scoreboard-client -- apply 7 home_goal next_period
//! cargo run -p scoreboard-client -- show 7
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use match_runtime::{FileMatchRepository, InMemoryMatchRepository, ScoreKeeper};
use scoreboard_client::commands::{self, MatchCommand};
use scoreboard_client::{ClientConfig, StoreKind, logging, scenarios};

/// Track the score and period of a match from discrete events
#[derive(Parser)]
#[command(name = "scoreboard")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the five fixed demo scenarios (default)
    Demo,

    #[command(flatten)]
    Match(MatchCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;
    tracing::debug!("Config: store={}, data_dir={}", config.store, config.data_dir.display());

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => {
            let mut stdout = std::io::stdout().lock();
            scenarios::run_demo(&mut stdout).await
        }
        Command::Match(command) => {
            let mut stdout = std::io::stdout().lock();
            match config.store {
                StoreKind::Memory => {
                    tracing::warn!("Using in-memory store; results are dropped on exit");
                    let keeper = ScoreKeeper::new(InMemoryMatchRepository::new());
                    commands::run(&keeper, command, &mut stdout).await
                }
                StoreKind::File => {
                    tracing::debug!("Using file store at {}", config.data_dir.display());
                    let repo = FileMatchRepository::new(&config.data_dir)
                        .await
                        .with_context(|| {
                            format!("failed to open store at {}", config.data_dir.display())
                        })?;
                    commands::run(&ScoreKeeper::new(repo), command, &mut stdout).await
                }
            }
        }
    }
}
