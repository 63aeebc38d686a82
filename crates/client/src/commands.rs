//! Store-backed commands: `apply` and `show`.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Subcommand;
use match_core::MatchId;
use match_runtime::{MatchRepository, ScoreKeeper};

/// Commands that run against the configured store.
#[derive(Debug, Subcommand)]
pub enum MatchCommand {
    /// Apply events to a match in order, printing each display result
    Apply {
        match_id: u64,

        /// Event names: home_goal, away_goal, next_period, home_cancel, away_cancel
        #[arg(required = true)]
        events: Vec<String>,
    },

    /// Print the stored result sequence and display result of a match
    Show { match_id: u64 },
}

/// Run `command` against `keeper`, writing results to `out`.
///
/// `apply` stops at the first rejected event; events before it stay applied.
pub async fn run<R: MatchRepository>(
    keeper: &ScoreKeeper<R>,
    command: MatchCommand,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        MatchCommand::Apply { match_id, events } => {
            let id = MatchId(match_id);
            for name in &events {
                let shown = keeper
                    .apply_event_named(id, name)
                    .await
                    .with_context(|| format!("failed to apply {name} to match {id}"))?;
                writeln!(out, "{name}: {shown}")?;
            }
            writeln!(out, "match result: \"{}\"", keeper.query_result(id).await?)?;
        }
        MatchCommand::Show { match_id } => {
            let id = MatchId(match_id);
            writeln!(out, "match result: \"{}\"", keeper.query_result(id).await?)?;
            writeln!(out, "display result: {}", keeper.query_display(id).await?)?;
        }
    }
    Ok(())
}
