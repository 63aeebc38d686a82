//! Fixed walkthrough of the scoreboard rules.
//!
//! Five scenarios, each printed as Given / When / Then. Scenarios 1 and 2 share
//! match 91; scenarios 3 to 5 each start from a fresh in-memory store.

use std::io::Write;

use anyhow::Result;
use match_core::{MatchEvent, MatchId};
use match_runtime::{InMemoryMatchRepository, ScoreKeeper};

type DemoKeeper = ScoreKeeper<InMemoryMatchRepository>;

/// Print all five scenarios to `out`.
pub async fn run_demo(out: &mut impl Write) -> Result<()> {
    writeln!(out, "=== Match Result Management System ===")?;
    writeln!(out)?;

    let keeper = ScoreKeeper::new(InMemoryMatchRepository::new());
    let id = MatchId(91);

    writeln!(out, "Scenario 1: Home Goal On the first half")?;
    given(out, &keeper, id).await?;
    writeln!(out, "When: match Event is {}", MatchEvent::HomeGoal)?;
    let shown = keeper.apply_event(id, MatchEvent::HomeGoal).await?;
    then(out, &keeper, id, &shown).await?;

    writeln!(out, "Scenario 2: Away Goal On the second half")?;
    keeper.apply_event(id, MatchEvent::AwayGoal).await?;
    keeper.apply_event(id, MatchEvent::NextPeriod).await?;
    given(out, &keeper, id).await?;
    writeln!(out, "When: match Event is {}", MatchEvent::AwayGoal)?;
    let shown = keeper.apply_event(id, MatchEvent::AwayGoal).await?;
    then(out, &keeper, id, &shown).await?;

    let home_away_home = [MatchEvent::HomeGoal, MatchEvent::AwayGoal, MatchEvent::HomeGoal];
    let second_half_draw = [MatchEvent::HomeGoal, MatchEvent::AwayGoal, MatchEvent::NextPeriod];

    scenario(
        out,
        "Scenario 3: Home Cancel",
        MatchId(92),
        &home_away_home,
        MatchEvent::HomeCancel,
    )
    .await?;
    scenario(
        out,
        "Scenario 4: Away Cancel",
        MatchId(93),
        &second_half_draw,
        MatchEvent::AwayCancel,
    )
    .await?;
    scenario(
        out,
        "Scenario 5: Change to next period",
        MatchId(94),
        &home_away_home,
        MatchEvent::NextPeriod,
    )
    .await?;

    Ok(())
}

async fn scenario(
    out: &mut impl Write,
    title: &str,
    id: MatchId,
    setup: &[MatchEvent],
    event: MatchEvent,
) -> Result<()> {
    let keeper = ScoreKeeper::new(InMemoryMatchRepository::new());
    for step in setup {
        keeper.apply_event(id, *step).await?;
    }

    writeln!(out, "{title}")?;
    given(out, &keeper, id).await?;
    writeln!(out, "When: match Event is {event}")?;
    let shown = keeper.apply_event(id, event).await?;
    then(out, &keeper, id, &shown).await
}

async fn given(out: &mut impl Write, keeper: &DemoKeeper, id: MatchId) -> Result<()> {
    let display = keeper.query_display(id).await?;
    let result = keeper.query_result(id).await?;
    writeln!(
        out,
        "Given: current display result \"{display}\" (match result \"{result}\")"
    )?;
    Ok(())
}

async fn then(out: &mut impl Write, keeper: &DemoKeeper, id: MatchId, shown: &str) -> Result<()> {
    let result = keeper.query_result(id).await?;
    writeln!(
        out,
        "Then: display result is \"{shown}\" (match result \"{result}\")"
    )?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn demo_prints_expected_outcomes() {
        let mut out = Vec::new();
        run_demo(&mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        for expected in [
            "Then: display result is \"1:0 (First Half)\" (match result \"H\")",
            "Given: current display result \"1:1 (Second Half)\" (match result \"HA;\")",
            "Then: display result is \"1:2 (Second Half)\" (match result \"HA;A\")",
            "Then: display result is \"1:1 (First Half)\" (match result \"HA\")",
            "Then: display result is \"1:0 (Second Half)\" (match result \"H;\")",
            "Then: display result is \"2:1 (Second Half)\" (match result \"HAH;\")",
        ] {
            assert!(text.contains(expected), "missing {expected:?} in:\n{text}");
        }
        assert_eq!(text.matches("Scenario ").count(), 5);
    }
}
