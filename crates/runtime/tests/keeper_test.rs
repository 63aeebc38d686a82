use match_core::{MatchEvent, MatchId, TransitionError};
use match_runtime::{
    FileMatchRepository, InMemoryMatchRepository, MatchRepository, RuntimeError, ScoreKeeper,
};

async fn play<R: MatchRepository>(
    keeper: &ScoreKeeper<R>,
    id: MatchId,
    events: &[MatchEvent],
) -> String {
    let mut shown = String::new();
    for event in events {
        shown = keeper
            .apply_event(id, *event)
            .await
            .expect("event should apply");
    }
    shown
}

#[tokio::test]
async fn home_goal_on_first_half() {
    let keeper = ScoreKeeper::new(InMemoryMatchRepository::new());
    let id = MatchId(91);

    let shown = play(&keeper, id, &[MatchEvent::HomeGoal]).await;

    assert_eq!(shown, "1:0 (First Half)");
    assert_eq!(keeper.query_result(id).await.unwrap(), "H");
}

#[tokio::test]
async fn away_goal_on_second_half() {
    let keeper = ScoreKeeper::new(InMemoryMatchRepository::new());
    let id = MatchId(91);

    let shown = play(
        &keeper,
        id,
        &[
            MatchEvent::HomeGoal,
            MatchEvent::AwayGoal,
            MatchEvent::NextPeriod,
            MatchEvent::AwayGoal,
        ],
    )
    .await;

    assert_eq!(shown, "1:2 (Second Half)");
    assert_eq!(keeper.query_result(id).await.unwrap(), "HA;A");
}

#[tokio::test]
async fn home_cancel_drops_last_goal() {
    let keeper = ScoreKeeper::new(InMemoryMatchRepository::new());
    let id = MatchId(92);

    play(
        &keeper,
        id,
        &[MatchEvent::HomeGoal, MatchEvent::AwayGoal, MatchEvent::HomeGoal],
    )
    .await;
    let shown = keeper.apply_event(id, MatchEvent::HomeCancel).await.unwrap();

    assert_eq!(shown, "1:1 (First Half)");
    assert_eq!(keeper.query_result(id).await.unwrap(), "HA");
}

#[tokio::test]
async fn away_cancel_keeps_period_break() {
    let keeper = ScoreKeeper::new(InMemoryMatchRepository::new());
    let id = MatchId(93);

    play(
        &keeper,
        id,
        &[MatchEvent::HomeGoal, MatchEvent::AwayGoal, MatchEvent::NextPeriod],
    )
    .await;
    let shown = keeper.apply_event(id, MatchEvent::AwayCancel).await.unwrap();

    assert_eq!(shown, "1:0 (Second Half)");
    assert_eq!(keeper.query_result(id).await.unwrap(), "H;");
}

#[tokio::test]
async fn next_period_moves_to_second_half() {
    let keeper = ScoreKeeper::new(InMemoryMatchRepository::new());
    let id = MatchId(94);

    let shown = play(
        &keeper,
        id,
        &[
            MatchEvent::HomeGoal,
            MatchEvent::AwayGoal,
            MatchEvent::HomeGoal,
            MatchEvent::NextPeriod,
        ],
    )
    .await;

    assert_eq!(shown, "2:1 (Second Half)");
    assert_eq!(keeper.query_result(id).await.unwrap(), "HAH;");
}

#[tokio::test]
async fn cancel_of_other_side_fails_without_mutation() {
    let keeper = ScoreKeeper::new(InMemoryMatchRepository::new());
    let id = MatchId(91);

    play(&keeper, id, &[MatchEvent::HomeGoal, MatchEvent::AwayGoal]).await;
    let err = keeper
        .apply_event(id, MatchEvent::HomeCancel)
        .await
        .unwrap_err();

    match err {
        RuntimeError::Transition(TransitionError::IllegalCancel { event, sequence }) => {
            assert_eq!(event, MatchEvent::HomeCancel);
            assert_eq!(sequence.to_string(), "HA");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(keeper.query_result(id).await.unwrap(), "HA");
}

#[tokio::test]
async fn cancel_on_empty_match_fails() {
    let keeper = ScoreKeeper::new(InMemoryMatchRepository::new());

    for event in [MatchEvent::HomeCancel, MatchEvent::AwayCancel] {
        let err = keeper.apply_event(MatchId(91), event).await.unwrap_err();
        assert!(matches!(err, RuntimeError::Transition(_)));
    }
    assert_eq!(keeper.query_result(MatchId(91)).await.unwrap(), "");
}

#[tokio::test]
async fn matches_are_tracked_independently() {
    let keeper = ScoreKeeper::new(InMemoryMatchRepository::new());

    keeper.apply_event(MatchId(1), MatchEvent::HomeGoal).await.unwrap();
    keeper.apply_event(MatchId(2), MatchEvent::AwayGoal).await.unwrap();

    assert_eq!(keeper.query_result(MatchId(1)).await.unwrap(), "H");
    assert_eq!(keeper.query_result(MatchId(2)).await.unwrap(), "A");
}

#[tokio::test]
async fn file_store_survives_a_new_keeper() {
    let dir = tempfile::TempDir::new().unwrap();
    let id = MatchId(91);

    {
        let repo = FileMatchRepository::new(dir.path()).await.unwrap();
        let keeper = ScoreKeeper::new(repo);
        play(
            &keeper,
            id,
            &[MatchEvent::HomeGoal, MatchEvent::AwayGoal, MatchEvent::NextPeriod],
        )
        .await;
    }

    let repo = FileMatchRepository::new(dir.path()).await.unwrap();
    let keeper = ScoreKeeper::new(repo);

    let shown = keeper.apply_event(id, MatchEvent::AwayCancel).await.unwrap();

    assert_eq!(shown, "1:0 (Second Half)");
    assert_eq!(keeper.query_result(id).await.unwrap(), "H;");
    assert_eq!(keeper.repository().list_ids().await.unwrap(), vec![id]);
}
