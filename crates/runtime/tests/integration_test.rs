use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::broadcast;

use runtime::{
    Event, FileMatchRepository, InMemoryMatchRepository, MatchEvent, MatchRepository, MatchSync,
    RepositoryError, Runtime, RuntimeError, SyncEvent, Topic,
};
use scoring_core::{
    BowlerChangeAction, DeliveryAction, ExecuteError, LineupAction, Match, MatchOutcome,
    MatchSetup, MatchStatus, Margin, Signals, TeamId, TeamSheet, Timestamp, TossDecision,
};

fn setup(overs: u32) -> MatchSetup {
    MatchSetup {
        id: "final".into(),
        team_a: TeamSheet::new("a", "Alpha").with_players((1..=11).map(|n| format!("a{n}"))),
        team_b: TeamSheet::new("b", "Bravo").with_players((1..=11).map(|n| format!("b{n}"))),
        overs,
        toss_winner_id: TeamId::from("a"),
        decision: TossDecision::Bat,
    }
}

async fn next_match_event(rx: &mut broadcast::Receiver<Event>) -> MatchEvent {
    let event = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for match event")
        .expect("event channel closed");
    match event {
        Event::Match(event) => event,
        other => panic!("unexpected event on match topic: {other:?}"),
    }
}

async fn next_sync_event(rx: &mut broadcast::Receiver<Event>) -> SyncEvent {
    let event = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for sync event")
        .expect("event channel closed");
    match event {
        Event::Sync(event) => event,
        other => panic!("unexpected event on sync topic: {other:?}"),
    }
}

/// Ball-by-ball scoring through the runtime, from lineup to result.
#[tokio::test]
async fn scores_a_one_over_match_to_a_result() {
    let runtime = Runtime::builder()
        .new_match(setup(1))
        .build()
        .await
        .expect("runtime should build");
    let handle = runtime.handle();
    let mut events = handle.subscribe(Topic::Match);

    handle
        .submit(LineupAction::new("a1", "a2", "b1"))
        .await
        .expect("lineup should be accepted");
    assert!(matches!(
        next_match_event(&mut events).await,
        MatchEvent::ActionApplied { .. }
    ));

    // Six singles: the over and the innings end together.
    let mut last = None;
    for _ in 0..6 {
        last = Some(handle.submit(DeliveryAction::runs(1)).await.unwrap());
        assert!(matches!(
            next_match_event(&mut events).await,
            MatchEvent::ActionApplied { .. }
        ));
    }
    let last = last.unwrap();
    assert!(last.signals.contains(Signals::OVER_COMPLETE | Signals::INNINGS_COMPLETE));
    assert_eq!(last.snapshot.target, Some(7));

    match next_match_event(&mut events).await {
        MatchEvent::OverComplete {
            over_number,
            bowler_id,
            summary,
            ..
        } => {
            assert_eq!(over_number, 0);
            assert_eq!(bowler_id.as_str(), "b1");
            assert_eq!(summary, "1 1 1 1 1 1");
        }
        other => panic!("expected over complete, got {other:?}"),
    }
    assert!(matches!(
        next_match_event(&mut events).await,
        MatchEvent::InningsComplete { target: Some(7) }
    ));

    handle
        .submit(LineupAction::new("b1", "b2", "a1"))
        .await
        .unwrap();
    handle.submit(DeliveryAction::runs(4)).await.unwrap();
    let winning = handle.submit(DeliveryAction::runs(4)).await.unwrap();

    assert!(winning.signals.contains(Signals::MATCH_COMPLETE));
    assert_eq!(winning.snapshot.status, MatchStatus::Completed);
    assert_eq!(
        winning.snapshot.outcome,
        Some(MatchOutcome::Won {
            winner: TeamId::from("b"),
            margin: Margin::Wickets(10),
        })
    );
    assert_eq!(winning.snapshot.result.as_deref(), Some("Bravo won by 10 wickets"));

    // Completed matches accept nothing further.
    let err = handle.submit(DeliveryAction::runs(1)).await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Rejected(ExecuteError::MatchCompleted)
    ));

    drop(handle);
    runtime.shutdown().await.expect("shutdown should succeed");
}

#[tokio::test]
async fn rejected_action_leaves_snapshot_and_publishes_reason() {
    let runtime = Runtime::builder().new_match(setup(20)).build().await.unwrap();
    let handle = runtime.handle();
    let mut events = handle.subscribe(Topic::Match);
    let before = handle.snapshot().await.unwrap();

    // No lineup yet, so the match is not live.
    let err = handle.submit(DeliveryAction::runs(4)).await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Rejected(ExecuteError::NotLive {
            status: MatchStatus::Upcoming,
            ..
        })
    ));

    match next_match_event(&mut events).await {
        MatchEvent::ActionRejected { code, phase, .. } => {
            assert_eq!(code, "MATCH_NOT_LIVE");
            assert_eq!(phase, None);
        }
        other => panic!("expected rejection, got {other:?}"),
    }

    let after = handle.snapshot().await.unwrap();
    assert_eq!(*after, *before);
    assert_eq!(handle.history_depth().await.unwrap(), 0);

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn undo_restores_previous_snapshots_in_order() {
    let runtime = Runtime::builder().new_match(setup(20)).build().await.unwrap();
    let handle = runtime.handle();

    handle
        .submit(LineupAction::new("a1", "a2", "b1"))
        .await
        .unwrap();
    handle.submit(DeliveryAction::runs(4)).await.unwrap();
    handle.submit(DeliveryAction::runs(1)).await.unwrap();
    assert_eq!(handle.history_depth().await.unwrap(), 3);

    let restored = handle.undo().await.unwrap().expect("undo available");
    assert_eq!(restored.current_innings().score, 4);
    assert_eq!(restored.striker_id.as_ref().map(|p| p.as_str()), Some("a1"));

    let restored = handle.undo().await.unwrap().expect("undo available");
    assert_eq!(restored.current_innings().score, 0);
    assert_eq!(restored.status, MatchStatus::Live);

    let restored = handle.undo().await.unwrap().expect("undo available");
    assert_eq!(restored.status, MatchStatus::Upcoming);

    // Nothing left: a no-op.
    assert!(handle.undo().await.unwrap().is_none());
    assert_eq!(handle.snapshot().await.unwrap().status, MatchStatus::Upcoming);

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn deliveries_are_stamped_when_no_timestamp_is_given() {
    let runtime = Runtime::builder().new_match(setup(20)).build().await.unwrap();
    let handle = runtime.handle();

    handle
        .submit(LineupAction::new("a1", "a2", "b1"))
        .await
        .unwrap();
    let stamped = handle.submit(DeliveryAction::runs(0)).await.unwrap();
    let explicit = handle
        .submit(DeliveryAction::runs(0).at(Timestamp::from_millis(1_700_000_000_000)))
        .await
        .unwrap();

    let balls = &stamped.snapshot.current_innings().overs_history[0].balls;
    assert!(balls[0].timestamp > Timestamp::ZERO);

    let balls = &explicit.snapshot.current_innings().overs_history[0].balls;
    assert_eq!(balls[1].timestamp, Timestamp::from_millis(1_700_000_000_000));

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn committed_snapshots_sync_to_repository() {
    let repo = Arc::new(InMemoryMatchRepository::new());
    let runtime = Runtime::builder()
        .new_match(setup(20))
        .repository(repo.clone())
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let mut sync_events = handle.subscribe(Topic::Sync);

    handle
        .submit(LineupAction::new("a1", "a2", "b1"))
        .await
        .unwrap();
    let last = handle.submit(DeliveryAction::runs(6)).await.unwrap();

    for _ in 0..2 {
        assert!(matches!(
            next_sync_event(&mut sync_events).await,
            SyncEvent::Saved { ref match_id } if match_id == "final"
        ));
    }

    drop(handle);
    runtime.shutdown().await.unwrap();

    let stored = repo.load("final").unwrap().expect("snapshot stored");
    assert_eq!(stored, *last.snapshot);
    assert_eq!(stored.current_innings().score, 6);
}

struct OfflineSync;

#[async_trait]
impl MatchSync for OfflineSync {
    async fn push(&self, _snapshot: Arc<Match>) -> runtime::repository::Result<()> {
        Err(RepositoryError::Task("remote store unreachable".into()))
    }
}

#[tokio::test]
async fn sync_failure_does_not_affect_scoring() {
    let runtime = Runtime::builder()
        .new_match(setup(20))
        .sync(Arc::new(OfflineSync))
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let mut sync_events = handle.subscribe(Topic::Sync);

    handle
        .submit(LineupAction::new("a1", "a2", "b1"))
        .await
        .unwrap();

    match next_sync_event(&mut sync_events).await {
        SyncEvent::Failed { match_id, error } => {
            assert_eq!(match_id, "final");
            assert!(error.contains("remote store unreachable"));
        }
        other => panic!("expected sync failure, got {other:?}"),
    }

    handle.submit(DeliveryAction::runs(2)).await.unwrap();
    assert_eq!(handle.snapshot().await.unwrap().current_innings().score, 2);

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn resumes_a_match_from_file_repository() {
    let dir = tempfile::tempdir().unwrap();
    let repo = Arc::new(FileMatchRepository::new(dir.path()).unwrap());

    let runtime = Runtime::builder()
        .new_match(setup(20))
        .repository(repo.clone())
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    handle
        .submit(LineupAction::new("a1", "a2", "b1"))
        .await
        .unwrap();
    for _ in 0..6 {
        handle.submit(DeliveryAction::runs(0)).await.unwrap();
    }
    drop(handle);
    runtime.shutdown().await.unwrap();

    assert_eq!(repo.list_ids().unwrap(), vec!["final".to_string()]);

    let runtime = Runtime::builder()
        .resume(repo.as_ref(), "final")
        .unwrap()
        .repository(repo.clone())
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();

    let resumed = handle.snapshot().await.unwrap();
    assert_eq!(resumed.current_innings().overs.completed, 1);
    assert_eq!(resumed.current_innings().bowler(&"b1".into()).map(|b| b.maidens), Some(1));
    assert!(resumed.current_bowler_id.is_none());

    // Resumed runtimes start with an empty undo history.
    assert_eq!(handle.history_depth().await.unwrap(), 0);

    handle.submit(BowlerChangeAction::new("b2")).await.unwrap();
    let next = handle.submit(DeliveryAction::runs(4)).await.unwrap();
    assert_eq!(next.snapshot.current_innings().score, 4);

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn resuming_unknown_match_fails() {
    let repo = InMemoryMatchRepository::new();
    let result = Runtime::builder().resume(&repo, "missing");
    assert!(matches!(result, Err(RuntimeError::MatchNotFound(id)) if id == "missing"));
}

#[tokio::test]
async fn build_requires_a_match() {
    let result = Runtime::builder().build().await;
    assert!(matches!(result, Err(RuntimeError::MissingInitialState)));
}
