//! Lifecycle events are emitted as structured tracing records.

use scorebook_core::{Outcome, PlayerId, RecordAtBat, ScoringEngine};
use scorebook_state::fakes::MemoryGameStore;
use tracing_test::traced_test;

#[tokio::test]
#[traced_test]
async fn engine_emits_lifecycle_events() {
    let engine = ScoringEngine::new(MemoryGameStore::new());
    let game = engine.schedule_game("Rivals", true, None).await.unwrap();
    engine.start_game(&game.id).await.unwrap();

    let recorded = engine
        .record_at_bat(RecordAtBat::new(game.id, PlayerId::new(), Outcome::Single))
        .await
        .unwrap();
    engine
        .undo_at_bat(&game.id, &recorded.at_bat.id)
        .await
        .unwrap();
    engine.end_game(&game.id).await.unwrap();

    assert!(logs_contain("game.scheduled"));
    assert!(logs_contain("game.started"));
    assert!(logs_contain("at_bat.recorded"));
    assert!(logs_contain("at_bat.undone"));
    assert!(logs_contain("game.ended"));
}

#[tokio::test]
#[traced_test]
async fn rejected_operations_warn() {
    let engine = ScoringEngine::new(MemoryGameStore::new());
    let game = engine.schedule_game("Rivals", true, None).await.unwrap();

    let err = engine
        .record_at_bat(RecordAtBat::new(game.id, PlayerId::new(), Outcome::Walk))
        .await
        .unwrap_err();
    assert!(err.is_conflict());
    assert!(logs_contain("game.rejected"));
    assert!(logs_contain("record_at_bat"));
}

#[traced_test]
#[test]
fn metrics_flush_logs_counters() {
    scorebook_core::metrics::METRICS.flush();
    assert!(logs_contain("at_bats_recorded"));
}
