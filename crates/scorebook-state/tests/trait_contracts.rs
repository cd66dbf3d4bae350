//! Trait contract tests for GameStore.
//!
//! Every contract runs against the in-memory fake and the JSON file backend.
//! Any conforming implementation must pass these.

use chrono::Utc;
use scorebook_state::fakes::MemoryGameStore;
use scorebook_state::storage_traits::*;
use scorebook_state::{JsonFileStore, StorageError};

fn sample_at_bat(game: &GameRecord, sequence: u32) -> AtBatRecord {
    AtBatRecord {
        id: AtBatId::new(),
        game_id: game.id,
        player_id: PlayerId::new(),
        inning: game.current_inning,
        is_top: game.is_top_of_inning,
        sequence,
        outcome: "ground_out".to_string(),
        rbi: 0,
        runner_scored: false,
        outs_recorded: 1,
        pitch_count: Some(4),
        stolen_bases: 0,
        caught_stealing: 0,
        notes: None,
        created_at: Utc::now(),
    }
}

fn with_outs(game: &GameRecord, outs: u8) -> GameRecord {
    let mut next = game.clone();
    next.outs_in_current_inning = outs;
    next
}

async fn create_then_get_round_trip(store: &dyn GameStore) {
    let game = GameRecord::new("Rivals", true, 9);
    store.create_game(&game).await.unwrap();
    assert_eq!(store.get_game(&game.id).await.unwrap(), game);
}

async fn get_missing_game_is_not_found(store: &dyn GameStore) {
    let err = store.get_game(&GameId::new()).await.unwrap_err();
    assert!(matches!(err, StorageError::GameNotFound { .. }));
    assert!(err.is_not_found());
}

async fn duplicate_game_rejected(store: &dyn GameStore) {
    let game = GameRecord::new("Rivals", true, 9);
    store.create_game(&game).await.unwrap();
    let err = store.create_game(&game).await.unwrap_err();
    assert!(matches!(err, StorageError::DuplicateGame { .. }));
}

async fn save_missing_game_is_not_found(store: &dyn GameStore) {
    let game = GameRecord::new("Ghosts", false, 7);
    let err = store.save_game(&game).await.unwrap_err();
    assert!(matches!(err, StorageError::GameNotFound { .. }));
}

async fn append_writes_event_and_game_together(store: &dyn GameStore) {
    let game = GameRecord::new("Rivals", true, 9);
    store.create_game(&game).await.unwrap();

    let ab = sample_at_bat(&game, 1);
    let updated = with_outs(&game, 1);
    store.append_at_bat(&ab, &updated).await.unwrap();

    assert_eq!(store.get_game(&game.id).await.unwrap().outs_in_current_inning, 1);
    assert_eq!(store.last_at_bat(&game.id).await.unwrap(), Some(ab.clone()));
    assert_eq!(store.get_at_bat(&game.id, &ab.id).await.unwrap(), ab);
}

async fn append_out_of_sequence_changes_nothing(store: &dyn GameStore) {
    let game = GameRecord::new("Rivals", true, 9);
    store.create_game(&game).await.unwrap();

    let ab = sample_at_bat(&game, 2);
    let err = store
        .append_at_bat(&ab, &with_outs(&game, 1))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StorageError::SequenceConflict {
            expected: 1,
            actual: 2,
            ..
        }
    ));

    assert_eq!(store.get_game(&game.id).await.unwrap(), game);
    assert!(store.list_at_bats(&game.id).await.unwrap().is_empty());
}

async fn list_at_bats_ordered_by_sequence(store: &dyn GameStore) {
    let game = GameRecord::new("Rivals", true, 9);
    store.create_game(&game).await.unwrap();

    for seq in 1..=3 {
        let ab = sample_at_bat(&game, seq);
        store.append_at_bat(&ab, &game).await.unwrap();
    }
    let seqs: Vec<u32> = store
        .list_at_bats(&game.id)
        .await
        .unwrap()
        .iter()
        .map(|ab| ab.sequence)
        .collect();
    assert_eq!(seqs, vec![1, 2, 3]);
}

async fn remove_last_only(store: &dyn GameStore) {
    let game = GameRecord::new("Rivals", true, 9);
    store.create_game(&game).await.unwrap();

    let first = sample_at_bat(&game, 1);
    let second = sample_at_bat(&game, 2);
    store.append_at_bat(&first, &with_outs(&game, 1)).await.unwrap();
    store.append_at_bat(&second, &with_outs(&game, 2)).await.unwrap();

    let err = store
        .remove_last_at_bat(&first.id, &with_outs(&game, 0))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::NotLastAtBat { .. }));
    assert_eq!(store.get_game(&game.id).await.unwrap().outs_in_current_inning, 2);

    store
        .remove_last_at_bat(&second.id, &with_outs(&game, 1))
        .await
        .unwrap();
    assert_eq!(store.get_game(&game.id).await.unwrap().outs_in_current_inning, 1);
    assert_eq!(store.last_at_bat(&game.id).await.unwrap(), Some(first));
}

async fn remove_unknown_at_bat_is_not_found(store: &dyn GameStore) {
    let game = GameRecord::new("Rivals", true, 9);
    store.create_game(&game).await.unwrap();
    let err = store
        .remove_last_at_bat(&AtBatId::new(), &game)
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::AtBatNotFound { .. }));
}

async fn appearances_upsert_and_order(store: &dyn GameStore) {
    let game = GameRecord::new("Rivals", true, 9);
    store.create_game(&game).await.unwrap();

    let reliever = PitchingAppearanceRecord::new(game.id, PlayerId::new(), 2);
    let mut starter = PitchingAppearanceRecord::new(game.id, PlayerId::new(), 1);
    store.put_appearance(&reliever).await.unwrap();
    store.put_appearance(&starter).await.unwrap();

    starter.outs_recorded = 18;
    store.put_appearance(&starter).await.unwrap();

    let listed = store.list_appearances(&game.id).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, starter.id);
    assert_eq!(listed[0].outs_recorded, 18);
    assert_eq!(listed[1].id, reliever.id);

    let err = store
        .get_appearance(&game.id, &AppearanceId::new())
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::AppearanceNotFound { .. }));
}

async fn run_all(store: &dyn GameStore) {
    create_then_get_round_trip(store).await;
    get_missing_game_is_not_found(store).await;
    duplicate_game_rejected(store).await;
    save_missing_game_is_not_found(store).await;
    append_writes_event_and_game_together(store).await;
    append_out_of_sequence_changes_nothing(store).await;
    list_at_bats_ordered_by_sequence(store).await;
    remove_last_only(store).await;
    remove_unknown_at_bat_is_not_found(store).await;
    appearances_upsert_and_order(store).await;
}

#[tokio::test]
async fn memory_store_satisfies_contract() {
    let store = MemoryGameStore::new();
    run_all(&store).await;
}

#[tokio::test]
async fn json_store_satisfies_contract() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("scorebook.json")).unwrap();
    run_all(&store).await;
}

#[tokio::test]
async fn list_games_contains_every_created_game() {
    let store = MemoryGameStore::new();
    let a = GameRecord::new("A", true, 9);
    let b = GameRecord::new("B", false, 7);
    store.create_game(&a).await.unwrap();
    store.create_game(&b).await.unwrap();

    let ids: Vec<GameId> = store.list_games().await.unwrap().iter().map(|g| g.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&a.id));
    assert!(ids.contains(&b.id));
}
