//! In-memory fakes for storage traits (testing only)
//!
//! Provides `MemoryGameStore`, which satisfies the `GameStore` contract
//! without touching the filesystem.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::book::GameBook;
use crate::storage_traits::*;

/// In-memory game store. A single mutex makes every dual write atomic.
#[derive(Debug, Default)]
pub struct MemoryGameStore {
    book: Mutex<GameBook>,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn book(&self) -> MutexGuard<'_, GameBook> {
        self.book.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl GameStore for MemoryGameStore {
    async fn create_game(&self, game: &GameRecord) -> StorageResult<()> {
        self.book().create_game(game)
    }

    async fn get_game(&self, game_id: &GameId) -> StorageResult<GameRecord> {
        self.book().get_game(game_id)
    }

    async fn save_game(&self, game: &GameRecord) -> StorageResult<()> {
        self.book().save_game(game)
    }

    async fn list_games(&self) -> StorageResult<Vec<GameRecord>> {
        Ok(self.book().list_games())
    }

    async fn last_at_bat(&self, game_id: &GameId) -> StorageResult<Option<AtBatRecord>> {
        self.book().last_at_bat(game_id)
    }

    async fn get_at_bat(
        &self,
        game_id: &GameId,
        at_bat_id: &AtBatId,
    ) -> StorageResult<AtBatRecord> {
        self.book().get_at_bat(game_id, at_bat_id)
    }

    async fn list_at_bats(&self, game_id: &GameId) -> StorageResult<Vec<AtBatRecord>> {
        self.book().list_at_bats(game_id)
    }

    async fn append_at_bat(&self, at_bat: &AtBatRecord, game: &GameRecord) -> StorageResult<()> {
        self.book().append_at_bat(at_bat, game)
    }

    async fn remove_last_at_bat(
        &self,
        at_bat_id: &AtBatId,
        game: &GameRecord,
    ) -> StorageResult<()> {
        self.book().remove_last_at_bat(at_bat_id, game)
    }

    async fn put_appearance(&self, appearance: &PitchingAppearanceRecord) -> StorageResult<()> {
        self.book().put_appearance(appearance)
    }

    async fn get_appearance(
        &self,
        game_id: &GameId,
        appearance_id: &AppearanceId,
    ) -> StorageResult<PitchingAppearanceRecord> {
        self.book().get_appearance(game_id, appearance_id)
    }

    async fn list_appearances(
        &self,
        game_id: &GameId,
    ) -> StorageResult<Vec<PitchingAppearanceRecord>> {
        self.book().list_appearances(game_id)
    }
}
