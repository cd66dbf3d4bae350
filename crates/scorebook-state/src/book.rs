//! In-memory game book shared by the memory and JSON backends.
//!
//! Each mutating method validates everything before touching state, so a
//! failed call leaves the book unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::storage_traits::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct GameEntry {
    pub game: GameRecord,
    /// Ordered by sequence
    pub at_bats: Vec<AtBatRecord>,
    pub appearances: Vec<PitchingAppearanceRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct GameBook {
    games: BTreeMap<GameId, GameEntry>,
}

impl GameBook {
    fn entry(&self, game_id: &GameId) -> StorageResult<&GameEntry> {
        self.games
            .get(game_id)
            .ok_or_else(|| StorageError::GameNotFound {
                game_id: game_id.to_string(),
            })
    }

    fn entry_mut(&mut self, game_id: &GameId) -> StorageResult<&mut GameEntry> {
        self.games
            .get_mut(game_id)
            .ok_or_else(|| StorageError::GameNotFound {
                game_id: game_id.to_string(),
            })
    }

    pub fn create_game(&mut self, game: &GameRecord) -> StorageResult<()> {
        if self.games.contains_key(&game.id) {
            return Err(StorageError::DuplicateGame {
                game_id: game.id.to_string(),
            });
        }
        self.games.insert(
            game.id,
            GameEntry {
                game: game.clone(),
                at_bats: Vec::new(),
                appearances: Vec::new(),
            },
        );
        Ok(())
    }

    pub fn get_game(&self, game_id: &GameId) -> StorageResult<GameRecord> {
        Ok(self.entry(game_id)?.game.clone())
    }

    pub fn save_game(&mut self, game: &GameRecord) -> StorageResult<()> {
        self.entry_mut(&game.id)?.game = game.clone();
        Ok(())
    }

    pub fn list_games(&self) -> Vec<GameRecord> {
        let mut games: Vec<GameRecord> = self.games.values().map(|e| e.game.clone()).collect();
        games.sort_by_key(|g| g.created_at);
        games
    }

    pub fn last_at_bat(&self, game_id: &GameId) -> StorageResult<Option<AtBatRecord>> {
        Ok(self.entry(game_id)?.at_bats.last().cloned())
    }

    pub fn get_at_bat(&self, game_id: &GameId, at_bat_id: &AtBatId) -> StorageResult<AtBatRecord> {
        self.entry(game_id)?
            .at_bats
            .iter()
            .find(|ab| ab.id == *at_bat_id)
            .cloned()
            .ok_or_else(|| StorageError::AtBatNotFound {
                game_id: game_id.to_string(),
                at_bat_id: at_bat_id.to_string(),
            })
    }

    pub fn list_at_bats(&self, game_id: &GameId) -> StorageResult<Vec<AtBatRecord>> {
        Ok(self.entry(game_id)?.at_bats.clone())
    }

    pub fn append_at_bat(&mut self, at_bat: &AtBatRecord, game: &GameRecord) -> StorageResult<()> {
        if at_bat.game_id != game.id {
            return Err(StorageError::GameNotFound {
                game_id: at_bat.game_id.to_string(),
            });
        }
        let entry = self.entry_mut(&game.id)?;
        let expected = entry.at_bats.last().map(|ab| ab.sequence).unwrap_or(0) + 1;
        if at_bat.sequence != expected {
            return Err(StorageError::SequenceConflict {
                game_id: game.id.to_string(),
                expected,
                actual: at_bat.sequence,
            });
        }
        entry.at_bats.push(at_bat.clone());
        entry.game = game.clone();
        Ok(())
    }

    pub fn remove_last_at_bat(
        &mut self,
        at_bat_id: &AtBatId,
        game: &GameRecord,
    ) -> StorageResult<()> {
        let entry = self.entry_mut(&game.id)?;
        if !entry.at_bats.iter().any(|ab| ab.id == *at_bat_id) {
            return Err(StorageError::AtBatNotFound {
                game_id: game.id.to_string(),
                at_bat_id: at_bat_id.to_string(),
            });
        }
        if entry.at_bats.last().map(|ab| ab.id) != Some(*at_bat_id) {
            return Err(StorageError::NotLastAtBat {
                game_id: game.id.to_string(),
                at_bat_id: at_bat_id.to_string(),
            });
        }
        entry.at_bats.pop();
        entry.game = game.clone();
        Ok(())
    }

    pub fn put_appearance(&mut self, appearance: &PitchingAppearanceRecord) -> StorageResult<()> {
        let entry = self.entry_mut(&appearance.game_id)?;
        match entry
            .appearances
            .iter_mut()
            .find(|a| a.id == appearance.id)
        {
            Some(existing) => *existing = appearance.clone(),
            None => entry.appearances.push(appearance.clone()),
        }
        entry.appearances.sort_by_key(|a| a.appearance_order);
        Ok(())
    }

    pub fn get_appearance(
        &self,
        game_id: &GameId,
        appearance_id: &AppearanceId,
    ) -> StorageResult<PitchingAppearanceRecord> {
        self.entry(game_id)?
            .appearances
            .iter()
            .find(|a| a.id == *appearance_id)
            .cloned()
            .ok_or_else(|| StorageError::AppearanceNotFound {
                game_id: game_id.to_string(),
                appearance_id: appearance_id.to_string(),
            })
    }

    pub fn list_appearances(
        &self,
        game_id: &GameId,
    ) -> StorageResult<Vec<PitchingAppearanceRecord>> {
        Ok(self.entry(game_id)?.appearances.clone())
    }
}
