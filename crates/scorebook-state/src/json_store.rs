//! JSON document backend for `GameStore`.
//!
//! The whole book lives in one JSON file. Every mutation loads the document,
//! applies the change in memory and replaces the file through a temp file in
//! the same directory followed by a rename, so readers observe either the old
//! or the new document, never a half-written one.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use crate::book::GameBook;
use crate::error::StorageError;
use crate::storage_traits::*;

/// File-backed game store.
///
/// The internal mutex serialises access from one process; cross-process
/// writers must be serialised by the caller.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open (or lazily create) the store at `path`. Creates parent
    /// directories if needed.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StorageResult<GameBook> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(GameBook::default()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn store(&self, book: &GameBook) -> StorageResult<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let mut tmp = NamedTempFile::new_in(&dir)?;
        serde_json::to_writer_pretty(&mut tmp, book)?;
        tmp.write_all(b"\n")?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        debug!(path = %self.path.display(), "scorebook document written");
        Ok(())
    }

    async fn read<T>(&self, f: impl FnOnce(&GameBook) -> StorageResult<T>) -> StorageResult<T> {
        let _guard = self.lock.lock().await;
        let book = self.load()?;
        f(&book)
    }

    async fn mutate(&self, f: impl FnOnce(&mut GameBook) -> StorageResult<()>) -> StorageResult<()> {
        let _guard = self.lock.lock().await;
        let mut book = self.load()?;
        f(&mut book)?;
        self.store(&book)
    }
}

#[async_trait]
impl GameStore for JsonFileStore {
    #[instrument(skip_all, fields(game_id = %game.id))]
    async fn create_game(&self, game: &GameRecord) -> StorageResult<()> {
        self.mutate(|book| book.create_game(game)).await
    }

    async fn get_game(&self, game_id: &GameId) -> StorageResult<GameRecord> {
        self.read(|book| book.get_game(game_id)).await
    }

    async fn save_game(&self, game: &GameRecord) -> StorageResult<()> {
        self.mutate(|book| book.save_game(game)).await
    }

    async fn list_games(&self) -> StorageResult<Vec<GameRecord>> {
        self.read(|book| Ok(book.list_games())).await
    }

    async fn last_at_bat(&self, game_id: &GameId) -> StorageResult<Option<AtBatRecord>> {
        self.read(|book| book.last_at_bat(game_id)).await
    }

    async fn get_at_bat(
        &self,
        game_id: &GameId,
        at_bat_id: &AtBatId,
    ) -> StorageResult<AtBatRecord> {
        self.read(|book| book.get_at_bat(game_id, at_bat_id)).await
    }

    async fn list_at_bats(&self, game_id: &GameId) -> StorageResult<Vec<AtBatRecord>> {
        self.read(|book| book.list_at_bats(game_id)).await
    }

    #[instrument(skip_all, fields(game_id = %game.id, seq = at_bat.sequence))]
    async fn append_at_bat(&self, at_bat: &AtBatRecord, game: &GameRecord) -> StorageResult<()> {
        self.mutate(|book| book.append_at_bat(at_bat, game)).await
    }

    #[instrument(skip_all, fields(game_id = %game.id, at_bat_id = %at_bat_id))]
    async fn remove_last_at_bat(
        &self,
        at_bat_id: &AtBatId,
        game: &GameRecord,
    ) -> StorageResult<()> {
        self.mutate(|book| book.remove_last_at_bat(at_bat_id, game))
            .await
    }

    async fn put_appearance(&self, appearance: &PitchingAppearanceRecord) -> StorageResult<()> {
        self.mutate(|book| book.put_appearance(appearance)).await
    }

    async fn get_appearance(
        &self,
        game_id: &GameId,
        appearance_id: &AppearanceId,
    ) -> StorageResult<PitchingAppearanceRecord> {
        self.read(|book| book.get_appearance(game_id, appearance_id))
            .await
    }

    async fn list_appearances(
        &self,
        game_id: &GameId,
    ) -> StorageResult<Vec<PitchingAppearanceRecord>> {
        self.read(|book| book.list_appearances(game_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_store() -> (tempfile::TempDir, JsonFileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("book").join("scorebook.json")).unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty_book() {
        let (_dir, store) = make_store();
        assert!(store.list_games().await.unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn document_survives_reopen() {
        let (dir, store) = make_store();
        let game = GameRecord::new("Rivals", true, 9);
        store.create_game(&game).await.unwrap();

        let reopened = JsonFileStore::open(dir.path().join("book").join("scorebook.json")).unwrap();
        let loaded = reopened.get_game(&game.id).await.unwrap();
        assert_eq!(loaded, game);
    }

    #[tokio::test]
    async fn failed_mutation_leaves_document_untouched() {
        let (_dir, store) = make_store();
        let game = GameRecord::new("Rivals", false, 7);
        store.create_game(&game).await.unwrap();
        let before = std::fs::read(store.path()).unwrap();

        let err = store.create_game(&game).await.unwrap_err();
        assert!(matches!(err, StorageError::DuplicateGame { .. }));

        let after = std::fs::read(store.path()).unwrap();
        assert_eq!(before, after);
    }
}
