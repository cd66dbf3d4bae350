//! Storage trait definitions for Scorebook
//!
//! The persistence contract the scoring engine depends on:
//! - load a game by id
//! - append an at-bat together with the updated game situation (atomic)
//! - remove the most recent at-bat together with the updated situation (atomic)
//!
//! Pitching appearances and game listing ride along for the statistics
//! layer. In-memory fakes live in the `fakes` module; a JSON document
//! backend lives in `json_store`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StorageError;

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Generate a new random id
            pub fn new() -> Self {
                $name(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Uuid::parse_str(s).map($name)
            }
        }
    };
}

uuid_id!(
    /// Unique identifier for a game
    GameId
);
uuid_id!(
    /// Unique identifier for an at-bat event
    AtBatId
);
uuid_id!(
    /// Unique identifier for a player (batter or pitcher)
    PlayerId
);
uuid_id!(
    /// Unique identifier for a pitching appearance
    AppearanceId
);

// ---------------------------------------------------------------------------
// Games
// ---------------------------------------------------------------------------

/// Lifecycle status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Scheduled,
    InProgress,
    Final,
    Suspended,
    Cancelled,
}

impl GameStatus {
    /// Wire token for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Scheduled => "scheduled",
            GameStatus::InProgress => "in_progress",
            GameStatus::Final => "final",
            GameStatus::Suspended => "suspended",
            GameStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted game row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    pub opponent_name: String,
    /// Whether "our" team is the home team
    pub is_home: bool,
    /// Scheduled regulation innings
    pub innings_count: u32,
    pub status: GameStatus,
    pub our_score: u32,
    pub opponent_score: u32,
    pub current_inning: u32,
    pub is_top_of_inning: bool,
    pub outs_in_current_inning: u8,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GameRecord {
    /// A freshly scheduled game: 0-0, top of the 1st, no outs.
    pub fn new(opponent_name: impl Into<String>, is_home: bool, innings_count: u32) -> Self {
        let now = Utc::now();
        Self {
            id: GameId::new(),
            opponent_name: opponent_name.into(),
            is_home,
            innings_count,
            status: GameStatus::Scheduled,
            our_score: 0,
            opponent_score: 0,
            current_inning: 1,
            is_top_of_inning: true,
            outs_in_current_inning: 0,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }
}

// ---------------------------------------------------------------------------
// At-bats
// ---------------------------------------------------------------------------

/// Persisted at-bat event. Append/remove-last only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtBatRecord {
    pub id: AtBatId,
    pub game_id: GameId,
    pub player_id: PlayerId,
    /// Inning in which the at-bat happened
    pub inning: u32,
    /// Half in which the at-bat happened
    pub is_top: bool,
    /// Per-game sequence number, contiguous from 1
    pub sequence: u32,
    /// Outcome wire token (e.g. "home_run")
    pub outcome: String,
    pub rbi: u32,
    /// A run scored on the play without an RBI being credited
    pub runner_scored: bool,
    /// Outs this at-bat credited to its half-inning
    pub outs_recorded: u8,
    pub pitch_count: Option<u32>,
    pub stolen_bases: u32,
    pub caught_stealing: u32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Pitching appearances
// ---------------------------------------------------------------------------

/// Persisted pitching line for one pitcher in one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchingAppearanceRecord {
    pub id: AppearanceId,
    pub game_id: GameId,
    pub player_id: PlayerId,
    /// 1 for the starter, then in order of entry
    pub appearance_order: u32,
    pub outs_recorded: u32,
    pub hits_allowed: u32,
    pub runs_allowed: u32,
    pub earned_runs: u32,
    pub walks: u32,
    pub strikeouts: u32,
    pub home_runs_allowed: u32,
    pub hit_batters: u32,
    pub wild_pitches: u32,
    pub balks: u32,
    pub pitches_thrown: Option<u32>,
    pub strikes_thrown: Option<u32>,
    pub balls_thrown: Option<u32>,
    pub is_winner: Option<bool>,
    pub is_loser: Option<bool>,
    pub is_save: Option<bool>,
    pub is_hold: Option<bool>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PitchingAppearanceRecord {
    /// An empty line for a pitcher entering the game.
    pub fn new(game_id: GameId, player_id: PlayerId, appearance_order: u32) -> Self {
        Self {
            id: AppearanceId::new(),
            game_id,
            player_id,
            appearance_order,
            outs_recorded: 0,
            hits_allowed: 0,
            runs_allowed: 0,
            earned_runs: 0,
            walks: 0,
            strikeouts: 0,
            home_runs_allowed: 0,
            hit_batters: 0,
            wild_pitches: 0,
            balks: 0,
            pitches_thrown: None,
            strikes_thrown: None,
            balls_thrown: None,
            is_winner: None,
            is_loser: None,
            is_save: None,
            is_hold: None,
            notes: None,
            created_at: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// GameStore
// ---------------------------------------------------------------------------

/// Game and at-bat persistence.
///
/// Guarantees:
/// - `append_at_bat` and `remove_last_at_bat` write the at-bat change and the
///   game row together or not at all.
/// - At-bat sequence numbers per game are contiguous from 1.
/// - Only the most recent at-bat of a game can be removed.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Insert a new game. Fails with `DuplicateGame` if the id is taken.
    async fn create_game(&self, game: &GameRecord) -> StorageResult<()>;

    /// Load a game by id. Returns `GameNotFound` if absent.
    async fn get_game(&self, game_id: &GameId) -> StorageResult<GameRecord>;

    /// Overwrite an existing game row. Returns `GameNotFound` if absent.
    async fn save_game(&self, game: &GameRecord) -> StorageResult<()>;

    /// All games, oldest first.
    async fn list_games(&self) -> StorageResult<Vec<GameRecord>>;

    /// The at-bat with the highest sequence number, if any.
    async fn last_at_bat(&self, game_id: &GameId) -> StorageResult<Option<AtBatRecord>>;

    /// Load one at-bat of a game. Returns `AtBatNotFound` if absent.
    async fn get_at_bat(&self, game_id: &GameId, at_bat_id: &AtBatId)
        -> StorageResult<AtBatRecord>;

    /// All at-bats of a game, ordered by sequence.
    async fn list_at_bats(&self, game_id: &GameId) -> StorageResult<Vec<AtBatRecord>>;

    /// Atomically append `at_bat` and overwrite the game row with `game`.
    ///
    /// Fails with `SequenceConflict` unless `at_bat.sequence` is one past the
    /// current last sequence of the game.
    async fn append_at_bat(&self, at_bat: &AtBatRecord, game: &GameRecord) -> StorageResult<()>;

    /// Atomically delete the most recent at-bat and overwrite the game row.
    ///
    /// Fails with `NotLastAtBat` if `at_bat_id` is not the most recent one.
    async fn remove_last_at_bat(&self, at_bat_id: &AtBatId, game: &GameRecord)
        -> StorageResult<()>;

    /// Insert or replace a pitching appearance.
    async fn put_appearance(&self, appearance: &PitchingAppearanceRecord) -> StorageResult<()>;

    /// Load one pitching appearance. Returns `AppearanceNotFound` if absent.
    async fn get_appearance(
        &self,
        game_id: &GameId,
        appearance_id: &AppearanceId,
    ) -> StorageResult<PitchingAppearanceRecord>;

    /// All appearances of a game, ordered by appearance order.
    async fn list_appearances(
        &self,
        game_id: &GameId,
    ) -> StorageResult<Vec<PitchingAppearanceRecord>>;
}
