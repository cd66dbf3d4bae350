//! Game aggregate and its live situation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use scorebook_state::{GameId, GameRecord, GameStatus};

use super::error::{Result, ScorebookError, ValidationError};

/// Outs that end a half-inning.
pub const OUTS_PER_HALF: u8 = 3;

/// Half of an inning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Half {
    Top,
    Bottom,
}

impl Half {
    pub fn from_is_top(is_top: bool) -> Self {
        if is_top {
            Half::Top
        } else {
            Half::Bottom
        }
    }

    pub fn is_top(&self) -> bool {
        matches!(self, Half::Top)
    }
}

/// Which team a run or hit belongs to, from our point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Us,
    Opponent,
}

impl Side {
    pub fn other(&self) -> Side {
        match self {
            Side::Us => Side::Opponent,
            Side::Opponent => Side::Us,
        }
    }
}

/// The team at the plate in `half`. Visitors bat in the top half; we are the
/// visitors exactly when `is_home` is false.
pub fn batting_side(half: Half, is_home: bool) -> Side {
    match (half, is_home) {
        (Half::Top, true) | (Half::Bottom, false) => Side::Opponent,
        (Half::Top, false) | (Half::Bottom, true) => Side::Us,
    }
}

/// Snapshot of a game's live state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Situation {
    pub status: GameStatus,
    pub our_score: u32,
    pub opponent_score: u32,
    pub inning: u32,
    pub half: Half,
    /// Always below `OUTS_PER_HALF`
    pub outs: u8,
}

impl Situation {
    /// 0-0, top of the first, nobody out.
    pub fn scheduled() -> Self {
        Self {
            status: GameStatus::Scheduled,
            our_score: 0,
            opponent_score: 0,
            inning: 1,
            half: Half::Top,
            outs: 0,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Us => self.our_score,
            Side::Opponent => self.opponent_score,
        }
    }

    pub(crate) fn score_mut(&mut self, side: Side) -> &mut u32 {
        match side {
            Side::Us => &mut self.our_score,
            Side::Opponent => &mut self.opponent_score,
        }
    }

    /// `scheduled → in_progress`, resetting the inning, half and outs.
    pub fn start(self) -> Result<Self> {
        if self.status != GameStatus::Scheduled {
            return Err(ScorebookError::Conflict(
                "game already started or finished".to_string(),
            ));
        }
        Ok(Self {
            status: GameStatus::InProgress,
            inning: 1,
            half: Half::Top,
            outs: 0,
            ..self
        })
    }

    /// `in_progress → final`.
    pub fn end(self) -> Result<Self> {
        self.ensure_in_progress()?;
        Ok(Self {
            status: GameStatus::Final,
            ..self
        })
    }

    pub fn ensure_in_progress(&self) -> Result<()> {
        if self.status != GameStatus::InProgress {
            return Err(ScorebookError::Conflict("game not in progress".to_string()));
        }
        Ok(())
    }
}

/// A game: fixed scheduling facts plus its live situation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub opponent_name: String,
    pub is_home: bool,
    pub innings_count: u32,
    pub situation: Situation,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    /// Schedule a new game.
    pub fn schedule(
        opponent_name: impl Into<String>,
        is_home: bool,
        innings_count: u32,
    ) -> std::result::Result<Self, ValidationError> {
        if innings_count == 0 {
            return Err(ValidationError::ZeroInnings);
        }
        Game::try_from(GameRecord::new(opponent_name, is_home, innings_count))
    }

    /// Copy of this game carrying `situation`.
    pub fn with_situation(&self, situation: Situation) -> Self {
        Self {
            situation,
            updated_at: Utc::now(),
            ..self.clone()
        }
    }

    pub fn to_record(&self) -> GameRecord {
        GameRecord {
            id: self.id,
            opponent_name: self.opponent_name.clone(),
            is_home: self.is_home,
            innings_count: self.innings_count,
            status: self.situation.status,
            our_score: self.situation.our_score,
            opponent_score: self.situation.opponent_score,
            current_inning: self.situation.inning,
            is_top_of_inning: self.situation.half.is_top(),
            outs_in_current_inning: self.situation.outs,
            notes: self.notes.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl TryFrom<GameRecord> for Game {
    type Error = ValidationError;

    fn try_from(record: GameRecord) -> std::result::Result<Self, Self::Error> {
        if record.outs_in_current_inning >= OUTS_PER_HALF {
            return Err(ValidationError::CorruptSituation(format!(
                "game {} has {} outs",
                record.id, record.outs_in_current_inning
            )));
        }
        if record.current_inning == 0 {
            return Err(ValidationError::CorruptSituation(format!(
                "game {} is in inning 0",
                record.id
            )));
        }
        Ok(Self {
            id: record.id,
            opponent_name: record.opponent_name,
            is_home: record.is_home,
            innings_count: record.innings_count,
            situation: Situation {
                status: record.status,
                our_score: record.our_score,
                opponent_score: record.opponent_score,
                inning: record.current_inning,
                half: Half::from_is_top(record.is_top_of_inning),
                outs: record.outs_in_current_inning,
            },
            notes: record.notes,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batting_side_attribution() {
        assert_eq!(batting_side(Half::Top, true), Side::Opponent);
        assert_eq!(batting_side(Half::Bottom, true), Side::Us);
        assert_eq!(batting_side(Half::Top, false), Side::Us);
        assert_eq!(batting_side(Half::Bottom, false), Side::Opponent);
    }

    #[test]
    fn test_start_resets_position() {
        let mut s = Situation::scheduled();
        s.inning = 4;
        s.half = Half::Bottom;
        s.outs = 2;
        let started = s.start().unwrap();
        assert_eq!(started.status, GameStatus::InProgress);
        assert_eq!((started.inning, started.half, started.outs), (1, Half::Top, 0));
    }

    #[test]
    fn test_double_start_conflicts() {
        let started = Situation::scheduled().start().unwrap();
        assert!(started.start().unwrap_err().is_conflict());
        let ended = started.end().unwrap();
        assert_eq!(ended.status, GameStatus::Final);
        assert!(ended.start().unwrap_err().is_conflict());
        assert!(ended.end().unwrap_err().is_conflict());
    }

    #[test]
    fn test_end_requires_in_progress() {
        let err = Situation::scheduled().end().unwrap_err();
        assert_eq!(err.to_string(), "conflict: game not in progress");
    }

    #[test]
    fn test_record_round_trip() {
        let game = Game::schedule("Rivals", false, 7).unwrap();
        let back = Game::try_from(game.to_record()).unwrap();
        assert_eq!(back, game);
        assert_eq!(game.situation, Situation::scheduled());
    }

    #[test]
    fn test_corrupt_outs_rejected() {
        let mut record = GameRecord::new("Rivals", true, 9);
        record.outs_in_current_inning = 3;
        assert!(matches!(
            Game::try_from(record),
            Err(ValidationError::CorruptSituation(_))
        ));
    }

    #[test]
    fn test_zero_innings_rejected() {
        assert!(matches!(
            Game::schedule("Rivals", true, 0),
            Err(ValidationError::ZeroInnings)
        ));
    }
}
