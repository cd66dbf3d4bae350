//! At-bat events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use scorebook_state::{AtBatId, AtBatRecord, GameId, PlayerId};

use super::error::ValidationError;
use super::game::Half;
use crate::outcome::Outcome;

/// The scoring-relevant part of an at-bat.
///
/// `runner_scored` models a run that scores without an RBI (wild pitch,
/// passed ball). It adds at most one run and only when `rbi` is zero, so a
/// play never counts the same run twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub outcome: Outcome,
    pub rbi: u32,
    pub runner_scored: bool,
}

impl Play {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            rbi: 0,
            runner_scored: false,
        }
    }

    /// Runs credited to the batting team.
    pub fn runs(&self) -> u32 {
        let scored_without_rbi = u32::from(self.runner_scored && self.rbi == 0);
        self.rbi + scored_without_rbi
    }
}

/// Where in the game an at-bat happened and what it did to the out count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtBatStamp {
    pub inning: u32,
    pub half: Half,
    /// Outs credited to the half-inning
    pub outs_recorded: u8,
}

/// Most runs one play can drive in: the batter plus three runners.
pub const MAX_RBI: u32 = 4;

/// Request to record the current batter's at-bat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordAtBat {
    pub game_id: GameId,
    pub player_id: PlayerId,
    pub play: Play,
    pub pitch_count: Option<u32>,
    pub stolen_bases: u32,
    pub caught_stealing: u32,
    pub notes: Option<String>,
}

impl RecordAtBat {
    pub fn new(game_id: GameId, player_id: PlayerId, outcome: Outcome) -> Self {
        Self {
            game_id,
            player_id,
            play: Play::new(outcome),
            pitch_count: None,
            stolen_bases: 0,
            caught_stealing: 0,
            notes: None,
        }
    }

    pub fn rbi(mut self, rbi: u32) -> Self {
        self.play.rbi = rbi;
        self
    }

    pub fn runner_scored(mut self, runner_scored: bool) -> Self {
        self.play.runner_scored = runner_scored;
        self
    }

    pub fn pitch_count(mut self, pitches: u32) -> Self {
        self.pitch_count = Some(pitches);
        self
    }

    pub fn stolen_bases(mut self, stolen_bases: u32) -> Self {
        self.stolen_bases = stolen_bases;
        self
    }

    pub fn caught_stealing(mut self, caught_stealing: u32) -> Self {
        self.caught_stealing = caught_stealing;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.play.rbi > MAX_RBI {
            return Err(ValidationError::RbiOutOfRange { rbi: self.play.rbi });
        }
        Ok(())
    }
}

/// A recorded at-bat. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtBat {
    pub id: AtBatId,
    pub game_id: GameId,
    pub player_id: PlayerId,
    pub sequence: u32,
    pub play: Play,
    pub stamp: AtBatStamp,
    pub pitch_count: Option<u32>,
    pub stolen_bases: u32,
    pub caught_stealing: u32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AtBat {
    pub fn outcome(&self) -> Outcome {
        self.play.outcome
    }

    pub fn to_record(&self) -> AtBatRecord {
        AtBatRecord {
            id: self.id,
            game_id: self.game_id,
            player_id: self.player_id,
            inning: self.stamp.inning,
            is_top: self.stamp.half.is_top(),
            sequence: self.sequence,
            outcome: self.play.outcome.as_str().to_string(),
            rbi: self.play.rbi,
            runner_scored: self.play.runner_scored,
            outs_recorded: self.stamp.outs_recorded,
            pitch_count: self.pitch_count,
            stolen_bases: self.stolen_bases,
            caught_stealing: self.caught_stealing,
            notes: self.notes.clone(),
            created_at: self.created_at,
        }
    }
}

impl TryFrom<AtBatRecord> for AtBat {
    type Error = ValidationError;

    fn try_from(record: AtBatRecord) -> std::result::Result<Self, Self::Error> {
        let outcome: Outcome = record.outcome.parse()?;
        Ok(Self {
            id: record.id,
            game_id: record.game_id,
            player_id: record.player_id,
            sequence: record.sequence,
            play: Play {
                outcome,
                rbi: record.rbi,
                runner_scored: record.runner_scored,
            },
            stamp: AtBatStamp {
                inning: record.inning,
                half: Half::from_is_top(record.is_top),
                outs_recorded: record.outs_recorded,
            },
            pitch_count: record.pitch_count,
            stolen_bases: record.stolen_bases,
            caught_stealing: record.caught_stealing,
            notes: record.notes,
            created_at: record.created_at,
        })
    }
}
