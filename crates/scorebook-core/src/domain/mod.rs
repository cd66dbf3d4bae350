//! Domain models for Scorebook.
//!
//! Canonical definitions for the core entities:
//! - `Game`: a scheduled or live game and its `Situation`
//! - `AtBat`: one recorded plate appearance
//! - `PitchingCorrection`: field-wise edits to a pitching appearance
//! - `Sport`: baseball or softball, which fixes the regulation game length

pub mod at_bat;
pub mod error;
pub mod game;
pub mod ids;
pub mod pitching;
pub mod sport;

pub use at_bat::{AtBat, AtBatStamp, Play, RecordAtBat, MAX_RBI};
pub use error::{Result, ScorebookError, ValidationError};
pub use game::{batting_side, Game, Half, Side, Situation, OUTS_PER_HALF};
pub use ids::parse_id;
pub use pitching::PitchingCorrection;
pub use sport::Sport;
