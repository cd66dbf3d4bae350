//! Scorebook Core Library
//!
//! Live game scoring and sabermetric statistics for baseball and softball.
//!
//! - [`transition`]: pure `apply_at_bat` / `reverse_at_bat` over a game
//!   [`Situation`]
//! - [`ScoringEngine`]: loads games from a [`scorebook_state::GameStore`],
//!   applies transitions and persists them atomically
//! - [`stats`]: batting, pitching and team calculators plus box scores

pub mod config;
pub mod domain;
pub mod engine;
pub mod metrics;
pub mod obs;
pub mod outcome;
pub mod stats;
pub mod telemetry;
pub mod transition;

pub use config::ScorebookConfig;
pub use domain::{
    batting_side, parse_id, AtBat, AtBatStamp, Game, Half, PitchingCorrection, Play, RecordAtBat,
    Result, ScorebookError, Side, Situation, Sport, ValidationError, MAX_RBI, OUTS_PER_HALF,
};
pub use engine::{RecordedAtBat, ScoringEngine};
pub use outcome::Outcome;
pub use stats::{
    compute_batting_line, compute_pitching_line, compute_team_record, BattingCounts,
    BattingStatsOutput, BoxScore, PitcherLine, PitchingCounts, PitchingStatsOutput,
    PlayerBattingLine, TeamCounts, TeamStatsOutput,
};
pub use telemetry::init_tracing;
pub use transition::{apply_at_bat, reverse_at_bat, Applied};

pub use scorebook_state::{
    AppearanceId, AtBatId, GameId, GameStatus, GameStore, JsonFileStore, PitchingAppearanceRecord,
    PlayerId,
};

/// Scorebook version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
