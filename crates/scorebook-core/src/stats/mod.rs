//! Sabermetric calculators.
//!
//! The `compute_*` functions are pure: counts in, derived line out. The
//! `aggregate` builders fold stored events into those counts, and
//! `box_score` assembles a single game's linescore and player lines;
//! `season` groups lines per player across games.

pub mod aggregate;
pub mod batting;
pub mod box_score;
pub mod format;
pub mod pitching;
pub mod season;
pub mod team;

pub use aggregate::{batting_counts, pitching_counts, team_counts};
pub use batting::{compute_batting_line, BattingCounts, BattingStatsOutput};
pub use box_score::{
    build_box_score, BoxScore, InningScore, Linescore, PlayerBattingLine, PlayerPitchingLine,
    RunsHitsErrors,
};
pub use format::{format_avg, format_ip, format_two_decimals, innings_from_outs, safe_divide};
pub use pitching::{compute_pitching_line, PitchingCounts, PitchingStatsOutput, FIP_CONSTANT};
pub use season::{batting_lines, pitcher_lines, PitcherLine};
pub use team::{compute_team_record, TeamCounts, TeamStatsOutput, PYTHAGOREAN_EXPONENT};
