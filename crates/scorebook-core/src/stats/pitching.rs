//! Pitching line calculator.

use serde::{Deserialize, Serialize};

use super::format::{format_ip, format_two_decimals, innings_from_outs, safe_divide};

/// League-average FIP constant.
pub const FIP_CONSTANT: f64 = 3.10;

/// Accumulated pitching events for one pitcher. Innings are kept as outs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PitchingCounts {
    pub games: u32,
    pub games_started: u32,
    pub wins: u32,
    pub losses: u32,
    pub saves: u32,
    pub holds: u32,
    pub outs_recorded: u32,
    pub hits_allowed: u32,
    pub runs_allowed: u32,
    pub earned_runs: u32,
    pub walks: u32,
    pub strikeouts: u32,
    pub home_runs_allowed: u32,
    pub hit_batters: u32,
    pub pitches_thrown: Option<u32>,
    pub strikes_thrown: Option<u32>,
}

impl Default for PitchingCounts {
    /// Zero counts with tracked (zero) pitch totals.
    fn default() -> Self {
        Self {
            games: 0,
            games_started: 0,
            wins: 0,
            losses: 0,
            saves: 0,
            holds: 0,
            outs_recorded: 0,
            hits_allowed: 0,
            runs_allowed: 0,
            earned_runs: 0,
            walks: 0,
            strikeouts: 0,
            home_runs_allowed: 0,
            hit_batters: 0,
            pitches_thrown: Some(0),
            strikes_thrown: Some(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchingStatsOutput {
    pub games: u32,
    pub games_started: u32,
    pub wins: u32,
    pub losses: u32,
    pub saves: u32,
    pub holds: u32,
    pub outs_recorded: u32,
    pub ip_display: String,
    pub h: u32,
    pub r: u32,
    pub er: u32,
    pub bb: u32,
    pub k: u32,
    pub hr: u32,
    pub hbp: u32,
    pub pitches: Option<u32>,
    pub strikes: Option<u32>,

    pub era: Option<f64>,
    pub whip: Option<f64>,
    pub k_per_9: Option<f64>,
    pub bb_per_9: Option<f64>,
    pub h_per_9: Option<f64>,
    #[serde(rename = "kPerBB")]
    pub k_per_bb: Option<f64>,
    pub fip: Option<f64>,

    pub win_percent: Option<f64>,
    pub strike_percent: Option<f64>,

    pub era_display: String,
    pub whip_display: String,
}

/// Derive a pitching line. `game_length_innings` scales ERA (9 for
/// baseball, 7 for softball); the per-9 rates always use 9.
pub fn compute_pitching_line(
    counts: &PitchingCounts,
    game_length_innings: u32,
) -> PitchingStatsOutput {
    let c = counts;
    let ip = innings_from_outs(c.outs_recorded);

    let era = safe_divide(f64::from(c.earned_runs) * f64::from(game_length_innings), ip);
    let whip = safe_divide(f64::from(c.walks) + f64::from(c.hits_allowed), ip);
    let k_per_9 = safe_divide(f64::from(c.strikeouts) * 9.0, ip);
    let bb_per_9 = safe_divide(f64::from(c.walks) * 9.0, ip);
    let h_per_9 = safe_divide(f64::from(c.hits_allowed) * 9.0, ip);
    let k_per_bb = safe_divide(f64::from(c.strikeouts), f64::from(c.walks));

    let fip_num = 13 * i64::from(c.home_runs_allowed)
        + 3 * (i64::from(c.walks) + i64::from(c.hit_batters))
        - 2 * i64::from(c.strikeouts);
    let fip = safe_divide(fip_num as f64, ip).map(|base| base + FIP_CONSTANT);

    let win_percent = safe_divide(f64::from(c.wins), f64::from(c.wins) + f64::from(c.losses));
    let strike_percent = c
        .strikes_thrown
        .zip(c.pitches_thrown)
        .and_then(|(s, p)| safe_divide(f64::from(s), f64::from(p)));

    PitchingStatsOutput {
        games: c.games,
        games_started: c.games_started,
        wins: c.wins,
        losses: c.losses,
        saves: c.saves,
        holds: c.holds,
        outs_recorded: c.outs_recorded,
        ip_display: format_ip(c.outs_recorded),
        h: c.hits_allowed,
        r: c.runs_allowed,
        er: c.earned_runs,
        bb: c.walks,
        k: c.strikeouts,
        hr: c.home_runs_allowed,
        hbp: c.hit_batters,
        pitches: c.pitches_thrown,
        strikes: c.strikes_thrown,
        era,
        whip,
        k_per_9,
        bb_per_9,
        h_per_9,
        k_per_bb,
        fip,
        win_percent,
        strike_percent,
        era_display: format_two_decimals(era),
        whip_display: format_two_decimals(whip),
    }
}
