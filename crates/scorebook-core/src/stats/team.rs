//! Team record calculator.

use serde::{Deserialize, Serialize};

use super::format::safe_divide;

/// Exponent of the baseball Pythagorean expectation.
pub const PYTHAGOREAN_EXPONENT: f64 = 1.83;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamCounts {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub runs_scored: u32,
    pub runs_allowed: u32,
    pub games_played: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatsOutput {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub games_played: u32,
    pub runs_scored: u32,
    pub runs_allowed: u32,
    pub run_differential: i64,
    pub win_percent: Option<f64>,
    pub pythagorean_win_percent: Option<f64>,
    pub runs_per_game: Option<f64>,
    pub runs_allowed_per_game: Option<f64>,
    /// `W-L`, or `W-L-T` once there is a tie.
    pub record: String,
}

pub fn compute_team_record(counts: &TeamCounts) -> TeamStatsOutput {
    let c = counts;
    let rs = f64::from(c.runs_scored);
    let ra = f64::from(c.runs_allowed);
    let games = f64::from(c.games_played);

    let pythagorean_win_percent = if rs + ra > 0.0 {
        let rs_exp = rs.powf(PYTHAGOREAN_EXPONENT);
        let ra_exp = ra.powf(PYTHAGOREAN_EXPONENT);
        safe_divide(rs_exp, rs_exp + ra_exp)
    } else {
        None
    };

    let record = if c.ties > 0 {
        format!("{}-{}-{}", c.wins, c.losses, c.ties)
    } else {
        format!("{}-{}", c.wins, c.losses)
    };

    TeamStatsOutput {
        wins: c.wins,
        losses: c.losses,
        ties: c.ties,
        games_played: c.games_played,
        runs_scored: c.runs_scored,
        runs_allowed: c.runs_allowed,
        run_differential: i64::from(c.runs_scored) - i64::from(c.runs_allowed),
        win_percent: safe_divide(f64::from(c.wins), f64::from(c.wins) + f64::from(c.losses)),
        pythagorean_win_percent,
        runs_per_game: safe_divide(rs, games),
        runs_allowed_per_game: safe_divide(ra, games),
        record,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pythagorean_favours_outscoring_team() {
        let counts = TeamCounts {
            wins: 8,
            losses: 4,
            runs_scored: 100,
            runs_allowed: 80,
            games_played: 12,
            ..Default::default()
        };
        let out = compute_team_record(&counts);
        let pyth = out.pythagorean_win_percent.unwrap();
        assert!(pyth > 0.5 && pyth < 1.0, "{pyth}");
        assert_eq!(out.run_differential, 20);
        assert_eq!(out.record, "8-4");
    }

    #[test]
    fn test_record_with_ties() {
        let counts = TeamCounts {
            wins: 5,
            losses: 3,
            ties: 1,
            games_played: 9,
            ..Default::default()
        };
        assert_eq!(compute_team_record(&counts).record, "5-3-1");
    }

    #[test]
    fn test_empty_season() {
        let out = compute_team_record(&TeamCounts::default());
        assert_eq!(out.record, "0-0");
        assert_eq!(out.win_percent, None);
        assert_eq!(out.pythagorean_win_percent, None);
        assert_eq!(out.runs_per_game, None);
        assert_eq!(out.runs_allowed_per_game, None);
        assert_eq!(out.run_differential, 0);
    }

    #[test]
    fn test_shutout_season() {
        let counts = TeamCounts {
            losses: 2,
            runs_allowed: 7,
            games_played: 2,
            ..Default::default()
        };
        let out = compute_team_record(&counts);
        assert_eq!(out.pythagorean_win_percent, Some(0.0));
        assert_eq!(out.run_differential, -7);
        assert_eq!(out.win_percent, Some(0.0));
        assert_eq!(out.runs_allowed_per_game, Some(3.5));
    }
}
