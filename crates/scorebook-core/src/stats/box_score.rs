//! Per-game box score.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use scorebook_state::{AppearanceId, GameId, GameStatus, PitchingAppearanceRecord, PlayerId};

use super::aggregate::pitching_counts;
use super::batting::BattingStatsOutput;
use super::pitching::{compute_pitching_line, PitchingStatsOutput};
use super::season::batting_lines;
use crate::domain::{batting_side, AtBat, Game, Side};
use crate::outcome::Outcome;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InningScore {
    pub inning: u32,
    pub our_runs: u32,
    pub opponent_runs: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunsHitsErrors {
    pub r: u32,
    pub h: u32,
    pub e: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Linescore {
    pub innings: Vec<InningScore>,
    pub our_total: RunsHitsErrors,
    pub opponent_total: RunsHitsErrors,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerBattingLine {
    pub player_id: PlayerId,
    pub stats: BattingStatsOutput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPitchingLine {
    pub player_id: PlayerId,
    pub appearance_id: AppearanceId,
    pub appearance_order: u32,
    pub stats: PitchingStatsOutput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxScore {
    pub game_id: GameId,
    pub opponent_name: String,
    pub is_home: bool,
    pub status: GameStatus,
    pub linescore: Linescore,
    /// Most plate appearances first.
    pub batting: Vec<PlayerBattingLine>,
    /// Most outs recorded first.
    pub pitching: Vec<PlayerPitchingLine>,
}

/// Build the box score of `game` from its at-bats and pitching appearances.
///
/// Runs, hits and errors are attributed through the half each at-bat was
/// stamped with. An error is charged to the fielding side, so a
/// reached-on-error while we bat counts against the opponent.
pub fn build_box_score(
    game: &Game,
    at_bats: &[AtBat],
    appearances: &[PitchingAppearanceRecord],
    game_length_innings: u32,
) -> BoxScore {
    let mut runs_by_inning: BTreeMap<u32, InningScore> = BTreeMap::new();
    let mut our_total = RunsHitsErrors {
        r: game.situation.our_score,
        ..Default::default()
    };
    let mut opponent_total = RunsHitsErrors {
        r: game.situation.opponent_score,
        ..Default::default()
    };

    for ab in at_bats {
        let side = batting_side(ab.stamp.half, game.is_home);
        let line = runs_by_inning
            .entry(ab.stamp.inning)
            .or_insert_with(|| InningScore {
                inning: ab.stamp.inning,
                ..Default::default()
            });
        let (batting, fielding) = match side {
            Side::Us => {
                line.our_runs += ab.play.runs();
                (&mut our_total, &mut opponent_total)
            }
            Side::Opponent => {
                line.opponent_runs += ab.play.runs();
                (&mut opponent_total, &mut our_total)
            }
        };
        batting.h += u32::from(ab.outcome().is_hit());
        fielding.e += u32::from(ab.outcome() == Outcome::ReachedOnError);
    }

    let last_played = runs_by_inning.keys().next_back().copied().unwrap_or(0);
    let innings = (1..=game.innings_count.max(last_played))
        .map(|inning| {
            runs_by_inning.get(&inning).copied().unwrap_or(InningScore {
                inning,
                ..Default::default()
            })
        })
        .collect();

    let batting = batting_lines(at_bats);

    let mut pitching: Vec<PlayerPitchingLine> = appearances
        .iter()
        .map(|app| PlayerPitchingLine {
            player_id: app.player_id,
            appearance_id: app.id,
            appearance_order: app.appearance_order,
            stats: compute_pitching_line(&pitching_counts([app]), game_length_innings),
        })
        .collect();
    pitching.sort_by(|a, b| b.stats.outs_recorded.cmp(&a.stats.outs_recorded));

    BoxScore {
        game_id: game.id,
        opponent_name: game.opponent_name.clone(),
        is_home: game.is_home,
        status: game.situation.status,
        linescore: Linescore {
            innings,
            our_total,
            opponent_total,
        },
        batting,
        pitching,
    }
}
