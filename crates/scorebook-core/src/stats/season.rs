//! One line per player across a set of games.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use scorebook_state::{PitchingAppearanceRecord, PlayerId};

use super::aggregate::{batting_counts, pitching_counts};
use super::batting::compute_batting_line;
use super::box_score::PlayerBattingLine;
use super::pitching::{compute_pitching_line, PitchingStatsOutput};
use crate::domain::AtBat;

/// A pitcher's line over all of their appearances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitcherLine {
    pub player_id: PlayerId,
    pub stats: PitchingStatsOutput,
}

/// Batting lines grouped by batter, most plate appearances first.
pub fn batting_lines<'a, I>(at_bats: I) -> Vec<PlayerBattingLine>
where
    I: IntoIterator<Item = &'a AtBat>,
{
    let mut by_player: BTreeMap<PlayerId, Vec<&AtBat>> = BTreeMap::new();
    for ab in at_bats {
        by_player.entry(ab.player_id).or_default().push(ab);
    }

    let mut lines: Vec<PlayerBattingLine> = by_player
        .into_iter()
        .map(|(player_id, abs)| PlayerBattingLine {
            player_id,
            stats: compute_batting_line(&batting_counts(abs)),
        })
        .collect();
    lines.sort_by(|a, b| b.stats.pa.cmp(&a.stats.pa));
    lines
}

/// Pitching lines grouped by pitcher, most outs recorded first.
pub fn pitcher_lines<'a, I>(appearances: I, game_length_innings: u32) -> Vec<PitcherLine>
where
    I: IntoIterator<Item = &'a PitchingAppearanceRecord>,
{
    let mut by_player: BTreeMap<PlayerId, Vec<&PitchingAppearanceRecord>> = BTreeMap::new();
    for app in appearances {
        by_player.entry(app.player_id).or_default().push(app);
    }

    let mut lines: Vec<PitcherLine> = by_player
        .into_iter()
        .map(|(player_id, apps)| PitcherLine {
            player_id,
            stats: compute_pitching_line(&pitching_counts(apps), game_length_innings),
        })
        .collect();
    lines.sort_by(|a, b| b.stats.outs_recorded.cmp(&a.stats.outs_recorded));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorebook_state::GameId;

    #[test]
    fn test_pitcher_lines_group_appearances() {
        let ace = PlayerId::new();
        let closer = PlayerId::new();
        let appearance = |game: GameId, player: PlayerId, order: u32, outs: u32| {
            let mut app = PitchingAppearanceRecord::new(game, player, order);
            app.outs_recorded = outs;
            app
        };
        let (g1, g2) = (GameId::new(), GameId::new());
        let apps = vec![
            appearance(g1, ace, 1, 18),
            appearance(g1, closer, 2, 3),
            appearance(g2, closer, 1, 12),
            appearance(g2, ace, 2, 2),
        ];

        let lines = pitcher_lines(&apps, 9);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].player_id, ace);
        assert_eq!(lines[0].stats.outs_recorded, 20);
        assert_eq!(lines[0].stats.games, 2);
        assert_eq!(lines[0].stats.games_started, 1);
        assert_eq!(lines[1].player_id, closer);
        assert_eq!(lines[1].stats.ip_display, "5.0");
    }

    #[test]
    fn test_no_events_no_lines() {
        assert!(batting_lines(&Vec::<AtBat>::new()).is_empty());
        assert!(pitcher_lines(&Vec::<PitchingAppearanceRecord>::new(), 7).is_empty());
    }
}
