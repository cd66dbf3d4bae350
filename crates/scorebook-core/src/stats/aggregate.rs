//! Folding persisted events into calculator inputs.

use std::collections::BTreeSet;

use scorebook_state::{GameStatus, PitchingAppearanceRecord};

use super::batting::BattingCounts;
use super::pitching::PitchingCounts;
use super::team::TeamCounts;
use crate::domain::{AtBat, Game};
use crate::outcome::Outcome;

/// Batting counts over a set of at-bats. Every at-bat is one plate
/// appearance; games are the distinct games among them.
pub fn batting_counts<'a, I>(at_bats: I) -> BattingCounts
where
    I: IntoIterator<Item = &'a AtBat>,
{
    let mut c = BattingCounts::default();
    let mut games = BTreeSet::new();

    for ab in at_bats {
        let outcome = ab.outcome();
        games.insert(ab.game_id);

        c.plate_appearances += 1;
        c.at_bats += u32::from(outcome.counts_as_at_bat());
        c.hits += u32::from(outcome.is_hit());
        match outcome {
            Outcome::Single => c.singles += 1,
            Outcome::Double => c.doubles += 1,
            Outcome::Triple => c.triples += 1,
            Outcome::HomeRun => c.home_runs += 1,
            Outcome::HitByPitch => c.hit_by_pitch += 1,
            Outcome::SacrificeFly => c.sacrifice_flies += 1,
            Outcome::SacrificeBunt => c.sacrifice_bunts += 1,
            Outcome::DoublePlay => c.grounded_into_double_play += 1,
            _ => {}
        }
        c.walks += u32::from(outcome.is_walk());
        c.strikeouts += u32::from(outcome.is_strikeout());
        c.stolen_bases += ab.stolen_bases;
        c.caught_stealing += ab.caught_stealing;
        c.rbi += ab.play.rbi;
        c.runs += u32::from(ab.play.runner_scored);
    }

    c.games = games.len() as u32;
    c
}

/// Pitching counts over a set of appearances.
///
/// Pitch and strike totals stay absent once any appearance lacks them.
pub fn pitching_counts<'a, I>(appearances: I) -> PitchingCounts
where
    I: IntoIterator<Item = &'a PitchingAppearanceRecord>,
{
    let mut c = PitchingCounts::default();

    for app in appearances {
        c.games += 1;
        c.games_started += u32::from(app.appearance_order == 1);
        c.outs_recorded += app.outs_recorded;
        c.hits_allowed += app.hits_allowed;
        c.runs_allowed += app.runs_allowed;
        c.earned_runs += app.earned_runs;
        c.walks += app.walks;
        c.strikeouts += app.strikeouts;
        c.home_runs_allowed += app.home_runs_allowed;
        c.hit_batters += app.hit_batters;
        c.pitches_thrown = c.pitches_thrown.zip(app.pitches_thrown).map(|(a, b)| a + b);
        c.strikes_thrown = c.strikes_thrown.zip(app.strikes_thrown).map(|(a, b)| a + b);
        c.wins += u32::from(app.is_winner == Some(true));
        c.losses += u32::from(app.is_loser == Some(true));
        c.saves += u32::from(app.is_save == Some(true));
        c.holds += u32::from(app.is_hold == Some(true));
    }

    c
}

/// Team record over finished games; anything not `final` is skipped.
pub fn team_counts<'a, I>(games: I) -> TeamCounts
where
    I: IntoIterator<Item = &'a Game>,
{
    let mut c = TeamCounts::default();

    for game in games {
        if game.situation.status != GameStatus::Final {
            continue;
        }
        let ours = game.situation.our_score;
        let theirs = game.situation.opponent_score;
        c.games_played += 1;
        c.runs_scored += ours;
        c.runs_allowed += theirs;
        match ours.cmp(&theirs) {
            std::cmp::Ordering::Greater => c.wins += 1,
            std::cmp::Ordering::Less => c.losses += 1,
            std::cmp::Ordering::Equal => c.ties += 1,
        }
    }

    c
}
