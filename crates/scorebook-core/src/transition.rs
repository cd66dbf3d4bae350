//! Pure situation transitions.
//!
//! [`apply_at_bat`] and [`reverse_at_bat`] are exact inverses: for any
//! situation `s` reachable in a live game,
//! `reverse_at_bat(apply_at_bat(s).situation, .., stamp) == s`.

use crate::domain::{batting_side, AtBatStamp, Half, Play, Situation, OUTS_PER_HALF};

/// Result of applying one at-bat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    pub situation: Situation,
    /// Stored with the at-bat so it can be reversed.
    pub stamp: AtBatStamp,
}

/// Apply `play` to `before`.
///
/// Outs are capped at the ones left in the half-inning, so a double play
/// with two out records one out. Runs go to the side at the plate. When the
/// third out is made the half flips; the inning advances only after the
/// bottom half.
pub fn apply_at_bat(before: &Situation, is_home: bool, play: &Play) -> Applied {
    let remaining = OUTS_PER_HALF.saturating_sub(before.outs);
    let outs_recorded = play.outcome.outs_produced().min(remaining);

    let stamp = AtBatStamp {
        inning: before.inning,
        half: before.half,
        outs_recorded,
    };

    let mut after = *before;
    let side = batting_side(before.half, is_home);
    let score = after.score_mut(side);
    *score = score.saturating_add(play.runs());

    after.outs = before.outs + outs_recorded;
    if after.outs >= OUTS_PER_HALF {
        after.outs = 0;
        match before.half {
            Half::Top => after.half = Half::Bottom,
            Half::Bottom => {
                after.half = Half::Top;
                after.inning += 1;
            }
        }
    }

    Applied {
        situation: after,
        stamp,
    }
}

/// Undo `play`, which was the last at-bat applied to reach `after`.
///
/// If no one is out but the play recorded outs, it ended a half-inning:
/// from the top go back to the bottom of the previous inning, from the
/// bottom go back to the top of the same inning. Runs come off the side
/// that batted in the stamped half and never drop below zero.
pub fn reverse_at_bat(
    after: &Situation,
    is_home: bool,
    play: &Play,
    stamp: &AtBatStamp,
) -> Situation {
    let mut before = *after;

    if after.outs == 0 && stamp.outs_recorded > 0 {
        match after.half {
            Half::Top => {
                before.half = Half::Bottom;
                before.inning = after.inning.saturating_sub(1).max(1);
            }
            Half::Bottom => before.half = Half::Top,
        }
        before.outs = OUTS_PER_HALF - stamp.outs_recorded.min(OUTS_PER_HALF);
    } else {
        before.outs = after.outs.saturating_sub(stamp.outs_recorded);
    }

    let side = batting_side(stamp.half, is_home);
    let score = before.score_mut(side);
    *score = score.saturating_sub(play.runs());

    before
}
