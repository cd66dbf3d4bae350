//! At-bat outcome taxonomy.
//!
//! Every downstream calculation (game state, batting lines, box scores)
//! reads these predicates, so the table below is fixed.
//!
//! | outcome | official AB | hit | TB | K | BB | outs |
//! |---|---|---|---|---|---|---|
//! | single / double / triple / home_run | yes | yes | 1/2/3/4 | | | 0 |
//! | walk / intentional_walk | no | | | | yes | 0 |
//! | hit_by_pitch | no | | | | | 0 |
//! | strikeout_swinging / strikeout_looking | yes | | | yes | | 1 |
//! | ground_out / fly_out / line_out / pop_out | yes | | | | | 1 |
//! | fielders_choice | yes | | | | | 1 |
//! | double_play | yes | | | | | 2 |
//! | triple_play | yes | | | | | 3 |
//! | sacrifice_fly / sacrifice_bunt | no | | | | | 0 |
//! | reached_on_error | yes | | | | | 0 |
//! | catchers_interference | no | | | | | 0 |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::ValidationError;

/// Result of a single plate appearance.
///
/// Serialized as lowercase snake_case tokens; the tokens are shared with the
/// UI and sync collaborators and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Single,
    Double,
    Triple,
    HomeRun,
    Walk,
    IntentionalWalk,
    HitByPitch,
    StrikeoutSwinging,
    StrikeoutLooking,
    GroundOut,
    FlyOut,
    LineOut,
    PopOut,
    FieldersChoice,
    DoublePlay,
    TriplePlay,
    SacrificeFly,
    SacrificeBunt,
    ReachedOnError,
    CatchersInterference,
}

impl Outcome {
    /// Every outcome, in wire-vocabulary order.
    pub const ALL: [Outcome; 20] = [
        Outcome::Single,
        Outcome::Double,
        Outcome::Triple,
        Outcome::HomeRun,
        Outcome::Walk,
        Outcome::IntentionalWalk,
        Outcome::HitByPitch,
        Outcome::StrikeoutSwinging,
        Outcome::StrikeoutLooking,
        Outcome::GroundOut,
        Outcome::FlyOut,
        Outcome::LineOut,
        Outcome::PopOut,
        Outcome::FieldersChoice,
        Outcome::DoublePlay,
        Outcome::TriplePlay,
        Outcome::SacrificeFly,
        Outcome::SacrificeBunt,
        Outcome::ReachedOnError,
        Outcome::CatchersInterference,
    ];

    /// Wire token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Single => "single",
            Outcome::Double => "double",
            Outcome::Triple => "triple",
            Outcome::HomeRun => "home_run",
            Outcome::Walk => "walk",
            Outcome::IntentionalWalk => "intentional_walk",
            Outcome::HitByPitch => "hit_by_pitch",
            Outcome::StrikeoutSwinging => "strikeout_swinging",
            Outcome::StrikeoutLooking => "strikeout_looking",
            Outcome::GroundOut => "ground_out",
            Outcome::FlyOut => "fly_out",
            Outcome::LineOut => "line_out",
            Outcome::PopOut => "pop_out",
            Outcome::FieldersChoice => "fielders_choice",
            Outcome::DoublePlay => "double_play",
            Outcome::TriplePlay => "triple_play",
            Outcome::SacrificeFly => "sacrifice_fly",
            Outcome::SacrificeBunt => "sacrifice_bunt",
            Outcome::ReachedOnError => "reached_on_error",
            Outcome::CatchersInterference => "catchers_interference",
        }
    }

    /// Whether this result counts as an official at-bat.
    pub fn counts_as_at_bat(&self) -> bool {
        !matches!(
            self,
            Outcome::Walk
                | Outcome::IntentionalWalk
                | Outcome::HitByPitch
                | Outcome::SacrificeFly
                | Outcome::SacrificeBunt
                | Outcome::CatchersInterference
        )
    }

    pub fn is_hit(&self) -> bool {
        matches!(
            self,
            Outcome::Single | Outcome::Double | Outcome::Triple | Outcome::HomeRun
        )
    }

    pub fn total_bases(&self) -> u32 {
        match self {
            Outcome::Single => 1,
            Outcome::Double => 2,
            Outcome::Triple => 3,
            Outcome::HomeRun => 4,
            _ => 0,
        }
    }

    pub fn is_strikeout(&self) -> bool {
        matches!(self, Outcome::StrikeoutSwinging | Outcome::StrikeoutLooking)
    }

    /// Walks include intentional walks.
    pub fn is_walk(&self) -> bool {
        matches!(self, Outcome::Walk | Outcome::IntentionalWalk)
    }

    /// Outs the play produces before any half-inning cap is applied.
    pub fn outs_produced(&self) -> u8 {
        match self {
            Outcome::DoublePlay => 2,
            Outcome::TriplePlay => 3,
            Outcome::StrikeoutSwinging
            | Outcome::StrikeoutLooking
            | Outcome::GroundOut
            | Outcome::FlyOut
            | Outcome::LineOut
            | Outcome::PopOut
            | Outcome::FieldersChoice => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Outcome::ALL
            .iter()
            .copied()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownOutcome {
                token: s.to_string(),
            })
    }
}
