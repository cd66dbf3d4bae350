//! Pitching appearance corrections.

use serde::{Deserialize, Serialize};

use scorebook_state::PitchingAppearanceRecord;

/// Field-wise correction to a pitching appearance. Every `Some` overwrites
/// the stored value; `None` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PitchingCorrection {
    pub outs_recorded: Option<u32>,
    pub hits_allowed: Option<u32>,
    pub runs_allowed: Option<u32>,
    pub earned_runs: Option<u32>,
    pub walks: Option<u32>,
    pub strikeouts: Option<u32>,
    pub home_runs_allowed: Option<u32>,
    pub pitches_thrown: Option<u32>,
    pub strikes_thrown: Option<u32>,
    pub balls_thrown: Option<u32>,
    pub hit_batters: Option<u32>,
    pub wild_pitches: Option<u32>,
    pub balks: Option<u32>,
    pub is_winner: Option<bool>,
    pub is_loser: Option<bool>,
    pub is_save: Option<bool>,
    pub is_hold: Option<bool>,
    pub notes: Option<String>,
}

impl PitchingCorrection {
    pub fn is_empty(&self) -> bool {
        *self == PitchingCorrection::default()
    }

    pub fn apply(&self, record: &mut PitchingAppearanceRecord) {
        fn set<T: Clone>(slot: &mut T, value: &Option<T>) {
            if let Some(v) = value {
                *slot = v.clone();
            }
        }
        fn set_opt<T: Clone>(slot: &mut Option<T>, value: &Option<T>) {
            if value.is_some() {
                *slot = value.clone();
            }
        }

        set(&mut record.outs_recorded, &self.outs_recorded);
        set(&mut record.hits_allowed, &self.hits_allowed);
        set(&mut record.runs_allowed, &self.runs_allowed);
        set(&mut record.earned_runs, &self.earned_runs);
        set(&mut record.walks, &self.walks);
        set(&mut record.strikeouts, &self.strikeouts);
        set(&mut record.home_runs_allowed, &self.home_runs_allowed);
        set_opt(&mut record.pitches_thrown, &self.pitches_thrown);
        set_opt(&mut record.strikes_thrown, &self.strikes_thrown);
        set_opt(&mut record.balls_thrown, &self.balls_thrown);
        set(&mut record.hit_batters, &self.hit_batters);
        set(&mut record.wild_pitches, &self.wild_pitches);
        set(&mut record.balks, &self.balks);
        set_opt(&mut record.is_winner, &self.is_winner);
        set_opt(&mut record.is_loser, &self.is_loser);
        set_opt(&mut record.is_save, &self.is_save);
        set_opt(&mut record.is_hold, &self.is_hold);
        set_opt(&mut record.notes, &self.notes);
    }
}
