//! Structured lifecycle events for games and at-bats.
//!
//! Every event is an `info!` record with an `event` field, so log pipelines
//! can filter on `event = "at_bat.recorded"` and friends.

use tracing::info;

use crate::domain::{Half, Situation};
use crate::outcome::Outcome;

fn half_str(half: Half) -> &'static str {
    match half {
        Half::Top => "top",
        Half::Bottom => "bottom",
    }
}

pub fn emit_game_scheduled(game_id: &str, opponent: &str, innings: u32) {
    info!(event = "game.scheduled", game_id = %game_id, opponent = %opponent, innings = innings);
}

pub fn emit_game_started(game_id: &str, opponent: &str) {
    info!(event = "game.started", game_id = %game_id, opponent = %opponent);
}

/// Final score from our side.
pub fn emit_game_ended(game_id: &str, situation: &Situation) {
    info!(
        event = "game.ended",
        game_id = %game_id,
        our_score = situation.our_score,
        opponent_score = situation.opponent_score,
        innings = situation.inning,
    );
}

pub fn emit_at_bat_recorded(game_id: &str, seq: u32, outcome: Outcome, after: &Situation) {
    info!(
        event = "at_bat.recorded",
        game_id = %game_id,
        seq = seq,
        outcome = %outcome,
        inning = after.inning,
        half = half_str(after.half),
        outs = after.outs,
        our_score = after.our_score,
        opponent_score = after.opponent_score,
    );
}

pub fn emit_at_bat_undone(game_id: &str, seq: u32, outcome: Outcome, after: &Situation) {
    info!(
        event = "at_bat.undone",
        game_id = %game_id,
        seq = seq,
        outcome = %outcome,
        inning = after.inning,
        half = half_str(after.half),
        outs = after.outs,
    );
}

pub fn emit_pitching_updated(game_id: &str, appearance_id: &str, outs_recorded: u32) {
    info!(
        event = "pitching.updated",
        game_id = %game_id,
        appearance_id = %appearance_id,
        outs_recorded = outs_recorded,
    );
}

/// Warning: an operation was rejected before any write.
pub fn emit_rejected(game_id: &str, op: &str, error: &dyn std::fmt::Display) {
    tracing::warn!(event = "game.rejected", game_id = %game_id, op = %op, error = %error);
}
