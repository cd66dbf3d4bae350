//! Scoring engine: load, transition, persist.
//!
//! The engine holds no game state of its own. Each call loads the game
//! from the [`GameStore`], runs the pure transition in [`crate::transition`]
//! and hands the result back to the store in one atomic write. Callers
//! serialise calls per game.

use serde::Serialize;
use tracing::{debug, instrument};

use scorebook_state::{
    AppearanceId, AtBatId, GameId, GameStatus, GameStore, PitchingAppearanceRecord, PlayerId,
};

use crate::domain::{
    AtBat, Game, PitchingCorrection, RecordAtBat, Result, ScorebookError, Situation, Sport,
};
use crate::metrics::METRICS;
use crate::obs;
use crate::stats::{
    batting_counts, batting_lines, build_box_score, compute_batting_line, compute_pitching_line,
    compute_team_record, pitcher_lines, pitching_counts, team_counts, BattingStatsOutput,
    BoxScore, PitcherLine, PitchingStatsOutput, PlayerBattingLine, TeamStatsOutput,
};
use crate::transition::{apply_at_bat, reverse_at_bat};

/// An at-bat as stored plus the situation it produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedAtBat {
    pub at_bat: AtBat,
    pub situation: Situation,
}

/// Thin API layer over a game store.
pub struct ScoringEngine<S> {
    store: S,
    sport: Sport,
}

impl<S> ScoringEngine<S>
where
    S: GameStore,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            sport: Sport::default(),
        }
    }

    /// Sport used for default game length and the ERA scale.
    pub fn with_sport(mut self, sport: Sport) -> Self {
        self.sport = sport;
        self
    }

    pub fn sport(&self) -> Sport {
        self.sport
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // -- games --

    /// Schedule a game. `innings` defaults to the sport's regulation length.
    #[instrument(skip(self), fields(sport = %self.sport))]
    pub async fn schedule_game(
        &self,
        opponent_name: &str,
        is_home: bool,
        innings: Option<u32>,
    ) -> Result<Game> {
        let innings = innings.unwrap_or_else(|| self.sport.game_innings());
        let game = Game::schedule(opponent_name, is_home, innings)?;
        self.store.create_game(&game.to_record()).await?;
        obs::emit_game_scheduled(&game.id.to_string(), opponent_name, innings);
        Ok(game)
    }

    pub async fn get_game(&self, game_id: &GameId) -> Result<Game> {
        let record = self.store.get_game(game_id).await?;
        Ok(Game::try_from(record)?)
    }

    /// Every game in the store, oldest first.
    pub async fn list_games(&self) -> Result<Vec<Game>> {
        let records = self.store.list_games().await?;
        records
            .into_iter()
            .map(|r| Game::try_from(r).map_err(ScorebookError::from))
            .collect()
    }

    #[instrument(skip_all, fields(game_id = %game_id))]
    pub async fn start_game(&self, game_id: &GameId) -> Result<Game> {
        let game = self.get_game(game_id).await?;
        let situation = game.situation.start().inspect_err(|e| {
            obs::emit_rejected(&game_id.to_string(), "start_game", e);
        })?;
        let game = game.with_situation(situation);
        self.store.save_game(&game.to_record()).await?;

        METRICS.inc_games_started();
        obs::emit_game_started(&game_id.to_string(), &game.opponent_name);
        Ok(game)
    }

    #[instrument(skip_all, fields(game_id = %game_id))]
    pub async fn end_game(&self, game_id: &GameId) -> Result<Game> {
        let game = self.get_game(game_id).await?;
        let situation = game.situation.end().inspect_err(|e| {
            obs::emit_rejected(&game_id.to_string(), "end_game", e);
        })?;
        let game = game.with_situation(situation);
        self.store.save_game(&game.to_record()).await?;

        METRICS.inc_games_finalised();
        obs::emit_game_ended(&game_id.to_string(), &game.situation);
        Ok(game)
    }

    // -- at-bats --

    /// Record the current batter's at-bat and advance the game.
    ///
    /// The at-bat and the new situation are written together; on any error
    /// nothing is written.
    #[instrument(skip_all, fields(game_id = %request.game_id, outcome = %request.play.outcome))]
    pub async fn record_at_bat(&self, request: RecordAtBat) -> Result<RecordedAtBat> {
        request.validate().inspect_err(|e| {
            obs::emit_rejected(&request.game_id.to_string(), "record_at_bat", e);
        })?;
        let game = self.get_game(&request.game_id).await?;
        game.situation.ensure_in_progress().inspect_err(|e| {
            obs::emit_rejected(&request.game_id.to_string(), "record_at_bat", e);
        })?;

        let sequence = match self.store.last_at_bat(&request.game_id).await? {
            Some(last) => last.sequence + 1,
            None => 1,
        };

        let applied = apply_at_bat(&game.situation, game.is_home, &request.play);
        debug!(
            outs_recorded = applied.stamp.outs_recorded,
            runs = request.play.runs(),
            "at-bat applied"
        );

        let at_bat = AtBat {
            id: AtBatId::new(),
            game_id: request.game_id,
            player_id: request.player_id,
            sequence,
            play: request.play,
            stamp: applied.stamp,
            pitch_count: request.pitch_count,
            stolen_bases: request.stolen_bases,
            caught_stealing: request.caught_stealing,
            notes: request.notes,
            created_at: chrono::Utc::now(),
        };
        let game = game.with_situation(applied.situation);
        self.store
            .append_at_bat(&at_bat.to_record(), &game.to_record())
            .await?;

        METRICS.inc_at_bats_recorded();
        obs::emit_at_bat_recorded(
            &game.id.to_string(),
            sequence,
            at_bat.outcome(),
            &game.situation,
        );
        Ok(RecordedAtBat {
            at_bat,
            situation: game.situation,
        })
    }

    /// Undo the most recent at-bat of a game, restoring the situation it
    /// was recorded against.
    #[instrument(skip_all, fields(game_id = %game_id, at_bat_id = %at_bat_id))]
    pub async fn undo_at_bat(&self, game_id: &GameId, at_bat_id: &AtBatId) -> Result<Situation> {
        let at_bat = AtBat::try_from(self.store.get_at_bat(game_id, at_bat_id).await?)?;

        let is_last = self
            .store
            .last_at_bat(game_id)
            .await?
            .is_some_and(|last| last.id == *at_bat_id);
        if !is_last {
            let err = ScorebookError::Conflict("can only undo the most recent at-bat".to_string());
            obs::emit_rejected(&game_id.to_string(), "undo_at_bat", &err);
            return Err(err);
        }

        let game = self.get_game(game_id).await?;
        let before = reverse_at_bat(&game.situation, game.is_home, &at_bat.play, &at_bat.stamp);
        let game = game.with_situation(before);
        self.store
            .remove_last_at_bat(at_bat_id, &game.to_record())
            .await?;

        METRICS.inc_at_bats_undone();
        obs::emit_at_bat_undone(
            &game_id.to_string(),
            at_bat.sequence,
            at_bat.outcome(),
            &before,
        );
        Ok(before)
    }

    /// At-bats of a game in sequence order.
    pub async fn list_at_bats(&self, game_id: &GameId) -> Result<Vec<AtBat>> {
        let records = self.store.list_at_bats(game_id).await?;
        records
            .into_iter()
            .map(|r| AtBat::try_from(r).map_err(ScorebookError::from))
            .collect()
    }

    // -- pitching --

    /// Open a pitching appearance. `order` defaults to one past the last
    /// appearance of the game, so the first pitcher in is the starter.
    #[instrument(skip_all, fields(game_id = %game_id, player_id = %player_id))]
    pub async fn add_pitching_appearance(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
        order: Option<u32>,
    ) -> Result<PitchingAppearanceRecord> {
        let order = match order {
            Some(order) => order,
            None => {
                let existing = self.store.list_appearances(game_id).await?;
                existing
                    .iter()
                    .map(|a| a.appearance_order)
                    .max()
                    .unwrap_or(0)
                    + 1
            }
        };

        let appearance = PitchingAppearanceRecord::new(*game_id, *player_id, order);
        self.store.put_appearance(&appearance).await?;
        debug!(appearance_id = %appearance.id, order, "pitching appearance opened");
        Ok(appearance)
    }

    /// Overwrite the supplied fields of an appearance.
    #[instrument(skip_all, fields(game_id = %game_id, appearance_id = %appearance_id))]
    pub async fn update_pitching_appearance(
        &self,
        game_id: &GameId,
        appearance_id: &AppearanceId,
        correction: &PitchingCorrection,
    ) -> Result<PitchingAppearanceRecord> {
        let mut appearance = self.store.get_appearance(game_id, appearance_id).await?;
        correction.apply(&mut appearance);
        self.store.put_appearance(&appearance).await?;

        obs::emit_pitching_updated(
            &game_id.to_string(),
            &appearance_id.to_string(),
            appearance.outs_recorded,
        );
        Ok(appearance)
    }

    pub async fn list_pitching_appearances(
        &self,
        game_id: &GameId,
    ) -> Result<Vec<PitchingAppearanceRecord>> {
        Ok(self.store.list_appearances(game_id).await?)
    }

    // -- stats --

    #[instrument(skip_all, fields(game_id = %game_id))]
    pub async fn box_score(&self, game_id: &GameId) -> Result<BoxScore> {
        let game = self.get_game(game_id).await?;
        let at_bats = self.list_at_bats(game_id).await?;
        let appearances = self.store.list_appearances(game_id).await?;
        Ok(build_box_score(
            &game,
            &at_bats,
            &appearances,
            self.sport.game_innings(),
        ))
    }

    /// Season batting line of a player over final games.
    #[instrument(skip_all, fields(player_id = %player_id))]
    pub async fn player_batting_stats(&self, player_id: &PlayerId) -> Result<BattingStatsOutput> {
        let mut at_bats = Vec::new();
        for game in self.final_games().await? {
            at_bats.extend(
                self.list_at_bats(&game.id)
                    .await?
                    .into_iter()
                    .filter(|ab| ab.player_id == *player_id),
            );
        }
        Ok(compute_batting_line(&batting_counts(&at_bats)))
    }

    /// Season pitching line of a player over final games.
    #[instrument(skip_all, fields(player_id = %player_id))]
    pub async fn player_pitching_stats(
        &self,
        player_id: &PlayerId,
    ) -> Result<PitchingStatsOutput> {
        let mut appearances = Vec::new();
        for game in self.final_games().await? {
            appearances.extend(
                self.store
                    .list_appearances(&game.id)
                    .await?
                    .into_iter()
                    .filter(|a| a.player_id == *player_id),
            );
        }
        Ok(compute_pitching_line(
            &pitching_counts(&appearances),
            self.sport.game_innings(),
        ))
    }

    /// Batting line of every player who batted in a final game, most plate
    /// appearances first.
    #[instrument(skip_all)]
    pub async fn team_batting_stats(&self) -> Result<Vec<PlayerBattingLine>> {
        let mut at_bats = Vec::new();
        for game in self.final_games().await? {
            at_bats.extend(self.list_at_bats(&game.id).await?);
        }
        Ok(batting_lines(&at_bats))
    }

    /// Pitching line of every pitcher who appeared in a final game, most
    /// outs recorded first.
    #[instrument(skip_all)]
    pub async fn team_pitching_stats(&self) -> Result<Vec<PitcherLine>> {
        let mut appearances = Vec::new();
        for game in self.final_games().await? {
            appearances.extend(self.store.list_appearances(&game.id).await?);
        }
        Ok(pitcher_lines(&appearances, self.sport.game_innings()))
    }

    /// Win/loss record over final games.
    #[instrument(skip_all)]
    pub async fn team_record(&self) -> Result<TeamStatsOutput> {
        let games = self.list_games().await?;
        Ok(compute_team_record(&team_counts(&games)))
    }

    async fn final_games(&self) -> Result<Vec<Game>> {
        let mut games = self.list_games().await?;
        games.retain(|g| g.situation.status == GameStatus::Final);
        Ok(games)
    }
}
