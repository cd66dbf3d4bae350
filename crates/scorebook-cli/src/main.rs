//! Scorebook CLI
//!
//! The `scorebook` command scores games at-bat by at-bat and reports
//! sabermetric statistics from a local JSON store.
//!
//! ## Commands
//!
//! - `game`: schedule, start, end, show and list games
//! - `at-bat`: record, undo and list at-bats
//! - `pitching`: open and correct pitching appearances
//! - `stats`: player and roster lines, team record and box scores

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, Level};

use scorebook_core::metrics::METRICS;
use scorebook_core::{
    parse_id, AppearanceId, AtBatId, Game, GameId, Half, Outcome, PitchingCorrection, PlayerId,
    RecordAtBat, ScorebookConfig, ScoringEngine, Situation, Sport,
};
use scorebook_state::JsonFileStore;

type Engine = ScoringEngine<JsonFileStore>;

#[derive(Parser)]
#[command(name = "scorebook")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Baseball and softball scorebook with sabermetric stats", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    /// Path of the JSON game store (overrides SCOREBOOK_STORE)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// baseball or softball (overrides SCOREBOOK_SPORT)
    #[arg(long, global = true)]
    sport: Option<Sport>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Schedule and run games
    Game {
        #[command(subcommand)]
        action: GameAction,
    },

    /// Record or undo plate appearances
    #[command(name = "at-bat")]
    AtBat {
        #[command(subcommand)]
        action: AtBatAction,
    },

    /// Pitching appearances
    Pitching {
        #[command(subcommand)]
        action: PitchingAction,
    },

    /// Derived statistics
    Stats {
        #[command(subcommand)]
        action: StatsAction,
    },
}

#[derive(Subcommand)]
enum GameAction {
    /// Schedule a new game
    New {
        /// Opponent name
        opponent: String,

        /// We are the home team
        #[arg(long)]
        home: bool,

        /// Scheduled innings (default: 9 baseball, 7 softball)
        #[arg(long)]
        innings: Option<u32>,
    },
    /// Start a scheduled game
    Start { game: String },
    /// Finish a game in progress
    End { game: String },
    /// Show the current situation
    Show { game: String },
    /// List all games
    List,
}

#[derive(Subcommand)]
enum AtBatAction {
    /// Record the current batter's result
    Record {
        game: String,
        player: String,
        /// Outcome token, e.g. single, home_run, strikeout_looking
        outcome: Outcome,

        #[arg(long, default_value = "0")]
        rbi: u32,

        /// A run scored without an RBI (wild pitch, passed ball)
        #[arg(long)]
        runner_scored: bool,

        #[arg(long)]
        pitches: Option<u32>,

        #[arg(long, default_value = "0")]
        stolen_bases: u32,

        #[arg(long, default_value = "0")]
        caught_stealing: u32,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Undo the most recent at-bat
    Undo { game: String, at_bat: String },
    /// List the at-bats of a game
    List { game: String },
}

#[derive(Subcommand)]
enum PitchingAction {
    /// A pitcher enters the game
    Add {
        game: String,
        player: String,
        /// Appearance order (default: next after the last pitcher)
        #[arg(long)]
        order: Option<u32>,
    },
    /// Correct the line of an appearance; only supplied fields change
    Update {
        game: String,
        appearance: String,
        #[arg(long)]
        outs: Option<u32>,
        #[arg(long)]
        hits: Option<u32>,
        #[arg(long)]
        runs: Option<u32>,
        #[arg(long)]
        earned_runs: Option<u32>,
        #[arg(long)]
        walks: Option<u32>,
        #[arg(long)]
        strikeouts: Option<u32>,
        #[arg(long)]
        home_runs: Option<u32>,
        #[arg(long)]
        hit_batters: Option<u32>,
        #[arg(long)]
        pitches: Option<u32>,
        #[arg(long)]
        strikes: Option<u32>,
        #[arg(long)]
        balls: Option<u32>,
        #[arg(long)]
        wild_pitches: Option<u32>,
        #[arg(long)]
        balks: Option<u32>,
        #[arg(long)]
        win: Option<bool>,
        #[arg(long)]
        loss: Option<bool>,
        #[arg(long)]
        save: Option<bool>,
        #[arg(long)]
        hold: Option<bool>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List the appearances of a game
    List { game: String },
}

#[derive(Subcommand)]
enum StatsAction {
    /// Batting line of a player over final games
    Batting { player: String },
    /// Pitching line of a player over final games
    Pitching { player: String },
    /// Every batter's line over final games
    BattingAll,
    /// Every pitcher's line over final games
    PitchingAll,
    /// Team record over final games
    Team,
    /// Box score of one game
    BoxScore { game: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ScorebookConfig::from_env().context("invalid SCOREBOOK_* environment")?;
    if let Some(store) = cli.store.clone() {
        config = config.with_store_path(store);
    }
    if let Some(sport) = cli.sport {
        config = config.with_sport(sport);
    }
    let json_logs = config.json_logs || cli.json;
    config = config.with_json_logs(json_logs);

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    scorebook_core::init_tracing(config.json_logs, level);
    debug!(store = %config.store_path.display(), sport = %config.sport, "configuration loaded");

    let store = JsonFileStore::open(&config.store_path).with_context(|| {
        format!(
            "failed to open game store at {}",
            config.store_path.display()
        )
    })?;
    let engine = ScoringEngine::new(store).with_sport(config.sport);

    let result = run(&engine, cli.command).await;
    METRICS.flush();
    result
}

async fn run(engine: &Engine, command: Commands) -> Result<()> {
    match command {
        Commands::Game { action } => match action {
            GameAction::New {
                opponent,
                home,
                innings,
            } => cmd_game_new(engine, &opponent, home, innings).await,
            GameAction::Start { game } => cmd_game_start(engine, &game).await,
            GameAction::End { game } => cmd_game_end(engine, &game).await,
            GameAction::Show { game } => cmd_game_show(engine, &game).await,
            GameAction::List => cmd_game_list(engine).await,
        },
        Commands::AtBat { action } => match action {
            AtBatAction::Record {
                game,
                player,
                outcome,
                rbi,
                runner_scored,
                pitches,
                stolen_bases,
                caught_stealing,
                notes,
            } => {
                let mut request = RecordAtBat::new(
                    parse_id::<GameId>(&game)?,
                    parse_id::<PlayerId>(&player)?,
                    outcome,
                )
                .rbi(rbi)
                .runner_scored(runner_scored)
                .stolen_bases(stolen_bases)
                .caught_stealing(caught_stealing);
                if let Some(pitches) = pitches {
                    request = request.pitch_count(pitches);
                }
                if let Some(notes) = notes {
                    request = request.notes(notes);
                }
                cmd_at_bat_record(engine, request).await
            }
            AtBatAction::Undo { game, at_bat } => cmd_at_bat_undo(engine, &game, &at_bat).await,
            AtBatAction::List { game } => cmd_at_bat_list(engine, &game).await,
        },
        Commands::Pitching { action } => match action {
            PitchingAction::Add {
                game,
                player,
                order,
            } => cmd_pitching_add(engine, &game, &player, order).await,
            PitchingAction::Update {
                game,
                appearance,
                outs,
                hits,
                runs,
                earned_runs,
                walks,
                strikeouts,
                home_runs,
                hit_batters,
                pitches,
                strikes,
                balls,
                wild_pitches,
                balks,
                win,
                loss,
                save,
                hold,
                notes,
            } => {
                let correction = PitchingCorrection {
                    outs_recorded: outs,
                    hits_allowed: hits,
                    runs_allowed: runs,
                    earned_runs,
                    walks,
                    strikeouts,
                    home_runs_allowed: home_runs,
                    hit_batters,
                    pitches_thrown: pitches,
                    strikes_thrown: strikes,
                    balls_thrown: balls,
                    wild_pitches,
                    balks,
                    is_winner: win,
                    is_loser: loss,
                    is_save: save,
                    is_hold: hold,
                    notes,
                };
                cmd_pitching_update(engine, &game, &appearance, &correction).await
            }
            PitchingAction::List { game } => cmd_pitching_list(engine, &game).await,
        },
        Commands::Stats { action } => match action {
            StatsAction::Batting { player } => {
                let player = parse_id::<PlayerId>(&player)?;
                print_json(&engine.player_batting_stats(&player).await?)
            }
            StatsAction::Pitching { player } => {
                let player = parse_id::<PlayerId>(&player)?;
                print_json(&engine.player_pitching_stats(&player).await?)
            }
            StatsAction::BattingAll => print_json(&engine.team_batting_stats().await?),
            StatsAction::PitchingAll => print_json(&engine.team_pitching_stats().await?),
            StatsAction::Team => print_json(&engine.team_record().await?),
            StatsAction::BoxScore { game } => {
                let game = parse_id::<GameId>(&game)?;
                print_json(&engine.box_score(&game).await?)
            }
        },
    }
}

// -- games --

async fn cmd_game_new(
    engine: &Engine,
    opponent: &str,
    is_home: bool,
    innings: Option<u32>,
) -> Result<()> {
    let game = engine
        .schedule_game(opponent, is_home, innings)
        .await
        .context("failed to schedule game")?;
    println!("Scheduled {} vs {}", game.id, game.opponent_name);
    Ok(())
}

async fn cmd_game_start(engine: &Engine, game: &str) -> Result<()> {
    let game = engine
        .start_game(&parse_id(game)?)
        .await
        .context("failed to start game")?;
    println!("{}", describe_game(&game));
    Ok(())
}

async fn cmd_game_end(engine: &Engine, game: &str) -> Result<()> {
    let game = engine
        .end_game(&parse_id(game)?)
        .await
        .context("failed to end game")?;
    println!("{}", describe_game(&game));
    Ok(())
}

async fn cmd_game_show(engine: &Engine, game: &str) -> Result<()> {
    let game = engine.get_game(&parse_id(game)?).await?;
    println!("{}", describe_game(&game));
    Ok(())
}

async fn cmd_game_list(engine: &Engine) -> Result<()> {
    let games = engine.list_games().await?;
    if games.is_empty() {
        println!("No games scheduled");
        return Ok(());
    }
    for game in games {
        println!("{}  {}", game.id, describe_game(&game));
    }
    Ok(())
}

// -- at-bats --

async fn cmd_at_bat_record(engine: &Engine, request: RecordAtBat) -> Result<()> {
    let recorded = engine
        .record_at_bat(request)
        .await
        .context("failed to record at-bat")?;
    println!(
        "#{} {} {} -> {}",
        recorded.at_bat.sequence,
        recorded.at_bat.id,
        recorded.at_bat.outcome(),
        describe_situation(&recorded.situation)
    );
    Ok(())
}

async fn cmd_at_bat_undo(engine: &Engine, game: &str, at_bat: &str) -> Result<()> {
    let situation = engine
        .undo_at_bat(&parse_id::<GameId>(game)?, &parse_id::<AtBatId>(at_bat)?)
        .await
        .context("failed to undo at-bat")?;
    println!("Undone -> {}", describe_situation(&situation));
    Ok(())
}

async fn cmd_at_bat_list(engine: &Engine, game: &str) -> Result<()> {
    let at_bats = engine.list_at_bats(&parse_id(game)?).await?;
    for ab in at_bats {
        println!(
            "#{:<3} {} {:<6} {:<20} rbi={} batter={}",
            ab.sequence,
            ab.stamp.inning,
            half_label(ab.stamp.half),
            ab.outcome(),
            ab.play.rbi,
            ab.player_id
        );
    }
    Ok(())
}

// -- pitching --

async fn cmd_pitching_add(
    engine: &Engine,
    game: &str,
    player: &str,
    order: Option<u32>,
) -> Result<()> {
    let appearance = engine
        .add_pitching_appearance(&parse_id(game)?, &parse_id(player)?, order)
        .await
        .context("failed to add pitching appearance")?;
    println!(
        "Appearance {} (order {})",
        appearance.id, appearance.appearance_order
    );
    Ok(())
}

async fn cmd_pitching_update(
    engine: &Engine,
    game: &str,
    appearance: &str,
    correction: &PitchingCorrection,
) -> Result<()> {
    if correction.is_empty() {
        anyhow::bail!("nothing to update; pass at least one field");
    }
    let updated = engine
        .update_pitching_appearance(
            &parse_id::<GameId>(game)?,
            &parse_id::<AppearanceId>(appearance)?,
            correction,
        )
        .await
        .context("failed to update pitching appearance")?;
    print_json(&updated)
}

async fn cmd_pitching_list(engine: &Engine, game: &str) -> Result<()> {
    let appearances = engine.list_pitching_appearances(&parse_id(game)?).await?;
    print_json(&appearances)
}

// -- output --

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn half_label(half: Half) -> &'static str {
    match half {
        Half::Top => "top",
        Half::Bottom => "bottom",
    }
}

fn describe_situation(s: &Situation) -> String {
    let outs = if s.outs == 1 { "out" } else { "outs" };
    format!(
        "{}-{}, {} {}, {} {} [{}]",
        s.our_score,
        s.opponent_score,
        half_label(s.half),
        s.inning,
        s.outs,
        outs,
        s.status
    )
}

fn describe_game(game: &Game) -> String {
    let venue = if game.is_home { "vs" } else { "at" };
    format!(
        "{} {}: {}",
        venue,
        game.opponent_name,
        describe_situation(&game.situation)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorebook_core::GameStatus;

    #[test]
    fn test_parse_record_command() {
        let game = GameId::new().to_string();
        let player = PlayerId::new().to_string();
        let cli = Cli::try_parse_from([
            "scorebook",
            "--sport",
            "softball",
            "at-bat",
            "record",
            &game,
            &player,
            "home_run",
            "--rbi",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.sport, Some(Sport::Softball));
        match cli.command {
            Commands::AtBat {
                action:
                    AtBatAction::Record {
                        outcome,
                        rbi,
                        runner_scored,
                        ..
                    },
            } => {
                assert_eq!(outcome, Outcome::HomeRun);
                assert_eq!(rbi, 3);
                assert!(!runner_scored);
            }
            _ => panic!("expected at-bat record"),
        }
    }

    #[test]
    fn test_parse_roster_stats_commands() {
        let cli = Cli::try_parse_from(["scorebook", "stats", "batting-all"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Stats {
                action: StatsAction::BattingAll
            }
        ));
        let cli = Cli::try_parse_from(["scorebook", "stats", "pitching-all"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Stats {
                action: StatsAction::PitchingAll
            }
        ));
    }

    #[test]
    fn test_unknown_outcome_rejected_by_parser() {
        let result = Cli::try_parse_from(["scorebook", "at-bat", "record", "g", "p", "homer"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_describe_situation() {
        let s = Situation {
            status: GameStatus::InProgress,
            our_score: 3,
            opponent_score: 2,
            inning: 4,
            half: Half::Bottom,
            outs: 1,
        };
        assert_eq!(describe_situation(&s), "3-2, bottom 4, 1 out [in_progress]");
    }

    #[tokio::test]
    async fn test_commands_against_json_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("book.json")).unwrap();
        let engine = ScoringEngine::new(store);

        let game = engine.schedule_game("Rivals", false, None).await.unwrap();
        let game_id = game.id.to_string();
        cmd_game_start(&engine, &game_id).await.unwrap();

        let batter = PlayerId::new();
        let request = RecordAtBat::new(game.id, batter, Outcome::Double).rbi(1);
        cmd_at_bat_record(&engine, request).await.unwrap();
        cmd_at_bat_list(&engine, &game_id).await.unwrap();

        let oversized = RecordAtBat::new(game.id, batter, Outcome::HomeRun).rbi(u32::MAX);
        let err = cmd_at_bat_record(&engine, oversized).await.unwrap_err();
        assert!(format!("{err:#}").contains("out of range"));

        cmd_game_end(&engine, &game_id).await.unwrap();

        let err = cmd_game_start(&engine, &game_id).await.unwrap_err();
        assert!(format!("{err:#}").contains("game already started or finished"));

        let err = cmd_game_show(&engine, "not-a-uuid").await.unwrap_err();
        assert!(err.to_string().contains("invalid identifier"));

        let empty = PitchingCorrection::default();
        assert!(cmd_pitching_update(&engine, &game_id, "x", &empty)
            .await
            .is_err());

        run(
            &engine,
            Commands::Stats {
                action: StatsAction::Team,
            },
        )
        .await
        .unwrap();
        run(
            &engine,
            Commands::Stats {
                action: StatsAction::BattingAll,
            },
        )
        .await
        .unwrap();
        let record = engine.team_record().await.unwrap();
        assert_eq!(record.record, "1-0");
    }
}
