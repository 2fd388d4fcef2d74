//! Command line front end
//!
//! # Subcommands
//!
//! - `play` (default) - Interactive game in the terminal
//! - `best-move` - Print the AI's choice after a sequence of moves
//! - `settings` - Show, override and save preferences
//!
//! Flags given to `play` or `settings` override the saved settings for that
//! run; `settings --save` writes the result back.

pub mod commands;
pub mod game_loop;
pub mod render;

use anyhow::{Context, Result};
use chess_engine::{game_status, make_move, move_notation, search_best_move, Color, GameStatus};
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::core::{load_settings, save_settings, get_settings_path, GameSettings, PlayMode};
use crate::game::ai::{AIDifficulty, ChessAIResource};
use crate::game::Session;
use commands::parse_coordinate_move;

#[derive(Parser, Debug)]
#[command(name = "chessmate", author, version, about = "Terminal chess against a minimax AI", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play(SettingsOverrides),

    /// Print the AI's move for a position
    BestMove(BestMoveArgs),

    /// Show the effective settings, optionally saving them
    Settings(SettingsArgs),
}

/// Settings flags that override the saved file for one run
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsOverrides {
    /// Opponent: another human or the AI
    #[arg(long, value_enum)]
    pub mode: Option<PlayMode>,

    /// AI search depth preset
    #[arg(long, value_enum)]
    pub difficulty: Option<AIDifficulty>,

    /// Color the AI plays
    #[arg(long, value_parser = parse_color)]
    pub ai_color: Option<Color>,

    /// Pause before each AI move, in milliseconds
    #[arg(long)]
    pub ai_delay_ms: Option<u64>,
}

impl SettingsOverrides {
    pub fn apply(&self, mut settings: GameSettings) -> GameSettings {
        if let Some(mode) = self.mode {
            settings.mode = mode;
        }
        if let Some(difficulty) = self.difficulty {
            settings.difficulty = difficulty;
        }
        if let Some(ai_color) = self.ai_color {
            settings.ai_color = ai_color;
        }
        if let Some(ai_delay_ms) = self.ai_delay_ms {
            settings.ai_delay_ms = ai_delay_ms;
        }
        settings
    }
}

#[derive(Args, Debug)]
pub struct BestMoveArgs {
    /// AI search depth preset
    #[arg(long, value_enum, default_value = "medium")]
    pub difficulty: AIDifficulty,

    /// Search depth in plies, overrides --difficulty
    #[arg(long)]
    pub depth: Option<u32>,

    /// Moves played from the starting position, e.g. e2e4 e7e5
    pub moves: Vec<String>,
}

#[derive(Args, Debug)]
pub struct SettingsArgs {
    #[command(flatten)]
    pub overrides: SettingsOverrides,

    /// Write the settings file
    #[arg(long)]
    pub save: bool,
}

/// Parse `white`/`black` (or `w`/`b`)
pub fn parse_color(text: &str) -> Result<Color, String> {
    match text.to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        other => Err(format!("expected 'white' or 'black', got {other:?}")),
    }
}

/// Dispatch a parsed command line
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None => game_loop::run_game(load_settings()).await,
        Some(Command::Play(overrides)) => {
            game_loop::run_game(overrides.apply(load_settings())).await
        }
        Some(Command::BestMove(args)) => best_move(&args),
        Some(Command::Settings(args)) => settings(&args),
    }
}

fn best_move(args: &BestMoveArgs) -> Result<()> {
    let mut session = Session::new(ChessAIResource::vs_human());
    for text in &args.moves {
        let (from, to, promotion) = parse_coordinate_move(text)?;
        session
            .move_piece(from, to, promotion)
            .with_context(|| format!("playing {text}"))?;
    }

    if session.is_over() {
        println!("{}", render::status_line(&session));
        return Ok(());
    }

    let color = session.side_to_move();
    let depth = args.depth.unwrap_or_else(|| args.difficulty.depth());
    debug!("[AI] best-move for {} at depth {}", color, depth);

    let outcome = search_best_move(session.board(), color, depth);
    let Some(mv) = outcome.best_move else {
        println!("{color} has no legal move");
        return Ok(());
    };

    let (after, _) = make_move(session.board(), mv.from, mv.to, mv.promotion)?;
    let status = game_status(&after, color.opponent());
    let notation = move_notation(
        &mv,
        session.board(),
        matches!(status, GameStatus::Check | GameStatus::Checkmate),
        status == GameStatus::Checkmate,
    );

    println!(
        "{notation} ({}{}) score {} | depth {} | {} nodes | {} cutoffs",
        mv.from, mv.to, outcome.score, depth, outcome.nodes, outcome.cutoffs
    );
    Ok(())
}

fn settings(args: &SettingsArgs) -> Result<()> {
    let settings = args.overrides.apply(load_settings());
    println!("{}", serde_json::to_string_pretty(&settings)?);

    if args.save {
        let path = save_settings(&settings).context("saving settings")?;
        println!("Saved to {}", path.display());
    } else {
        println!("Settings file: {}", get_settings_path().display());
    }
    Ok(())
}
