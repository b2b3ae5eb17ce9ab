//! Play command - Play one round from a given position
//!
//! A round is what a front end asks for on every request: take the current
//! grid, apply the human move if there is one, and let the engine answer.

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::info;

use crate::{
    cli::output::{print_grid, print_json, print_kv, print_section, status_message},
    config::EngineConfig,
    strategy::Decision,
    tictactoe::{Game, GameStatus, Grid, Move, Player},
};

/// Who opens the round when no human move is given
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FirstMover {
    #[default]
    Human,
    Computer,
}

#[derive(Parser, Debug)]
#[command(about = "Play one round against the engine")]
pub struct PlayArgs {
    /// Current grid: nine cells (X, O or .), rows optionally separated by '/'
    #[arg(long, default_value = ".........")]
    pub grid: String,

    /// Who moves first when no human move is given
    #[arg(long, value_enum, default_value_t = FirstMover::Human)]
    pub first: FirstMover,

    /// Row of the human move (0-2)
    #[arg(long, requires = "col")]
    pub row: Option<usize>,

    /// Column of the human move (0-2)
    #[arg(long, requires = "row")]
    pub col: Option<usize>,

    /// Random seed for reproducible tie-breaks
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of one round
#[derive(Debug, Clone, Serialize)]
pub struct RoundReport {
    pub grid: Grid,
    pub positions: [Vec<usize>; 2],
    pub human_move: Option<Move>,
    pub engine_move: Option<Decision>,
    pub status: GameStatus,
    pub game_over: bool,
    pub current_player: Player,
    pub message: String,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let report = play_round(&args)?;

    if args.json {
        return print_json(&report);
    }

    print_section("Round");
    if let Some(mv) = report.human_move {
        print_kv("Human", &format!("{} at ({}, {})", mv.player, mv.row(), mv.col()));
    }
    if let Some(decision) = report.engine_move {
        print_kv(
            "Engine",
            &format!(
                "{} at {} ({})",
                decision.player, decision.position, decision.tactic
            ),
        );
    }
    print_grid(&report.grid);
    if report.game_over {
        println!("\n{}", report.message);
    } else {
        print_kv("To move", &report.current_player.to_string());
    }
    Ok(())
}

/// Run one round as described by `args`
pub fn play_round(args: &PlayArgs) -> Result<RoundReport> {
    let grid: Grid = args.grid.parse()?;
    let config = EngineConfig::new().with_optional_seed(args.seed);
    let mut game = Game::with_config(grid.to_board()?, &config);

    let human_move = match (args.row, args.col) {
        (Some(row), Some(col)) => {
            if args.first == FirstMover::Computer {
                bail!("--row/--col cannot be combined with --first computer");
            }
            let player = game.next_player();
            Some(game.player_marks(player, row, col)?)
        }
        _ => None,
    };

    let engine_move = if human_move.is_some() || args.first == FirstMover::Computer {
        game.computer_marks()
    } else {
        None
    };
    if let Some(decision) = engine_move {
        info!(position = decision.position, tactic = %decision.tactic, "engine answered");
    }

    let status = game.status();
    Ok(RoundReport {
        grid: game.grid(),
        positions: game.positions(),
        human_move,
        engine_move,
        status,
        game_over: status.is_over(),
        current_player: game.next_player(),
        message: status_message(status),
    })
}
