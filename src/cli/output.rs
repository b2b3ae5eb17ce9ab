//! Output formatting for CLI

use anyhow::Result;
use serde::Serialize;

use crate::tictactoe::{GameStatus, Grid};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:16} {}", format!("{}:", key), value);
}

/// Print a grid as three indented rows
pub fn print_grid(grid: &Grid) {
    for row in grid.to_string().lines() {
        println!("  {row}");
    }
}

/// Pretty-printed JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// The end-of-game message shown to the player
pub fn status_message(status: GameStatus) -> String {
    match status {
        GameStatus::InProgress => String::new(),
        GameStatus::Draw => "Game over. It's a draw.".to_string(),
        GameStatus::Won(player) => format!("Game over. The winner is {player}"),
    }
}
