//! Error types for the noughts crate

use thiserror::Error;

use crate::tictactoe::Player;

/// Reasons a pair of position collections cannot form a board
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateViolation {
    #[error("position {position} is outside the grid (must be 0-8)")]
    OutOfRange { position: usize },

    #[error("position {position} is listed twice for player {player}")]
    Duplicate { player: Player, position: usize },

    #[error("position {position} is claimed by both players")]
    Overlap { position: usize },

    #[error(
        "invalid piece counts: first={first}, second={second} (must be equal or first ahead by 1)"
    )]
    TurnMismatch { first: usize, second: usize },
}

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid board state: {0}")]
    InvalidState(#[from] StateViolation),

    #[error("cell ({row}, {col}) is out of bounds (row and column must be 0-2)")]
    OutOfBounds { row: usize, col: usize },

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("invalid move: position {position} is already occupied by {by}")]
    Occupied { position: usize, by: Player },

    #[error("game already over")]
    GameOver,

    #[error("invalid player id {id} (expected 0 or 1)")]
    InvalidPlayer { id: u8 },

    #[error("wrong board length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
