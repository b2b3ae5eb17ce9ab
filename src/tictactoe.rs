//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod grid;
pub mod lines;
pub mod moves;
pub mod validation;

pub use board::{BOARD_SIZE, BoardState, CENTER, CORNERS, Player, PositionSet, SIDES};
pub use game::{Game, GameStatus};
pub use grid::{Cell, Grid, PositionLists};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use moves::{Move, MoveValidator};
