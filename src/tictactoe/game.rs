//! High-level game management

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    board::{BoardState, Player},
    grid::Grid,
    moves::{Move, MoveValidator},
};
use crate::{
    config::EngineConfig,
    strategy::{Decision, DecisionEngine, RandomTieBreaker, TieBreaker},
};

/// Status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    /// Derive the status from the marks on a board
    pub fn of(board: &BoardState) -> Self {
        match board.winner() {
            Some(player) => GameStatus::Won(player),
            None if board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// A game between a human (or any external caller) and the engine
///
/// The game owns its board and its engine. Human moves go through
/// [`Game::player_marks`]; engine moves through [`Game::computer_plays`] or
/// [`Game::computer_marks`].
#[derive(Debug, Clone)]
pub struct Game<T = RandomTieBreaker> {
    board: BoardState,
    engine: DecisionEngine<T>,
    history: Vec<Move>,
}

impl Game<RandomTieBreaker> {
    /// Create a new game on an empty board with entropy-seeded tie-breaks
    pub fn new() -> Self {
        Self::from_board(BoardState::new())
    }

    /// Create a game from each player's positions.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidState`] if the positions do not form a
    /// reachable board (see [`BoardState::from_positions`]).
    pub fn from_positions(first: &[usize], second: &[usize]) -> Result<Self, crate::Error> {
        BoardState::from_positions(first, second).map(Self::from_board)
    }

    /// Create a game from a grid of cells.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidState`] if the grid's piece counts do
    /// not describe alternating turns with X moving first.
    pub fn from_grid(grid: &Grid) -> Result<Self, crate::Error> {
        grid.to_board().map(Self::from_board)
    }

    pub fn from_board(board: BoardState) -> Self {
        Self::with_config(board, &EngineConfig::default())
    }

    /// Create a game whose tie-breaks follow `config`
    pub fn with_config(board: BoardState, config: &EngineConfig) -> Self {
        Self::with_tie_breaker(board, config.tie_breaker())
    }
}

impl Default for Game<RandomTieBreaker> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TieBreaker> Game<T> {
    /// Create a game with a caller-supplied tie-break source
    pub fn with_tie_breaker(board: BoardState, tie_breaker: T) -> Self {
        Game {
            board,
            engine: DecisionEngine::new(tie_breaker),
            history: Vec::new(),
        }
    }

    /// Mark (`row`, `col`) for `player`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the game has ended, and
    /// otherwise fails like [`MoveValidator::player_marks`]. The board is
    /// unchanged on error.
    pub fn player_marks(
        &mut self,
        player: Player,
        row: usize,
        col: usize,
    ) -> Result<Move, crate::Error> {
        self.ensure_in_progress()?;
        let mv = MoveValidator::player_marks(&mut self.board, player, row, col)?;
        self.record(mv);
        Ok(mv)
    }

    /// Mark a linear position (0-8) for `player`.
    ///
    /// # Errors
    ///
    /// Same as [`Game::player_marks`], with
    /// [`crate::Error::InvalidPosition`] for positions off the board.
    pub fn player_marks_position(
        &mut self,
        player: Player,
        position: usize,
    ) -> Result<Move, crate::Error> {
        self.ensure_in_progress()?;
        let mv = MoveValidator::player_marks_position(&mut self.board, player, position)?;
        self.record(mv);
        Ok(mv)
    }

    /// Let the engine move for `player`.
    ///
    /// Does nothing and returns `None` when the game is already over.
    pub fn computer_plays(&mut self, player: Player) -> Option<Decision> {
        if self.is_over() {
            debug!(%player, status = ?self.status(), "game over, engine does not move");
            return None;
        }
        let decision = self.engine.play(&mut self.board, player)?;
        self.record(Move {
            player,
            position: decision.position,
        });
        Some(decision)
    }

    /// Let the engine move for whichever player's turn it is
    pub fn computer_marks(&mut self) -> Option<Decision> {
        self.computer_plays(self.next_player())
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Each player's positions in ascending order, X first
    pub fn positions(&self) -> [Vec<usize>; 2] {
        self.board.position_lists()
    }

    pub fn grid(&self) -> Grid {
        Grid::from_board(&self.board)
    }

    pub fn winner(&self) -> Option<Player> {
        self.board.winner()
    }

    /// True once a player has a line or no position is left
    pub fn is_over(&self) -> bool {
        self.board.is_over()
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::of(&self.board)
    }

    /// Player whose turn it is, judging by the piece counts
    pub fn next_player(&self) -> Player {
        self.board.next_player()
    }

    /// Moves made through this game, oldest first
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    fn ensure_in_progress(&self) -> Result<(), crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }
        Ok(())
    }

    fn record(&mut self, mv: Move) {
        self.history.push(mv);
    }
}
