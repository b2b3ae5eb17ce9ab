//! Validation and application of externally supplied moves

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::board::{BOARD_SIZE, BoardState, Player};

/// A committed move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub player: Player,
    pub position: usize,
}

impl Move {
    pub fn row(&self) -> usize {
        self.position / 3
    }

    pub fn col(&self) -> usize {
        self.position % 3
    }
}

/// Checks a human move against the board before committing it
pub struct MoveValidator;

impl MoveValidator {
    /// Mark (`row`, `col`) for `player`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if either coordinate is outside
    /// 0-2 and [`crate::Error::Occupied`] if the cell is taken. The board is
    /// left unchanged in both cases.
    pub fn player_marks(
        board: &mut BoardState,
        player: Player,
        row: usize,
        col: usize,
    ) -> Result<Move, crate::Error> {
        if row >= 3 || col >= 3 {
            warn!(%player, row, col, "rejected move outside the grid");
            return Err(crate::Error::OutOfBounds { row, col });
        }
        Self::player_marks_position(board, player, row * 3 + col)
    }

    /// Mark a linear position (0-8) for `player`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] if `position` is off the
    /// board and [`crate::Error::Occupied`] if it is taken.
    pub fn player_marks_position(
        board: &mut BoardState,
        player: Player,
        position: usize,
    ) -> Result<Move, crate::Error> {
        if position >= BOARD_SIZE {
            warn!(%player, position, "rejected move outside the grid");
            return Err(crate::Error::InvalidPosition { position });
        }
        if let Some(by) = board.occupant(position) {
            warn!(%player, position, %by, "rejected move on an occupied cell");
            return Err(crate::Error::Occupied { position, by });
        }

        board.place(player, position);
        Ok(Move { player, position })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_empty_cell() {
        let mut board = BoardState::new();
        let mv = MoveValidator::player_marks(&mut board, Player::X, 1, 2).unwrap();

        assert_eq!(mv.position, 5);
        assert_eq!((mv.row(), mv.col()), (1, 2));
        assert_eq!(board.positions(Player::X).to_vec(), vec![5]);
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let mut board = BoardState::new();
        let result = MoveValidator::player_marks(&mut board, Player::X, 3, 0);

        assert!(matches!(
            result,
            Err(crate::Error::OutOfBounds { row: 3, col: 0 })
        ));
        assert_eq!(board, BoardState::new());
    }

    #[test]
    fn test_rejects_occupied_cell() {
        let mut board = BoardState::from_positions(&[4], &[]).unwrap();
        let before = board;

        let result = MoveValidator::player_marks(&mut board, Player::O, 1, 1);
        assert!(matches!(
            result,
            Err(crate::Error::Occupied {
                position: 4,
                by: Player::X
            })
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn test_rejects_invalid_linear_position() {
        let mut board = BoardState::new();
        let result = MoveValidator::player_marks_position(&mut board, Player::X, 9);
        assert!(matches!(
            result,
            Err(crate::Error::InvalidPosition { position: 9 })
        ));
    }
}
