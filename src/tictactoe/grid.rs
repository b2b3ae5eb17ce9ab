//! Grid encoding of a board and conversion to and from position lists
//!
//! The engine works on per-player position sets. Callers that think in terms
//! of a 3x3 grid of cells convert at the boundary with the functions here;
//! every conversion is pure.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::board::{BOARD_SIZE, BoardState, Player};

/// A cell on the Tic-Tac-Toe grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player whose mark this is
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// Each player's positions as ordered lists
///
/// This is the serialized form of [`BoardState`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PositionLists {
    pub x: Vec<usize>,
    pub o: Vec<usize>,
}

impl From<BoardState> for PositionLists {
    fn from(board: BoardState) -> Self {
        let [x, o] = board.position_lists();
        PositionLists { x, o }
    }
}

impl TryFrom<PositionLists> for BoardState {
    type Error = crate::Error;

    fn try_from(lists: PositionLists) -> Result<Self, Self::Error> {
        BoardState::from_positions(&lists.x, &lists.o)
    }
}

/// A 3x3 grid of cells, indexed by row then column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Grid {
    pub cells: [[Cell; 3]; 3],
}

impl Grid {
    /// An empty grid
    pub fn empty() -> Self {
        Self::default()
    }

    /// Cell at (`row`, `col`), or `None` off the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Cell at a linear position (row = pos / 3, col = pos % 3)
    pub fn at(&self, pos: usize) -> Option<Cell> {
        self.get(pos / 3, pos % 3)
    }

    /// Render a board as a grid
    pub fn from_board(board: &BoardState) -> Self {
        let mut grid = Grid::empty();
        for player in Player::ALL {
            for pos in board.positions(player).iter() {
                grid.cells[pos / 3][pos % 3] = Cell::from(player);
            }
        }
        grid
    }

    /// Build a grid from position lists, rejecting lists that do not form a board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidState`] under the same conditions as
    /// [`BoardState::from_positions`].
    pub fn from_position_lists(first: &[usize], second: &[usize]) -> Result<Self, crate::Error> {
        BoardState::from_positions(first, second).map(|board| Grid::from_board(&board))
    }

    /// Each player's positions in ascending order. Never fails; the lists
    /// may still violate the turn invariant.
    pub fn to_position_lists(&self) -> PositionLists {
        let mut lists = PositionLists::default();
        for pos in 0..BOARD_SIZE {
            match self.at(pos) {
                Some(Cell::X) => lists.x.push(pos),
                Some(Cell::O) => lists.o.push(pos),
                _ => {}
            }
        }
        lists
    }

    /// Convert to the engine's board representation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidState`] if the piece counts do not
    /// describe alternating turns with X moving first.
    pub fn to_board(&self) -> Result<BoardState, crate::Error> {
        BoardState::try_from(self.to_position_lists())
    }
}

impl From<&BoardState> for Grid {
    fn from(board: &BoardState) -> Self {
        Grid::from_board(board)
    }
}

impl FromStr for Grid {
    type Err = crate::Error;

    /// Parse nine cell characters, optionally split into rows by `/` or newlines.
    ///
    /// ```
    /// use noughts::tictactoe::{Cell, Grid};
    ///
    /// let grid: Grid = "X.X/O../.XO".parse().unwrap();
    /// assert_eq!(grid.get(0, 2), Some(Cell::X));
    /// assert_eq!(grid.get(2, 2), Some(Cell::O));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s
            .chars()
            .filter(|&c| c != '/' && c != '\n' && c != '\r')
            .collect();
        if chars.len() != BOARD_SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_SIZE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut grid = Grid::empty();
        for (i, &c) in chars.iter().enumerate() {
            grid.cells[i / 3][i % 3] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if r < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_row_separators() {
        let grid: Grid = "X.X/O../.XO".parse().unwrap();
        let lists = grid.to_position_lists();
        assert_eq!(lists.x, vec![0, 2, 7]);
        assert_eq!(lists.o, vec![3, 8]);
    }

    #[test]
    fn test_parse_accepts_spaces_as_empty() {
        let grid: Grid = "X  \n O \n  X".parse().unwrap();
        assert_eq!(grid.to_position_lists().x, vec![0, 8]);
        assert_eq!(grid.to_position_lists().o, vec![4]);
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        let result = "XO".parse::<Grid>();
        assert!(matches!(
            result,
            Err(crate::Error::InvalidBoardLength { got: 2, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_bad_character() {
        let result = "XOZ......".parse::<Grid>();
        assert!(matches!(
            result,
            Err(crate::Error::InvalidCellCharacter {
                character: 'Z',
                position: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_board_round_trip() {
        let board = BoardState::from_positions(&[0, 2, 7], &[3, 5]).unwrap();
        let grid = Grid::from_board(&board);
        assert_eq!(grid.to_string(), "X.X\nO.O\n.X.");
        assert_eq!(grid.to_board().unwrap(), board);
    }

    #[test]
    fn test_to_board_rejects_turn_mismatch() {
        let grid: Grid = "OO./.../X..".parse().unwrap();
        assert!(matches!(
            grid.to_board(),
            Err(crate::Error::InvalidState(_))
        ));
    }

    #[test]
    fn test_from_position_lists_rejects_overlap() {
        assert!(Grid::from_position_lists(&[4], &[4]).is_err());
    }

    #[test]
    fn test_board_serializes_as_position_lists() {
        let board = BoardState::from_positions(&[4, 0], &[8]).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"{"x":[0,4],"o":[8]}"#);

        let back: BoardState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);

        let invalid = serde_json::from_str::<BoardState>(r#"{"x":[],"o":[1]}"#);
        assert!(invalid.is_err());
    }
}
