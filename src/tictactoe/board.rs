//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Number of positions on the board
pub const BOARD_SIZE: usize = 9;

/// The center position
pub const CENTER: usize = 4;

/// The four corner positions
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// The four side (edge midpoint) positions
pub const SIDES: [usize; 4] = [1, 3, 5, 7];

/// A player in the game
///
/// `X` always moves first and is player id 0; `O` is player id 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Both players in turn order
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Player id (0 for the first mover, 1 for the second)
    pub fn id(self) -> u8 {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }

    /// Look up a player by id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPlayer`] for ids other than 0 and 1.
    pub fn from_id(id: u8) -> Result<Player, crate::Error> {
        match id {
            0 => Ok(Player::X),
            1 => Ok(Player::O),
            _ => Err(crate::Error::InvalidPlayer { id }),
        }
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.id())
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A set of board positions (0-8) stored as a bit mask.
///
/// Iteration always yields positions in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PositionSet(u16);

impl PositionSet {
    /// The empty set
    pub const EMPTY: PositionSet = PositionSet(0);

    /// Every position on the board
    pub const FULL: PositionSet = PositionSet((1 << BOARD_SIZE) - 1);

    /// Check whether `pos` is in the set; out-of-range positions never are
    pub fn contains(self, pos: usize) -> bool {
        pos < BOARD_SIZE && self.0 & (1 << pos) != 0
    }

    /// Return a copy of the set with `pos` added.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `pos` is not a board position.
    #[must_use = "with returns a new set; the original is unchanged"]
    pub fn with(self, pos: usize) -> PositionSet {
        debug_assert!(pos < BOARD_SIZE, "position {pos} is off the board");
        PositionSet(self.0 | (1 << pos))
    }

    pub(crate) fn insert(&mut self, pos: usize) {
        *self = self.with(pos);
    }

    /// Number of positions in the set
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn union(self, other: PositionSet) -> PositionSet {
        PositionSet(self.0 | other.0)
    }

    #[must_use]
    pub fn intersection(self, other: PositionSet) -> PositionSet {
        PositionSet(self.0 & other.0)
    }

    /// Positions in `self` that are not in `other`
    #[must_use]
    pub fn difference(self, other: PositionSet) -> PositionSet {
        PositionSet(self.0 & !other.0)
    }

    /// Positions on the board not in the set
    #[must_use]
    pub fn complement(self) -> PositionSet {
        PositionSet::FULL.difference(self)
    }

    /// Iterate positions in ascending order
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..BOARD_SIZE).filter(move |&pos| self.contains(pos))
    }

    /// Positions in ascending order
    pub fn to_vec(self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl FromIterator<usize> for PositionSet {
    /// Collect positions into a set; positions outside 0-8 are ignored.
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = PositionSet::EMPTY;
        for pos in iter.into_iter().filter(|&pos| pos < BOARD_SIZE) {
            set.insert(pos);
        }
        set
    }
}

impl fmt::Display for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_vec())
    }
}

/// Marked positions for both players.
///
/// The two sets are always disjoint, and X has either as many marks as O or
/// exactly one more. Construction from raw position lists goes through
/// [`BoardState::from_positions`], which rejects anything else.
///
/// This type implements `Copy`; speculative analysis works on derived
/// snapshots (see [`BoardState::with_mark`]) and never mutates the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "super::grid::PositionLists", into = "super::grid::PositionLists")]
pub struct BoardState {
    marks: [PositionSet; 2],
}

impl BoardState {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from each player's positions.
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts::tictactoe::{BoardState, Player};
    ///
    /// let board = BoardState::from_positions(&[0, 2, 7], &[3, 5]).unwrap();
    /// assert_eq!(board.next_player(), Player::O);
    ///
    /// // Overlapping sets are rejected
    /// assert!(BoardState::from_positions(&[0, 4], &[4]).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidState`] if a position is off the board,
    /// listed twice, claimed by both players, or if the piece counts do not
    /// describe alternating turns with X moving first.
    pub fn from_positions(first: &[usize], second: &[usize]) -> Result<Self, crate::Error> {
        Self::validate_positions(first, second)?;
        Ok(BoardState {
            marks: [
                first.iter().copied().collect(),
                second.iter().copied().collect(),
            ],
        })
    }

    /// Positions marked by `player`
    pub fn positions(&self, player: Player) -> PositionSet {
        self.marks[player.index()]
    }

    /// Both players' positions in ascending order, X first
    pub fn position_lists(&self) -> [Vec<usize>; 2] {
        [self.marks[0].to_vec(), self.marks[1].to_vec()]
    }

    /// All marked positions
    pub fn occupied(&self) -> PositionSet {
        self.marks[0].union(self.marks[1])
    }

    /// All unmarked positions
    pub fn available(&self) -> PositionSet {
        self.occupied().complement()
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied().len()
    }

    /// Check if a position is unmarked
    pub fn is_empty(&self, pos: usize) -> bool {
        pos < BOARD_SIZE && !self.occupied().contains(pos)
    }

    /// The player holding `pos`, if any
    pub fn occupant(&self, pos: usize) -> Option<Player> {
        Player::ALL
            .into_iter()
            .find(|&player| self.positions(player).contains(pos))
    }

    /// Player whose turn it is, judging by the piece counts
    pub fn next_player(&self) -> Player {
        if self.marks[0].len() > self.marks[1].len() {
            Player::O
        } else {
            Player::X
        }
    }

    /// Snapshot of this board with one extra mark for `player`.
    ///
    /// Used for what-if analysis; the turn-count invariant is not checked
    /// because speculative marks may be placed for either player.
    #[must_use = "with_mark returns a new board state; the original is unchanged"]
    pub fn with_mark(&self, player: Player, pos: usize) -> BoardState {
        debug_assert!(self.is_empty(pos), "position {pos} is not available");
        let mut next = *self;
        next.marks[player.index()].insert(pos);
        next
    }

    /// Commit a mark. Callers are responsible for checking availability.
    pub(crate) fn place(&mut self, player: Player, pos: usize) {
        *self = self.with_mark(player, pos);
    }

    /// Check if a player has three in a row
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_line(self.positions(player))
    }

    /// The player owning a complete line, if any
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(self)
    }

    /// Check if every position is marked
    pub fn is_full(&self) -> bool {
        self.available().is_empty()
    }

    /// Check if the game has ended (a win or a full board)
    pub fn is_over(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.occupant(row * 3 + col) {
                    Some(player) => player.to_string(),
                    None => ".".to_string(),
                };
                write!(f, "{symbol}")?;
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
