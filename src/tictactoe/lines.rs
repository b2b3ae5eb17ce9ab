//! Winning line analysis for Tic-Tac-Toe

use super::board::{BoardState, Player, PositionSet};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Lines passing through `pos`: its row, its column, and any diagonal it lies on
    pub fn lines_through(pos: usize) -> impl Iterator<Item = &'static [usize; 3]> {
        let lines: &'static [[usize; 3]; 8] = &WINNING_LINES;
        lines.iter().filter(move |line| line.contains(&pos))
    }

    /// Check if a set of positions contains a complete line
    pub fn has_line(positions: PositionSet) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| positions.contains(idx)))
    }

    /// Check if adding `pos` to `positions` completes a line through `pos`.
    ///
    /// Only the other two cells of each line are inspected, so `pos` itself
    /// may or may not be in the set.
    pub fn completes_line(positions: PositionSet, pos: usize) -> bool {
        Self::lines_through(pos).any(|line| {
            line.iter()
                .filter(|&&idx| idx != pos)
                .all(|&idx| positions.contains(idx))
        })
    }

    /// The owner of the first complete line, scanning every line for both players
    pub fn winner(board: &BoardState) -> Option<Player> {
        WINNING_LINES.iter().find_map(|line| {
            Player::ALL.into_iter().find(|&player| {
                let positions = board.positions(player);
                line.iter().all(|&idx| positions.contains(idx))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(positions: &[usize]) -> PositionSet {
        positions.iter().copied().collect()
    }

    #[test]
    fn test_has_line_horizontal() {
        assert!(LineAnalyzer::has_line(set(&[0, 1, 2])));
        assert!(!LineAnalyzer::has_line(set(&[0, 1, 5])));
    }

    #[test]
    fn test_has_line_vertical() {
        assert!(LineAnalyzer::has_line(set(&[1, 4, 7])));
    }

    #[test]
    fn test_has_line_diagonal() {
        assert!(LineAnalyzer::has_line(set(&[2, 4, 6])));
        assert!(LineAnalyzer::has_line(set(&[0, 3, 4, 8])));
    }

    #[test]
    fn test_lines_through_counts() {
        assert_eq!(LineAnalyzer::lines_through(4).count(), 4);
        assert_eq!(LineAnalyzer::lines_through(0).count(), 3);
        assert_eq!(LineAnalyzer::lines_through(1).count(), 2);
    }

    #[test]
    fn test_completes_line() {
        // X.X
        // ...
        // ...
        let positions = set(&[0, 2]);
        assert!(LineAnalyzer::completes_line(positions, 1));
        assert!(!LineAnalyzer::completes_line(positions, 4));
    }

    #[test]
    fn test_completes_diagonal_only_through_diagonal_cells() {
        // X..
        // ...
        // ..X
        let positions = set(&[0, 8]);
        assert!(LineAnalyzer::completes_line(positions, 4));
        assert!(!LineAnalyzer::completes_line(positions, 5));
    }

    #[test]
    fn test_winner_scans_both_players() {
        let board = BoardState::from_positions(&[0, 1, 5], &[3, 4, 8]).unwrap();
        assert_eq!(LineAnalyzer::winner(&board), None);

        // X X .
        // O O O
        // X . .
        let board = BoardState::from_positions(&[0, 1, 6], &[3, 4, 5]).unwrap();
        assert_eq!(LineAnalyzer::winner(&board), Some(Player::O));
    }
}
