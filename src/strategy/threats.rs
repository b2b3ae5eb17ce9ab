//! Winning-position and fork detection

use crate::tictactoe::{BoardState, LineAnalyzer, Player, PositionSet};

/// Read-only tactical queries over a board
///
/// All simulation happens on copies made with [`BoardState::with_mark`]; the
/// board passed in is never modified.
pub struct ThreatAnalyzer;

impl ThreatAnalyzer {
    /// Positions not marked by either player
    pub fn available_positions(board: &BoardState) -> PositionSet {
        board.available()
    }

    /// Available positions where a mark by `player` completes a line.
    ///
    /// A position qualifies when the other two cells of its row, its column,
    /// or a diagonal it lies on are already held by `player`.
    pub fn winning_positions(board: &BoardState, player: Player) -> PositionSet {
        let own = board.positions(player);
        board
            .available()
            .iter()
            .filter(|&pos| LineAnalyzer::completes_line(own, pos))
            .collect()
    }

    /// Available positions where a mark by `player` leaves at least two
    /// winning positions at once.
    pub fn fork_positions(board: &BoardState, player: Player) -> PositionSet {
        board
            .available()
            .iter()
            .filter(|&pos| {
                let next = board.with_mark(player, pos);
                Self::winning_positions(&next, player).len() >= 2
            })
            .collect()
    }

    /// Winning positions `player` would have after marking `pos`
    pub fn threats_after(board: &BoardState, player: Player, pos: usize) -> PositionSet {
        Self::winning_positions(&board.with_mark(player, pos), player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(first: &[usize], second: &[usize]) -> BoardState {
        BoardState::from_positions(first, second).unwrap()
    }

    #[test]
    fn test_available_positions() {
        let board = board(&[0, 4], &[8]);
        assert_eq!(
            ThreatAnalyzer::available_positions(&board).to_vec(),
            vec![1, 2, 3, 5, 6, 7]
        );
    }

    #[test]
    fn test_winning_positions_row() {
        // X.X
        // O.O
        // .X.
        let board = board(&[0, 2, 7], &[3, 5]);
        assert_eq!(
            ThreatAnalyzer::winning_positions(&board, Player::O).to_vec(),
            vec![4]
        );
        assert_eq!(
            ThreatAnalyzer::winning_positions(&board, Player::X).to_vec(),
            vec![1]
        );
    }

    #[test]
    fn test_winning_positions_blocked_line() {
        // XOX
        // ...
        // ...
        let board = board(&[0, 2], &[1]);
        assert!(ThreatAnalyzer::winning_positions(&board, Player::X).is_empty());
    }

    #[test]
    fn test_winning_positions_multiple() {
        // XX.
        // XO.
        // .O.
        let board = board(&[0, 1, 3], &[4, 7]);
        assert_eq!(
            ThreatAnalyzer::winning_positions(&board, Player::X).to_vec(),
            vec![2, 6]
        );
    }

    #[test]
    fn test_fork_positions() {
        // X..
        // .O.
        // ..X
        let board = board(&[0, 8], &[4]);
        assert_eq!(
            ThreatAnalyzer::fork_positions(&board, Player::X).to_vec(),
            vec![2, 6]
        );
        assert!(ThreatAnalyzer::fork_positions(&board, Player::O).is_empty());
    }

    #[test]
    fn test_fork_detection_does_not_leak_marks() {
        let board = board(&[0, 8], &[4]);
        let before = board;
        let _ = ThreatAnalyzer::fork_positions(&board, Player::X);
        let _ = ThreatAnalyzer::fork_positions(&board, Player::O);
        assert_eq!(board, before);
    }

    #[test]
    fn test_threats_after() {
        // X..
        // .O.
        // ..X
        let board = board(&[0, 8], &[4]);
        assert_eq!(
            ThreatAnalyzer::threats_after(&board, Player::O, 1).to_vec(),
            vec![7]
        );
    }
}
