//! Fixed-priority move selection
//!
//! The engine plays optimally without searching the game tree. It tries each
//! tactic in order and commits the first one that applies:
//!
//! 1. **Win**: complete one of its own lines.
//! 2. **Block**: occupy a cell where the opponent would complete a line.
//! 3. **Fork**: create two winning positions at once.
//! 4. **Block fork**: take the opponent's only fork position, or, when the
//!    opponent has several, force them with a threat that lies outside all
//!    of those fork positions.
//! 5. **Center**, then a **corner**, then a **side**.
//!
//! Ties within a tactic are broken by a [`TieBreaker`].

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use super::{
    threats::ThreatAnalyzer,
    tie_break::{RandomTieBreaker, TieBreaker},
};
use crate::tictactoe::{BoardState, CENTER, CORNERS, Player, PositionSet, SIDES};

/// The rule that produced a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tactic {
    Win,
    Block,
    Fork,
    BlockFork,
    Force,
    Center,
    Corner,
    Side,
}

impl fmt::Display for Tactic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tactic::Win => "win",
            Tactic::Block => "block",
            Tactic::Fork => "fork",
            Tactic::BlockFork => "block fork",
            Tactic::Force => "force",
            Tactic::Center => "center",
            Tactic::Corner => "corner",
            Tactic::Side => "side",
        };
        f.write_str(name)
    }
}

/// A move chosen by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decision {
    pub player: Player,
    pub position: usize,
    pub tactic: Tactic,
}

/// Rule-based automated player
#[derive(Debug, Clone)]
pub struct DecisionEngine<T = RandomTieBreaker> {
    tie_breaker: T,
}

impl<T: TieBreaker> DecisionEngine<T> {
    pub fn new(tie_breaker: T) -> Self {
        Self { tie_breaker }
    }

    pub fn tie_breaker(&self) -> &T {
        &self.tie_breaker
    }

    pub fn tie_breaker_mut(&mut self) -> &mut T {
        &mut self.tie_breaker
    }

    /// Choose a move for `player` without touching the board.
    ///
    /// Returns `None` when the game is already over: a player holds a line
    /// or no position is available.
    #[instrument(level = "trace", skip(self, board), fields(board = %board))]
    pub fn decide(&mut self, board: &BoardState, player: Player) -> Option<Decision> {
        if board.is_over() {
            trace!(winner = ?board.winner(), "game over, no decision");
            return None;
        }

        let opponent = player.opponent();
        let decision = |position, tactic| Decision {
            player,
            position,
            tactic,
        };

        let wins = ThreatAnalyzer::winning_positions(board, player);
        if !wins.is_empty() {
            return Some(decision(self.pick(wins), Tactic::Win));
        }

        let blocks = ThreatAnalyzer::winning_positions(board, opponent);
        if !blocks.is_empty() {
            return Some(decision(self.pick(blocks), Tactic::Block));
        }

        let forks = ThreatAnalyzer::fork_positions(board, player);
        if !forks.is_empty() {
            return Some(decision(self.pick(forks), Tactic::Fork));
        }

        let opponent_forks = ThreatAnalyzer::fork_positions(board, opponent);
        match opponent_forks.len() {
            0 => {}
            1 => {
                if let Some(position) = opponent_forks.iter().next() {
                    return Some(decision(position, Tactic::BlockFork));
                }
            }
            _ => {
                if let Some(position) = Self::force_opponent(board, player, opponent_forks) {
                    return Some(decision(position, Tactic::Force));
                }
                trace!(forks = %opponent_forks, "no forcing move avoids the opponent's forks");
            }
        }

        let available = board.available();
        if available.contains(CENTER) {
            return Some(decision(CENTER, Tactic::Center));
        }

        let corners = available.intersection(CORNERS.into_iter().collect());
        if !corners.is_empty() {
            return Some(decision(self.pick(corners), Tactic::Corner));
        }

        let sides = available.intersection(SIDES.into_iter().collect());
        if !sides.is_empty() {
            return Some(decision(self.pick(sides), Tactic::Side));
        }

        None
    }

    /// Choose and commit a move for `player`.
    ///
    /// The board is left unchanged when the game is already over.
    pub fn play(&mut self, board: &mut BoardState, player: Player) -> Option<Decision> {
        let decision = self.decide(board, player)?;
        board.place(player, decision.position);
        debug!(
            %player,
            position = decision.position,
            tactic = %decision.tactic,
            "engine move"
        );
        Some(decision)
    }

    /// First available position (ascending) whose mark gives `player` a
    /// winning position outside `excluded`.
    ///
    /// The opponent has to answer that threat instead of playing one of
    /// their fork positions. Returns `None` if no such position exists.
    pub fn force_opponent(
        board: &BoardState,
        player: Player,
        excluded: PositionSet,
    ) -> Option<usize> {
        board.available().iter().find(|&pos| {
            let threats = ThreatAnalyzer::threats_after(board, player, pos);
            !threats.difference(excluded).is_empty()
        })
    }

    fn pick(&mut self, candidates: PositionSet) -> usize {
        let candidates = candidates.to_vec();
        let index = self.tie_breaker.choose(candidates.len()) % candidates.len();
        trace!(?candidates, index, "tie break");
        candidates[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::tie_break::{FirstCandidate, ScriptedTieBreaker};

    fn board(first: &[usize], second: &[usize]) -> BoardState {
        BoardState::from_positions(first, second).unwrap()
    }

    fn decide(first: &[usize], second: &[usize], player: Player) -> Decision {
        DecisionEngine::new(FirstCandidate)
            .decide(&board(first, second), player)
            .unwrap()
    }

    #[test]
    fn test_win_takes_priority_over_block() {
        // X.X
        // O.O
        // .X.
        let decision = decide(&[0, 2, 7], &[3, 5], Player::O);
        assert_eq!(decision.position, 4);
        assert_eq!(decision.tactic, Tactic::Win);
    }

    #[test]
    fn test_block() {
        // X.X
        // O..
        // .XO
        let decision = decide(&[0, 2, 7], &[3, 8], Player::O);
        assert_eq!(decision.position, 1);
        assert_eq!(decision.tactic, Tactic::Block);
    }

    #[test]
    fn test_fork() {
        // OXX
        // X..
        // .O.
        let decision = decide(&[1, 2, 3], &[0, 7], Player::O);
        assert_eq!(decision.position, 8);
        assert_eq!(decision.tactic, Tactic::Fork);
    }

    #[test]
    fn test_single_block_fork() {
        // X..
        // .OX
        // ...
        let decision = decide(&[0, 5], &[4], Player::O);
        assert_eq!(decision.position, 2);
        assert_eq!(decision.tactic, Tactic::BlockFork);
    }

    #[test]
    fn test_force_against_opposite_corners() {
        // X..
        // .O.
        // ..X
        let decision = decide(&[0, 8], &[4], Player::O);
        assert_eq!(decision.position, 1);
        assert_eq!(decision.tactic, Tactic::Force);
    }

    #[test]
    fn test_force_skipped_when_no_threat_possible() {
        // X..
        // O.X
        // ...
        // X forks at 2 and 8, and every O threat is already blocked.
        let decision = decide(&[0, 5], &[3], Player::O);
        assert_eq!(decision.position, 4);
        assert_eq!(decision.tactic, Tactic::Center);
    }

    #[test]
    fn test_force_opponent_respects_exclusions() {
        let board = board(&[0, 8], &[4]);
        let excluded: PositionSet = [7].into_iter().collect();
        // A mark at 1 only threatens 7, which is excluded; 2 threatens 6.
        assert_eq!(
            DecisionEngine::<FirstCandidate>::force_opponent(&board, Player::O, excluded),
            Some(2)
        );
    }

    #[test]
    fn test_center() {
        let decision = decide(&[0], &[], Player::O);
        assert_eq!(decision.position, CENTER);
        assert_eq!(decision.tactic, Tactic::Center);
    }

    #[test]
    fn test_corner_follows_tie_breaker() {
        // ...
        // XOX
        // ...
        let board = board(&[3, 5], &[4]);
        let mut engine = DecisionEngine::new(ScriptedTieBreaker::new([2]));
        let decision = engine.decide(&board, Player::O).unwrap();
        assert_eq!(decision.position, 6);
        assert_eq!(decision.tactic, Tactic::Corner);
    }

    #[test]
    fn test_out_of_range_tie_break_index_wraps() {
        let board = board(&[3, 5], &[4]);
        let mut engine = DecisionEngine::new(ScriptedTieBreaker::new([5]));
        assert_eq!(engine.decide(&board, Player::O).unwrap().position, 2);
    }

    #[test]
    fn test_full_board_has_no_decision() {
        let board = board(&[0, 2, 3, 7, 8], &[1, 4, 5, 6]);
        let mut engine = DecisionEngine::new(FirstCandidate);
        assert_eq!(engine.decide(&board, Player::O), None);
    }

    #[test]
    fn test_won_board_with_free_cells_has_no_decision() {
        // XXX
        // OO.
        // ...
        let mut board = board(&[0, 1, 2], &[3, 4]);
        let before = board;
        let mut engine = DecisionEngine::new(FirstCandidate);

        assert_eq!(engine.decide(&board, Player::O), None);
        assert_eq!(engine.play(&mut board, Player::O), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_tie_breaker_consumed_only_when_candidates_tie() {
        let mut engine = DecisionEngine::new(ScriptedTieBreaker::new([1, 3]));

        // Center is not a tie, so no pick is consumed.
        engine.decide(&board(&[0], &[]), Player::O).unwrap();
        assert_eq!(engine.tie_breaker().remaining(), 2);

        // Four free corners: the first scripted pick selects corner 2.
        let decision = engine.decide(&board(&[3, 5], &[4]), Player::O).unwrap();
        assert_eq!(decision.position, 2);
        assert_eq!(engine.tie_breaker().remaining(), 1);

        *engine.tie_breaker_mut() = ScriptedTieBreaker::new([0]);
        let decision = engine.decide(&board(&[3, 5], &[4]), Player::O).unwrap();
        assert_eq!(decision.position, 0);
        assert_eq!(engine.tie_breaker().remaining(), 0);
    }

    #[test]
    fn test_play_commits_exactly_one_mark() {
        let mut board = board(&[0], &[]);
        let mut engine = DecisionEngine::new(FirstCandidate);
        let decision = engine.play(&mut board, Player::O).unwrap();

        assert_eq!(board.occupied_count(), 2);
        assert_eq!(board.occupant(decision.position), Some(Player::O));
    }
}
