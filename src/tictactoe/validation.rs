//! Board state validation logic

use super::board::{BOARD_SIZE, BoardState, Player};
use crate::error::StateViolation;

impl BoardState {
    /// Check raw position lists against the board invariants.
    ///
    /// The lists must stay on the board, hold no duplicates, be disjoint, and
    /// the first player must have as many marks as the second or one more.
    pub fn validate_positions(first: &[usize], second: &[usize]) -> Result<(), StateViolation> {
        let mut owner: [Option<Player>; BOARD_SIZE] = [None; BOARD_SIZE];

        for (player, positions) in [(Player::X, first), (Player::O, second)] {
            for &position in positions {
                if position >= BOARD_SIZE {
                    return Err(StateViolation::OutOfRange { position });
                }
                match owner[position] {
                    Some(existing) if existing == player => {
                        return Err(StateViolation::Duplicate { player, position });
                    }
                    Some(_) => return Err(StateViolation::Overlap { position }),
                    None => owner[position] = Some(player),
                }
            }
        }

        let (first_count, second_count) = (first.len(), second.len());
        if first_count == second_count || first_count == second_count + 1 {
            Ok(())
        } else {
            Err(StateViolation::TurnMismatch {
                first: first_count,
                second: second_count,
            })
        }
    }

    /// Check if the board still satisfies the construction invariants
    pub fn is_valid(&self) -> bool {
        let [first, second] = self.position_lists();
        Self::validate_positions(&first, &second).is_ok()
    }
}
