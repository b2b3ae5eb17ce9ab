//! Configuration for creating engines and games.

use serde::{Deserialize, Serialize};

use crate::strategy::RandomTieBreaker;

/// Configuration for the engine's tie-breaking.
///
/// # Examples
///
/// ```
/// use noughts::config::EngineConfig;
/// use noughts::tictactoe::{BoardState, Game};
///
/// let config = EngineConfig::new().with_seed(42);
/// let mut game = Game::with_config(BoardState::new(), &config);
/// game.computer_marks();
/// assert_eq!(game.positions(), [vec![4], vec![]]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Random seed for reproducible tie-breaks; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Create a configuration with entropy-seeded tie-breaks
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set or clear the random seed
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Build the tie-break source described by this configuration
    pub fn tie_breaker(&self) -> RandomTieBreaker {
        RandomTieBreaker::new(self.seed)
    }
}
