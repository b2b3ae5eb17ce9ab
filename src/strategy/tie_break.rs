//! Tie-breaking among equally ranked candidate positions
//!
//! The decision engine never draws randomness itself. Whenever a tactic has
//! several candidate positions it asks a [`TieBreaker`] for an index, which
//! lets tests substitute a deterministic source.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of tie-break selections
pub trait TieBreaker {
    /// Pick an index in `0..candidates`.
    ///
    /// Only called with `candidates >= 1`. Indices at or past `candidates`
    /// are reduced modulo the candidate count by the caller.
    fn choose(&mut self, candidates: usize) -> usize;
}

impl<T: TieBreaker + ?Sized> TieBreaker for &mut T {
    fn choose(&mut self, candidates: usize) -> usize {
        (**self).choose(candidates)
    }
}

impl<T: TieBreaker + ?Sized> TieBreaker for Box<T> {
    fn choose(&mut self, candidates: usize) -> usize {
        (**self).choose(candidates)
    }
}

/// Uniform selection backed by a seedable RNG
#[derive(Debug, Clone)]
pub struct RandomTieBreaker<R = StdRng> {
    rng: R,
}

impl RandomTieBreaker<StdRng> {
    /// Seeded for reproducible games, or from entropy when `seed` is `None`
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        Self { rng }
    }
}

impl<R: Rng> RandomTieBreaker<R> {
    /// Wrap an existing RNG
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TieBreaker for RandomTieBreaker<R> {
    fn choose(&mut self, candidates: usize) -> usize {
        self.rng.random_range(0..candidates)
    }
}

/// Always picks the lowest candidate position
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidate;

impl TieBreaker for FirstCandidate {
    fn choose(&mut self, _candidates: usize) -> usize {
        0
    }
}

/// Replays a fixed list of indices, then falls back to the first candidate
#[derive(Debug, Clone, Default)]
pub struct ScriptedTieBreaker {
    picks: VecDeque<usize>,
}

impl ScriptedTieBreaker {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    /// Number of scripted picks not yet consumed
    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl TieBreaker for ScriptedTieBreaker {
    fn choose(&mut self, _candidates: usize) -> usize {
        self.picks.pop_front().unwrap_or(0)
    }
}
