//! Tic-Tac-Toe with a rule-based opponent
//!
//! This crate provides:
//! - Board representation as per-player position sets, with validation
//! - A grid adapter for callers that think in rows and columns
//! - Threat analysis (winning and fork positions)
//! - A fixed-priority decision engine: win, block, fork, block fork,
//!   center, corner, side
//! - A small CLI for playing rounds and running batches of games

pub mod cli;
pub mod config;
pub mod error;
pub mod strategy;
pub mod tictactoe;

pub use config::EngineConfig;
pub use error::{Error, Result, StateViolation};
pub use strategy::{
    Decision, DecisionEngine, FirstCandidate, RandomTieBreaker, ScriptedTieBreaker, Tactic,
    ThreatAnalyzer, TieBreaker,
};
pub use tictactoe::{BoardState, Cell, Game, GameStatus, Grid, Move, MoveValidator, Player};
