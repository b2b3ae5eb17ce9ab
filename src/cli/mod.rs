//! Command-line interface for playing against the engine
//!
//! The commands here are thin callers of the library: they build a game,
//! feed it moves and print what happened.

pub mod commands;
pub mod output;
