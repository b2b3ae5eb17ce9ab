//! Rule-based opponent: threat detection, tie-breaking and move selection

pub mod engine;
pub mod threats;
pub mod tie_break;

pub use engine::{Decision, DecisionEngine, Tactic};
pub use threats::ThreatAnalyzer;
pub use tie_break::{FirstCandidate, RandomTieBreaker, ScriptedTieBreaker, TieBreaker};
