//! Self-play command - Engine against itself from the empty board

use anyhow::Result;
use clap::Parser;

use super::Tally;
use crate::{
    cli::output::{print_json, print_kv, print_section},
    config::EngineConfig,
    strategy::TieBreaker,
    tictactoe::{BoardState, Game},
};

#[derive(Parser, Debug)]
#[command(about = "Let the engine play both sides")]
pub struct SelfPlayArgs {
    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the tally as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: SelfPlayArgs) -> Result<()> {
    let mut tie_breaker = EngineConfig::new().with_optional_seed(args.seed).tie_breaker();
    let tally = run(args.games, &mut tie_breaker);

    if args.json {
        return print_json(&tally);
    }

    print_section("Self-play");
    print_kv("Games", &tally.games.to_string());
    print_kv("X wins", &tally.x_wins.to_string());
    print_kv("O wins", &tally.o_wins.to_string());
    print_kv("Draws", &tally.draws.to_string());
    Ok(())
}

/// Play `games` engine-vs-engine games sharing one tie-break source
pub fn run<T: TieBreaker>(games: usize, tie_breaker: &mut T) -> Tally {
    let mut tally = Tally::default();
    for _ in 0..games {
        let mut game = Game::with_tie_breaker(BoardState::new(), &mut *tie_breaker);
        while game.computer_marks().is_some() {}
        tally.record(game.status());
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::RandomTieBreaker;

    #[test]
    fn test_self_play_always_draws() {
        let mut tie_breaker = RandomTieBreaker::new(Some(5));
        let tally = run(50, &mut tie_breaker);

        assert_eq!(tally.games, 50);
        assert_eq!(tally.draws, 50);
    }
}
