//! Versus-random command - Engine against a uniformly random opponent

use anyhow::Result;
use clap::Parser;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;
use tracing::error;

use super::{Tally, parse_player_token};
use crate::{
    cli::output::{print_json, print_kv, print_section},
    config::EngineConfig,
    strategy::TieBreaker,
    tictactoe::{BoardState, Game, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play the engine against a random opponent")]
pub struct VersusRandomArgs {
    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Which token the engine controls (`x` or `o`)
    #[arg(long, default_value = "o")]
    pub engine: String,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the tally as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Summary {
    engine: Player,
    #[serde(flatten)]
    tally: Tally,
}

pub fn execute(args: VersusRandomArgs) -> Result<()> {
    let engine = parse_player_token(&args.engine, "--engine")?;
    let seed = args.seed.unwrap_or_else(rand::random::<u64>);
    let mut tie_breaker = EngineConfig::new().with_seed(seed).tie_breaker();
    let mut opponent_rng = StdRng::seed_from_u64(seed.wrapping_add(1));

    let tally = run(args.games, engine, &mut tie_breaker, &mut opponent_rng);

    if args.json {
        return print_json(&Summary { engine, tally });
    }

    print_section("Engine vs random");
    print_kv("Engine plays", &engine.to_string());
    print_kv("Games", &tally.games.to_string());
    print_kv("Engine wins", &tally.wins(engine).to_string());
    print_kv("Random wins", &tally.wins(engine.opponent()).to_string());
    print_kv("Draws", &tally.draws.to_string());
    Ok(())
}

/// Play `games` games with the engine as `engine` against uniform random moves
pub fn run<T: TieBreaker, R: Rng>(
    games: usize,
    engine: Player,
    tie_breaker: &mut T,
    opponent_rng: &mut R,
) -> Tally {
    let mut tally = Tally::default();
    for _ in 0..games {
        let mut game = Game::with_tie_breaker(BoardState::new(), &mut *tie_breaker);
        while !game.is_over() {
            let player = game.next_player();
            if player == engine {
                if game.computer_plays(player).is_none() {
                    break;
                }
                continue;
            }
            let available = game.board().available().to_vec();
            let position = available[opponent_rng.random_range(0..available.len())];
            if let Err(err) = game.player_marks_position(player, position) {
                error!(%err, position, "random opponent picked an unavailable cell");
                break;
            }
        }
        tally.record(game.status());
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::RandomTieBreaker;

    #[test]
    fn test_engine_never_loses_to_random_play() {
        for engine in Player::ALL {
            let mut tie_breaker = RandomTieBreaker::new(Some(17));
            let mut opponent_rng = StdRng::seed_from_u64(18);
            let tally = run(200, engine, &mut tie_breaker, &mut opponent_rng);

            assert_eq!(tally.games, 200);
            assert_eq!(tally.wins(engine.opponent()), 0, "engine as {engine} lost");
        }
    }
}
