use broadside::{init_logging, setup, Board, TargetingStrategy, BOARD_SIZE};
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Let the computer strategy sink randomly placed fleets and report shot counts as JSON.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for fleet layouts and hunting.
    seed: u64,
    /// Number of games to simulate.
    #[arg(default_value_t = 1)]
    games: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let mut rng = SmallRng::seed_from_u64(args.seed);

    let mut shots = Vec::with_capacity(args.games);
    for _ in 0..args.games {
        let mut board = Board::new();
        setup::place_fleet_randomly(&mut board, &mut rng)?;
        let mut strategy = TargetingStrategy::new();
        while !board.all_sunk() {
            let coord = strategy
                .next_target(&board, &mut rng)
                .ok_or_else(|| anyhow::anyhow!("ran out of targets before sinking the fleet"))?;
            let result = board.receive_attack(coord)?;
            let sunk = board.ship_at(coord).is_some_and(|ship| ship.is_sunk());
            strategy.record_result(&board, coord, result, sunk);
        }
        shots.push(board.attack_count());
    }

    let total: usize = shots.iter().sum();
    let result = json!({
        "seed": args.seed,
        "games": args.games,
        "shots": shots,
        "mean_shots": total as f64 / args.games.max(1) as f64,
        "max_shots": shots.iter().max(),
        "board_cells": BOARD_SIZE * BOARD_SIZE,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
