use broadside::{
    init_logging,
    ui::{coord_to_string, render_board, render_fleet},
    CliCommander, Commander, Game, GameError, GameStatus, PlayerKind, TurnReport,
};

use clap::{Parser, Subcommand};
use rand::{rngs::SmallRng, SeedableRng};
use tokio::time::{sleep, Duration};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 600, help = "Pause before the computer fires, in milliseconds")]
        delay_ms: u64,
        #[arg(long, help = "Place your own ships instead of a random layout")]
        manual: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            delay_ms,
            manual,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let (rng, input_rng) = match seed {
                Some(s) => (
                    SmallRng::seed_from_u64(s),
                    SmallRng::seed_from_u64(s.wrapping_add(1)),
                ),
                None => {
                    let mut seed_rng = rand::rng();
                    (
                        SmallRng::from_rng(&mut seed_rng),
                        SmallRng::from_rng(&mut seed_rng),
                    )
                }
            };
            let mut game = Game::new(rng);
            let mut human = CliCommander::new();
            if manual {
                game.place_human_fleet(&mut human)?;
                game.place_computer_fleet()?;
            } else {
                game.randomize_fleets()?;
            }
            game.start()?;
            run(game, human, input_rng, Duration::from_millis(delay_ms)).await?;
        }
    }
    Ok(())
}

async fn run(
    mut game: Game,
    mut human: CliCommander,
    mut rng: SmallRng,
    delay: Duration,
) -> anyhow::Result<()> {
    while game.status() == GameStatus::InProgress {
        match game.current_side() {
            PlayerKind::Human => {
                print_view(&game);
                let Some(coord) = human.select_target(&mut rng, game.computer().board()) else {
                    println!("No more input, abandoning game.");
                    return Ok(());
                };
                match game.human_attack(coord) {
                    Ok(report) => {
                        human.handle_attack_result(
                            game.computer().board(),
                            coord,
                            report.result,
                            report.sunk.is_some(),
                        );
                    }
                    Err(e @ (GameError::AlreadyAttacked(_) | GameError::OutOfBounds(_))) => {
                        println!("{}", e);
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            PlayerKind::Computer => {
                println!("Computer is aiming...");
                sleep(delay).await;
                let report = game.computer_turn()?;
                announce(&report);
            }
        }
    }

    println!("\n=== GAME OVER ===\n");
    print_view(&game);
    match game.winner() {
        Some(PlayerKind::Human) => println!("\nVICTORY! You have sunk all enemy ships!"),
        Some(PlayerKind::Computer) => println!("\nDEFEAT. All your ships have been destroyed."),
        None => {}
    }
    Ok(())
}

fn announce(report: &TurnReport) {
    let sunk = report
        .sunk
        .map(|kind| format!(" and sank your {}", kind))
        .unwrap_or_default();
    println!(
        "Computer fired at {} -> {}{}",
        coord_to_string(report.coord),
        report.result,
        sunk
    );
}

fn print_view(game: &Game) {
    println!("\nEnemy waters:");
    print!("{}", render_board(game.computer().board(), false));
    print!("{}", render_fleet(game.computer().board()));
    println!("\nYour fleet:");
    print!("{}", render_board(game.human().board(), true));
    print!("{}", render_fleet(game.human().board()));
}
