use seabattle::{
    init_logging,
    ui::{coord_label, describe_result, render_boards, render_status, render_summary},
    AiPlayer, CliPlayer, Game, GameError, GameMode, Seat,
};

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::time::{sleep, Duration};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Play against the computer.
    Play {
        #[arg(long, default_value = "Player")]
        name: String,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1000, help = "Pause before each computer shot")]
        delay_ms: u64,
        #[arg(long, default_value_t = 1)]
        rounds: u32,
        #[arg(long)]
        no_color: bool,
    },
    /// Watch two computer players fight each other.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 500, help = "Pause before each shot")]
        delay_ms: u64,
        #[arg(long, default_value_t = 1)]
        rounds: u32,
        #[arg(long)]
        no_color: bool,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            name,
            seed,
            delay_ms,
            rounds,
            no_color,
        } => {
            let mut rng = make_rng(seed);
            let human = CliPlayer::new(&name, !no_color);
            let computer = AiPlayer::new(&mut rng);
            let game = Game::new(Box::new(human), Box::new(computer));
            run_session(game, rng, Duration::from_millis(delay_ms), rounds, !no_color).await?;
        }
        Commands::Watch {
            seed,
            delay_ms,
            rounds,
            no_color,
        } => {
            let mut rng = make_rng(seed);
            let first = AiPlayer::named("Computer 1", &mut rng);
            let second = AiPlayer::named("Computer 2", &mut rng);
            let game = Game::new(Box::new(first), Box::new(second));
            run_session(game, rng, Duration::from_millis(delay_ms), rounds, !no_color).await?;
        }
    }
    Ok(())
}

async fn run_session(
    mut game: Game,
    mut rng: SmallRng,
    delay: Duration,
    rounds: u32,
    color: bool,
) -> anyhow::Result<()> {
    for round in 1..=rounds.max(1) {
        if round > 1 {
            game.reset(&mut rng);
        }
        game.place_fleets(&mut rng)?;
        println!("\n========================================");
        println!("            BATTLE STATIONS!");
        println!("========================================");

        let completed = run_game(&mut game, &mut rng, delay, color).await?;
        print_boards(&game, color);
        if !completed {
            println!("\nGame abandoned.");
            break;
        }
        println!("\n{}", render_summary(&game));
    }
    Ok(())
}

fn print_boards(game: &Game, color: bool) {
    let first = game.player(Seat::First);
    let second = game.player(Seat::Second);
    let view = if game.mode() == GameMode::PlayerVsComputer {
        render_boards(
            ("Your fleet", game.board(Seat::First)),
            ("Enemy waters", game.board(Seat::Second)),
            game.status() == seabattle::GameStatus::InProgress,
            color,
        )
    } else {
        render_boards(
            (first.name(), game.board(Seat::First)),
            (second.name(), game.board(Seat::Second)),
            false,
            color,
        )
    };
    println!("\n{}", view);
}

/// Play one game to the end. Returns `false` if a player walked away.
async fn run_game(
    game: &mut Game,
    rng: &mut SmallRng,
    delay: Duration,
    color: bool,
) -> anyhow::Result<bool> {
    loop {
        let attacker = game.current();
        let automated = game.player(attacker).is_automated();
        if game.mode() == GameMode::PlayerVsComputer && !automated {
            print_boards(game, color);
            println!("{}", render_status(game));
            println!(">>> Your turn <<<");
        } else {
            println!("\n>>> {}'s turn <<<", game.player(attacker).name());
            sleep(delay).await;
        }

        let outcome = match game.play_turn(rng) {
            Ok(outcome) => outcome,
            Err(GameError::NoTarget { .. }) => return Ok(false),
            Err(e) => return Err(e.into()),
        };
        println!(
            "{} fires: {} - {}",
            game.player(outcome.attacker).name(),
            coord_label(outcome.coord.0, outcome.coord.1),
            describe_result(outcome.result)
        );
        if outcome.finished {
            return Ok(true);
        }
    }
}
