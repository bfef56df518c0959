use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{init_logging, AiPlayer, Game, GameStatus, Seat};
use serde_json::json;

/// Upper bound on shots; two full sweeps of both boards.
const MAX_TURNS: u32 = 400;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let p1 = AiPlayer::named("player1", &mut rng1);
    let p2 = AiPlayer::named("player2", &mut rng2);
    let mut game = Game::new(Box::new(p1), Box::new(p2));

    game.place_fleets(&mut rng1)?;
    let status = game.run_to_end(&mut rng1, MAX_TURNS)?;

    let winner = match status {
        GameStatus::Finished { winner: Seat::First } => Some("player1"),
        GameStatus::Finished { winner: Seat::Second } => Some("player2"),
        _ => None,
    };
    let s1 = game.stats(Seat::First);
    let s2 = game.stats(Seat::Second);

    let result = json!({
        "player1": {"shots": s1.shots, "hits": s1.hits, "ships_left": game.board(Seat::First).alive_count()},
        "player2": {"shots": s2.shots, "hits": s2.hits, "ships_left": game.board(Seat::Second).alive_count()},
        "turns": game.turn_count(),
        "status": status,
        "winner": winner,
        "boards": [
            game.board(Seat::First).snapshot(false),
            game.board(Seat::Second).snapshot(false),
        ],
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
