use seabattle::{AiPlayer, AttackResult, Game, GameStatus, Player, Seat, TOTAL_DECKS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_ai_vs_ai_game() {
    let mut rng = SmallRng::seed_from_u64(123);
    let p1 = AiPlayer::named("p1", &mut rng);
    let p2 = AiPlayer::named("p2", &mut rng);
    let mut game = Game::new(Box::new(p1), Box::new(p2));
    game.place_fleets(&mut rng).unwrap();

    let status = game.run_to_end(&mut rng, 400).unwrap();
    let winner = match status {
        GameStatus::Finished { winner } => winner,
        other => panic!("game did not finish: {:?}", other),
    };
    let loser = winner.other();
    assert!(game.board(loser).all_destroyed());
    assert!(!game.board(winner).all_destroyed());

    // every deck yields exactly one hit result
    assert_eq!(game.stats(winner).hits as usize, TOTAL_DECKS);
    assert!(game.stats(winner).shots <= 100);
    assert!((game.stats(loser).hits as usize) < TOTAL_DECKS);
    assert_eq!(
        game.turn_count(),
        game.stats(Seat::First).shots + game.stats(Seat::Second).shots
    );
    assert_eq!(game.session().games_played, 1);
    assert_eq!(game.session().wins(winner), 1);
}

#[test]
fn test_session_over_several_rounds() {
    let mut rng = SmallRng::seed_from_u64(77);
    let p1 = AiPlayer::new(&mut rng);
    let p2 = AiPlayer::new(&mut rng);
    let mut game = Game::new(Box::new(p1), Box::new(p2));

    for _ in 0..3 {
        game.reset(&mut rng);
        game.place_fleets(&mut rng).unwrap();
        let status = game.run_to_end(&mut rng, 400).unwrap();
        assert!(matches!(status, GameStatus::Finished { .. }));
    }
    let session = game.session();
    assert_eq!(session.games_played, 3);
    assert_eq!(session.wins(Seat::First) + session.wins(Seat::Second), 3);
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed: u64| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let p1 = AiPlayer::new(&mut rng);
        let p2 = AiPlayer::new(&mut rng);
        let mut game = Game::new(Box::new(p1), Box::new(p2));
        game.place_fleets(&mut rng).unwrap();
        let status = game.run_to_end(&mut rng, 400).unwrap();
        (status, game.turn_count(), game.board(Seat::First).snapshot(false))
    };
    assert_eq!(play(2024), play(2024));
}

#[test]
fn test_ai_player_follows_results() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut ai = AiPlayer::new(&mut rng);
    assert_eq!(ai.name(), "Computer");
    assert!(ai.is_automated());

    let first = ai.select_target(&mut rng).unwrap();
    ai.handle_attack_result(first, AttackResult::Hit);
    assert!(ai.targeting().is_hunting());
    assert_eq!(ai.targeting().last_hit(), Some(first));

    let next = ai.select_target(&mut rng).unwrap();
    let dist = first.0.abs_diff(next.0) + first.1.abs_diff(next.1);
    assert_eq!(dist, 1);

    ai.handle_attack_result(next, AttackResult::Miss);
    assert!(ai.targeting().is_hunting());
    ai.handle_attack_result(next, AttackResult::Destroyed);
    assert!(!ai.targeting().is_hunting());

    ai.reset(&mut rng);
    assert_eq!(ai.targeting().remaining(), 100);
}

#[test]
fn test_small_board_ai() {
    let mut rng = SmallRng::seed_from_u64(9);
    let ai = AiPlayer::with_board_size("tiny", 4, &mut rng);
    assert_eq!(ai.targeting().size(), 4);
    assert_eq!(ai.targeting().remaining(), 16);
}
