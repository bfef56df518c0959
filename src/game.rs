use alloc::boxed::Box;
use core::fmt;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{AttackResult, BoardError},
    config::FLEET_SIZE,
    player::Player,
};

/// Which of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// Who sits in the two seats; used by front ends to decide pacing and views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    PlayerVsComputer,
    ComputerVsComputer,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Finished { winner: Seat },
}

/// Shots fired by one player in the current game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotStats {
    pub shots: u32,
    pub hits: u32,
}

impl ShotStats {
    /// Hits as a percentage of shots, `0.0` before the first shot.
    pub fn accuracy(&self) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        f64::from(self.hits) / f64::from(self.shots) * 100.0
    }
}

/// Results across consecutive games played with the same `Game`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionStats {
    pub games_played: u32,
    pub wins: [u32; 2],
}

impl SessionStats {
    pub fn wins(&self, seat: Seat) -> u32 {
        self.wins[seat.index()]
    }
}

/// What happened during one call to [`Game::play_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub attacker: Seat,
    pub coord: (usize, usize),
    pub result: AttackResult,
    /// `true` if this shot ended the game.
    pub finished: bool,
}

/// Errors returned by turn management.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Fleets have not been placed yet.
    NotReady,
    /// The game is already over.
    Finished,
    /// The player offered no coordinate.
    NoTarget { seat: Seat },
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotReady => write!(f, "Fleets have not been placed"),
            GameError::Finished => write!(f, "Game is already finished"),
            GameError::NoTarget { seat } => write!(f, "{:?} player has no target", seat),
            GameError::Board(e) => write!(f, "Board error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

struct Side {
    player: Box<dyn Player>,
    board: Board,
    stats: ShotStats,
}

/// Turn manager for two players, each owning the board the other attacks.
pub struct Game {
    sides: [Side; 2],
    current: Seat,
    status: GameStatus,
    turns: u32,
    session: SessionStats,
}

impl Game {
    /// Create a game on default-size boards.
    pub fn new(first: Box<dyn Player>, second: Box<dyn Player>) -> Self {
        Self::with_boards(first, second, Board::new(), Board::new())
    }

    pub fn with_board_size(
        first: Box<dyn Player>,
        second: Box<dyn Player>,
        size: usize,
    ) -> Result<Self, BoardError> {
        Ok(Self::with_boards(
            first,
            second,
            Board::with_size(size)?,
            Board::with_size(size)?,
        ))
    }

    fn with_boards(first: Box<dyn Player>, second: Box<dyn Player>, b1: Board, b2: Board) -> Self {
        let side = |player: Box<dyn Player>, board: Board| Side {
            player,
            board,
            stats: ShotStats::default(),
        };
        Self {
            sides: [side(first, b1), side(second, b2)],
            current: Seat::First,
            status: GameStatus::NotStarted,
            turns: 0,
            session: SessionStats::default(),
        }
    }

    /// Let both players place their fleets, then start the game with the
    /// first seat to move.
    pub fn place_fleets(&mut self, rng: &mut SmallRng) -> Result<(), GameError> {
        for side in self.sides.iter_mut() {
            side.player.place_ships(rng, &mut side.board)?;
            if !side.board.is_fleet_complete() {
                return Err(GameError::Board(BoardError::FleetIncomplete {
                    placed: side.board.ship_count(),
                    expected: FLEET_SIZE,
                }));
            }
        }
        self.current = Seat::First;
        self.status = GameStatus::InProgress;
        log::info!(
            "fleets placed, {} vs {}",
            self.sides[0].player.name(),
            self.sides[1].player.name()
        );
        Ok(())
    }

    /// Ask the player to move for a target and fire at the opponent's board.
    ///
    /// A hit or a destroyed ship lets the attacker fire again, a miss passes
    /// the turn, and an invalid or repeated shot keeps the turn so the
    /// attacker can retry. Every shot counts toward the attacker's stats.
    pub fn play_turn(&mut self, rng: &mut SmallRng) -> Result<TurnOutcome, GameError> {
        match self.status {
            GameStatus::NotStarted => return Err(GameError::NotReady),
            GameStatus::Finished { .. } => return Err(GameError::Finished),
            GameStatus::InProgress => {}
        }
        let attacker = self.current;
        let defender = attacker.other();

        let coord = self.sides[attacker.index()]
            .player
            .select_target(rng)
            .ok_or(GameError::NoTarget { seat: attacker })?;
        self.turns += 1;

        let result = self.sides[defender.index()].board.attack(coord.0, coord.1);
        let side = &mut self.sides[attacker.index()];
        side.stats.shots += 1;
        if result.is_hit() {
            side.stats.hits += 1;
        }
        side.player.handle_attack_result(coord, result);
        log::info!(
            "turn {}: {} fires at ({}, {}) -> {:?}",
            self.turns,
            side.player.name(),
            coord.0,
            coord.1,
            result
        );

        if result == AttackResult::Miss {
            self.current = defender;
        } else if !result.is_resolved() {
            log::debug!("shot at ({}, {}) rejected, {:?} fires again", coord.0, coord.1, attacker);
        }

        let finished = self.sides[defender.index()].board.all_destroyed();
        if finished {
            self.status = GameStatus::Finished { winner: attacker };
            self.session.games_played += 1;
            self.session.wins[attacker.index()] += 1;
            log::info!(
                "{} wins after {} turns",
                self.sides[attacker.index()].player.name(),
                self.turns
            );
        }

        Ok(TurnOutcome {
            attacker,
            coord,
            result,
            finished,
        })
    }

    /// Play turns until the game ends or `max_turns` shots have been fired.
    pub fn run_to_end(&mut self, rng: &mut SmallRng, max_turns: u32) -> Result<GameStatus, GameError> {
        while self.turns < max_turns {
            if self.play_turn(rng)?.finished {
                break;
            }
        }
        Ok(self.status)
    }

    /// Clear both boards and players for a new round. Session stats survive.
    pub fn reset(&mut self, rng: &mut SmallRng) {
        for side in self.sides.iter_mut() {
            side.board.reset();
            side.player.reset(rng);
            side.stats = ShotStats::default();
        }
        self.current = Seat::First;
        self.status = GameStatus::NotStarted;
        self.turns = 0;
    }

    pub fn reset_stats(&mut self) {
        self.session = SessionStats::default();
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Seat> {
        match self.status {
            GameStatus::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    /// Seat whose turn it is.
    pub fn current(&self) -> Seat {
        self.current
    }

    pub fn turn_count(&self) -> u32 {
        self.turns
    }

    pub fn player(&self, seat: Seat) -> &dyn Player {
        self.sides[seat.index()].player.as_ref()
    }

    /// Board owned by `seat`, i.e. the one its opponent attacks.
    pub fn board(&self, seat: Seat) -> &Board {
        &self.sides[seat.index()].board
    }

    pub fn stats(&self, seat: Seat) -> ShotStats {
        self.sides[seat.index()].stats
    }

    pub fn session(&self) -> SessionStats {
        self.session
    }

    pub fn mode(&self) -> GameMode {
        if self.sides.iter().all(|s| s.player.is_automated()) {
            GameMode::ComputerVsComputer
        } else {
            GameMode::PlayerVsComputer
        }
    }
}
