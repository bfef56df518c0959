#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    board::Board,
    config::{fleet_count, DEFAULT_BOARD_SIZE, FLEET},
    ship::{Orientation, ShipClass},
    ui, BoardError,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Column letters accepted besides `A`..`Z`, for Cyrillic keyboards.
const CYRILLIC_COLUMNS: &str = "АБВГДЕЖЗИК";

/// Human player reading commands from a line-based input.
pub struct CliPlayer {
    name: String,
    input: Box<dyn BufRead>,
    board_size: usize,
    color: bool,
}

impl CliPlayer {
    /// Player reading from stdin.
    pub fn new(name: &str, color: bool) -> Self {
        Self::with_input(name, Box::new(io::stdin().lock()), color)
    }

    /// Player reading from any line source, e.g. a scripted session.
    pub fn with_input(name: &str, input: Box<dyn BufRead>, color: bool) -> Self {
        Self {
            name: String::from(name),
            input,
            board_size: DEFAULT_BOARD_SIZE,
            color,
        }
    }

    /// Target board size used to validate coordinates.
    pub fn board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Print `prompt` and read one trimmed line. `None` on end of input.
    fn ask(&mut self, prompt: &str) -> Option<String> {
        std::print!("{}", prompt);
        let _ = io::stdout().flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn in_bounds(&self, (x, y): (usize, usize)) -> bool {
        x < self.board_size && y < self.board_size
    }

    /// Prompt for every ship of the fleet. `false` if input ended first.
    fn place_manually(&mut self, board: &mut Board) -> bool {
        let mut placed_of_len = [0usize; 5];
        for &length in FLEET.iter() {
            placed_of_len[length] += 1;
            let label = ShipClass::from_length(length).map_or("Ship", ShipClass::name);
            loop {
                std::println!("{}", ui::render_board(board, false, self.color));
                let prompt = std::format!(
                    "Place {} ({} decks) {}/{}, e.g. A5 H or A5 V: ",
                    label,
                    length,
                    placed_of_len[length],
                    fleet_count(length)
                );
                let Some(line) = self.ask(&prompt) else {
                    return false;
                };
                let mut parts = line.split_whitespace();
                let coord = parts.next().and_then(parse_coord);
                let orientation = match parts.next() {
                    Some(p) => parse_orientation(p),
                    None if length == 1 => Some(Orientation::Vertical),
                    None => None,
                };
                let (Some((x, y)), Some(o)) = (coord, orientation) else {
                    std::println!("Invalid input");
                    continue;
                };
                if board.place(x, y, length, o) {
                    std::println!("Ship placed!");
                    break;
                }
                std::println!("Cannot place a ship there, try again.");
            }
        }
        true
    }
}

/// Parse `A5`-style input into `(x, y)`: a column letter (Latin or
/// Cyrillic) and a 1-based row number.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let mut chars = input.trim().chars();
    let x = column_index(chars.next()?)?;
    let row: usize = chars.as_str().trim().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((x, row - 1))
}

fn column_index(ch: char) -> Option<usize> {
    let upper = ch.to_uppercase().next()?;
    if upper.is_ascii_uppercase() {
        return Some((upper as u8 - b'A') as usize);
    }
    CYRILLIC_COLUMNS.chars().position(|c| c == upper)
}

/// `H`/`1` for horizontal, `V`/`2` for vertical.
pub fn parse_orientation(input: &str) -> Option<Orientation> {
    match input.trim().to_ascii_uppercase().as_str() {
        "H" | "1" => Some(Orientation::Horizontal),
        "V" | "2" => Some(Orientation::Vertical),
        _ => None,
    }
}

impl Player for CliPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_automated(&self) -> bool {
        false
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        std::println!("\n=== Ship placement ===");
        let answer = self.ask("Place ships automatically? [Y/n]: ");
        let manual = matches!(answer.as_deref(), Some("n") | Some("N"));
        if manual {
            board.reset();
            if self.place_manually(board) {
                std::println!("\nAll ships placed!");
                std::println!("{}", ui::render_board(board, false, self.color));
                return Ok(());
            }
            std::println!("\nInput closed, placing the fleet automatically.");
        }
        board.place_fleet_random(rng)?;
        std::println!("{}", ui::render_board(board, false, self.color));
        Ok(())
    }

    fn select_target(&mut self, _rng: &mut SmallRng) -> Option<(usize, usize)> {
        loop {
            let line = self.ask("Enter target (e.g. A5), or q to quit: ")?;
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                return None;
            }
            match parse_coord(&line) {
                Some(coord) if self.in_bounds(coord) => return Some(coord),
                _ => std::println!(
                    "Invalid format! Use a column letter and a row number from 1 to {}.",
                    self.board_size
                ),
            }
        }
    }
}
