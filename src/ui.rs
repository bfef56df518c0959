#![cfg(feature = "std")]

//! Terminal rendering of boards and game statistics.

use std::fmt::Write as _;
use std::string::String;
use std::vec::Vec;

use crate::{board::Board, cell::CellState, common::AttackResult, game::Game, Seat};

const RESET: &str = "\x1b[0m";
const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Column letter for `x`; `?` past `Z`.
pub fn column_letter(x: usize) -> char {
    if x >= 26 {
        return '?';
    }
    char::from_u32('A' as u32 + x as u32).unwrap_or('?')
}

/// Human-readable coordinate: column letter followed by 1-based row.
pub fn coord_label(x: usize, y: usize) -> String {
    format!("{}{}", column_letter(x), y.saturating_add(1))
}

/// Glyph for a cell; ships and buffer zones look like water when hidden.
pub fn cell_symbol(state: CellState, hide_ships: bool) -> char {
    match state {
        CellState::Ship | CellState::Blocked if hide_ships => '~',
        CellState::Empty => '~',
        CellState::Ship => 'O',
        CellState::Miss => '*',
        CellState::Hit => 'X',
        CellState::Destroyed => '#',
        CellState::Blocked => '.',
    }
}

fn cell_color(state: CellState, hide_ships: bool) -> &'static str {
    match state {
        CellState::Ship if hide_ships => BLUE,
        CellState::Empty | CellState::Blocked => BLUE,
        CellState::Ship => GREEN,
        CellState::Miss => YELLOW,
        CellState::Hit | CellState::Destroyed => RED,
    }
}

/// Board as lines of text: a header with column letters, then one line per
/// row. Every line has the same visible width.
pub fn board_lines(board: &Board, hide_ships: bool, color: bool) -> Vec<String> {
    let size = board.size();
    let paint = |code: &str, text: &str| {
        if color {
            format!("{}{}{}", code, text, RESET)
        } else {
            text.to_string()
        }
    };

    let mut header = String::from("   ");
    for x in 0..size {
        let _ = write!(header, "{} ", column_letter(x));
    }
    let mut lines = vec![paint(CYAN, &header)];

    for y in 0..size {
        let mut line = paint(CYAN, &format!("{:2} ", y + 1));
        for x in 0..size {
            let state = board.cell_state(x, y).unwrap_or_default();
            let glyph = format!("{} ", cell_symbol(state, hide_ships));
            line.push_str(&paint(cell_color(state, hide_ships), &glyph));
        }
        lines.push(line);
    }
    lines
}

pub fn render_board(board: &Board, hide_ships: bool, color: bool) -> String {
    board_lines(board, hide_ships, color).join("\n")
}

/// Two titled boards side by side. The right one is masked when
/// `hide_right` is set, the way an opponent sees it.
pub fn render_boards(
    left: (&str, &Board),
    right: (&str, &Board),
    hide_right: bool,
    color: bool,
) -> String {
    let width = 3 + 2 * left.1.size();
    let mut out = format!("{:<width$}    {}\n", left.0, right.0, width = width);
    let l = board_lines(left.1, false, color);
    let r = board_lines(right.1, hide_right, color);
    for (a, b) in l.iter().zip(r.iter()) {
        let _ = writeln!(out, "{}    {}", a, b);
    }
    out
}

/// Message shown after a shot.
pub fn describe_result(result: AttackResult) -> &'static str {
    match result {
        AttackResult::Miss => "Miss!",
        AttackResult::Hit => "Hit!",
        AttackResult::Destroyed => "Destroyed!",
        AttackResult::AlreadyHit => "Already fired there, shoot again.",
        AttackResult::Invalid => "Invalid coordinates!",
    }
}

/// Turn counter and ships still afloat on each side.
pub fn render_status(game: &Game) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Turn: {}", game.turn_count());
    for seat in [Seat::First, Seat::Second] {
        let _ = writeln!(
            out,
            "{}: {} ship(s) afloat",
            game.player(seat).name(),
            game.board(seat).alive_count()
        );
    }
    out
}

/// End-of-game summary with per-player shooting statistics.
pub fn render_summary(game: &Game) -> String {
    let mut out = String::new();
    if let Some(winner) = game.winner() {
        let _ = writeln!(out, "VICTORY! {} wins!", game.player(winner).name());
    }
    let _ = writeln!(out, "Total turns: {}", game.turn_count());
    for seat in [Seat::First, Seat::Second] {
        let stats = game.stats(seat);
        let _ = writeln!(
            out,
            "  {} - shots: {}, hits: {}, accuracy: {:.1}%",
            game.player(seat).name(),
            stats.shots,
            stats.hits,
            stats.accuracy()
        );
    }
    let session = game.session();
    let _ = writeln!(
        out,
        "Games played: {} ({} {} / {} {})",
        session.games_played,
        game.player(Seat::First).name(),
        session.wins(Seat::First),
        game.player(Seat::Second).name(),
        session.wins(Seat::Second)
    );
    out
}
