//! Text rendering of boards and fleet status for the terminal front end.
//!
//! Rows are labelled `1`–`10` (the `x` coordinate), columns `A`–`J` (`y`).

use std::fmt::Write;

use crate::{board::Board, common::Coordinate, config::BOARD_SIZE};

/// Format a coordinate as column letter + row number, e.g. `B7` for `6,1`.
pub fn coord_to_string(coord: Coordinate) -> String {
    let col = (b'A' + coord.y as u8) as char;
    format!("{}{}", col, coord.x + 1)
}

/// Parse column letter + row number (`B7`, case-insensitive).
pub fn parse_coord(input: &str) -> Option<Coordinate> {
    let mut chars = input.trim().chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let y = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    let coord = Coordinate::new(row.checked_sub(1)?, y);
    coord.in_bounds().then_some(coord)
}

/// Render a board. Hits are `X`, misses `o`; with `reveal`, untouched ship
/// cells are `S`.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::from("   ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push('\n');
    for x in 0..BOARD_SIZE {
        let _ = write!(out, "{:2} ", x + 1);
        for y in 0..BOARD_SIZE {
            let coord = Coordinate::new(x, y);
            let ch = if board.hits().contains(&coord) {
                'X'
            } else if board.misses().contains(&coord) {
                'o'
            } else if reveal && board.is_occupied(coord) {
                'S'
            } else {
                '.'
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Render the fleet map: one line per ship, `#` for intact segments and `x`
/// for damaged ones.
pub fn render_fleet(board: &Board) -> String {
    let mut out = String::new();
    for ship in board.ships() {
        let segments: String = (0..ship.length())
            .map(|i| if i < ship.hits() { 'x' } else { '#' })
            .collect();
        let note = if ship.is_sunk() {
            " sunk"
        } else if !board.is_placed(ship.kind()) {
            " (not placed)"
        } else {
            ""
        };
        let _ = writeln!(out, "{:<10} {:<5}{}", ship.name(), segments, note);
    }
    out
}
