#![cfg(feature = "std")]

//! Terminal helpers for the `salvo` binary: coordinate notation and plain
//! text views of a board.

use std::fmt::Write as _;

use crate::board::Gameboard;
use crate::common::Coord;
use crate::config::BOARD_SIZE;
use crate::ship::Orientation;

/// Render a coordinate in letter-number notation: column letter, 1-based row.
pub fn coord_to_string(coord: Coord) -> String {
    let col = (b'A' + coord.x as u8) as char;
    format!("{}{}", col, coord.y + 1)
}

/// Parse letter-number notation such as `A5` or `j10`.
pub fn parse_coord(input: &str) -> Result<Coord, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= BOARD_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > BOARD_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok(Coord::new(col, row - 1))
}

/// Parse a placement such as `A5 H` or `c3 v`. Orientation defaults to
/// horizontal.
pub fn parse_placement(input: &str) -> Result<(Coord, Orientation), String> {
    let mut parts = input.split_whitespace();
    let coord = parse_coord(parts.next().ok_or("Please enter coordinates (e.g., A5 H)")?)?;
    let orientation = match parts.next().map(|s| s.to_ascii_uppercase()) {
        None => Orientation::Horizontal,
        Some(s) if s == "H" => Orientation::Horizontal,
        Some(s) if s == "V" => Orientation::Vertical,
        Some(other) => return Err(format!("Invalid orientation '{}' - use H or V", other)),
    };
    Ok((coord, orientation))
}

/// Text grid of `board`. With `reveal` the ships are drawn; otherwise only
/// what an opponent has learned by firing.
///
/// Symbols: `S` ship, `X` hit, `o` miss, `.` water or unknown.
pub fn render_board(board: &Gameboard, reveal: bool) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push('\n');
    for y in 0..BOARD_SIZE {
        let _ = write!(out, "{:2} ", y + 1);
        for x in 0..BOARD_SIZE {
            let cell = Coord::new(x, y);
            let ch = if board.hits().contains(cell) {
                'X'
            } else if board.all_attacks().contains(cell) {
                'o'
            } else if reveal && board.occupied().contains(cell) {
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

/// One line per ship: name, length and whether it is sunk.
pub fn render_fleet_status(board: &Gameboard) -> String {
    let mut out = String::new();
    for ship in board.ships() {
        let status = if ship.is_sunk() { "SUNK" } else { "afloat" };
        let _ = writeln!(out, "  {} ({}): {}", ship.name(), ship.length(), status);
    }
    out
}
