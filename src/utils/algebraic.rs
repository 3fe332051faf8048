//! Square and move conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the engine's
//! row/column squares, reused by the notation writer and the stdin driver.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Move, Square};

/// Convert algebraic coordinates (for example: "e4") to a square.
pub fn algebraic_to_square(text: &str) -> Result<Square, ChessErrors> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank as char));
    }

    let col = file - b'a';
    // Rank 8 is row 0; rank 1 is row 7.
    let row = b'8' - rank;
    Ok(Square::new(row, col))
}

/// Convert a square to algebraic coordinates (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col);
    let rank_char = char::from(b'8' - square.row);
    format!("{file_char}{rank_char}")
}

/// Parse a move written as "e2e4" or "e2-e4".
pub fn parse_move(text: &str) -> Result<Move, ChessErrors> {
    let trimmed = text.trim();
    if !trimmed.is_ascii() {
        return Err(ChessErrors::InvalidAlgebraicString(trimmed.to_owned()));
    }

    let (from_text, to_text) = match trimmed.len() {
        4 => (&trimmed[0..2], &trimmed[2..4]),
        5 if trimmed.as_bytes()[2] == b'-' => (&trimmed[0..2], &trimmed[3..5]),
        _ => return Err(ChessErrors::InvalidAlgebraicString(trimmed.to_owned())),
    };

    Ok(Move::new(
        algebraic_to_square(from_text)?,
        algebraic_to_square(to_text)?,
    ))
}
