//! Outcome-independent move notation.
//!
//! Writes `<letter><from>-<to>` from a move and the piece that attempted it,
//! so a piece removed by a collision still records the move it tried to
//! make. Pawns omit the piece letter.

use crate::game_state::chess_types::{Move, Piece};
use crate::utils::algebraic::square_to_algebraic;

/// Algebraic-style notation for one side's move (`"e2-e4"`, `"Ng1-f3"`).
pub fn move_notation(mv: Move, piece: Piece) -> String {
    let mut out = String::new();
    if let Some(letter) = piece.kind.letter() {
        out.push(letter);
    }
    out.push_str(&square_to_algebraic(mv.from));
    out.push('-');
    out.push_str(&square_to_algebraic(mv.to));
    out
}
