use crate::game_state::board::Board;
use crate::game_state::chess_rules::{pawn_direction, pawn_home_row};
use crate::game_state::chess_types::{Color, Square};

/// Pawn legality: a single push onto an empty square, a double push from the
/// home row across two empty squares, or a one-square diagonal capture.
/// Diagonal moves onto empty squares are illegal (no en passant), as are all
/// backward moves.
pub fn pawn_move_is_legal(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let direction = pawn_direction(color);
    let rows_advanced = (to.row as i8 - from.row as i8) * direction;
    let col_delta = from.col.abs_diff(to.col);

    if col_delta == 0 {
        if rows_advanced == 1 && board.piece_at(to).is_none() {
            return true;
        }
        if rows_advanced == 2 && from.row == pawn_home_row(color) && board.piece_at(to).is_none() {
            let step = Square::new((from.row as i8 + direction) as u8, from.col);
            return board.piece_at(step).is_none();
        }
        return false;
    }

    if col_delta == 1 && rows_advanced == 1 {
        return matches!(board.piece_at(to), Some(target) if target.color != color);
    }

    false
}
