use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::move_legality::legal_move_shared::{move_deltas, path_is_clear};

/// Queen legality: a rook-type or bishop-type line, path-clear along
/// whichever line is taken.
pub fn queen_move_is_legal(board: &Board, from: Square, to: Square) -> bool {
    let (row_delta, col_delta) = move_deltas(from, to);
    (row_delta == col_delta || row_delta == 0 || col_delta == 0)
        && path_is_clear(board, from, to)
}
