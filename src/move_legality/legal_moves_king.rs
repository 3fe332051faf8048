use crate::game_state::chess_types::Square;
use crate::move_legality::legal_move_shared::move_deltas;

/// King legality: at most one square on each axis. The zero-delta non-move
/// also satisfies the inequality; the dispatch's own-piece destination check
/// is what rejects it, since the mover itself occupies the origin.
pub fn king_move_is_legal(from: Square, to: Square) -> bool {
    let (row_delta, col_delta) = move_deltas(from, to);
    row_delta <= 1 && col_delta <= 1
}
