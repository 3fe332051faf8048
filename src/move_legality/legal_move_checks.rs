//! Legality dispatch over the closed piece-kind set.
//!
//! `is_legal` is a pure read of the board, so highlight-style queries can
//! call it freely; the resolution algorithm runs it against the pre-round
//! board for both pending moves.

use log::debug;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::move_legality::legal_moves_bishop::bishop_move_is_legal;
use crate::move_legality::legal_moves_king::king_move_is_legal;
use crate::move_legality::legal_moves_knight::knight_move_is_legal;
use crate::move_legality::legal_moves_pawn::pawn_move_is_legal;
use crate::move_legality::legal_moves_queen::queen_move_is_legal;
use crate::move_legality::legal_moves_rook::rook_move_is_legal;

/// True when the piece on `from` may move to `to` under the variant's rules.
///
/// No check detection, castling, or promotion exists in this variant; a move
/// is judged only by the moving piece's geometry, path clearance, and the
/// destination's occupant.
pub fn is_legal(board: &Board, from: Square, to: Square) -> bool {
    if !from.in_bounds() || !to.in_bounds() {
        debug!(
            "move rejected: coordinates off the board ({},{}) -> ({},{})",
            from.row, from.col, to.row, to.col
        );
        return false;
    }

    let Some(piece) = board.piece_at(from) else {
        debug!("move rejected: no piece on ({},{})", from.row, from.col);
        return false;
    };

    if matches!(board.piece_at(to), Some(target) if target.color == piece.color) {
        debug!(
            "move rejected: own piece on destination ({},{})",
            to.row, to.col
        );
        return false;
    }

    let legal = match piece.kind {
        PieceKind::Pawn => pawn_move_is_legal(board, from, to, piece.color),
        PieceKind::Knight => knight_move_is_legal(from, to),
        PieceKind::Bishop => bishop_move_is_legal(board, from, to),
        PieceKind::Rook => rook_move_is_legal(board, from, to),
        PieceKind::Queen => queen_move_is_legal(board, from, to),
        PieceKind::King => king_move_is_legal(from, to),
    };

    if !legal {
        debug!(
            "move rejected: illegal {} move ({},{}) -> ({},{})",
            piece.kind.name(),
            from.row,
            from.col,
            to.row,
            to.col
        );
    }

    legal
}

/// Every destination the piece on `from` may legally reach. Empty when the
/// origin square is vacant.
pub fn valid_destinations(board: &Board, from: Square) -> Vec<Square> {
    Board::squares()
        .filter(|to| is_legal(board, from, *to))
        .collect()
}
