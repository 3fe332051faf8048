use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::move_legality::legal_move_shared::{move_deltas, path_is_clear};

/// Rook legality: a purely horizontal or vertical move with nothing strictly
/// between origin and destination.
pub fn rook_move_is_legal(board: &Board, from: Square, to: Square) -> bool {
    let (row_delta, col_delta) = move_deltas(from, to);
    (row_delta == 0 || col_delta == 0) && path_is_clear(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::rook_move_is_legal;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn straight_lines_with_a_clear_path() {
        let mut board = Board::empty();
        board.set_piece(
            Square::new(4, 4),
            Some(Piece::new(PieceKind::Rook, Color::White)),
        );
        assert!(rook_move_is_legal(&board, Square::new(4, 4), Square::new(4, 0)));
        assert!(rook_move_is_legal(&board, Square::new(4, 4), Square::new(0, 4)));
    }

    #[test]
    fn diagonals_are_illegal() {
        let board = Board::empty();
        assert!(!rook_move_is_legal(&board, Square::new(4, 4), Square::new(2, 2)));
    }

    #[test]
    fn blocked_lines_are_illegal() {
        let board = Board::new_game();
        assert!(!rook_move_is_legal(&board, Square::new(7, 0), Square::new(5, 0)));
    }
}
