use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::move_legality::legal_move_shared::{move_deltas, path_is_clear};

/// Bishop legality: a diagonal move with nothing strictly between origin and
/// destination.
pub fn bishop_move_is_legal(board: &Board, from: Square, to: Square) -> bool {
    let (row_delta, col_delta) = move_deltas(from, to);
    row_delta == col_delta && path_is_clear(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::bishop_move_is_legal;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn clear_diagonals_are_legal() {
        let board = Board::empty();
        assert!(bishop_move_is_legal(&board, Square::new(7, 2), Square::new(4, 5)));
        assert!(bishop_move_is_legal(&board, Square::new(4, 5), Square::new(7, 2)));
    }

    #[test]
    fn straight_lines_are_illegal() {
        let board = Board::empty();
        assert!(!bishop_move_is_legal(&board, Square::new(7, 2), Square::new(7, 5)));
    }

    #[test]
    fn blocked_diagonals_are_illegal() {
        let mut board = Board::empty();
        board.set_piece(
            Square::new(5, 4),
            Some(Piece::new(PieceKind::Pawn, Color::White)),
        );
        assert!(!bishop_move_is_legal(&board, Square::new(7, 2), Square::new(4, 5)));
    }
}
