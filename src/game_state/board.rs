//! 8x8 board representation.
//!
//! A plain mailbox grid of optional pieces. Legality checks only read it;
//! the resolution algorithm is the single writer during a game.

use crate::game_state::chess_rules::{back_rank_row, pawn_home_row, BACK_RANK};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

/// The shared 8x8 grid, indexed `[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board([[Option<Piece>; 8]; 8]);

impl Board {
    /// A board with every square free. Used by tests and position setup.
    pub fn empty() -> Self {
        Board([[None; 8]; 8])
    }

    /// Standard starting arrangement: back ranks R N B Q K B N R on rows 0
    /// and 7, full pawn rows on 1 and 6.
    pub fn new_game() -> Self {
        let mut board = Board::empty();

        for color in [Color::White, Color::Black] {
            let back_row = back_rank_row(color) as usize;
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.0[back_row][col] = Some(Piece::new(*kind, color));
            }

            let pawn_row = pawn_home_row(color) as usize;
            for col in 0..8 {
                board.0[pawn_row][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }

        board
    }

    /// Pure lookup of the piece on `square`, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.0[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.0[square.row as usize][square.col as usize] = piece;
    }

    /// Removes and returns the piece on `square`.
    #[inline]
    pub fn take_piece(&mut self, square: Square) -> Option<Piece> {
        self.0[square.row as usize][square.col as usize].take()
    }

    /// True while the color's king is somewhere on the board.
    pub fn king_present(&self, color: Color) -> bool {
        Board::squares().any(|square| {
            matches!(
                self.piece_at(square),
                Some(piece) if piece.kind == PieceKind::King && piece.color == color
            )
        })
    }

    /// All 64 squares in row-major order.
    pub fn squares() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::chess_rules::BACK_RANK;
    use crate::game_state::chess_types::{Color, PieceKind, Square};

    #[test]
    fn starting_arrangement_matches_standard_chess() {
        let board = Board::new_game();

        for (col, kind) in BACK_RANK.iter().enumerate() {
            let black = board
                .piece_at(Square::new(0, col as u8))
                .expect("black back rank should be full");
            assert_eq!(black.kind, *kind);
            assert_eq!(black.color, Color::Black);

            let white = board
                .piece_at(Square::new(7, col as u8))
                .expect("white back rank should be full");
            assert_eq!(white.kind, *kind);
            assert_eq!(white.color, Color::White);
        }

        for col in 0..8 {
            let black_pawn = board
                .piece_at(Square::new(1, col))
                .expect("black pawn row should be full");
            assert_eq!(black_pawn.kind, PieceKind::Pawn);

            let white_pawn = board
                .piece_at(Square::new(6, col))
                .expect("white pawn row should be full");
            assert_eq!(white_pawn.kind, PieceKind::Pawn);
        }
    }

    #[test]
    fn middle_rows_start_empty() {
        let board = Board::new_game();
        for row in 2..=5 {
            for col in 0..8 {
                assert!(board.piece_at(Square::new(row, col)).is_none());
            }
        }
    }

    #[test]
    fn queen_and_king_sit_on_their_standard_files() {
        let board = Board::new_game();
        assert_eq!(
            board.piece_at(Square::new(0, 3)).map(|p| p.kind),
            Some(PieceKind::Queen)
        );
        assert_eq!(
            board.piece_at(Square::new(0, 4)).map(|p| p.kind),
            Some(PieceKind::King)
        );
        assert_eq!(
            board.piece_at(Square::new(7, 4)).map(|p| p.kind),
            Some(PieceKind::King)
        );
    }

    #[test]
    fn king_present_tracks_removal() {
        let mut board = Board::new_game();
        assert!(board.king_present(Color::White));
        assert!(board.king_present(Color::Black));

        board.take_piece(Square::new(7, 4));
        assert!(!board.king_present(Color::White));
        assert!(board.king_present(Color::Black));
    }
}
