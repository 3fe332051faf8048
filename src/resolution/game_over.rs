//! King-capture game-over scan.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;

/// End-of-game message, or `None` while both kings survive.
///
/// White's king is checked first; the both-kings-gone state cannot arise
/// from the resolution algorithm (only the pieces involved in a round's
/// conflict are ever removed), so no special case exists for it.
pub fn game_over_message(board: &Board) -> Option<String> {
    if !board.king_present(Color::White) {
        return Some("Black wins - White king captured!".to_owned());
    }
    if !board.king_present(Color::Black) {
        return Some("White wins - Black king captured!".to_owned());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::game_over_message;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Square;

    #[test]
    fn fresh_game_is_not_over() {
        assert_eq!(game_over_message(&Board::new_game()), None);
    }

    #[test]
    fn missing_white_king_means_black_wins() {
        let mut board = Board::new_game();
        board.take_piece(Square::new(7, 4));
        let message = game_over_message(&board).expect("game should be over");
        assert!(message.contains("Black wins"));
    }

    #[test]
    fn missing_black_king_means_white_wins() {
        let mut board = Board::new_game();
        board.take_piece(Square::new(0, 4));
        let message = game_over_message(&board).expect("game should be over");
        assert!(message.contains("White wins"));
    }
}
