//! Aggregate state for one simultaneous-chess session.
//!
//! `GameState` is the central model for the engine. It owns the board, the
//! two pending-move slots with their confirmation flags, the caller's turn
//! marker, the append-only round history, and the last-round highlight set.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move, Square};
use crate::resolution::outcome::RoundOutcome;

/// Mutable session state owned by the caller and threaded through the
/// engine's functions. No process-wide state exists anywhere in the crate.
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,

    // --- Pending round ---
    pub white_pending: Option<Move>,
    pub black_pending: Option<Move>,
    pub white_confirmed: bool,
    pub black_confirmed: bool,

    /// Which side the caller is currently gathering a move for. Resolution
    /// is symmetric and never consults it.
    pub current_player: Color,

    // --- Round bookkeeping ---
    pub move_history: Vec<RoundOutcome>,
    pub last_move_squares: Vec<Square>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    pub fn new_game() -> Self {
        Self {
            board: Board::new_game(),
            white_pending: None,
            black_pending: None,
            white_confirmed: false,
            black_confirmed: false,
            current_player: Color::White,
            move_history: Vec::new(),
            last_move_squares: Vec::new(),
        }
    }

    /// Restore the initial arrangement and drop all round bookkeeping.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    #[inline]
    pub fn pending_move(&self, color: Color) -> Option<Move> {
        match color {
            Color::White => self.white_pending,
            Color::Black => self.black_pending,
        }
    }

    #[inline]
    pub fn is_confirmed(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_confirmed,
            Color::Black => self.black_confirmed,
        }
    }

    /// Store a side's proposed move, replacing any earlier submission.
    ///
    /// Callers are expected to have checked that the origin holds one of the
    /// side's pieces; resolution re-validates against the board anyway.
    pub fn submit_move(&mut self, color: Color, mv: Move) {
        match color {
            Color::White => self.white_pending = Some(mv),
            Color::Black => self.black_pending = Some(mv),
        }
    }

    /// Lock in a side's pending move. Returns false when nothing is pending.
    ///
    /// Confirming White hands `current_player` to Black so the caller can
    /// start gathering the other side's move; confirming Black leaves the
    /// marker alone.
    pub fn confirm_move(&mut self, color: Color) -> bool {
        if self.pending_move(color).is_none() {
            return false;
        }
        match color {
            Color::White => {
                self.white_confirmed = true;
                self.current_player = Color::Black;
            }
            Color::Black => {
                self.black_confirmed = true;
            }
        }
        true
    }

    /// Withdraw an unconfirmed submission. A confirmed move stays put.
    pub fn clear_pending(&mut self, color: Color) {
        match color {
            Color::White if !self.white_confirmed => self.white_pending = None,
            Color::Black if !self.black_confirmed => self.black_pending = None,
            _ => {}
        }
    }

    /// Gate for the caller's submit control: both sides locked in.
    #[inline]
    pub fn both_confirmed(&self) -> bool {
        self.white_confirmed && self.black_confirmed
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Move, Square};

    fn any_move() -> Move {
        Move::new(Square::new(6, 4), Square::new(4, 4))
    }

    #[test]
    fn new_game_starts_clean() {
        let game = GameState::new_game();
        assert_eq!(game.current_player, Color::White);
        assert!(game.white_pending.is_none());
        assert!(game.black_pending.is_none());
        assert!(!game.white_confirmed);
        assert!(!game.black_confirmed);
        assert!(game.move_history.is_empty());
        assert!(game.last_move_squares.is_empty());
    }

    #[test]
    fn confirm_requires_a_pending_move() {
        let mut game = GameState::new_game();
        assert!(!game.confirm_move(Color::White));
        assert!(!game.white_confirmed);

        game.submit_move(Color::White, any_move());
        assert!(game.confirm_move(Color::White));
        assert!(game.white_confirmed);
    }

    #[test]
    fn confirming_white_passes_the_turn_marker_to_black() {
        let mut game = GameState::new_game();
        game.submit_move(Color::White, any_move());
        game.confirm_move(Color::White);
        assert_eq!(game.current_player, Color::Black);

        game.submit_move(Color::Black, Move::new(Square::new(1, 4), Square::new(3, 4)));
        game.confirm_move(Color::Black);
        assert_eq!(game.current_player, Color::Black);
        assert!(game.both_confirmed());
    }

    #[test]
    fn clear_pending_respects_confirmation() {
        let mut game = GameState::new_game();
        game.submit_move(Color::White, any_move());
        game.clear_pending(Color::White);
        assert!(game.white_pending.is_none());

        game.submit_move(Color::White, any_move());
        game.confirm_move(Color::White);
        game.clear_pending(Color::White);
        assert!(game.white_pending.is_some());
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let mut game = GameState::new_game();
        game.submit_move(Color::White, any_move());
        game.confirm_move(Color::White);
        game.current_player = Color::Black;
        game.last_move_squares.push(Square::new(4, 4));

        game.reset();

        assert_eq!(game.board, Board::new_game());
        assert_eq!(game.current_player, Color::White);
        assert!(game.white_pending.is_none());
        assert!(!game.white_confirmed);
        assert!(game.move_history.is_empty());
        assert!(game.last_move_squares.is_empty());
    }
}
