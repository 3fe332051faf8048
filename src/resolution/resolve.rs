//! The simultaneous resolution algorithm.
//!
//! Validates both pending moves against the pre-round board, classifies the
//! interaction between them, mutates the shared board exactly once, and
//! records the round in the session history. This is the only writer of the
//! board during a game.

use log::info;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::move_legality::legal_move_checks::is_legal;
use crate::resolution::outcome::RoundOutcome;
use crate::utils::notation::move_notation;

/// Resolve both pending moves as one round.
///
/// Failure (a missing or illegal move) leaves the board, both pending slots,
/// the confirmation flags, and the history untouched, so the caller may
/// prompt the offending side to resubmit while keeping the other side's
/// submission.
///
/// On success the interaction is classified in priority order: mutual
/// capture, then destination collision (arbitrated by piece value, ties
/// removing both pieces), then independent application of both moves.
pub fn resolve_round(game: &mut GameState) -> RoundOutcome {
    let (Some(white_move), Some(black_move)) = (game.white_pending, game.black_pending) else {
        return RoundOutcome::failure(ChessErrors::MissingPendingMove.to_string());
    };

    // Both moves are judged against the board as it stood before the round;
    // neither move can invalidate the other.
    if !is_legal(&game.board, white_move.from, white_move.to) {
        return RoundOutcome::failure(ChessErrors::InvalidMove(Color::White).to_string());
    }
    if !is_legal(&game.board, black_move.from, black_move.to) {
        return RoundOutcome::failure(ChessErrors::InvalidMove(Color::Black).to_string());
    }

    let white_piece = game
        .board
        .piece_at(white_move.from)
        .expect("validated white move starts on a piece");
    let black_piece = game
        .board
        .piece_at(black_move.from)
        .expect("validated black move starts on a piece");

    let mut conflicts = Vec::new();
    let touched: Vec<Square>;

    if white_move.to == black_move.from && black_move.to == white_move.from {
        // Head-on swap: the capture attempts meet and both pieces fall.
        conflicts.push("Mutual capture - both pieces removed".to_owned());
        game.board.set_piece(white_move.from, None);
        game.board.set_piece(black_move.from, None);
        touched = vec![white_move.from, black_move.from];
    } else if white_move.to == black_move.to {
        // Contested destination: the cheaper piece wins the square.
        let white_value = white_piece.kind.value();
        let black_value = black_piece.kind.value();

        if white_value == black_value {
            conflicts.push("Collision - both pieces removed".to_owned());
            game.board.set_piece(white_move.from, None);
            game.board.set_piece(black_move.from, None);
        } else if white_value < black_value {
            conflicts.push("Collision - Black piece removed, White moves".to_owned());
            game.board.set_piece(black_move.from, None);
            game.board.set_piece(white_move.to, Some(white_piece));
            game.board.set_piece(white_move.from, None);
        } else {
            conflicts.push("Collision - White piece removed, Black moves".to_owned());
            game.board.set_piece(white_move.from, None);
            game.board.set_piece(black_move.to, Some(black_piece));
            game.board.set_piece(black_move.from, None);
        }
        touched = vec![white_move.to];
    } else {
        // Disjoint moves: apply White's then Black's, capturing whatever
        // occupies each destination at application time.
        let captured_by_white = game.board.piece_at(white_move.to);
        game.board.set_piece(white_move.to, Some(white_piece));
        game.board.set_piece(white_move.from, None);

        let captured_by_black = game.board.piece_at(black_move.to);
        game.board.set_piece(black_move.to, Some(black_piece));
        game.board.set_piece(black_move.from, None);

        if let Some(captured) = captured_by_white {
            conflicts.push(format!("White captures {}", captured.kind.name()));
        }
        if let Some(captured) = captured_by_black {
            conflicts.push(format!("Black captures {}", captured.kind.name()));
        }

        touched = vec![
            white_move.from,
            white_move.to,
            black_move.from,
            black_move.to,
        ];
    }

    for note in &conflicts {
        info!("round conflict: {note}");
    }

    let outcome = RoundOutcome {
        success: true,
        message: None,
        white_notation: Some(move_notation(white_move, white_piece)),
        black_notation: Some(move_notation(black_move, black_piece)),
        conflicts,
        touched_squares: touched.clone(),
    };

    game.last_move_squares = touched;
    game.move_history.push(outcome.clone());
    game.white_pending = None;
    game.black_pending = None;
    game.white_confirmed = false;
    game.black_confirmed = false;

    outcome
}
