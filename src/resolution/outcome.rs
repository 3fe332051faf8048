//! Result record produced by each resolution attempt.

use crate::game_state::chess_types::Square;

/// Outcome of one `resolve_round` call.
///
/// Failed attempts carry `success = false` plus a message and leave the
/// remaining fields empty. Successful rounds carry both sides' notation
/// (written from the pieces as they stood before the round, so a piece
/// removed by a collision still records its attempted move), any conflict
/// notes, and the squares the round touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub success: bool,
    pub message: Option<String>,
    pub white_notation: Option<String>,
    pub black_notation: Option<String>,
    pub conflicts: Vec<String>,
    pub touched_squares: Vec<Square>,
}

impl RoundOutcome {
    /// A failed attempt; board and pending slots are untouched by the caller.
    pub fn failure(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            white_notation: None,
            black_notation: None,
            conflicts: Vec::new(),
            touched_squares: Vec::new(),
        }
    }
}
