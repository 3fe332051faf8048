//! Fixed rule constants for the simultaneous variant.

use crate::game_state::chess_types::{Color, PieceKind};

/// Back-rank piece order shared by both colors, col 0 through col 7.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Row a color's back rank occupies at the start of the game.
#[inline]
pub const fn back_rank_row(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Row a color's pawns start on; double-step moves are only legal from here.
#[inline]
pub const fn pawn_home_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Direction a color's pawns advance along the row axis.
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}
