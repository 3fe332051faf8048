//! Errors used throughout the simultaneous-chess engine.
//!
//! This module defines the canonical error type returned by game logic and
//! parsing utilities. The enum `ChessErrors` is used as the single error
//! type across the crate to simplify propagation and matching. Round
//! resolution itself never propagates these as `Err`: the resolver folds
//! them into a structured `RoundOutcome` with `success = false` and the
//! variant's display text as the message, so a failed round is an ordinary
//! value the caller can show and recover from.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Color;

/// Unified error type for the engine.
///
/// Variants carry contextual payloads where useful (the offending side,
/// character, or coordinates) so callers can log or display precise
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Resolution was attempted while at least one side had no pending move.
    MissingPendingMove,

    /// The named side's pending move failed legality against the pre-round
    /// board. Neither pending slot is cleared on this path, so the caller
    /// may prompt that side to resubmit.
    InvalidMove(Color),

    /// A single character used during algebraic parsing was invalid (a file
    /// outside 'a'..'h' or a rank outside '1'..'8').
    InvalidAlgebraicChar(char),

    /// An algebraic string (multi-character) failed to parse as a square or
    /// move.
    InvalidAlgebraicString(String),

    /// Row or column indices outside 0..=7.
    ///
    /// Payload: (row, col) zero-based.
    OutOfBounds(u8, u8),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::MissingPendingMove => write!(f, "Both players must have moves"),
            ChessErrors::InvalidMove(Color::White) => write!(f, "Invalid white move"),
            ChessErrors::InvalidMove(Color::Black) => write!(f, "Invalid black move"),
            ChessErrors::InvalidAlgebraicChar(c) => {
                write!(f, "Invalid algebraic character: {c}")
            }
            ChessErrors::InvalidAlgebraicString(s) => {
                write!(f, "Invalid algebraic move: {s}")
            }
            ChessErrors::OutOfBounds(row, col) => {
                write!(f, "Square off the board: ({row}, {col})")
            }
        }
    }
}

impl Error for ChessErrors {}
