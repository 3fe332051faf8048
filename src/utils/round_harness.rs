//! Random-playout harness for local testing.
//!
//! Plays both sides with uniformly random legal moves through the public
//! submission and resolution API, with a seeded generator so runs are
//! reproducible. Used by the driver's `harness` mode and by smoke tests.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move};
use crate::game_state::game_state::GameState;
use crate::move_legality::legal_move_checks::valid_destinations;
use crate::resolution::game_over::game_over_message;
use crate::resolution::resolve::resolve_round;

#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub max_rounds: u32,
    pub seed: u64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            max_rounds: 200,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HarnessStats {
    pub rounds_played: u32,
    pub conflict_rounds: u32,
    pub final_message: Option<String>,
}

impl HarnessStats {
    pub fn report(&self) -> String {
        format!(
            "rounds={} conflict_rounds={} result={}",
            self.rounds_played,
            self.conflict_rounds,
            self.final_message.as_deref().unwrap_or("undecided"),
        )
    }
}

/// Play random legal rounds until a king falls or the round cap is reached.
///
/// Both sides pick against the same pre-round board, which matches the
/// engine's validation rule: a move is never invalidated by the other
/// player's move.
pub fn run_random_rounds(game: &mut GameState, config: &HarnessConfig) -> HarnessStats {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut stats = HarnessStats::default();

    for _ in 0..config.max_rounds {
        let Some(white_move) = random_legal_move(&game.board, Color::White, &mut rng) else {
            break;
        };
        let Some(black_move) = random_legal_move(&game.board, Color::Black, &mut rng) else {
            break;
        };

        game.submit_move(Color::White, white_move);
        game.confirm_move(Color::White);
        game.submit_move(Color::Black, black_move);
        game.confirm_move(Color::Black);

        let outcome = resolve_round(game);
        if !outcome.success {
            break;
        }

        stats.rounds_played += 1;
        if !outcome.conflicts.is_empty() {
            stats.conflict_rounds += 1;
        }
        game.current_player = Color::White;

        if let Some(message) = game_over_message(&game.board) {
            stats.final_message = Some(message);
            break;
        }
    }

    stats
}

fn random_legal_move(board: &Board, color: Color, rng: &mut StdRng) -> Option<Move> {
    let mut moves = Vec::new();
    for from in Board::squares() {
        if matches!(board.piece_at(from), Some(piece) if piece.color == color) {
            for to in valid_destinations(board, from) {
                moves.push(Move::new(from, to));
            }
        }
    }
    moves.as_slice().choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::{run_random_rounds, HarnessConfig};
    use crate::game_state::game_state::GameState;
    use crate::resolution::game_over::game_over_message;

    #[test]
    fn seeded_runs_are_reproducible() {
        let config = HarnessConfig {
            max_rounds: 30,
            seed: 7,
        };

        let mut first = GameState::new_game();
        let mut second = GameState::new_game();
        let first_stats = run_random_rounds(&mut first, &config);
        let second_stats = run_random_rounds(&mut second, &config);

        assert_eq!(first_stats.rounds_played, second_stats.rounds_played);
        assert_eq!(first.board, second.board);
        assert_eq!(first.move_history.len(), second.move_history.len());
    }

    #[test]
    fn every_round_lands_in_history_and_slots_stay_clear() {
        let mut game = GameState::new_game();
        let stats = run_random_rounds(
            &mut game,
            &HarnessConfig {
                max_rounds: 50,
                seed: 3,
            },
        );

        assert!(stats.rounds_played > 0);
        assert_eq!(game.move_history.len() as u32, stats.rounds_played);
        assert!(game.white_pending.is_none());
        assert!(game.black_pending.is_none());
        assert!(!game.both_confirmed());
    }

    #[test]
    fn final_message_tracks_king_capture() {
        let mut game = GameState::new_game();
        let stats = run_random_rounds(
            &mut game,
            &HarnessConfig {
                max_rounds: 500,
                seed: 11,
            },
        );

        match game_over_message(&game.board) {
            Some(message) => assert_eq!(stats.final_message, Some(message)),
            None => assert_eq!(stats.final_message, None),
        }
    }
}
