//! Plain-text driver for playing simultaneous chess at a terminal.
//!
//! Acts as the engine's external collaborator: prompts each side for a move,
//! submits and confirms both, resolves the round, and renders the result.
//! `simul_chess harness [seed] [rounds]` instead runs the seeded random
//! playout harness and prints its report.

use std::io::{self, BufRead, Write};

use simul_chess::game_state::chess_types::{Color, Move};
use simul_chess::game_state::game_state::GameState;
use simul_chess::move_legality::legal_move_checks::is_legal;
use simul_chess::resolution::game_over::game_over_message;
use simul_chess::resolution::resolve::resolve_round;
use simul_chess::utils::algebraic::parse_move;
use simul_chess::utils::render_game_state::render_game_state;
use simul_chess::utils::round_harness::{run_random_rounds, HarnessConfig};
use simul_chess::utils::round_log::write_round_log;

fn main() -> io::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.get(1).map(String::as_str) == Some("harness") {
        run_harness_mode(&args);
        return Ok(());
    }

    run_stdio_loop()
}

fn run_harness_mode(args: &[String]) {
    let mut config = HarnessConfig::default();
    if let Some(seed) = args.get(2).and_then(|value| value.parse().ok()) {
        config.seed = seed;
    }
    if let Some(rounds) = args.get(3).and_then(|value| value.parse().ok()) {
        config.max_rounds = rounds;
    }

    let mut game = GameState::new_game();
    let stats = run_random_rounds(&mut game, &config);

    println!("{}", render_game_state(&game.board));
    println!("{}", stats.report());
}

fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut game = GameState::new_game();

    writeln!(stdout, "{}", render_game_state(&game.board))?;
    writeln!(
        stdout,
        "Enter moves as e2e4 or e2-e4; 'quit' ends the session."
    )?;

    loop {
        let Some(white_move) = read_move(&stdin, &mut stdout, &game, Color::White)? else {
            break;
        };
        game.submit_move(Color::White, white_move);
        game.confirm_move(Color::White);

        let Some(black_move) = read_move(&stdin, &mut stdout, &game, Color::Black)? else {
            break;
        };
        game.submit_move(Color::Black, black_move);
        game.confirm_move(Color::Black);

        let outcome = resolve_round(&mut game);
        if !outcome.success {
            if let Some(message) = outcome.message {
                writeln!(stdout, "{message}")?;
            }
            continue;
        }

        writeln!(
            stdout,
            "Round {}: {} {}",
            game.move_history.len(),
            outcome.white_notation.as_deref().unwrap_or("-"),
            outcome.black_notation.as_deref().unwrap_or("-"),
        )?;
        for note in &outcome.conflicts {
            writeln!(stdout, "  {note}")?;
        }

        game.current_player = Color::White;
        writeln!(stdout, "{}", render_game_state(&game.board))?;

        if let Some(message) = game_over_message(&game.board) {
            writeln!(stdout, "{message}")?;
            let result = if message.starts_with("White wins") {
                "1-0"
            } else {
                "0-1"
            };
            writeln!(stdout, "{}", write_round_log(&game.move_history, result))?;
            break;
        }
    }

    Ok(())
}

fn read_move(
    stdin: &io::Stdin,
    stdout: &mut io::Stdout,
    game: &GameState,
    color: Color,
) -> io::Result<Option<Move>> {
    loop {
        write!(stdout, "{}> ", color.name().to_lowercase())?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "quit" {
            return Ok(None);
        }

        match parse_move(trimmed) {
            Ok(mv) => {
                let owns_origin = matches!(
                    game.board.piece_at(mv.from),
                    Some(piece) if piece.color == color
                );
                if owns_origin && is_legal(&game.board, mv.from, mv.to) {
                    return Ok(Some(mv));
                }
                writeln!(stdout, "Illegal move for {}: {trimmed}", color.name())?;
            }
            Err(error) => writeln!(stdout, "{error}")?,
        }
    }
}
