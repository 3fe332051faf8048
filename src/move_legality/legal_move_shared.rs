use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;

/// True when every square strictly between `from` and `to` is empty.
///
/// Walks one step at a time along the line, so the pair must already be
/// aligned on a row, column, or diagonal.
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let row_step = (to.row as i8 - from.row as i8).signum();
    let col_step = (to.col as i8 - from.col as i8).signum();

    let mut row = from.row as i8 + row_step;
    let mut col = from.col as i8 + col_step;

    while (row, col) != (to.row as i8, to.col as i8) {
        if board.piece_at(Square::new(row as u8, col as u8)).is_some() {
            return false;
        }
        row += row_step;
        col += col_step;
    }

    true
}

/// Absolute row and column distances between two squares.
#[inline]
pub fn move_deltas(from: Square, to: Square) -> (u8, u8) {
    (from.row.abs_diff(to.row), from.col.abs_diff(to.col))
}
