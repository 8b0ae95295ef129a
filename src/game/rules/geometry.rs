//! Square primitives shared by every piece rule

use super::board_state::BoardState;
use crate::game::types::Square;

/// True iff both coordinates are in `0..8`
pub fn is_valid_square(pos: Square) -> bool {
    pos.is_on_board()
}

pub fn is_same_square(a: Square, b: Square) -> bool {
    a.row == b.row && a.col == b.col
}

/// True if `a` and `b` share a row, a column, or a diagonal
pub fn is_aligned(a: Square, b: Square) -> bool {
    let d_row = b.row.abs_diff(a.row);
    let d_col = b.col.abs_diff(a.col);
    d_row == 0 || d_col == 0 || d_row == d_col
}

/// `(d_row, d_col)` from `from` to `to`, or `None` if either is off the board
pub fn delta(from: Square, to: Square) -> Option<(i8, i8)> {
    if !is_valid_square(from) || !is_valid_square(to) {
        return None;
    }
    Some((to.row - from.row, to.col - from.col))
}

/// Check that every square strictly between `from` and `to` is empty
///
/// Adjacent squares have an empty walk and are always clear. Squares that
/// share no line, or lie off the board, have no path and report `false`.
pub fn is_path_clear(from: Square, to: Square, board: &BoardState) -> bool {
    let Some((d_row, d_col)) = delta(from, to) else {
        return false;
    };
    if !is_aligned(from, to) {
        return false;
    }

    let (d_row, d_col) = (d_row.signum(), d_col.signum());

    let mut current = from.offset(d_row, d_col);

    while current != to {
        if !current.is_on_board() {
            return false;
        }
        if !board.is_empty(current) {
            return false;
        }
        current = current.offset(d_row, d_col);
    }

    true
}
