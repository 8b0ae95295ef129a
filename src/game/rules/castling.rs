//! Castling legality
//!
//! Decides whether a king's two-file jump is a valid castle on the current
//! board. Castling *rights* (has the king or rook ever moved, has the rook
//! been captured) live in [`crate::game::types::CastlingRights`] and are
//! consulted by the orchestrator before this runs; this module only looks at
//! the board.

use super::board_state::BoardState;
use super::check::is_king_in_check;
use super::geometry::is_valid_square;
use crate::game::types::{Piece, PieceColor, PieceType, Square};

/// File the king starts on
pub const KING_FILE: i8 = 4;

/// Rook origin and destination files for a castle toward `king_side`
pub fn rook_files(king_side: bool) -> (i8, i8) {
    if king_side {
        (7, 5)
    } else {
        (0, 3)
    }
}

/// Validate a castle from `from` to `to` for `color`
///
/// Fails if the king is not an unmoved king on its home square, the target
/// is not two files along the home rank, the rook is missing, foreign or has
/// moved, anything stands between king and rook, or any square the king
/// occupies on the way (start and destination included) is attacked. Each
/// transit square is tested by standing a simulated king on it.
///
/// The rook is not moved here.
pub fn is_castling_valid(from: Square, to: Square, color: PieceColor, board: &BoardState) -> bool {
    if !is_valid_square(from) || !is_valid_square(to) {
        return false;
    }

    let row = color.home_row();
    if from != Square::new(row, KING_FILE) || to.row != row || to.col.abs_diff(from.col) != 2 {
        return false;
    }

    let king_side = to.col > from.col;
    let (rook_col, _) = rook_files(king_side);

    match board.get(Square::new(row, rook_col)) {
        Some(rook) if rook.kind == PieceType::Rook && rook.color == color && !rook.has_moved => {}
        _ => return false,
    }

    match board.get(from) {
        Some(king) if king.kind == PieceType::King && king.color == color && !king.has_moved => {}
        _ => return false,
    }

    // Path between king and rook must be empty
    let (start, end) = (from.col.min(rook_col), from.col.max(rook_col));
    if ((start + 1)..end).any(|col| !board.is_empty(Square::new(row, col))) {
        return false;
    }

    // King may not start in, pass through, or land in check
    let direction = if king_side { 1 } else { -1 };
    let mut col = from.col;
    loop {
        let transit = Square::new(row, col);
        let mut probe = *board;
        probe.set(from, None);
        probe.put(transit, Piece::new(PieceType::King, color));
        if is_king_in_check(color, &probe, Some(transit)) {
            return false;
        }
        if col == to.col {
            break;
        }
        col += direction;
    }

    true
}
