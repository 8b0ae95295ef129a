//! Chess piece movement rules
//!
//! Contains the rules for how each chess piece can move.
//! Pure functions with no side effects - easy to test.
//!
//! These predicates answer "is this displacement geometrically legal for the
//! piece, given occupancy". They never ask whether the move leaves the
//! mover's king in check, and they never decide castling; both belong to
//! [`super::legality`].

use super::board_state::BoardState;
use super::geometry::{delta, is_path_clear, is_same_square};
use crate::game::types::{GameContext, Piece, PieceType, Square};

/// Dispatch to the movement rule for `piece.kind`
pub fn is_piece_move(
    from: Square,
    to: Square,
    piece: Piece,
    board: &BoardState,
    context: Option<&GameContext>,
) -> bool {
    match piece.kind {
        PieceType::Pawn => is_valid_pawn_move(from, to, piece, board, context),
        PieceType::Rook => is_valid_rook_move(from, to, board),
        PieceType::Knight => is_valid_knight_move(from, to),
        PieceType::Bishop => is_valid_bishop_move(from, to, board),
        PieceType::Queen => is_valid_queen_move(from, to, board),
        PieceType::King => is_valid_king_move(from, to),
    }
}

pub fn is_valid_pawn_move(
    from: Square,
    to: Square,
    piece: Piece,
    board: &BoardState,
    context: Option<&GameContext>,
) -> bool {
    let direction = piece.color.pawn_direction();

    let Some((dy, dx)) = delta(from, to) else {
        return false;
    };

    // Forward move
    if dx == 0 && dy == direction {
        return board.is_empty(to);
    }

    // Double move from starting position
    if dx == 0 && dy == 2 * direction {
        let intermediate = from.offset(direction, 0);
        return !piece.has_moved
            && from.row == piece.color.pawn_start_row()
            && board.is_empty(intermediate)
            && board.is_empty(to);
    }

    if dx.abs() == 1 && dy == direction {
        // Capture diagonally
        if let Some(target_color) = board.get_piece_color(to) {
            return target_color != piece.color;
        }

        // En passant onto the skipped square
        return context
            .and_then(|ctx| ctx.en_passant_target)
            .is_some_and(|target| is_same_square(to, target));
    }

    false
}

pub fn is_valid_knight_move(from: Square, to: Square) -> bool {
    let Some((dy, dx)) = delta(from, to) else {
        return false;
    };
    let (dx, dy) = (dx.abs(), dy.abs());
    (dx == 2 && dy == 1) || (dx == 1 && dy == 2)
}

pub fn is_valid_bishop_move(from: Square, to: Square, board: &BoardState) -> bool {
    let Some((dy, dx)) = delta(from, to) else {
        return false;
    };
    let (dx, dy) = (dx.abs(), dy.abs());

    // Must move diagonally
    if dx != dy || dx == 0 {
        return false;
    }

    is_path_clear(from, to, board)
}

pub fn is_valid_rook_move(from: Square, to: Square, board: &BoardState) -> bool {
    // Must move horizontally or vertically
    if from.row != to.row && from.col != to.col {
        return false;
    }
    if from == to {
        return false;
    }

    is_path_clear(from, to, board)
}

pub fn is_valid_queen_move(from: Square, to: Square, board: &BoardState) -> bool {
    // Queen moves like rook or bishop
    is_valid_rook_move(from, to, board) || is_valid_bishop_move(from, to, board)
}

/// One square in any direction; castling is decided by the orchestrator
pub fn is_valid_king_move(from: Square, to: Square) -> bool {
    let Some((dy, dx)) = delta(from, to) else {
        return false;
    };
    let (dx, dy) = (dx.abs(), dy.abs());

    dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
}
