//! Move legality orchestrator
//!
//! Combines the per-piece rules with the checks that span the whole board:
//! friendly-fire, castling, and "does this leave my own king in check".
//!
//! # Pseudo-legal vs legal
//!
//! Check detection has to ask "can this enemy piece reach the king's
//! square", and that question must not in turn demand that the enemy's own
//! king stays safe, or detection would recurse forever. The two questions are
//! therefore separate functions:
//!
//! - [`is_pseudo_legal`] - geometry, occupancy and (optionally) castling
//! - [`is_legal`] - pseudo-legal, then simulated to reject self-check
//!
//! [`super::check::is_king_in_check`] only ever calls [`is_pseudo_legal`] with
//! castling disabled, which is what ends the recursion.

use super::board_state::BoardState;
use super::castling::is_castling_valid;
use super::check::is_king_in_check;
use super::geometry::{is_same_square, is_valid_square};
use super::piece_moves::is_piece_move;
use crate::game::types::{GameContext, Piece, PieceType, Square};

/// Options for [`is_valid_move`]
///
/// Defaults match a player-facing query: self-check filtering and castling
/// both enabled, no context.
#[derive(Debug, Clone, Copy)]
pub struct MoveOptions<'a> {
    pub context: Option<&'a GameContext>,
    pub check_for_own_check: bool,
    pub allow_castling: bool,
}

impl<'a> MoveOptions<'a> {
    pub fn with_context(context: &'a GameContext) -> Self {
        MoveOptions {
            context: Some(context),
            ..MoveOptions::default()
        }
    }
}

impl Default for MoveOptions<'_> {
    fn default() -> Self {
        MoveOptions {
            context: None,
            check_for_own_check: true,
            allow_castling: true,
        }
    }
}

/// Option-driven entry point
///
/// Routes to [`is_legal`] or [`is_pseudo_legal`] depending on
/// `check_for_own_check`.
pub fn is_valid_move(
    from: Square,
    to: Square,
    piece: Piece,
    board: &BoardState,
    options: &MoveOptions<'_>,
) -> bool {
    if !is_pseudo_legal(from, to, piece, board, options.context, options.allow_castling) {
        return false;
    }
    if !options.check_for_own_check {
        return true;
    }
    !leaves_king_in_check(from, to, piece, board, options.context)
}

/// Everything except the self-check filter
///
/// Rejections, in order: `from == to`, off-board squares, a same-color piece
/// on the destination, then the piece's own movement rule. A king that fails
/// its one-square rule may still castle when it is unmoved, `allow_castling`
/// is set, the jump is two files and the context grants the matching right.
pub fn is_pseudo_legal(
    from: Square,
    to: Square,
    piece: Piece,
    board: &BoardState,
    context: Option<&GameContext>,
    allow_castling: bool,
) -> bool {
    // Can't move to the same square
    if is_same_square(from, to) {
        return false;
    }

    // Can't move off the board
    if !is_valid_square(from) || !is_valid_square(to) {
        return false;
    }

    // Can't capture your own pieces
    if board.get_piece_color(to) == Some(piece.color) {
        return false;
    }

    if is_piece_move(from, to, piece, board, context) {
        return true;
    }

    piece.kind == PieceType::King
        && allow_castling
        && is_castling_request(from, to, piece, context)
        && is_castling_valid(from, to, piece.color, board)
}

/// Pseudo-legal with castling allowed, and the mover's king safe afterwards
pub fn is_legal(
    from: Square,
    to: Square,
    piece: Piece,
    board: &BoardState,
    context: Option<&GameContext>,
) -> bool {
    is_pseudo_legal(from, to, piece, board, context, true)
        && !leaves_king_in_check(from, to, piece, board, context)
}

/// True when the piece is a pawn landing diagonally on the context's
/// en-passant target
pub fn is_en_passant_capture(
    from: Square,
    to: Square,
    piece: Piece,
    board: &BoardState,
    context: Option<&GameContext>,
) -> bool {
    piece.kind == PieceType::Pawn
        && from.col != to.col
        && board.is_empty(to)
        && context
            .and_then(|ctx| ctx.en_passant_target)
            .is_some_and(|target| is_same_square(to, target))
}

/// Private copy of `board` with the piece moved
///
/// Removes the pawn taken en passant, which stands beside the origin square
/// rather than on the destination. Rook relocation for castling and
/// promotion are left to [`super::transition::apply_move`].
pub fn simulate_move(
    from: Square,
    to: Square,
    piece: Piece,
    board: &BoardState,
    context: Option<&GameContext>,
) -> BoardState {
    let mut next = *board;
    if is_en_passant_capture(from, to, piece, board, context) {
        next.set(Square::new(from.row, to.col), None);
    }
    next.set(from, None);
    next.put(to, piece);
    next
}

fn leaves_king_in_check(
    from: Square,
    to: Square,
    piece: Piece,
    board: &BoardState,
    context: Option<&GameContext>,
) -> bool {
    let next = simulate_move(from, to, piece, board, context);
    is_king_in_check(piece.color, &next, None)
}

fn is_castling_request(
    from: Square,
    to: Square,
    piece: Piece,
    context: Option<&GameContext>,
) -> bool {
    if piece.has_moved || to.col.abs_diff(from.col) != 2 {
        return false;
    }
    let king_side = to.col > from.col;
    context.is_some_and(|ctx| ctx.castling_rights.allows(piece.color, king_side))
}
