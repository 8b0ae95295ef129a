//! State transitions between plies
//!
//! The predicates in this module's siblings only *read* positions. Applying a
//! confirmed move is the one place where the position changes, and it is
//! specified here once so that castling-rights revocation and the en-passant
//! lifecycle do not live in whatever UI drives the game.
//!
//! # Rules applied
//!
//! - A king move (castling included) revokes both of that color's rights
//! - A rook leaving its home corner revokes that side's right
//! - Any move landing on an enemy home corner revokes the enemy's right on
//!   that side, so a rook captured in place loses castling too
//! - A pawn double-step sets the en-passant target to the skipped square;
//!   every other move clears it
//! - The side to move flips

use super::board_state::BoardState;
use super::castling::rook_files;
use super::legality::{is_legal, simulate_move};
use crate::game::error::{GameError, GameResult};
use crate::game::types::{GameContext, Move, Piece, PieceColor, PieceType, Square};
use tracing::debug;

/// A pawn landing on row 0 or row 7 must promote
pub fn needs_pawn_promotion(to: Square, piece: Piece) -> bool {
    piece.kind == PieceType::Pawn && (to.row == 0 || to.row == 7)
}

/// Choices offered to a promoting pawn, already flagged as moved
pub fn get_pawn_promotion_pieces(color: PieceColor) -> Vec<Piece> {
    PieceType::PROMOTIONS
        .iter()
        .map(|&kind| Piece::new(kind, color).moved())
        .collect()
}

/// Context after `mv` is played on `board`
///
/// `board` is the position *before* the move. The move is assumed legal;
/// use [`apply_move`] to validate and transition together.
pub fn next_context(board: &BoardState, context: &GameContext, mv: &Move) -> GameContext {
    let mut next = *context;
    next.current_player = context.current_player.opponent();
    next.en_passant_target = None;

    let Some(piece) = board.get(mv.from) else {
        return next;
    };

    match piece.kind {
        PieceType::King => {
            let rights = next.castling_rights.for_color_mut(piece.color);
            rights.king_side = false;
            rights.queen_side = false;
        }
        PieceType::Rook => revoke_corner(&mut next, piece.color, mv.from),
        PieceType::Pawn if mv.to.row.abs_diff(mv.from.row) == 2 => {
            next.en_passant_target = Some(Square::new((mv.from.row + mv.to.row) / 2, mv.from.col));
        }
        _ => {}
    }

    revoke_corner(&mut next, piece.color.opponent(), mv.to);

    next
}

/// Validate `mv` and produce the next board and context
///
/// Moves the rook when castling, removes the pawn taken en passant, swaps in
/// the promotion piece, and marks the mover as moved. Neither input is
/// modified.
pub fn apply_move(
    board: &BoardState,
    context: &GameContext,
    mv: &Move,
) -> GameResult<(BoardState, GameContext)> {
    let piece = board
        .get(mv.from)
        .ok_or(GameError::PieceNotFound { square: mv.from })?;

    if piece.color != context.current_player {
        return Err(GameError::NotYourTurn {
            square: mv.from,
            expected: context.current_player,
            found: piece.color,
        });
    }

    if !is_legal(mv.from, mv.to, piece, board, Some(context)) {
        return Err(GameError::InvalidMove {
            from: mv.from,
            to: mv.to,
        });
    }

    let placed = match (needs_pawn_promotion(mv.to, piece), mv.promotion) {
        (true, Some(kind)) if kind.is_promotion_target() => Piece::new(kind, piece.color).moved(),
        (true, None) => return Err(GameError::PromotionRequired { square: mv.to }),
        (_, Some(kind)) => {
            return Err(GameError::InvalidPromotion {
                square: mv.to,
                kind,
            })
        }
        (false, None) => piece.moved(),
    };

    let mut next_board = simulate_move(mv.from, mv.to, placed, board, Some(context));

    if piece.kind == PieceType::King && mv.to.col.abs_diff(mv.from.col) == 2 {
        let (rook_from, rook_to) = rook_files(mv.to.col > mv.from.col);
        let row = mv.from.row;
        if let Some(rook) = next_board.take(Square::new(row, rook_from)) {
            next_board.put(Square::new(row, rook_to), rook.moved());
        }
    }

    let next = next_context(board, context, mv);

    debug!(
        "[RULES] {} played {}{}, {} to move",
        piece.color,
        mv.from,
        mv.to,
        next.current_player
    );

    Ok((next_board, next))
}

fn revoke_corner(context: &mut GameContext, color: PieceColor, square: Square) {
    if square.row != color.home_row() {
        return;
    }
    let rights = context.castling_rights.for_color_mut(color);
    if square.col == rook_files(true).0 {
        rights.king_side = false;
    } else if square.col == rook_files(false).0 {
        rights.queen_side = false;
    }
}
