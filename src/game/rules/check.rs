//! Check, checkmate and stalemate detection

use super::board_state::BoardState;
use super::legality::{is_pseudo_legal, simulate_move};
use super::move_gen::get_valid_moves;
use crate::game::types::{GameContext, GameStatus, PieceColor, Square};

/// Is `color`'s king attacked on `board`?
///
/// Locates the king when `king_pos` is not supplied, then asks every opposing
/// piece whether it could move onto that square, self-check validation and
/// castling both disabled. A board without a king of `color` reports `false`;
/// callers must keep exactly one king per color on the board.
pub fn is_king_in_check(color: PieceColor, board: &BoardState, king_pos: Option<Square>) -> bool {
    let Some(king_pos) = king_pos.or_else(|| board.find_king(color)) else {
        return false;
    };

    board
        .pieces_of(color.opponent())
        .any(|(from, piece)| is_pseudo_legal(from, king_pos, piece, board, None, false))
}

/// Is there any move by `color` after which its king is not in check?
///
/// Every pseudo-legal move is played out on a private board and the king
/// re-tested there. Passing a context lets en-passant captures count as
/// escapes.
pub fn can_move_prevent_check(
    color: PieceColor,
    board: &BoardState,
    context: Option<&GameContext>,
) -> bool {
    board.pieces_of(color).any(|(from, piece)| {
        (0..8i8)
            .flat_map(|row| (0..8i8).map(move |col| Square::new(row, col)))
            .filter(|&to| to != from)
            .any(|to| {
                is_pseudo_legal(from, to, piece, board, context, false)
                    && !is_king_in_check(color, &simulate_move(from, to, piece, board, context), None)
            })
    })
}

/// In check with no move that escapes it
pub fn is_checkmate(color: PieceColor, board: &BoardState) -> bool {
    is_king_in_check(color, board, None) && !can_move_prevent_check(color, board, None)
}

/// Not in check, yet no piece of `color` has a legal move
pub fn is_stalemate(color: PieceColor, board: &BoardState, context: &GameContext) -> bool {
    if is_king_in_check(color, board, None) {
        return false;
    }

    board
        .pieces_of(color)
        .all(|(from, piece)| get_valid_moves(from, piece, board, context).is_empty())
}

/// Status of the position for `context.current_player`
pub fn game_status(board: &BoardState, context: &GameContext) -> GameStatus {
    let color = context.current_player;

    if is_king_in_check(color, board, None) {
        if can_move_prevent_check(color, board, Some(context)) {
            GameStatus::Check { color }
        } else {
            GameStatus::Checkmate {
                winner: color.opponent(),
            }
        }
    } else if is_stalemate(color, board, context) {
        GameStatus::Stalemate
    } else {
        GameStatus::Ongoing
    }
}
