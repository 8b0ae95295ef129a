//! Legal move enumeration
//!
//! Produces the destinations a piece may legally reach, used for UI
//! highlighting and for stalemate proofs. Candidate squares are generated per
//! piece type and each one is confirmed through [`is_legal`], so enumeration
//! and validation can never disagree.

use super::board_state::BoardState;
use super::castling::KING_FILE;
use super::legality::{is_en_passant_capture, is_legal};
use super::transition::needs_pawn_promotion;
use crate::game::types::{GameContext, Move, Piece, PieceColor, PieceType, Square};

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// All legal destination squares for the piece standing on `from`
///
/// Pure: the board is only read, and repeated calls with the same inputs
/// return the same list in the same order.
pub fn get_valid_moves(
    from: Square,
    piece: Piece,
    board: &BoardState,
    context: &GameContext,
) -> Vec<Square> {
    let mut moves = Vec::new();
    if !from.is_on_board() {
        return moves;
    }

    let try_square = |to: Square, moves: &mut Vec<Square>| {
        if is_legal(from, to, piece, board, Some(context)) && !moves.contains(&to) {
            moves.push(to);
        }
    };

    match piece.kind {
        PieceType::Pawn => {
            let direction = piece.color.pawn_direction();
            let mut candidates = vec![
                from.offset(direction, 0),
                from.offset(2 * direction, 0),
                from.offset(direction, -1),
                from.offset(direction, 1),
            ];
            if let Some(target) = context.en_passant_target {
                candidates.push(Square::new(from.row + direction, target.col));
            }
            for to in candidates {
                try_square(to, &mut moves);
            }
        }
        PieceType::Knight => {
            for (d_row, d_col) in KNIGHT_OFFSETS {
                try_square(from.offset(d_row, d_col), &mut moves);
            }
        }
        PieceType::King => {
            for d_row in -1..=1 {
                for d_col in -1..=1 {
                    if (d_row, d_col) != (0, 0) {
                        try_square(from.offset(d_row, d_col), &mut moves);
                    }
                }
            }
            if !piece.has_moved {
                try_square(from.offset(0, -2), &mut moves);
                try_square(from.offset(0, 2), &mut moves);
            }
        }
        PieceType::Rook | PieceType::Bishop | PieceType::Queen => {
            for &(d_row, d_col) in sliding_directions(piece.kind) {
                let mut to = from.offset(d_row, d_col);
                while to.is_on_board() {
                    try_square(to, &mut moves);
                    if !board.is_empty(to) {
                        break;
                    }
                    to = to.offset(d_row, d_col);
                }
            }
        }
    }

    moves
}

/// Every legal move for `color`, flags filled in via [`Move::classify`]
///
/// Pawn moves onto the last rank are listed once per promotion piece.
pub fn all_legal_moves(color: PieceColor, board: &BoardState, context: &GameContext) -> Vec<Move> {
    let mut moves = Vec::new();
    for (from, piece) in board.pieces_of(color) {
        for to in get_valid_moves(from, piece, board, context) {
            let mv = Move::classify(from, to, board, context);
            if needs_pawn_promotion(to, piece) {
                moves.extend(PieceType::PROMOTIONS.iter().map(|&kind| mv.with_promotion(kind)));
            } else {
                moves.push(mv);
            }
        }
    }
    moves
}

fn sliding_directions(kind: PieceType) -> &'static [(i8, i8)] {
    match kind {
        PieceType::Rook => &ROOK_DIRECTIONS,
        PieceType::Bishop => &BISHOP_DIRECTIONS,
        _ => &QUEEN_DIRECTIONS,
    }
}

impl Move {
    /// Build a move and derive its castling / en-passant flags from the board
    ///
    /// The flags describe the move; they are never used to decide legality.
    pub fn classify(from: Square, to: Square, board: &BoardState, context: &GameContext) -> Move {
        let mut mv = Move::new(from, to);
        if let Some(piece) = board.get(from) {
            mv.is_castling = piece.kind == PieceType::King
                && from == Square::new(piece.color.home_row(), KING_FILE)
                && to.row == from.row
                && to.col.abs_diff(from.col) == 2;
            mv.is_en_passant = is_en_passant_capture(from, to, piece, board, Some(context));
        }
        mv
    }
}
