//! Text encodings needed to talk to a move oracle
//!
//! Positions go out as FEN; moves come back as UCI long algebraic strings
//! (`e2e4`, `e7e8q`). FEN is only ever written, never read.

use super::error::{GameError, GameResult};
use super::rules::castling::{rook_files, KING_FILE};
use super::rules::BoardState;
use super::types::{GameContext, Move, PieceColor, PieceType, Square};

/// Encode `board` and `context` as a FEN string
///
/// Castling and en-passant fields come from the context. A castling right is
/// only written while its king and rook still stand on their home squares.
/// Halfmove and fullmove counters are not tracked and are always written as
/// `0 1`.
///
/// # Examples
///
/// ```rust,ignore
/// let fen = board_to_fen(&BoardState::starting(), &GameContext::new());
/// assert_eq!(fen, "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
/// ```
pub fn board_to_fen(board: &BoardState, context: &GameContext) -> String {
    let mut fen = String::with_capacity(90);

    for row in 0..8i8 {
        let mut empty_count = 0;
        for col in 0..8i8 {
            match board.get(Square::new(row, col)) {
                Some(piece) => {
                    if empty_count > 0 {
                        fen.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    fen.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }
        if empty_count > 0 {
            fen.push_str(&empty_count.to_string());
        }
        if row < 7 {
            fen.push('/');
        }
    }

    fen.push(' ');
    fen.push(match context.current_player {
        PieceColor::White => 'w',
        PieceColor::Black => 'b',
    });

    fen.push(' ');
    fen.push_str(&castling_field(board, context));

    fen.push(' ');
    match context.en_passant_target.and_then(Square::to_algebraic) {
        Some(square) => fen.push_str(&square),
        None => fen.push('-'),
    }

    fen.push_str(" 0 1");
    fen
}

fn castling_field(board: &BoardState, context: &GameContext) -> String {
    let field: String = [
        (PieceColor::White, true, 'K'),
        (PieceColor::White, false, 'Q'),
        (PieceColor::Black, true, 'k'),
        (PieceColor::Black, false, 'q'),
    ]
    .iter()
    .filter(|&&(color, king_side, _)| {
        context.castling_rights.allows(color, king_side) && pieces_at_home(board, color, king_side)
    })
    .map(|&(_, _, c)| c)
    .collect();

    if field.is_empty() {
        "-".to_string()
    } else {
        field
    }
}

fn pieces_at_home(board: &BoardState, color: PieceColor, king_side: bool) -> bool {
    let row = color.home_row();
    let (rook_col, _) = rook_files(king_side);
    let stands = |col: i8, kind: PieceType| {
        board
            .get(Square::new(row, col))
            .is_some_and(|piece| piece.kind == kind && piece.color == color)
    };
    stands(KING_FILE, PieceType::King) && stands(rook_col, PieceType::Rook)
}

/// Parse a UCI move such as `e2e4` or `e7e8q`
///
/// Flags are left unset; run the result through [`Move::classify`] against a
/// board to fill them in.
pub fn parse_uci_move(text: &str) -> GameResult<Move> {
    let invalid = || GameError::InvalidNotation {
        text: text.to_string(),
    };

    let text = text.trim();
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(invalid());
    }

    let from = Square::from_algebraic(&text[0..2]).ok_or_else(invalid)?;
    let to = Square::from_algebraic(&text[2..4]).ok_or_else(invalid)?;
    let mut mv = Move::new(from, to);

    if let Some(c) = text[4..].chars().next() {
        let kind = PieceType::from_letter(c).ok_or_else(invalid)?;
        mv = mv.with_promotion(kind);
    }

    Ok(mv)
}

/// Parse a square name, reporting bad input as [`GameError::InvalidNotation`]
pub fn parse_square(text: &str) -> GameResult<Square> {
    Square::from_algebraic(text.trim()).ok_or_else(|| GameError::InvalidNotation {
        text: text.to_string(),
    })
}
