//! Board state representation for move validation

use crate::game::types::{Piece, PieceColor, PieceType, Square};
use std::fmt;

const BACK_ROW: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// 8x8 grid of optional pieces, row-major, row 0 = black's back rank
///
/// `BoardState` is a plain `Copy` value. Every what-if simulation in the rules
/// engine works on its own copy, so a caller's board is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardState {
    squares: [[Option<Piece>; 8]; 8],
}

impl BoardState {
    pub fn empty() -> Self {
        BoardState {
            squares: [[None; 8]; 8],
        }
    }

    /// Fresh board in the standard starting position
    ///
    /// Allocates a new value per call; there is no shared initial board.
    pub fn starting() -> Self {
        let mut board = BoardState::empty();
        for (col, &kind) in BACK_ROW.iter().enumerate() {
            let col = col as i8;
            board.put(Square::new(0, col), Piece::new(kind, PieceColor::Black));
            board.put(Square::new(1, col), Piece::new(PieceType::Pawn, PieceColor::Black));
            board.put(Square::new(6, col), Piece::new(PieceType::Pawn, PieceColor::White));
            board.put(Square::new(7, col), Piece::new(kind, PieceColor::White));
        }
        board
    }

    /// Build a board from `(kind, color, square)` placements
    ///
    /// Pieces are unmoved; off-board placements are ignored.
    pub fn from_pieces(pieces: &[(PieceType, PieceColor, Square)]) -> Self {
        let mut board = BoardState::empty();
        for &(kind, color, square) in pieces {
            board.put(square, Piece::new(kind, color));
        }
        board
    }

    /// Piece at `pos`, `None` when empty or off the board
    pub fn get(&self, pos: Square) -> Option<Piece> {
        if !pos.is_on_board() {
            return None;
        }
        self.squares[pos.row as usize][pos.col as usize]
    }

    /// Replace the contents of `pos`; off-board writes are ignored
    pub fn set(&mut self, pos: Square, piece: Option<Piece>) {
        if pos.is_on_board() {
            self.squares[pos.row as usize][pos.col as usize] = piece;
        }
    }

    pub fn put(&mut self, pos: Square, piece: Piece) {
        self.set(pos, Some(piece));
    }

    pub fn take(&mut self, pos: Square) -> Option<Piece> {
        let piece = self.get(pos);
        self.set(pos, None);
        piece
    }

    pub fn is_empty(&self, pos: Square) -> bool {
        self.get(pos).is_none()
    }

    pub fn get_piece_color(&self, pos: Square) -> Option<PieceColor> {
        self.get(pos).map(|piece| piece.color)
    }

    /// Every occupied square with its piece, scanning row by row
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8i8).flat_map(move |row| {
            (0..8i8).filter_map(move |col| {
                let square = Square::new(row, col);
                self.get(square).map(|piece| (square, piece))
            })
        })
    }

    /// Occupied squares of one color
    pub fn pieces_of(&self, color: PieceColor) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// First king of `color` in scan order
    pub fn find_king(&self, color: PieceColor) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceType::King)
            .map(|(square, _)| square)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        BoardState::empty()
    }
}

impl fmt::Display for BoardState {
    /// Text diagram with white at the bottom, files and ranks labelled
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8i8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8i8 {
                match self.get(Square::new(row, col)) {
                    Some(piece) => write!(f, "{} ", piece.symbol())?,
                    None => f.write_str(". ")?,
                }
            }
            writeln!(f)?;
        }
        f.write_str("  a b c d e f g h")
    }
}
