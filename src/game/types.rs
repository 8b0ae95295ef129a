//! Type definitions for chess rules
//!
//! Value types shared by every layer of the rules engine: squares, pieces,
//! moves, castling rights and the per-game context that travels alongside a
//! board. Everything here is `Copy`, so handing a position to the rules engine
//! never risks aliasing the caller's data.
//!
//! # Coordinates
//!
//! Squares are `(row, col)` pairs matching the way a board is displayed:
//! row 0 is black's back rank (rank 8), row 7 is white's back rank (rank 1),
//! col 0 is file 'a'. Coordinates are signed so an off-board square can be
//! represented and rejected instead of wrapping around.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Board square as a `(row, col)` pair
///
/// Values outside `0..8` are representable on purpose; rules queries answer
/// `false` for them rather than panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    /// Create a square from row and column indices
    pub const fn new(row: i8, col: i8) -> Self {
        Square { row, col }
    }

    /// Square shifted by `(d_row, d_col)`, possibly off the board
    ///
    /// Saturates at the `i8` limits, which are off the board anyway.
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Square {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }

    /// True if both coordinates are on the 8x8 board
    pub fn is_on_board(self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }

    /// Create a square from algebraic notation (e.g., "e4")
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let square = Square::from_algebraic("e4").unwrap();
    /// assert_eq!(square, Square::new(4, 4));
    /// ```
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file_char = chars.next()?;
        let rank_char = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        let col = match file_char {
            'a'..='h' => (file_char as u8 - b'a') as i8,
            _ => return None,
        };
        let rank = match rank_char.to_digit(10)? {
            n @ 1..=8 => n as i8,
            _ => return None,
        };

        Some(Square::new(8 - rank, col))
    }

    /// Convert square to algebraic notation (e.g., "e4")
    ///
    /// Returns `None` for off-board squares.
    pub fn to_algebraic(self) -> Option<String> {
        if !self.is_on_board() {
            return None;
        }
        let file = (b'a' + self.col as u8) as char;
        Some(format!("{}{}", file, 8 - self.row))
    }
}

impl From<(i8, i8)> for Square {
    fn from((row, col): (i8, i8)) -> Self {
        Square::new(row, col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Some(name) => f.write_str(&name),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    pub fn opponent(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Row of this color's back rank
    pub fn home_row(self) -> i8 {
        match self {
            PieceColor::White => 7,
            PieceColor::Black => 0,
        }
    }

    /// Row delta of a pawn step: white moves toward row 0, black toward row 7
    pub fn pawn_direction(self) -> i8 {
        match self {
            PieceColor::White => -1,
            PieceColor::Black => 1,
        }
    }

    /// Row pawns of this color start on
    pub fn pawn_start_row(self) -> i8 {
        match self {
            PieceColor::White => 6,
            PieceColor::Black => 1,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::White => f.write_str("White"),
            PieceColor::Black => f.write_str("Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceType {
    /// Pieces a pawn may promote to, strongest first
    pub const PROMOTIONS: [PieceType; 4] = [
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
    ];

    /// Lowercase letter used by FEN and UCI notation
    pub fn letter(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Rook => 'r',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }

    /// Parse a notation letter in either case
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'r' => Some(PieceType::Rook),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }

    pub fn is_promotion_target(self) -> bool {
        Self::PROMOTIONS.contains(&self)
    }
}

/// A piece standing on the board
///
/// `has_moved` drives pawn double-step eligibility and king/rook castling
/// eligibility. The rules engine only reads it; [`crate::game::rules::apply_move`]
/// is the one place that sets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceType,
    pub color: PieceColor,
    pub has_moved: bool,
}

impl Piece {
    /// Create an unmoved piece
    pub const fn new(kind: PieceType, color: PieceColor) -> Self {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }

    /// Same piece flagged as having moved
    pub const fn moved(self) -> Self {
        Piece {
            has_moved: true,
            ..self
        }
    }

    /// FEN letter: uppercase for white, lowercase for black
    pub fn fen_char(self) -> char {
        let c = self.kind.letter();
        match self.color {
            PieceColor::White => c.to_ascii_uppercase(),
            PieceColor::Black => c,
        }
    }

    /// Unicode chess glyph
    pub fn symbol(self) -> char {
        match (self.color, self.kind) {
            (PieceColor::White, PieceType::King) => '\u{2654}',
            (PieceColor::White, PieceType::Queen) => '\u{2655}',
            (PieceColor::White, PieceType::Rook) => '\u{2656}',
            (PieceColor::White, PieceType::Bishop) => '\u{2657}',
            (PieceColor::White, PieceType::Knight) => '\u{2658}',
            (PieceColor::White, PieceType::Pawn) => '\u{2659}',
            (PieceColor::Black, PieceType::King) => '\u{265A}',
            (PieceColor::Black, PieceType::Queen) => '\u{265B}',
            (PieceColor::Black, PieceType::Rook) => '\u{265C}',
            (PieceColor::Black, PieceType::Bishop) => '\u{265D}',
            (PieceColor::Black, PieceType::Knight) => '\u{265E}',
            (PieceColor::Black, PieceType::Pawn) => '\u{265F}',
        }
    }
}

/// Castling eligibility for one color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideRights {
    pub king_side: bool,
    pub queen_side: bool,
}

impl SideRights {
    pub fn get(self, king_side: bool) -> bool {
        if king_side {
            self.king_side
        } else {
            self.queen_side
        }
    }
}

/// Castling rights for both colors
///
/// Rights only ever go from `true` to `false` over a game. They describe
/// eligibility independent of current occupancy: a right can be held while
/// castling is momentarily blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastlingRights {
    pub white: SideRights,
    pub black: SideRights,
}

impl CastlingRights {
    /// Both colors may still castle on both sides
    pub const fn all() -> Self {
        let side = SideRights {
            king_side: true,
            queen_side: true,
        };
        CastlingRights {
            white: side,
            black: side,
        }
    }

    pub const fn none() -> Self {
        let side = SideRights {
            king_side: false,
            queen_side: false,
        };
        CastlingRights {
            white: side,
            black: side,
        }
    }

    pub fn for_color(&self, color: PieceColor) -> SideRights {
        match color {
            PieceColor::White => self.white,
            PieceColor::Black => self.black,
        }
    }

    pub fn for_color_mut(&mut self, color: PieceColor) -> &mut SideRights {
        match color {
            PieceColor::White => &mut self.white,
            PieceColor::Black => &mut self.black,
        }
    }

    /// Whether `color` may castle toward the king side (`true`) or queen side
    pub fn allows(&self, color: PieceColor, king_side: bool) -> bool {
        self.for_color(color).get(king_side)
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::all()
    }
}

/// History that accompanies a board between plies
///
/// A board alone cannot answer whether en passant or castling is available;
/// the context carries that state. It is produced fresh for every ply by
/// [`crate::game::rules::next_context`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameContext {
    pub current_player: PieceColor,
    /// Square a pawn just skipped over, valid for exactly one reply
    pub en_passant_target: Option<Square>,
    pub castling_rights: CastlingRights,
}

impl GameContext {
    /// Context at the start of a game: white to move, every right intact
    pub fn new() -> Self {
        GameContext {
            current_player: PieceColor::White,
            en_passant_target: None,
            castling_rights: CastlingRights::all(),
        }
    }

    /// Same context with a different side to move
    pub fn with_player(self, current_player: PieceColor) -> Self {
        GameContext {
            current_player,
            ..self
        }
    }
}

impl Default for GameContext {
    fn default() -> Self {
        GameContext::new()
    }
}

/// A from-to move request
///
/// `is_castling` and `is_en_passant` are descriptive only. Legality is always
/// re-derived from the board; use [`Move::classify`] to fill them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceType>,
    pub is_castling: bool,
    pub is_en_passant: bool,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            is_castling: false,
            is_en_passant: false,
        }
    }

    pub fn with_promotion(self, kind: PieceType) -> Self {
        Move {
            promotion: Some(kind),
            ..self
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}

/// Outcome of a position from the side to move's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Check { color: PieceColor },
    Checkmate { winner: PieceColor },
    Stalemate,
}

impl GameStatus {
    pub fn is_game_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => f.write_str("In progress"),
            GameStatus::Check { color } => write!(f, "{} is in check!", color),
            GameStatus::Checkmate { winner } => write!(f, "{} wins by checkmate!", winner),
            GameStatus::Stalemate => f.write_str("Game drawn by stalemate!"),
        }
    }
}
