//! Error types for game module
//!
//! Rules queries ("is this legal", "is this check") answer with booleans and
//! never fail. Errors only arise when a caller asks the engine to *do*
//! something: apply a move, or read a move out of notation.

use super::types::{PieceColor, PieceType, Square};

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Move rejected by the rules engine
    #[error("Invalid move: {from} to {to}")]
    InvalidMove { from: Square, to: Square },

    /// No piece on the move's origin square
    #[error("Piece not found at {square}")]
    PieceNotFound { square: Square },

    /// Piece belongs to the side not on move
    #[error("It is {expected}'s turn, but the piece at {square} is {found}")]
    NotYourTurn {
        square: Square,
        expected: PieceColor,
        found: PieceColor,
    },

    /// Pawn reached the last rank without a promotion choice
    #[error("Pawn reaching {square} must be promoted")]
    PromotionRequired { square: Square },

    /// Promotion to a king or pawn, or on a move that does not promote
    #[error("Invalid promotion to {kind:?} at {square}")]
    InvalidPromotion { square: Square, kind: PieceType },

    /// Unparseable move or square text
    #[error("Invalid notation: {text:?}")]
    InvalidNotation { text: String },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
