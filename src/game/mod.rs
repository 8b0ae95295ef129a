//! Chess game logic module
//!
//! Everything needed to referee a game of chess without a UI attached.
//!
//! # Module Organization
//!
//! - `types` - Squares, pieces, moves, castling rights, game context
//! - `rules` - Pure chess logic (move validation, check detection, enumeration, transitions)
//! - `notation` - FEN encoding and UCI move parsing for talking to an engine
//! - `error` - [`GameError`] for operations that can be refused
//!
//! # Usage
//!
//! A presentation layer asks [`rules::get_valid_moves`] for highlight squares,
//! validates a click with [`rules::is_valid_move`], commits it with
//! [`rules::apply_move`], and then shows [`rules::game_status`].

pub mod error;
pub mod notation;
pub mod rules;
pub mod types;

pub use error::{GameError, GameResult};
pub use rules::BoardState;
pub use types::{
    CastlingRights, GameContext, GameStatus, Move, Piece, PieceColor, PieceType, SideRights,
    Square,
};
