//! Chess rules module - Pure game logic
//!
//! Implements chess move validation, check detection and move enumeration
//! using pure functions over [`BoardState`] snapshots. Nothing here owns a
//! board or keeps state between calls: every what-if is evaluated on a
//! private copy, so any number of callers can query concurrently.
//!
//! # Architecture
//!
//! Layers, each depending only on the ones above it:
//! - `geometry` - square validity, equality, path-clear walks
//! - `piece_moves` - movement rules for each piece type
//! - `legality` - pseudo-legal / legal orchestration, self-check filter
//! - `castling` - board-level castling validation
//! - `check` - check, checkmate, stalemate, position status
//! - `move_gen` - legal destination enumeration
//! - `transition` - applying a confirmed move, castling rights, en passant
//!
//! # Example
//!
//! ```rust,ignore
//! let board = BoardState::starting();
//! let context = GameContext::new();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let pawn = board.get(e2).unwrap();
//! let targets = get_valid_moves(e2, pawn, &board, &context); // e3, e4
//! ```

pub mod board_state;
pub mod castling;
pub mod check;
pub mod geometry;
pub mod legality;
pub mod move_gen;
pub mod piece_moves;
pub mod transition;


// Re-export commonly used items
pub use board_state::BoardState;
pub use castling::is_castling_valid;
pub use check::{can_move_prevent_check, game_status, is_checkmate, is_king_in_check, is_stalemate};
pub use geometry::{is_path_clear, is_same_square, is_valid_square};
pub use legality::{is_legal, is_pseudo_legal, is_valid_move, MoveOptions};
pub use move_gen::{all_legal_moves, get_valid_moves};
pub use transition::{apply_move, get_pawn_promotion_pieces, needs_pawn_promotion, next_context};
