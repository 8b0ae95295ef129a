//! Networking module - the remote best-move oracle
//!
//! The rules engine never searches for moves. When the computer is to play,
//! the position is encoded as FEN and handed to a [`MoveOracle`]; the answer
//! comes back as a UCI string and is turned into a [`Move`] here.
//!
//! Failures propagate to the caller, which should leave the turn unresolved.

pub mod client;
pub mod error;

pub use client::{parse_best_move, StockfishOnline, StockfishResponse};
pub use error::{OracleError, OracleResult};

use crate::game::notation::{board_to_fen, parse_uci_move};
use crate::game::{BoardState, GameContext, Move};
use async_trait::async_trait;
use tracing::info;

/// Black-box source of engine moves
#[async_trait]
pub trait MoveOracle: Send + Sync {
    /// Best move for the FEN position, as a UCI string such as `e2e4`
    async fn best_move(&self, fen: &str, depth: u8) -> OracleResult<String>;
}

/// Ask `oracle` for a move in the given position
///
/// The returned move has its flags derived from `board`; it is not checked
/// for legality, which stays the job of [`crate::game::rules::apply_move`].
pub async fn request_engine_move<O>(
    oracle: &O,
    board: &BoardState,
    context: &GameContext,
    depth: u8,
) -> OracleResult<Move>
where
    O: MoveOracle + ?Sized,
{
    let fen = board_to_fen(board, context);
    let text = oracle.best_move(&fen, depth).await?;
    let parsed = parse_uci_move(&text)?;

    let mut mv = Move::classify(parsed.from, parsed.to, board, context);
    mv.promotion = parsed.promotion;

    info!("[ORACLE] {} suggests {}", context.current_player, mv);
    Ok(mv)
}
