//! Error types for the move oracle
//!
//! Every failure is surfaced to the caller. The oracle never substitutes a
//! default move and never retries on its own.

use crate::game::GameError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OracleError {
    /// Transport failure or undecodable body
    #[error("Oracle request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint in settings is not a URL
    #[error("Invalid oracle endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// Non-2xx HTTP status
    #[error("Oracle returned HTTP status {status}")]
    Status { status: u16 },

    /// Oracle answered but reported `success: false`
    #[error("Failed to get computer move: {message}")]
    Unsuccessful { message: String },

    /// `bestmove` did not contain a move token
    #[error("Malformed bestmove field: {raw:?}")]
    MalformedMove { raw: String },

    /// Move token was not valid UCI notation
    #[error(transparent)]
    Notation(#[from] GameError),
}

/// Result type alias for oracle operations
pub type OracleResult<T> = Result<T, OracleError>;
