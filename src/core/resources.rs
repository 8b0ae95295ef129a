//! Settings shared across the application
//!
//! Only the move oracle is configurable today. Every field has a default so
//! partially written settings files still load.

use serde::{Deserialize, Serialize};

/// Default Stockfish HTTP endpoint
pub const DEFAULT_ORACLE_ENDPOINT: &str = "https://stockfish.online/api/s/v2.php";

/// Top-level settings persisted to `settings.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Remote best-move oracle
    pub oracle: OracleSettings,
}

/// Connection settings for the best-move oracle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleSettings {
    /// URL queried with `fen` and `depth` parameters
    pub endpoint: String,

    /// Search depth requested per move
    pub depth: u8,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for OracleSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ORACLE_ENDPOINT.to_string(),
            depth: 10,
            timeout_secs: 15,
        }
    }
}
