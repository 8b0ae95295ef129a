//! HTTP client for the stockfish.online best-move API
//!
//! Sends `GET <endpoint>?fen=<fen>&depth=<depth>` and reads a JSON body of
//! the form:
//!
//! ```json
//! {
//!   "success": true,
//!   "evaluation": 0.35,
//!   "mate": null,
//!   "bestmove": "bestmove e2e4 ponder e7e5",
//!   "continuation": "e2e4 e7e5 g1f3"
//! }
//! ```
//!
//! The move is the second token of `bestmove`.

use super::error::{OracleError, OracleResult};
use super::MoveOracle;
use crate::core::OracleSettings;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Body returned by the oracle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockfishResponse {
    pub success: bool,
    #[serde(default)]
    pub evaluation: Option<f64>,
    #[serde(default)]
    pub mate: Option<i32>,
    #[serde(default)]
    pub bestmove: String,
    #[serde(default)]
    pub continuation: Option<String>,
    /// Error text sent alongside `success: false`
    #[serde(default)]
    pub data: Option<String>,
}

/// Extract the move string from an oracle response
///
/// # Examples
///
/// ```rust,ignore
/// let body: StockfishResponse = serde_json::from_str(json)?;
/// assert_eq!(parse_best_move(&body)?, "e2e4");
/// ```
pub fn parse_best_move(response: &StockfishResponse) -> OracleResult<String> {
    if !response.success {
        return Err(OracleError::Unsuccessful {
            message: response
                .data
                .clone()
                .unwrap_or_else(|| "oracle reported failure".to_string()),
        });
    }

    let mut tokens = response.bestmove.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some("bestmove"), Some(mv)) => Ok(mv.to_string()),
        _ => Err(OracleError::MalformedMove {
            raw: response.bestmove.clone(),
        }),
    }
}

/// [`MoveOracle`] backed by the stockfish.online REST API
#[derive(Debug, Clone)]
pub struct StockfishOnline {
    client: reqwest::Client,
    endpoint: Url,
}

impl StockfishOnline {
    pub fn new(settings: &OracleSettings) -> OracleResult<Self> {
        let endpoint = Url::parse(&settings.endpoint)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self { client, endpoint })
    }

    /// Full request URL for a position
    pub fn request_url(&self, fen: &str, depth: u8) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("fen", fen)
            .append_pair("depth", &depth.to_string());
        url
    }
}

#[async_trait]
impl MoveOracle for StockfishOnline {
    async fn best_move(&self, fen: &str, depth: u8) -> OracleResult<String> {
        let url = self.request_url(fen, depth);
        debug!("[ORACLE] GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("[ORACLE] Request failed with status {}", status);
            return Err(OracleError::Status {
                status: status.as_u16(),
            });
        }

        let body: StockfishResponse = response.json().await?;
        let mv = parse_best_move(&body)?;
        debug!("[ORACLE] Best move {} (evaluation {:?}, mate {:?})", mv, body.evaluation, body.mate);
        Ok(mv)
    }
}
