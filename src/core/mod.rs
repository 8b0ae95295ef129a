//! Core module - application infrastructure
//!
//! Settings, their persistence, and the error type for both. The rules engine
//! does not depend on anything here; only the binary and the oracle client
//! read [`Settings`].

pub mod error;
pub mod resources;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use resources::{OracleSettings, Settings, DEFAULT_ORACLE_ENDPOINT};
pub use settings_persistence::{
    get_settings_path, load_settings, load_settings_from, save_settings, save_settings_to,
};
