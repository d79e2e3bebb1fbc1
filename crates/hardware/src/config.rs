//! Configuration for the extension units.
//!
//! The only architectural parameter is the register width, chosen once for
//! the whole system. Configuration is supplied as JSON by the embedding
//! simulator, or use `Config::default()` (RV32).
//!
//! # Examples
//!
//! ```
//! use xpulp_core::config::Config;
//! use xpulp_core::common::Xlen;
//!
//! let config = Config::from_json(r#"{ "xlen": "RV64" }"#).unwrap();
//! assert_eq!(config.xlen, Xlen::Rv64);
//!
//! let config = Config::from_json("{}").unwrap();
//! assert_eq!(config.xlen, Xlen::Rv32);
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::common::Xlen;

/// Error raised while loading a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON or does not match the schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Root configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Register width shared by every unit.
    #[serde(default)]
    pub xlen: Xlen,
}

impl Config {
    /// Parses a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, unknown fields or an
    /// unsupported register width.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        tracing::debug!(xlen = config.xlen.bits(), "configuration loaded");
        Ok(config)
    }
}
