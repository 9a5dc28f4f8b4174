//! Governance configuration with TOML file support.

use catalyst_ledger::TokenMetadata;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::logging::LogFormat;
use crate::GovernanceError;

/// Configuration for a [`CatalystController`](crate::CatalystController).
///
/// Can be loaded from a TOML file via [`CatalystConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalystConfig {
    /// Largest voter set `set_voters` / `prune_voters` will sweep in one
    /// call. Larger sets must use the batched forms.
    #[serde(default = "default_max_bulk_voters")]
    pub max_bulk_voters: usize,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Voting token metadata.
    #[serde(default)]
    pub token: TokenConfig,
}

/// The `[token]` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    #[serde(default = "default_token_name")]
    pub name: String,

    #[serde(default = "default_token_symbol")]
    pub symbol: String,

    #[serde(default)]
    pub decimals: u8,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_max_bulk_voters() -> usize {
    1_000
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_token_name() -> String {
    "Catalyst".to_string()
}

fn default_token_symbol() -> String {
    "VOTE".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl CatalystConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, GovernanceError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| GovernanceError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, GovernanceError> {
        let config: Self = toml::from_str(s).map_err(|e| GovernanceError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, GovernanceError> {
        toml::to_string_pretty(self).map_err(|e| GovernanceError::Config(e.to_string()))
    }

    /// Reject values the controller cannot operate with.
    pub fn validate(&self) -> Result<(), GovernanceError> {
        if self.max_bulk_voters == 0 {
            return Err(GovernanceError::Config(
                "max_bulk_voters must be at least 1".to_string(),
            ));
        }
        if self.token.symbol.is_empty() {
            return Err(GovernanceError::Config("token symbol is empty".to_string()));
        }
        self.log_format()?;
        Ok(())
    }

    pub fn log_format(&self) -> Result<LogFormat, GovernanceError> {
        self.log_format.parse()
    }

    pub fn token_metadata(&self) -> TokenMetadata {
        TokenMetadata::new(&self.token.name, &self.token.symbol, self.token.decimals)
    }
}

impl Default for CatalystConfig {
    fn default() -> Self {
        Self {
            max_bulk_voters: default_max_bulk_voters(),
            log_format: default_log_format(),
            log_level: default_log_level(),
            token: TokenConfig::default(),
        }
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            name: default_token_name(),
            symbol: default_token_symbol(),
            decimals: 0,
        }
    }
}
