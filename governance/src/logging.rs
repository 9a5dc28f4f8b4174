//! Structured logging initialisation.
//!
//! Two output formats are supported:
//! - [`LogFormat::Human`]: human-readable lines (development).
//! - [`LogFormat::Json`]: newline-delimited JSON (log aggregation).
//!
//! The filter level can be overridden at runtime via the `RUST_LOG`
//! environment variable. When `RUST_LOG` is not set, the caller-supplied
//! level string is used (e.g. `"info"`, `"debug,catalyst_governance=trace"`).

use std::str::FromStr;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::CatalystConfig;
use crate::GovernanceError;

/// Selects the output format for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Human,
    Json,
}

impl FromStr for LogFormat {
    type Err = GovernanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(GovernanceError::Config(format!(
                "unknown log format {other:?}, expected \"human\" or \"json\""
            ))),
        }
    }
}

/// Install the global tracing subscriber.
///
/// Fails if a global subscriber has already been set.
pub fn init_logging(format: LogFormat, level: &str) -> Result<(), GovernanceError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let result = match format {
        LogFormat::Human => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(true))
            .try_init(),
    };
    result.map_err(|e| GovernanceError::Config(e.to_string()))
}

/// Install the subscriber described by `config`.
pub fn init_from_config(config: &CatalystConfig) -> Result<(), GovernanceError> {
    init_logging(config.log_format()?, &config.log_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_formats() {
        assert_eq!("human".parse::<LogFormat>().unwrap(), LogFormat::Human);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("yaml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn second_init_fails_instead_of_panicking() {
        let config = CatalystConfig::default();
        // The first call may lose to a subscriber installed elsewhere in
        // this process; the second must fail either way.
        let _ = init_from_config(&config);
        assert!(matches!(
            init_from_config(&config),
            Err(GovernanceError::Config(_))
        ));
    }
}
