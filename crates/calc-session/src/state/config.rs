//! # Session Configuration
//!
//! Settings read once when the embedding application starts.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CALC_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

/// Default number of resolved computations kept on the tape.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Default `tracing` filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,calc_session=debug";

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// Maximum tape entries; `0` disables the tape.
    pub history_limit: usize,

    /// Fallback `EnvFilter` directives for [`crate::init_tracing`].
    pub log_filter: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            history_limit: DEFAULT_HISTORY_LIMIT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SessionConfig {
    /// Creates a SessionConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `CALC_HISTORY_LIMIT`: Override tape length (e.g., "20")
    /// - `CALC_LOG_FILTER`: Override the fallback log filter
    ///
    /// Unparseable values keep the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    ///
    /// Split out of [`SessionConfig::from_env`] so tests don't have to touch
    /// the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = SessionConfig::default();

        if let Some(limit) = lookup("CALC_HISTORY_LIMIT") {
            if let Ok(limit) = limit.trim().parse::<usize>() {
                config.history_limit = limit;
            }
        }

        if let Some(filter) = lookup("CALC_LOG_FILTER") {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SessionConfig::from_lookup(|_| None);
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.history_limit, 50);
        assert_eq!(config.log_filter, "info,calc_session=debug");
    }

    #[test]
    fn test_overrides() {
        let config = SessionConfig::from_lookup(lookup_from(&[
            ("CALC_HISTORY_LIMIT", "5"),
            ("CALC_LOG_FILTER", "warn"),
        ]));
        assert_eq!(config.history_limit, 5);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = SessionConfig::from_lookup(lookup_from(&[
            ("CALC_HISTORY_LIMIT", "lots"),
            ("CALC_LOG_FILTER", "  "),
        ]));
        assert_eq!(config, SessionConfig::default());
    }
}
