//! Backend configuration, read once at startup.
//!
//! | variable | meaning | default |
//! |----------|---------|---------|
//! | `TODO_SERVICE_MOCK_ENABLED` | `true` selects the offline mock | `false` |
//! | `TODO_SERVICE_BASE_URL` | base address of the todo service | required when live |
//! | `TODO_SERVICE_CONNECT_TIMEOUT_MS` | connect timeout | `5000` |
//! | `TODO_SERVICE_READ_TIMEOUT_MS` | read timeout | `30000` |
//! | `TODO_SERVICE_TRANSPORT` | `ureq` or `reqwest` | `ureq` |

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::http::TransportError;
use crate::transport::Timeouts;

pub const MOCK_ENABLED_VAR: &str = "TODO_SERVICE_MOCK_ENABLED";
pub const BASE_URL_VAR: &str = "TODO_SERVICE_BASE_URL";
pub const CONNECT_TIMEOUT_VAR: &str = "TODO_SERVICE_CONNECT_TIMEOUT_MS";
pub const READ_TIMEOUT_VAR: &str = "TODO_SERVICE_READ_TIMEOUT_MS";
pub const TRANSPORT_VAR: &str = "TODO_SERVICE_TRANSPORT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{BASE_URL_VAR} must be set when the mock backend is disabled")]
    MissingBaseUrl,

    #[error("invalid base url '{value}': {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{key} must be 'true' or 'false', got '{value}'")]
    InvalidFlag { key: &'static str, value: String },

    #[error("{key} must be a number of milliseconds, got '{value}': {source}")]
    InvalidTimeout {
        key: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("unknown transport '{0}', expected 'ureq' or 'reqwest'")]
    UnknownTransport(String),

    #[error("transport '{0}' is not compiled in")]
    TransportUnavailable(TransportKind),

    #[error("failed to initialise transport: {0}")]
    TransportInit(#[source] TransportError),
}

/// Which HTTP library backs the live client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportKind {
    #[default]
    Ureq,
    Reqwest,
}

impl FromStr for TransportKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ureq" => Ok(TransportKind::Ureq),
            "reqwest" => Ok(TransportKind::Reqwest),
            _ => Err(ConfigError::UnknownTransport(s.to_string())),
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportKind::Ureq => f.write_str("ureq"),
            TransportKind::Reqwest => f.write_str("reqwest"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoServiceConfig {
    pub mock_enabled: bool,
    /// Validated base address; `None` only when the mock is enabled.
    pub base_url: Option<String>,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    pub transport: TransportKind,
}

impl Default for TodoServiceConfig {
    fn default() -> Self {
        let timeouts = Timeouts::default();
        Self {
            mock_enabled: false,
            base_url: None,
            connect_timeout: timeouts.connect,
            read_timeout: timeouts.read,
            transport: TransportKind::default(),
        }
    }
}

impl TodoServiceConfig {
    /// Configuration for the offline mock backend.
    pub fn mock() -> Self {
        Self {
            mock_enabled: true,
            ..Self::default()
        }
    }

    /// Configuration for a live backend at `base_url`.
    pub fn live(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: Some(validate_base_url(base_url)?),
            ..Self::default()
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let mock_enabled = match lookup(MOCK_ENABLED_VAR) {
            Some(value) => parse_flag(MOCK_ENABLED_VAR, &value)?,
            None => defaults.mock_enabled,
        };

        let base_url = lookup(BASE_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(|value| validate_base_url(&value))
            .transpose()?;
        if !mock_enabled && base_url.is_none() {
            return Err(ConfigError::MissingBaseUrl);
        }

        let connect_timeout = match lookup(CONNECT_TIMEOUT_VAR) {
            Some(value) => parse_millis(CONNECT_TIMEOUT_VAR, &value)?,
            None => defaults.connect_timeout,
        };
        let read_timeout = match lookup(READ_TIMEOUT_VAR) {
            Some(value) => parse_millis(READ_TIMEOUT_VAR, &value)?,
            None => defaults.read_timeout,
        };
        let transport = match lookup(TRANSPORT_VAR) {
            Some(value) => value.parse()?,
            None => defaults.transport,
        };

        Ok(Self {
            mock_enabled,
            base_url,
            connect_timeout,
            read_timeout,
            transport,
        })
    }

    pub fn timeouts(&self) -> Timeouts {
        Timeouts {
            connect: self.connect_timeout,
            read: self.read_timeout,
        }
    }
}

fn validate_base_url(value: &str) -> Result<String, ConfigError> {
    let value = value.trim();
    Url::parse(value).map_err(|source| ConfigError::InvalidBaseUrl {
        value: value.to_string(),
        source,
    })?;
    Ok(value.to_string())
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_string(),
        }),
    }
}

fn parse_millis(key: &'static str, value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|source| ConfigError::InvalidTimeout {
            key,
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<TodoServiceConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TodoServiceConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn mock_needs_no_base_url() {
        let config = load(&[(MOCK_ENABLED_VAR, "true")]).unwrap();
        assert!(config.mock_enabled);
        assert!(config.base_url.is_none());
    }

    #[test]
    fn live_requires_base_url() {
        assert!(matches!(load(&[]), Err(ConfigError::MissingBaseUrl)));
        assert!(matches!(
            load(&[(MOCK_ENABLED_VAR, "false"), (BASE_URL_VAR, "  ")]),
            Err(ConfigError::MissingBaseUrl)
        ));
    }

    #[test]
    fn live_config_with_all_values() {
        let config = load(&[
            (MOCK_ENABLED_VAR, "FALSE"),
            (BASE_URL_VAR, "http://localhost:9999"),
            (CONNECT_TIMEOUT_VAR, "1500"),
            (READ_TIMEOUT_VAR, "250"),
            (TRANSPORT_VAR, "reqwest"),
        ])
        .unwrap();
        assert!(!config.mock_enabled);
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:9999"));
        assert_eq!(config.connect_timeout, Duration::from_millis(1500));
        assert_eq!(config.read_timeout, Duration::from_millis(250));
        assert_eq!(config.transport, TransportKind::Reqwest);
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[(BASE_URL_VAR, "http://todo.internal")]).unwrap();
        assert_eq!(config.timeouts(), Timeouts::default());
        assert_eq!(config.transport, TransportKind::Ureq);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            load(&[(MOCK_ENABLED_VAR, "yes")]),
            Err(ConfigError::InvalidFlag { .. })
        ));
        assert!(matches!(
            load(&[(BASE_URL_VAR, "not a url")]),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            load(&[(BASE_URL_VAR, "http://x"), (READ_TIMEOUT_VAR, "5s")]),
            Err(ConfigError::InvalidTimeout { key: READ_TIMEOUT_VAR, .. })
        ));
        assert!(matches!(
            load(&[(BASE_URL_VAR, "http://x"), (TRANSPORT_VAR, "curl")]),
            Err(ConfigError::UnknownTransport(_))
        ));
    }
}
