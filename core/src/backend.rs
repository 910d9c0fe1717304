//! Backend selection.
//!
//! The mock flag is consulted here and nowhere else. Callers receive a
//! `Box<dyn TodoClient>` and never learn which implementation is behind it.

use tracing::info;

use crate::client::TodoClient;
use crate::config::{ConfigError, TodoServiceConfig, TransportKind};
use crate::mock::MockTodoClient;

/// Build the backend described by `config`.
pub fn connect(config: &TodoServiceConfig) -> Result<Box<dyn TodoClient>, ConfigError> {
    if config.mock_enabled {
        info!("using mock todo backend");
        return Ok(Box::new(MockTodoClient::new()));
    }

    let base_url = config.base_url.as_deref().ok_or(ConfigError::MissingBaseUrl)?;
    info!(base_url, transport = %config.transport, "using live todo backend");
    live_backend(config.transport, base_url, config)
}

#[allow(unused_variables)]
fn live_backend(
    kind: TransportKind,
    base_url: &str,
    config: &TodoServiceConfig,
) -> Result<Box<dyn TodoClient>, ConfigError> {
    match kind {
        #[cfg(feature = "ureq-transport")]
        TransportKind::Ureq => {
            let transport = crate::transport::UreqTransport::new(config.timeouts());
            Ok(Box::new(crate::http_client::HttpTodoClient::new(base_url, transport)))
        }
        #[cfg(feature = "reqwest-transport")]
        TransportKind::Reqwest => {
            let transport = crate::transport::ReqwestTransport::new(config.timeouts())
                .map_err(ConfigError::TransportInit)?;
            Ok(Box::new(crate::http_client::HttpTodoClient::new(base_url, transport)))
        }
        #[allow(unreachable_patterns)]
        other => Err(ConfigError::TransportUnavailable(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_flag_selects_mock() {
        let client = connect(&TodoServiceConfig::mock()).unwrap();
        let todos = client.list_by_keyword("anything").unwrap();
        assert_eq!(todos.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn live_without_base_url_is_rejected() {
        let config = TodoServiceConfig::default();
        assert!(matches!(connect(&config), Err(ConfigError::MissingBaseUrl)));
    }

    #[cfg(all(feature = "ureq-transport", feature = "reqwest-transport"))]
    #[test]
    fn both_transports_build() {
        let mut config = TodoServiceConfig::live("http://127.0.0.1:1").unwrap();
        assert!(connect(&config).is_ok());
        config.transport = TransportKind::Reqwest;
        assert!(connect(&config).is_ok());
    }
}
