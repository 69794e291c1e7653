//! Skin download configuration
//!
//! Mirrors the skin-restorer section of the service configuration: retry
//! count, inter-retry delay, timeout, and an optional proxy. The core never
//! sees these values; they configure the transport chain only.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::client::HttpTransport;
use crate::middleware::{Logging, Retry};
use crate::{BuildError, DefaultTransport};

/// Configuration for skin downloads.
///
/// All fields have defaults; a missing config section behaves like
/// [`SkinRestorerConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkinRestorerConfig {
    /// Additional fetch attempts after a failure.
    ///
    /// Default: 3
    pub retry: u32,

    /// Fixed delay between attempts, in milliseconds.
    ///
    /// Default: 1000
    pub retry_delay_ms: u64,

    /// Timeout applied to connecting and to the whole request, in
    /// milliseconds.
    ///
    /// Default: 10000
    pub timeout_ms: u64,

    /// Optional HTTP proxy for all skin downloads.
    pub proxy: Option<ProxyConfig>,
}

impl Default for SkinRestorerConfig {
    fn default() -> Self {
        Self {
            retry: 3,
            retry_delay_ms: 1000,
            timeout_ms: 10_000,
            proxy: None,
        }
    }
}

impl SkinRestorerConfig {
    /// Delay between retry attempts.
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Timeout for connecting and for the whole request.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Assemble the production chain: logging over retry over the plain
    /// HTTP client.
    pub fn build_transport(&self) -> Result<DefaultTransport, BuildError> {
        let client = HttpTransport::new(self)?;
        Ok(Logging::new(Retry::new(
            client,
            self.retry,
            self.retry_delay(),
        )))
    }
}

/// HTTP proxy settings for skin downloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Proxy host name or address.
    pub host: String,
    /// Proxy port.
    pub port: u16,
    /// Optional basic-auth username.
    #[serde(default)]
    pub username: Option<String>,
    /// Optional basic-auth password.
    #[serde(default)]
    pub password: Option<String>,
}

impl ProxyConfig {
    pub(crate) fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_service_section() {
        let config = SkinRestorerConfig::default();
        assert_eq!(config.retry, 3);
        assert_eq!(config.retry_delay(), Duration::from_millis(1000));
        assert_eq!(config.timeout(), Duration::from_millis(10_000));
        assert!(config.proxy.is_none());
    }

    #[test]
    fn partial_config_section_fills_in_defaults() {
        let config: SkinRestorerConfig = serde_json::from_str(r#"{ "retry": 1 }"#).unwrap();
        assert_eq!(config.retry, 1);
        assert_eq!(config.timeout_ms, 10_000);
    }

    #[test]
    fn parses_proxy_with_credentials() {
        let config: SkinRestorerConfig = serde_json::from_str(
            r#"{
                "proxy": {
                    "host": "proxy.internal",
                    "port": 8080,
                    "username": "svc",
                    "password": "hunter2"
                }
            }"#,
        )
        .unwrap();
        let proxy = config.proxy.unwrap();
        assert_eq!(proxy.url(), "http://proxy.internal:8080");
        assert_eq!(proxy.username.as_deref(), Some("svc"));
    }

    #[test]
    fn builds_the_default_transport_chain() {
        assert!(SkinRestorerConfig::default().build_transport().is_ok());
    }

    #[test]
    fn builds_with_proxy_configured() {
        let config = SkinRestorerConfig {
            proxy: Some(ProxyConfig {
                host: "127.0.0.1".into(),
                port: 3128,
                username: None,
                password: None,
            }),
            ..Default::default()
        };
        assert!(config.build_transport().is_ok());
    }
}
