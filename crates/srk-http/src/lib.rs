//! Blocking HTTP transport chain for the SRK verification core
//!
//! `srk-core` calls a transport exactly once per skin fetch; everything else
//! about the request lives here. The chain mirrors the upstream service
//! client: a minimal "send request, get bytes" primitive wrapped in retry and
//! logging middleware, built from the service's skin-restorer configuration
//! section.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod middleware;

pub use self::client::HttpTransport;
pub use self::config::{ProxyConfig, SkinRestorerConfig};
pub use self::middleware::{Logging, Retry};

/// The fully assembled production transport chain.
pub type DefaultTransport = Logging<Retry<HttpTransport>>;

/// Failure building a transport from configuration.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The underlying HTTP client rejected the configuration.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
