//! Transport seam for skin downloads
//!
//! The core performs exactly one fetch per verification pass and owns none of
//! the transport policy. Retry counts, inter-retry delays, timeouts, proxies,
//! and connection pooling all belong to the implementation behind this trait.

use url::Url;

/// Blocking byte transport for skin URLs.
///
/// Implementations own their retry/backoff policy and timeout enforcement;
/// the core calls [`SkinTransport::fetch`] once per pass and blocks on it.
/// Cancellation, if needed, is the implementation's concern.
pub trait SkinTransport {
    /// Fetch the body bytes at `url`.
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, TransportError>;
}

impl<T: SkinTransport + ?Sized> SkinTransport for &T {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, TransportError> {
        (**self).fetch(url)
    }
}

/// Failure reported by a [`SkinTransport`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The server answered with a non-success status.
    #[error("unexpected HTTP status {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },

    /// The request could not be completed at all.
    #[error("request failed: {reason}")]
    Failed {
        /// Human-readable cause from the underlying client.
        reason: String,
    },
}
