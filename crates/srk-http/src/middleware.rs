//! Retry and logging decorators around a [`SkinTransport`]
//!
//! The decorators compose like the upstream client's interceptor chain: each
//! wraps any transport and is itself a transport, so the core stays unaware
//! of which layers are present.

use std::thread;
use std::time::{Duration, Instant};

use srk_core::transport::{SkinTransport, TransportError};
use url::Url;

/// Retries a wrapped transport with a fixed delay between attempts.
pub struct Retry<T> {
    inner: T,
    attempts: u32,
    delay: Duration,
}

impl<T> Retry<T> {
    /// Wrap `inner`, allowing up to `attempts` additional fetches after a
    /// failure, sleeping `delay` between them.
    pub fn new(inner: T, attempts: u32, delay: Duration) -> Self {
        Self {
            inner,
            attempts,
            delay,
        }
    }
}

impl<T: SkinTransport> SkinTransport for Retry<T> {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, TransportError> {
        let mut last = self.inner.fetch(url);
        for attempt in 1..=self.attempts {
            let Err(error) = &last else {
                break;
            };
            tracing::debug!(
                target: "srk_http::middleware",
                %url,
                attempt,
                %error,
                "retrying skin fetch"
            );
            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
            last = self.inner.fetch(url);
        }
        last
    }
}

/// Logs each fetch with its outcome and latency.
pub struct Logging<T> {
    inner: T,
}

impl<T> Logging<T> {
    /// Wrap `inner`.
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: SkinTransport> SkinTransport for Logging<T> {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, TransportError> {
        let started = Instant::now();
        let result = self.inner.fetch(url);
        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(body) => tracing::debug!(
                target: "srk_http::middleware",
                %url,
                elapsed_ms,
                bytes = body.len(),
                "GET completed"
            ),
            Err(error) => tracing::debug!(
                target: "srk_http::middleware",
                %url,
                elapsed_ms,
                %error,
                "GET failed"
            ),
        }
        result
    }
}
