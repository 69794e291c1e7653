//! Minimal blocking HTTP primitive

use reqwest::blocking::Client;
use srk_core::transport::{SkinTransport, TransportError};
use url::Url;

use crate::BuildError;
use crate::config::SkinRestorerConfig;

/// One plain blocking GET per fetch.
///
/// Timeouts and the optional proxy come from [`SkinRestorerConfig`]; retry
/// and logging are layered on top by the middleware in this crate.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a client from the config's timeout and proxy settings.
    pub fn new(config: &SkinRestorerConfig) -> Result<Self, BuildError> {
        let mut builder = Client::builder()
            .connect_timeout(config.timeout())
            .timeout(config.timeout());

        if let Some(proxy) = &config.proxy {
            let mut scheme = reqwest::Proxy::all(proxy.url())?;
            if let (Some(username), Some(password)) = (&proxy.username, &proxy.password) {
                scheme = scheme.basic_auth(username, password);
            }
            builder = builder.proxy(scheme);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl SkinTransport for HttpTransport {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| TransportError::Failed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(|e| TransportError::Failed {
            reason: e.to_string(),
        })?;
        Ok(body.to_vec())
    }
}
