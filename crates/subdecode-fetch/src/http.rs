//! Blocking HTTP acquisition.

use reqwest::blocking::Client;
use reqwest::{Proxy, StatusCode};
use subdecode_core::AcquireError;

use crate::options::FetchOptions;

/// HTTP GET settings validated once per run
///
/// The proxy is parsed up front; the client itself is built per request so
/// a build failure is reported against the URL being fetched.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    options: FetchOptions,
    proxy: Option<Proxy>,
}

impl HttpFetcher {
    /// Validate `options`
    ///
    /// ## Errors
    ///
    /// - `AcquireError::InvalidProxy` when the proxy URL is rejected
    pub fn new(options: &FetchOptions) -> Result<Self, AcquireError> {
        let proxy = match &options.proxy {
            Some(proxy) => Some(Proxy::all(proxy.expose().as_str()).map_err(|e| {
                AcquireError::InvalidProxy {
                    reason: e.to_string(),
                }
            })?),
            None => None,
        };

        Ok(Self {
            options: options.clone(),
            proxy,
        })
    }

    fn client(&self, url: &str) -> Result<Client, AcquireError> {
        let builder = Client::builder()
            .user_agent(self.options.user_agent.header_value())
            .timeout(self.options.timeout)
            .connect_timeout(self.options.connect_timeout);

        // environment proxy variables are ignored; only an explicit proxy applies
        let builder = match &self.proxy {
            Some(proxy) => builder.proxy(proxy.clone()),
            None => builder.no_proxy(),
        };

        builder.build().map_err(|e| client_setup_error(url, e))
    }

    /// GET `url` and return the body bytes
    ///
    /// Only `200 OK` is a success. No retries are performed.
    ///
    /// ## Errors
    ///
    /// - `AcquireError::Timeout`, `AcquireError::Connection` or
    ///   `AcquireError::InvalidUrl` for transport failures
    /// - `AcquireError::HttpStatus` for any status other than 200
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>, AcquireError> {
        tracing::debug!(source_id = url, "sending request");

        let client = self.client(url)?;
        let response = client
            .get(url)
            .send()
            .map_err(|e| map_request_error(url, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AcquireError::HttpStatus {
                source_id: url.to_string(),
                status: status.as_u16(),
                reason: status.to_string(),
            });
        }

        let body = response.bytes().map_err(|e| map_request_error(url, e))?;
        tracing::debug!(source_id = url, bytes = body.len() as u64, "response received");
        Ok(body.to_vec())
    }
}

fn client_setup_error(url: &str, err: impl std::fmt::Display) -> AcquireError {
    AcquireError::Connection {
        source_id: url.to_string(),
        reason: format!("HTTP client setup failed: {}", err),
    }
}

fn map_request_error(url: &str, err: reqwest::Error) -> AcquireError {
    let source_id = url.to_string();
    if err.is_timeout() {
        AcquireError::Timeout { source_id }
    } else if err.is_builder() {
        AcquireError::InvalidUrl {
            source_id,
            reason: err.to_string(),
        }
    } else {
        AcquireError::Connection {
            source_id,
            reason: err.to_string(),
        }
    }
}
