//! HTTP transport seam for the breed fetcher.
//!
//! # Design
//! Requests and responses are plain data. `DogApiBreedFetcher` builds an
//! `HttpRequest`, hands it to an `HttpTransport`, and parses the returned
//! `HttpResponse` without knowing which HTTP library executed the call. The
//! production transport is `UreqTransport`; tests substitute their own.
//!
//! Non-2xx statuses are data, not transport errors. Interpreting the status
//! is the fetcher's job.

use ureq::Agent;

use crate::config::FetcherConfig;
use crate::error::TransportError;

/// A GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
}

/// A fully read HTTP response. An empty `body` means the server sent none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes GET requests on behalf of the fetcher.
///
/// Implementations must be safe to share between threads; the fetcher holds
/// exactly one transport for its whole lifetime.
pub trait HttpTransport: Send + Sync {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Blocking transport backed by a single `ureq::Agent`.
///
/// The agent owns the connection pool, so cloning the transport shares it.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new(config: &FetcherConfig) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(&FetcherConfig::default())
    }
}

impl HttpTransport for UreqTransport {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        // The response owns the connection; it goes back to the pool (or is
        // closed) when it drops at the end of this scope, on every path.
        let mut response = self.agent.get(&request.url).call()?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string()?;
        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16) -> HttpResponse {
        HttpResponse {
            status,
            body: String::new(),
        }
    }

    #[test]
    fn success_covers_the_2xx_range_only() {
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(response(299).is_success());
        assert!(!response(199).is_success());
        assert!(!response(301).is_success());
        assert!(!response(404).is_success());
        assert!(!response(500).is_success());
    }

    #[test]
    fn unreachable_host_is_a_transport_error() {
        // Port 9 (discard) on loopback is closed in any sane test environment.
        let transport = UreqTransport::default();
        let request = HttpRequest {
            url: "http://127.0.0.1:9/api/breed/hound/list".to_string(),
        };
        assert!(transport.get(&request).is_err());
    }

    #[test]
    fn transport_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UreqTransport>();
    }
}
