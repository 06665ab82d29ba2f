//! Error types for the breed fetcher.
//!
//! # Design
//! Callers only ever see `BreedNotFound`. The fetcher tracks the concrete
//! cause of a failure in the crate-internal `FetchError`, logs it, and then
//! collapses it into `BreedNotFound` carrying the breed the caller asked for.
//! An unknown breed and an unreachable server are indistinguishable to the
//! caller.

use thiserror::Error;

/// The single failure returned by `BreedFetcher::sub_breeds`.
///
/// `breed` is the input exactly as the caller supplied it, or the literal
/// `"null"` when no input was given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("breed not found: {breed}")]
pub struct BreedNotFound {
    breed: String,
}

impl BreedNotFound {
    pub fn new(breed: impl Into<String>) -> Self {
        Self { breed: breed.into() }
    }

    /// The offending breed string.
    pub fn breed(&self) -> &str {
        &self.breed
    }
}

/// Failure raised by an `HttpTransport` before a response was obtained.
///
/// Covers connection refusal, DNS and TLS failures, timeouts and errors while
/// reading the response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<ureq::Error> for TransportError {
    fn from(err: ureq::Error) -> Self {
        Self(err.to_string())
    }
}

/// Concrete reason a lookup failed. Never leaves the crate.
#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),

    #[error("empty response body")]
    EmptyBody,

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response body is not a JSON object")]
    NotAnObject,

    #[error("upstream reported status {0:?}")]
    UpstreamStatus(Option<String>),

    #[error("response has no `message` array")]
    MissingMessage,

    #[error("`message` element {0} is not a string")]
    NonStringElement(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breed_not_found_message_names_the_breed() {
        let err = BreedNotFound::new("zzznotabreed");
        assert_eq!(err.breed(), "zzznotabreed");
        assert_eq!(err.to_string(), "breed not found: zzznotabreed");
    }

    #[test]
    fn transport_error_displays_inner_message() {
        let err = TransportError("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");

        let fetch: FetchError = err.into();
        assert!(fetch.to_string().contains("connection refused"));
    }

    #[test]
    fn upstream_status_shows_missing_status() {
        let err = FetchError::UpstreamStatus(None);
        assert_eq!(err.to_string(), "upstream reported status None");
    }
}
