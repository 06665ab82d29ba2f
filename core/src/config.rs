//! Configuration for `DogApiBreedFetcher`.

use std::time::Duration;

/// Public dog.ceo API root.
pub const DEFAULT_BASE_URL: &str = "https://dog.ceo/api";

/// Settings applied when a fetcher and its transport are constructed.
///
/// # Example
///
/// ```
/// use dogapi_core::FetcherConfig;
/// use std::time::Duration;
///
/// let config = FetcherConfig::new()
///     .with_base_url("http://127.0.0.1:3000/api")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    /// API root; the sub-breed endpoint is `{base_url}/breed/{breed}/list`.
    pub(crate) base_url: String,
    /// Overall per-request timeout. `None` keeps the HTTP library default.
    pub(crate) timeout: Option<Duration>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl FetcherConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the fetcher at a different API root.
    ///
    /// Defaults to `https://dog.ceo/api`. A trailing `/` is ignored.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Bound each request by `timeout`.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set or clear the request timeout.
    #[must_use]
    pub const fn with_optional_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// API root the endpoint is built on.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request timeout, `None` when the HTTP library default applies.
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
