//! The `BreedFetcher` capability and its dog.ceo implementation.
//!
//! # Design
//! `DogApiBreedFetcher` owns one `HttpTransport` for its whole lifetime and a
//! precompiled endpoint prefix. A lookup is split the same way as the wire
//! exchange: `build_request` turns a validated `Breed` into an `HttpRequest`,
//! the transport executes it, and `parse_response` turns the `HttpResponse`
//! into a `SubBreedList`. Both halves are public so they can be exercised
//! without a network.
//!
//! Every failure (invalid input, transport, status, body, schema) ends up as
//! `BreedNotFound` carrying the caller's breed string.

use tracing::debug;

use crate::config::FetcherConfig;
use crate::error::{BreedNotFound, FetchError};
use crate::http::{HttpRequest, HttpResponse, HttpTransport, UreqTransport};
use crate::types::{Breed, RemoteResponse, SubBreedList};

/// Looks up the sub-breeds of a dog breed.
pub trait BreedFetcher: Send + Sync {
    /// Return the sub-breeds of `breed`, in upstream order.
    ///
    /// `None` stands for absent input and fails with payload `"null"`. An
    /// empty list is a successful answer for breeds without sub-breeds.
    fn sub_breeds(&self, breed: Option<&str>) -> Result<SubBreedList, BreedNotFound>;
}

/// `BreedFetcher` backed by the dog.ceo JSON API.
#[derive(Debug, Clone)]
pub struct DogApiBreedFetcher<T = UreqTransport> {
    transport: T,
    breed_prefix: String,
}

impl DogApiBreedFetcher<UreqTransport> {
    /// Fetcher for the public dog.ceo API with library-default timeouts.
    pub fn new() -> Self {
        Self::with_config(FetcherConfig::default())
    }

    /// Fetcher with a `UreqTransport` built from `config`.
    pub fn with_config(config: FetcherConfig) -> Self {
        let transport = UreqTransport::new(&config);
        Self::with_transport(transport, &config)
    }
}

impl Default for DogApiBreedFetcher<UreqTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HttpTransport> DogApiBreedFetcher<T> {
    /// Build a fetcher around an existing transport. Only `base_url` is read
    /// from `config`; transport settings belong to `transport`.
    pub fn with_transport(transport: T, config: &FetcherConfig) -> Self {
        Self {
            transport,
            breed_prefix: format!("{}/breed/", config.base_url.trim_end_matches('/')),
        }
    }

    /// `GET {base_url}/breed/{breed}/list` with the lowercased breed inserted
    /// verbatim. `Breed` only admits ASCII letters, so nothing needs encoding.
    pub fn build_request(&self, breed: &Breed) -> HttpRequest {
        HttpRequest {
            url: format!("{}{}/list", self.breed_prefix, breed.normalized()),
        }
    }

    /// Turn a dog.ceo response into the sub-breed list, or `BreedNotFound`
    /// for any status, body or schema problem.
    pub fn parse_response(
        &self,
        breed: &Breed,
        response: &HttpResponse,
    ) -> Result<SubBreedList, BreedNotFound> {
        decode(response).map_err(|e| collapse(breed, &e))
    }

    fn fetch(&self, breed: &Breed) -> Result<SubBreedList, FetchError> {
        let request = self.build_request(breed);
        debug!(url = %request.url, "Requesting sub-breeds");
        let response = self.transport.get(&request)?;
        decode(&response)
    }
}

impl<T: HttpTransport> BreedFetcher for DogApiBreedFetcher<T> {
    fn sub_breeds(&self, breed: Option<&str>) -> Result<SubBreedList, BreedNotFound> {
        let breed = Breed::parse(breed).inspect_err(|e| {
            debug!(breed = %e.breed(), "Rejected invalid breed before any request");
        })?;
        let list = self.fetch(&breed).map_err(|e| collapse(&breed, &e))?;
        debug!(breed = %breed.as_str(), count = list.len(), "Fetched sub-breeds");
        Ok(list)
    }
}

fn collapse(breed: &Breed, err: &FetchError) -> BreedNotFound {
    debug!(breed = %breed.as_str(), error = %err, "Sub-breed lookup failed");
    breed.not_found()
}

/// Interpret a dog.ceo response. Any deviation from the success shape is an
/// error.
fn decode(response: &HttpResponse) -> Result<SubBreedList, FetchError> {
    if !response.is_success() {
        return Err(FetchError::HttpStatus(response.status));
    }
    if response.body.is_empty() {
        return Err(FetchError::EmptyBody);
    }

    let value: serde_json::Value = serde_json::from_str(&response.body)?;
    if !value.is_object() {
        return Err(FetchError::NotAnObject);
    }
    let remote: RemoteResponse = serde_json::from_value(value)?;
    if !remote.is_success() {
        return Err(FetchError::UpstreamStatus(remote.status));
    }

    let Some(serde_json::Value::Array(items)) = remote.message else {
        return Err(FetchError::MissingMessage);
    };
    let names = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            serde_json::Value::String(name) => Ok(name),
            _ => Err(FetchError::NonStringElement(i)),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SubBreedList::from(names))
}
