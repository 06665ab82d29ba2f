//! Sub-breed lookups against the dog.ceo API.
//!
//! # Overview
//! `DogApiBreedFetcher` implements the `BreedFetcher` capability: given a
//! breed name it performs a blocking `GET {base_url}/breed/{breed}/list` and
//! returns the sub-breed names as an immutable `SubBreedList`.
//!
//! # Design
//! - All failures surface as `BreedNotFound` carrying the requested breed.
//!   The concrete cause is logged through `tracing` at debug level.
//! - The fetcher holds one `HttpTransport` for its lifetime so connections
//!   are pooled; `UreqTransport` is the default.
//! - Request building and response parsing are separate, I/O-free steps.
//! - No state is kept between calls; a fetcher can be shared between threads.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod types;

pub use config::FetcherConfig;
pub use error::{BreedNotFound, TransportError};
pub use fetcher::{BreedFetcher, DogApiBreedFetcher};
pub use http::{HttpRequest, HttpResponse, HttpTransport, UreqTransport};
pub use types::{Breed, RemoteResponse, SubBreedList};
