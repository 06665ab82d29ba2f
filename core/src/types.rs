//! Domain types for the sub-breed lookup.
//!
//! # Design
//! `Breed` is validated once at the boundary and remembers both the caller's
//! original text (used in error payloads) and its ASCII-lowercased form (used
//! in the URL). `SubBreedList` is a shared, read-only slice so handing it out
//! never exposes mutable state. `RemoteResponse` mirrors the dog.ceo envelope
//! with every field optional; schema checks happen in the fetcher so each
//! violation is reported as a distinct failure.

use std::ops::Deref;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::error::BreedNotFound;

/// A non-blank breed name made of ASCII letters, accepted for lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breed {
    original: String,
    normalized: String,
}

impl Breed {
    /// Validate caller input.
    ///
    /// Absent input fails with payload `"null"`. Blank input, or input with
    /// anything other than ASCII letters, fails with the input itself as
    /// payload. Characters such as `#`, `?` or `/` would otherwise change
    /// which endpoint the URL addresses.
    pub fn parse(input: Option<&str>) -> Result<Self, BreedNotFound> {
        let Some(raw) = input else {
            return Err(BreedNotFound::new("null"));
        };
        if is_blank(raw) || !raw.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(BreedNotFound::new(raw));
        }
        Ok(Self {
            original: raw.to_string(),
            normalized: raw.to_ascii_lowercase(),
        })
    }

    /// The breed exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Locale-independent lowercase form inserted into the endpoint URL.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub(crate) fn not_found(&self) -> BreedNotFound {
        BreedNotFound::new(self.original.as_str())
    }
}

/// Whitespace-only check that, like `String.isBlank` on the JVM, does not
/// count the non-breaking spaces U+00A0, U+2007 and U+202F as blank.
fn is_blank(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_whitespace() && !matches!(c, '\u{00A0}' | '\u{2007}' | '\u{202F}'))
}

/// Ordered, immutable list of sub-breed names.
///
/// Clones share the same allocation. Duplicates and upstream order are kept
/// as received.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubBreedList(Arc<[String]>);

impl SubBreedList {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.to_vec()
    }
}

impl Deref for SubBreedList {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for SubBreedList {
    fn from(names: Vec<String>) -> Self {
        Self(names.into())
    }
}

impl<'a> IntoIterator for &'a SubBreedList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The JSON envelope returned by `GET /breed/{breed}/list`.
///
/// On success `status` is `"success"` and `message` is an array of strings.
/// On failure `status` is `"error"` and `message` is a human-readable string.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl RemoteResponse {
    /// ASCII case-insensitive check for `status == "success"`.
    pub fn is_success(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("success"))
    }
}
