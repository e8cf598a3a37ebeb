//! Transport error type shared by every HTTP probe.

use thiserror::Error;

/// Error returned by a single GET (curl failure, HTTP status, or undecodable body).
///
/// Kept typed so callers can log the cause of a swallowed probe failure
/// before anything is converted to anyhow.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, bad URL, etc.).
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Status { url: String, code: u32 },
    /// Body was not the JSON shape we expected.
    #[error("decode JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    /// A request URL could not be built.
    #[error("build request URL: {0}")]
    Url(#[from] url::ParseError),
}

impl FetchError {
    /// True for 404, the usual "no such page" answer from the databank.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status { code: 404, .. })
    }
}
