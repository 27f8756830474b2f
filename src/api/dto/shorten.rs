//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Request to shorten a single URL.
///
/// Unknown fields are rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be absolute HTTP/HTTPS).
    pub url: String,
}

/// Newly created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short: String,
    pub url: String,
}

impl From<Link> for ShortenResponse {
    fn from(link: Link) -> Self {
        Self {
            short: link.id,
            url: link.url,
        }
    }
}
