//! DTOs for link statistics.

use chrono::SecondsFormat;
use serde::Serialize;

use crate::domain::entities::Link;

/// Statistics for a single short link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub url: String,
    pub short: String,
    pub hits: i64,
    /// Creation time in RFC 3339, second precision, UTC.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl From<Link> for StatsResponse {
    fn from(link: Link) -> Self {
        Self {
            url: link.url,
            short: link.id,
            hits: link.hits,
            created_at: link.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}
