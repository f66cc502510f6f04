//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

pub use crate::models::{ArtistSummary, BandSpan, GanttChart, MemberColor, MembershipInterval};

/// Query parameters for the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchQuery {
    /// Free-text artist name
    #[serde(default)]
    pub q: Option<String>,
}

/// Search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The query as searched (trimmed)
    pub query: String,
    /// Matching artists
    pub results: Vec<ArtistSummary>,
    /// Total count
    pub total: usize,
}

/// Band chart response.
///
/// A band with no membership relations is reported as `no_data` rather
/// than as an error.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BandChartResponse {
    Chart(GanttChart),
    NoData {
        band_id: String,
        title: String,
        message: String,
    },
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Metadata source status
    pub source: String,
}
