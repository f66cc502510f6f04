//! Metadata source trait.

use async_trait::async_trait;

use super::error::SourceResult;
use crate::models::{ArtistId, ArtistSummary, BandInfo};

/// Read access to an artist catalog.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to be shared across request handlers.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Search artists by free-text name.
    ///
    /// # Arguments
    /// * `query` - Name fragment, already trimmed and long enough to search
    /// * `limit` - Maximum number of hits
    ///
    /// # Returns
    /// * `Ok(Vec<ArtistSummary>)` - Hits in catalog relevance order
    /// * `Err(SourceError)` - If the catalog could not be queried
    async fn search_artists(&self, query: &str, limit: usize) -> SourceResult<Vec<ArtistSummary>>;

    /// Fetch a band record with its artist relations.
    ///
    /// # Returns
    /// * `Ok(BandInfo)` - The band and its relations
    /// * `Err(SourceError::NotFound)` - If the catalog has no such artist
    async fn fetch_band(&self, artist_id: ArtistId) -> SourceResult<BandInfo>;

    /// Check whether the catalog is reachable.
    async fn health_check(&self) -> SourceResult<bool>;

    /// Short name of the backend, for health reports.
    fn name(&self) -> &'static str;
}
