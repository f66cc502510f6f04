//! In-memory metadata source.
//!
//! Holds band records keyed by MBID. Used by tests and for offline
//! development, where it can be seeded from a JSON fixture file.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use super::error::{ErrorContext, SourceError, SourceResult};
use super::source::MetadataSource;
use crate::models::{ArtistId, ArtistSummary, BandInfo};

/// In-memory catalog.
#[derive(Clone, Default)]
pub struct LocalSource {
    bands: Arc<RwLock<HashMap<ArtistId, BandInfo>>>,
}

impl LocalSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load bands from a JSON file holding an array of lookup records.
    ///
    /// Records without a parseable `id` are rejected.
    pub fn from_fixture_file<P: AsRef<Path>>(path: P) -> SourceResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            SourceError::configuration(format!("Failed to read fixture file: {}", e))
        })?;
        let bands: Vec<BandInfo> = serde_json::from_str(&content).map_err(|e| {
            SourceError::configuration(format!("Failed to parse fixture file: {}", e))
        })?;

        let source = Self::new();
        for band in bands {
            let id = band
                .id
                .as_deref()
                .and_then(|id| id.parse::<ArtistId>().ok())
                .ok_or_else(|| {
                    SourceError::configuration(format!(
                        "Fixture band '{}' has no valid id",
                        band.name
                    ))
                })?;
            source.insert(id, band);
        }
        Ok(source)
    }

    /// Store or replace a band record.
    pub fn insert(&self, id: ArtistId, mut band: BandInfo) {
        band.id = Some(id.to_string());
        self.bands.write().insert(id, band);
    }

    pub fn len(&self) -> usize {
        self.bands.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.read().is_empty()
    }
}

#[async_trait]
impl MetadataSource for LocalSource {
    async fn search_artists(&self, query: &str, limit: usize) -> SourceResult<Vec<ArtistSummary>> {
        let needle = query.trim().to_lowercase();
        let bands = self.bands.read();

        let mut hits: Vec<ArtistSummary> = bands
            .iter()
            .filter(|(_, band)| band.name.to_lowercase().starts_with(&needle))
            .map(|(id, band)| ArtistSummary {
                id: id.to_string(),
                name: band.name.clone(),
                disambiguation: None,
                artist_type: None,
                score: None,
            })
            .collect();
        hits.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        hits.truncate(limit);
        Ok(hits)
    }

    async fn fetch_band(&self, artist_id: ArtistId) -> SourceResult<BandInfo> {
        self.bands.read().get(&artist_id).cloned().ok_or_else(|| {
            SourceError::not_found_with_context(
                format!("Artist {} not found", artist_id),
                ErrorContext::new("fetch_band")
                    .with_entity("artist")
                    .with_entity_id(artist_id),
            )
        })
    }

    async fn health_check(&self) -> SourceResult<bool> {
        Ok(true)
    }

    fn name(&self) -> &'static str {
        "local"
    }
}
