//! MusicBrainz web service client.
//!
//! Talks to the JSON flavour of the `/ws/2` API. MusicBrainz rejects
//! anonymous clients, so every request carries the configured User-Agent.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

use super::error::{ErrorContext, SourceError, SourceResult};
use super::source::MetadataSource;
use crate::config::MusicBrainzSettings;
use crate::models::{ArtistId, ArtistSearchResults, ArtistSummary, BandInfo};

/// Public MusicBrainz server.
pub const DEFAULT_BASE_URL: &str = "https://musicbrainz.org";

/// MusicBrainz-backed metadata source.
#[derive(Debug, Clone)]
pub struct MusicBrainzSource {
    client: Client,
    base_url: String,
}

impl MusicBrainzSource {
    /// Build a client from settings.
    pub fn new(settings: &MusicBrainzSettings) -> SourceResult<Self> {
        if settings.user_agent.trim().is_empty() {
            return Err(SourceError::configuration(
                "MusicBrainz requires a non-empty user agent",
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|e| {
                SourceError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        context: ErrorContext,
    ) -> SourceResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "requesting musicbrainz");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| SourceError::transport(e.to_string(), context.clone()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::not_found_with_context(
                format!("{} returned 404", path),
                context,
            ));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::upstream(
                status.as_u16(),
                body.trim().to_string(),
                context,
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::transport(e.to_string(), context.clone()))?;
        serde_json::from_str(&body).map_err(|e| SourceError::decode(e.to_string(), context))
    }
}

/// Lucene query for a name prefix search.
pub fn prefix_query(query: &str) -> String {
    format!("{}*", query.trim())
}

#[async_trait]
impl MetadataSource for MusicBrainzSource {
    #[instrument(skip(self), level = "debug")]
    async fn search_artists(&self, query: &str, limit: usize) -> SourceResult<Vec<ArtistSummary>> {
        let context = ErrorContext::new("search_artists")
            .with_entity("artist")
            .with_details(format!("query={}", query));

        let results: ArtistSearchResults = self
            .get_json(
                "/ws/2/artist",
                &[
                    ("query", prefix_query(query)),
                    ("limit", limit.to_string()),
                    ("fmt", "json".to_string()),
                ],
                context,
            )
            .await?;

        debug!(hits = results.artists.len(), "artist search complete");
        Ok(results.artists)
    }

    #[instrument(skip(self), level = "debug")]
    async fn fetch_band(&self, artist_id: ArtistId) -> SourceResult<BandInfo> {
        let context = ErrorContext::new("fetch_band")
            .with_entity("artist")
            .with_entity_id(artist_id);

        let path = format!("/ws/2/artist/{}", artist_id);
        let mut band: BandInfo = self
            .get_json(
                &path,
                &[
                    ("inc", "artist-rels".to_string()),
                    ("fmt", "json".to_string()),
                ],
                context,
            )
            .await?;

        if band.id.is_none() {
            band.id = Some(artist_id.to_string());
        }
        debug!(band = %band.name, relations = band.relations.len(), "band fetched");
        Ok(band)
    }

    async fn health_check(&self) -> SourceResult<bool> {
        match self.search_artists("health", 1).await {
            Ok(_) => Ok(true),
            Err(_) => Ok(false),
        }
    }

    fn name(&self) -> &'static str {
        "musicbrainz"
    }
}
