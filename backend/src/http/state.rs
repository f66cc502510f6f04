//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::metadata::MetadataSource;
use crate::models::{ArtistId, Clock, SystemClock};
use crate::services::palette::PalettePolicy;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Catalog the band records come from
    pub source: Arc<dyn MetadataSource>,
    /// Time source for open-ended tenures
    pub clock: Arc<dyn Clock>,
    /// Palette layout for member colors
    pub palette_policy: PalettePolicy,
    /// Queries must be longer than this many characters
    pub min_query_len: usize,
    /// Maximum number of search hits
    pub search_limit: usize,
    /// Candidates for the featured band
    pub featured: Arc<Vec<ArtistId>>,
}

impl AppState {
    /// Create a new application state with the given source and default settings.
    pub fn new(source: Arc<dyn MetadataSource>) -> Self {
        Self::from_config(source, &AppConfig::default())
    }

    /// Create application state from loaded configuration.
    ///
    /// Featured band ids that are not valid MBIDs are ignored.
    pub fn from_config(source: Arc<dyn MetadataSource>, config: &AppConfig) -> Self {
        let featured = config
            .featured
            .band_ids
            .iter()
            .filter_map(|id| match id.parse::<ArtistId>() {
                Ok(id) => Some(id),
                Err(_) => {
                    tracing::warn!(%id, "ignoring invalid featured band id");
                    None
                }
            })
            .collect();

        Self {
            source,
            clock: Arc::new(SystemClock),
            palette_policy: config.palette.policy,
            min_query_len: config.search.min_query_len,
            search_limit: config.musicbrainz.search_limit,
            featured: Arc::new(featured),
        }
    }

    /// Replace the clock (tests pin time with a `FixedClock`).
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}
