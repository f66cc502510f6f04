//! Metadata source factory.
//!
//! Creates the configured [`MetadataSource`] behind an `Arc` so it can be
//! shared by every request handler.

use std::str::FromStr;
use std::sync::Arc;

use super::error::SourceResult;
use super::local::LocalSource;
use super::musicbrainz::MusicBrainzSource;
use super::source::MetadataSource;
use crate::config::AppConfig;

/// Metadata source type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    /// MusicBrainz web service
    MusicBrainz,
    /// In-memory local source
    Local,
}

impl FromStr for SourceType {
    type Err = String;

    /// Parse source type from string ("musicbrainz", "mb", "local").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "musicbrainz" | "mb" => Ok(Self::MusicBrainz),
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown source type: {}", s)),
        }
    }
}

/// Factory for metadata source instances.
pub struct SourceFactory;

impl SourceFactory {
    /// Create the source selected by `config`.
    pub fn from_config(config: &AppConfig) -> SourceResult<Arc<dyn MetadataSource>> {
        match config.source_type()? {
            SourceType::MusicBrainz => {
                let source = MusicBrainzSource::new(&config.musicbrainz)?;
                Ok(Arc::new(source))
            }
            SourceType::Local => {
                let source = match &config.source.fixtures {
                    Some(path) => LocalSource::from_fixture_file(path)?,
                    None => LocalSource::new(),
                };
                Ok(Arc::new(source))
            }
        }
    }

    /// Create an empty in-memory source.
    pub fn create_local() -> Arc<dyn MetadataSource> {
        Arc::new(LocalSource::new())
    }
}
