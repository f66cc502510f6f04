//! Application configuration.
//!
//! Settings are read from a TOML file (`gantt.toml`) and then overridden by
//! environment variables. Every field has a default, so an empty file or no
//! file at all yields a working configuration against the public
//! MusicBrainz server.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::metadata::factory::SourceType;
use crate::metadata::musicbrainz::DEFAULT_BASE_URL;
use crate::metadata::SourceError;
use crate::services::featured::DEFAULT_FEATURED_BANDS;
use crate::services::palette::PalettePolicy;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "GANTT_CONFIG";

/// Full application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub musicbrainz: MusicBrainzSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub palette: PaletteSettings,
    #[serde(default)]
    pub featured: FeaturedSettings,
}

/// Bind address settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Metadata source selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSettings {
    #[serde(rename = "type", default = "default_source_type")]
    pub source_type: String,
    /// JSON fixture loaded into the local source.
    #[serde(default)]
    pub fixtures: Option<PathBuf>,
}

/// MusicBrainz client settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicBrainzSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
}

/// Search box behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Queries must be longer than this many characters.
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaletteSettings {
    #[serde(default)]
    pub policy: PalettePolicy,
}

/// Bands offered before anything is searched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedSettings {
    #[serde(default = "default_featured_bands")]
    pub band_ids: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_source_type() -> String {
    "musicbrainz".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!(
        "band-gantt/{} (https://github.com/band-gantt/band-gantt)",
        env!("CARGO_PKG_VERSION")
    )
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_search_limit() -> usize {
    10
}

fn default_min_query_len() -> usize {
    2
}

fn default_featured_bands() -> Vec<String> {
    DEFAULT_FEATURED_BANDS.iter().map(|s| s.to_string()).collect()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            source_type: default_source_type(),
            fixtures: None,
        }
    }
}

impl Default for MusicBrainzSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            search_limit: default_search_limit(),
        }
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            min_query_len: default_min_query_len(),
        }
    }
}

impl Default for FeaturedSettings {
    fn default() -> Self {
        Self {
            band_ids: default_featured_bands(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// A relative `source.fixtures` path is resolved against the directory
    /// holding the file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(AppConfig)` if successful
    /// * `Err(SourceError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SourceError::configuration(format!("Failed to read config file: {}", e))
        })?;
        let mut config = Self::from_toml_str(&content)?;

        if let (Some(fixtures), Some(dir)) = (config.source.fixtures.as_mut(), path.parent()) {
            if fixtures.is_relative() {
                *fixtures = dir.join(&*fixtures);
            }
        }
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, SourceError> {
        toml::from_str(content).map_err(|e| {
            SourceError::configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load configuration from the default location.
    ///
    /// Uses `GANTT_CONFIG` when set, otherwise searches for `gantt.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Falls back to defaults when no file exists.
    pub fn from_default_location() -> Result<Self, SourceError> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Self::from_file(path);
        }

        let search_paths = [
            PathBuf::from("gantt.toml"),
            PathBuf::from("backend/gantt.toml"),
            PathBuf::from("../gantt.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Apply environment variable overrides.
    ///
    /// # Environment Variables
    /// - `HOST`, `PORT`: bind address
    /// - `SOURCE_TYPE`: `musicbrainz` | `local`
    /// - `MUSICBRAINZ_URL`, `MUSICBRAINZ_USER_AGENT`, `MUSICBRAINZ_TIMEOUT_SECS`
    /// - `PALETTE_POLICY`: `compatible` | `cyclic`
    ///
    /// # Errors
    /// Returns an error if a numeric or enum variable does not parse.
    pub fn apply_env(mut self) -> Result<Self, SourceError> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| SourceError::configuration("PORT must be a valid port number"))?;
        }
        if let Ok(source_type) = env::var("SOURCE_TYPE") {
            self.source.source_type = source_type;
        }
        if let Ok(url) = env::var("MUSICBRAINZ_URL") {
            self.musicbrainz.base_url = url;
        }
        if let Ok(agent) = env::var("MUSICBRAINZ_USER_AGENT") {
            self.musicbrainz.user_agent = agent;
        }
        if let Ok(timeout) = env::var("MUSICBRAINZ_TIMEOUT_SECS") {
            self.musicbrainz.timeout_secs = timeout.parse().map_err(|_| {
                SourceError::configuration("MUSICBRAINZ_TIMEOUT_SECS must be a whole number")
            })?;
        }
        if let Ok(policy) = env::var("PALETTE_POLICY") {
            self.palette.policy = policy.parse().map_err(SourceError::configuration)?;
        }
        Ok(self)
    }

    /// Load from the default location, then apply environment overrides.
    pub fn load() -> Result<Self, SourceError> {
        Self::from_default_location()?.apply_env()
    }

    /// Get the metadata source type from configuration.
    pub fn source_type(&self) -> Result<SourceType, SourceError> {
        self.source
            .source_type
            .parse()
            .map_err(SourceError::configuration)
    }

    /// `host:port` to bind to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
