//! Metadata sources: where band records come from.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  HTTP handlers / services                     │
//! └───────────────────┬──────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────┐
//! │  MetadataSource trait (source.rs)             │
//! └───────────────────┬──────────────────────────┘
//!          ┌──────────┴───────────┐
//!  ┌───────▼────────┐    ┌────────▼───────┐
//!  │  MusicBrainz    │    │  Local          │
//!  │  (reqwest)      │    │  (in-memory)    │
//!  └────────────────┘    └────────────────┘
//! ```

pub mod error;
pub mod factory;
pub mod local;
pub mod musicbrainz;
pub mod source;

pub use error::{ErrorContext, SourceError, SourceResult};
pub use factory::{SourceFactory, SourceType};
pub use local::LocalSource;
pub use musicbrainz::MusicBrainzSource;
pub use source::MetadataSource;
