//! # Band Gantt
//!
//! Band membership timelines from the MusicBrainz catalog.
//!
//! Looks a band up by name, fetches its artist relations and turns them into
//! Gantt chart data: one task per tenure, one color per member. The browser
//! side renders the chart; this crate serves the data over a REST API.
//!
//! ## Architecture
//!
//! - [`models`]: catalog records, timeline types and the clock
//! - [`services`]: timeline builder, palette allocator, chart assembly
//! - [`metadata`]: the `MetadataSource` trait, MusicBrainz and in-memory sources
//! - [`config`]: TOML + environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod config;
pub mod metadata;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
