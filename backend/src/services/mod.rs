//! Service layer for timeline and chart construction.
//!
//! Everything here is pure: services take a band record and the current
//! time and return chart data. Fetching the record is the job of
//! [`crate::metadata`].

pub mod chart;
pub mod featured;
pub mod palette;
pub mod timeline;

pub use chart::{assign_colors, build_chart, NO_DATA_MESSAGE};
pub use featured::{default_featured_bands, pick_featured};
pub use palette::{allocate, variable_color_scale, PalettePolicy, BASE_PALETTE};
pub use timeline::{band_span, build_timeline, distinct_members};
