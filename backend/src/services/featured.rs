//! Example bands shown when nothing has been searched yet.

use rand::seq::SliceRandom;

use crate::models::ArtistId;

/// MBIDs of the built-in example bands.
pub const DEFAULT_FEATURED_BANDS: [&str; 4] = [
    "b10bbbfc-cf9e-42e0-be17-e2c3e1d2600d", // The Beatles
    "c1d4f2ba-cf39-460c-9528-6b827d3417a1", // Yes
    "eeb1195b-f213-4ce1-b28c-8565211f8e43", // Guns N' Roses
    "36bfa85f-737b-41db-a8fc-b8825850ffc3", // Pavement
];

/// Built-in example bands as ids.
pub fn default_featured_bands() -> Vec<ArtistId> {
    DEFAULT_FEATURED_BANDS
        .iter()
        .filter_map(|id| id.parse().ok())
        .collect()
}

/// Pick one of `candidates` at random.
pub fn pick_featured(candidates: &[ArtistId]) -> Option<ArtistId> {
    candidates.choose(&mut rand::thread_rng()).copied()
}
