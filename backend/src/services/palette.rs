//! Member color allocation.
//!
//! Colors come from the 12-class "Paired" qualitative scheme.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Paired qualitative scheme, 12 classes.
pub const BASE_PALETTE: [&str; 12] = [
    "rgb(166,206,227)",
    "rgb(31,120,180)",
    "rgb(178,223,138)",
    "rgb(51,160,44)",
    "rgb(251,154,153)",
    "rgb(227,26,28)",
    "rgb(253,191,111)",
    "rgb(255,127,0)",
    "rgb(202,178,214)",
    "rgb(106,61,154)",
    "rgb(255,255,153)",
    "rgb(177,89,40)",
];

/// How colors are laid out across member rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PalettePolicy {
    /// Repeat the base palette, then walk it backwards from the last color.
    /// Keeps the color-to-member layout of earlier renders.
    #[default]
    Compatible,
    /// `BASE_PALETTE[i % 12]`, forward.
    Cyclic,
}

impl FromStr for PalettePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compatible" | "reversed" => Ok(Self::Compatible),
            "cyclic" => Ok(Self::Cyclic),
            other => Err(format!("Unknown palette policy: {}", other)),
        }
    }
}

/// Colors for `member_count` rows under `policy`.
pub fn allocate(member_count: usize, policy: PalettePolicy) -> Vec<&'static str> {
    match policy {
        PalettePolicy::Compatible => variable_color_scale(member_count),
        PalettePolicy::Cyclic => cyclic_color_scale(member_count),
    }
}

/// Repeated base palette sliced backwards.
///
/// The base palette is repeated `n / 12 + 1` times. Walking back from the
/// last element, colors are taken down to (excluding) index
/// `12 - (n % 12 + 1)` of the repeated list.
pub fn variable_color_scale(member_count: usize) -> Vec<&'static str> {
    let repetitions = member_count / BASE_PALETTE.len() + 1;
    let repeated: Vec<&'static str> = BASE_PALETTE
        .iter()
        .copied()
        .cycle()
        .take(BASE_PALETTE.len() * repetitions)
        .collect();

    let stop = BASE_PALETTE.len() - (member_count % BASE_PALETTE.len() + 1);
    let taken = repeated.len().saturating_sub(stop + 1);

    repeated.into_iter().rev().take(taken).collect()
}

/// Base palette in order, wrapping every 12 members.
pub fn cyclic_color_scale(member_count: usize) -> Vec<&'static str> {
    (0..member_count).map(color_at).collect()
}

/// Cyclic color for row `index`.
pub fn color_at(index: usize) -> &'static str {
    BASE_PALETTE[index % BASE_PALETTE.len()]
}
