//! Gantt chart assembly: timeline plus member colors.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::palette::{self, PalettePolicy};
use super::timeline::{band_span, build_timeline_with_span, distinct_members};
use crate::models::{BandInfo, GanttChart, MemberColor};

/// Message shown when a band has no membership data.
pub const NO_DATA_MESSAGE: &str = "No band member information available.";

/// Build the chart for `band`, or `None` when no relation qualifies.
pub fn build_chart(band: &BandInfo, now: DateTime<Utc>, policy: PalettePolicy) -> Option<GanttChart> {
    let span = band_span(band, now);
    let tasks = build_timeline_with_span(band, &span);
    if tasks.is_empty() {
        debug!(band = %band.name, "no membership relations");
        return None;
    }

    let members = distinct_members(&tasks);
    let colors = assign_colors(&members, policy);

    Some(GanttChart {
        band_id: band.id.clone(),
        title: band.name.clone(),
        span,
        tasks,
        colors,
    })
}

/// Pair each member with a palette color by position.
///
/// A palette shorter than the member list never drops members: the rest get
/// their cyclic color.
pub fn assign_colors(members: &[String], policy: PalettePolicy) -> Vec<MemberColor> {
    let colors = palette::allocate(members.len(), policy);
    if colors.len() < members.len() {
        warn!(
            members = members.len(),
            colors = colors.len(),
            "palette shorter than member list, filling with cyclic colors"
        );
    }

    members
        .iter()
        .enumerate()
        .map(|(index, member)| MemberColor {
            resource: member.clone(),
            color: colors
                .get(index)
                .copied()
                .unwrap_or_else(|| palette::color_at(index))
                .to_string(),
        })
        .collect()
}
