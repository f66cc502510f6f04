//! Band membership timeline.
//!
//! Turns a catalog band record into one [`MembershipInterval`] per membership
//! relation, filling missing tenure dates from the band's own life-span.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::models::{BandInfo, BandSpan, ChartDate, MembershipInterval};

/// Resolve the band's overall span.
///
/// A band that has not ended is still active, so its span runs to `now`.
pub fn band_span(band: &BandInfo, now: DateTime<Utc>) -> BandSpan {
    let life_span = &band.life_span;
    let begin = ChartDate::recorded(life_span.begin.as_deref());

    let end = if life_span.ended {
        ChartDate::recorded(life_span.end.as_deref()).unwrap_or_else(|| {
            warn!(band = %band.name, "band marked ended without an end date, using current time");
            ChartDate::Instant(now)
        })
    } else {
        ChartDate::Instant(now)
    };

    BandSpan { begin, end }
}

/// Build the membership intervals for `band`, in relation order.
///
/// Relations that are not memberships are dropped. Malformed relations are
/// skipped with a warning; they never fail the listing.
pub fn build_timeline(band: &BandInfo, now: DateTime<Utc>) -> Vec<MembershipInterval> {
    let span = band_span(band, now);
    build_timeline_with_span(band, &span)
}

/// Same as [`build_timeline`] with an already resolved span.
pub fn build_timeline_with_span(band: &BandInfo, span: &BandSpan) -> Vec<MembershipInterval> {
    let mut intervals = Vec::new();

    for (index, relation) in band.relations.iter().enumerate() {
        if relation.relation_type.is_none() {
            warn!(band = %band.name, index, "relation without a type, skipping");
            continue;
        }
        if !relation.is_membership() {
            continue;
        }
        let Some(member) = relation.artist_name() else {
            warn!(band = %band.name, index, "membership relation without an artist name, skipping");
            continue;
        };

        let start = match ChartDate::recorded(relation.begin.as_deref()).or_else(|| span.begin.clone()) {
            Some(start) => start,
            None => {
                warn!(band = %band.name, member, "no tenure begin and no band begin, skipping");
                continue;
            }
        };
        let finish = ChartDate::recorded(relation.end.as_deref()).unwrap_or_else(|| span.end.clone());

        intervals.push(MembershipInterval::new(member, start, finish));
    }

    debug!(
        band = %band.name,
        relations = band.relations.len(),
        intervals = intervals.len(),
        "built membership timeline"
    );
    intervals
}

/// Distinct member names in order of first appearance.
pub fn distinct_members(intervals: &[MembershipInterval]) -> Vec<String> {
    let mut members: Vec<String> = Vec::new();
    for interval in intervals {
        if !members.iter().any(|m| m == &interval.resource) {
            members.push(interval.resource.clone());
        }
    }
    members
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod timeline_tests;
