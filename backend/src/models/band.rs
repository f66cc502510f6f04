//! Catalog records as returned by the MusicBrainz web service.
//!
//! Only the fields the timeline needs are modelled. Everything that can be
//! missing or malformed upstream is optional here so that one bad relation
//! never fails the whole record.

use serde::{Deserialize, Serialize};
use tracing::warn;

crate::define_id_type!(uuid::Uuid, ArtistId);

/// Relation type for a regular band member.
pub const MEMBER_OF_BAND: &str = "member of band";

/// Relation type for a supporting (session/touring) instrumentalist.
pub const SUPPORTING_MUSICIAN: &str = "instrumental supporting musician";

/// Relation types that produce a membership interval.
pub const MEMBERSHIP_RELATION_TYPES: [&str; 2] = [MEMBER_OF_BAND, SUPPORTING_MUSICIAN];

/// Artist lookup result (`/ws/2/artist/{id}?inc=artist-rels`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BandInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "life-span", default)]
    pub life_span: LifeSpan,
    #[serde(default, deserialize_with = "skip_malformed_relations")]
    pub relations: Vec<Relation>,
}

/// Overall active range of an artist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LifeSpan {
    #[serde(default)]
    pub begin: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub ended: bool,
}

/// A typed link between another artist and the band.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    #[serde(rename = "type", default)]
    pub relation_type: Option<String>,
    #[serde(default)]
    pub artist: Option<ArtistRef>,
    #[serde(default)]
    pub begin: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl Relation {
    /// Whether this relation describes band membership.
    pub fn is_membership(&self) -> bool {
        self.relation_type
            .as_deref()
            .is_some_and(|t| MEMBERSHIP_RELATION_TYPES.contains(&t))
    }

    /// Name of the related artist, if present and non-empty.
    pub fn artist_name(&self) -> Option<&str> {
        self.artist
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .filter(|name| !name.is_empty())
    }
}

/// Artist embedded in a relation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One hit of the artist search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistSummary {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disambiguation: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub artist_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

/// Artist search response (`/ws/2/artist?query=...`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistSearchResults {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub artists: Vec<ArtistSummary>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Relations are decoded one by one; a relation whose fields have the wrong
/// shape is dropped with a warning instead of failing the whole record.
fn skip_malformed_relations<'de, D>(deserializer: D) -> Result<Vec<Relation>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Vec<serde_json::Value> = null_as_empty(deserializer)?;
    Ok(raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<Relation>(value) {
            Ok(relation) => Some(relation),
            Err(e) => {
                warn!(index, error = %e, "malformed relation, skipping");
                None
            }
        })
        .collect())
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
