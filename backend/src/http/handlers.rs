//! HTTP handlers for the REST API.
//!
//! Each handler fetches from the metadata source and delegates the
//! transformation to the service layer.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::info;

use super::dto::{BandChartResponse, HealthResponse, SearchQuery, SearchResponse};
use super::error::AppError;
use super::state::AppState;
use crate::models::ArtistId;
use crate::services::{self, NO_DATA_MESSAGE};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the catalog is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let source_status = match state.source.health_check().await {
        Ok(true) => format!("{}: connected", state.source.name()),
        Ok(false) => format!("{}: unreachable", state.source.name()),
        Err(e) => format!("{}: error: {}", state.source.name(), e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        source: source_status,
    }))
}

// =============================================================================
// Search
// =============================================================================

/// GET /v1/search?q=...
///
/// Search artists by name. Short or missing queries return no results
/// without contacting the catalog.
pub async fn search_artists(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> HandlerResult<SearchResponse> {
    let query = query.q.unwrap_or_default().trim().to_string();

    if query.chars().count() <= state.min_query_len {
        return Ok(Json(SearchResponse {
            query,
            results: vec![],
            total: 0,
        }));
    }

    let results = state
        .source
        .search_artists(&query, state.search_limit)
        .await?;
    let total = results.len();

    Ok(Json(SearchResponse {
        query,
        results,
        total,
    }))
}

// =============================================================================
// Band Charts
// =============================================================================

/// GET /v1/bands/{artist_id}/chart
///
/// Membership timeline and member colors for one band.
pub async fn get_band_chart(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
) -> HandlerResult<BandChartResponse> {
    let artist_id: ArtistId = artist_id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid artist id: {}", artist_id)))?;

    band_chart(&state, artist_id).await.map(Json)
}

/// GET /v1/bands/featured/chart
///
/// Chart of a randomly chosen example band.
pub async fn get_featured_chart(State(state): State<AppState>) -> HandlerResult<BandChartResponse> {
    let artist_id = services::pick_featured(&state.featured)
        .ok_or_else(|| AppError::NotFound("No featured bands configured".to_string()))?;

    band_chart(&state, artist_id).await.map(Json)
}

async fn band_chart(state: &AppState, artist_id: ArtistId) -> Result<BandChartResponse, AppError> {
    let band = state.source.fetch_band(artist_id).await?;
    let now = state.clock.now();

    match services::build_chart(&band, now, state.palette_policy) {
        Some(chart) => {
            info!(
                band = %chart.title,
                members = chart.member_count(),
                tasks = chart.tasks.len(),
                "chart built"
            );
            Ok(BandChartResponse::Chart(chart))
        }
        None => {
            info!(band = %band.name, "no membership data");
            Ok(BandChartResponse::NoData {
                band_id: artist_id.to_string(),
                title: band.name,
                message: NO_DATA_MESSAGE.to_string(),
            })
        }
    }
}
