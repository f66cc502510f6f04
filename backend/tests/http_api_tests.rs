//! End-to-end tests of the REST API over an in-memory catalog.

mod support;

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use serde_json::Value;
use tower::ServiceExt;

use band_gantt::config::AppConfig;
use band_gantt::http::{create_router, AppState};
use band_gantt::metadata::{LocalSource, MusicBrainzSource};
use band_gantt::models::{BandInfo, FixedClock};
use band_gantt::services::palette::BASE_PALETTE;
use support::{
    beatles_json, pavement_json, solo_json, StubCatalog, BEATLES_ID, PAVEMENT_ID, SOLO_ID,
};

fn local_source() -> LocalSource {
    let source = LocalSource::new();
    for json in [beatles_json(), pavement_json(), solo_json()] {
        let band: BandInfo = serde_json::from_value(json).unwrap();
        let id = band.id.as_deref().unwrap().parse().unwrap();
        source.insert(id, band);
    }
    source
}

fn app_with(config: &AppConfig) -> Router {
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap());
    let state = AppState::from_config(Arc::new(local_source()), config).with_clock(Arc::new(clock));
    create_router(state)
}

fn app() -> Router {
    app_with(&AppConfig::default())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get_json(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["source"], "local: connected");
}

#[tokio::test]
async fn test_ended_band_chart() {
    let (status, body) = get_json(app(), &format!("/v1/bands/{}/chart", BEATLES_ID)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "chart");
    assert_eq!(body["title"], "The Beatles");
    assert_eq!(body["span"]["begin"], "1960");
    assert_eq!(body["span"]["end"], "1970-04-10");

    let tasks = body["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 4, "producer relation must be dropped");

    assert_eq!(tasks[0]["Task"], "John Lennon");
    assert_eq!(tasks[0]["Start"], "1960");
    assert_eq!(tasks[0]["Finish"], "1970-04-10");
    assert_eq!(tasks[0]["Resource"], "John Lennon");

    assert_eq!(tasks[1]["Start"], "1958");
    assert_eq!(tasks[1]["Finish"], "1970-04-10");

    assert_eq!(tasks[2]["Start"], "1960-08");
    assert_eq!(tasks[2]["Finish"], "1962-08-16");

    assert_eq!(tasks[3]["Task"], "Billy Preston");

    let colors = body["colors"].as_array().unwrap();
    assert_eq!(colors.len(), 4);
    assert_eq!(colors[0]["resource"], "John Lennon");
    assert_eq!(colors[0]["color"], BASE_PALETTE[11]);
    assert_eq!(colors[3]["color"], BASE_PALETTE[8]);
}

#[tokio::test]
async fn test_active_band_finishes_at_clock_time() {
    let (status, body) = get_json(app(), &format!("/v1/bands/{}/chart", PAVEMENT_ID)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["span"]["end"], "2024-01-15 09:30:00");
    assert_eq!(body["tasks"][0]["Start"], "1989");
    assert_eq!(body["tasks"][0]["Finish"], "2024-01-15 09:30:00");
}

#[tokio::test]
async fn test_band_without_members_is_no_data() {
    let (status, body) = get_json(app(), &format!("/v1/bands/{}/chart", SOLO_ID)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "no_data");
    assert_eq!(body["title"], "Solo Artist");
    assert_eq!(body["message"], "No band member information available.");
}

#[tokio::test]
async fn test_malformed_relation_does_not_fail_chart() {
    let mut record = pavement_json();
    record["relations"]
        .as_array_mut()
        .unwrap()
        .push(serde_json::json!({
            "type": "member of band",
            "artist": {"name": "Bob Nastanovich"},
            "begin": 1991
        }));
    let band: BandInfo = serde_json::from_value(record).unwrap();

    let source = LocalSource::new();
    source.insert(PAVEMENT_ID.parse().unwrap(), band);
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap());
    let state = AppState::new(Arc::new(source)).with_clock(Arc::new(clock));

    let (status, body) = get_json(
        create_router(state),
        &format!("/v1/bands/{}/chart", PAVEMENT_ID),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "chart");
    assert_eq!(body["tasks"].as_array().unwrap().len(), 1);
    assert_eq!(body["tasks"][0]["Task"], "Stephen Malkmus");
}

#[tokio::test]
async fn test_unknown_band_is_404() {
    let (status, body) = get_json(
        app(),
        "/v1/bands/c1d4f2ba-cf39-460c-9528-6b827d3417a1/chart",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_invalid_artist_id_is_400() {
    let (status, body) = get_json(app(), "/v1/bands/not-a-uuid/chart").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_cyclic_palette_from_config() {
    let mut config = AppConfig::default();
    config.palette.policy = "cyclic".parse().unwrap();
    let (_, body) = get_json(app_with(&config), &format!("/v1/bands/{}/chart", BEATLES_ID)).await;
    assert_eq!(body["colors"][0]["color"], BASE_PALETTE[0]);
    assert_eq!(body["colors"][1]["color"], BASE_PALETTE[1]);
}

#[tokio::test]
async fn test_short_search_returns_nothing() {
    for uri in ["/v1/search", "/v1/search?q=", "/v1/search?q=th", "/v1/search?q=%20%20th%20"] {
        let (status, body) = get_json(app(), uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body["total"], 0, "{}", uri);
        assert!(body["results"].as_array().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_search_returns_ids_usable_for_charts() {
    let (status, body) = get_json(app(), "/v1/search?q=pav").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query"], "pav");
    assert_eq!(body["total"], 1);
    let id = body["results"][0]["id"].as_str().unwrap().to_string();
    assert_eq!(id, PAVEMENT_ID);

    let (status, chart) = get_json(app(), &format!("/v1/bands/{}/chart", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(chart["title"], "Pavement");
}

#[tokio::test]
async fn test_min_query_len_from_config() {
    let mut config = AppConfig::default();
    config.search.min_query_len = 3;
    let (_, body) = get_json(app_with(&config), "/v1/search?q=pav").await;
    assert_eq!(body["total"], 0);
    let (_, body) = get_json(app_with(&config), "/v1/search?q=pave").await;
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_featured_chart_uses_configured_bands() {
    let mut config = AppConfig::default();
    config.featured.band_ids = vec![PAVEMENT_ID.to_string(), "garbage".to_string()];
    let (status, body) = get_json(app_with(&config), "/v1/bands/featured/chart").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Pavement");
}

#[tokio::test]
async fn test_featured_chart_without_candidates() {
    let mut config = AppConfig::default();
    config.featured.band_ids = vec![];
    let (status, _) = get_json(app_with(&config), "/v1/bands/featured/chart").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upstream_failure_is_502() {
    let stub = StubCatalog::failing(StatusCode::SERVICE_UNAVAILABLE).await;
    let mut config = AppConfig::default();
    config.musicbrainz.base_url = stub.base_url.clone();
    let source = MusicBrainzSource::new(&config.musicbrainz).unwrap();
    let app = create_router(AppState::from_config(Arc::new(source), &config));

    let (status, body) = get_json(app, &format!("/v1/bands/{}/chart", BEATLES_ID)).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "UPSTREAM_ERROR");
}
