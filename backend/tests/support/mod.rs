//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

// Environment variables are process-global; tests touching them take this lock.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Sets and removes environment variables, restoring them on drop.
pub struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    pub fn new() -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Self {
            saved: Vec::new(),
            _lock: lock,
        }
    }

    pub fn set(mut self, key: &str, value: &str) -> Self {
        self.save(key);
        std::env::set_var(key, value);
        self
    }

    pub fn remove(mut self, key: &str) -> Self {
        self.save(key);
        std::env::remove_var(key);
        self
    }

    fn save(&mut self, key: &str) {
        if !self.saved.iter().any(|(k, _)| k == key) {
            self.saved.push((key.to_string(), std::env::var(key).ok()));
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..) {
            match value {
                Some(value) => std::env::set_var(&key, value),
                None => std::env::remove_var(&key),
            }
        }
    }
}

pub const BEATLES_ID: &str = "b10bbbfc-cf9e-42e0-be17-e2c3e1d2600d";
pub const PAVEMENT_ID: &str = "36bfa85f-737b-41db-a8fc-b8825850ffc3";
pub const SOLO_ID: &str = "a74b1b7f-71a5-4011-9441-d0b5e4122711";

/// MusicBrainz lookup record for the four-piece with one repeat tenure.
pub fn beatles_json() -> Value {
    json!({
        "id": BEATLES_ID,
        "name": "The Beatles",
        "type": "Group",
        "life-span": {"begin": "1960", "end": "1970-04-10", "ended": true},
        "relations": [
            {"type": "member of band", "direction": "backward",
             "artist": {"id": "ba550d0e-adac-4864-b88b-407cab5e76af", "name": "John Lennon"},
             "begin": null, "end": null},
            {"type": "member of band", "direction": "backward",
             "artist": {"id": "42a8f507-8412-4611-854f-926571049fa0", "name": "George Harrison"},
             "begin": "1958", "end": null},
            {"type": "member of band", "direction": "backward",
             "artist": {"id": "0d4ab0f9-bbda-4ab1-ae2c-f772ffcfbea9", "name": "Pete Best"},
             "begin": "1960-08", "end": "1962-08-16"},
            {"type": "instrumental supporting musician", "direction": "backward",
             "artist": {"id": "1f1a2ea8-0bcb-4e48-8c8e-4a2d1b5e7f00", "name": "Billy Preston"},
             "begin": "1969-01", "end": "1969-01"},
            {"type": "producer", "direction": "backward",
             "artist": {"id": "2b1a2ea8-0bcb-4e48-8c8e-4a2d1b5e7f00", "name": "George Martin"},
             "begin": "1962", "end": "1970"}
        ]
    })
}

/// Still-active band with one member and no end date.
pub fn pavement_json() -> Value {
    json!({
        "id": PAVEMENT_ID,
        "name": "Pavement",
        "life-span": {"begin": "1989", "end": null, "ended": false},
        "relations": [
            {"type": "member of band",
             "artist": {"id": "f3b1c1c4-1cd3-4e5a-a1a5-2f5f0e2c8b5d", "name": "Stephen Malkmus"},
             "begin": "1989", "end": null}
        ]
    })
}

/// Artist with relations but no memberships.
pub fn solo_json() -> Value {
    json!({
        "id": SOLO_ID,
        "name": "Solo Artist",
        "life-span": {"begin": "1970", "ended": false},
        "relations": [
            {"type": "is person", "artist": {"name": "Legal Name"}}
        ]
    })
}

/// Requests seen by the stub catalog.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub path: String,
    pub query: HashMap<String, String>,
    pub user_agent: Option<String>,
}

#[derive(Clone)]
struct StubState {
    bands: Arc<HashMap<String, Value>>,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
    fail_status: Option<StatusCode>,
}

/// A local stand-in for the MusicBrainz `/ws/2` API.
pub struct StubCatalog {
    pub base_url: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl StubCatalog {
    /// Serve `bands` on an ephemeral port.
    pub async fn start(bands: Vec<Value>) -> Self {
        Self::start_with(bands, None).await
    }

    /// Serve a catalog that answers every request with `status`.
    pub async fn failing(status: StatusCode) -> Self {
        Self::start_with(vec![], Some(status)).await
    }

    async fn start_with(bands: Vec<Value>, fail_status: Option<StatusCode>) -> Self {
        let bands = bands
            .into_iter()
            .map(|band| (band["id"].as_str().unwrap_or_default().to_string(), band))
            .collect();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            bands: Arc::new(bands),
            seen: seen.clone(),
            fail_status,
        };

        let app = Router::new()
            .route("/ws/2/artist", get(stub_search))
            .route("/ws/2/artist/{id}", get(stub_lookup))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            seen,
        }
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}

fn record(state: &StubState, path: String, query: HashMap<String, String>, headers: &HeaderMap) {
    let user_agent = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.seen.lock().unwrap().push(SeenRequest {
        path,
        query,
        user_agent,
    });
}

async fn stub_search(
    State(state): State<StubState>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> axum::response::Response {
    record(&state, "/ws/2/artist".to_string(), query.clone(), &headers);
    if let Some(status) = state.fail_status {
        return (status, "upstream unavailable").into_response();
    }

    let needle = query
        .get("query")
        .map(|q| q.trim_end_matches('*').to_lowercase())
        .unwrap_or_default();
    let limit: usize = query.get("limit").and_then(|l| l.parse().ok()).unwrap_or(25);

    let mut artists: Vec<Value> = state
        .bands
        .values()
        .filter(|band| {
            band["name"]
                .as_str()
                .map(|name| name.to_lowercase().starts_with(&needle))
                .unwrap_or(false)
        })
        .map(|band| json!({"id": band["id"], "name": band["name"], "score": 100}))
        .collect();
    artists.sort_by(|a, b| a["name"].as_str().cmp(&b["name"].as_str()));
    artists.truncate(limit);

    Json(json!({"count": artists.len(), "offset": 0, "artists": artists})).into_response()
}

async fn stub_lookup(
    State(state): State<StubState>,
    Path(id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> axum::response::Response {
    record(&state, format!("/ws/2/artist/{}", id), query, &headers);
    if let Some(status) = state.fail_status {
        return (status, "upstream unavailable").into_response();
    }

    match state.bands.get(&id) {
        Some(band) => Json(band.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({"error": "Not Found"}))).into_response(),
    }
}
