//! Fake geocoding API server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1, serving `GET /geocoding/v5/{source}/{query}.json`. Responses
//! are scripted per query text; every incoming request line is recorded so
//! harnesses can assert on the exact URIs the dispatcher produced.
//!
//! # Example
//!
//! ```rust,no_run
//! # tokio_test::block_on(async {
//! use common::fake_geocoding_api::FakeGeocodingApi;
//!
//! let api = FakeGeocodingApi::start().await.unwrap();
//! api.respond_with("sf", &[("place.sf", "San Francisco")]).await;
//!
//! // Point your dispatcher's endpoint at api.base_url()
//! let url = api.base_url();
//! # });
//! ```

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use super::builders::features_body;

#[derive(Clone)]
struct Script {
    status: StatusCode,
    body: String,
    delay: Duration,
}

/// State shared between the router and test code.
#[derive(Default)]
struct ApiState {
    /// Scripted responses keyed by decoded query text.
    scripts: HashMap<String, Script>,
    /// Request lines (path + query string) in arrival order.
    requests: Vec<String>,
}

/// Handle to the running fake geocoding API server.
pub struct FakeGeocodingApi {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeGeocodingApi {
    /// Start the server on a random port. Returns once it is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState::default()));

        let app = Router::new()
            .route("/geocoding/v5/{source}/{query}", get(lookup))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the task a moment to register.
        tokio::time::sleep(Duration::from_millis(5)).await;

        Ok(Self { addr, state })
    }

    /// Base URL of the server (e.g. `http://127.0.0.1:PORT`), to be used as
    /// the dispatcher's endpoint.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Script a 200 reply for `query` with the given `(id, place_name)`
    /// features.
    pub async fn respond_with(&self, query: &str, features: &[(&str, &str)]) {
        self.script(query, StatusCode::OK, features_body(features), Duration::ZERO)
            .await;
    }

    /// Like [`respond_with`](Self::respond_with), delayed by `delay_ms` —
    /// used to force out-of-order completion of overlapping lookups.
    pub async fn respond_after(&self, query: &str, features: &[(&str, &str)], delay_ms: u64) {
        self.script(
            query,
            StatusCode::OK,
            features_body(features),
            Duration::from_millis(delay_ms),
        )
        .await;
    }

    /// Script a bare status-code reply for `query`.
    pub async fn respond_status(&self, query: &str, status: u16) {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.script(query, status, String::new(), Duration::ZERO).await;
    }

    /// Script a 200 reply with a verbatim body — for malformed-payload tests.
    pub async fn respond_raw(&self, query: &str, body: &str) {
        self.script(query, StatusCode::OK, body.to_string(), Duration::ZERO)
            .await;
    }

    async fn script(&self, query: &str, status: StatusCode, body: String, delay: Duration) {
        let mut state = self.state.lock().await;
        state
            .scripts
            .insert(query.to_string(), Script { status, body, delay });
    }

    /// Request lines (path + query string) received so far, in order.
    pub async fn requests(&self) -> Vec<String> {
        self.state.lock().await.requests.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.state.lock().await.requests.len()
    }
}

// ---------------------------------------------------------------------------
// Route handler
// ---------------------------------------------------------------------------

async fn lookup(
    Path((_source, query)): Path<(String, String)>,
    uri: Uri,
    State(state): State<Arc<Mutex<ApiState>>>,
) -> impl IntoResponse {
    // Path params arrive percent-decoded; the script key is the query text
    // without the ".json" suffix.
    let stem = query.strip_suffix(".json").unwrap_or(&query).to_string();

    let script = {
        let mut state = state.lock().await;
        state.requests.push(uri.to_string());
        state.scripts.get(&stem).cloned()
    };

    match script {
        Some(script) => {
            if !script.delay.is_zero() {
                tokio::time::sleep(script.delay).await;
            }
            (script.status, script.body)
        }
        // Unscripted queries resolve to an empty feature list.
        None => (StatusCode::OK, r#"{"features": []}"#.to_string()),
    }
}
