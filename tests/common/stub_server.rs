//! Stub profile backend served by `axum`.
//!
//! Serves canned responses by exact request path and records every path it
//! was asked for. Unknown paths answer 404.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use tokio::net::TcpListener;

#[derive(Clone)]
pub struct StubRoute {
    pub path: String,
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl StubRoute {
    pub fn json(path: &str, body: &serde_json::Value) -> Self {
        Self::raw(path, 200, &body.to_string())
    }

    pub fn raw(path: &str, status: u16, body: &str) -> Self {
        StubRoute {
            path: path.to_string(),
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

struct StubState {
    routes: HashMap<String, StubRoute>,
    requests: Mutex<Vec<String>>,
}

pub struct StubServer {
    pub base_url: String,
    state: Arc<StubState>,
}

impl StubServer {
    pub async fn start(routes: Vec<StubRoute>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub server");
        let addr = listener.local_addr().expect("Stub server has no address");

        let state = Arc::new(StubState {
            routes: routes
                .into_iter()
                .map(|route| (route.path.clone(), route))
                .collect(),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .fallback(respond)
            .with_state(Arc::clone(&state));
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        StubServer {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// Request paths seen so far, in arrival order
    pub fn requests(&self) -> Vec<String> {
        self.state
            .requests
            .lock()
            .expect("Request log poisoned")
            .clone()
    }
}

/// Paths are matched still percent-encoded, as the client sent them
async fn respond(State(state): State<Arc<StubState>>, uri: Uri) -> Response {
    let path = uri.path().to_string();
    state
        .requests
        .lock()
        .expect("Request log poisoned")
        .push(path.clone());

    let Some(route) = state.routes.get(&path) else {
        return (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            r#"{"detail":"Not Found"}"#,
        )
            .into_response();
    };

    if !route.delay.is_zero() {
        tokio::time::sleep(route.delay).await;
    }

    let status = StatusCode::from_u16(route.status).expect("Invalid stub status");
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        route.body.clone(),
    )
        .into_response()
}
