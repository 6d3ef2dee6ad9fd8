use crate::server::AppState;
use crate::viewer::use_viewer;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use contexta_observability::CorrelationId;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;

/// Longest artificial delay a request may ask for.
const MAX_DELAY_MS: u64 = 10_000;

#[derive(Debug, Default, Deserialize)]
pub struct DelayQuery {
    pub delay_ms: Option<u64>,
}

impl DelayQuery {
    async fn wait(&self) {
        if let Some(ms) = self.delay_ms {
            tokio::time::sleep(Duration::from_millis(ms.min(MAX_DELAY_MS))).await;
        }
    }
}

/// Routes that read the request's viewer.
pub fn viewer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(greet))
        .route("/whoami", get(whoami))
}

pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_check))
}

async fn greet(State(state): State<AppState>, Query(delay): Query<DelayQuery>) -> String {
    delay.wait().await;
    greeting(&state.guest_name)
}

fn greeting(guest_name: &str) -> String {
    match use_viewer() {
        Some(user) => format!("Hello, {}!", user.name),
        None => format!("Hello, {guest_name}!"),
    }
}

async fn whoami(Query(delay): Query<DelayQuery>) -> Json<Value> {
    delay.wait().await;
    Json(json!({
        "viewer": use_viewer(),
        "correlation_id": CorrelationId::current().map(CorrelationId::into_string),
    }))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "contexta-viewer"
    }))
}
