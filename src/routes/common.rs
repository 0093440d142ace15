//! Liveness and readiness checks, answered in the supplier envelope.

use crate::db;
use crate::response::{ok, success, Envelope};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct HealthStatus {
    database: &'static str,
}

async fn live() -> (StatusCode, Json<Envelope<HealthStatus>>) {
    ok(HealthStatus { database: "unchecked" }, "Service is running")
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Envelope<HealthStatus>>) {
    match db::ping(&state.pool).await {
        Ok(()) => ok(HealthStatus { database: "ok" }, "Service is ready"),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            success(
                StatusCode::SERVICE_UNAVAILABLE,
                HealthStatus { database: "unavailable" },
                "Database is not reachable",
            )
        }
    }
}

/// GET /health answers without touching storage; GET /ready pings it.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(live))
        .route("/ready", get(ready))
        .with_state(state)
}
