use axum::{extract::State, Json};
use chrono::Utc;

use crate::{server::AppState, types::HealthResponse};

/// Report server health and the number of open sessions
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse),
    ),
    tag = "System"
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        active_sessions: state.sessions.len(),
        timestamp: Utc::now(),
    })
}
