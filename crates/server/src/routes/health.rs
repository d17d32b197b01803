use axum::{extract::State, http::StatusCode, Json};
use common::types::{DbHealth, Health};
use tracing::warn;

use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Database reachable", body = crate::openapi::HealthDoc),
        (status = 503, description = "Database unreachable", body = crate::openapi::HealthDoc)
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Health>) {
    let db = match state.probe.ping().await {
        Ok(()) => DbHealth::up(),
        Err(e) => {
            warn!(error = %e, "health_db_down");
            DbHealth::down(e.detail())
        }
    };
    let health = Health::from_db(db);
    let status = if health.is_ok() { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status, Json(health))
}
