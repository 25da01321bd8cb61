//! Handler for the liveness endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{API_VERSION, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service liveness with component checks.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// # Response Codes
///
/// - **200 OK**: `{"ok": true, "version": "1.0", ...}`
/// - **503 Service Unavailable**: store unreachable or click queue closed
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let database_ok = state.link_service.ping().await.is_ok();
    let queue_ok = !state.click_sender.is_closed();

    let ok = database_ok && queue_ok;

    let response = HealthResponse {
        ok,
        version: API_VERSION,
        checks: HealthChecks {
            database: check(database_ok),
            click_queue: check(queue_ok),
        },
    };

    if ok {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

fn check(ok: bool) -> &'static str {
    if ok { "ok" } else { "error" }
}
