//! DTOs for the health endpoint.

use serde::Serialize;

/// API contract version reported by `/healthz`.
pub const API_VERSION: &str = "1.0";

/// Liveness response with per-component checks.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub ok: bool,
    pub version: &'static str,
    pub checks: HealthChecks,
}

/// Component check results, `"ok"` or `"error"`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthChecks {
    pub database: &'static str,
    pub click_queue: &'static str,
}
