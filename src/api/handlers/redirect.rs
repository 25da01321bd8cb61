//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;

use crate::domain::click_event::RequestMetadata;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Capture request metadata (peer IP, User-Agent, Referer)
/// 2. Resolve the code: one atomic statement checks liveness and increments
///    the click counter
/// 3. Enqueue a click event for the background worker (fire-and-forget)
/// 4. Return `302 Found` with the original URL
///
/// The response never waits on the analytics write.
///
/// # Errors
///
/// Returns 404 for unknown, deleted, and expired codes alike.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let meta = RequestMetadata {
        ip: Some(addr.ip().to_string()),
        user_agent: headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        referer: headers
            .get(header::REFERER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    };

    let target = state.redirect_service.resolve(&code, meta).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, target)]).into_response())
}
