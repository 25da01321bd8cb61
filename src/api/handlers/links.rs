//! Handlers for link management endpoints (create, list, stats, delete).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::links::{
    CreateLinkRequest, DeleteLinkResponse, LinkListResponse, LinkResponse,
};
use crate::api::dto::pagination::ListQueryParams;
use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "originalUrl": "https://example.com",
///   "shortCode": "promo24",                 // optional, 6-8 alphanumeric
///   "title": "Example",                     // optional
///   "description": "Landing page",          // optional
///   "expiresAt": "2027-01-01T00:00:00Z"     // optional
/// }
/// ```
///
/// # Errors
///
/// - 400 for a non-http(s) URL or malformed custom code
/// - 409 when the custom code is already taken
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let link = state.link_service.create_link(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(LinkResponse::from_link(link, &state.base_url)),
    ))
}

/// Lists links newest-first with pagination and optional search.
///
/// # Endpoint
///
/// `GET /api/links?page=1&limit=10&search=example`
///
/// Out-of-range `page`/`limit` values are clamped, never rejected. `search`
/// matches a case-insensitive substring of the short code, original URL, or
/// title.
pub async fn list_links_handler(
    State(state): State<AppState>,
    Query(params): Query<ListQueryParams>,
) -> Result<Json<LinkListResponse>, AppError> {
    let page = state
        .link_service
        .list_links(params.page, params.limit, params.search)
        .await?;

    Ok(Json(LinkListResponse::from_page(page, &state.base_url)))
}

/// Returns a link and its recent click events.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// Stats remain visible for deleted and expired links; only the redirect
/// path hides them.
///
/// # Errors
///
/// Returns 404 when the short code was never created.
pub async fn link_stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.link_service.get_stats(&code).await?;

    Ok(Json(StatsResponse::from_stats(stats, &state.base_url)))
}

/// Soft-deletes a short link.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// The row is kept (its code stays permanently taken) but all subsequent
/// redirects for the code answer 404. There is no restore operation.
///
/// # Errors
///
/// Returns 404 when the code is unknown or already deleted.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteLinkResponse>, AppError> {
    state.link_service.delete_link(&code).await?;

    Ok(Json(DeleteLinkResponse {
        success: true,
        message: "Link deleted".to_string(),
    }))
}
