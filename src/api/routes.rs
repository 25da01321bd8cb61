//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, link_stats_handler, list_links_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Link management routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST   /links`        - Create a short link
/// - `GET    /links`        - List links (paginated, searchable)
/// - `GET    /links/{code}` - Stats for one link incl. click events
/// - `DELETE /links/{code}` - Soft-delete a link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(create_link_handler).get(list_links_handler))
        .route(
            "/links/{code}",
            get(link_stats_handler).delete(delete_link_handler),
        )
}
