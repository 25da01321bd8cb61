//! Repository trait for click event persistence.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for click analytics.
///
/// Writes are issued only by the background click worker; reads serve the
/// per-link stats endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Persists a click event. `clicked_at` is set by the store.
    async fn insert(&self, click: NewClick) -> Result<(), AppError>;

    /// Returns the most recent clicks for a link, newest first.
    async fn list_for_link(&self, link_id: i64, limit: i64) -> Result<Vec<Click>, AppError>;
}
