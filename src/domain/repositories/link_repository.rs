//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink, ResolvedLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// The store's unique index on `short_code` is the authority for the
/// uniqueness invariant; [`LinkRepository::insert`] surfaces violations as
/// [`AppError::Conflict`] so callers can treat collisions uniformly whether
/// they race a pre-check or not.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new short link with `clicks = 0` and `is_active = true`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the short code already exists and
    /// [`AppError::Internal`] on other database errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by short code regardless of liveness.
    ///
    /// Inactive and expired links are still returned; listing and stats stay
    /// visible after deletion.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists links ordered by creation time descending.
    ///
    /// `search` matches a case-insensitive substring against the short code,
    /// original URL, or title. `page` is 1-indexed.
    async fn list(
        &self,
        page: i64,
        limit: i64,
        search: Option<String>,
    ) -> Result<Vec<Link>, AppError>;

    /// Counts links matching the same filter as [`LinkRepository::list`].
    async fn count(&self, search: Option<String>) -> Result<i64, AppError>;

    /// Soft-deletes a link by setting `is_active = false`.
    ///
    /// Returns `Ok(true)` if a live row was deactivated, `Ok(false)` when the
    /// code is unknown or already inactive. The code is never freed for
    /// reuse.
    async fn deactivate(&self, code: &str) -> Result<bool, AppError>;

    /// Atomically resolves a live link and increments its click counter.
    ///
    /// A single statement applies the liveness rules (`is_active`, not past
    /// `expires_at`) and the increment, so concurrent resolves on the same
    /// code are all counted. Returns `Ok(None)` for missing, inactive, or
    /// expired codes alike.
    async fn resolve_active(&self, code: &str) -> Result<Option<ResolvedLink>, AppError>;

    /// Cheap store reachability probe for health checks.
    async fn ping(&self) -> Result<(), AppError>;
}
