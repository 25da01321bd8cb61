//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its analytics counter and liveness flags.
///
/// `short_code` and `original_url` are immutable after creation. `clicks` is
/// incremented only by the redirect resolver, atomically in the store.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub clicks: i64,
    pub is_active: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Link {
    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| Utc::now() >= e)
    }

    /// Returns true if the link is eligible for redirects.
    ///
    /// Liveness is one-directional: once a link is deleted or expired it
    /// never becomes live again.
    pub fn is_live(&self) -> bool {
        self.is_active && !self.is_expired()
    }
}

/// Input data for creating a new link.
///
/// `clicks`, `is_active`, and timestamps are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub short_code: String,
    pub original_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Outcome of a successful redirect resolution.
///
/// Produced by the atomic resolve-and-increment statement; carries only what
/// the resolver needs to answer the request and enqueue a click event.
#[derive(Debug, Clone)]
pub struct ResolvedLink {
    pub link_id: i64,
    pub original_url: String,
}
