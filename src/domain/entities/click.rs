//! Click entity representing a recorded redirect.

use chrono::{DateTime, Utc};

/// A persisted click on a shortened link.
///
/// Created at most once per successful redirect resolution and never mutated
/// or deleted individually. Deleting a link cascades deletion of its clicks.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub device_type: Option<String>,
    pub browser: Option<String>,
    pub os: Option<String>,
    pub clicked_at: DateTime<Utc>,
}

/// Input data for persisting a click.
///
/// `ip_address`, `user_agent`, and `referer` are captured verbatim from the
/// request; `device_type`, `browser`, and `os` are derived from the
/// User-Agent by the click worker. `clicked_at` is set by the store.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub link_id: i64,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub device_type: Option<String>,
    pub browser: Option<String>,
    pub os: Option<String>,
}
