//! Click event model for asynchronous click tracking.

/// Request metadata captured by the redirect handler.
///
/// All fields are optional; missing headers are recorded as absent rather
/// than failing the redirect.
#[derive(Debug, Clone, Default)]
pub struct RequestMetadata {
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

/// An in-memory click event passed from the resolver to the background
/// worker via a bounded channel.
///
/// Decouples the redirect response from the analytics write: the handler
/// answers as soon as the resolve-and-increment succeeds, and the worker
/// persists the event (or drops it) on its own schedule.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub link_id: i64,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

impl ClickEvent {
    pub fn new(link_id: i64, meta: RequestMetadata) -> Self {
        Self {
            link_id,
            ip: meta.ip,
            user_agent: meta.user_agent,
            referer: meta.referer,
        }
    }
}
