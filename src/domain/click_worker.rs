//! Background worker persisting click events.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::NewClick;
use crate::domain::repositories::ClickRepository;
use crate::utils::user_agent::parse_user_agent;

/// Drains the click channel and persists events best-effort.
///
/// Each event's User-Agent is parsed into device/browser/OS before insert.
/// A failed insert is logged and the event dropped; the worker never retries
/// and never feeds anything back to the request path. The worker exits when
/// every sender has been dropped.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    clicks: Arc<dyn ClickRepository>,
) {
    while let Some(event) = rx.recv().await {
        let ua = parse_user_agent(event.user_agent.as_deref());

        let click = NewClick {
            link_id: event.link_id,
            ip_address: event.ip,
            user_agent: event.user_agent,
            referer: event.referer,
            device_type: ua.device_type,
            browser: ua.browser,
            os: ua.os,
        };

        if let Err(e) = clicks.insert(click).await {
            warn!(link_id = event.link_id, error = %e, "dropping click event after failed insert");
        }
    }

    debug!("click channel closed, worker exiting");
}
