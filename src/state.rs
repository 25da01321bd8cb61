//! Shared application state injected into all handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{LinkService, RedirectService};
use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::{ClickRepository, LinkRepository};

/// Application state handed to every handler.
///
/// Repositories are injected explicitly at construction; there is no global
/// store client. The click sender is kept alongside the services so the
/// health endpoint can observe the queue.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub redirect_service: Arc<RedirectService>,
    pub click_sender: mpsc::Sender<ClickEvent>,
    pub base_url: String,
}

impl AppState {
    pub fn new(
        links: Arc<dyn LinkRepository>,
        clicks: Arc<dyn ClickRepository>,
        click_tx: mpsc::Sender<ClickEvent>,
        base_url: String,
    ) -> Self {
        let link_service = Arc::new(LinkService::new(links.clone(), clicks));
        let redirect_service = Arc::new(RedirectService::new(links, click_tx.clone()));

        Self {
            link_service,
            redirect_service,
            click_sender: click_tx,
            base_url,
        }
    }
}
