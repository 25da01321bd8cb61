//! Redirect resolver service: liveness rules, atomic counting, and
//! fire-and-forget click dispatch.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::mpsc;
use tracing::warn;

use crate::domain::click_event::{ClickEvent, RequestMetadata};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Service resolving inbound short codes to redirect targets.
///
/// Depends on the registry's stored invariants but not on its code: the only
/// shared state is the store itself.
pub struct RedirectService {
    links: Arc<dyn LinkRepository>,
    click_tx: mpsc::Sender<ClickEvent>,
}

impl RedirectService {
    pub fn new(links: Arc<dyn LinkRepository>, click_tx: mpsc::Sender<ClickEvent>) -> Self {
        Self { links, click_tx }
    }

    /// Resolves a short code to its redirect target.
    ///
    /// Missing, deleted, and expired codes all produce the same
    /// [`AppError::NotFound`] so the response leaks nothing about which
    /// condition applied. On success the click counter has already been
    /// incremented atomically in the store, and a [`ClickEvent`] is enqueued
    /// with `try_send`: a full or closed queue drops the event with a log
    /// line and the redirect is unaffected.
    pub async fn resolve(
        &self,
        code: &str,
        meta: RequestMetadata,
    ) -> Result<String, AppError> {
        let hit = self.links.resolve_active(code).await?.ok_or_else(|| {
            AppError::not_found("Short link not found", json!({ "shortCode": code }))
        })?;

        let event = ClickEvent::new(hit.link_id, meta);
        if let Err(e) = self.click_tx.try_send(event) {
            warn!(short_code = code, error = %e, "dropping click event, queue unavailable");
        }

        Ok(hit.original_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ResolvedLink;
    use crate::domain::repositories::link_repository::MockLinkRepository;

    fn metadata() -> RequestMetadata {
        RequestMetadata {
            ip: Some("10.0.0.1".to_string()),
            user_agent: Some("Mozilla/5.0".to_string()),
            referer: Some("https://referrer.example".to_string()),
        }
    }

    #[tokio::test]
    async fn test_resolve_returns_target_and_enqueues_click() {
        let mut links = MockLinkRepository::new();
        links
            .expect_resolve_active()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| {
                Ok(Some(ResolvedLink {
                    link_id: 42,
                    original_url: "https://example.com".to_string(),
                }))
            });

        let (tx, mut rx) = mpsc::channel(8);
        let service = RedirectService::new(Arc::new(links), tx);

        let target = service.resolve("abc123", metadata()).await.unwrap();
        assert_eq!(target, "https://example.com");

        let event = rx.try_recv().unwrap();
        assert_eq!(event.link_id, 42);
        assert_eq!(event.ip.as_deref(), Some("10.0.0.1"));
        assert_eq!(event.referer.as_deref(), Some("https://referrer.example"));
    }

    #[tokio::test]
    async fn test_resolve_unknown_code_sends_nothing() {
        let mut links = MockLinkRepository::new();
        links.expect_resolve_active().times(1).returning(|_| Ok(None));

        let (tx, mut rx) = mpsc::channel(8);
        let service = RedirectService::new(Arc::new(links), tx);

        let err = service.resolve("nosuch", metadata()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_resolve_succeeds_when_queue_is_full() {
        let mut links = MockLinkRepository::new();
        links.expect_resolve_active().times(1).returning(|_| {
            Ok(Some(ResolvedLink {
                link_id: 1,
                original_url: "https://example.com".to_string(),
            }))
        });

        let (tx, _rx) = mpsc::channel(1);
        tx.try_send(ClickEvent::new(0, RequestMetadata::default()))
            .unwrap();

        let service = RedirectService::new(Arc::new(links), tx);
        let target = service.resolve("abc123", metadata()).await.unwrap();

        assert_eq!(target, "https://example.com");
    }
}
