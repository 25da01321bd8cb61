#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{Router, extract::ConnectInfo, routing::get};
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use serde_json::json;
use tokio::sync::mpsc;
use tower::Layer;

use linklet::api::handlers::{health_handler, redirect_handler};
use linklet::api::routes::api_routes;
use linklet::domain::click_event::ClickEvent;
use linklet::domain::entities::{Click, Link, NewClick, NewLink, ResolvedLink};
use linklet::domain::repositories::{ClickRepository, LinkRepository};
use linklet::error::AppError;
use linklet::state::AppState;

pub const BASE_URL: &str = "https://s.example.com";

/// In-memory [`LinkRepository`] mirroring the PostgreSQL semantics: unique
/// short codes, newest-first listing, and atomic resolve-and-increment.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    inner: Mutex<LinkTable>,
}

#[derive(Default)]
struct LinkTable {
    rows: Vec<Link>,
    next_id: i64,
}

impl InMemoryLinkRepository {
    /// Inserts a row directly, bypassing registry validation.
    pub fn seed(
        &self,
        code: &str,
        url: &str,
        is_active: bool,
        expires_at: Option<DateTime<Utc>>,
    ) -> i64 {
        let mut table = self.inner.lock().unwrap();
        table.next_id += 1;
        let now = Utc::now();
        let id = table.next_id;
        table.rows.push(Link {
            id,
            short_code: code.to_string(),
            original_url: url.to_string(),
            title: None,
            description: None,
            clicks: 0,
            is_active,
            expires_at,
            created_at: now,
            updated_at: now,
        });
        id
    }

    pub fn get(&self, code: &str) -> Option<Link> {
        self.inner
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|l| l.short_code == code)
            .cloned()
    }
}

fn is_live(link: &Link) -> bool {
    link.is_active && !link.expires_at.is_some_and(|e| Utc::now() >= e)
}

fn matches_search(link: &Link, search: &str) -> bool {
    let needle = search.to_lowercase();
    link.short_code.to_lowercase().contains(&needle)
        || link.original_url.to_lowercase().contains(&needle)
        || link
            .title
            .as_deref()
            .is_some_and(|t| t.to_lowercase().contains(&needle))
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut table = self.inner.lock().unwrap();

        if table
            .rows
            .iter()
            .any(|l| l.short_code == new_link.short_code)
        {
            return Err(AppError::conflict(
                "Short code already exists",
                json!({ "shortCode": new_link.short_code }),
            ));
        }

        table.next_id += 1;
        let now = Utc::now();
        let link = Link {
            id: table.next_id,
            short_code: new_link.short_code,
            original_url: new_link.original_url,
            title: new_link.title,
            description: new_link.description,
            clicks: 0,
            is_active: true,
            expires_at: new_link.expires_at,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.get(code))
    }

    async fn list(
        &self,
        page: i64,
        limit: i64,
        search: Option<String>,
    ) -> Result<Vec<Link>, AppError> {
        let table = self.inner.lock().unwrap();

        let mut rows: Vec<Link> = table
            .rows
            .iter()
            .filter(|l| search.as_deref().is_none_or(|s| matches_search(l, s)))
            .cloned()
            .collect();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

        let offset = page.saturating_sub(1).saturating_mul(limit) as usize;
        Ok(rows.into_iter().skip(offset).take(limit as usize).collect())
    }

    async fn count(&self, search: Option<String>) -> Result<i64, AppError> {
        let table = self.inner.lock().unwrap();

        Ok(table
            .rows
            .iter()
            .filter(|l| search.as_deref().is_none_or(|s| matches_search(l, s)))
            .count() as i64)
    }

    async fn deactivate(&self, code: &str) -> Result<bool, AppError> {
        let mut table = self.inner.lock().unwrap();

        match table
            .rows
            .iter_mut()
            .find(|l| l.short_code == code && l.is_active)
        {
            Some(link) => {
                link.is_active = false;
                link.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn resolve_active(&self, code: &str) -> Result<Option<ResolvedLink>, AppError> {
        let mut table = self.inner.lock().unwrap();

        match table
            .rows
            .iter_mut()
            .find(|l| l.short_code == code && is_live(l))
        {
            Some(link) => {
                link.clicks += 1;
                link.updated_at = Utc::now();
                Ok(Some(ResolvedLink {
                    link_id: link.id,
                    original_url: link.original_url.clone(),
                }))
            }
            None => Ok(None),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// In-memory [`ClickRepository`].
#[derive(Default)]
pub struct InMemoryClickRepository {
    rows: Mutex<Vec<Click>>,
}

impl InMemoryClickRepository {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn all(&self) -> Vec<Click> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClickRepository for InMemoryClickRepository {
    async fn insert(&self, click: NewClick) -> Result<(), AppError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i64 + 1;
        rows.push(Click {
            id,
            link_id: click.link_id,
            ip_address: click.ip_address,
            user_agent: click.user_agent,
            referer: click.referer,
            device_type: click.device_type,
            browser: click.browser,
            os: click.os,
            clicked_at: Utc::now(),
        });
        Ok(())
    }

    async fn list_for_link(&self, link_id: i64, limit: i64) -> Result<Vec<Click>, AppError> {
        let mut rows: Vec<Click> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.link_id == link_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| (b.clicked_at, b.id).cmp(&(a.clicked_at, a.id)));
        rows.truncate(limit as usize);
        Ok(rows)
    }
}

/// Handler test fixture: state wired to in-memory repositories plus the
/// receiving end of the click channel.
pub struct TestContext {
    pub state: AppState,
    pub links: Arc<InMemoryLinkRepository>,
    pub clicks: Arc<InMemoryClickRepository>,
    pub click_rx: mpsc::Receiver<ClickEvent>,
}

pub fn test_context() -> TestContext {
    let links = Arc::new(InMemoryLinkRepository::default());
    let clicks = Arc::new(InMemoryClickRepository::default());
    let (click_tx, click_rx) = mpsc::channel(100);

    let state = AppState::new(
        links.clone(),
        clicks.clone(),
        click_tx,
        BASE_URL.to_string(),
    );

    TestContext {
        state,
        links,
        clicks,
        click_rx,
    }
}

/// Builds a test server over the full route tree.
pub fn test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/healthz", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api_routes())
        .layer(MockConnectInfoLayer)
        .with_state(state);

    TestServer::new(app).unwrap()
}

/// Injects a fixed peer address so `ConnectInfo` extraction works without a
/// real socket.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
