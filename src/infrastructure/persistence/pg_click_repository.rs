//! PostgreSQL implementation of the click repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// PostgreSQL repository for click analytics.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ClickRow {
    id: i64,
    link_id: i64,
    ip_address: Option<String>,
    user_agent: Option<String>,
    referer: Option<String>,
    device_type: Option<String>,
    browser: Option<String>,
    os: Option<String>,
    clicked_at: DateTime<Utc>,
}

impl From<ClickRow> for Click {
    fn from(row: ClickRow) -> Self {
        Click {
            id: row.id,
            link_id: row.link_id,
            ip_address: row.ip_address,
            user_agent: row.user_agent,
            referer: row.referer,
            device_type: row.device_type,
            browser: row.browser,
            os: row.os,
            clicked_at: row.clicked_at,
        }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn insert(&self, click: NewClick) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO click_events
                (link_id, ip_address, user_agent, referer, device_type, browser, os)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(click.link_id)
        .bind(&click.ip_address)
        .bind(&click.user_agent)
        .bind(&click.referer)
        .bind(&click.device_type)
        .bind(&click.browser)
        .bind(&click.os)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn list_for_link(&self, link_id: i64, limit: i64) -> Result<Vec<Click>, AppError> {
        let rows = sqlx::query_as::<_, ClickRow>(
            r#"
            SELECT id, link_id, ip_address, user_agent, referer,
                   device_type, browser, os, clicked_at
            FROM click_events
            WHERE link_id = $1
            ORDER BY clicked_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(link_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Click::from).collect())
    }
}
