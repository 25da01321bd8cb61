//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink, ResolvedLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for link storage and retrieval.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    short_code: String,
    original_url: String,
    title: Option<String>,
    description: Option<String>,
    clicks: i64,
    is_active: bool,
    expires_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link {
            id: row.id,
            short_code: row.short_code,
            original_url: row.original_url,
            title: row.title,
            description: row.description,
            clicks: row.clicks,
            is_active: row.is_active,
            expires_at: row.expires_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ResolvedRow {
    id: i64,
    original_url: String,
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (short_code, original_url, title, description, expires_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, short_code, original_url, title, description,
                      clicks, is_active, expires_at, created_at, updated_at
            "#,
        )
        .bind(&new_link.short_code)
        .bind(&new_link.original_url)
        .bind(&new_link.title)
        .bind(&new_link.description)
        .bind(new_link.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, short_code, original_url, title, description,
                   clicks, is_active, expires_at, created_at, updated_at
            FROM links
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn list(
        &self,
        page: i64,
        limit: i64,
        search: Option<String>,
    ) -> Result<Vec<Link>, AppError> {
        let pattern = search.map(|s| format!("%{s}%"));
        // saturate so an absurd page number yields an empty page, not an
        // overflow or a negative OFFSET
        let offset = page.saturating_sub(1).saturating_mul(limit);

        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, short_code, original_url, title, description,
                   clicks, is_active, expires_at, created_at, updated_at
            FROM links
            WHERE $1::text IS NULL
               OR short_code ILIKE $1
               OR original_url ILIKE $1
               OR title ILIKE $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(&pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn count(&self, search: Option<String>) -> Result<i64, AppError> {
        let pattern = search.map(|s| format!("%{s}%"));

        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM links
            WHERE $1::text IS NULL
               OR short_code ILIKE $1
               OR original_url ILIKE $1
               OR title ILIKE $1
            "#,
        )
        .bind(&pattern)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn deactivate(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE links
            SET is_active = FALSE, updated_at = now()
            WHERE short_code = $1 AND is_active
            "#,
        )
        .bind(code)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn resolve_active(&self, code: &str) -> Result<Option<ResolvedLink>, AppError> {
        // Liveness check and counter increment in one statement: concurrent
        // resolves on the same code serialize on the row, none are lost.
        let row = sqlx::query_as::<_, ResolvedRow>(
            r#"
            UPDATE links
            SET clicks = clicks + 1, updated_at = now()
            WHERE short_code = $1
              AND is_active
              AND (expires_at IS NULL OR expires_at > now())
            RETURNING id, original_url
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| ResolvedLink {
            link_id: r.id,
            original_url: r.original_url,
        }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
