//! DTOs for link creation, listing, and deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::pagination::PaginationMeta;
use crate::application::services::link_service::{CreateLink, LinkPage};
use crate::domain::entities::Link;

/// Request body for `POST /api/links`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    #[validate(length(min = 1))]
    pub original_url: String,

    pub short_code: Option<String>,

    #[validate(length(max = 255))]
    pub title: Option<String>,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    pub expires_at: Option<DateTime<Utc>>,
}

impl From<CreateLinkRequest> for CreateLink {
    fn from(req: CreateLinkRequest) -> Self {
        CreateLink {
            original_url: req.original_url,
            short_code: req.short_code,
            title: req.title,
            description: req.description,
            expires_at: req.expires_at,
        }
    }
}

/// JSON representation of a link.
///
/// `short_url` is computed from the configured base URL at response time; it
/// is never persisted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: i64,
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub clicks: i64,
    pub is_active: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LinkResponse {
    pub fn from_link(link: Link, base_url: &str) -> Self {
        let short_url = format!("{}/{}", base_url.trim_end_matches('/'), link.short_code);

        Self {
            id: link.id,
            short_code: link.short_code,
            short_url,
            original_url: link.original_url,
            title: link.title,
            description: link.description,
            clicks: link.clicks,
            is_active: link.is_active,
            expires_at: link.expires_at,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}

/// Response body for `GET /api/links`.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub links: Vec<LinkResponse>,
    pub pagination: PaginationMeta,
}

impl LinkListResponse {
    pub fn from_page(page: LinkPage, base_url: &str) -> Self {
        Self {
            pagination: PaginationMeta {
                page: page.page,
                limit: page.limit,
                total: page.total,
                pages: page.pages,
            },
            links: page
                .links
                .into_iter()
                .map(|link| LinkResponse::from_link(link, base_url))
                .collect(),
        }
    }
}

/// Response body for `DELETE /api/links/{code}`.
#[derive(Debug, Serialize)]
pub struct DeleteLinkResponse {
    pub success: bool,
    pub message: String,
}
