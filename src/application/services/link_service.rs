//! Link registry service: creation, lookup, listing, deletion.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::{Click, Link, NewLink};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;
use crate::utils::code_generator::{
    ATTEMPTS_PER_LENGTH, CODE_LENGTHS, generate_code, validate_custom_code,
};
use crate::utils::url_validator::validate_original_url;

/// Default page size for listings.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Upper bound for page size; out-of-range values clamp here.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Click events returned with per-link stats, newest first.
const RECENT_CLICKS_LIMIT: i64 = 100;

/// Input for creating a short link.
#[derive(Debug, Clone)]
pub struct CreateLink {
    pub original_url: String,
    pub short_code: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// One page of links plus pagination metadata.
#[derive(Debug)]
pub struct LinkPage {
    pub links: Vec<Link>,
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub pages: i64,
}

/// A link together with its recent click events.
#[derive(Debug)]
pub struct LinkStats {
    pub link: Link,
    pub events: Vec<Click>,
}

/// Service owning the link registry invariants: code format, code
/// uniqueness, and URL validity.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
    clicks: Arc<dyn ClickRepository>,
}

impl LinkService {
    pub fn new(links: Arc<dyn LinkRepository>, clicks: Arc<dyn ClickRepository>) -> Self {
        Self { links, clicks }
    }

    /// Creates a short link.
    ///
    /// With a custom code, an advisory existence check answers the common
    /// case early; the insert itself still maps a unique violation to
    /// [`AppError::Conflict`], so a concurrent create racing past the check
    /// loses cleanly. Without one, a random code is allocated with a bounded
    /// retry budget (see [`Self::create_with_generated_code`]).
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] for a non-http(s) URL or malformed code
    /// - [`AppError::Conflict`] when the custom code is taken
    /// - [`AppError::Internal`] when the retry budget is exhausted
    pub async fn create_link(&self, input: CreateLink) -> Result<Link, AppError> {
        validate_original_url(&input.original_url)?;

        if let Some(code) = input.short_code.clone() {
            validate_custom_code(&code)?;

            if self.links.find_by_code(&code).await?.is_some() {
                return Err(AppError::conflict(
                    "Short code already exists",
                    json!({ "shortCode": code }),
                ));
            }

            return self
                .links
                .insert(NewLink {
                    short_code: code,
                    original_url: input.original_url,
                    title: input.title,
                    description: input.description,
                    expires_at: input.expires_at,
                })
                .await;
        }

        self.create_with_generated_code(input).await
    }

    /// Retrieves a link and its recent clicks by short code.
    ///
    /// Inactive and expired links are returned with full stats; only the
    /// redirect path hides them.
    pub async fn get_stats(&self, code: &str) -> Result<LinkStats, AppError> {
        let link = self
            .links
            .find_by_code(code)
            .await?
            .ok_or_else(|| link_not_found(code))?;

        let events = self.clicks.list_for_link(link.id, RECENT_CLICKS_LIMIT).await?;

        Ok(LinkStats { link, events })
    }

    /// Lists links newest-first with pagination and optional search.
    ///
    /// `page` below 1 clamps to 1; `limit` outside `[1, MAX_PAGE_LIMIT]`
    /// clamps to [`MAX_PAGE_LIMIT`]. Out-of-range values are never an error.
    pub async fn list_links(
        &self,
        page: Option<i64>,
        limit: Option<i64>,
        search: Option<String>,
    ) -> Result<LinkPage, AppError> {
        let page = page.unwrap_or(1).max(1);

        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT);
        let limit = if (1..=MAX_PAGE_LIMIT).contains(&limit) {
            limit
        } else {
            MAX_PAGE_LIMIT
        };

        let total = self.links.count(search.clone()).await?;
        let links = self.links.list(page, limit, search).await?;

        // ceiling division; limit is clamped to >= 1 above
        let pages = (total + limit - 1) / limit;

        Ok(LinkPage {
            links,
            page,
            limit,
            total,
            pages,
        })
    }

    /// Soft-deletes a link; the code stays taken and the redirect path
    /// answers 404 from here on.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the code is unknown or already
    /// deleted.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if self.links.deactivate(code).await? {
            Ok(())
        } else {
            Err(link_not_found(code))
        }
    }

    /// Store reachability probe for the health endpoint.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.links.ping().await
    }

    /// Allocates a generated code with a bounded, escalating retry budget.
    ///
    /// Three insert attempts per length, lengths 6 then 7 then 8. Each
    /// collision surfaces as a unique violation from the store and consumes
    /// one attempt; any other error aborts immediately. Exhausting the
    /// budget yields [`AppError::Internal`] rather than looping unboundedly.
    async fn create_with_generated_code(&self, input: CreateLink) -> Result<Link, AppError> {
        for length in CODE_LENGTHS {
            for _ in 0..ATTEMPTS_PER_LENGTH {
                let new_link = NewLink {
                    short_code: generate_code(length),
                    original_url: input.original_url.clone(),
                    title: input.title.clone(),
                    description: input.description.clone(),
                    expires_at: input.expires_at,
                };

                match self.links.insert(new_link).await {
                    Ok(link) => return Ok(link),
                    Err(AppError::Conflict { .. }) => continue,
                    Err(e) => return Err(e),
                }
            }
        }

        Err(AppError::internal(
            "Failed to allocate a unique short code",
            json!({ "attempts": CODE_LENGTHS.len() * ATTEMPTS_PER_LENGTH }),
        ))
    }
}

fn link_not_found(code: &str) -> AppError {
    AppError::not_found("Short link not found", json!({ "shortCode": code }))
}
