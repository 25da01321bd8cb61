//! Listing query parameters and pagination metadata.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

/// Query parameters for `GET /api/links`.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
/// Out-of-range values are clamped by the service, never rejected.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListQueryParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<i64>,

    #[serde(default)]
    pub search: Option<String>,
}

/// Pagination metadata returned with listings: `pages = ceil(total / limit)`.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub pages: i64,
}
