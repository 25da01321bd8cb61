//! DTOs for per-link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::links::LinkResponse;
use crate::application::services::link_service::LinkStats;
use crate::domain::entities::Click;

/// Response body for `GET /api/links/{code}`: the link plus its recorded
/// click events, newest first.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(flatten)]
    pub link: LinkResponse,
    pub click_events: Vec<ClickEventInfo>,
}

impl StatsResponse {
    pub fn from_stats(stats: LinkStats, base_url: &str) -> Self {
        Self {
            link: LinkResponse::from_link(stats.link, base_url),
            click_events: stats.events.into_iter().map(ClickEventInfo::from).collect(),
        }
    }
}

/// One recorded click.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickEventInfo {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub device_type: Option<String>,
    pub browser: Option<String>,
    pub os: Option<String>,
    pub clicked_at: DateTime<Utc>,
}

impl From<Click> for ClickEventInfo {
    fn from(click: Click) -> Self {
        Self {
            ip_address: click.ip_address,
            user_agent: click.user_agent,
            referer: click.referer,
            device_type: click.device_type,
            browser: click.browser,
            os: click.os,
            clicked_at: click.clicked_at,
        }
    }
}
