pub mod jira;
pub mod proxy;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::DashboardResult;
use crate::models::RawIssue;

pub use jira::{JiraClient, UpstreamReply};
pub use proxy::ProxyClient;

/// Body of a search request: tracker credentials plus the query text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchRequest {
    pub domain: String,
    pub email: String,
    pub token: String,
    pub jql: String,
}

impl SearchRequest {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            domain: settings.domain.clone(),
            email: settings.email.clone(),
            token: settings.token.clone(),
            jql: settings.jql.clone(),
        }
    }

    /// Blank values count as missing.
    pub fn has_credentials(&self) -> bool {
        [&self.domain, &self.email, &self.token]
            .iter()
            .all(|v| !v.trim().is_empty())
    }
}

/// Anything that can answer a ticket search.
#[async_trait]
pub trait TicketSource: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> DashboardResult<Vec<RawIssue>>;
}
