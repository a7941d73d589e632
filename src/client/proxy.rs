use async_trait::async_trait;

use super::{SearchRequest, TicketSource};
use crate::constants::PROXY_SEARCH_ROUTE;
use crate::error::{DashboardError, DashboardResult};
use crate::models::{ProxyErrorBody, RawIssue, SearchResponse};

/// Searches through the dashboard's own proxy endpoint.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ProxyClient {
    pub fn new(server_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}{}", server_url.trim_end_matches('/'), PROXY_SEARCH_ROUTE),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Maps a non-2xx proxy answer onto the error taxonomy. A `details` field
/// means the tracker itself rejected the query.
fn proxy_failure(status: u16, body: &str) -> DashboardError {
    let parsed: ProxyErrorBody = serde_json::from_str(body).unwrap_or_default();
    match parsed.details {
        Some(details) => DashboardError::Upstream { status, details },
        None => DashboardError::Server {
            status,
            message: parsed
                .error
                .unwrap_or_else(|| format!("Server error: {}", status)),
        },
    }
}

#[async_trait]
impl TicketSource for ProxyClient {
    async fn search(&self, request: &SearchRequest) -> DashboardResult<Vec<RawIssue>> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| DashboardError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::Transport(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(proxy_failure(status, &body));
        }

        let parsed: SearchResponse = serde_json::from_str(&body)?;
        Ok(parsed.issues)
    }
}
