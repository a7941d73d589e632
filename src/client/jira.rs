use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};

use super::{SearchRequest, TicketSource};
use crate::constants::{FIELDS_ALL, MAX_RESULTS, SEARCH_API_PATH};
use crate::error::{DashboardError, DashboardResult};
use crate::models::{RawIssue, SearchResponse};

/// Raw answer from the tracker: status plus the body text, untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}

impl UpstreamReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn into_issues(self) -> DashboardResult<Vec<RawIssue>> {
        if !self.is_success() {
            return Err(DashboardError::Upstream {
                status: self.status,
                details: self.body,
            });
        }
        let response: SearchResponse = serde_json::from_str(&self.body)?;
        Ok(response.issues)
    }
}

/// Talks to the tracker's search API directly with Basic auth.
#[derive(Debug, Clone)]
pub struct JiraClient {
    http: reqwest::Client,
}

impl JiraClient {
    pub fn new() -> DashboardResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static("x-atlassian-token"),
            HeaderValue::from_static("no-check"),
        );

        let http = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self { http })
    }

    /// Search URL for a tracker domain. A bare host gets `https://`.
    pub fn search_url(domain: &str) -> String {
        let domain = domain.trim().trim_end_matches('/');
        if domain.starts_with("http://") || domain.starts_with("https://") {
            format!("{}{}", domain, SEARCH_API_PATH)
        } else {
            format!("https://{}{}", domain, SEARCH_API_PATH)
        }
    }

    /// Runs the search and returns whatever the tracker said, success or not.
    /// Only transport failures are errors here.
    pub async fn fetch(&self, request: &SearchRequest) -> DashboardResult<UpstreamReply> {
        let url = Self::search_url(&request.domain);
        tracing::debug!("GET {} jql={:?}", url, request.jql);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("jql", request.jql.as_str()),
                ("maxResults", MAX_RESULTS),
                ("fields", FIELDS_ALL),
            ])
            .basic_auth(request.email.trim(), Some(request.token.trim()))
            .send()
            .await
            .map_err(|e| DashboardError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::Transport(e.to_string()))?;

        Ok(UpstreamReply { status, body })
    }
}

#[async_trait]
impl TicketSource for JiraClient {
    async fn search(&self, request: &SearchRequest) -> DashboardResult<Vec<RawIssue>> {
        if !request.has_credentials() {
            return Err(DashboardError::MissingCredentials);
        }
        self.fetch(request).await?.into_issues()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_defaults_to_https() {
        assert_eq!(
            JiraClient::search_url(" acme.atlassian.net/ "),
            "https://acme.atlassian.net/rest/api/3/search/jql"
        );
        assert_eq!(
            JiraClient::search_url("http://127.0.0.1:9000"),
            "http://127.0.0.1:9000/rest/api/3/search/jql"
        );
    }

    #[test]
    fn test_reply_maps_non_success_to_upstream() {
        let reply = UpstreamReply {
            status: 403,
            body: "Forbidden".into(),
        };
        let err = reply.into_issues().unwrap_err();
        assert_eq!(err.debug_payload(), Some("Forbidden"));
        assert_eq!(err.to_string(), "Jira API error: 403");
    }

    #[test]
    fn test_reply_parses_issues() {
        let reply = UpstreamReply {
            status: 200,
            body: r#"{"issues":[{"key":"OPS-1","fields":{}}],"isLast":true}"#.into(),
        };
        let issues = reply.into_issues().unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].key, "OPS-1");
    }

    #[tokio::test]
    async fn test_missing_credentials_short_circuits() {
        let client = JiraClient::new().unwrap();
        let request = SearchRequest {
            domain: "acme.atlassian.net".into(),
            email: "  ".into(),
            token: "t".into(),
            jql: String::new(),
        };
        assert!(matches!(
            client.search(&request).await,
            Err(DashboardError::MissingCredentials)
        ));
    }
}
