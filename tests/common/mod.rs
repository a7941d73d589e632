#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::{
    extract::Query,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use ticketscope::client::SearchRequest;
use ticketscope::models::{normalize, SearchResponse, Ticket};

pub const EMAIL: &str = "dev@acme.io";
pub const TOKEN: &str = "secret";
/// `Basic base64("dev@acme.io:secret")`
pub const EXPECTED_AUTH: &str = "Basic ZGV2QGFjbWUuaW86c2VjcmV0";

/// A is Done/Bug and blocks B; B is To Do/Story.
pub fn search_payload() -> Value {
    json!({
        "isLast": true,
        "issues": [
            {
                "key": "A",
                "fields": {
                    "summary": "Crash on save",
                    "status": { "name": "Done" },
                    "issuetype": { "name": "Bug" },
                    "priority": { "name": "High" },
                    "labels": ["backend"],
                    "updated": "2024-03-04T10:15:00.000+0000",
                    "assignee": {
                        "displayName": "Ada Lovelace",
                        "avatarUrls": { "48x48": "https://avatars/ada-48.png", "24x24": "https://avatars/ada-24.png" }
                    },
                    "issuelinks": [
                        {
                            "type": { "name": "Blocks", "inward": "is blocked by", "outward": "blocks" },
                            "outwardIssue": {
                                "key": "B",
                                "fields": {
                                    "summary": "Autosave drafts",
                                    "status": { "name": "To Do" },
                                    "issuetype": { "name": "Story" }
                                }
                            }
                        }
                    ]
                }
            },
            {
                "key": "B",
                "fields": {
                    "summary": "Autosave drafts",
                    "status": { "name": "To Do" },
                    "issuetype": { "name": "Story" },
                    "labels": ["frontend"]
                }
            }
        ]
    })
}

pub fn sample_tickets() -> Vec<Ticket> {
    let response: SearchResponse = serde_json::from_value(search_payload()).unwrap();
    normalize(response.issues)
}

pub fn request_for(domain: &str, jql: &str) -> SearchRequest {
    SearchRequest {
        domain: domain.to_string(),
        email: format!(" {} ", EMAIL),
        token: TOKEN.to_string(),
        jql: jql.to_string(),
    }
}

/// Stand-in for the tracker's search endpoint. The query text picks the
/// behaviour: `forbidden` answers 403, `garbage` answers a non-JSON 200.
async fn fake_search(Query(params): Query<HashMap<String, String>>, headers: HeaderMap) -> Response {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };

    if header_value(header::AUTHORIZATION) != EXPECTED_AUTH {
        return (StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
    }

    match params.get("jql").map(String::as_str) {
        Some("forbidden") => (StatusCode::FORBIDDEN, "Forbidden").into_response(),
        Some("garbage") => (StatusCode::OK, "<html>not json</html>").into_response(),
        _ => {
            let mut payload = search_payload();
            payload["echo"] = json!({
                "jql": params.get("jql"),
                "maxResults": params.get("maxResults"),
                "fields": params.get("fields"),
                "accept": header_value(header::ACCEPT),
                "atlassianToken": headers
                    .get("x-atlassian-token")
                    .and_then(|v| v.to_str().ok()),
            });
            Json(payload).into_response()
        }
    }
}

pub fn fake_tracker() -> Router {
    Router::new().route("/rest/api/3/search/jql", get(fake_search))
}

/// Serves `app` on an ephemeral localhost port.
pub async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}
