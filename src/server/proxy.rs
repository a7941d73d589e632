use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use super::AppState;
use crate::client::SearchRequest;
use crate::models::ProxyErrorBody;

const LOGGED_ERROR_BODY_CHARS: usize = 500;

/// Request body as clients send it; any field may be missing or null.
#[derive(Debug, Default, Deserialize)]
struct SearchBody {
    domain: Option<String>,
    email: Option<String>,
    token: Option<String>,
    jql: Option<String>,
}

impl From<SearchBody> for SearchRequest {
    fn from(body: SearchBody) -> Self {
        SearchRequest {
            domain: body.domain.unwrap_or_default(),
            email: body.email.unwrap_or_default(),
            token: body.token.unwrap_or_default(),
            jql: body.jql.unwrap_or_default(),
        }
    }
}

fn error_response(status: StatusCode, error: impl Into<String>, details: Option<String>) -> Response {
    let body = ProxyErrorBody {
        error: Some(error.into()),
        details,
    };
    (status, Json(body)).into_response()
}

/// `POST /api/jira/search`: forwards the query to the tracker with the
/// caller's credentials and relays the answer.
pub async fn search(State(state): State<AppState>, body: Bytes) -> Response {
    tracing::info!("Received search request");

    let parsed: SearchBody = if body.is_empty() {
        SearchBody::default()
    } else {
        match serde_json::from_slice(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Rejected malformed search body: {}", e);
                return error_response(StatusCode::BAD_REQUEST, format!("Invalid request body: {}", e), None);
            }
        }
    };
    let request = SearchRequest::from(parsed);

    if !request.has_credentials() {
        tracing::error!("Missing credentials in request");
        return error_response(StatusCode::BAD_REQUEST, "Missing credentials", None);
    }

    tracing::info!("Target domain: {}", request.domain);
    tracing::info!("JQL: {}", request.jql);

    let reply = match state.client.fetch(&request).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!("Search proxy failed: {}", e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string(), None);
        }
    };

    tracing::info!("Upstream response status: {}", reply.status);

    if !reply.is_success() {
        let excerpt: String = reply.body.chars().take(LOGGED_ERROR_BODY_CHARS).collect();
        tracing::error!("Upstream error response: {}", excerpt);
        let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
        return error_response(status, format!("Jira API error: {}", reply.status), Some(reply.body));
    }

    match serde_json::from_str::<Value>(&reply.body) {
        Ok(json) => {
            tracing::info!("Fetched search results, payload size: {} bytes", reply.body.len());
            (StatusCode::OK, Json(json)).into_response()
        }
        Err(e) => {
            tracing::error!("Upstream returned a non-JSON body: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string(), None)
        }
    }
}

pub async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed", None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_fields_become_empty() {
        let body: SearchBody =
            serde_json::from_str(r#"{"domain":"acme.atlassian.net","email":null,"token":"t","jql":null}"#).unwrap();
        let request = SearchRequest::from(body);
        assert_eq!(request.email, "");
        assert_eq!(request.jql, "");
        assert!(!request.has_credentials());
    }
}
