use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// Search response data structures
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub issues: Vec<RawIssue>,
}

/// One issue as the tracker sends it. Embedded link targets use the same
/// shape with most fields missing, so everything below `key` is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawIssue {
    pub key: String,
    #[serde(default)]
    pub fields: RawFields,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawFields {
    pub summary: Option<String>,
    pub description: Option<Value>,
    pub status: Option<Named>,
    #[serde(rename = "issuetype")]
    pub issue_type: Option<Named>,
    pub priority: Option<Named>,
    pub updated: Option<String>,
    pub labels: Option<Vec<String>>,
    pub assignee: Option<RawPerson>,
    pub reporter: Option<RawPerson>,
    #[serde(rename = "customfield_devEngineer")]
    pub dev_engineer: Option<RawPerson>,
    #[serde(rename = "customfield_devOwner")]
    pub dev_owner: Option<RawPerson>,
    #[serde(rename = "customfield_reviewer")]
    pub reviewer: Option<RawPerson>,
    #[serde(rename = "customfield_qa")]
    pub qa: Option<RawPerson>,
    #[serde(rename = "issuelinks")]
    pub issue_links: Option<Vec<RawIssueLink>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Named {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPerson {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub avatar_urls: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIssueLink {
    #[serde(rename = "type", default)]
    pub link_type: RawLinkType,
    pub inward_issue: Option<Box<RawIssue>>,
    pub outward_issue: Option<Box<RawIssue>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawLinkType {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub inward: String,
    #[serde(default)]
    pub outward: String,
}

/// Error body returned by the search proxy.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProxyErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
