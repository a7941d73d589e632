use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::link::IssueLink;
use super::person::{Person, ResolvedRoles, Roles};
use super::wire::RawIssue;
use crate::constants::{DEFAULT_ISSUE_TYPE, DEFAULT_PRIORITY, UNASSIGNED, UNKNOWN_STATUS};
use crate::formatting::theme::WorkflowCategory;

/// A fully normalized ticket. Optional wire fields are defaulted here once,
/// so nothing downstream repeats the "Task"/"None" fallbacks.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Ticket {
    pub key: String,
    pub summary: String,
    pub description: Option<Value>,
    pub status: String,
    pub issue_type: String,
    pub priority: String,
    pub updated: String,
    pub labels: Vec<String>,
    pub assignee: Option<Person>,
    pub reporter: Option<Person>,
    pub roles: Roles,
    pub links: Vec<IssueLink>,
}

impl Ticket {
    pub fn new(key: impl Into<String>, summary: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            summary: summary.into(),
            description: None,
            status: status.into(),
            issue_type: DEFAULT_ISSUE_TYPE.to_string(),
            priority: DEFAULT_PRIORITY.to_string(),
            updated: String::new(),
            labels: Vec::new(),
            assignee: None,
            reporter: None,
            roles: Roles::default(),
            links: Vec::new(),
        }
    }

    pub fn with_type(mut self, issue_type: impl Into<String>) -> Self {
        self.issue_type = issue_type.into();
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_assignee(mut self, assignee: Person) -> Self {
        self.assignee = Some(assignee);
        self
    }

    pub fn with_link(mut self, link: IssueLink) -> Self {
        self.links.push(link);
        self
    }

    pub fn category(&self) -> WorkflowCategory {
        WorkflowCategory::from_status(&self.status)
    }

    pub fn assignee_name(&self) -> &str {
        self.assignee
            .as_ref()
            .map(|p| p.display_name.as_str())
            .unwrap_or(UNASSIGNED)
    }

    pub fn roles(&self) -> ResolvedRoles {
        let name_or = |person: &Option<Person>, fallback: &str| {
            person
                .as_ref()
                .map(|p| p.display_name.clone())
                .unwrap_or_else(|| fallback.to_string())
        };
        let assignee = self.assignee_name();

        ResolvedRoles {
            engineer: name_or(&self.roles.engineer, assignee),
            owner: name_or(&self.roles.owner, assignee),
            reviewer: name_or(&self.roles.reviewer, UNASSIGNED),
            qa: name_or(&self.roles.qa, UNASSIGNED),
        }
    }
}

impl From<RawIssue> for Ticket {
    fn from(raw: RawIssue) -> Self {
        let fields = raw.fields;
        Self {
            key: raw.key,
            summary: fields.summary.unwrap_or_default(),
            description: fields.description,
            status: fields
                .status
                .map(|s| s.name)
                .unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
            issue_type: fields
                .issue_type
                .map(|t| t.name)
                .unwrap_or_else(|| DEFAULT_ISSUE_TYPE.to_string()),
            priority: fields
                .priority
                .map(|p| p.name)
                .unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
            updated: fields.updated.unwrap_or_default(),
            labels: fields.labels.unwrap_or_default(),
            assignee: fields.assignee.map(Person::from),
            reporter: fields.reporter.map(Person::from),
            roles: Roles {
                engineer: fields.dev_engineer.map(Person::from),
                owner: fields.dev_owner.map(Person::from),
                reviewer: fields.reviewer.map(Person::from),
                qa: fields.qa.map(Person::from),
            },
            links: fields
                .issue_links
                .unwrap_or_default()
                .into_iter()
                .map(IssueLink::from)
                .collect(),
        }
    }
}

/// Partial record embedded as a link target. Carries no links of its own.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TicketStub {
    pub key: String,
    pub summary: Option<String>,
    pub status: Option<String>,
    pub issue_type: String,
    pub priority: Option<String>,
    pub assignee: Option<Person>,
}

impl TicketStub {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            summary: None,
            status: None,
            issue_type: DEFAULT_ISSUE_TYPE.to_string(),
            priority: None,
            assignee: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_type(mut self, issue_type: impl Into<String>) -> Self {
        self.issue_type = issue_type.into();
        self
    }

    pub fn category(&self) -> Option<WorkflowCategory> {
        self.status.as_deref().map(WorkflowCategory::from_status)
    }
}

impl From<RawIssue> for TicketStub {
    fn from(raw: RawIssue) -> Self {
        let fields = raw.fields;
        Self {
            key: raw.key,
            summary: fields.summary,
            status: fields.status.map(|s| s.name),
            issue_type: fields
                .issue_type
                .map(|t| t.name)
                .unwrap_or_else(|| DEFAULT_ISSUE_TYPE.to_string()),
            priority: fields.priority.map(|p| p.name),
            assignee: fields.assignee.map(Person::from),
        }
    }
}

/// Normalizes a whole search response, preserving order.
pub fn normalize(issues: Vec<RawIssue>) -> Vec<Ticket> {
    issues.into_iter().map(Ticket::from).collect()
}
