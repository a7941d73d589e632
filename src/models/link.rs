use serde::{Deserialize, Serialize};

use super::ticket::{Ticket, TicketStub};
use super::wire::RawIssueLink;
use super::Person;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkDirection {
    /// The owning ticket points at the target ("blocks").
    Outward,
    /// The target points at the owning ticket ("is blocked by").
    Inward,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LinkType {
    pub name: Option<String>,
    pub inward: String,
    pub outward: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LinkTarget {
    pub direction: LinkDirection,
    pub ticket: TicketStub,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct IssueLink {
    pub link_type: LinkType,
    /// `None` when the tracker sent neither end; such links still count
    /// toward the owner's engagement but never produce an edge.
    pub target: Option<LinkTarget>,
}

impl IssueLink {
    pub fn outward(link_type: LinkType, ticket: TicketStub) -> Self {
        Self {
            link_type,
            target: Some(LinkTarget {
                direction: LinkDirection::Outward,
                ticket,
            }),
        }
    }

    pub fn inward(link_type: LinkType, ticket: TicketStub) -> Self {
        Self {
            link_type,
            target: Some(LinkTarget {
                direction: LinkDirection::Inward,
                ticket,
            }),
        }
    }

    pub fn direction(&self) -> Option<LinkDirection> {
        self.target.as_ref().map(|t| t.direction)
    }

    pub fn target_key(&self) -> Option<&str> {
        self.target.as_ref().map(|t| t.ticket.key.as_str())
    }

    /// The relationship phrase as read from the owning ticket.
    pub fn phrase(&self) -> Option<&str> {
        self.direction().map(|direction| match direction {
            LinkDirection::Outward => self.link_type.outward.as_str(),
            LinkDirection::Inward => self.link_type.inward.as_str(),
        })
    }
}

impl From<RawIssueLink> for IssueLink {
    fn from(raw: RawIssueLink) -> Self {
        let link_type = LinkType {
            name: raw.link_type.name,
            inward: raw.link_type.inward,
            outward: raw.link_type.outward,
        };

        // Outward wins when the tracker sends both ends.
        let target = match (raw.outward_issue, raw.inward_issue) {
            (Some(issue), _) => Some(LinkTarget {
                direction: LinkDirection::Outward,
                ticket: TicketStub::from(*issue),
            }),
            (None, Some(issue)) => Some(LinkTarget {
                direction: LinkDirection::Inward,
                ticket: TicketStub::from(*issue),
            }),
            (None, None) => None,
        };

        Self { link_type, target }
    }
}

/// A link target resolved against the top-level collection: the full record
/// when the key was fetched directly, otherwise the embedded stub.
#[derive(Debug, Clone, Copy)]
pub enum LinkedTicket<'a> {
    Full(&'a Ticket),
    Stub(&'a TicketStub),
}

impl<'a> LinkedTicket<'a> {
    pub fn key(&self) -> &'a str {
        match self {
            Self::Full(ticket) => &ticket.key,
            Self::Stub(stub) => &stub.key,
        }
    }

    pub fn summary(&self) -> Option<&'a str> {
        match self {
            Self::Full(ticket) => Some(&ticket.summary),
            Self::Stub(stub) => stub.summary.as_deref(),
        }
    }

    pub fn status(&self) -> Option<&'a str> {
        match self {
            Self::Full(ticket) => Some(&ticket.status),
            Self::Stub(stub) => stub.status.as_deref(),
        }
    }

    pub fn issue_type(&self) -> &'a str {
        match self {
            Self::Full(ticket) => &ticket.issue_type,
            Self::Stub(stub) => &stub.issue_type,
        }
    }

    pub fn assignee(&self) -> Option<&'a Person> {
        match self {
            Self::Full(ticket) => ticket.assignee.as_ref(),
            Self::Stub(stub) => stub.assignee.as_ref(),
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full(_))
    }
}
