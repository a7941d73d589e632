pub mod link;
pub mod person;
pub mod ticket;
pub mod wire;

// Re-export commonly used types
pub use link::{IssueLink, LinkDirection, LinkTarget, LinkType, LinkedTicket};
pub use person::{Person, ResolvedRoles, Roles};
pub use ticket::{normalize, Ticket, TicketStub};
pub use wire::{ProxyErrorBody, RawIssue, SearchResponse};
