use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{CARD_AVATAR_SIZES, UNASSIGNED};
use crate::formatting::theme::{IssueKind, StatusKind, StatusStyle, ThemeMode, TypeStyle, WorkflowCategory};
use crate::formatting::{extract_description, extract_first_name, format_relative_time, format_short_date, truncate};
use crate::models::{LinkedTicket, Ticket};

const CARD_SUMMARY_LEN: usize = 120;
const CARD_DESCRIPTION_LEN: usize = 200;

/// The four presentations of the filtered ticket set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Cards,
    Board,
    List,
    Graph,
}

impl ViewMode {
    pub const ALL: [ViewMode; 4] = [ViewMode::Cards, ViewMode::Board, ViewMode::List, ViewMode::Graph];
}

/// One board column per distinct status name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardColumn {
    pub status: String,
    pub count: usize,
    pub tickets: Vec<Ticket>,
}

/// Groups tickets by status. Columns sort by name; tickets keep input order.
pub fn board_columns(tickets: &[Ticket]) -> Vec<BoardColumn> {
    let mut grouped: BTreeMap<&str, Vec<Ticket>> = BTreeMap::new();
    for ticket in tickets {
        grouped.entry(ticket.status.as_str()).or_default().push(ticket.clone());
    }

    grouped
        .into_iter()
        .map(|(status, tickets)| BoardColumn {
            status: status.to_string(),
            count: tickets.len(),
            tickets,
        })
        .collect()
}

/// Looks a key up for the detail panel: the top-level record if fetched,
/// otherwise the first embedded link target carrying that key.
pub fn find_ticket_detail<'a>(tickets: &'a [Ticket], key: &str) -> Option<LinkedTicket<'a>> {
    if let Some(ticket) = tickets.iter().find(|t| t.key == key) {
        return Some(LinkedTicket::Full(ticket));
    }

    tickets
        .iter()
        .flat_map(|t| t.links.iter())
        .filter_map(|link| link.target.as_ref())
        .find(|target| target.ticket.key == key)
        .map(|target| LinkedTicket::Stub(&target.ticket))
}

/// Display projection of one ticket for the card and list views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketCard {
    pub key: String,
    pub summary: String,
    pub excerpt: String,
    pub status: String,
    pub category: WorkflowCategory,
    pub status_style: StatusStyle,
    pub issue_kind: IssueKind,
    pub type_style: TypeStyle,
    pub priority: String,
    pub labels: Vec<String>,
    pub assignee: String,
    pub avatar: Option<String>,
    pub updated: String,
    pub updated_relative: String,
    pub link_count: usize,
}

impl TicketCard {
    pub fn new(ticket: &Ticket, mode: ThemeMode) -> Self {
        let issue_kind = IssueKind::classify(&ticket.issue_type);
        let assignee = ticket
            .assignee
            .as_ref()
            .map(|p| extract_first_name(&p.display_name).to_string())
            .unwrap_or_else(|| UNASSIGNED.to_string());

        Self {
            key: ticket.key.clone(),
            summary: truncate(&ticket.summary, CARD_SUMMARY_LEN),
            excerpt: truncate(&extract_description(ticket.description.as_ref()), CARD_DESCRIPTION_LEN),
            status: ticket.status.clone(),
            category: ticket.category(),
            status_style: StatusKind::classify(&ticket.status).style(),
            issue_kind,
            type_style: issue_kind.style(mode),
            priority: ticket.priority.clone(),
            labels: ticket.labels.clone(),
            assignee,
            avatar: ticket
                .assignee
                .as_ref()
                .and_then(|p| p.avatar_url(CARD_AVATAR_SIZES))
                .map(str::to_string),
            updated: format_short_date(&ticket.updated),
            updated_relative: format_relative_time(&ticket.updated),
            link_count: ticket.links.len(),
        }
    }
}
