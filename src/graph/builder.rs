use std::collections::{HashMap, HashSet};

use super::{EdgeStyle, GraphEdge, GraphNode, NodeKind, NodeShape, NodeStyle, TicketGraph};
use crate::constants::{EXTERNAL_TICKET, GRAPH_AVATAR_SIZES, UNASSIGNED};
use crate::formatting::theme::{helpers, IssueKind, ThemeMode};
use crate::models::{LinkDirection, Person, Ticket, TicketStub};

const TICKET_BASE_SIZE: u32 = 15;
const TICKET_SIZE_STEP: u32 = 4;
const STUB_BASE_SIZE: u32 = 10;
const STUB_SIZE_STEP: u32 = 3;

/// Builds a [`TicketGraph`] from a ticket slice.
///
/// Node identity is the ticket key and the first writer wins: a key first
/// reached as a link target keeps its stub node, built from the embedded
/// partial fields, even if a later top-level ticket has the same key.
pub struct GraphBuilder<'a> {
    tickets: &'a [Ticket],
    mode: ThemeMode,
    link_counts: HashMap<&'a str, u32>,
    seen: HashSet<String>,
    graph: TicketGraph,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(tickets: &'a [Ticket], mode: ThemeMode) -> Self {
        Self {
            tickets,
            mode,
            link_counts: HashMap::new(),
            seen: HashSet::new(),
            graph: TicketGraph::default(),
        }
    }

    pub fn build(mut self) -> TicketGraph {
        self.count_links();

        for ticket in self.tickets {
            if self.seen.insert(ticket.key.clone()) {
                let node = self.ticket_node(ticket);
                self.graph.nodes.push(node);
            }

            for link in &ticket.links {
                // Links with neither end were counted for the owner but draw nothing.
                let Some(target) = &link.target else {
                    continue;
                };

                if self.seen.insert(target.ticket.key.clone()) {
                    let node = self.stub_node(&target.ticket);
                    self.graph.nodes.push(node);
                }

                let (from, to, label) = match target.direction {
                    LinkDirection::Outward => (&ticket.key, &target.ticket.key, &link.link_type.outward),
                    LinkDirection::Inward => (&target.ticket.key, &ticket.key, &link.link_type.inward),
                };
                let edge = GraphEdge {
                    from: from.clone(),
                    to: to.clone(),
                    label: label.clone(),
                    style: self.edge_style(),
                };
                self.graph.edges.push(edge);
            }
        }

        tracing::debug!(
            "Built ticket graph: {} nodes, {} edges from {} tickets",
            self.graph.nodes.len(),
            self.graph.edges.len(),
            self.tickets.len()
        );
        self.graph
    }

    /// Engagement count: every link adds one to its owner and one to its
    /// target, so parallel links inflate the count.
    fn count_links(&mut self) {
        for ticket in self.tickets {
            *self.link_counts.entry(ticket.key.as_str()).or_insert(0) += ticket.links.len() as u32;
            for link in &ticket.links {
                if let Some(key) = link.target_key() {
                    *self.link_counts.entry(key).or_insert(0) += 1;
                }
            }
        }
    }

    fn connection_count(&self, key: &str) -> u32 {
        self.link_counts.get(key).copied().unwrap_or(0)
    }

    fn ticket_node(&self, ticket: &Ticket) -> GraphNode {
        let issue_kind = IssueKind::classify(&ticket.issue_type);
        let palette = issue_kind.style(self.mode);
        let avatar = avatar_of(ticket.assignee.as_ref());

        GraphNode {
            id: ticket.key.clone(),
            label: ticket.key.clone(),
            tooltip: tooltip(&ticket.summary, &ticket.issue_type, ticket.assignee.as_ref()),
            size: TICKET_BASE_SIZE + self.connection_count(&ticket.key) * TICKET_SIZE_STEP,
            kind: NodeKind::Ticket,
            issue_kind,
            category: Some(ticket.category()),
            shape: shape_for(&avatar),
            avatar,
            style: NodeStyle {
                border: palette.hex_border.to_string(),
                background: palette.hex_bg.to_string(),
                highlight_border: helpers::highlight_border(self.mode).to_string(),
                highlight_background: palette.hex_bg.to_string(),
                font_color: helpers::ticket_font(self.mode).to_string(),
                font_size: 12,
                bold: true,
                border_width: 3,
                border_width_selected: 5,
            },
        }
    }

    fn stub_node(&self, stub: &TicketStub) -> GraphNode {
        let issue_kind = IssueKind::classify(&stub.issue_type);
        let palette = issue_kind.style(self.mode);
        let avatar = avatar_of(stub.assignee.as_ref());

        GraphNode {
            id: stub.key.clone(),
            label: stub.key.clone(),
            tooltip: tooltip(
                stub.summary.as_deref().unwrap_or(EXTERNAL_TICKET),
                &stub.issue_type,
                stub.assignee.as_ref(),
            ),
            size: STUB_BASE_SIZE + self.connection_count(&stub.key) * STUB_SIZE_STEP,
            kind: NodeKind::Stub,
            issue_kind,
            category: stub.category(),
            shape: shape_for(&avatar),
            avatar,
            style: NodeStyle {
                border: palette.hex_border.to_string(),
                background: palette.hex_bg.to_string(),
                highlight_border: helpers::highlight_border(self.mode).to_string(),
                highlight_background: palette.hex_bg.to_string(),
                font_color: helpers::stub_font(self.mode).to_string(),
                font_size: 10,
                bold: false,
                border_width: 2,
                border_width_selected: 3,
            },
        }
    }

    fn edge_style(&self) -> EdgeStyle {
        EdgeStyle {
            color: helpers::edge_line(self.mode).to_string(),
            highlight: helpers::edge_highlight(self.mode).to_string(),
            label_color: helpers::edge_label(self.mode).to_string(),
        }
    }
}

fn tooltip(summary: &str, issue_type: &str, assignee: Option<&Person>) -> String {
    let assignee = assignee.map(|p| p.display_name.as_str()).unwrap_or(UNASSIGNED);
    format!("{}\nType: {}\nAssignee: {}", summary, issue_type, assignee)
}

fn avatar_of(person: Option<&Person>) -> Option<String> {
    person
        .and_then(|p| p.avatar_url(GRAPH_AVATAR_SIZES))
        .map(str::to_string)
}

fn shape_for(avatar: &Option<String>) -> NodeShape {
    if avatar.is_some() {
        NodeShape::CircularImage
    } else {
        NodeShape::Dot
    }
}

pub fn build_graph(tickets: &[Ticket], mode: ThemeMode) -> TicketGraph {
    GraphBuilder::new(tickets, mode).build()
}
