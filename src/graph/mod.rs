//! Ticket relationship graph.
//!
//! The graph is derived data: it is rebuilt from scratch from a ticket slice
//! whenever the input changes and is never persisted.

pub mod builder;
pub mod neighborhood;

use serde::Serialize;

use crate::formatting::theme::{IssueKind, WorkflowCategory};

pub use builder::{build_graph, GraphBuilder};
pub use neighborhood::{extract_neighborhood, Depth, FocusState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Created from a top-level ticket.
    Ticket,
    /// Created from an embedded link target.
    Stub,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeShape {
    Dot,
    CircularImage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeStyle {
    pub border: String,
    pub background: String,
    pub highlight_border: String,
    pub highlight_background: String,
    pub font_color: String,
    pub font_size: u32,
    pub bold: bool,
    pub border_width: u32,
    pub border_width_selected: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub tooltip: String,
    pub size: u32,
    pub kind: NodeKind,
    pub issue_kind: IssueKind,
    pub category: Option<WorkflowCategory>,
    pub shape: NodeShape,
    pub avatar: Option<String>,
    pub style: NodeStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeStyle {
    pub color: String,
    pub highlight: String,
    pub label_color: String,
}

/// One directed, labelled edge per issue link. Parallel edges are kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub label: String,
    pub style: EdgeStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TicketGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl TicketGraph {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }
}
