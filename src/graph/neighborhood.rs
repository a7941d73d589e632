use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::TicketGraph;

/// How many hops to expand from the focus node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Depth {
    Limited(usize),
    Unbounded,
}

impl Depth {
    fn allows(self, step: usize) -> bool {
        match self {
            Depth::Limited(max) => step < max,
            Depth::Unbounded => true,
        }
    }
}

/// Focus selection for the graph view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FocusState {
    pub node_id: String,
    pub depth: Depth,
}

impl FocusState {
    pub fn new(node_id: impl Into<String>, depth: Depth) -> Self {
        Self {
            node_id: node_id.into(),
            depth,
        }
    }
}

/// Induced subgraph around `focus`.
///
/// Reachability ignores edge direction; the surviving edges keep theirs. A
/// focus id that is not a node yields an empty graph.
pub fn extract_neighborhood(graph: &TicketGraph, focus: &str, depth: Depth) -> TicketGraph {
    if !graph.contains(focus) {
        return TicketGraph::default();
    }

    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in &graph.edges {
        adjacency.entry(edge.from.as_str()).or_default().push(edge.to.as_str());
        adjacency.entry(edge.to.as_str()).or_default().push(edge.from.as_str());
    }

    let mut visited: HashSet<&str> = HashSet::from([focus]);
    let mut frontier: Vec<&str> = vec![focus];
    let mut step = 0;

    while !frontier.is_empty() && depth.allows(step) {
        let mut next = Vec::new();
        for id in &frontier {
            for &neighbor in adjacency.get(id).into_iter().flatten() {
                if visited.insert(neighbor) {
                    next.push(neighbor);
                }
            }
        }
        frontier = next;
        step += 1;
    }

    let subgraph = TicketGraph {
        nodes: graph
            .nodes
            .iter()
            .filter(|n| visited.contains(n.id.as_str()))
            .cloned()
            .collect(),
        edges: graph
            .edges
            .iter()
            .filter(|e| visited.contains(e.from.as_str()) && visited.contains(e.to.as_str()))
            .cloned()
            .collect(),
    };

    tracing::debug!(
        "Neighborhood of {} at {:?}: {} nodes, {} edges",
        focus,
        depth,
        subgraph.nodes.len(),
        subgraph.edges.len()
    );
    subgraph
}

impl TicketGraph {
    pub fn neighborhood(&self, focus: &FocusState) -> TicketGraph {
        extract_neighborhood(self, &focus.node_id, focus.depth)
    }
}
