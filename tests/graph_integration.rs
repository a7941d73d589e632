mod common;

use std::collections::BTreeSet;

use ticketscope::formatting::theme::{IssueKind, ThemeMode, WorkflowCategory};
use ticketscope::graph::{build_graph, extract_neighborhood, Depth, NodeKind};

use common::sample_tickets;

#[test]
fn test_two_ticket_scenario() {
    let tickets = sample_tickets();
    let graph = build_graph(&tickets, ThemeMode::Dark);

    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.edges.len(), 1);

    let edge = &graph.edges[0];
    assert_eq!((edge.from.as_str(), edge.to.as_str()), ("A", "B"));
    assert_eq!(edge.label, "blocks");

    let a = graph.node("A").unwrap();
    assert_eq!(a.kind, NodeKind::Ticket);
    assert_eq!(a.category, Some(WorkflowCategory::Done));
    assert_eq!(a.issue_kind, IssueKind::Bug);
    assert_eq!(a.avatar.as_deref(), Some("https://avatars/ada-48.png"));

    let b = graph.node("B").unwrap();
    assert_eq!(b.category, Some(WorkflowCategory::ToDo));
    // B was first reached as A's link target, so it stays a stub node.
    assert_eq!(b.kind, NodeKind::Stub);
}

#[test]
fn test_every_ticket_has_a_node_and_edges_are_closed() {
    let tickets = sample_tickets();
    let graph = build_graph(&tickets, ThemeMode::Light);

    assert!(graph.nodes.len() >= tickets.len());
    for ticket in &tickets {
        assert!(graph.contains(&ticket.key));
    }
    for edge in &graph.edges {
        assert!(graph.contains(&edge.from));
        assert!(graph.contains(&edge.to));
    }
}

#[test]
fn test_build_is_deterministic() {
    let tickets = sample_tickets();
    let first = build_graph(&tickets, ThemeMode::Dark);
    let second = build_graph(&tickets, ThemeMode::Dark);
    assert_eq!(first, second);
}

#[test]
fn test_neighborhood_properties() {
    let graph = build_graph(&sample_tickets(), ThemeMode::Dark);

    let zero = extract_neighborhood(&graph, "A", Depth::Limited(0));
    assert_eq!(zero.node_ids().collect::<Vec<_>>(), vec!["A"]);
    assert!(zero.edges.is_empty());

    let mut previous: BTreeSet<String> = BTreeSet::new();
    for depth in 0..3 {
        let ids: BTreeSet<String> = extract_neighborhood(&graph, "B", Depth::Limited(depth))
            .node_ids()
            .map(str::to_string)
            .collect();
        assert!(previous.is_subset(&ids));
        previous = ids;
    }

    let all = extract_neighborhood(&graph, "B", Depth::Unbounded);
    assert_eq!(all.nodes.len(), 2);
    assert_eq!(all.edges.len(), 1);

    assert!(extract_neighborhood(&graph, "Z-404", Depth::Unbounded).is_empty());
}
