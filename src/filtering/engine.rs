use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::formatting::theme::WorkflowCategory;
use crate::models::Ticket;

/// Selection state for every facet.
///
/// Facets combine with AND; values inside one facet combine with OR; an
/// empty facet places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterSelection {
    pub text: String,
    pub statuses: BTreeSet<String>,
    pub types: BTreeSet<String>,
    pub priorities: BTreeSet<String>,
    pub labels: BTreeSet<String>,
    pub categories: BTreeSet<WorkflowCategory>,
}

/// A single selectable facet, used by the toggle API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Status,
    Type,
    Priority,
    Label,
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

impl FilterSelection {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
            && self.statuses.is_empty()
            && self.types.is_empty()
            && self.priorities.is_empty()
            && self.labels.is_empty()
            && self.categories.is_empty()
    }

    pub fn reset(&mut self) {
        *self = FilterSelection::default();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn toggle(&mut self, facet: Facet, value: impl Into<String>) {
        let value = value.into();
        match facet {
            Facet::Status => toggle(&mut self.statuses, value),
            Facet::Type => toggle(&mut self.types, value),
            Facet::Priority => toggle(&mut self.priorities, value),
            Facet::Label => toggle(&mut self.labels, value),
        }
    }

    pub fn toggle_category(&mut self, category: WorkflowCategory) {
        toggle(&mut self.categories, category);
    }

    pub fn matches(&self, ticket: &Ticket) -> bool {
        self.matches_text(ticket)
            && (self.statuses.is_empty() || self.statuses.contains(&ticket.status))
            && (self.types.is_empty() || self.types.contains(&ticket.issue_type))
            && (self.priorities.is_empty() || self.priorities.contains(&ticket.priority))
            && (self.labels.is_empty() || ticket.labels.iter().any(|l| self.labels.contains(l)))
            && (self.categories.is_empty() || self.categories.contains(&ticket.category()))
    }

    fn matches_text(&self, ticket: &Ticket) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();
        ticket.key.to_lowercase().contains(&needle) || ticket.summary.to_lowercase().contains(&needle)
    }
}

/// Stable filter: keeps the input order and never re-sorts.
pub fn filter_tickets(tickets: &[Ticket], selection: &FilterSelection) -> Vec<Ticket> {
    tickets
        .iter()
        .filter(|ticket| selection.matches(ticket))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Ticket> {
        vec![
            Ticket::new("WEB-10", "Fix login redirect", "In Progress")
                .with_type("Bug")
                .with_priority("High")
                .with_labels(["auth", "web"]),
            Ticket::new("WEB-11", "Dark mode toggle", "To Do").with_type("Story"),
            Ticket::new("API-3", "Rate limit login endpoint", "Done")
                .with_priority("High")
                .with_labels(["auth"]),
        ]
    }

    fn keys(tickets: &[Ticket]) -> Vec<&str> {
        tickets.iter().map(|t| t.key.as_str()).collect()
    }

    #[test]
    fn test_text_matches_key_or_summary_case_insensitively() {
        let mut selection = FilterSelection::default();
        selection.set_text("LOGIN");
        assert_eq!(keys(&filter_tickets(&sample(), &selection)), vec!["WEB-10", "API-3"]);

        selection.set_text("web-1");
        assert_eq!(keys(&filter_tickets(&sample(), &selection)), vec!["WEB-10", "WEB-11"]);
    }

    #[test]
    fn test_facets_or_within_and_across() {
        let mut selection = FilterSelection::default();
        selection.toggle(Facet::Priority, "High");
        selection.toggle(Facet::Type, "Bug");
        selection.toggle(Facet::Type, "Task");
        assert_eq!(keys(&filter_tickets(&sample(), &selection)), vec!["WEB-10", "API-3"]);

        selection.toggle_category(WorkflowCategory::Done);
        assert_eq!(keys(&filter_tickets(&sample(), &selection)), vec!["API-3"]);
    }

    #[test]
    fn test_label_facet_excludes_unlabelled_tickets() {
        let mut selection = FilterSelection::default();
        selection.toggle(Facet::Label, "auth");
        assert_eq!(keys(&filter_tickets(&sample(), &selection)), vec!["WEB-10", "API-3"]);
    }

    #[test]
    fn test_toggle_twice_clears() {
        let mut selection = FilterSelection::default();
        selection.toggle(Facet::Status, "Done");
        selection.toggle(Facet::Status, "Done");
        assert!(selection.is_empty());
    }
}
