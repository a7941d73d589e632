use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::formatting::theme::WorkflowCategory;
use crate::models::Ticket;

/// Distinct values offered by each filter facet, plus per-category counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetIndex {
    pub statuses: Vec<String>,
    pub types: Vec<String>,
    pub priorities: Vec<String>,
    pub labels: Vec<String>,
    /// Always holds all five categories, zero when unused.
    pub category_counts: BTreeMap<WorkflowCategory, usize>,
}

impl FacetIndex {
    pub fn build(tickets: &[Ticket]) -> Self {
        let mut statuses = BTreeSet::new();
        let mut types = BTreeSet::new();
        let mut priorities = BTreeSet::new();
        let mut labels = BTreeSet::new();
        let mut category_counts: BTreeMap<WorkflowCategory, usize> =
            WorkflowCategory::ALL.into_iter().map(|c| (c, 0)).collect();

        for ticket in tickets {
            statuses.insert(ticket.status.clone());
            types.insert(ticket.issue_type.clone());
            priorities.insert(ticket.priority.clone());
            labels.extend(ticket.labels.iter().cloned());
            *category_counts.entry(ticket.category()).or_insert(0) += 1;
        }

        Self {
            statuses: statuses.into_iter().collect(),
            types: types.into_iter().collect(),
            priorities: priorities.into_iter().collect(),
            labels: labels.into_iter().collect(),
            category_counts,
        }
    }

    pub fn count(&self, category: WorkflowCategory) -> usize {
        self.category_counts.get(&category).copied().unwrap_or(0)
    }
}
