pub mod engine;
pub mod facets;
pub mod query;

pub use engine::{filter_tickets, Facet, FilterSelection};
pub use facets::FacetIndex;
pub use query::{generate_query_from_assignees, AssigneeClause};
