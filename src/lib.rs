// Module declarations
pub mod client;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod error;
pub mod filtering;
pub mod formatting;
pub mod graph;
pub mod logging;
pub mod models;
pub mod server;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::{JiraClient, ProxyClient, SearchRequest, TicketSource};
pub use config::{RunMode, ServerConfig, Settings, SettingsStore};
pub use dashboard::{Dashboard, DashboardState, FetchStatus, ViewMode};
pub use error::{DashboardError, DashboardResult};
pub use graph::{build_graph, extract_neighborhood, Depth, TicketGraph};
pub use models::*;
