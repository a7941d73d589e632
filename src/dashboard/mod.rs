//! Query/fetch orchestration and the view projections built on top of it.

pub mod state;
pub mod views;

pub use state::{Dashboard, DashboardState, FetchStatus, FetchToken, EMPTY_COLLECTION_MESSAGE, NO_MATCH_MESSAGE};
pub use views::{board_columns, find_ticket_detail, BoardColumn, TicketCard, ViewMode};
