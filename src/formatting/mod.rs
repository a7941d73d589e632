pub mod description;
pub mod theme;
pub mod utils;

pub use description::extract_description;
pub use theme::{IssueKind, StatusKind, StatusStyle, ThemeMode, TypeStyle, WorkflowCategory};
pub use utils::{extract_first_name, format_relative_time, format_short_date, parse_timestamp, truncate};
