pub const SEARCH_API_PATH: &str = "/rest/api/3/search/jql";
pub const PROXY_SEARCH_ROUTE: &str = "/api/jira/search";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const PRODUCTION_ASSETS_DIR: &str = "dist";
pub const DEVELOPMENT_ASSETS_DIR: &str = "frontend";

// Upstream search parameters
pub const MAX_RESULTS: &str = "100";
pub const FIELDS_ALL: &str = "*all";

pub const DEFAULT_ORDER_CLAUSE: &str = "order by updated DESC";

pub const APP_DIR: &str = "ticketscope";
pub const SETTINGS_FILE: &str = "settings.json";

pub const DEFAULT_ISSUE_TYPE: &str = "Task";
pub const DEFAULT_PRIORITY: &str = "None";
pub const UNKNOWN_STATUS: &str = "Unknown";
pub const UNASSIGNED: &str = "Unassigned";
pub const EXTERNAL_TICKET: &str = "External Ticket";

// Avatar size keys, in lookup preference order per surface
pub const GRAPH_AVATAR_SIZES: &[&str] = &["48x48", "32x32"];
pub const CARD_AVATAR_SIZES: &[&str] = &["24x24", "32x32"];
