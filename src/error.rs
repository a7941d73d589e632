use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Missing Credentials: All fields are required.")]
    MissingCredentials,

    /// The tracker answered with a non-2xx status; `details` is its raw body.
    #[error("Jira API error: {status}")]
    Upstream { status: u16, details: String },

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl DashboardError {
    /// Raw upstream body, kept for display only when the tracker itself rejected the query.
    pub fn debug_payload(&self) -> Option<&str> {
        match self {
            Self::Upstream { details, .. } => Some(details),
            _ => None,
        }
    }

    /// Failures the user fixes in the settings editor rather than by retrying.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingCredentials)
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;

#[macro_export]
macro_rules! dashboard_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::DashboardError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::DashboardError::$error_type(format!($fmt, $($arg)*))
    };
}
