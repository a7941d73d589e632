use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::constants::{DEFAULT_HOST, DEFAULT_PORT, DEVELOPMENT_ASSETS_DIR, PRODUCTION_ASSETS_DIR};
use crate::error::{DashboardError, DashboardResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RunMode {
    Development,
    Production,
}

/// Command-line surface. It takes no arguments and only answers `--help`
/// and `--version`; all settings come from [`ServerConfig::from_env`].
#[derive(Debug, Parser)]
#[command(
    name = "ticketscope",
    version,
    about = "Serve the ticket dashboard and its issue-tracker search proxy",
    after_help = "Environment:\n  TICKETSCOPE_ENV     development (default) or production\n  TICKETSCOPE_PORT    listen port (default 3000)\n  TICKETSCOPE_HOST    listen address (default 0.0.0.0)\n  TICKETSCOPE_ASSETS  frontend asset directory"
)]
pub struct Cli {}

/// Process configuration, bound to environment variables.
#[derive(Debug, Clone, Parser)]
#[command(name = "ticketscope")]
pub struct ServerConfig {
    /// Asset serving mode
    #[arg(long, env = "TICKETSCOPE_ENV", value_enum, default_value = "development")]
    pub mode: RunMode,

    #[arg(long, env = "TICKETSCOPE_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, env = "TICKETSCOPE_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Directory of frontend assets; defaults to `dist` in production
    #[arg(long, env = "TICKETSCOPE_ASSETS")]
    pub assets: Option<PathBuf>,
}

impl ServerConfig {
    /// Reads the environment only; process arguments are never consulted.
    pub fn from_env() -> DashboardResult<Self> {
        Self::try_parse_from(["ticketscope"])
            .map_err(|e| DashboardError::ConfigError(e.to_string().trim().to_string()))
    }

    pub fn assets_dir(&self) -> PathBuf {
        match (&self.assets, self.mode) {
            (Some(dir), _) => dir.clone(),
            (None, RunMode::Production) => PathBuf::from(PRODUCTION_ASSETS_DIR),
            (None, RunMode::Development) => PathBuf::from(DEVELOPMENT_ASSETS_DIR),
        }
    }

    pub fn socket_addr(&self) -> DashboardResult<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|e| {
            DashboardError::ConfigError(format!("Invalid host address '{}': {}", self.host, e))
        })?;
        Ok(SocketAddr::from((ip, self.port)))
    }
}
