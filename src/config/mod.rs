pub mod server;
pub mod settings;

pub use server::{Cli, RunMode, ServerConfig};
pub use settings::{Settings, SettingsStore};
