use std::process;

use clap::Parser;
use colored::*;

use ticketscope::config::{Cli, ServerConfig};
use ticketscope::logging::{init_logging, install_panic_hook, log_file_path};
use ticketscope::server::start_server;

#[tokio::main]
async fn main() {
    Cli::parse();

    let _guard = match init_logging() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("{} {}", "Warning:".yellow(), e);
            None
        }
    };
    install_panic_hook();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    };

    let addr = match config.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    };

    println!(
        "{} {}",
        "ticketscope".cyan().bold(),
        format!("running on http://localhost:{}", addr.port()).green()
    );
    println!("  mode:   {:?}", config.mode);
    println!("  assets: {}", config.assets_dir().display());
    if let Some(path) = log_file_path() {
        println!("  log:    {}", path.display().to_string().dimmed());
    }

    if let Err(e) = start_server(&config).await {
        tracing::error!("Server stopped: {}", e);
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
