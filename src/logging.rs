use std::fs::create_dir_all;
use std::path::PathBuf;
use std::sync::OnceLock;

use chrono::Local;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::constants::APP_DIR;
use crate::error::DashboardResult;

const DEFAULT_FILTER: &str = "ticketscope=info,tower_http=info";

static LOG_FILE: OnceLock<PathBuf> = OnceLock::new();

pub fn log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
        .join("logs")
}

/// Installs the global subscriber: stderr plus a per-run file under the cache dir.
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// lifetime of the process.
pub fn init_logging() -> DashboardResult<WorkerGuard> {
    let dir = log_dir();
    create_dir_all(&dir)?;

    let file_name = format!("ticketscope-{}.log", Local::now().format("%Y%m%d-%H%M%S"));
    let log_file = dir.join(&file_name);

    let appender = tracing_appender::rolling::never(&dir, &file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .try_init()
        .map_err(|e| crate::dashboard_error!(ConfigError, "failed to install subscriber: {}", e))?;

    let _ = LOG_FILE.set(log_file.clone());
    tracing::info!("Logging initialized to: {}", log_file.display());

    Ok(guard)
}

pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log_panic_info(info);
        previous(info);
    }));
}

fn log_panic_info(info: &std::panic::PanicHookInfo<'_>) {
    let mut message = String::from("PANIC: ");

    if let Some(location) = info.location() {
        message.push_str(&format!(
            "at {}:{}:{} - ",
            location.file(),
            location.line(),
            location.column()
        ));
    }

    if let Some(s) = info.payload().downcast_ref::<&str>() {
        message.push_str(s);
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        message.push_str(s);
    } else {
        message.push_str("Unknown panic payload");
    }

    tracing::error!("{}", message);

    let backtrace = std::backtrace::Backtrace::capture();
    tracing::debug!("Backtrace:\n{}", backtrace);
}

pub fn log_file_path() -> Option<PathBuf> {
    LOG_FILE.get().cloned()
}
