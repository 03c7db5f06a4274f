//! `roster-tui` — terminal table viewer for a paginated user listing.
//!
//! Shows one page of users at a time with sortable, resizable columns, a
//! field filter, and a detail modal. View state lives in a single store;
//! every change to page, sort, or filter issues exactly one fetch, and
//! responses that arrive out of order are discarded.
//!
//! Logs go to a file (default `/tmp/roster-tui.log`) so they never corrupt
//! the terminal UI.

mod action;
mod app;
mod component;
mod event;
mod fetch;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use roster_core::UserDirectory;

use crate::app::App;

/// Browse a paginated user listing in the terminal.
#[derive(Parser, Debug)]
#[command(name = "roster-tui", version, about)]
struct Cli {
    /// API root URL (e.g., https://dummyjson.com)
    #[arg(short = 'u', long)]
    base_url: Option<String>,

    /// Rows per page
    #[arg(long)]
    page_size: Option<usize>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Accept invalid TLS certificates
    #[arg(short = 'k', long)]
    insecure: bool,

    /// Custom CA certificate (PEM) for TLS verification
    #[arg(long)]
    ca_cert: Option<PathBuf>,

    /// Config file path (defaults to the platform config dir)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Log file path (defaults to /tmp/roster-tui.log)
    #[arg(long, default_value = "/tmp/roster-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// File-based tracing; stdout belongs to the terminal UI. The returned guard
/// must live until exit so buffered lines are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "roster_tui={log_level},roster_core={log_level},roster_api={log_level}"
        ))
    });

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("roster-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

/// Priority: CLI flags > environment > config file > defaults.
fn load_config(cli: &Cli) -> Result<roster_config::Config> {
    let mut cfg = match &cli.config {
        Some(path) => roster_config::load_config_from(path)?,
        None => roster_config::load_config()?,
    };

    if let Some(url) = &cli.base_url {
        cfg.api.base_url.clone_from(url);
    }
    if let Some(page_size) = cli.page_size {
        cfg.api.page_size = page_size;
    }
    if let Some(timeout) = cli.timeout {
        cfg.api.timeout = timeout;
    }
    if cli.insecure {
        cfg.api.insecure = true;
    }
    if let Some(ca) = &cli.ca_cert {
        cfg.api.ca_cert = Some(ca.clone());
    }
    Ok(cfg)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Hooks go in before the terminal is touched.
    tui::install_hooks()?;

    let _log_guard = setup_tracing(&cli);

    let viewer = load_config(&cli)?.to_viewer_config()?;
    info!(
        base_url = %viewer.base_url,
        page_size = viewer.page_size,
        "starting roster-tui"
    );

    let directory = UserDirectory::new(&viewer)?;
    let mut app = App::new(directory, viewer.page_size, viewer.min_column_width);
    app.run().await?;

    Ok(())
}
