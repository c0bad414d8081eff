use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use url::Url;

use browserino::platform::default_platform;
use browserino::{App, FileStore};

/// Route URL-open requests to a specific browser, by rule or by picker.
#[derive(Debug, Parser)]
#[command(name = "browserino", version)]
struct Cli {
    /// URLs to dispatch through the routing pipeline.
    urls: Vec<Url>,

    /// Path of the settings file.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Log filter when RUST_LOG is unset.
    #[arg(long, default_value = "browserino=info")]
    log: String,
}

/// How often the selector window's key status is sampled while it is open.
const KEY_POLL_INTERVAL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log)),
        )
        .init();

    let settings_path = cli.settings.unwrap_or_else(FileStore::default_path);
    let store = Arc::new(FileStore::new(settings_path));
    let platform = default_platform();
    tracing::debug!(platform = platform.id(), "starting");

    let app = App::new(platform, store);
    if let Err(error) = app.on_launch() {
        tracing::warn!(%error, "launch setup failed");
    }

    let dispatched_from_cli = !cli.urls.is_empty();
    if dispatched_from_cli {
        app.handle_open_urls(cli.urls).await;
    }

    run_event_loop(&app, dispatched_from_cli).await;
}

/// Drive the selector lifecycle until shutdown.
///
/// The OS open-URL events themselves arrive through the shell collaborator,
/// which calls `App::handle_open_urls` on this same loop. Here the loop
/// samples the selector's key status while it is open and reports key-loss,
/// and exits on Ctrl-C (or once a command-line dispatch has fully resolved).
async fn run_event_loop(app: &App, exit_when_idle: bool) {
    let mut was_key = false;
    let mut poll = tokio::time::interval(KEY_POLL_INTERVAL);

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::debug!("shutting down");
                break;
            }
            _ = poll.tick() => {
                if app.selector_open().await {
                    let is_key = app.selector_is_key();
                    if was_key && !is_key {
                        app.handle_resign_key().await;
                    }
                    was_key = is_key;
                } else {
                    was_key = false;
                    if exit_when_idle {
                        break;
                    }
                }
            }
        }
    }
}
