//! Pixsea binary entrypoint kept minimal. The search core lives in the library.

mod args;
mod console;

use std::fmt;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;

use pixsea::app::Gallery;
use pixsea::config;
use pixsea::sources::PixabaySource;

/// Timestamp format for log lines.
struct PixseaTimer;

impl tracing_subscriber::fmt::time::FormatTime for PixseaTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Utc::now().format("%Y-%m-%d-T %H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

/// Keeps the non-blocking log writer flushing until exit.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing to `<config>/logs/pixsea.log`, falling back to stderr.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset.
fn init_logging(level: &str) {
    let mut log_path = config::logs_dir();
    log_path.push("pixsea.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(PixseaTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr logger so startup is not blocked
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(PixseaTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = args::Args::parse();
    init_logging(&args::determine_log_level(&args));

    let settings_path = config::settings_path();
    match config::ensure_settings_file(&settings_path) {
        Ok(true) => tracing::info!(path = %settings_path.display(), "wrote default settings"),
        Ok(false) => {}
        Err(e) => tracing::warn!(error = %e, "could not write default settings"),
    }
    let mut settings = config::settings();
    args::apply_overrides(&args, &mut settings);
    tracing::debug!(?settings, "settings loaded");

    let source = match PixabaySource::new(settings) {
        Ok(source) => source,
        Err(e) => {
            eprintln!(
                "pixsea: {e}. Set api_key in {}, export {}, or pass --api-key.",
                settings_path.display(),
                config::API_KEY_ENV
            );
            tracing::error!(error = %e, "cannot create search client");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Pixsea starting");
    let mut gallery = Gallery::new(source);
    if let Some(term) = &args.search {
        gallery.set_search_term(term);
    }
    let code = if args.once {
        console::run_once(&mut gallery, args.pages, args.json).await;
        ExitCode::SUCCESS
    } else if let Err(err) = console::run_interactive(&mut gallery).await {
        tracing::error!(error = %err, "console error");
        eprintln!("pixsea: {err}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    };
    tracing::info!("Pixsea exited");
    code
}
