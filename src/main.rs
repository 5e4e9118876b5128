//! arta-forms binary entrypoint kept minimal. Commands live in `args`.

use std::fmt;
use std::sync::OnceLock;

use clap::{CommandFactory, Parser};

use arta_forms::args::{Args, determine_log_level, process_args};

/// Timestamp formatter for log lines ("YYYY-MM-DDTHH:MM:SS", local time).
struct ArtaTimer;

impl tracing_subscriber::fmt::time::FormatTime for ArtaTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Initialize tracing, writing to `~/.config/arta-forms/logs/arta-forms.log`
/// with a stderr fallback when the log file cannot be opened.
fn init_logging(args: &Args) {
    let mut log_path = arta_forms::paths::logs_dir();
    log_path.push("arta-forms.log");

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(determine_log_level(args)));

    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(ArtaTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::debug!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: init stderr logger to avoid blocking startup
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(true)
                .with_timer(ArtaTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(&args);

    tracing::info!(
        check_locales = args.check_locales,
        list_keys = ?args.list_keys,
        "arta-forms starting"
    );

    if let Some(code) = process_args(&args) {
        std::process::exit(code);
    }

    // No command flag given: show usage instead of silently exiting
    let mut cmd = Args::command();
    if let Err(e) = cmd.print_help() {
        tracing::error!(error = %e, "failed to print help");
    }
}
