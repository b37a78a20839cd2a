//! Stockroom binary entrypoint kept minimal. The full runtime lives in `app`.

use std::sync::OnceLock;
use std::{fmt, time::SystemTime};

use clap::Parser;

use stockroom::args::{Args, run_list};
use stockroom::store::CatalogStore;
use stockroom::{app, config};

struct StockroomTimer;

impl tracing_subscriber::fmt::time::FormatTime for StockroomTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let secs = SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .ok()
            .and_then(|d| i64::try_from(d.as_secs()).ok());
        let s = stockroom::util::ts_to_date(secs); // "YYYY-MM-DD HH:MM:SS"
        w.write_str(&s.replacen(' ', "T", 1))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the global tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset
///
/// Details:
/// - Logs go to `<logs_dir>/stockroom.log` through a non-blocking writer so the TUI's
///   terminal is never written to; if the file cannot be opened, stderr is used instead.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let dir = config::logs_dir();
    let log_path = dir.join("stockroom.log");
    let opened = std::fs::create_dir_all(&dir).and_then(|()| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
    });
    match opened {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(StockroomTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(StockroomTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.effective_log_level());

    let settings = args.apply_to(config::load_settings());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), list = args.list, "Stockroom starting");

    if args.list {
        let result = match app::open_source(&settings) {
            Ok(source) => {
                let store = CatalogStore::new(source, settings.query_defaults());
                run_list(&store, &args).await.map_err(|e| e.to_string())
            }
            Err(e) => Err(e.to_string()),
        };
        match result {
            Ok(table) => print!("{table}"),
            Err(e) => {
                tracing::error!(error = %e, "list mode failed");
                eprintln!("stockroom: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(err) = app::run(&args, settings).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("stockroom: {err}");
    }
    tracing::info!("Stockroom exited");
}
