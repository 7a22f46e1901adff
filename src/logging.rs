//! Logging initialization
//!
//! Console logging via `RUST_LOG`-filtered fmt output, plus an optional
//! non-blocking file layer when `ASSISTANT_LOG_DIR` is set. Internal
//! diagnostics (dependency errors, stale worker results, state transitions)
//! go through tracing only; nothing here ends up in spoken tool output.

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber
///
/// Returns the file appender guard when file logging is enabled; the caller
/// must hold it for the process lifetime or buffered log lines are dropped.
pub fn init_logging() -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    match std::env::var("ASSISTANT_LOG_DIR") {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(&dir, "assistant-toolkit.log");
            let (file_writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false);

            tracing_subscriber::registry()
                .with(filter)
                .with(console_layer)
                .with(file_layer)
                .try_init()?;

            tracing::info!("File logging enabled under {}", dir);
            Ok(Some(guard))
        }
        Err(_) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console_layer)
                .try_init()?;
            Ok(None)
        }
    }
}
