use std::fs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes diagnostic logging with both console and file output. This
/// is separate from the run log: the run log is part of the pipeline's
/// observable output, while these logs are operator diagnostics.
pub fn init_logging() {
    // Ensure logs directory exists
    let _ = fs::create_dir_all("logs");

    let file_appender = tracing_appender::rolling::daily("logs", "bank_etl.log");
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer().json().with_writer(non_blocking_writer);
    let console_layer = fmt::layer().with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("bank_etl=info".parse().unwrap()))
        .with(file_layer)
        .with(console_layer)
        .init();

    // Keep the guard alive so buffered log lines are flushed on exit
    std::mem::forget(_guard);
}
