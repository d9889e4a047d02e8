//! Tracing subscriber initialization

use drift_config::{LogFormat, LoggingConfig};

/// Initialize the global tracing subscriber from layered configuration,
/// with CLI flags overriding the config file's settings.
///
/// In JSON output mode, logs are suppressed on stdout (reserved for the
/// machine-readable result) unless `RUST_LOG`/`--debug` asks for them,
/// in which case they go to stderr instead.
pub fn init_tracing(config: &LoggingConfig, json_mode: bool, debug: bool) {
    if json_mode && !debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::sink)
            .with_env_filter("off")
            .init();
        return;
    }

    let level = if debug { "debug" } else { config.level.as_str() };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("{level},driftctl={level}")));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    match config.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}
