use crate::error::ConfigError;
use crate::settings::Logging;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_FILE_PREFIX: &str = "fx-gauge.log";

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `logging.level`. Console output goes to stderr so that JSON
/// written to stdout stays machine-readable. The returned guard must be held for the
/// lifetime of the program when file logging is enabled, otherwise buffered lines are lost.
pub fn init_tracing(settings: &Logging) -> Result<Option<WorkerGuard>, ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| {
            ConfigError::LoggingError(format!("invalid log level '{}': {e}", settings.level))
        })?;

    let console = fmt::layer().with_writer(std::io::stderr);

    let guard = match &settings.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .try_init()
                .map_err(|e| ConfigError::LoggingError(e.to_string()))?;

            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .try_init()
                .map_err(|e| ConfigError::LoggingError(e.to_string()))?;

            None
        }
    };

    tracing::debug!(
        level = %settings.level,
        directory = ?settings.directory,
        "Logging initialized"
    );
    Ok(guard)
}
