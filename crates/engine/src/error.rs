use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Signal error: {0}")]
    Signal(#[from] signal::SignalError),

    #[error("Gauge error: {0}")]
    Gauge(#[from] gauge::GaugeError),

    #[error("Invalid snapshot: {0}")]
    Core(#[from] core_types::CoreError),
}
