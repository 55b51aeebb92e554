use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaugeError {
    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),

    #[error(transparent)]
    Core(#[from] CoreError),
}
