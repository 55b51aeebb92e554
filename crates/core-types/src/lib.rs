//! # FX Gauge Core Types
//!
//! The shared value objects passed between the signal, gauge and engine crates.
//! Every type here is an immutable snapshot: a refresh builds new values, nothing is
//! mutated in place.

pub mod enums;
pub mod error;
pub mod rounding;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::Zone;
pub use error::CoreError;
pub use rounding::round_money;
pub use structs::{DisplayRange, NeedleCoordinate, Point, SeriesSummary, Thresholds};
