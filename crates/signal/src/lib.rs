//! # FX Gauge Signal Library
//!
//! Turns a long-window average into an alert limit and places the current rate into one
//! of three ordered zones.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** no I/O and no state. Every function is a deterministic mapping of
//!   its arguments, so the host can call it on every refresh.
//! - **Safer tie-break:** a value sitting exactly on a boundary always resolves to the
//!   less risky zone.
//!
//! ## Public API
//!
//! - `compute_limit` / `compute_thresholds`: the threshold calculator.
//! - `classify` / `classify_thresholds`: the zone classifier.
//! - `SignalError`: the error type returned from this crate.

pub mod classifier;
pub mod error;
pub mod thresholds;

pub use classifier::{classify, classify_thresholds};
pub use error::SignalError;
pub use thresholds::{compute_limit, compute_thresholds};
