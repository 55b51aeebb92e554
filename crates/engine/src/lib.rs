//! # FX Gauge Engine
//!
//! Runs the full refresh pipeline for one snapshot: thresholds, zone, display range and
//! the three needles (current, average, limit), bundled into a `GaugeReport`.
//!
//! ## Architectural Principles
//!
//! - **Stateless:** `GaugeEngine` only holds validated parameters. `evaluate` takes
//!   `&self`, so one engine can serve any number of refreshes, from any thread.
//! - **No I/O:** the series arrives already reduced to a `SeriesSummary`. Fetching,
//!   caching and fallback selection belong to the host.
//!
//! ## Public API
//!
//! - `GaugeEngine` / `EngineParams`: the pipeline and its parameters.
//! - `GaugeReport` / `NeedleSet`: the output handed to the renderer.
//! - `EngineError`: the error type returned from this crate.

pub mod error;
pub mod pipeline;
pub mod report;

pub use error::EngineError;
pub use pipeline::{EngineParams, GaugeEngine};
pub use report::{GaugeReport, NeedleSet};
