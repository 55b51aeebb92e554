//! # FX Gauge Dial Geometry
//!
//! Maps scalar values onto a semicircular dial. The dial reads left to right: the
//! bottom of the display range sits at 180 degrees, the top at 0 degrees.
//!
//! ## Public API
//!
//! - `display_range`: derives the visible bounds around an average.
//! - `needle_tip`: places one value on the dial, clamping out-of-range values.
//! - `Dial`: a range, pivot and radius shared by several needles.
//! - `GaugeError`: the error type returned from this crate.

pub mod error;
pub mod geometry;
pub mod layout;

pub use error::GaugeError;
pub use geometry::{Dial, needle_tip};
pub use layout::display_range;
