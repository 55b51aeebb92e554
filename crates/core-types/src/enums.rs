use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk classification of the current rate, ordered from lowest to highest risk.
///
/// The derived `Ord` follows declaration order, so `Zone::Buy < Zone::Avoid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Zone {
    /// At or below the long-window average.
    Buy,
    /// Above the average, at or below the alert limit.
    Accumulate,
    /// Above the alert limit.
    Avoid,
}

impl Zone {
    /// All zones, lowest risk first.
    pub const ALL: [Zone; 3] = [Zone::Buy, Zone::Accumulate, Zone::Avoid];

    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Buy => "BUY",
            Zone::Accumulate => "ACCUMULATE",
            Zone::Avoid => "AVOID",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
