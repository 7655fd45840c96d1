//! The selected range: an ordered `(start, end)` pair.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Current selection of a range slider.
///
/// Serialized as a two-element array `[start, end]` so TOML and JSON stay
/// compact (`initial_value = [20.0, 80.0]`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct RangeValue {
    pub start: f64,
    pub end: f64,
}

impl RangeValue {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Both thumbs at the same position.
    pub const fn collapsed(at: f64) -> Self {
        Self { start: at, end: at }
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// True when `min <= start <= end <= max`.
    pub fn is_within(&self, min: f64, max: f64) -> bool {
        min <= self.start && self.is_ordered() && self.end <= max
    }

    /// Swap the ends if they are reversed.
    pub fn ordered(self) -> Self {
        if self.start <= self.end {
            self
        } else {
            Self::new(self.end, self.start)
        }
    }
}

impl From<[f64; 2]> for RangeValue {
    fn from([start, end]: [f64; 2]) -> Self {
        Self::new(start, end)
    }
}

impl From<RangeValue> for [f64; 2] {
    fn from(value: RangeValue) -> Self {
        [value.start, value.end]
    }
}

impl From<(f64, f64)> for RangeValue {
    fn from((start, end): (f64, f64)) -> Self {
        Self::new(start, end)
    }
}

impl fmt::Display for RangeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
