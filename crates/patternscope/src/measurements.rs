//! Numeric measurement hints attached to detected patterns.
//!
//! The detector reports whatever it measured (golden-ratio proximity,
//! angles, axis counts, node counts). Nothing downstream depends on a
//! schema beyond "numeric or numeric-array values"; the map is carried as
//! display and rendering hints only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Growth constant used when a detection does not supply one.
pub const DEFAULT_GOLDEN_RATIO: f64 = 1.618;

/// A single measurement value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MeasureValue {
    Number(f64),
    Numbers(Vec<f64>),
}

/// Open map of numeric display hints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Measurements(pub BTreeMap<String, MeasureValue>);

impl Measurements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a scalar measurement, builder-style.
    pub fn with(mut self, key: &str, value: f64) -> Self {
        self.0.insert(key.to_string(), MeasureValue::Number(value));
        self
    }

    /// Look up a scalar measurement.
    pub fn scalar(&self, key: &str) -> Option<f64> {
        match self.0.get(key) {
            Some(MeasureValue::Number(v)) => Some(*v),
            _ => None,
        }
    }

    /// Spiral growth constant. Falls back to [`DEFAULT_GOLDEN_RATIO`] when
    /// the key is missing, non-scalar, or not finite.
    pub fn golden_ratio(&self) -> f64 {
        match self.scalar("golden_ratio") {
            Some(v) if v.is_finite() => v,
            _ => DEFAULT_GOLDEN_RATIO,
        }
    }
}
