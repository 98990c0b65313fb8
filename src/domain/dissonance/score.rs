//! PredictedScore value object (1-10 dissonance scale).

use serde::Serialize;
use std::fmt;

use super::DissonanceBand;

/// A model prediction clamped to the 1-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct PredictedScore(f64);

impl PredictedScore {
    /// Lowest reportable score.
    pub const MIN: f64 = 1.0;

    /// Highest reportable score.
    pub const MAX: f64 = 10.0;

    /// Clamps a raw model value onto the scale.
    pub fn from_raw(raw: f64) -> Self {
        Self(raw.clamp(Self::MIN, Self::MAX))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Fraction of the scale maximum, for progress indicators.
    pub fn progress(&self) -> f64 {
        self.0 / Self::MAX
    }

    /// Qualitative band of this score.
    pub fn band(&self) -> DissonanceBand {
        DissonanceBand::classify(self.0)
    }
}

impl fmt::Display for PredictedScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
