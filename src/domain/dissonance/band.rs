//! Qualitative dissonance bands.

use serde::{Deserialize, Serialize};

/// Scores at or above this are `High`.
pub const HIGH_THRESHOLD: f64 = 4.0;

/// Scores at or above this (and below `HIGH_THRESHOLD`) are `Moderate`.
pub const MODERATE_THRESHOLD: f64 = 3.0;

/// Qualitative reading of a predicted score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DissonanceBand {
    Low,
    Moderate,
    High,
}

/// How a band's message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Warning,
    Error,
}

impl Tone {
    /// CSS class / alert variant name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Error => "error",
        }
    }
}

impl DissonanceBand {
    /// Classifies a score. Each band includes its lower bound.
    pub fn classify(score: f64) -> Self {
        if score >= HIGH_THRESHOLD {
            DissonanceBand::High
        } else if score >= MODERATE_THRESHOLD {
            DissonanceBand::Moderate
        } else {
            DissonanceBand::Low
        }
    }

    /// Returns the short label for this band.
    pub fn label(&self) -> &'static str {
        match self {
            DissonanceBand::Low => "low",
            DissonanceBand::Moderate => "moderate",
            DissonanceBand::High => "high",
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            DissonanceBand::Low => "Low Dissonance",
            DissonanceBand::Moderate => "Moderate Dissonance",
            DissonanceBand::High => "High Dissonance",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            DissonanceBand::Low => Tone::Success,
            DissonanceBand::Moderate => Tone::Warning,
            DissonanceBand::High => Tone::Error,
        }
    }

    /// Explanation shown with the readout.
    pub fn message(&self, score: f64) -> String {
        match self {
            DissonanceBand::High => format!(
                "A score of {:.2} is in the highest range of predicted psychological discomfort \
                 for this model. This choice likely creates significant internal conflict.",
                score
            ),
            DissonanceBand::Moderate => format!(
                "A score of {:.2} indicates a noticeable level of psychological discomfort. \
                 The trade-offs in this choice are significant enough to cause internal conflict.",
                score
            ),
            DissonanceBand::Low => format!(
                "A score of {:.2} indicates a low level of psychological discomfort. \
                 This choice is likely perceived as relatively easy or straightforward.",
                score
            ),
        }
    }
}
