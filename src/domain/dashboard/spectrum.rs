use serde::Serialize;

use crate::domain::dissonance::{PredictedScore, SpectrumEndpoints};

pub const SPECTRUM_TITLE: &str = "Predicted Score Spectrum (at current Alignment/Valence settings)";
pub const SPECTRUM_AXIS_TITLE: &str = "Predicted Dissonance Score (PCDI)";

/// Ideology spectrum chart: a line between the two endpoints plus a marker
/// for the current selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectrumChart {
    pub title: &'static str,
    pub axis_title: &'static str,
    /// Axis range, always the full score scale.
    pub axis_min: f64,
    pub axis_max: f64,
    pub conservative: ChartPoint,
    pub liberal: ChartPoint,
    pub selection: ChartPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub value: f64,
    /// Hover text, e.g. `Conservative Endpoint: 2.32`
    pub label: String,
    pub marker: MarkerStyle,
}

/// Marker drawn for a chart point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerStyle {
    ConservativeDot, // blue
    LiberalDot,      // red
    SelectionStar,   // yellow
}

impl MarkerStyle {
    pub fn color(&self) -> &'static str {
        match self {
            MarkerStyle::ConservativeDot => "blue",
            MarkerStyle::LiberalDot => "red",
            MarkerStyle::SelectionStar => "yellow",
        }
    }

    pub fn size(&self) -> u32 {
        match self {
            MarkerStyle::ConservativeDot | MarkerStyle::LiberalDot => 15,
            MarkerStyle::SelectionStar => 25,
        }
    }
}

impl SpectrumChart {
    pub fn new(endpoints: &SpectrumEndpoints, selection: PredictedScore) -> Self {
        Self {
            title: SPECTRUM_TITLE,
            axis_title: SPECTRUM_AXIS_TITLE,
            axis_min: PredictedScore::MIN,
            axis_max: PredictedScore::MAX,
            conservative: ChartPoint {
                value: endpoints.conservative.value(),
                label: format!("Conservative Endpoint: {}", endpoints.conservative),
                marker: MarkerStyle::ConservativeDot,
            },
            liberal: ChartPoint {
                value: endpoints.liberal.value(),
                label: format!("Liberal Endpoint: {}", endpoints.liberal),
                marker: MarkerStyle::LiberalDot,
            },
            selection: ChartPoint {
                value: selection.value(),
                label: format!("Your Selection: {}", selection),
                marker: MarkerStyle::SelectionStar,
            },
        }
    }

    /// Position of a value along the axis as a 0-1 fraction.
    pub fn axis_fraction(&self, value: f64) -> f64 {
        ((value - self.axis_min) / (self.axis_max - self.axis_min)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> SpectrumChart {
        let endpoints = SpectrumEndpoints {
            conservative: PredictedScore::from_raw(2.324405),
            liberal: PredictedScore::from_raw(2.127255),
        };
        SpectrumChart::new(&endpoints, PredictedScore::from_raw(2.2))
    }

    #[test]
    fn points_carry_hover_labels() {
        let chart = chart();
        assert_eq!(chart.conservative.label, "Conservative Endpoint: 2.32");
        assert_eq!(chart.liberal.label, "Liberal Endpoint: 2.13");
        assert_eq!(chart.selection.label, "Your Selection: 2.20");
    }

    #[test]
    fn markers_match_original_palette() {
        let chart = chart();
        assert_eq!(chart.conservative.marker.color(), "blue");
        assert_eq!(chart.liberal.marker.color(), "red");
        assert_eq!(chart.selection.marker.color(), "yellow");
        assert!(chart.selection.marker.size() > chart.liberal.marker.size());
    }

    #[test]
    fn axis_spans_score_scale() {
        let chart = chart();
        assert_eq!(chart.axis_fraction(1.0), 0.0);
        assert_eq!(chart.axis_fraction(10.0), 1.0);
        assert_eq!(chart.axis_fraction(5.5), 0.5);
    }
}
