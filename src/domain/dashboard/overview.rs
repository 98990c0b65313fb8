use serde::Serialize;

use super::{ReferenceNotes, SpectrumChart};
use crate::domain::dissonance::{
    render_formula, DissonanceBand, Evaluation, InputControl, ModelCoefficients, PredictedScore,
    Tone,
};
use crate::domain::foundation::UnitInterval;

/// Everything the calculator page shows for one input triple.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DissonanceDashboard {
    /// Input controls with their current positions
    pub controls: Vec<ControlView>,

    /// Score readout
    pub score: PredictedScore,
    pub score_display: String,
    pub raw_score: f64,

    /// Band interpretation
    pub band: DissonanceBand,
    pub headline: &'static str,
    pub tone: Tone,
    pub message: String,

    /// Progress indicator fill, `score / 10`
    pub progress: f64,

    pub spectrum: SpectrumChart,

    /// Model formula at two decimals
    pub formula: String,

    /// Inputs the handler had to pull back into range
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub adjustments: Vec<InputAdjustment>,

    pub notes: ReferenceNotes,
}

impl DissonanceDashboard {
    pub fn from_evaluation(evaluation: &Evaluation, coefficients: &ModelCoefficients) -> Self {
        let score = evaluation.score;
        let band = evaluation.band;

        Self {
            controls: InputControl::ALL
                .iter()
                .map(|control| ControlView::new(*control, evaluation.inputs.get(*control)))
                .collect(),
            score,
            score_display: score.to_string(),
            raw_score: evaluation.raw,
            band,
            headline: band.headline(),
            tone: band.tone(),
            message: band.message(score.value()),
            progress: score.progress(),
            spectrum: SpectrumChart::new(&evaluation.endpoints, score),
            formula: render_formula(coefficients),
            adjustments: Vec::new(),
            notes: ReferenceNotes::default(),
        }
    }

    pub fn with_adjustments(mut self, adjustments: Vec<InputAdjustment>) -> Self {
        self.adjustments = adjustments;
        self
    }

    /// Current position of one control.
    pub fn control(&self, control: InputControl) -> Option<&ControlView> {
        self.controls.iter().find(|c| c.control == control)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlView {
    pub control: InputControl,
    pub heading: &'static str,
    pub low_label: &'static str,
    pub high_label: &'static str,
    pub help: &'static str,
    pub value: UnitInterval,
}

impl ControlView {
    pub fn new(control: InputControl, value: UnitInterval) -> Self {
        Self {
            control,
            heading: control.heading(),
            low_label: control.low_label(),
            high_label: control.high_label(),
            help: control.help(),
            value,
        }
    }
}

/// A control value that arrived outside [0, 1] and was clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputAdjustment {
    pub control: InputControl,
    /// Value as received; NaN serializes as `null`
    pub requested: f64,
    pub applied: UnitInterval,
}

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;
