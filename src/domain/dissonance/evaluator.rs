//! Dissonance Score Evaluator - the model's prediction formula.

use serde::Serialize;

use super::{DerivedIndicators, DilemmaInputs, DissonanceBand, ModelCoefficients, PredictedScore};
use crate::domain::foundation::UnitInterval;

/// Scores at both ends of the ideology spectrum, holding alignment and
/// valence at their current values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectrumEndpoints {
    pub conservative: PredictedScore,
    pub liberal: PredictedScore,
}

/// Full assessment of one input triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub inputs: DilemmaInputs,
    pub indicators: DerivedIndicators,
    /// Model output before clamping.
    pub raw: f64,
    pub score: PredictedScore,
    pub band: DissonanceBand,
    pub endpoints: SpectrumEndpoints,
}

/// Evaluator for the three-way interaction model.
pub struct DissonanceEvaluator;

impl DissonanceEvaluator {
    /// Predicts the dissonance score, clamped to [1, 10].
    pub fn evaluate(coefficients: &ModelCoefficients, inputs: &DilemmaInputs) -> PredictedScore {
        PredictedScore::from_raw(Self::raw_score(coefficients, &inputs.indicators()))
    }

    /// Unclamped model output for a set of indicators.
    pub fn raw_score(coefficients: &ModelCoefficients, indicators: &DerivedIndicators) -> f64 {
        let c = coefficients;
        let aligned = indicators.aligned.value();
        let positive = indicators.positive.value();
        let liberal = indicators.liberal.value();

        c.intercept
            + c.aligned * aligned
            + c.positive * positive
            + c.liberal * liberal
            + c.aligned_positive * aligned * positive
            + c.aligned_liberal * aligned * liberal
            + c.positive_liberal * positive * liberal
            + c.aligned_positive_liberal * aligned * positive * liberal
    }

    /// Score of a fully conservative person.
    ///
    /// Sums only the terms without a liberal factor.
    pub fn conservative_endpoint(
        coefficients: &ModelCoefficients,
        indicators: &DerivedIndicators,
    ) -> PredictedScore {
        let raw = coefficients
            .terms()
            .filter(|(term, _)| !term.involves_liberal())
            .map(|(term, coefficient)| coefficient * term.indicator_product(indicators))
            .sum::<f64>();
        PredictedScore::from_raw(raw)
    }

    /// Score of a fully liberal person.
    pub fn liberal_endpoint(
        coefficients: &ModelCoefficients,
        indicators: &DerivedIndicators,
    ) -> PredictedScore {
        let pinned = indicators.with_liberal(UnitInterval::ONE);
        PredictedScore::from_raw(Self::raw_score(coefficients, &pinned))
    }

    /// Both spectrum endpoints for the current alignment and valence.
    pub fn endpoints(
        coefficients: &ModelCoefficients,
        indicators: &DerivedIndicators,
    ) -> SpectrumEndpoints {
        SpectrumEndpoints {
            conservative: Self::conservative_endpoint(coefficients, indicators),
            liberal: Self::liberal_endpoint(coefficients, indicators),
        }
    }

    /// Evaluates the inputs and bundles everything the display needs.
    pub fn assess(coefficients: &ModelCoefficients, inputs: &DilemmaInputs) -> Evaluation {
        let indicators = inputs.indicators();
        let raw = Self::raw_score(coefficients, &indicators);
        let score = PredictedScore::from_raw(raw);

        Evaluation {
            inputs: *inputs,
            indicators,
            raw,
            score,
            band: score.band(),
            endpoints: Self::endpoints(coefficients, &indicators),
        }
    }
}
