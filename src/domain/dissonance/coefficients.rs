//! Fixed-effects coefficients of the three-way interaction model.

use serde::Serialize;

use super::DerivedIndicators;

/// Estimates of fixed effects for the dissonance model.
///
/// Each effect is coded against its reference category: `aligned` is
/// `[Alignment=0]`, `positive` is `[Valence=0]`, `liberal` is `[Ideology=1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelCoefficients {
    pub intercept: f64,

    // Main effects
    pub aligned: f64,
    pub positive: f64,
    pub liberal: f64,

    // Two-way interactions
    pub aligned_positive: f64,
    pub aligned_liberal: f64,
    pub positive_liberal: f64,

    // Three-way interaction
    pub aligned_positive_liberal: f64,
}

impl ModelCoefficients {
    /// Estimates from the study's linear mixed-effects model.
    pub const STUDY: Self = Self {
        intercept: 3.229951,
        aligned: -1.090593,
        positive: -0.236102,
        liberal: 1.865681,
        aligned_positive: 0.421149,
        aligned_liberal: -0.420593,
        positive_liberal: -0.173966,
        aligned_positive_liberal: -1.468272,
    };

    /// All terms zero. Useful as a base for synthetic coefficient sets.
    pub const ZERO: Self = Self {
        intercept: 0.0,
        aligned: 0.0,
        positive: 0.0,
        liberal: 0.0,
        aligned_positive: 0.0,
        aligned_liberal: 0.0,
        positive_liberal: 0.0,
        aligned_positive_liberal: 0.0,
    };

    /// Returns the coefficient attached to a term.
    pub fn coefficient(&self, term: FormulaTerm) -> f64 {
        match term {
            FormulaTerm::Intercept => self.intercept,
            FormulaTerm::Aligned => self.aligned,
            FormulaTerm::Positive => self.positive,
            FormulaTerm::Liberal => self.liberal,
            FormulaTerm::AlignedPositive => self.aligned_positive,
            FormulaTerm::AlignedLiberal => self.aligned_liberal,
            FormulaTerm::PositiveLiberal => self.positive_liberal,
            FormulaTerm::AlignedPositiveLiberal => self.aligned_positive_liberal,
        }
    }

    /// Returns `(term, coefficient)` pairs in formula order.
    pub fn terms(&self) -> impl Iterator<Item = (FormulaTerm, f64)> + '_ {
        FormulaTerm::ALL
            .iter()
            .map(move |term| (*term, self.coefficient(*term)))
    }
}

impl Default for ModelCoefficients {
    fn default() -> Self {
        Self::STUDY
    }
}

/// One additive term of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaTerm {
    Intercept,
    Aligned,
    Positive,
    Liberal,
    AlignedPositive,
    AlignedLiberal,
    PositiveLiberal,
    AlignedPositiveLiberal,
}

impl FormulaTerm {
    /// Every term, in the order the formula is written.
    pub const ALL: [FormulaTerm; 8] = [
        FormulaTerm::Intercept,
        FormulaTerm::Aligned,
        FormulaTerm::Positive,
        FormulaTerm::Liberal,
        FormulaTerm::AlignedPositive,
        FormulaTerm::AlignedLiberal,
        FormulaTerm::PositiveLiberal,
        FormulaTerm::AlignedPositiveLiberal,
    ];

    /// Indicator product as written in the formula, `None` for the intercept.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            FormulaTerm::Intercept => None,
            FormulaTerm::Aligned => Some("IsAligned"),
            FormulaTerm::Positive => Some("IsPositive"),
            FormulaTerm::Liberal => Some("IsLiberal"),
            FormulaTerm::AlignedPositive => Some("IsAligned * IsPositive"),
            FormulaTerm::AlignedLiberal => Some("IsAligned * IsLiberal"),
            FormulaTerm::PositiveLiberal => Some("IsPositive * IsLiberal"),
            FormulaTerm::AlignedPositiveLiberal => Some("IsAligned * IsPositive * IsLiberal"),
        }
    }

    /// True if the liberal indicator is a factor of this term.
    pub fn involves_liberal(&self) -> bool {
        matches!(
            self,
            FormulaTerm::Liberal
                | FormulaTerm::AlignedLiberal
                | FormulaTerm::PositiveLiberal
                | FormulaTerm::AlignedPositiveLiberal
        )
    }

    /// Product of the indicators this term multiplies.
    pub fn indicator_product(&self, indicators: &DerivedIndicators) -> f64 {
        let aligned = indicators.aligned.value();
        let positive = indicators.positive.value();
        let liberal = indicators.liberal.value();
        match self {
            FormulaTerm::Intercept => 1.0,
            FormulaTerm::Aligned => aligned,
            FormulaTerm::Positive => positive,
            FormulaTerm::Liberal => liberal,
            FormulaTerm::AlignedPositive => aligned * positive,
            FormulaTerm::AlignedLiberal => aligned * liberal,
            FormulaTerm::PositiveLiberal => positive * liberal,
            FormulaTerm::AlignedPositiveLiberal => aligned * positive * liberal,
        }
    }
}
