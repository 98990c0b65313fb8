//! DescribeModelHandler - Query handler for the model reference panel.

use serde::Serialize;

use crate::domain::dashboard::ReferenceNotes;
use crate::domain::dissonance::{render_formula, ModelCoefficients};

/// Coefficients, formula and notes for documentation displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescription {
    pub coefficients: ModelCoefficients,
    pub terms: Vec<TermDescription>,
    pub formula: String,
    pub notes: ReferenceNotes,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermDescription {
    /// `None` for the intercept
    pub label: Option<&'static str>,
    pub coefficient: f64,
    pub involves_liberal: bool,
}

pub struct DescribeModelHandler {
    coefficients: ModelCoefficients,
}

impl DescribeModelHandler {
    pub fn new(coefficients: ModelCoefficients) -> Self {
        Self { coefficients }
    }

    pub fn handle(&self) -> ModelDescription {
        ModelDescription {
            coefficients: self.coefficients,
            terms: self
                .coefficients
                .terms()
                .map(|(term, coefficient)| TermDescription {
                    label: term.label(),
                    coefficient,
                    involves_liberal: term.involves_liberal(),
                })
                .collect(),
            formula: render_formula(&self.coefficients),
            notes: ReferenceNotes::default(),
        }
    }
}
