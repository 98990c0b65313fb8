//! Dissonance Module - Pure evaluation of the dissonance prediction model.
//!
//! The model is a linear mixed-effects fit with three binary predictors
//! (alignment, valence, ideology) and all of their interactions. The
//! calculator treats each predictor as a continuous fraction in [0, 1] so the
//! controls can interpolate between the tested conditions.
//!
//! # Components
//!
//! - `ModelCoefficients` - The eight fixed-effect estimates
//! - `DilemmaInputs` / `DerivedIndicators` - Control positions and the dummy
//!   indicators derived from them
//! - `DissonanceEvaluator` - Score, spectrum endpoints, full assessment
//! - `DissonanceBand` - High / moderate / low reading of a score
//! - `render_formula` - Text form of the model for reference panels
//!
//! Everything here is pure and stateless.

mod band;
mod coefficients;
mod errors;
mod evaluator;
mod formula;
mod inputs;
mod score;

pub use band::{DissonanceBand, Tone, HIGH_THRESHOLD, MODERATE_THRESHOLD};
pub use coefficients::{FormulaTerm, ModelCoefficients};
pub use errors::DissonanceError;
pub use evaluator::{DissonanceEvaluator, Evaluation, SpectrumEndpoints};
pub use formula::render_formula;
pub use inputs::{DerivedIndicators, DilemmaInputs, InputControl};
pub use score::PredictedScore;
