//! Human-readable rendering of the model formula.

use super::ModelCoefficients;

/// Renders the formula with each coefficient at two decimals.
///
/// ```
/// use dissonance_predictor::domain::dissonance::{render_formula, ModelCoefficients};
///
/// let text = render_formula(&ModelCoefficients::STUDY);
/// assert!(text.starts_with("Score = 3.23"));
/// ```
pub fn render_formula(coefficients: &ModelCoefficients) -> String {
    let mut text = String::new();
    for (term, coefficient) in coefficients.terms() {
        match term.label() {
            None => text.push_str(&format!("Score = {:.2}", coefficient)),
            Some(label) => text.push_str(&format!("\n        + ({:.2} * {})", coefficient, label)),
        }
    }
    text
}
