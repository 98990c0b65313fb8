//! Error types for the dissonance evaluator.

use thiserror::Error;

use super::InputControl;

/// Errors raised while building evaluator inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DissonanceError {
    #[error("Input '{control}' must be between 0 and 1, got {value}")]
    OutOfRangeInput { control: InputControl, value: f64 },
}
