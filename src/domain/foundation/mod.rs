//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the Dissonance Predictor domain.

mod errors;
mod unit_interval;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use unit_interval::UnitInterval;
