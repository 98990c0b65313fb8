//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `dissonance` - Pure evaluation of the dissonance prediction model
//! - `dashboard` - View model assembled from an evaluation for display

pub mod dashboard;
pub mod dissonance;
pub mod foundation;
