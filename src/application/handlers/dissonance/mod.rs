//! Dissonance calculator handlers.
//!
//! The calculator has no state: each handler call re-evaluates the model
//! from the command it is given.

mod describe_model;
mod evaluate_dilemma;
mod render_dashboard;

pub use describe_model::{DescribeModelHandler, ModelDescription, TermDescription};
pub use evaluate_dilemma::{
    EvaluateDilemmaCommand, EvaluateDilemmaHandler, EvaluateDilemmaResult,
};
pub use render_dashboard::{RenderDashboardHandler, RenderedDashboard};
