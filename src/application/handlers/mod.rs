//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod dissonance;

pub use dissonance::{
    DescribeModelHandler, EvaluateDilemmaCommand, EvaluateDilemmaHandler, EvaluateDilemmaResult,
    ModelDescription, RenderDashboardHandler, RenderedDashboard, TermDescription,
};
