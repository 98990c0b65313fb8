//! RenderDashboardHandler - Evaluates the controls and feeds the result to a
//! render step.

use std::sync::Arc;

use tracing::error;

use super::{EvaluateDilemmaCommand, EvaluateDilemmaHandler};
use crate::ports::{DashboardRenderer, RenderError};

/// Rendered response body with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDashboard {
    pub content_type: &'static str,
    pub body: String,
}

pub struct RenderDashboardHandler {
    evaluator: EvaluateDilemmaHandler,
    renderer: Arc<dyn DashboardRenderer>,
}

impl RenderDashboardHandler {
    pub fn new(evaluator: EvaluateDilemmaHandler, renderer: Arc<dyn DashboardRenderer>) -> Self {
        Self {
            evaluator,
            renderer,
        }
    }

    pub fn handle(&self, command: EvaluateDilemmaCommand) -> Result<RenderedDashboard, RenderError> {
        let dashboard = self.evaluator.handle(command);
        let body = self.renderer.render(&dashboard).map_err(|e| {
            error!("Dashboard render failed: {}", e);
            e
        })?;

        Ok(RenderedDashboard {
            content_type: self.renderer.content_type(),
            body,
        })
    }
}
