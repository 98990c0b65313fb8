//! HTTP handlers for dissonance endpoints.
//!
//! These handlers connect Axum routes to application layer handlers.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Json, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::application::handlers::{
    DescribeModelHandler, EvaluateDilemmaHandler, RenderDashboardHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::DashboardRenderer;

use super::dto::{DilemmaParams, DissonanceDashboard, ErrorResponse, ModelDescription};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Dissonance API error that implements IntoResponse.
#[derive(Debug)]
pub struct DissonanceApiError(DomainError);

impl DissonanceApiError {
    pub fn domain_error(&self) -> &DomainError {
        &self.0
    }
}

impl IntoResponse for DissonanceApiError {
    fn into_response(self) -> Response {
        handle_dissonance_error(self.0)
    }
}

impl From<DomainError> for DissonanceApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl From<QueryRejection> for DissonanceApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(DomainError::new(ErrorCode::InvalidQuery, rejection.body_text()))
    }
}

fn handle_dissonance_error(error: DomainError) -> Response {
    let status = match error.code() {
        ErrorCode::InvalidQuery => StatusCode::BAD_REQUEST,
        ErrorCode::RenderFailed => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorResponse::from(&error))).into_response()
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state. Immutable; every request evaluates afresh.
#[derive(Clone)]
pub struct DissonanceAppState {
    pub evaluator: EvaluateDilemmaHandler,
    pub renderer: Arc<dyn DashboardRenderer>,
}

impl DissonanceAppState {
    pub fn new(evaluator: EvaluateDilemmaHandler, renderer: Arc<dyn DashboardRenderer>) -> Self {
        Self {
            evaluator,
            renderer,
        }
    }

    pub fn render_dashboard_handler(&self) -> RenderDashboardHandler {
        RenderDashboardHandler::new(self.evaluator, self.renderer.clone())
    }

    pub fn describe_model_handler(&self) -> DescribeModelHandler {
        DescribeModelHandler::new(*self.evaluator.coefficients())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /?ideology=&conflict=&negativity=
///
/// Returns the rendered calculator page for the given control positions.
pub async fn get_calculator_page(
    State(state): State<DissonanceAppState>,
    params: Result<Query<DilemmaParams>, QueryRejection>,
) -> Result<Response, DissonanceApiError> {
    let Query(params) = params?;

    let handler = state.render_dashboard_handler();
    let rendered = handler.handle(params.into()).map_err(|e| {
        DomainError::from(e).with_detail("content_type", state.renderer.content_type())
    })?;

    Ok(([(header::CONTENT_TYPE, rendered.content_type)], rendered.body).into_response())
}

/// GET /api/dissonance?ideology=&conflict=&negativity=
///
/// Returns the dashboard view model as JSON.
pub async fn get_dissonance(
    State(state): State<DissonanceAppState>,
    params: Result<Query<DilemmaParams>, QueryRejection>,
) -> Result<Json<DissonanceDashboard>, DissonanceApiError> {
    let Query(params) = params?;

    let dashboard = state.evaluator.handle(params.into());

    Ok(Json(dashboard))
}

/// GET /api/model
///
/// Returns the coefficient table and formula text.
pub async fn get_model(State(state): State<DissonanceAppState>) -> Json<ModelDescription> {
    Json(state.describe_model_handler().handle())
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
