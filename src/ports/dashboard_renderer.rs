use crate::domain::dashboard::DissonanceDashboard;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Render step for the calculator: turns a dashboard into a response body.
pub trait DashboardRenderer: Send + Sync {
    /// MIME type of the rendered output.
    fn content_type(&self) -> &'static str;

    fn render(&self, dashboard: &DissonanceDashboard) -> Result<String, RenderError>;
}

/// Errors that can occur while rendering a dashboard
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(String),
}

impl From<std::fmt::Error> for RenderError {
    fn from(err: std::fmt::Error) -> Self {
        RenderError::Template(err.to_string())
    }
}

impl From<RenderError> for DomainError {
    fn from(err: RenderError) -> Self {
        DomainError::new(ErrorCode::RenderFailed, err.to_string())
    }
}
