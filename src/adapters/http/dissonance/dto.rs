//! HTTP DTOs for dissonance endpoints.
//!
//! The domain view models are already designed for serialization,
//! so we re-export them directly.

pub use crate::application::handlers::{ModelDescription, TermDescription};
pub use crate::domain::dashboard::{DissonanceDashboard, InputAdjustment};

use serde::{Deserialize, Serialize};

use crate::application::handlers::EvaluateDilemmaCommand;
use crate::domain::foundation::DomainError;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Query parameters carrying the control positions.
///
/// Missing controls sit at their default position.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DilemmaParams {
    pub ideology: Option<f64>,
    pub conflict: Option<f64>,
    pub negativity: Option<f64>,
}

impl From<DilemmaParams> for EvaluateDilemmaCommand {
    fn from(params: DilemmaParams) -> Self {
        let defaults = EvaluateDilemmaCommand::default();
        EvaluateDilemmaCommand::new(
            params.ideology.unwrap_or(defaults.ideology),
            params.conflict.unwrap_or(defaults.conflict),
            params.negativity.unwrap_or(defaults.negativity),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&DomainError> for ErrorResponse {
    fn from(error: &DomainError) -> Self {
        let details = if error.details.is_empty() {
            None
        } else {
            Some(serde_json::Value::Object(
                error
                    .details
                    .iter()
                    .map(|(key, value)| (key.clone(), serde_json::Value::String(value.clone())))
                    .collect(),
            ))
        };

        Self {
            code: error.code().to_string(),
            message: error.message().to_string(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn missing_params_default_to_midpoint() {
        let command: EvaluateDilemmaCommand = DilemmaParams::default().into();
        assert_eq!(command, EvaluateDilemmaCommand::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn provided_params_override_defaults() {
        let params = DilemmaParams {
            ideology: Some(1.0),
            conflict: None,
            negativity: Some(0.0),
        };
        let command: EvaluateDilemmaCommand = params.into();
        assert_eq!(command, EvaluateDilemmaCommand::new(1.0, 0.5, 0.0));
    }

    #[test]
    fn error_response_omits_empty_details() {
        let error = DomainError::new(ErrorCode::InvalidQuery, "nope");
        let json = serde_json::to_string(&ErrorResponse::from(&error)).unwrap();
        assert_eq!(json, r#"{"code":"INVALID_QUERY","message":"nope"}"#);
    }

    #[test]
    fn error_response_carries_details() {
        let error = DomainError::new(ErrorCode::RenderFailed, "Template error: boom")
            .with_detail("content_type", "text/html; charset=utf-8");
        let response = ErrorResponse::from(&error);

        assert_eq!(response.code, "RENDER_FAILED");
        assert_eq!(
            response.details,
            Some(serde_json::json!({ "content_type": "text/html; charset=utf-8" }))
        );
    }
}
