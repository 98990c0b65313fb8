//! Dissonance HTTP adapter module.
//!
//! Exposes the calculator over HTTP:
//! - `GET /` - Rendered calculator page
//! - `GET /api/dissonance` - Dashboard view model as JSON
//! - `GET /api/model` - Coefficients and formula text
//! - `GET /health` - Liveness probe

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{DissonanceApiError, DissonanceAppState};
pub use routes::dissonance_routes;
