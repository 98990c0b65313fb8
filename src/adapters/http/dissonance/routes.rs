//! HTTP routes for dissonance endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_calculator_page, get_dissonance, get_model, health, DissonanceAppState};

/// Creates the dissonance router with all routes.
pub fn dissonance_routes(state: DissonanceAppState) -> Router {
    Router::new()
        // GET /?ideology=&conflict=&negativity=
        .route("/", get(get_calculator_page))
        // GET /api/dissonance?ideology=&conflict=&negativity=
        .route("/api/dissonance", get(get_dissonance))
        // GET /api/model
        .route("/api/model", get(get_model))
        .route("/health", get(health))
        .with_state(state)
}
