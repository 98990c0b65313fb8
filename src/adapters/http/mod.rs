//! HTTP adapters - REST API and page implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! `app_router` wraps them in the cross-cutting tower layers.

pub mod dissonance;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

// Re-export key types for convenience
pub use dissonance::dissonance_routes;
pub use dissonance::DissonanceAppState;

/// Builds the full application router with tracing, timeout, CORS and
/// compression layers.
pub fn app_router(state: DissonanceAppState, server: &ServerConfig) -> Router {
    dissonance_routes(state)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
}

/// CORS for the configured origins. No origins means same-origin only.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET])
}
