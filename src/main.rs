use std::sync::Arc;

use tracing::info;

use dissonance_predictor::adapters::html::HtmlDashboardRenderer;
use dissonance_predictor::adapters::http::{app_router, DissonanceAppState};
use dissonance_predictor::application::EvaluateDilemmaHandler;
use dissonance_predictor::config::AppConfig;
use dissonance_predictor::domain::dissonance::ModelCoefficients;
use dissonance_predictor::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    telemetry::init_tracing(&config);

    let state = DissonanceAppState::new(
        EvaluateDilemmaHandler::new(ModelCoefficients::STUDY),
        Arc::new(HtmlDashboardRenderer::from_features(&config.features)),
    );
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        environment = config.server.environment.as_str(),
        "Dissonance predictor listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
