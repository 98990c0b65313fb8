//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

static INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `server.log_level`. Output is JSON in
/// production or when `features.json_logs` is set.
///
/// Calling this more than once is a no-op.
pub fn init_tracing(config: &AppConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true);

        if config.json_logs() {
            builder.json().init();
        } else {
            builder.init();
        }
    });
}
