//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for toggling optional page sections and log format
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Show the expandable model formula panel
    #[serde(default = "default_true")]
    pub show_model_panel: bool,

    /// Show the ethics and data privacy panel
    #[serde(default = "default_true")]
    pub show_ethics_panel: bool,

    /// Show the sample size caveat
    #[serde(default = "default_true")]
    pub show_sample_note: bool,

    /// Emit JSON logs outside production
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            show_model_panel: true,
            show_ethics_panel: true,
            show_sample_note: true,
            json_logs: false,
        }
    }
}

fn default_true() -> bool {
    true
}
