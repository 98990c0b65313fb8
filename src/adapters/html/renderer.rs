//! HTML page renderer for the calculator dashboard.

use std::fmt::Write;

use super::{escape_html, render_spectrum_svg};
use crate::config::FeatureFlags;
use crate::domain::dashboard::{ControlView, DissonanceDashboard};
use crate::ports::{DashboardRenderer, RenderError};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 1200px; padding: 0 1rem; }
.layout { display: grid; grid-template-columns: 1fr 2fr; gap: 2rem; }
.control input[type=range] { width: 100%; }
.control .labels { display: flex; justify-content: space-between; font-size: 0.85rem; color: #666; }
.metric .label { display: block; font-size: 0.9rem; color: #666; }
.metric .value { font-size: 2.5rem; font-weight: 600; }
.alert { padding: 0.75rem 1rem; border-radius: 0.5rem; margin: 1rem 0; }
.alert.success { background: #e6f4ea; }
.alert.warning { background: #fff4e5; }
.alert.error { background: #fdecea; }
.alert.info { background: #e8f0fe; }
progress { width: 100%; height: 1rem; }
@media (max-width: 800px) { .layout { grid-template-columns: 1fr; } }
"#;

/// Renders the dashboard as a complete HTML page.
///
/// Controls sit in a GET form that resubmits on every change, so each
/// adjustment produces a fresh evaluation.
#[derive(Debug, Clone)]
pub struct HtmlDashboardRenderer {
    show_model_panel: bool,
    show_ethics_panel: bool,
    show_sample_note: bool,
}

impl HtmlDashboardRenderer {
    pub fn new() -> Self {
        Self {
            show_model_panel: true,
            show_ethics_panel: true,
            show_sample_note: true,
        }
    }

    pub fn from_features(features: &FeatureFlags) -> Self {
        Self {
            show_model_panel: features.show_model_panel,
            show_ethics_panel: features.show_ethics_panel,
            show_sample_note: features.show_sample_note,
        }
    }

    fn write_control(&self, html: &mut String, control: &ControlView) -> std::fmt::Result {
        let key = control.control.key();
        write!(
            html,
            r#"<div class="control"><p><strong>{heading}</strong></p><input type="range" id="{key}" name="{key}" min="0" max="1" step="0.01" value="{value}" title="{help}" aria-label="{low} to {high}" onchange="this.form.submit()"><div class="labels"><span>{low}</span><span>{high}</span></div></div>"#,
            heading = escape_html(control.heading),
            key = key,
            value = control.value.value(),
            help = escape_html(control.help),
            low = escape_html(control.low_label),
            high = escape_html(control.high_label),
        )
    }

    fn write_results(&self, html: &mut String, dashboard: &DissonanceDashboard) -> Result<(), RenderError> {
        html.push_str(r#"<section class="results"><h2>Predicted Dissonance Score</h2>"#);
        write!(
            html,
            r#"<div class="metric"><span class="label">Score (out of 10)</span><span class="value">{}</span></div>"#,
            escape_html(&dashboard.score_display),
        )?;

        for adjustment in &dashboard.adjustments {
            write!(
                html,
                r#"<div class="alert warning">Input '{}' was out of range ({}) and was clamped to {}.</div>"#,
                adjustment.control,
                adjustment.requested,
                adjustment.applied,
            )?;
        }

        write!(
            html,
            r#"<div class="alert {tone}" role="status"><strong>{headline}:</strong> {message}</div>"#,
            tone = dashboard.tone.as_str(),
            headline = escape_html(dashboard.headline),
            message = escape_html(&dashboard.message),
        )?;
        write!(
            html,
            r#"<progress max="1" value="{:.4}">{}</progress><hr>"#,
            dashboard.progress,
            escape_html(&dashboard.score_display),
        )?;

        html.push_str("<h3>Dissonance Across the Ideological Spectrum</h3>");
        html.push_str(&render_spectrum_svg(&dashboard.spectrum)?);
        html.push_str("</section>");
        Ok(())
    }

    fn write_model_panel(&self, html: &mut String, dashboard: &DissonanceDashboard) -> std::fmt::Result {
        let notes = &dashboard.notes;
        write!(
            html,
            "<details><summary>Click here to see the predictive model and its application</summary><p>{}</p><pre><code>{}</code></pre>",
            escape_html(notes.model_summary),
            escape_html(&dashboard.formula),
        )?;
        html.push_str("<ul><li><strong>How the Sliders Work:</strong> This tool simulates a continuous spectrum for all three factors.<ul>");
        for explanation in notes.slider_explanations {
            write!(html, "<li>{}</li>", escape_html(explanation))?;
        }
        html.push_str("</ul></li></ul></details>");
        Ok(())
    }

    fn write_ethics_panel(&self, html: &mut String, dashboard: &DissonanceDashboard) -> std::fmt::Result {
        html.push_str("<details><summary>A Note on Ethics and Data Privacy</summary><ul>");
        for point in dashboard.notes.ethics {
            write!(html, "<li>{}</li>", escape_html(point))?;
        }
        html.push_str("</ul></details>");
        Ok(())
    }
}

impl Default for HtmlDashboardRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardRenderer for HtmlDashboardRenderer {
    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }

    fn render(&self, dashboard: &DissonanceDashboard) -> Result<String, RenderError> {
        let notes = &dashboard.notes;
        let mut html = String::with_capacity(16 * 1024);

        write!(
            html,
            r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>Dissonance Predictor</title><style>{}</style></head><body>"#,
            STYLE,
        )?;
        write!(
            html,
            "<h1>\u{1f9e0} {}</h1><p>{}</p><hr>",
            escape_html(notes.title),
            escape_html(notes.introduction),
        )?;

        html.push_str(r#"<div class="layout"><form class="controls" method="get" action="/"><h2>Select the Dilemma Conditions:</h2>"#);
        for control in &dashboard.controls {
            self.write_control(&mut html, control)?;
        }
        write!(
            html,
            r#"<div class="alert warning">{}</div><noscript><button type="submit">Update</button></noscript></form>"#,
            escape_html(notes.slider_note),
        )?;

        self.write_results(&mut html, dashboard)?;
        html.push_str("</div><hr>");

        if self.show_model_panel {
            self.write_model_panel(&mut html, dashboard)?;
        }
        if self.show_ethics_panel {
            self.write_ethics_panel(&mut html, dashboard)?;
        }
        if self.show_sample_note {
            write!(
                html,
                r#"<div class="alert info">{}</div>"#,
                escape_html(notes.sample)
            )?;
        }

        html.push_str("</body></html>");
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::{EvaluateDilemmaCommand, EvaluateDilemmaHandler};
    use crate::domain::dissonance::ModelCoefficients;

    fn dashboard(command: EvaluateDilemmaCommand) -> DissonanceDashboard {
        EvaluateDilemmaHandler::new(ModelCoefficients::STUDY).handle(command)
    }

    #[test]
    fn renders_complete_page() {
        let html = HtmlDashboardRenderer::new()
            .render(&dashboard(EvaluateDilemmaCommand::default()))
            .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</body></html>"));
        assert!(html.contains("The Political Dissonance Predictor"));
        assert!(html.contains(r#"<span class="value">3.27</span>"#));
        assert!(html.contains("Moderate Dissonance"));
        assert!(html.contains(r#"class="alert warning" role="status""#));
        assert!(html.contains("<svg"));
    }

    #[test]
    fn renders_one_range_input_per_control() {
        let html = HtmlDashboardRenderer::new()
            .render(&dashboard(EvaluateDilemmaCommand::new(0.25, 0.5, 0.75)))
            .unwrap();

        assert_eq!(html.matches(r#"type="range""#).count(), 3);
        assert!(html.contains(r#"name="ideology" min="0" max="1" step="0.01" value="0.25""#));
        assert!(html.contains(r#"name="negativity" min="0" max="1" step="0.01" value="0.75""#));
        assert!(html.contains("<span>Conservative</span><span>Liberal</span>"));
    }

    #[test]
    fn renders_progress_as_tenth_of_score() {
        let html = HtmlDashboardRenderer::new()
            .render(&dashboard(EvaluateDilemmaCommand::new(1.0, 0.0, 0.0)))
            .unwrap();

        assert!(html.contains(r#"<progress max="1" value="0.2127">"#));
        assert!(html.contains(r#"class="alert success""#));
    }

    #[test]
    fn escapes_formula_and_notes() {
        let html = HtmlDashboardRenderer::new()
            .render(&dashboard(EvaluateDilemmaCommand::default()))
            .unwrap();

        assert!(html.contains("Score = 3.23"));
        assert!(html.contains("&quot;in-between&quot;"));
        assert!(html.contains("person&#39;s ideology"));
    }

    #[test]
    fn reports_clamped_inputs() {
        let html = HtmlDashboardRenderer::new()
            .render(&dashboard(EvaluateDilemmaCommand::new(2.0, 0.5, 0.5)))
            .unwrap();

        assert!(html.contains("Input 'ideology' was out of range (2) and was clamped to 1.00."));
    }

    #[test]
    fn hides_disabled_panels() {
        let features = FeatureFlags {
            show_model_panel: false,
            show_ethics_panel: false,
            show_sample_note: false,
            ..FeatureFlags::default()
        };
        let html = HtmlDashboardRenderer::from_features(&features)
            .render(&dashboard(EvaluateDilemmaCommand::default()))
            .unwrap();

        assert!(!html.contains("<details>"));
        assert!(!html.contains("99 participants"));
    }

    #[test]
    fn shows_panels_by_default() {
        let html = HtmlDashboardRenderer::default()
            .render(&dashboard(EvaluateDilemmaCommand::default()))
            .unwrap();

        assert_eq!(html.matches("<details>").count(), 2);
        assert!(html.contains("99 participants"));
    }

    #[test]
    fn content_type_is_html() {
        assert!(HtmlDashboardRenderer::new().content_type().starts_with("text/html"));
    }
}
