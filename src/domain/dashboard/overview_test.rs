#[cfg(test)]
mod tests {
    use crate::domain::dashboard::overview::{DissonanceDashboard, InputAdjustment};
    use crate::domain::dissonance::{
        DilemmaInputs, DissonanceBand, DissonanceEvaluator, InputControl, ModelCoefficients, Tone,
    };
    use crate::domain::foundation::UnitInterval;

    fn dashboard_for(ideology: f64, conflict: f64, negativity: f64) -> DissonanceDashboard {
        let coefficients = ModelCoefficients::STUDY;
        let inputs = DilemmaInputs::try_new(ideology, conflict, negativity).unwrap();
        let evaluation = DissonanceEvaluator::assess(&coefficients, &inputs);
        DissonanceDashboard::from_evaluation(&evaluation, &coefficients)
    }

    #[test]
    fn test_dashboard_serializes_camel_case() {
        let dashboard = dashboard_for(0.5, 0.5, 0.5);

        let json = serde_json::to_string(&dashboard).unwrap();
        assert!(json.contains("scoreDisplay"));
        assert!(json.contains("rawScore"));
        assert!(json.contains("lowLabel"));
        assert!(json.contains("\"band\":\"moderate\""));
    }

    #[test]
    fn test_dashboard_readout_for_midpoint() {
        let dashboard = dashboard_for(0.5, 0.5, 0.5);

        assert_eq!(dashboard.score_display, "3.27");
        assert_eq!(dashboard.band, DissonanceBand::Moderate);
        assert_eq!(dashboard.headline, "Moderate Dissonance");
        assert_eq!(dashboard.tone, Tone::Warning);
        assert!(dashboard.message.contains("3.27"));
        assert!((dashboard.progress - dashboard.score.value() / 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_dashboard_lists_controls_in_order() {
        let dashboard = dashboard_for(0.2, 0.4, 0.9);

        let keys: Vec<_> = dashboard.controls.iter().map(|c| c.control).collect();
        assert_eq!(keys, InputControl::ALL.to_vec());
        assert_eq!(
            dashboard.control(InputControl::Negativity).unwrap().value.value(),
            0.9
        );
    }

    #[test]
    fn test_dashboard_spectrum_uses_endpoints() {
        let dashboard = dashboard_for(0.5, 0.0, 0.0);

        assert_eq!(dashboard.spectrum.conservative.label, "Conservative Endpoint: 2.32");
        assert_eq!(dashboard.spectrum.liberal.label, "Liberal Endpoint: 2.13");
        assert_eq!(dashboard.spectrum.selection.value, dashboard.score.value());
    }

    #[test]
    fn test_dashboard_formula_matches_coefficients() {
        let dashboard = dashboard_for(0.5, 0.5, 0.5);
        assert!(dashboard.formula.starts_with("Score = 3.23"));
        assert!(dashboard.formula.contains("(1.87 * IsLiberal)"));
    }

    #[test]
    fn test_adjustments_omitted_when_empty() {
        let dashboard = dashboard_for(0.5, 0.5, 0.5);
        let json = serde_json::to_string(&dashboard).unwrap();
        assert!(!json.contains("adjustments"));
    }

    #[test]
    fn test_adjustments_serialized_when_present() {
        let dashboard = dashboard_for(1.0, 0.5, 0.5).with_adjustments(vec![InputAdjustment {
            control: InputControl::Ideology,
            requested: 1.4,
            applied: UnitInterval::ONE,
        }]);

        let json = serde_json::to_value(&dashboard).unwrap();
        assert_eq!(json["adjustments"][0]["control"], "ideology");
        assert_eq!(json["adjustments"][0]["requested"], 1.4);
        assert_eq!(json["adjustments"][0]["applied"], 1.0);
    }
}
