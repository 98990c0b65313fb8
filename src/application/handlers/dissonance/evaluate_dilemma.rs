//! EvaluateDilemmaHandler - Event handler for a change to any input control.
//!
//! Every change re-runs the full evaluation from scratch; nothing is carried
//! between invocations.

use tracing::{debug, warn};

use crate::domain::dashboard::{DissonanceDashboard, InputAdjustment};
use crate::domain::dissonance::{
    DilemmaInputs, DissonanceError, DissonanceEvaluator, InputControl, ModelCoefficients,
};
use crate::domain::foundation::UnitInterval;

/// Raw control positions as received from the UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluateDilemmaCommand {
    pub ideology: f64,
    pub conflict: f64,
    pub negativity: f64,
}

impl EvaluateDilemmaCommand {
    pub fn new(ideology: f64, conflict: f64, negativity: f64) -> Self {
        Self {
            ideology,
            conflict,
            negativity,
        }
    }

    fn get(&self, control: InputControl) -> f64 {
        match control {
            InputControl::Ideology => self.ideology,
            InputControl::Conflict => self.conflict,
            InputControl::Negativity => self.negativity,
        }
    }
}

impl Default for EvaluateDilemmaCommand {
    fn default() -> Self {
        let value = InputControl::DEFAULT_VALUE.value();
        Self::new(value, value, value)
    }
}

/// Result of evaluating a dilemma.
pub type EvaluateDilemmaResult = DissonanceDashboard;

/// Handler that evaluates the model for the current control positions.
///
/// Out-of-range positions are a caller bug: they are logged, clamped to the
/// nearest bound and reported on the dashboard rather than failing the view.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluateDilemmaHandler {
    coefficients: ModelCoefficients,
}

impl EvaluateDilemmaHandler {
    pub fn new(coefficients: ModelCoefficients) -> Self {
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &ModelCoefficients {
        &self.coefficients
    }

    pub fn handle(&self, command: EvaluateDilemmaCommand) -> EvaluateDilemmaResult {
        let (inputs, adjustments) = match DilemmaInputs::try_new(
            command.ideology,
            command.conflict,
            command.negativity,
        ) {
            Ok(inputs) => (inputs, Vec::new()),
            Err(DissonanceError::OutOfRangeInput { .. }) => clamp_inputs(&command),
        };

        let evaluation = DissonanceEvaluator::assess(&self.coefficients, &inputs);
        debug!(
            ideology = inputs.ideology.value(),
            conflict = inputs.conflict.value(),
            negativity = inputs.negativity.value(),
            raw = evaluation.raw,
            score = evaluation.score.value(),
            band = evaluation.band.label(),
            "Evaluated dilemma"
        );

        DissonanceDashboard::from_evaluation(&evaluation, &self.coefficients)
            .with_adjustments(adjustments)
    }
}

fn clamp_inputs(command: &EvaluateDilemmaCommand) -> (DilemmaInputs, Vec<InputAdjustment>) {
    let mut adjustments = Vec::new();
    let mut clamp = |control: InputControl| {
        let requested = command.get(control);
        match UnitInterval::try_new(requested) {
            Ok(value) => value,
            Err(_) => {
                let applied = UnitInterval::saturating(requested, InputControl::DEFAULT_VALUE);
                warn!(
                    control = control.key(),
                    requested,
                    applied = applied.value(),
                    "Input out of range, clamping"
                );
                adjustments.push(InputAdjustment {
                    control,
                    requested,
                    applied,
                });
                applied
            }
        }
    };

    let inputs = DilemmaInputs::new(
        clamp(InputControl::Ideology),
        clamp(InputControl::Conflict),
        clamp(InputControl::Negativity),
    );
    (inputs, adjustments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dissonance::DissonanceBand;

    fn handler() -> EvaluateDilemmaHandler {
        EvaluateDilemmaHandler::new(ModelCoefficients::STUDY)
    }

    #[test]
    fn default_command_sits_at_midpoint() {
        let command = EvaluateDilemmaCommand::default();
        assert_eq!(command, EvaluateDilemmaCommand::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn handle_evaluates_valid_inputs_without_adjustments() {
        let dashboard = handler().handle(EvaluateDilemmaCommand::new(1.0, 0.0, 0.0));

        assert!((dashboard.score.value() - 2.127255).abs() < 1e-4);
        assert_eq!(dashboard.band, DissonanceBand::Low);
        assert!(dashboard.adjustments.is_empty());
    }

    #[test]
    fn handle_clamps_out_of_range_input_and_reports_it() {
        let dashboard = handler().handle(EvaluateDilemmaCommand::new(1.5, 0.0, 0.0));

        assert_eq!(dashboard.adjustments.len(), 1);
        let adjustment = dashboard.adjustments[0];
        assert_eq!(adjustment.control, InputControl::Ideology);
        assert_eq!(adjustment.requested, 1.5);
        assert_eq!(adjustment.applied, UnitInterval::ONE);

        let in_range = handler().handle(EvaluateDilemmaCommand::new(1.0, 0.0, 0.0));
        assert_eq!(dashboard.score, in_range.score);
    }

    #[test]
    fn handle_reports_every_offending_control() {
        let dashboard = handler().handle(EvaluateDilemmaCommand::new(-0.2, 0.4, 7.0));

        let controls: Vec<_> = dashboard.adjustments.iter().map(|a| a.control).collect();
        assert_eq!(controls, vec![InputControl::Ideology, InputControl::Negativity]);
        assert_eq!(
            dashboard.control(InputControl::Ideology).unwrap().value,
            UnitInterval::ZERO
        );
        assert_eq!(
            dashboard.control(InputControl::Conflict).unwrap().value.value(),
            0.4
        );
    }

    #[test]
    fn handle_maps_nan_to_default_position() {
        let dashboard = handler().handle(EvaluateDilemmaCommand::new(0.5, f64::NAN, 0.5));

        assert_eq!(dashboard.adjustments.len(), 1);
        assert_eq!(dashboard.adjustments[0].applied, InputControl::DEFAULT_VALUE);
        let midpoint = handler().handle(EvaluateDilemmaCommand::default());
        assert_eq!(dashboard.score, midpoint.score);
    }

    #[test]
    fn handle_uses_configured_coefficients() {
        let coefficients = ModelCoefficients {
            intercept: 50.0,
            ..ModelCoefficients::ZERO
        };
        let dashboard = EvaluateDilemmaHandler::new(coefficients).handle(Default::default());

        assert_eq!(dashboard.score.value(), 10.0);
        assert_eq!(dashboard.band, DissonanceBand::High);
        assert!(dashboard.formula.starts_with("Score = 50.00"));
    }
}
