//! Dilemma inputs, their controls, and the indicators derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::DissonanceError;
use crate::domain::foundation::UnitInterval;

/// The three continuous controls that describe a dilemma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputControl {
    Ideology,
    Conflict,
    Negativity,
}

impl InputControl {
    /// Controls in display order.
    pub const ALL: [InputControl; 3] = [
        InputControl::Ideology,
        InputControl::Conflict,
        InputControl::Negativity,
    ];

    /// Value every control starts at.
    pub const DEFAULT_VALUE: UnitInterval = UnitInterval::HALF;

    /// Query/field name of the control.
    pub fn key(&self) -> &'static str {
        match self {
            InputControl::Ideology => "ideology",
            InputControl::Conflict => "conflict",
            InputControl::Negativity => "negativity",
        }
    }

    /// Heading shown above the control.
    pub fn heading(&self) -> &'static str {
        match self {
            InputControl::Ideology => "1. Select the person's ideology on a spectrum:",
            InputControl::Conflict => "2. Select the degree of ideological alignment:",
            InputControl::Negativity => "3. Select the nature of the personal outcome:",
        }
    }

    /// Label at the 0.0 end.
    pub fn low_label(&self) -> &'static str {
        match self {
            InputControl::Ideology => "Conservative",
            InputControl::Conflict => "Aligned",
            InputControl::Negativity => "Positive",
        }
    }

    /// Label at the 1.0 end.
    pub fn high_label(&self) -> &'static str {
        match self {
            InputControl::Ideology => "Liberal",
            InputControl::Conflict => "Conflicting",
            InputControl::Negativity => "Negative",
        }
    }

    pub fn help(&self) -> &'static str {
        match self {
            InputControl::Ideology => {
                "0.0 represents a strong conservative, 1.0 a strong liberal, and 0.5 a perfect moderate."
            }
            InputControl::Conflict => {
                "0.0 represents a choice perfectly aligned with ideology, 1.0 a choice in direct conflict."
            }
            InputControl::Negativity => {
                "0.0 represents a clearly positive personal outcome, 1.0 a clearly negative outcome."
            }
        }
    }
}

impl fmt::Display for InputControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Position of each control for a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DilemmaInputs {
    /// 0 = conservative, 1 = liberal.
    pub ideology: UnitInterval,
    /// 0 = aligned with ideology, 1 = in direct conflict.
    pub conflict: UnitInterval,
    /// 0 = clearly positive outcome, 1 = clearly negative.
    pub negativity: UnitInterval,
}

impl DilemmaInputs {
    pub fn new(ideology: UnitInterval, conflict: UnitInterval, negativity: UnitInterval) -> Self {
        Self {
            ideology,
            conflict,
            negativity,
        }
    }

    /// Builds inputs from raw control values.
    ///
    /// # Errors
    ///
    /// `OutOfRangeInput` for the first value outside [0, 1] (NaN included).
    pub fn try_new(ideology: f64, conflict: f64, negativity: f64) -> Result<Self, DissonanceError> {
        Ok(Self {
            ideology: checked(InputControl::Ideology, ideology)?,
            conflict: checked(InputControl::Conflict, conflict)?,
            negativity: checked(InputControl::Negativity, negativity)?,
        })
    }

    /// Returns the value of one control.
    pub fn get(&self, control: InputControl) -> UnitInterval {
        match control {
            InputControl::Ideology => self.ideology,
            InputControl::Conflict => self.conflict,
            InputControl::Negativity => self.negativity,
        }
    }

    /// Derives the model's dummy indicators.
    pub fn indicators(&self) -> DerivedIndicators {
        DerivedIndicators {
            aligned: self.conflict.complement(),
            positive: self.negativity.complement(),
            liberal: self.ideology,
        }
    }
}

fn checked(control: InputControl, value: f64) -> Result<UnitInterval, DissonanceError> {
    UnitInterval::try_new(value).map_err(|_| DissonanceError::OutOfRangeInput { control, value })
}

/// Indicator fractions the model's terms are written in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedIndicators {
    /// `1 - conflict`
    pub aligned: UnitInterval,
    /// `1 - negativity`
    pub positive: UnitInterval,
    /// `ideology`
    pub liberal: UnitInterval,
}

impl DerivedIndicators {
    /// Same indicators with the liberal indicator pinned.
    pub fn with_liberal(self, liberal: UnitInterval) -> Self {
        Self { liberal, ..self }
    }
}
