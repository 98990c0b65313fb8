//! UnitInterval value object (closed 0.0-1.0 range).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A finite value between 0.0 and 1.0 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct UnitInterval(f64);

impl UnitInterval {
    /// Lower bound.
    pub const ZERO: Self = Self(0.0);

    /// Midpoint, the resting position of every input control.
    pub const HALF: Self = Self(0.5);

    /// Upper bound.
    pub const ONE: Self = Self(1.0);

    /// Creates a UnitInterval, returning error if out of range or NaN.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range("unit_interval", 0.0, 1.0, value));
        }
        // -0.0 + 0.0 is +0.0
        Ok(Self(value + 0.0))
    }

    /// Creates a UnitInterval, clamping to the nearest bound.
    ///
    /// NaN has no nearest bound and maps to `fallback`.
    pub fn saturating(value: f64, fallback: Self) -> Self {
        if value.is_nan() {
            fallback
        } else {
            Self(value.clamp(0.0, 1.0) + 0.0)
        }
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns `1 - self`.
    pub fn complement(&self) -> Self {
        Self(1.0 - self.0)
    }
}

impl Default for UnitInterval {
    fn default() -> Self {
        Self::HALF
    }
}

impl TryFrom<f64> for UnitInterval {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<UnitInterval> for f64 {
    fn from(value: UnitInterval) -> Self {
        value.0
    }
}

impl fmt::Display for UnitInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_accepts_bounds_and_interior() {
        assert_eq!(UnitInterval::try_new(0.0).unwrap().value(), 0.0);
        assert_eq!(UnitInterval::try_new(0.25).unwrap().value(), 0.25);
        assert_eq!(UnitInterval::try_new(1.0).unwrap().value(), 1.0);
    }

    #[test]
    fn try_new_rejects_values_outside_range() {
        match UnitInterval::try_new(1.01) {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "unit_interval");
                assert_eq!(min, 0.0);
                assert_eq!(max, 1.0);
                assert_eq!(actual, 1.01);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
        assert!(UnitInterval::try_new(-0.0001).is_err());
    }

    #[test]
    fn try_new_drops_sign_of_negative_zero() {
        let zero = UnitInterval::try_new(-0.0).unwrap();
        assert!(zero.value().is_sign_positive());
        assert_eq!(zero.to_string(), "0.00");
        assert_eq!(serde_json::to_string(&zero).unwrap(), "0.0");
        assert!(UnitInterval::saturating(-0.0, UnitInterval::HALF)
            .value()
            .is_sign_positive());
    }

    #[test]
    fn try_new_rejects_nan_and_infinities() {
        assert!(UnitInterval::try_new(f64::NAN).is_err());
        assert!(UnitInterval::try_new(f64::INFINITY).is_err());
        assert!(UnitInterval::try_new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn saturating_clamps_to_nearest_bound() {
        assert_eq!(UnitInterval::saturating(1.7, UnitInterval::HALF), UnitInterval::ONE);
        assert_eq!(UnitInterval::saturating(-3.0, UnitInterval::HALF), UnitInterval::ZERO);
        assert_eq!(UnitInterval::saturating(0.3, UnitInterval::HALF).value(), 0.3);
    }

    #[test]
    fn saturating_maps_nan_to_fallback() {
        assert_eq!(UnitInterval::saturating(f64::NAN, UnitInterval::HALF), UnitInterval::HALF);
    }

    #[test]
    fn complement_inverts_value() {
        assert_eq!(UnitInterval::ZERO.complement(), UnitInterval::ONE);
        assert_eq!(UnitInterval::try_new(0.25).unwrap().complement().value(), 0.75);
    }

    #[test]
    fn default_is_half() {
        assert_eq!(UnitInterval::default(), UnitInterval::HALF);
    }

    #[test]
    fn displays_with_two_decimals() {
        assert_eq!(format!("{}", UnitInterval::HALF), "0.50");
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&UnitInterval::HALF).unwrap();
        assert_eq!(json, "0.5");
    }

    #[test]
    fn deserialization_rejects_out_of_range() {
        let ok: UnitInterval = serde_json::from_str("0.75").unwrap();
        assert_eq!(ok.value(), 0.75);
        assert!(serde_json::from_str::<UnitInterval>("1.5").is_err());
    }
}
