//! ScaleValue value object for the 1-5 effort and impact sliders.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A rating on the 1 to 5 slider scale.
///
/// Stored solution fields are plain integers and are never rejected; this type
/// is the input boundary that keeps new values on the slider's discrete steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScaleValue(u8);

impl ScaleValue {
    /// Lowest slider position.
    pub const MIN: Self = Self(1);

    /// Highest slider position.
    pub const MAX: Self = Self(5);

    /// Slider position used for new solutions.
    pub const MIDPOINT: Self = Self(3);

    /// Creates a ScaleValue, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if !(i64::from(Self::MIN.0)..=i64::from(Self::MAX.0)).contains(&value) {
            return Err(ValidationError::out_of_range(
                "scale",
                i32::from(Self::MIN.0),
                i32::from(Self::MAX.0),
                value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            ));
        }
        Ok(Self(value as u8))
    }

    /// Creates a ScaleValue, clamping to the slider range.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0)) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for ScaleValue {
    fn default() -> Self {
        Self::MIDPOINT
    }
}

impl From<ScaleValue> for u8 {
    fn from(value: ScaleValue) -> Self {
        value.0
    }
}

impl fmt::Display for ScaleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

impl FromStr for ScaleValue {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s
            .trim()
            .parse()
            .map_err(|_| ValidationError::invalid_format("scale", format!("'{}' is not a number", s)))?;
        Self::try_new(raw)
    }
}
