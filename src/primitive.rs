//! Implementation of the FiniteF64 primitive

use crate::{CalendarError, CalendarResult};
use num_traits::{float::FloatCore, FromPrimitive, ToPrimitive};

/// A finite `f64` value.
///
/// Real valued scale factors and decimal seconds pass through
/// `FiniteF64` before they touch integer fields, so NaN and the
/// infinities are rejected at the boundary.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct FiniteF64(pub(crate) f64);

impl FiniteF64 {
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    #[inline]
    pub fn checked_mul(&self, other: &Self) -> CalendarResult<Self> {
        Self::try_from(self.0 * other.0)
    }

    #[inline]
    pub fn checked_add(&self, other: &Self) -> CalendarResult<Self> {
        Self::try_from(self.0 + other.0)
    }

    /// Returns the value as an `i128` when it is a whole number in range.
    pub fn as_integer(&self) -> Option<i128> {
        if FloatCore::fract(self.0) != 0.0 {
            return None;
        }
        self.0.to_i128()
    }

    #[inline]
    pub fn checked_div(&self, other: &Self) -> CalendarResult<Self> {
        if other.is_zero() {
            return Err(CalendarError::division_by_zero());
        }
        Self::try_from(self.0 / other.0)
    }

    /// Rounds to the nearest integer, with ties away from zero.
    pub fn round_to_i128(&self) -> CalendarResult<i128> {
        core_maths::CoreFloat::round(self.0)
            .to_i128()
            .ok_or(CalendarError::overflow().with_message("number exceeds the nanosecond range."))
    }
}

impl TryFrom<f64> for FiniteF64 {
    type Error = CalendarError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !FloatCore::is_finite(value) {
            return Err(
                CalendarError::overflow().with_message("number value is not a finite value.")
            );
        }
        Ok(Self(value))
    }
}

impl TryFrom<i128> for FiniteF64 {
    type Error = CalendarError;
    fn try_from(value: i128) -> Result<Self, Self::Error> {
        let result = f64::from_i128(value)
            .ok_or(CalendarError::overflow().with_message("number exceeded a valid range."))?;
        Self::try_from(result)
    }
}

impl From<u32> for FiniteF64 {
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl From<FiniteF64> for f64 {
    fn from(value: FiniteF64) -> Self {
        value.0
    }
}
