//! Options for how an operation may be completed.
//!
//! Rounding conversions and calendar arithmetic accept these options to
//! select between the documented policies.

/// `ArithmeticOverflow` decides what happens when month arithmetic lands
/// on a day that does not exist in the target month.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOverflow {
    /// Clamp the day to the last day of the target month.
    #[default]
    Constrain,
    /// Fail with an invalid date error.
    Reject,
}

/// How a value between two multiples of an increment is resolved.
///
/// The "half" modes only differ when the value is exactly halfway.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum RoundingMode {
    /// Toward positive infinity.
    Ceil,
    /// Toward negative infinity.
    Floor,
    /// Away from zero.
    Expand,
    /// Toward zero.
    Trunc,
    /// To the nearest multiple, halfway values toward positive infinity.
    HalfCeil,
    /// To the nearest multiple, halfway values toward negative infinity.
    HalfFloor,
    /// To the nearest multiple, halfway values away from zero.
    #[default]
    HalfExpand,
    /// To the nearest multiple, halfway values toward zero.
    HalfTrunc,
    /// To the nearest multiple, halfway values to the even multiple.
    HalfEven,
}

/// A rounding mode applied to a magnitude once the sign is set aside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsignedRoundingMode {
    /// Round the magnitude up.
    Infinity,
    /// Round the magnitude down.
    Zero,
    /// Nearest, halfway magnitudes up.
    HalfInfinity,
    /// Nearest, halfway magnitudes down.
    HalfZero,
    /// Nearest, halfway magnitudes to the even quotient.
    HalfEven,
}

impl RoundingMode {
    #[inline]
    #[must_use]
    /// Returns the `UnsignedRoundingMode` that applies to the magnitude of
    /// a value with the provided sign.
    pub const fn get_unsigned_round_mode(self, is_positive: bool) -> UnsignedRoundingMode {
        use RoundingMode::{
            Ceil, Expand, Floor, HalfCeil, HalfEven, HalfExpand, HalfFloor, HalfTrunc, Trunc,
        };

        match self {
            Ceil if is_positive => UnsignedRoundingMode::Infinity,
            Ceil => UnsignedRoundingMode::Zero,
            Floor if is_positive => UnsignedRoundingMode::Zero,
            Floor | Expand => UnsignedRoundingMode::Infinity,
            Trunc => UnsignedRoundingMode::Zero,
            HalfCeil if is_positive => UnsignedRoundingMode::HalfInfinity,
            HalfCeil | HalfTrunc => UnsignedRoundingMode::HalfZero,
            HalfFloor if is_positive => UnsignedRoundingMode::HalfZero,
            HalfFloor | HalfExpand => UnsignedRoundingMode::HalfInfinity,
            HalfEven => UnsignedRoundingMode::HalfEven,
        }
    }
}
