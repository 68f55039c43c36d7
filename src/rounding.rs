//! Implementation of increment rounding functionality

use crate::options::{RoundingMode, UnsignedRoundingMode};

use core::{cmp::Ordering, num::NonZeroU128};

/// Rounds a signed nanosecond count to a multiple of an increment.
///
/// The rounding is performed on the magnitude with an
/// `UnsignedRoundingMode`, then the sign is reapplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IncrementRounder {
    sign: bool,
    dividend: u128,
    divisor: u128,
}

impl IncrementRounder {
    #[inline]
    pub(crate) fn from_signed_num(number: i128, increment: NonZeroU128) -> Self {
        Self {
            sign: number >= 0,
            dividend: number.unsigned_abs(),
            divisor: increment.get(),
        }
    }
}

impl IncrementRounder {
    /// Returns the number of whole increments after rounding.
    #[inline]
    pub fn round_to_quotient(&self, mode: RoundingMode) -> i128 {
        let unsigned_rounding_mode = mode.get_unsigned_round_mode(self.sign);
        // NOTE: the quotient is at most `i128::MIN.unsigned_abs()`, which only
        // occurs for an increment of one and is handled below.
        let rounded = apply_unsigned_rounding_mode(
            self.dividend,
            self.divisor,
            unsigned_rounding_mode,
        );
        if self.sign {
            rounded as i128
        } else {
            (rounded as i128).wrapping_neg()
        }
    }

    /// Returns the rounded value as a multiple of the increment, or `None`
    /// when the result does not fit in an `i128`.
    #[inline]
    pub fn round(&self, mode: RoundingMode) -> Option<i128> {
        let quotient = self.round_to_quotient(mode);
        if quotient == 0 {
            return Some(0);
        }
        match i128::try_from(self.divisor) {
            Ok(divisor) => quotient.checked_mul(divisor),
            // An increment of `i128::MIN.unsigned_abs()` only fits once, negated.
            Err(_) => (quotient == -1).then_some(i128::MIN),
        }
    }
}

#[inline]
fn is_exact(dividend: u128, divisor: u128) -> bool {
    dividend % divisor == 0
}

#[inline]
fn compare_remainder(dividend: u128, divisor: u128) -> Ordering {
    let remainder = dividend % divisor;
    remainder.cmp(&(divisor - remainder))
}

#[inline]
fn is_even_cardinal(dividend: u128, divisor: u128) -> bool {
    result_floor(dividend, divisor) % 2 == 0
}

#[inline]
fn result_floor(dividend: u128, divisor: u128) -> u128 {
    dividend / divisor
}

#[inline]
fn result_ceil(dividend: u128, divisor: u128) -> u128 {
    dividend / divisor + 1
}

/// Rounds `dividend / divisor` to a whole quotient with the unsigned
/// rounding mode.
fn apply_unsigned_rounding_mode(
    dividend: u128,
    divisor: u128,
    unsigned_rounding_mode: UnsignedRoundingMode,
) -> u128 {
    let floor = result_floor(dividend, divisor);
    if is_exact(dividend, divisor) {
        return floor;
    }
    // The quotient lies strictly between floor and floor + 1.
    let round_up = match unsigned_rounding_mode {
        UnsignedRoundingMode::Zero => false,
        UnsignedRoundingMode::Infinity => true,
        UnsignedRoundingMode::HalfZero => {
            compare_remainder(dividend, divisor) == Ordering::Greater
        }
        UnsignedRoundingMode::HalfInfinity => {
            compare_remainder(dividend, divisor) != Ordering::Less
        }
        UnsignedRoundingMode::HalfEven => match compare_remainder(dividend, divisor) {
            Ordering::Less => false,
            Ordering::Greater => true,
            Ordering::Equal => !is_even_cardinal(dividend, divisor),
        },
    };
    if round_up {
        result_ceil(dividend, divisor)
    } else {
        floor
    }
}
