use crate::{CalendarError, NS_PER_SECOND};

/// A count of nanoseconds since 1970-01-01T00:00:00Z.
///
/// Any value whose floored second count fits in an `i64` is a valid
/// instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct EpochNanoseconds(pub(crate) i128);

impl From<i128> for EpochNanoseconds {
    fn from(value: i128) -> Self {
        Self(value)
    }
}

impl EpochNanoseconds {
    /// Creates `EpochNanoseconds` from whole seconds.
    pub const fn from_seconds(seconds: i64) -> Self {
        Self(seconds as i128 * NS_PER_SECOND as i128)
    }

    #[inline]
    #[must_use]
    pub const fn as_i128(&self) -> i128 {
        self.0
    }

    /// Returns the floored seconds and the nanosecond fraction in `0..1e9`.
    pub(crate) fn to_parts(self) -> (i128, u32) {
        let ns_per_second = i128::from(NS_PER_SECOND);
        // NOTE: rem_euclid is always within 0..1e9.
        (
            self.0.div_euclid(ns_per_second),
            self.0.rem_euclid(ns_per_second) as u32,
        )
    }

    pub fn check_validity(&self) -> Result<(), CalendarError> {
        if !is_valid_epoch_nanos(&self.0) {
            return Err(
                CalendarError::overflow().with_message("instant exceeds the i64 second range.")
            );
        }
        Ok(())
    }
}

/// Utility for determining if the nanos are within a valid range.
#[inline]
#[must_use]
pub(crate) fn is_valid_epoch_nanos(nanos: &i128) -> bool {
    (NS_MIN_INSTANT..=NS_MAX_INSTANT).contains(nanos)
}

/// Min Instant nanosecond constant
const NS_MIN_INSTANT: i128 = i64::MIN as i128 * NS_PER_SECOND as i128;
/// Max Instant nanosecond constant
const NS_MAX_INSTANT: i128 = i64::MAX as i128 * NS_PER_SECOND as i128 + (NS_PER_SECOND as i128 - 1);

#[cfg(test)]
mod tests {
    use super::EpochNanoseconds;

    #[test]
    fn floored_parts() {
        assert_eq!(EpochNanoseconds::from(-250_000_000).to_parts(), (-1, 750_000_000));
        assert_eq!(EpochNanoseconds::from(1_500_000_000).to_parts(), (1, 500_000_000));
        assert_eq!(EpochNanoseconds::from_seconds(-3).to_parts(), (-3, 0));
    }

    #[test]
    fn validity_bounds() {
        let max = EpochNanoseconds::from_seconds(i64::MAX).as_i128() + 999_999_999;
        assert!(EpochNanoseconds::from(max).check_validity().is_ok());
        assert!(EpochNanoseconds::from(max + 1).check_validity().is_err());
        let min = EpochNanoseconds::from_seconds(i64::MIN);
        assert!(min.check_validity().is_ok());
        assert!(EpochNanoseconds::from(min.as_i128() - 1)
            .check_validity()
            .is_err());
    }
}
