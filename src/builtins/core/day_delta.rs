//! This module implements `DayDelta`.

use crate::{builtins::core::TimeDelta, CalendarError, CalendarResult, NS_PER_DAY};
use core::cmp::Ordering;

/// A signed span of whole calendar days.
///
/// A `DayDelta` moves a `Date` by a number of days. When it is treated
/// as a duration, each day is exactly 24 hours.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayDelta {
    days: i64,
}

impl DayDelta {
    #[inline]
    fn checked_from(days: Option<i64>) -> CalendarResult<Self> {
        days.map(Self::from_days)
            .ok_or(CalendarError::overflow().with_message("DayDelta exceeds the i64 day range."))
    }
}

impl DayDelta {
    /// Creates a new `DayDelta` from days.
    #[inline]
    #[must_use]
    pub const fn from_days(days: i64) -> Self {
        Self { days }
    }

    /// Creates a new `DayDelta` from weeks.
    ///
    /// ```rust
    /// use calendar_rs::DayDelta;
    ///
    /// let delta = DayDelta::from_weeks(-2).unwrap();
    /// assert_eq!(delta.days(), -14);
    /// assert!(DayDelta::from_weeks(i64::MAX).is_err());
    /// ```
    pub fn from_weeks(weeks: i64) -> CalendarResult<Self> {
        Self::checked_from(weeks.checked_mul(7))
    }

    /// Creates a zero length `DayDelta`.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::from_days(0)
    }

    /// Returns the number of days.
    #[inline]
    #[must_use]
    pub const fn days(&self) -> i64 {
        self.days
    }

    /// Returns the whole weeks, truncated toward zero.
    #[inline]
    #[must_use]
    pub const fn weeks(&self) -> i64 {
        self.days / 7
    }

    /// Returns the length in weeks as a float.
    #[inline]
    #[must_use]
    pub fn weeks_decimal(&self) -> f64 {
        (self.days / 7) as f64 + (self.days % 7) as f64 / 7.0
    }

    /// Returns this `DayDelta` as an exact `TimeDelta` of 24 hour days.
    #[inline]
    #[must_use]
    pub const fn to_time_delta(&self) -> TimeDelta {
        TimeDelta::from_days(self.days)
    }

    /// Returns whether the `DayDelta` is less than zero.
    #[inline]
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.days < 0
    }

    /// Returns the negated `DayDelta`.
    pub fn checked_neg(&self) -> CalendarResult<Self> {
        Self::checked_from(self.days.checked_neg())
    }

    /// Adds two `DayDelta`s.
    pub fn checked_add(&self, other: &Self) -> CalendarResult<Self> {
        Self::checked_from(self.days.checked_add(other.days))
    }

    /// Subtracts `other` from this `DayDelta`.
    pub fn checked_sub(&self, other: &Self) -> CalendarResult<Self> {
        Self::checked_from(self.days.checked_sub(other.days))
    }

    /// Scales this `DayDelta` by an integer factor.
    pub fn checked_mul(&self, factor: i64) -> CalendarResult<Self> {
        Self::checked_from(self.days.checked_mul(factor))
    }

    /// Divides this `DayDelta`, truncating toward zero.
    pub fn checked_div(&self, divisor: i64) -> CalendarResult<Self> {
        if divisor == 0 {
            return Err(
                CalendarError::division_by_zero().with_message("cannot divide a DayDelta by zero.")
            );
        }
        Self::checked_from(self.days.checked_div(divisor))
    }

    /// Adds one day in place, returning the new value.
    pub fn increment(&mut self) -> CalendarResult<Self> {
        *self = self.checked_add(&Self::from_days(1))?;
        Ok(*self)
    }

    /// Removes one day in place, returning the new value.
    pub fn decrement(&mut self) -> CalendarResult<Self> {
        *self = self.checked_sub(&Self::from_days(1))?;
        Ok(*self)
    }
}

impl PartialEq<TimeDelta> for DayDelta {
    fn eq(&self, other: &TimeDelta) -> bool {
        self.to_time_delta() == *other
    }
}

impl PartialEq<DayDelta> for TimeDelta {
    fn eq(&self, other: &DayDelta) -> bool {
        *self == other.to_time_delta()
    }
}

impl PartialOrd<TimeDelta> for DayDelta {
    fn partial_cmp(&self, other: &TimeDelta) -> Option<Ordering> {
        Some(
            (i128::from(self.days) * i128::from(NS_PER_DAY)).cmp(&other.nanoseconds()),
        )
    }
}

impl PartialOrd<DayDelta> for TimeDelta {
    fn partial_cmp(&self, other: &DayDelta) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for DayDelta {
    fn arbitrary(g: &mut quickcheck::Gen) -> DayDelta {
        // Keep deltas within a few hundred thousand years.
        let days = <i32 as quickcheck::Arbitrary>::arbitrary(g) / 16;
        DayDelta::from_days(days.into())
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = DayDelta>> {
        alloc::boxed::Box::new(quickcheck::Arbitrary::shrink(&self.days).map(DayDelta::from_days))
    }
}
