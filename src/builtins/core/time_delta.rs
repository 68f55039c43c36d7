//! This module implements `TimeDelta` and its rounding conversions.

use crate::{
    builtins::core::DayDelta, options::RoundingMode, primitive::FiniteF64,
    rounding::IncrementRounder, CalendarError, CalendarResult, CalendarUnwrap, Sign, NS_PER_DAY,
    NS_PER_HOUR, NS_PER_MICROSECOND, NS_PER_MILLISECOND, NS_PER_MINUTE, NS_PER_SECOND,
    NS_PER_WEEK,
};
use core::num::NonZeroU128;

/// An exact, signed span of time measured in nanoseconds.
///
/// Every unit accessor is a view computed from the nanosecond count, so
/// converting between units never drifts.
///
/// ```rust
/// use calendar_rs::TimeDelta;
///
/// let delta = TimeDelta::from_minutes(90);
/// assert_eq!(delta.hours(), 1);
/// assert_eq!(delta.hours_decimal(), 1.5);
/// assert_eq!(delta.seconds(), 5_400);
/// ```
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeDelta {
    nanoseconds: i128,
}

// ==== Private API ====

impl TimeDelta {
    /// Returns the value of `nanoseconds` over `unit`, with the remainder
    /// added as a fraction so precision is lost only in the final
    /// conversion.
    fn decimal(&self, unit: u64) -> f64 {
        let unit = i128::from(unit);
        let quotient = self.nanoseconds / unit;
        let remainder = self.nanoseconds % unit;
        quotient as f64 + remainder as f64 / unit as f64
    }

    #[inline]
    fn checked_from(nanoseconds: Option<i128>) -> CalendarResult<Self> {
        nanoseconds
            .map(Self::from_nanoseconds)
            .ok_or(Self::range_error())
    }

    fn range_error() -> CalendarError {
        CalendarError::overflow().with_message("TimeDelta exceeds the nanosecond range.")
    }
}

// ==== Public API ====

impl TimeDelta {
    /// A `TimeDelta` of zero length.
    pub const ZERO: Self = Self::from_nanoseconds(0);

    /// Creates a `TimeDelta` of zero length.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Creates a `TimeDelta` from nanoseconds.
    #[inline]
    #[must_use]
    pub const fn from_nanoseconds(nanoseconds: i128) -> Self {
        Self { nanoseconds }
    }

    /// Creates a `TimeDelta` from microseconds.
    #[inline]
    #[must_use]
    pub const fn from_microseconds(microseconds: i64) -> Self {
        Self::from_nanoseconds(microseconds as i128 * NS_PER_MICROSECOND as i128)
    }

    /// Creates a `TimeDelta` from milliseconds.
    #[inline]
    #[must_use]
    pub const fn from_milliseconds(milliseconds: i64) -> Self {
        Self::from_nanoseconds(milliseconds as i128 * NS_PER_MILLISECOND as i128)
    }

    /// Creates a `TimeDelta` from seconds.
    #[inline]
    #[must_use]
    pub const fn from_seconds(seconds: i64) -> Self {
        Self::from_nanoseconds(seconds as i128 * NS_PER_SECOND as i128)
    }

    /// Creates a `TimeDelta` from minutes.
    #[inline]
    #[must_use]
    pub const fn from_minutes(minutes: i64) -> Self {
        Self::from_nanoseconds(minutes as i128 * NS_PER_MINUTE as i128)
    }

    /// Creates a `TimeDelta` from hours.
    #[inline]
    #[must_use]
    pub const fn from_hours(hours: i64) -> Self {
        Self::from_nanoseconds(hours as i128 * NS_PER_HOUR as i128)
    }

    /// Creates a `TimeDelta` from days of exactly 24 hours.
    #[inline]
    #[must_use]
    pub const fn from_days(days: i64) -> Self {
        Self::from_nanoseconds(days as i128 * NS_PER_DAY as i128)
    }

    /// Creates a `TimeDelta` from weeks of exactly 7 days.
    #[inline]
    #[must_use]
    pub const fn from_weeks(weeks: i64) -> Self {
        Self::from_nanoseconds(weeks as i128 * NS_PER_WEEK as i128)
    }

    /// Returns the length in nanoseconds.
    #[inline]
    #[must_use]
    pub const fn nanoseconds(&self) -> i128 {
        self.nanoseconds
    }

    /// Returns the whole microseconds, truncated toward zero.
    #[inline]
    #[must_use]
    pub const fn microseconds(&self) -> i128 {
        self.nanoseconds / NS_PER_MICROSECOND as i128
    }

    /// Returns the length in microseconds as a float.
    #[inline]
    #[must_use]
    pub fn microseconds_decimal(&self) -> f64 {
        self.decimal(NS_PER_MICROSECOND)
    }

    /// Returns the whole milliseconds, truncated toward zero.
    #[inline]
    #[must_use]
    pub const fn milliseconds(&self) -> i128 {
        self.nanoseconds / NS_PER_MILLISECOND as i128
    }

    /// Returns the length in milliseconds as a float.
    #[inline]
    #[must_use]
    pub fn milliseconds_decimal(&self) -> f64 {
        self.decimal(NS_PER_MILLISECOND)
    }

    /// Returns the whole seconds, truncated toward zero.
    #[inline]
    #[must_use]
    pub const fn seconds(&self) -> i128 {
        self.nanoseconds / NS_PER_SECOND as i128
    }

    /// Returns the length in seconds as a float.
    #[inline]
    #[must_use]
    pub fn seconds_decimal(&self) -> f64 {
        self.decimal(NS_PER_SECOND)
    }

    /// Returns the whole minutes, truncated toward zero.
    #[inline]
    #[must_use]
    pub const fn minutes(&self) -> i128 {
        self.nanoseconds / NS_PER_MINUTE as i128
    }

    /// Returns the length in minutes as a float.
    #[inline]
    #[must_use]
    pub fn minutes_decimal(&self) -> f64 {
        self.decimal(NS_PER_MINUTE)
    }

    /// Returns the whole hours, truncated toward zero.
    #[inline]
    #[must_use]
    pub const fn hours(&self) -> i128 {
        self.nanoseconds / NS_PER_HOUR as i128
    }

    /// Returns the length in hours as a float.
    #[inline]
    #[must_use]
    pub fn hours_decimal(&self) -> f64 {
        self.decimal(NS_PER_HOUR)
    }

    /// Returns the whole 24 hour days, truncated toward zero.
    #[inline]
    #[must_use]
    pub const fn days(&self) -> i128 {
        self.nanoseconds / NS_PER_DAY as i128
    }

    /// Returns the length in 24 hour days as a float.
    #[inline]
    #[must_use]
    pub fn days_decimal(&self) -> f64 {
        self.decimal(NS_PER_DAY)
    }

    /// Returns the whole weeks, truncated toward zero.
    #[inline]
    #[must_use]
    pub const fn weeks(&self) -> i128 {
        self.nanoseconds / NS_PER_WEEK as i128
    }

    /// Returns the length in weeks as a float.
    #[inline]
    #[must_use]
    pub fn weeks_decimal(&self) -> f64 {
        self.decimal(NS_PER_WEEK)
    }

    /// Returns whether the `TimeDelta` is less than zero.
    #[inline]
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.nanoseconds < 0
    }

    /// Returns whether the `TimeDelta` is zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.nanoseconds == 0
    }

    /// Returns the `Sign` of this `TimeDelta`.
    #[inline]
    #[must_use]
    pub fn sign(&self) -> Sign {
        Sign::from(self.nanoseconds.cmp(&0))
    }

    /// Returns the negated `TimeDelta`.
    pub fn checked_neg(&self) -> CalendarResult<Self> {
        Self::checked_from(self.nanoseconds.checked_neg())
    }

    /// Returns the absolute value of this `TimeDelta`.
    pub fn checked_abs(&self) -> CalendarResult<Self> {
        Self::checked_from(self.nanoseconds.checked_abs())
    }

    /// Adds two `TimeDelta`s.
    pub fn checked_add(&self, other: &Self) -> CalendarResult<Self> {
        Self::checked_from(self.nanoseconds.checked_add(other.nanoseconds))
    }

    /// Subtracts `other` from this `TimeDelta`.
    pub fn checked_sub(&self, other: &Self) -> CalendarResult<Self> {
        Self::checked_from(self.nanoseconds.checked_sub(other.nanoseconds))
    }

    /// Adds a `DayDelta`, where each day is exactly 24 hours.
    pub fn checked_add_days(&self, days: DayDelta) -> CalendarResult<Self> {
        self.checked_add(&days.to_time_delta())
    }

    /// Subtracts a `DayDelta`, where each day is exactly 24 hours.
    pub fn checked_sub_days(&self, days: DayDelta) -> CalendarResult<Self> {
        self.checked_sub(&days.to_time_delta())
    }

    /// Scales this `TimeDelta` by an integer factor.
    pub fn checked_mul(&self, factor: i64) -> CalendarResult<Self> {
        Self::checked_from(self.nanoseconds.checked_mul(i128::from(factor)))
    }

    /// Divides this `TimeDelta` by an integer, truncating toward zero.
    pub fn checked_div(&self, divisor: i64) -> CalendarResult<Self> {
        if divisor == 0 {
            return Err(CalendarError::division_by_zero()
                .with_message("cannot divide a TimeDelta by zero."));
        }
        Self::checked_from(self.nanoseconds.checked_div(i128::from(divisor)))
    }

    /// Scales this `TimeDelta` by a real factor, rounding to the nearest
    /// nanosecond with ties away from zero.
    ///
    /// Whole factors are applied exactly. Otherwise the whole seconds and
    /// the sub-second remainder are scaled separately.
    pub fn checked_mul_f64(&self, factor: f64) -> CalendarResult<Self> {
        let factor = FiniteF64::try_from(factor)?;
        if let Some(factor) = factor.as_integer() {
            return Self::checked_from(self.nanoseconds.checked_mul(factor));
        }
        let unit = i128::from(NS_PER_SECOND);
        let seconds = FiniteF64::try_from(self.nanoseconds / unit)?
            .checked_mul(&factor)?
            .checked_mul(&FiniteF64::from(NS_PER_SECOND as u32))?;
        let subsecond = FiniteF64::try_from(self.nanoseconds % unit)?.checked_mul(&factor)?;
        seconds
            .checked_add(&subsecond)?
            .round_to_i128()
            .map(Self::from_nanoseconds)
    }

    /// Divides this `TimeDelta` by a real divisor, rounding to the nearest
    /// nanosecond with ties away from zero.
    pub fn checked_div_f64(&self, divisor: f64) -> CalendarResult<Self> {
        let nanoseconds = FiniteF64::try_from(self.nanoseconds)?;
        let result = nanoseconds
            .checked_div(&FiniteF64::try_from(divisor)?)
            .map_err(|e| e.with_message("cannot divide a TimeDelta by zero."))?;
        result.round_to_i128().map(Self::from_nanoseconds)
    }

    /// Rounds this `TimeDelta` to a multiple of `increment`.
    ///
    /// The sign of `increment` is ignored.
    ///
    /// ```rust
    /// use calendar_rs::{options::RoundingMode, TimeDelta};
    ///
    /// let delta = TimeDelta::from_seconds(-150);
    /// let rounded = delta.round(TimeDelta::from_minutes(1), RoundingMode::HalfEven).unwrap();
    /// assert_eq!(rounded, TimeDelta::from_minutes(-2));
    /// ```
    pub fn round(&self, increment: TimeDelta, mode: RoundingMode) -> CalendarResult<Self> {
        let increment = NonZeroU128::new(increment.nanoseconds.unsigned_abs()).ok_or(
            CalendarError::division_by_zero().with_message("rounding increment cannot be zero."),
        )?;
        IncrementRounder::from_signed_num(self.nanoseconds, increment)
            .round(mode)
            .map(Self::from_nanoseconds)
            .ok_or(Self::range_error())
    }

    /// Converts this `TimeDelta` to whole days of 24 hours using the
    /// provided `RoundingMode`.
    pub fn to_day_delta(&self, mode: RoundingMode) -> CalendarResult<DayDelta> {
        let increment = NonZeroU128::new(u128::from(NS_PER_DAY)).calendar_unwrap()?;
        let days = IncrementRounder::from_signed_num(self.nanoseconds, increment)
            .round_to_quotient(mode);
        i64::try_from(days)
            .map(DayDelta::from_days)
            .map_err(|_| CalendarError::overflow().with_message("day count exceeds i64."))
    }

    /// Converts to days, dropping any partial day.
    ///
    /// ```rust
    /// use calendar_rs::{DayDelta, TimeDelta};
    ///
    /// let delta = TimeDelta::from_seconds(-90_000);
    /// assert_eq!(delta.to_day_delta_truncated().unwrap(), DayDelta::from_days(-1));
    /// ```
    pub fn to_day_delta_truncated(&self) -> CalendarResult<DayDelta> {
        self.to_day_delta(RoundingMode::Trunc)
    }

    /// Converts to the nearest number of days, with half days rounded away
    /// from zero.
    pub fn to_day_delta_rounded(&self) -> CalendarResult<DayDelta> {
        self.to_day_delta(RoundingMode::HalfExpand)
    }

    /// Converts to days, rounding any partial day away from zero.
    ///
    /// ```rust
    /// use calendar_rs::{DayDelta, TimeDelta};
    ///
    /// let delta = TimeDelta::from_seconds(90_000);
    /// assert_eq!(delta.to_day_delta_abs_ceil().unwrap(), DayDelta::from_days(2));
    /// ```
    pub fn to_day_delta_abs_ceil(&self) -> CalendarResult<DayDelta> {
        self.to_day_delta(RoundingMode::Expand)
    }
}

impl From<DayDelta> for TimeDelta {
    fn from(value: DayDelta) -> Self {
        value.to_time_delta()
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for TimeDelta {
    fn arbitrary(g: &mut quickcheck::Gen) -> TimeDelta {
        let micros = <i64 as quickcheck::Arbitrary>::arbitrary(g);
        TimeDelta::from_nanoseconds(i128::from(micros) * 1_000)
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = TimeDelta>> {
        alloc::boxed::Box::new(
            quickcheck::Arbitrary::shrink(&(self.nanoseconds / 1_000))
                .map(|micros| TimeDelta::from_nanoseconds(micros * 1_000)),
        )
    }
}
