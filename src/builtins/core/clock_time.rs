//! This module implements `ClockTime` and any directly related algorithms.

use crate::{
    builtins::core::TimeDelta, iso::IsoTime, primitive::FiniteF64, CalendarError, CalendarResult,
    NS_PER_DAY, NS_PER_MINUTE, NS_PER_SECOND,
};

/// A time of day with nanosecond precision.
///
/// A `ClockTime` always lies within a single day, from 00:00:00 up to
/// 23:59:59.999999999. Leap seconds are not represented.
///
/// Adding a `TimeDelta` wraps around midnight and the day carry is
/// discarded. Use `Timestamp` arithmetic when the carry matters.
///
/// ```rust
/// use calendar_rs::{ClockTime, TimeDelta};
///
/// let time = ClockTime::from_hms(23, 30, 0).unwrap();
/// let next = time.add_time_delta(&TimeDelta::from_hours(1));
/// assert_eq!(next, ClockTime::from_hour_minute(0, 30).unwrap());
/// ```
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    pub(crate) iso: IsoTime,
}

// ==== Private API ====

impl ClockTime {
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(iso: IsoTime) -> Self {
        Self { iso }
    }

    /// Returns the nanoseconds since midnight.
    #[inline]
    pub(crate) const fn to_nanoseconds(self) -> u64 {
        self.iso.to_nanoseconds()
    }

    /// Returns the time at `nanoseconds` past midnight, wrapped into a day.
    fn from_wrapped_nanoseconds(nanoseconds: i128) -> Self {
        let (_, iso) = IsoTime::balance(nanoseconds);
        Self::new_unchecked(iso)
    }
}

// ==== Public API ====

impl ClockTime {
    /// Creates a new `ClockTime`, rejecting any out of range field.
    #[inline]
    pub fn try_new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> CalendarResult<Self> {
        IsoTime::try_new(hour, minute, second, nanosecond).map(Self::new_unchecked)
    }

    /// Creates a `ClockTime` at the start of `hour`.
    #[inline]
    pub fn from_hour(hour: u8) -> CalendarResult<Self> {
        Self::try_new(hour, 0, 0, 0)
    }

    /// Creates a `ClockTime` at the start of a minute.
    #[inline]
    pub fn from_hour_minute(hour: u8, minute: u8) -> CalendarResult<Self> {
        Self::try_new(hour, minute, 0, 0)
    }

    /// Creates a `ClockTime` from whole hours, minutes and seconds.
    #[inline]
    pub fn from_hms(hour: u8, minute: u8, second: u8) -> CalendarResult<Self> {
        Self::try_new(hour, minute, second, 0)
    }

    /// Creates a `ClockTime` with a fractional second.
    ///
    /// The fraction is rounded to the nearest nanosecond. Seconds that are
    /// negative, not finite, or that round up to 60 are rejected.
    ///
    /// ```rust
    /// use calendar_rs::ClockTime;
    ///
    /// let time = ClockTime::from_decimal_seconds(10, 15, 3.5).unwrap();
    /// assert_eq!(time.second(), 3);
    /// assert_eq!(time.nanosecond(), 500_000_000);
    /// assert!(ClockTime::from_decimal_seconds(10, 15, 60.0).is_err());
    /// ```
    pub fn from_decimal_seconds(hour: u8, minute: u8, seconds: f64) -> CalendarResult<Self> {
        let invalid = || {
            CalendarError::invalid_clock_time()
                .with_message("seconds must be a finite value in 0..60.")
        };
        let seconds = FiniteF64::try_from(seconds).map_err(|_| invalid())?;
        let nanoseconds = seconds
            .checked_mul(&FiniteF64::from(NS_PER_SECOND as u32))
            .and_then(|ns| ns.round_to_i128())
            .map_err(|_| invalid())?;
        if !(0..i128::from(NS_PER_MINUTE)).contains(&nanoseconds) {
            return Err(invalid());
        }
        let nanos_per_second = i128::from(NS_PER_SECOND);
        // NOTE: nanoseconds is within one minute, so both parts fit.
        Self::try_new(
            hour,
            minute,
            (nanoseconds / nanos_per_second) as u8,
            (nanoseconds % nanos_per_second) as u32,
        )
    }

    /// Returns 00:00:00.
    #[inline]
    #[must_use]
    pub const fn midnight() -> Self {
        Self::new_unchecked(IsoTime::new_unchecked(0, 0, 0, 0))
    }

    /// Returns 12:00:00.
    #[inline]
    #[must_use]
    pub const fn noon() -> Self {
        Self::new_unchecked(IsoTime::noon())
    }

    /// Returns the hour value.
    #[inline]
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.iso.hour
    }

    /// Returns the minute value.
    #[inline]
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.iso.minute
    }

    /// Returns the whole second value.
    #[inline]
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.iso.second
    }

    /// Returns the nanoseconds within the second.
    #[inline]
    #[must_use]
    pub const fn nanosecond(&self) -> u32 {
        self.iso.nanosecond
    }

    /// Returns the seconds including their fraction.
    #[inline]
    #[must_use]
    pub fn second_decimal(&self) -> f64 {
        f64::from(self.iso.second) + f64::from(self.iso.nanosecond) / NS_PER_SECOND as f64
    }

    /// Returns the exact time elapsed since midnight.
    #[inline]
    #[must_use]
    pub const fn time_since_midnight(&self) -> TimeDelta {
        TimeDelta::from_nanoseconds(self.to_nanoseconds() as i128)
    }

    /// Adds a `TimeDelta`, wrapping around midnight.
    #[must_use]
    pub fn add_time_delta(&self, delta: &TimeDelta) -> Self {
        let delta = delta.nanoseconds().rem_euclid(i128::from(NS_PER_DAY));
        Self::from_wrapped_nanoseconds(i128::from(self.to_nanoseconds()) + delta)
    }

    /// Subtracts a `TimeDelta`, wrapping around midnight.
    #[must_use]
    pub fn subtract_time_delta(&self, delta: &TimeDelta) -> Self {
        let delta = delta.nanoseconds().rem_euclid(i128::from(NS_PER_DAY));
        Self::from_wrapped_nanoseconds(i128::from(self.to_nanoseconds()) - delta)
    }

    /// Returns `self - other` within the same day, which may be negative.
    #[inline]
    #[must_use]
    pub fn difference(&self, other: &Self) -> TimeDelta {
        TimeDelta::from_nanoseconds(
            i128::from(self.to_nanoseconds()) - i128::from(other.to_nanoseconds()),
        )
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for ClockTime {
    fn arbitrary(g: &mut quickcheck::Gen) -> ClockTime {
        let nanoseconds = <u64 as quickcheck::Arbitrary>::arbitrary(g) % NS_PER_DAY;
        ClockTime::new_unchecked(IsoTime::from_nanoseconds_unchecked(nanoseconds))
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = ClockTime>> {
        alloc::boxed::Box::new(
            quickcheck::Arbitrary::shrink(&self.to_nanoseconds())
                .map(|ns| ClockTime::new_unchecked(IsoTime::from_nanoseconds_unchecked(ns))),
        )
    }
}
