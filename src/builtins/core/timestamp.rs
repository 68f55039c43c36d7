//! An implementation of `Timestamp` and any directly related algorithms.

use crate::{
    builtins::core::{
        BrokenDownTime, ClockTime, Date, DateDifference, DayDelta, MonthDelta, TimeDelta,
    },
    host::HostTimeZone,
    iso::{IsoDateTime, IsoTime},
    time::EpochNanoseconds,
    CalendarError, CalendarResult, NS_PER_DAY, NS_PER_SECOND,
};

#[cfg(feature = "log")]
use log::trace;

/// The calendar breakdown of the distance between two `Timestamp`s.
///
/// Adding the date part to the earlier timestamp, and then `time`,
/// yields the later timestamp when both are read under the same offset.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimestampDifference {
    /// The whole years, months and days.
    pub date: DateDifference,
    /// The remaining time, always less than a day and never negative.
    pub time: TimeDelta,
}

/// An absolute instant, counted from the Unix epoch 1970-01-01T00:00:00Z.
///
/// The instant is kept as whole seconds and a nanosecond fraction that is
/// always counted forward, so `(-1, 750_000_000)` is a quarter second
/// before the epoch. A `Timestamp` carries no offset; civil values are
/// read from it under an explicit offset from UTC.
///
/// ```rust
/// use calendar_rs::{ClockTime, Date, TimeDelta, Timestamp};
///
/// let date = Date::try_new(1976, 4, 5).unwrap();
/// let time = ClockTime::from_hms(16, 59, 59).unwrap();
/// let stamp = Timestamp::new(date, time, TimeDelta::from_hours(-5)).unwrap();
/// assert_eq!(stamp.epoch_seconds(), 197_589_599);
///
/// let utc = stamp.clock_time_utc().unwrap();
/// assert_eq!(utc, ClockTime::from_hms(21, 59, 59).unwrap());
/// ```
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    seconds: i64,
    nanoseconds: u32,
}

// ==== Private API ====

impl Timestamp {
    /// Creates a `Timestamp` from balanced parts without validation.
    #[inline]
    pub(crate) const fn new_unchecked(seconds: i64, nanoseconds: u32) -> Self {
        Self {
            seconds,
            nanoseconds,
        }
    }

    fn range_error() -> CalendarError {
        CalendarError::overflow().with_message("Timestamp exceeds the i64 second range.")
    }

    /// Returns the civil date and time of this instant under `offset`.
    fn to_iso_date_time(self, offset: &TimeDelta) -> CalendarResult<IsoDateTime> {
        IsoDateTime::from_epoch_nanos(self.epoch_nanoseconds().as_i128(), offset.nanoseconds())
    }

    fn from_iso_date_time(iso: &IsoDateTime, offset: &TimeDelta) -> CalendarResult<Self> {
        iso.as_nanoseconds(offset.nanoseconds()).and_then(Self::try_from)
    }

    /// Applies a date level operation to the civil date under `offset`,
    /// keeping the time of day.
    fn map_date<F>(&self, offset: &TimeDelta, op: F) -> CalendarResult<Self>
    where
        F: FnOnce(Date) -> CalendarResult<Date>,
    {
        let iso = self.to_iso_date_time(offset)?;
        let date = op(Date::new_unchecked(iso.date))?;
        Self::from_iso_date_time(&IsoDateTime::new_unchecked(date.iso, iso.time), offset)
    }
}

// ==== Public API ====

impl Timestamp {
    /// The Unix epoch, 1970-01-01T00:00:00Z.
    pub const UNIX_EPOCH: Self = Self::new_unchecked(0, 0);

    /// Returns the Unix epoch.
    #[inline]
    #[must_use]
    pub const fn epoch() -> Self {
        Self::UNIX_EPOCH
    }

    /// Creates a `Timestamp` from whole seconds since the epoch, the
    /// equivalent of a C `time_t`.
    #[inline]
    #[must_use]
    pub const fn from_seconds(seconds: i64) -> Self {
        Self::new_unchecked(seconds, 0)
    }

    /// Creates a `Timestamp` from seconds and a nanosecond adjustment.
    ///
    /// The nanoseconds may be negative or exceed a second; they are
    /// balanced into the seconds with floor division.
    ///
    /// ```rust
    /// use calendar_rs::Timestamp;
    ///
    /// let stamp = Timestamp::from_epoch_parts(0, -250_000_000).unwrap();
    /// assert_eq!(stamp.epoch_seconds(), -1);
    /// assert_eq!(stamp.subsec_nanoseconds(), 750_000_000);
    /// ```
    pub fn from_epoch_parts(seconds: i64, nanoseconds: i64) -> CalendarResult<Self> {
        // NOTE: i64 seconds in nanoseconds is well within the i128 range.
        let total = i128::from(seconds) * i128::from(NS_PER_SECOND) + i128::from(nanoseconds);
        Self::from_epoch_nanoseconds(total)
    }

    /// Creates a `Timestamp` from nanoseconds since the epoch.
    pub fn from_epoch_nanoseconds(nanoseconds: i128) -> CalendarResult<Self> {
        Self::try_from(EpochNanoseconds::from(nanoseconds))
    }

    /// Creates a `Timestamp` from a civil date and time read under
    /// `offset`.
    ///
    /// The offset is how far local time is ahead of UTC, so an offset of
    /// -5 hours means the civil values are five hours behind UTC.
    pub fn new(date: Date, time: ClockTime, offset: TimeDelta) -> CalendarResult<Self> {
        Self::from_iso_date_time(&IsoDateTime::new_unchecked(date.iso, time.iso), &offset)
    }

    /// Creates a `Timestamp` from a civil date and time in UTC.
    #[inline]
    pub fn utc(date: Date, time: ClockTime) -> CalendarResult<Self> {
        Self::new(date, time, TimeDelta::ZERO)
    }

    /// Creates a `Timestamp` from a civil date and time in the host's
    /// local time.
    ///
    /// The offset is resolved in two passes: the civil time is first read
    /// as UTC to ask for an offset, then the host is asked again at the
    /// adjusted instant. For civil times that repeat or are skipped by an
    /// offset transition, the result uses the offset in effect after the
    /// first adjustment.
    pub fn with_host(
        date: Date,
        time: ClockTime,
        host: &impl HostTimeZone,
    ) -> CalendarResult<Self> {
        let guess = Self::utc(date, time)?;
        let offset = host.get_host_offset(&guess)?;
        let first = Self::new(date, time, offset)?;
        let adjusted = host.get_host_offset(&first)?;
        if adjusted == offset {
            return Ok(first);
        }
        #[cfg(feature = "log")]
        trace!("host offset changed from {offset:?} to {adjusted:?} while resolving local time");
        Self::new(date, time, adjusted)
    }

    /// Creates a `Timestamp` from a civil date and time in the system's
    /// local time.
    #[cfg(feature = "sys-local")]
    pub fn local(date: Date, time: ClockTime) -> CalendarResult<Self> {
        Self::with_host(date, time, &crate::sys::LocalHostSystem)
    }

    /// Creates a `Timestamp` from a `BrokenDownTime`, using its offset.
    pub fn from_broken_down(broken_down: &BrokenDownTime) -> CalendarResult<Self> {
        Self::new(
            broken_down.date()?,
            broken_down.clock_time()?,
            broken_down.offset,
        )
    }

    /// Returns the current system time.
    ///
    /// Enable with the `sys` feature flag.
    #[cfg(feature = "sys")]
    pub fn now() -> CalendarResult<Self> {
        crate::sys::SystemNow::utc_now().timestamp()
    }

    /// Returns the whole seconds since the epoch, rounded toward negative
    /// infinity.
    #[inline]
    #[must_use]
    pub const fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the nanoseconds past `epoch_seconds`, in `0..1_000_000_000`.
    #[inline]
    #[must_use]
    pub const fn subsec_nanoseconds(&self) -> u32 {
        self.nanoseconds
    }

    /// Returns the nanoseconds since the epoch.
    #[inline]
    #[must_use]
    pub const fn epoch_nanoseconds(&self) -> EpochNanoseconds {
        EpochNanoseconds(self.seconds as i128 * NS_PER_SECOND as i128 + self.nanoseconds as i128)
    }

    /// Returns the civil date of this instant under `offset`.
    pub fn date(&self, offset: TimeDelta) -> CalendarResult<Date> {
        self.to_iso_date_time(&offset)
            .map(|iso| Date::new_unchecked(iso.date))
    }

    /// Returns the time of day of this instant under `offset`.
    ///
    /// Unlike `date`, this does not depend on the year staying in range.
    pub fn clock_time(&self, offset: TimeDelta) -> CalendarResult<ClockTime> {
        let local = self
            .epoch_nanoseconds()
            .as_i128()
            .checked_add(offset.nanoseconds())
            .ok_or(CalendarError::overflow().with_message("offset exceeds the instant range."))?;
        let (_, time) = IsoTime::balance(local);
        Ok(ClockTime::new_unchecked(time))
    }

    /// Returns the civil fields of this instant under `offset`.
    pub fn to_broken_down(&self, offset: TimeDelta) -> CalendarResult<BrokenDownTime> {
        let iso = self.to_iso_date_time(&offset)?;
        Ok(BrokenDownTime::from_parts(
            Date::new_unchecked(iso.date),
            ClockTime::new_unchecked(iso.time),
            offset,
        ))
    }

    /// Returns the civil date of this instant in UTC.
    #[inline]
    pub fn date_utc(&self) -> CalendarResult<Date> {
        self.date(TimeDelta::ZERO)
    }

    /// Returns the time of day of this instant in UTC.
    #[inline]
    pub fn clock_time_utc(&self) -> CalendarResult<ClockTime> {
        self.clock_time(TimeDelta::ZERO)
    }

    /// Returns the civil fields of this instant in UTC.
    #[inline]
    pub fn to_broken_down_utc(&self) -> CalendarResult<BrokenDownTime> {
        self.to_broken_down(TimeDelta::ZERO)
    }

    /// Returns the civil date of this instant under the host's offset.
    pub fn date_with_host(&self, host: &impl HostTimeZone) -> CalendarResult<Date> {
        self.date(host.get_host_offset(self)?)
    }

    /// Returns the time of day of this instant under the host's offset.
    pub fn clock_time_with_host(&self, host: &impl HostTimeZone) -> CalendarResult<ClockTime> {
        self.clock_time(host.get_host_offset(self)?)
    }

    /// Returns the civil fields of this instant under the host's offset.
    pub fn to_broken_down_with_host(
        &self,
        host: &impl HostTimeZone,
    ) -> CalendarResult<BrokenDownTime> {
        self.to_broken_down(host.get_host_offset(self)?)
    }

    /// Returns the civil date of this instant in the system's local time.
    #[cfg(feature = "sys-local")]
    pub fn date_local(&self) -> CalendarResult<Date> {
        self.date_with_host(&crate::sys::LocalHostSystem)
    }

    /// Returns the time of day of this instant in the system's local time.
    #[cfg(feature = "sys-local")]
    pub fn clock_time_local(&self) -> CalendarResult<ClockTime> {
        self.clock_time_with_host(&crate::sys::LocalHostSystem)
    }

    /// Returns the civil fields of this instant in the system's local time.
    #[cfg(feature = "sys-local")]
    pub fn to_broken_down_local(&self) -> CalendarResult<BrokenDownTime> {
        self.to_broken_down_with_host(&crate::sys::LocalHostSystem)
    }

    /// Adds an exact `TimeDelta`.
    pub fn checked_add_time_delta(&self, delta: &TimeDelta) -> CalendarResult<Self> {
        let nanoseconds = self
            .epoch_nanoseconds()
            .as_i128()
            .checked_add(delta.nanoseconds())
            .ok_or(Self::range_error())?;
        Self::from_epoch_nanoseconds(nanoseconds)
    }

    /// Subtracts an exact `TimeDelta`.
    pub fn checked_sub_time_delta(&self, delta: &TimeDelta) -> CalendarResult<Self> {
        self.checked_add_time_delta(&delta.checked_neg()?)
    }

    /// Adds calendar days to the civil date under `offset`, keeping the
    /// time of day.
    pub fn checked_add_days(&self, days: DayDelta, offset: TimeDelta) -> CalendarResult<Self> {
        self.map_date(&offset, |date| date.checked_add_days(days))
    }

    /// Subtracts calendar days from the civil date under `offset`, keeping
    /// the time of day.
    pub fn checked_sub_days(&self, days: DayDelta, offset: TimeDelta) -> CalendarResult<Self> {
        self.map_date(&offset, |date| date.checked_sub_days(days))
    }

    /// Adds calendar months to the civil date under `offset`, clamping the
    /// day and keeping the time of day.
    ///
    /// ```rust
    /// use calendar_rs::{MonthDelta, TimeDelta, Timestamp};
    ///
    /// // 2021-01-31T12:00:00Z
    /// let stamp = Timestamp::from_seconds(1_612_094_400);
    /// let next = stamp.checked_add_months(MonthDelta::from_months(1), TimeDelta::ZERO).unwrap();
    /// // 2021-02-28T12:00:00Z
    /// assert_eq!(next, Timestamp::from_seconds(1_614_513_600));
    /// ```
    pub fn checked_add_months(
        &self,
        months: MonthDelta,
        offset: TimeDelta,
    ) -> CalendarResult<Self> {
        self.map_date(&offset, |date| date.checked_add_months(months))
    }

    /// Subtracts calendar months from the civil date under `offset`,
    /// clamping the day and keeping the time of day.
    pub fn checked_sub_months(
        &self,
        months: MonthDelta,
        offset: TimeDelta,
    ) -> CalendarResult<Self> {
        self.map_date(&offset, |date| date.checked_sub_months(months))
    }

    /// Returns the exact time from `other` to `self`.
    #[must_use]
    pub const fn difference(&self, other: &Self) -> TimeDelta {
        // NOTE: two i64 second counts in nanoseconds cannot overflow i128.
        TimeDelta::from_nanoseconds(
            self.epoch_nanoseconds().as_i128() - other.epoch_nanoseconds().as_i128(),
        )
    }

    /// Returns the exact, nonnegative time between two instants.
    #[must_use]
    pub const fn absolute_difference(&self, other: &Self) -> TimeDelta {
        TimeDelta::from_nanoseconds(
            (self.epoch_nanoseconds().as_i128() - other.epoch_nanoseconds().as_i128()).abs(),
        )
    }

    /// Returns the distance between two instants as whole years, months
    /// and days plus the remaining time, with both read under `offset`.
    ///
    /// The result does not depend on the order of the instants.
    pub fn calendar_difference(
        &self,
        other: &Self,
        offset: TimeDelta,
    ) -> CalendarResult<TimestampDifference> {
        let (earlier, later) = if self <= other {
            (self, other)
        } else {
            (other, self)
        };
        let start = earlier.to_iso_date_time(&offset)?;
        let end = later.to_iso_date_time(&offset)?;

        let start_time = ClockTime::new_unchecked(start.time);
        let end_time = ClockTime::new_unchecked(end.time);
        let mut end_date = Date::new_unchecked(end.date);
        let mut time = end_time.difference(&start_time);
        if time.is_negative() {
            // Borrow a day; the later date is always after the earlier one here.
            end_date = end_date.checked_sub_days(DayDelta::from_days(1))?;
            time = TimeDelta::from_nanoseconds(time.nanoseconds() + i128::from(NS_PER_DAY));
        }

        let date = Date::new_unchecked(start.date).calendar_difference(&end_date)?;
        Ok(TimestampDifference { date, time })
    }
}

impl TryFrom<EpochNanoseconds> for Timestamp {
    type Error = CalendarError;

    fn try_from(nanoseconds: EpochNanoseconds) -> Result<Self, Self::Error> {
        nanoseconds.check_validity()?;
        let (seconds, subsec) = nanoseconds.to_parts();
        let seconds = i64::try_from(seconds).map_err(|_| Self::range_error())?;
        Ok(Self::new_unchecked(seconds, subsec))
    }
}

impl From<Timestamp> for EpochNanoseconds {
    fn from(value: Timestamp) -> Self {
        value.epoch_nanoseconds()
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Timestamp {
    fn arbitrary(g: &mut quickcheck::Gen) -> Timestamp {
        // Keep the civil year within a couple hundred thousand years.
        let seconds = <i64 as quickcheck::Arbitrary>::arbitrary(g) % 6_000_000_000_000;
        let nanoseconds = <u32 as quickcheck::Arbitrary>::arbitrary(g) % NS_PER_SECOND as u32;
        Timestamp::new_unchecked(seconds, nanoseconds)
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Timestamp>> {
        let nanoseconds = self.nanoseconds;
        alloc::boxed::Box::new(
            quickcheck::Arbitrary::shrink(&self.seconds)
                .map(move |seconds| Timestamp::new_unchecked(seconds, nanoseconds)),
        )
    }
}

#[cfg(test)]
mod tests;
