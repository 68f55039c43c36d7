//! This module implements the internal field records.
//!
//! The three record types are:
//!   - `IsoDateTime`
//!   - `IsoDate`
//!   - `IsoTime`
//!
//! An `IsoDate` holds a proleptic Gregorian year, month, and day.
//!
//! An `IsoTime` holds an hour, minute, second, and nanosecond of a day.
//!
//! An `IsoDateTime` holds both an `IsoDate` and `IsoTime`, and is the
//! civil view of an instant under some offset.
//!
//! The records are validated on creation, and the public types wrap them.

use crate::{
    calendar_assert, epoch_nanoseconds::EpochNanoseconds, options::ArithmeticOverflow, utils,
    CalendarError, CalendarResult, CalendarUnwrap, NS_PER_DAY, NS_PER_HOUR, NS_PER_MINUTE,
    NS_PER_SECOND,
};
use date_equations::gregorian;

/// `IsoDateTime` is the record of the `IsoDate` and `IsoTime` fields.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoDateTime {
    pub date: IsoDate,
    pub time: IsoTime,
}

impl IsoDateTime {
    /// Creates a new `IsoDateTime` without any validation.
    pub(crate) const fn new_unchecked(date: IsoDate, time: IsoTime) -> Self {
        Self { date, time }
    }

    /// Creates an `IsoDateTime` from epoch nanoseconds viewed under an offset
    /// in nanoseconds.
    pub(crate) fn from_epoch_nanos(nanos: i128, offset: i128) -> CalendarResult<Self> {
        let local = nanos
            .checked_add(offset)
            .ok_or(CalendarError::overflow().with_message("offset exceeds the instant range."))?;
        let (days, time) = IsoTime::balance(local);
        let days = i64::try_from(days)
            .map_err(|_| CalendarError::overflow().with_message("day count exceeds i64."))?;
        let date = IsoDate::from_epoch_days(days)?;
        Ok(Self::new_unchecked(date, time))
    }

    /// Returns the epoch nanoseconds for this `IsoDateTime` when it is read
    /// as local time under an offset in nanoseconds.
    pub(crate) fn as_nanoseconds(&self, offset: i128) -> CalendarResult<EpochNanoseconds> {
        calendar_assert!(
            self.date.is_valid() && self.time.is_valid(),
            "invalid civil fields {:?}",
            self
        );
        // NOTE: days * NS_PER_DAY is at most ~6.8e25 and cannot overflow i128.
        let local = i128::from(self.date.to_epoch_days()) * i128::from(NS_PER_DAY)
            + i128::from(self.time.to_nanoseconds());
        let nanos = local
            .checked_sub(offset)
            .ok_or(CalendarError::overflow().with_message("offset exceeds the instant range."))?;
        let nanos = EpochNanoseconds::from(nanos);
        nanos.check_validity()?;
        Ok(nanos)
    }
}

// ==== `IsoDate` section ====

/// `IsoDate` serves as a record for the year, month, and day fields.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl Default for IsoDate {
    fn default() -> Self {
        Self::new_unchecked(1970, 1, 1)
    }
}

impl IsoDate {
    /// Creates a new `IsoDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new validated `IsoDate`.
    pub(crate) fn try_new(year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        Self::new_with_overflow(year, month, day, ArithmeticOverflow::Reject)
    }

    /// Creates a new `IsoDate`, regulating the day with the provided
    /// `ArithmeticOverflow`.
    pub(crate) fn new_with_overflow(
        year: i32,
        month: u8,
        day: u8,
        overflow: ArithmeticOverflow,
    ) -> CalendarResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::invalid_date().with_message("month must be in 1..=12."));
        }
        match overflow {
            ArithmeticOverflow::Constrain => {
                let day = constrain_iso_day(year, month, day);
                Ok(Self::new_unchecked(year, month, day))
            }
            ArithmeticOverflow::Reject => {
                if !is_valid_iso_day(year, month, day) {
                    return Err(CalendarError::invalid_date()
                        .with_message("day is not valid for the year and month."));
                }
                Ok(Self::new_unchecked(year, month, day))
            }
        }
    }

    /// Creates an `IsoDate` from a count of days since 1970-01-01.
    pub(crate) fn from_epoch_days(epoch_days: i64) -> CalendarResult<Self> {
        let (year, month, day) = gregorian::ymd_from_epoch_days(epoch_days)
            .ok_or(CalendarError::overflow().with_message("year exceeds the i32 range."))?;
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Returns the number of days since 1970-01-01.
    #[inline]
    pub(crate) const fn to_epoch_days(self) -> i64 {
        gregorian::epoch_days_from_ymd(self.year, self.month, self.day)
    }

    /// Returns if the current `IsoDate` is valid.
    pub(crate) fn is_valid(self) -> bool {
        (1..=12).contains(&self.month) && is_valid_iso_day(self.year, self.month, self.day)
    }

    /// Returns the `IsoDate` that is `days` days away from this one.
    pub(crate) fn add_days(self, days: i64) -> CalendarResult<Self> {
        let epoch_days = self
            .to_epoch_days()
            .checked_add(days)
            .ok_or(CalendarError::overflow().with_message("day count exceeds i64."))?;
        Self::from_epoch_days(epoch_days)
    }

    /// Returns the `IsoDate` that is `months` months away from this one.
    ///
    /// The day is regulated against the target month with `overflow`.
    pub(crate) fn add_months(
        self,
        months: i64,
        overflow: ArithmeticOverflow,
    ) -> CalendarResult<Self> {
        let (year, month) = balance_iso_year_month(self.year, self.month, months)?;
        Self::new_with_overflow(year, month, self.day, overflow)
    }

    /// Returns the whole months and remaining days from `self` to `other`,
    /// where `self` must not be later than `other`.
    ///
    /// The month count is the largest one for which adding it to `self`
    /// (constraining the day) does not pass `other`.
    pub(crate) fn diff_iso_date(&self, other: &Self) -> CalendarResult<(i64, i64)> {
        calendar_assert!(
            self <= other,
            "diff_iso_date called with a later start date {:?} > {:?}",
            self,
            other
        );

        // Start from the year-month distance, which can overshoot by at most one month.
        let mut months = (i64::from(other.year) - i64::from(self.year)) * 12
            + i64::from(other.month)
            - i64::from(self.month);
        let mut intermediate = self.add_months(months, ArithmeticOverflow::Constrain)?;
        while iso_date_surpasses(&intermediate, other) {
            months -= 1;
            intermediate = self.add_months(months, ArithmeticOverflow::Constrain)?;
        }

        let days = other.to_epoch_days() - intermediate.to_epoch_days();
        calendar_assert!(days >= 0 && months >= 0);
        Ok((months, days))
    }
}

// ==== `IsoTime` section ====

/// An `IsoTime` record that contains the time of day fields.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoTime {
    pub hour: u8,        // 0..=23
    pub minute: u8,      // 0..=59
    pub second: u8,      // 0..=59
    pub nanosecond: u32, // 0..=999_999_999
}

impl IsoTime {
    /// Creates a new `IsoTime` without any validation.
    pub(crate) const fn new_unchecked(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            nanosecond,
        }
    }

    /// Creates a new validated `IsoTime`.
    pub(crate) fn try_new(
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
    ) -> CalendarResult<Self> {
        if !is_valid_time(hour, minute, second, nanosecond) {
            return Err(CalendarError::invalid_clock_time().with_message(
                "clock time must be within 00:00:00.000000000 and 23:59:59.999999999.",
            ));
        }
        Ok(Self::new_unchecked(hour, minute, second, nanosecond))
    }

    /// Returns an `IsoTime` set to 12:00:00
    pub(crate) const fn noon() -> Self {
        Self::new_unchecked(12, 0, 0, 0)
    }

    /// Balances a nanosecond count into a day overflow and an `IsoTime`.
    ///
    /// The day overflow is floored, so negative values produce a time
    /// counted from the start of an earlier day.
    pub(crate) fn balance(nanoseconds: i128) -> (i128, Self) {
        let (days, nanos) = div_mod(nanoseconds, i128::from(NS_PER_DAY));
        // NOTE: nanos is in 0..NS_PER_DAY and fits in u64.
        (days, Self::from_nanoseconds_unchecked(nanos as u64))
    }

    /// Creates an `IsoTime` from nanoseconds since midnight, which must be
    /// less than a day.
    pub(crate) const fn from_nanoseconds_unchecked(nanoseconds: u64) -> Self {
        let hour = nanoseconds / NS_PER_HOUR;
        let minute = (nanoseconds % NS_PER_HOUR) / NS_PER_MINUTE;
        let second = (nanoseconds % NS_PER_MINUTE) / NS_PER_SECOND;
        let nanosecond = nanoseconds % NS_PER_SECOND;
        Self::new_unchecked(hour as u8, minute as u8, second as u8, nanosecond as u32)
    }

    /// Returns the nanoseconds since midnight.
    pub(crate) const fn to_nanoseconds(self) -> u64 {
        self.hour as u64 * NS_PER_HOUR
            + self.minute as u64 * NS_PER_MINUTE
            + self.second as u64 * NS_PER_SECOND
            + self.nanosecond as u64
    }

    /// Checks if the time is a valid `IsoTime`
    pub(crate) fn is_valid(&self) -> bool {
        is_valid_time(self.hour, self.minute, self.second, self.nanosecond)
    }
}

// ==== `IsoDate` specific utility functions ====

#[inline]
/// Returns with the `this` surpasses `other`.
fn iso_date_surpasses(this: &IsoDate, other: &IsoDate) -> bool {
    this > other
}

#[inline]
fn balance_iso_year_month(year: i32, month: u8, months: i64) -> CalendarResult<(i32, u8)> {
    // Count months from year zero so a single Euclidean division balances
    // the year and month.
    let total = (i64::from(year) * 12 + i64::from(month) - 1)
        .checked_add(months)
        .ok_or(CalendarError::overflow().with_message("month count exceeds i64."))?;
    let (year, month) = div_mod(i128::from(total), 12);
    let year = i32::try_from(year)
        .map_err(|_| CalendarError::overflow().with_message("year exceeds the i32 range."))?;
    let month = u8::try_from(month + 1).ok().calendar_unwrap()?;
    Ok((year, month))
}

#[inline]
pub(crate) const fn constrain_iso_day(year: i32, month: u8, day: u8) -> u8 {
    let days_in_month = utils::iso_days_in_month(year, month);
    if day < 1 {
        1
    } else if day > days_in_month {
        days_in_month
    } else {
        day
    }
}

#[inline]
pub(crate) const fn is_valid_iso_day(year: i32, month: u8, day: u8) -> bool {
    day >= 1 && day <= utils::iso_days_in_month(year, month)
}

// ==== `IsoTime` specific utilities ====

#[inline]
const fn is_valid_time(hour: u8, minute: u8, second: u8, nanosecond: u32) -> bool {
    hour <= 23 && minute <= 59 && second <= 59 && nanosecond < NS_PER_SECOND as u32
}

#[inline]
fn div_mod(dividend: i128, divisor: i128) -> (i128, i128) {
    (dividend.div_euclid(divisor), dividend.rem_euclid(divisor))
}
