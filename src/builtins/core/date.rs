//! This module implements `Date` and any directly related algorithms.

use crate::{
    builtins::core::{DayDelta, MonthDelta},
    iso::IsoDate,
    options::ArithmeticOverflow,
    utils, CalendarError, CalendarResult,
};
use core::fmt;

/// A day of the week.
///
/// The numbering follows ISO 8601, where Monday is the first day of the
/// week. Conversions to and from the zero based Sunday numbering used by
/// C's `struct tm` are also provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Creates a `Weekday` from an ISO day number, where Monday is 1 and
    /// Sunday is 7.
    ///
    /// For compatibility with `struct tm`, 0 is also accepted as Sunday.
    pub fn from_monday_one_offset(offset: u8) -> CalendarResult<Self> {
        match offset {
            0 | 7 => Ok(Self::Sunday),
            1..=6 => Ok(Self::from_monday_zero_offset_unchecked(offset - 1)),
            _ => Err(CalendarError::invalid_date().with_message("day of week must be in 0..=7.")),
        }
    }

    /// Creates a `Weekday` from a zero based number, where Sunday is 0 and
    /// Saturday is 6.
    pub fn from_sunday_zero_offset(offset: u8) -> CalendarResult<Self> {
        match offset {
            0 => Ok(Self::Sunday),
            1..=6 => Ok(Self::from_monday_zero_offset_unchecked(offset - 1)),
            _ => Err(CalendarError::invalid_date().with_message("day of week must be in 0..=6.")),
        }
    }

    /// Returns the ISO day number, where Monday is 1 and Sunday is 7.
    #[inline]
    #[must_use]
    pub const fn to_monday_one_offset(self) -> u8 {
        self.to_monday_zero_offset() + 1
    }

    /// Returns the day number where Monday is 0 and Sunday is 6.
    #[inline]
    #[must_use]
    pub const fn to_monday_zero_offset(self) -> u8 {
        self as u8
    }

    /// Returns the `struct tm` day number, where Sunday is 0 and Saturday
    /// is 6.
    #[inline]
    #[must_use]
    pub const fn to_sunday_zero_offset(self) -> u8 {
        (self.to_monday_zero_offset() + 1) % 7
    }

    pub(crate) const fn from_monday_zero_offset_unchecked(offset: u8) -> Self {
        match offset {
            0 => Self::Monday,
            1 => Self::Tuesday,
            2 => Self::Wednesday,
            3 => Self::Thursday,
            4 => Self::Friday,
            5 => Self::Saturday,
            _ => Self::Sunday,
        }
    }
}

/// A week in the ISO 8601 week-numbering calendar.
///
/// The week-numbering year can differ from the calendar year for dates
/// near January 1st.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoWeek {
    /// The ISO week-numbering year.
    pub year: i32,
    /// The week of the year, 1 through 53.
    pub week: u8,
}

/// The calendar breakdown of the distance between two dates.
///
/// Adding `12 * years + months` months and then `days` days to the
/// earlier date yields the later date.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateDifference {
    /// Whole years.
    pub years: i64,
    /// Whole months after the years, 0 through 11.
    pub months: u8,
    /// Remaining days after the months.
    pub days: i64,
}

impl DateDifference {
    /// Returns the years and months as one `MonthDelta`.
    #[inline]
    #[must_use]
    pub const fn to_month_delta(&self) -> MonthDelta {
        MonthDelta::from_months(self.years * 12 + self.months as i64)
    }

    /// Returns the days as a `DayDelta`.
    #[inline]
    #[must_use]
    pub const fn to_day_delta(&self) -> DayDelta {
        DayDelta::from_days(self.days)
    }
}

/// A proleptic Gregorian calendar date.
///
/// A `Date` is always valid; it can only be created through validating
/// constructors or arithmetic on valid dates.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    pub(crate) iso: IsoDate,
}

// ==== Private API ====

impl Date {
    /// Create a new `Date` from an `IsoDate` without validation.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(iso: IsoDate) -> Self {
        Self { iso }
    }

    fn add_months_internal(
        &self,
        months: i64,
        overflow: ArithmeticOverflow,
    ) -> CalendarResult<Self> {
        self.iso.add_months(months, overflow).map(Self::new_unchecked)
    }
}

// ==== Public API ====

impl Date {
    /// Creates a new `Date`, rejecting any out of range field.
    ///
    /// ```rust
    /// use calendar_rs::{error::ErrorKind, Date};
    ///
    /// let date = Date::try_new(2000, 2, 29).unwrap();
    /// assert_eq!(date.day(), 29);
    ///
    /// let err = Date::try_new(1900, 2, 29).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidDate);
    /// ```
    #[inline]
    pub fn try_new(year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        IsoDate::try_new(year, month, day).map(Self::new_unchecked)
    }

    /// Creates a `Date` for January 1st of `year`.
    #[inline]
    #[must_use]
    pub const fn from_year(year: i32) -> Self {
        Self::new_unchecked(IsoDate::new_unchecked(year, 1, 1))
    }

    /// Creates a `Date` for the first day of the month.
    #[inline]
    pub fn from_year_month(year: i32, month: u8) -> CalendarResult<Self> {
        Self::try_new(year, month, 1)
    }

    /// Creates a `Date` from a year and a 1 based day of the year.
    ///
    /// ```rust
    /// use calendar_rs::Date;
    ///
    /// let date = Date::from_year_day(2000, 60).unwrap();
    /// assert_eq!(date, Date::try_new(2000, 2, 29).unwrap());
    /// assert!(Date::from_year_day(2001, 366).is_err());
    /// ```
    pub fn from_year_day(year: i32, day_of_year: u16) -> CalendarResult<Self> {
        if day_of_year == 0 || day_of_year > utils::days_in_year(year) {
            return Err(CalendarError::invalid_date()
                .with_message("day of year must be within the days of the year."));
        }
        Self::from_year(year).checked_add_days(DayDelta::from_days(i64::from(day_of_year) - 1))
    }

    /// Creates the `Date` of the Monday that starts an ISO week.
    pub fn from_iso_week(year: i32, week: u8) -> CalendarResult<Self> {
        Self::from_iso_week_date(year, week, Weekday::Monday)
    }

    /// Creates a `Date` from an ISO week-numbering year, week and weekday.
    ///
    /// Week 1 is the week holding the year's first Thursday, so the result
    /// may fall in the previous or next calendar year.
    ///
    /// ```rust
    /// use calendar_rs::{Date, Weekday};
    ///
    /// let date = Date::from_iso_week_date(2004, 1, Weekday::Monday).unwrap();
    /// assert_eq!(date, Date::try_new(2003, 12, 29).unwrap());
    /// ```
    pub fn from_iso_week_date(year: i32, week: u8, weekday: Weekday) -> CalendarResult<Self> {
        if week == 0 || week > utils::iso_weeks_in_year(year) {
            return Err(CalendarError::invalid_date()
                .with_message("week must be within the weeks of the ISO year."));
        }
        let epoch_days = utils::iso_week_start(year)
            + (i64::from(week) - 1) * 7
            + i64::from(weekday.to_monday_zero_offset());
        Self::from_epoch_days(epoch_days)
    }

    /// Creates a `Date` from the number of days since 1970-01-01.
    #[inline]
    pub fn from_epoch_days(epoch_days: i64) -> CalendarResult<Self> {
        IsoDate::from_epoch_days(epoch_days).map(Self::new_unchecked)
    }

    /// Returns this `Date`'s year value.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.iso.year
    }

    /// Returns this `Date`'s month value.
    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.iso.month
    }

    /// Returns this `Date`'s day value.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.iso.day
    }

    /// Returns the 1 based day of the year.
    #[inline]
    #[must_use]
    pub const fn day_of_year(&self) -> u16 {
        utils::day_of_year(self.iso.year, self.iso.month, self.iso.day)
    }

    /// Returns the day of the week.
    #[inline]
    #[must_use]
    pub const fn day_of_week(&self) -> Weekday {
        Weekday::from_monday_zero_offset_unchecked(utils::epoch_days_to_weekday(
            self.to_epoch_days(),
        ))
    }

    /// Returns the ISO week holding this date.
    ///
    /// Days before week 1 belong to the last week of the previous ISO year,
    /// and days after the last week belong to week 1 of the next one.
    ///
    /// ```rust
    /// use calendar_rs::Date;
    ///
    /// let week = Date::try_new(2010, 1, 3).unwrap().week_of_year().unwrap();
    /// assert_eq!((week.year, week.week), (2009, 53));
    /// ```
    pub fn week_of_year(&self) -> CalendarResult<IsoWeek> {
        let overflow =
            || CalendarError::overflow().with_message("ISO week year exceeds the i32 range.");
        let epoch_days = self.to_epoch_days();
        let mut year = self.year();
        let mut start = utils::iso_week_start(year);
        if epoch_days < start {
            year = year.checked_sub(1).ok_or_else(overflow)?;
            start = utils::iso_week_start(year);
        } else if epoch_days >= start + i64::from(utils::iso_weeks_in_year(year)) * 7 {
            year = year.checked_add(1).ok_or_else(overflow)?;
            start = utils::iso_week_start(year);
        }
        // NOTE: The week is within 1..=53 once the year is resolved.
        let week = ((epoch_days - start) / 7 + 1) as u8;
        Ok(IsoWeek { year, week })
    }

    /// Returns whether the date's year is a leap year.
    #[inline]
    #[must_use]
    pub const fn in_leap_year(&self) -> bool {
        utils::is_leap_year(self.iso.year)
    }

    /// Returns the number of days in the date's month.
    #[inline]
    #[must_use]
    pub const fn days_in_month(&self) -> u8 {
        utils::iso_days_in_month(self.iso.year, self.iso.month)
    }

    /// Returns the number of days in the date's year.
    #[inline]
    #[must_use]
    pub const fn days_in_year(&self) -> u16 {
        utils::days_in_year(self.iso.year)
    }

    /// Returns the number of days since 1970-01-01.
    #[inline]
    #[must_use]
    pub const fn to_epoch_days(&self) -> i64 {
        self.iso.to_epoch_days()
    }

    /// Returns the date `days` days after this one.
    pub fn checked_add_days(&self, days: DayDelta) -> CalendarResult<Self> {
        self.iso.add_days(days.days()).map(Self::new_unchecked)
    }

    /// Returns the date `days` days before this one.
    pub fn checked_sub_days(&self, days: DayDelta) -> CalendarResult<Self> {
        self.checked_add_days(days.checked_neg()?)
    }

    /// Returns the date `months` months after this one, clamping the day to
    /// the end of the target month.
    pub fn checked_add_months(&self, months: MonthDelta) -> CalendarResult<Self> {
        self.add_months_internal(months.months(), ArithmeticOverflow::Constrain)
    }

    /// Returns the date `months` months before this one, clamping the day to
    /// the end of the target month.
    pub fn checked_sub_months(&self, months: MonthDelta) -> CalendarResult<Self> {
        self.checked_add_months(months.checked_neg()?)
    }

    /// Returns the date `months` months after this one, regulating the day
    /// with `overflow`.
    ///
    /// With `ArithmeticOverflow::Reject`, a day that does not exist in the
    /// target month is an error instead of being clamped.
    pub fn add_months_with_overflow(
        &self,
        months: MonthDelta,
        overflow: ArithmeticOverflow,
    ) -> CalendarResult<Self> {
        self.add_months_internal(months.months(), overflow)
    }

    /// Returns the signed number of days from `other` to `self`.
    ///
    /// ```rust
    /// use calendar_rs::{Date, DayDelta};
    ///
    /// let a = Date::try_new(2000, 3, 1).unwrap();
    /// let b = Date::try_new(2000, 2, 1).unwrap();
    /// assert_eq!(a.difference(&b), DayDelta::from_days(29));
    /// assert_eq!(b.difference(&a), DayDelta::from_days(-29));
    /// ```
    #[inline]
    #[must_use]
    pub const fn difference(&self, other: &Self) -> DayDelta {
        // NOTE: epoch days for i32 years are far from the i64 limits.
        DayDelta::from_days(self.to_epoch_days() - other.to_epoch_days())
    }

    /// Returns the unsigned number of days between two dates.
    #[inline]
    #[must_use]
    pub const fn absolute_difference(&self, other: &Self) -> DayDelta {
        DayDelta::from_days((self.to_epoch_days() - other.to_epoch_days()).abs())
    }

    /// Returns the distance between two dates as whole years, months and
    /// days, independent of their order.
    ///
    /// The months are the largest count that can be added to the earlier
    /// date, with day clamping, without passing the later date.
    ///
    /// ```rust
    /// use calendar_rs::Date;
    ///
    /// let a = Date::try_new(2019, 11, 30).unwrap();
    /// let b = Date::try_new(2021, 2, 27).unwrap();
    /// let diff = a.calendar_difference(&b).unwrap();
    /// assert_eq!((diff.years, diff.months, diff.days), (1, 2, 28));
    /// assert_eq!(b.calendar_difference(&a).unwrap(), diff);
    /// ```
    pub fn calendar_difference(&self, other: &Self) -> CalendarResult<DateDifference> {
        let (earlier, later) = if self <= other {
            (self, other)
        } else {
            (other, self)
        };
        let (months, days) = earlier.iso.diff_iso_date(&later.iso)?;
        Ok(DateDifference {
            years: months / 12,
            // NOTE: months is non-negative, so the remainder is within 0..12.
            months: (months % 12) as u8,
            days,
        })
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
        .fmt(f)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Date {
    fn arbitrary(g: &mut quickcheck::Gen) -> Date {
        let year = <i32 as quickcheck::Arbitrary>::arbitrary(g) % 200_000;
        let month = <u8 as quickcheck::Arbitrary>::arbitrary(g) % 12 + 1;
        let day = <u8 as quickcheck::Arbitrary>::arbitrary(g) % 31 + 1;
        let day = crate::iso::constrain_iso_day(year, month, day);
        Date::new_unchecked(IsoDate::new_unchecked(year, month, day))
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Date>> {
        alloc::boxed::Box::new(
            quickcheck::Arbitrary::shrink(&(self.year(), self.month(), self.day())).filter_map(
                |(year, month, day)| Date::try_new(year, month, day).ok(),
            ),
        )
    }
}
