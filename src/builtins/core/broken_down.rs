//! This module implements `BrokenDownTime`, the civil interchange record.

use crate::{
    builtins::core::{ClockTime, Date, TimeDelta, Weekday},
    CalendarResult,
};

/// A civil date and time of day together with the offset they were read
/// under.
///
/// The fields mirror C's `struct tm`, with a full year, a 1 based month
/// and an exact offset instead of a zone abbreviation. They are plain
/// public fields, so they are validated only when converted back into a
/// [`Date`], [`ClockTime`] or [`crate::Timestamp`].
///
/// ```rust
/// use calendar_rs::{TimeDelta, Timestamp, Weekday};
///
/// let stamp = Timestamp::from_seconds(197_589_599);
/// let tm = stamp.to_broken_down(TimeDelta::from_hours(-5)).unwrap();
/// assert_eq!((tm.year, tm.month, tm.day), (1976, 4, 5));
/// assert_eq!((tm.hour, tm.minute, tm.second), (16, 59, 59));
/// assert_eq!(tm.weekday().unwrap(), Weekday::Monday);
/// assert_eq!(Timestamp::from_broken_down(&tm).unwrap(), stamp);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BrokenDownTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub nanosecond: u32,
    /// The offset from UTC the fields are expressed in.
    pub offset: TimeDelta,
}

impl BrokenDownTime {
    pub(crate) fn from_parts(date: Date, time: ClockTime, offset: TimeDelta) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
            nanosecond: time.nanosecond(),
            offset,
        }
    }

    /// Validates the date fields into a `Date`.
    pub fn date(&self) -> CalendarResult<Date> {
        Date::try_new(self.year, self.month, self.day)
    }

    /// Validates the time fields into a `ClockTime`.
    pub fn clock_time(&self) -> CalendarResult<ClockTime> {
        ClockTime::try_new(self.hour, self.minute, self.second, self.nanosecond)
    }

    /// Returns the day of the week of the date fields.
    pub fn weekday(&self) -> CalendarResult<Weekday> {
        self.date().map(|date| date.day_of_week())
    }

    /// Returns the 1 based day of the year of the date fields.
    pub fn day_of_year(&self) -> CalendarResult<u16> {
        self.date().map(|date| date.day_of_year())
    }
}

#[cfg(test)]
mod tests {
    use super::BrokenDownTime;
    use crate::{error::ErrorKind, ClockTime, Date, TimeDelta, Weekday};

    #[test]
    fn validates_fields() {
        let mut tm = BrokenDownTime {
            year: 2000,
            month: 2,
            day: 29,
            hour: 23,
            minute: 59,
            second: 59,
            nanosecond: 1,
            offset: TimeDelta::from_hours(1),
        };
        assert_eq!(tm.date().unwrap(), Date::try_new(2000, 2, 29).unwrap());
        assert_eq!(
            tm.clock_time().unwrap(),
            ClockTime::try_new(23, 59, 59, 1).unwrap()
        );
        assert_eq!(tm.weekday().unwrap(), Weekday::Tuesday);
        assert_eq!(tm.day_of_year().unwrap(), 60);

        tm.year = 2001;
        assert_eq!(tm.date().unwrap_err().kind(), ErrorKind::InvalidDate);
        assert!(tm.weekday().is_err());

        tm.hour = 24;
        assert_eq!(
            tm.clock_time().unwrap_err().kind(),
            ErrorKind::InvalidClockTime
        );
    }

    #[test]
    fn default_is_not_a_date() {
        // Month and day zero are outside the calendar.
        assert!(BrokenDownTime::default().date().is_err());
        assert!(BrokenDownTime::default().clock_time().is_ok());
    }
}
