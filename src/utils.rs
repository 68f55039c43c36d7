//! Utility date and time equations for `calendar_rs`

use date_equations::gregorian;

/// Returns whether the proleptic Gregorian year is a leap year.
#[inline]
pub(crate) const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the year.
#[inline]
pub(crate) const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Returns the number of days in the month.
///
/// NOTE: Month should be in a range of 1-12
#[inline]
pub(crate) const fn iso_days_in_month(year: i32, month: u8) -> u8 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Returns the ordinal day of the year, 1 based.
#[inline]
pub(crate) const fn day_of_year(year: i32, month: u8, day: u8) -> u16 {
    let days = gregorian::epoch_days_from_ymd(year, month, day)
        - gregorian::epoch_days_from_ymd(year, 1, 1);
    days as u16 + 1
}

/// Returns the day of the week for an epoch day, where Monday is 0 and
/// Sunday is 6.
///
/// 1970-01-01 was a Thursday.
#[inline]
pub(crate) const fn epoch_days_to_weekday(epoch_days: i64) -> u8 {
    (epoch_days + 3).rem_euclid(7) as u8
}

/// Returns the epoch day of the Monday that starts week 1 of the ISO
/// week-numbering year.
///
/// Week 1 is the week holding January 4th, which is also the week holding
/// the year's first Thursday.
#[inline]
pub(crate) const fn iso_week_start(year: i32) -> i64 {
    let january_fourth = gregorian::epoch_days_from_ymd(year, 1, 4);
    january_fourth - epoch_days_to_weekday(january_fourth) as i64
}

/// Returns the number of ISO weeks in the ISO week-numbering year.
#[inline]
pub(crate) const fn iso_weeks_in_year(year: i32) -> u8 {
    // A year has 53 weeks when it starts on a Thursday, or on a
    // Wednesday in a leap year.
    let weekday = epoch_days_to_weekday(gregorian::epoch_days_from_ymd(year, 1, 1));
    if weekday == 3 || (weekday == 2 && is_leap_year(year)) {
        53
    } else {
        52
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2004));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2001));
        assert!(!is_leap_year(-100));
        assert_eq!(days_in_year(2000), 366);
        assert_eq!(days_in_year(1900), 365);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(iso_days_in_month(2000, 2), 29);
        assert_eq!(iso_days_in_month(1900, 2), 28);
        assert_eq!(iso_days_in_month(2021, 4), 30);
        assert_eq!(iso_days_in_month(2021, 12), 31);
    }

    #[test]
    fn ordinal_days() {
        assert_eq!(day_of_year(2000, 1, 1), 1);
        assert_eq!(day_of_year(2000, 2, 29), 60);
        assert_eq!(day_of_year(2000, 12, 31), 366);
        assert_eq!(day_of_year(2001, 12, 31), 365);
    }

    #[test]
    fn weekdays() {
        // Thursday
        assert_eq!(epoch_days_to_weekday(0), 3);
        // 2000-01-01 was a Saturday.
        assert_eq!(epoch_days_to_weekday(10_957), 5);
        // 1969-12-29 was a Monday.
        assert_eq!(epoch_days_to_weekday(-3), 0);
    }

    #[test]
    fn week_starts() {
        // 2004-W01-1 is 2003-12-29.
        assert_eq!(
            iso_week_start(2004),
            gregorian::epoch_days_from_ymd(2003, 12, 29)
        );
        // 2010-W01-1 is 2010-01-04.
        assert_eq!(
            iso_week_start(2010),
            gregorian::epoch_days_from_ymd(2010, 1, 4)
        );
        assert_eq!(iso_weeks_in_year(2004), 53);
        assert_eq!(iso_weeks_in_year(2009), 53);
        assert_eq!(iso_weeks_in_year(2010), 52);
        assert_eq!(iso_weeks_in_year(2020), 53);
    }
}
