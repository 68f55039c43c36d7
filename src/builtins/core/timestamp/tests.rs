use super::{Timestamp, TimestampDifference};
use crate::{
    error::ErrorKind,
    host::{FixedHostSystem, HostTimeZone},
    BrokenDownTime, CalendarResult, ClockTime, Date, DateDifference, DayDelta, MonthDelta,
    TimeDelta,
};

fn date(year: i32, month: u8, day: u8) -> Date {
    Date::try_new(year, month, day).unwrap()
}

fn time(hour: u8, minute: u8, second: u8) -> ClockTime {
    ClockTime::from_hms(hour, minute, second).unwrap()
}

fn offset(seconds: i32) -> TimeDelta {
    // Offsets within eighteen hours of UTC.
    TimeDelta::from_seconds(i64::from(seconds % 64_800))
}

#[test]
fn epoch_decomposes_to_midnight() {
    let stamp = Timestamp::from_seconds(0);
    assert_eq!(stamp, Timestamp::epoch());
    assert_eq!(stamp, Timestamp::UNIX_EPOCH);
    assert_eq!(stamp.date_utc().unwrap(), date(1970, 1, 1));
    assert_eq!(stamp.clock_time_utc().unwrap(), ClockTime::midnight());
}

#[test]
fn decomposition_under_offsets() {
    struct TestCase {
        offset_hours: i64,
        date: (i32, u8, u8),
        time: (u8, u8, u8),
    }

    let stamp = Timestamp::from_seconds(197_589_599);
    let cases = [
        TestCase {
            offset_hours: 0,
            date: (1976, 4, 5),
            time: (21, 59, 59),
        },
        TestCase {
            offset_hours: -5,
            date: (1976, 4, 5),
            time: (16, 59, 59),
        },
        TestCase {
            offset_hours: 3,
            date: (1976, 4, 6),
            time: (0, 59, 59),
        },
    ];

    for case in cases {
        let offset = TimeDelta::from_hours(case.offset_hours);
        let (y, m, d) = case.date;
        let (h, min, s) = case.time;
        assert_eq!(stamp.date(offset).unwrap(), date(y, m, d));
        assert_eq!(stamp.clock_time(offset).unwrap(), time(h, min, s));

        let tm = stamp.to_broken_down(offset).unwrap();
        assert_eq!((tm.year, tm.month, tm.day), (y, m, d));
        assert_eq!((tm.hour, tm.minute, tm.second), (h, min, s));
        assert_eq!(tm.offset, offset);
        assert_eq!(Timestamp::new(date(y, m, d), time(h, min, s), offset).unwrap(), stamp);
    }
}

#[test]
fn pre_epoch_values_use_floor_division() {
    let stamp = Timestamp::utc(date(1969, 12, 31), ClockTime::midnight()).unwrap();
    assert_eq!(stamp.epoch_seconds(), -86_400);

    let stamp = Timestamp::from_seconds(-1);
    assert_eq!(stamp.date_utc().unwrap(), date(1969, 12, 31));
    assert_eq!(stamp.clock_time_utc().unwrap(), time(23, 59, 59));

    let stamp = Timestamp::from_epoch_nanoseconds(-250_000_000).unwrap();
    assert_eq!(stamp.epoch_seconds(), -1);
    assert_eq!(stamp.subsec_nanoseconds(), 750_000_000);
    assert_eq!(
        stamp.clock_time_utc().unwrap(),
        ClockTime::try_new(23, 59, 59, 750_000_000).unwrap()
    );
    assert_eq!(stamp.epoch_nanoseconds().as_i128(), -250_000_000);
}

#[test]
fn epoch_parts_are_balanced() {
    let stamp = Timestamp::from_epoch_parts(1, 1_500_000_000).unwrap();
    assert_eq!((stamp.epoch_seconds(), stamp.subsec_nanoseconds()), (2, 500_000_000));

    let stamp = Timestamp::from_epoch_parts(-5, -1).unwrap();
    assert_eq!((stamp.epoch_seconds(), stamp.subsec_nanoseconds()), (-6, 999_999_999));

    assert_eq!(
        Timestamp::from_epoch_parts(i64::MAX, 1_000_000_000)
            .unwrap_err()
            .kind(),
        ErrorKind::Overflow
    );
    assert!(Timestamp::from_epoch_parts(i64::MIN, 0).is_ok());
    assert!(Timestamp::from_epoch_parts(i64::MIN, -1).is_err());
}

#[test]
fn ordering_by_seconds_then_nanoseconds() {
    let before = Timestamp::from_epoch_parts(-1, 999_999_999).unwrap();
    let after = Timestamp::from_seconds(0);
    assert!(before < after);
    assert!(Timestamp::from_epoch_parts(5, 1).unwrap() > Timestamp::from_seconds(5));
}

#[test]
fn broken_down_round_trip() {
    let stamp = Timestamp::from_epoch_parts(920_180_081, 986_000_000).unwrap();
    let tm = stamp.to_broken_down(TimeDelta::from_hours(-5)).unwrap();
    assert_eq!(
        tm,
        BrokenDownTime {
            year: 1999,
            month: 2,
            day: 28,
            hour: 0,
            minute: 34,
            second: 41,
            nanosecond: 986_000_000,
            offset: TimeDelta::from_hours(-5),
        }
    );
    assert_eq!(Timestamp::from_broken_down(&tm).unwrap(), stamp);
    assert_eq!(stamp.to_broken_down_utc().unwrap().hour, 5);

    let mut invalid = tm;
    invalid.day = 29;
    assert_eq!(
        Timestamp::from_broken_down(&invalid).unwrap_err().kind(),
        ErrorKind::InvalidDate
    );
}

#[test]
fn decomposition_out_of_year_range() {
    let stamp = Timestamp::from_seconds(i64::MAX);
    assert_eq!(stamp.date_utc().unwrap_err().kind(), ErrorKind::Overflow);
    assert!(stamp.clock_time_utc().is_ok());
}

#[test]
fn time_delta_arithmetic() {
    let stamp = Timestamp::from_seconds(10);
    assert_eq!(
        stamp
            .checked_add_time_delta(&TimeDelta::from_milliseconds(-10_250))
            .unwrap(),
        Timestamp::from_epoch_parts(-1, 750_000_000).unwrap()
    );
    assert_eq!(
        stamp
            .checked_sub_time_delta(&TimeDelta::from_days(1))
            .unwrap(),
        Timestamp::from_seconds(10 - 86_400)
    );
    assert_eq!(
        Timestamp::from_seconds(i64::MAX)
            .checked_add_time_delta(&TimeDelta::from_seconds(1))
            .unwrap_err()
            .kind(),
        ErrorKind::Overflow
    );
}

#[test]
fn calendar_arithmetic_under_offset() {
    let eastern = TimeDelta::from_hours(-5);
    // 2021-01-31T23:00:00-05:00
    let stamp = Timestamp::from_seconds(1_612_152_000);
    assert_eq!(stamp.date(eastern).unwrap(), date(2021, 1, 31));

    let next = stamp
        .checked_add_months(MonthDelta::from_months(1), eastern)
        .unwrap();
    // 2021-02-28T23:00:00-05:00
    assert_eq!(next, Timestamp::from_seconds(1_614_571_200));
    assert_eq!(next.clock_time(eastern).unwrap(), time(23, 0, 0));

    // Read in UTC the same instant is already in February.
    let utc_next = stamp
        .checked_add_months(MonthDelta::from_months(1), TimeDelta::ZERO)
        .unwrap();
    assert_eq!(utc_next.date_utc().unwrap(), date(2021, 3, 1));

    let back = next
        .checked_sub_days(DayDelta::from_days(28), eastern)
        .unwrap();
    assert_eq!(back.date(eastern).unwrap(), date(2021, 1, 31));
    assert_eq!(
        back.checked_add_days(DayDelta::from_days(28), eastern)
            .unwrap(),
        next
    );
    assert_eq!(
        next.checked_sub_months(MonthDelta::from_months(1), eastern)
            .unwrap(),
        Timestamp::from_seconds(1_611_892_800)
    );
}

#[test]
fn differences() {
    let a = Timestamp::from_epoch_parts(10, 500_000_000).unwrap();
    let b = Timestamp::from_seconds(-2);
    assert_eq!(a.difference(&b), TimeDelta::from_milliseconds(12_500));
    assert_eq!(b.difference(&a), TimeDelta::from_milliseconds(-12_500));
    assert_eq!(b.absolute_difference(&a), TimeDelta::from_milliseconds(12_500));
}

#[test]
fn calendar_difference_borrows_a_day() {
    // 2021-01-31T12:00:00Z and 2021-03-01T06:00:00Z
    let earlier = Timestamp::from_seconds(1_612_094_400);
    let later = Timestamp::from_seconds(1_614_578_400);
    let expected = TimestampDifference {
        date: DateDifference {
            years: 0,
            months: 1,
            days: 0,
        },
        time: TimeDelta::from_hours(18),
    };
    let diff = earlier.calendar_difference(&later, TimeDelta::ZERO).unwrap();
    assert_eq!(diff, expected);
    assert_eq!(
        later.calendar_difference(&earlier, TimeDelta::ZERO).unwrap(),
        expected
    );

    // Under +12 hours the two instants are 2021-02-01T00:00 and 2021-03-01T18:00.
    let diff = earlier
        .calendar_difference(&later, TimeDelta::from_hours(12))
        .unwrap();
    assert_eq!(
        diff.date,
        DateDifference {
            years: 0,
            months: 1,
            days: 0,
        }
    );
    assert_eq!(diff.time, TimeDelta::from_hours(18));
}

#[test]
fn host_offsets() {
    let host = FixedHostSystem::new(Timestamp::from_seconds(0), TimeDelta::from_hours(-5));
    let stamp = Timestamp::with_host(date(1976, 4, 5), time(16, 59, 59), &host).unwrap();
    assert_eq!(stamp, Timestamp::from_seconds(197_589_599));
    assert_eq!(stamp.date_with_host(&host).unwrap(), date(1976, 4, 5));
    assert_eq!(stamp.clock_time_with_host(&host).unwrap(), time(16, 59, 59));
    assert_eq!(
        stamp.to_broken_down_with_host(&host).unwrap().offset,
        TimeDelta::from_hours(-5)
    );

    let stamp = Timestamp::with_host(date(1976, 4, 5), time(16, 59, 59), &()).unwrap();
    assert_eq!(stamp, Timestamp::from_seconds(197_571_599));
}

#[test]
fn host_offset_transition_is_resolved_in_two_passes() {
    // A host that moves from -05:00 to -04:00 at 2001-09-09T01:46:40Z.
    struct TransitionHost;

    impl HostTimeZone for TransitionHost {
        fn get_host_offset(&self, at: &Timestamp) -> CalendarResult<TimeDelta> {
            if at.epoch_seconds() < 1_000_000_000 {
                Ok(TimeDelta::from_hours(-5))
            } else {
                Ok(TimeDelta::from_hours(-4))
            }
        }
    }

    let stamp =
        Timestamp::with_host(date(2001, 9, 9), ClockTime::midnight(), &TransitionHost).unwrap();
    assert_eq!(stamp, Timestamp::from_seconds(1_000_008_000));
    assert_eq!(
        stamp.clock_time_with_host(&TransitionHost).unwrap(),
        ClockTime::midnight()
    );

    let stamp = Timestamp::with_host(date(2001, 9, 8), time(12, 0, 0), &TransitionHost).unwrap();
    assert_eq!(stamp.clock_time(TimeDelta::from_hours(-5)).unwrap(), time(12, 0, 0));
}

quickcheck::quickcheck! {
    fn prop_decompose_then_recompose(stamp: Timestamp, offset_seconds: i32) -> bool {
        let offset = offset(offset_seconds);
        let date = stamp.date(offset).unwrap();
        let time = stamp.clock_time(offset).unwrap();
        Timestamp::new(date, time, offset).unwrap() == stamp
    }

    fn prop_broken_down_round_trip(stamp: Timestamp, offset_seconds: i32) -> bool {
        let tm = stamp.to_broken_down(offset(offset_seconds)).unwrap();
        Timestamp::from_broken_down(&tm).unwrap() == stamp
    }

    fn prop_time_delta_round_trip(stamp: Timestamp, delta: TimeDelta) -> bool {
        let moved = stamp.checked_add_time_delta(&delta).unwrap();
        moved.difference(&stamp) == delta && moved.checked_sub_time_delta(&delta).unwrap() == stamp
    }

    fn prop_days_keep_the_clock_time(
        stamp: Timestamp,
        days: DayDelta,
        offset_seconds: i32
    ) -> bool {
        let offset = offset(offset_seconds);
        let moved = stamp.checked_add_days(days, offset).unwrap();
        moved.clock_time(offset).unwrap() == stamp.clock_time(offset).unwrap()
            && moved.date(offset).unwrap().difference(&stamp.date(offset).unwrap()) == days
    }

    fn prop_calendar_difference_re_adds(a: Timestamp, b: Timestamp, offset_seconds: i32) -> bool {
        let offset = offset(offset_seconds);
        let diff = a.calendar_difference(&b, offset).unwrap();
        let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
        let moved = earlier
            .checked_add_months(diff.date.to_month_delta(), offset)
            .unwrap()
            .checked_add_days(diff.date.to_day_delta(), offset)
            .unwrap()
            .checked_add_time_delta(&diff.time)
            .unwrap();
        moved == later && !diff.time.is_negative() && diff.time < TimeDelta::from_days(1)
    }

    fn prop_ordering_matches_epoch_nanoseconds(a: Timestamp, b: Timestamp) -> bool {
        a.cmp(&b) == a.epoch_nanoseconds().cmp(&b.epoch_nanoseconds())
    }
}
