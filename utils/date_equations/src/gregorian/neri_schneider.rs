// NOTE: Every `i32` year must be supported.
//
// The forward equations divide the computational year, so the year has
// to be non-negative for truncating division to agree with flooring.
//
// ceil((2^31 + 1) / 400) = 5_368_710 = SHIFTS
//

const EPOCH_COMPUTATIONAL_RATA_DIE: i64 = 719_468;

const DAYS_IN_A_400Y_CYCLE: u64 = 146_097;
const TWO_POWER_THIRTY_NINE: u64 = 549_755_813_888; // 2^39 constant
const TWO_POWER_SIXTEEN: u64 = 65_536; // 2^16 constant

const SHIFTS: i64 = 5_368_710;
const YEAR_SHIFT_CONSTANT: i64 = 400 * SHIFTS;
const RATA_DIE_SHIFT_CONSTANT: i64 =
    EPOCH_COMPUTATIONAL_RATA_DIE + DAYS_IN_A_400Y_CYCLE as i64 * SHIFTS; // K

/// The epoch day of January 1, `i32::MIN`.
pub const MIN_EPOCH_DAYS: i64 = epoch_days_from_gregorian_date(i32::MIN, 1, 1);
/// The epoch day of December 31, `i32::MAX`.
pub const MAX_EPOCH_DAYS: i64 = epoch_days_from_gregorian_date(i32::MAX, 12, 31);

// ==== Gregorian date to computational days ====

/// Calculates the shifted computational Rata Die for a Gregorian date.
///
/// The month must be in 1..=12 and the day in 1..=31; the day is not
/// checked against the month length.
pub const fn rata_die_from_gregorian_date(year: i32, month: u8, day: u8) -> u64 {
    let (comp_year, comp_month, comp_day, century) = rata_die_first_equations(year, month, day);
    let y_star = 1461 * comp_year / 4 - century + century / 4;
    let m_star = (979 * comp_month - 2919) / 32;
    (y_star + m_star + comp_day) as u64
}

// Returns Y, M, D, C
const fn rata_die_first_equations(year: i32, month: u8, day: u8) -> (i64, i64, i64, i64) {
    let j = (month <= 2) as i64;
    let computational_year = year as i64 + YEAR_SHIFT_CONSTANT - j;
    let computational_month = month as i64 + 12 * j;
    let computational_day = day as i64 - 1;
    (
        computational_year,
        computational_month,
        computational_day,
        computational_year / 100,
    )
}

/// Returns the number of days since 1970-01-01 for a Gregorian date.
pub const fn epoch_days_from_gregorian_date(year: i32, month: u8, day: u8) -> i64 {
    rata_die_from_gregorian_date(year, month, day) as i64 - RATA_DIE_SHIFT_CONSTANT
}

// ==== Computational days to Gregorian YMD ====

const fn n_one(rata_die: u64) -> u64 {
    4 * rata_die + 3
}

const fn century_rem(rata_die: u64) -> u64 {
    n_one(rata_die) % DAYS_IN_A_400Y_CYCLE
}

const fn n_two(rata_die: u64) -> u64 {
    century_rem(rata_die) | 3
}

const fn n_three(rata_die: u64) -> u64 {
    2141 * computational_day_of_year(rata_die) + 197_913
}

// C
pub const fn century_number(rata_die: u64) -> u64 {
    n_one(rata_die) / DAYS_IN_A_400Y_CYCLE
}

// N_c
pub const fn days_in_century(rata_die: u64) -> u64 {
    century_rem(rata_die) / 4
}

// Z
pub const fn computational_year_of_century(rata_die: u64) -> u64 {
    (376_287_347 * n_two(rata_die)) / TWO_POWER_THIRTY_NINE
}

// N_y
pub const fn computational_day_of_year(rata_die: u64) -> u64 {
    (n_two(rata_die) - 1461 * computational_year_of_century(rata_die)) / 4
}

// Y
pub const fn computational_year(rata_die: u64) -> u64 {
    100 * century_number(rata_die) + computational_year_of_century(rata_die)
}

pub const fn computational_month(rata_die: u64) -> u64 {
    n_three(rata_die) / TWO_POWER_SIXTEEN
}

pub const fn computational_day(rata_die: u64) -> u64 {
    (n_three(rata_die) % TWO_POWER_SIXTEEN) / 2141
}

/// Returns the computational year, Gregorian month and day for a Rata Die.
///
/// The year is relative to the start of the computational calendar, so
/// callers working with shifted values must remove the shift.
pub const fn gregorian_ymd(rata_die: u64) -> (u64, u8, u8) {
    let day_of_year = computational_day_of_year(rata_die);
    let j = (day_of_year >= 306) as u64;
    let year = computational_year(rata_die) + j;
    let month = computational_month(rata_die) - 12 * j;
    let day = computational_day(rata_die) + 1;
    (year, month as u8, day as u8)
}

/// Returns the Gregorian year, month and day for a count of days since
/// 1970-01-01, or `None` when the year does not fit in an `i32`.
pub const fn gregorian_ymd_from_epoch_days(epoch_days: i64) -> Option<(i32, u8, u8)> {
    if epoch_days < MIN_EPOCH_DAYS || epoch_days > MAX_EPOCH_DAYS {
        return None;
    }
    let (year, month, day) = gregorian_ymd((epoch_days + RATA_DIE_SHIFT_CONSTANT) as u64);
    // Shift the year back to the proper date
    Some(((year as i64 - YEAR_SHIFT_CONSTANT) as i32, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPOCH_RATA_DIE: u64 = 719_468; // This is the Rata Die for 1970-01-01

    #[test]
    fn epoch_century_number() {
        let century_number = century_number(EPOCH_RATA_DIE);
        assert_eq!(century_number, 19);
        let day_number_in_century = days_in_century(EPOCH_RATA_DIE);
        assert_eq!(day_number_in_century, 25508);
    }

    #[test]
    fn epoch_year_of_century() {
        let year = computational_year_of_century(EPOCH_RATA_DIE);
        assert_eq!(year, 69);
    }

    #[test]
    fn epoch_day_of_year() {
        let day = computational_day_of_year(EPOCH_RATA_DIE);
        // January begins on day 306 of the computational calendar.
        assert_eq!(day, 306);
    }

    #[test]
    fn epoch_ymd() {
        let ymd = gregorian_ymd(EPOCH_RATA_DIE);
        assert_eq!(ymd, (1970, 1, 1))
    }

    #[test]
    fn epoch_days_from_date() {
        assert_eq!(epoch_days_from_gregorian_date(1970, 1, 1), 0);
        assert_eq!(epoch_days_from_gregorian_date(1969, 12, 31), -1);
        assert_eq!(epoch_days_from_gregorian_date(2000, 1, 1), 10_957);
        assert_eq!(epoch_days_from_gregorian_date(2000, 3, 1), 11_017);
        assert_eq!(epoch_days_from_gregorian_date(1900, 3, 1), -25_508);
        assert_eq!(epoch_days_from_gregorian_date(0, 1, 1), -719_528);
        assert_eq!(epoch_days_from_gregorian_date(275_760, 9, 14), 100_000_001);
        assert_eq!(epoch_days_from_gregorian_date(-271_821, 4, 19), -100_000_001);
    }

    #[test]
    fn epoch_days_to_date() {
        assert_eq!(gregorian_ymd_from_epoch_days(0), Some((1970, 1, 1)));
        assert_eq!(gregorian_ymd_from_epoch_days(-1), Some((1969, 12, 31)));
        assert_eq!(gregorian_ymd_from_epoch_days(-719_528), Some((0, 1, 1)));
        assert_eq!(gregorian_ymd_from_epoch_days(-719_529), Some((-1, 12, 31)));
        assert_eq!(
            gregorian_ymd_from_epoch_days(100_000_001),
            Some((275_760, 9, 14))
        );
        assert_eq!(
            gregorian_ymd_from_epoch_days(-100_000_001),
            Some((-271_821, 4, 19))
        );
    }

    #[test]
    fn i32_year_limits() {
        assert_eq!(
            gregorian_ymd_from_epoch_days(MIN_EPOCH_DAYS),
            Some((i32::MIN, 1, 1))
        );
        assert_eq!(
            gregorian_ymd_from_epoch_days(MAX_EPOCH_DAYS),
            Some((i32::MAX, 12, 31))
        );
        assert_eq!(gregorian_ymd_from_epoch_days(MIN_EPOCH_DAYS - 1), None);
        assert_eq!(gregorian_ymd_from_epoch_days(MAX_EPOCH_DAYS + 1), None);
        assert_eq!(gregorian_ymd_from_epoch_days(i64::MIN), None);
        assert_eq!(gregorian_ymd_from_epoch_days(i64::MAX), None);
    }

    fn naive_days_in_month(year: i32, month: u8) -> u8 {
        match month {
            4 | 6 | 9 | 11 => 30,
            2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
            2 => 28,
            _ => 31,
        }
    }

    #[test]
    fn day_by_day_walk() {
        let start = -800_000;
        let mut expected = gregorian_ymd_from_epoch_days(start).unwrap();
        for days in start..800_000 {
            let ymd = gregorian_ymd_from_epoch_days(days).unwrap();
            assert_eq!(ymd, expected, "epoch day {days}");
            assert_eq!(epoch_days_from_gregorian_date(ymd.0, ymd.1, ymd.2), days);

            let (year, month, day) = ymd;
            expected = if day < naive_days_in_month(year, month) {
                (year, month, day + 1)
            } else if month < 12 {
                (year, month + 1, 1)
            } else {
                (year + 1, 1, 1)
            };
        }
    }
}
