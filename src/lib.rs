//! The `calendar_rs` crate implements proleptic Gregorian calendar and
//! clock arithmetic in Rust.
//!
//! ```rust
//! use calendar_rs::{Date, MonthDelta, Timestamp, ClockTime, TimeDelta};
//!
//! // Month arithmetic clamps to the end of the target month.
//! let date = Date::try_new(2021, 1, 31).unwrap();
//! let next = date.checked_add_months(MonthDelta::from_months(1)).unwrap();
//! assert_eq!(next, Date::try_new(2021, 2, 28).unwrap());
//!
//! // Timestamps are absolute; civil values are read under an offset.
//! let stamp = Timestamp::from_seconds(197_589_599);
//! let eastern = stamp.clock_time(TimeDelta::from_hours(-5)).unwrap();
//! assert_eq!(eastern, ClockTime::from_hms(16, 59, 59).unwrap());
//! ```
//!
//! The library works with six value types:
//!
//!   - [`Date`]: a year, month and day.
//!   - [`ClockTime`]: a time of day with nanosecond precision.
//!   - [`Timestamp`]: an absolute instant relative to the Unix epoch.
//!   - [`TimeDelta`]: an exact span of nanoseconds.
//!   - [`DayDelta`]: a span of whole calendar days.
//!   - [`MonthDelta`]: a span of whole calendar months.
//!
//! Offsets from UTC are plain [`TimeDelta`] values. No time zone
//! database is consulted; the host can report its own offset through
//! the [`host`] hooks.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    // Currently throws a false positive regarding dependencies that are only used in tests.
    unused_crate_dependencies,
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::too_many_lines,
    clippy::cognitive_complexity,
    clippy::missing_errors_doc,
    clippy::let_unit_value,
    clippy::option_if_let_else,

    // It may be worth to look if we can fix the issues highlighted by these lints.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap,
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod host;
pub mod options;
pub mod primitive;

#[cfg(feature = "sys")]
pub mod sys;

mod builtins;
mod epoch_nanoseconds;

#[doc(hidden)]
pub(crate) mod iso;
#[doc(hidden)]
pub(crate) mod rounding;
#[doc(hidden)]
pub(crate) mod utils;

use core::cmp::Ordering;

#[doc(inline)]
pub use error::CalendarError;

/// The `calendar_rs` result type
pub type CalendarResult<T> = Result<T, CalendarError>;

pub mod time {
    //! Epoch level time records.
    pub use crate::epoch_nanoseconds::EpochNanoseconds;
}

pub use crate::builtins::{
    BrokenDownTime, ClockTime, Date, DateDifference, DayDelta, IsoWeek, MonthDelta, Now,
    TimeDelta, Timestamp, TimestampDifference, Weekday,
};

/// A library specific trait for unwrapping assertions.
pub(crate) trait CalendarUnwrap {
    type Output;

    /// `calendar_rs` based assertion for unwrapping. This will panic in
    /// debug builds, but throws error during runtime.
    fn calendar_unwrap(self) -> CalendarResult<Self::Output>;
}

impl<T> CalendarUnwrap for Option<T> {
    type Output = T;

    fn calendar_unwrap(self) -> CalendarResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(CalendarError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! calendar_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::CalendarError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::CalendarError::assert());
        }
    };
}

/// A general Sign type.
#[repr(i8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sign {
    #[default]
    Positive = 1,
    Zero = 0,
    Negative = -1,
}

impl From<i8> for Sign {
    fn from(value: i8) -> Self {
        match value.cmp(&0) {
            Ordering::Greater => Self::Positive,
            Ordering::Equal => Self::Zero,
            Ordering::Less => Self::Negative,
        }
    }
}

impl From<Ordering> for Sign {
    fn from(value: Ordering) -> Self {
        Self::from(value as i8)
    }
}

impl Sign {
    /// Returns whether the sign is negative.
    #[inline]
    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }
}

// Relevant numeric constants
/// Nanoseconds per microsecond constant: 1e+3
pub const NS_PER_MICROSECOND: u64 = 1_000;
/// Nanoseconds per millisecond constant: 1e+6
pub const NS_PER_MILLISECOND: u64 = 1_000_000;
/// Nanoseconds per second constant: 1e+9
pub const NS_PER_SECOND: u64 = 1_000_000_000;
/// Nanoseconds per minute constant: 6e+10
pub const NS_PER_MINUTE: u64 = 60 * NS_PER_SECOND;
/// Nanoseconds per hour constant: 3.6e+12
pub const NS_PER_HOUR: u64 = 60 * NS_PER_MINUTE;
/// Nanoseconds per day constant: 8.64e+13
pub const NS_PER_DAY: u64 = MS_PER_DAY as u64 * 1_000_000;
/// Nanoseconds per week constant: 6.048e+14
pub const NS_PER_WEEK: u64 = 7 * NS_PER_DAY;
/// Milliseconds per day constant: 8.64e+7
pub const MS_PER_DAY: u32 = 24 * 60 * 60 * 1000;
/// Seconds per day constant: 86,400
pub const SECONDS_PER_DAY: i64 = 86_400;
