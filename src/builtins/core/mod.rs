//! The primary date, time and span types of `calendar_rs`.

mod broken_down;
mod clock_time;
mod date;
mod day_delta;
mod month_delta;
mod now;
mod time_delta;
mod timestamp;

#[doc(inline)]
pub use broken_down::BrokenDownTime;
#[doc(inline)]
pub use clock_time::ClockTime;
#[doc(inline)]
pub use date::{Date, DateDifference, IsoWeek, Weekday};
#[doc(inline)]
pub use day_delta::DayDelta;
#[doc(inline)]
pub use month_delta::MonthDelta;
#[doc(inline)]
pub use now::Now;
#[doc(inline)]
pub use time_delta::TimeDelta;
#[doc(inline)]
pub use timestamp::{Timestamp, TimestampDifference};
