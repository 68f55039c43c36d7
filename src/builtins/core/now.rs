//! The `Now` component

use crate::{
    builtins::core::{ClockTime, Date, Timestamp},
    host::HostHooks,
    CalendarResult, TimeDelta,
};

/// Access to the current instant through a set of host hooks.
///
/// The hooks decide where "now" comes from. With the `sys` feature,
/// [`crate::sys::SystemNow`] provides a `Now` backed by the system clock,
/// while [`crate::host::FixedHostSystem`] gives a deterministic one.
///
/// ```rust
/// use calendar_rs::{host::FixedHostSystem, ClockTime, Date, Now, TimeDelta, Timestamp};
///
/// let stamp = Timestamp::from_epoch_parts(920_180_081, 986_000_000).unwrap();
/// let now = Now::new(FixedHostSystem::new(stamp, TimeDelta::from_hours(-5)));
///
/// assert_eq!(now.date_utc().unwrap(), Date::try_new(1999, 2, 28).unwrap());
/// assert_eq!(now.clock_time().unwrap().hour(), 0);
/// assert_eq!(now.clock_time_utc().unwrap().hour(), 5);
/// ```
pub struct Now<H: HostHooks> {
    host_hooks: H,
}

impl<H: HostHooks> Now<H> {
    /// Creates a new `Now` from host hooks.
    pub const fn new(host_hooks: H) -> Self {
        Self { host_hooks }
    }

    /// Returns the host's offset at `timestamp`.
    fn offset_at(&self, timestamp: &Timestamp) -> CalendarResult<TimeDelta> {
        self.host_hooks.get_system_offset(timestamp)
    }
}

impl<H: HostHooks> Now<H> {
    /// Returns the current instant.
    pub fn timestamp(&self) -> CalendarResult<Timestamp> {
        let nanoseconds = self.host_hooks.get_system_epoch_nanoseconds()?;
        Timestamp::try_from(nanoseconds)
    }

    /// Returns the current date under the host's offset.
    pub fn date(&self) -> CalendarResult<Date> {
        let now = self.timestamp()?;
        now.date(self.offset_at(&now)?)
    }

    /// Returns the current time of day under the host's offset.
    pub fn clock_time(&self) -> CalendarResult<ClockTime> {
        let now = self.timestamp()?;
        now.clock_time(self.offset_at(&now)?)
    }

    /// Returns the current date in UTC.
    pub fn date_utc(&self) -> CalendarResult<Date> {
        self.timestamp()?.date_utc()
    }

    /// Returns the current time of day in UTC.
    pub fn clock_time_utc(&self) -> CalendarResult<ClockTime> {
        self.timestamp()?.clock_time_utc()
    }
}

#[cfg(test)]
mod tests {
    use super::Now;
    use crate::{
        host::{FixedHostSystem, HostClock, HostHooks, HostTimeZone},
        time::EpochNanoseconds,
        CalendarResult, ClockTime, Date, TimeDelta, Timestamp,
    };

    #[test]
    fn fixed_host() {
        let stamp = Timestamp::from_epoch_parts(920_180_081, 986_000_000).unwrap();
        let now = Now::new(FixedHostSystem::new(stamp, TimeDelta::from_hours(-5)));
        assert_eq!(now.timestamp().unwrap(), stamp);
        assert_eq!(now.date().unwrap(), Date::try_new(1999, 2, 28).unwrap());
        assert_eq!(
            now.clock_time().unwrap(),
            ClockTime::try_new(0, 34, 41, 986_000_000).unwrap()
        );
        assert_eq!(
            now.clock_time_utc().unwrap(),
            ClockTime::try_new(5, 34, 41, 986_000_000).unwrap()
        );
    }

    #[test]
    fn empty_host_is_the_epoch() {
        let now = Now::new(());
        assert_eq!(now.timestamp().unwrap(), Timestamp::UNIX_EPOCH);
        assert_eq!(now.date().unwrap(), Date::try_new(1970, 1, 1).unwrap());
        assert_eq!(now.clock_time().unwrap(), ClockTime::midnight());
    }

    #[test]
    fn host_errors_propagate() {
        struct OutOfRangeHost;

        impl HostClock for OutOfRangeHost {
            fn get_host_epoch_nanoseconds(&self) -> CalendarResult<EpochNanoseconds> {
                Ok(EpochNanoseconds::from(i128::MAX))
            }
        }

        impl HostTimeZone for OutOfRangeHost {
            fn get_host_offset(&self, _: &Timestamp) -> CalendarResult<TimeDelta> {
                Ok(TimeDelta::ZERO)
            }
        }

        impl HostHooks for OutOfRangeHost {}

        let now = Now::new(OutOfRangeHost);
        assert!(now.timestamp().is_err());
        assert!(now.date_utc().is_err());
    }
}
