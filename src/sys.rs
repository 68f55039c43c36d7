//! Host hook implementations backed by the operating system.

use crate::builtins::Now;
use crate::host::{HostClock, HostHooks, HostTimeZone};
use crate::time::EpochNanoseconds;
use crate::{CalendarError, CalendarResult, TimeDelta, Timestamp};

#[cfg(all(feature = "log", feature = "sys-local"))]
use log::trace;
use web_time::{SystemTime, UNIX_EPOCH};

/// Accessors for a [`Now`] backed by the system clock.
pub struct SystemNow;

impl SystemNow {
    /// Get a `Now` object with a [`LocalHostSystem`], which reads civil
    /// values under the system's local offset.
    #[cfg(feature = "sys-local")]
    pub fn local_now() -> Now<LocalHostSystem> {
        Now::new(LocalHostSystem)
    }

    /// Get a `Now` object with a [`UtcHostSystem`], which reads civil
    /// values in UTC.
    pub fn utc_now() -> Now<UtcHostSystem> {
        Now::new(UtcHostSystem)
    }
}

/// A UTC host system implementation that will return the current time
/// with a zero offset.
///
/// This implementation is backed by [`std::time::SystemTime`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UtcHostSystem;

impl HostHooks for UtcHostSystem {}

impl HostClock for UtcHostSystem {
    fn get_host_epoch_nanoseconds(&self) -> CalendarResult<EpochNanoseconds> {
        get_system_nanoseconds()
    }
}

impl HostTimeZone for UtcHostSystem {
    fn get_host_offset(&self, _: &Timestamp) -> CalendarResult<TimeDelta> {
        Ok(TimeDelta::ZERO)
    }
}

/// A local host system implementation that will return the current time
/// with the system's offset from UTC.
///
/// This implementation is backed by [`std::time::SystemTime`] and
/// `localtime_r`.
#[cfg(feature = "sys-local")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalHostSystem;

#[cfg(feature = "sys-local")]
impl HostHooks for LocalHostSystem {}

#[cfg(feature = "sys-local")]
impl HostClock for LocalHostSystem {
    fn get_host_epoch_nanoseconds(&self) -> CalendarResult<EpochNanoseconds> {
        get_system_nanoseconds()
    }
}

#[cfg(feature = "sys-local")]
impl HostTimeZone for LocalHostSystem {
    fn get_host_offset(&self, at: &Timestamp) -> CalendarResult<TimeDelta> {
        let offset = get_system_offset(at)?;
        #[cfg(feature = "log")]
        trace!("system offset at {} is {} seconds", at.epoch_seconds(), offset.seconds());
        Ok(offset)
    }
}

#[cfg(all(
    feature = "sys-local",
    any(
        target_os = "linux",
        target_os = "android",
        target_os = "macos",
        target_os = "ios",
        target_os = "freebsd",
        target_os = "netbsd",
        target_os = "openbsd",
        target_os = "dragonfly",
    )
))]
fn get_system_offset(at: &Timestamp) -> CalendarResult<TimeDelta> {
    let time: libc::time_t = at
        .epoch_seconds()
        .try_into()
        .map_err(|_| CalendarError::host("Timestamp exceeds the system time_t range"))?;
    // SAFETY: `tm` is a plain C struct for which all zero bits is valid,
    // and `localtime_r` only writes into the provided buffer.
    let gmtoff = unsafe {
        let mut tm = core::mem::zeroed::<libc::tm>();
        if libc::localtime_r(&time, &mut tm).is_null() {
            return Err(CalendarError::host("Error fetching system offset"));
        }
        tm.tm_gmtoff
    };
    Ok(TimeDelta::from_seconds(i64::from(gmtoff)))
}

#[cfg(all(
    feature = "sys-local",
    not(any(
        target_os = "linux",
        target_os = "android",
        target_os = "macos",
        target_os = "ios",
        target_os = "freebsd",
        target_os = "netbsd",
        target_os = "openbsd",
        target_os = "dragonfly",
    ))
))]
fn get_system_offset(_: &Timestamp) -> CalendarResult<TimeDelta> {
    #[cfg(feature = "log")]
    log::warn!("local offsets are not supported on this platform, falling back to UTC");
    Ok(TimeDelta::ZERO)
}

/// Returns the system time in nanoseconds.
pub(crate) fn get_system_nanoseconds() -> CalendarResult<EpochNanoseconds> {
    let nanoseconds = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(since) => i128::try_from(since.as_nanos()),
        // The clock is set before 1970.
        Err(err) => i128::try_from(err.duration().as_nanos()).map(|ns| -ns),
    }
    .map_err(|_| CalendarError::host("Error fetching system time"))?;
    Ok(EpochNanoseconds::from(nanoseconds))
}

#[cfg(test)]
mod tests {
    use super::{get_system_nanoseconds, SystemNow, UtcHostSystem};
    use crate::{host::HostTimeZone, TimeDelta, Timestamp};

    #[test]
    fn system_clock_is_after_2020() {
        let now = get_system_nanoseconds().unwrap();
        assert!(now.as_i128() > 1_577_836_800_000_000_000);
        assert!(Timestamp::now().unwrap() > Timestamp::from_seconds(1_577_836_800));
        assert!(SystemNow::utc_now().date_utc().unwrap().year() >= 2020);
    }

    #[test]
    fn utc_host_has_no_offset() {
        let offset = UtcHostSystem
            .get_host_offset(&Timestamp::from_seconds(197_589_599))
            .unwrap();
        assert_eq!(offset, TimeDelta::ZERO);
    }

    #[cfg(feature = "sys-local")]
    #[test]
    fn local_offset_is_within_a_day() {
        use super::LocalHostSystem;

        let offset = LocalHostSystem
            .get_host_offset(&Timestamp::from_seconds(197_589_599))
            .unwrap();
        assert!(offset.checked_abs().unwrap() < TimeDelta::from_hours(24));

        let stamp = Timestamp::from_seconds(1_000_000_000);
        let date = stamp.date_local().unwrap();
        let time = stamp.clock_time_local().unwrap();
        assert_eq!(Timestamp::local(date, time).unwrap(), stamp);
    }
}
