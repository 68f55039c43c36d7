//! Trait definitions for accessing values from the host environment.
//!
//! NOTE: This is a power user API.
//!
//! The library never reads the system clock or the local offset on its
//! own. Both are supplied through these hooks, so a caller can plug in the
//! system implementations in [`crate::sys`], a fixed test host, or their
//! own source of time.

use crate::{time::EpochNanoseconds, CalendarResult, TimeDelta, Timestamp};

/// The `HostClock` trait defines an accessor to the host's clock.
pub trait HostClock {
    fn get_host_epoch_nanoseconds(&self) -> CalendarResult<EpochNanoseconds>;
}

/// The `HostTimeZone` trait defines the host's offset from UTC.
pub trait HostTimeZone {
    /// Returns the host's UTC offset in effect at `at`.
    fn get_host_offset(&self, at: &Timestamp) -> CalendarResult<TimeDelta>;
}

/// `HostHooks` marks whether a trait implements the required host hooks with some
/// system methods.
pub trait HostHooks: HostClock + HostTimeZone {
    fn get_system_epoch_nanoseconds(&self) -> CalendarResult<EpochNanoseconds> {
        self.get_host_epoch_nanoseconds()
    }

    fn get_system_offset(&self, at: &Timestamp) -> CalendarResult<TimeDelta> {
        self.get_host_offset(at)
    }
}

// Implement empty providers

impl HostClock for () {
    fn get_host_epoch_nanoseconds(&self) -> CalendarResult<EpochNanoseconds> {
        Ok(EpochNanoseconds::from_seconds(0))
    }
}

impl HostTimeZone for () {
    fn get_host_offset(&self, _: &Timestamp) -> CalendarResult<TimeDelta> {
        Ok(TimeDelta::ZERO)
    }
}

impl HostHooks for () {}

/// A host that always reports the same instant and offset.
///
/// This is useful for tests that need a deterministic "now".
///
/// ```rust
/// use calendar_rs::{host::FixedHostSystem, Now, TimeDelta, Timestamp};
///
/// let host = FixedHostSystem::new(
///     Timestamp::from_seconds(920_180_081),
///     TimeDelta::from_hours(-5),
/// );
/// let now = Now::new(host);
/// assert_eq!(now.timestamp().unwrap(), Timestamp::from_seconds(920_180_081));
/// assert_eq!(now.date().unwrap().day(), 28);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedHostSystem {
    now: Timestamp,
    offset: TimeDelta,
}

impl FixedHostSystem {
    /// Creates a new `FixedHostSystem`.
    #[inline]
    #[must_use]
    pub const fn new(now: Timestamp, offset: TimeDelta) -> Self {
        Self { now, offset }
    }
}

impl HostClock for FixedHostSystem {
    fn get_host_epoch_nanoseconds(&self) -> CalendarResult<EpochNanoseconds> {
        Ok(self.now.epoch_nanoseconds())
    }
}

impl HostTimeZone for FixedHostSystem {
    fn get_host_offset(&self, _: &Timestamp) -> CalendarResult<TimeDelta> {
        Ok(self.offset)
    }
}

impl HostHooks for FixedHostSystem {}
