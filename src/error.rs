//! This module implements `CalendarError`.

use alloc::borrow::Cow;
use core::fmt;

/// `CalendarError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A date component or combination of components is out of range.
    #[default]
    InvalidDate,
    /// A clock time component is out of range.
    InvalidClockTime,
    /// A delta was divided by zero.
    DivisionByZero,
    /// A result cannot be represented.
    Overflow,
    /// The host environment failed to provide a value.
    Host,
    /// An internal invariant did not hold.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate => "InvalidDate",
            Self::InvalidClockTime => "InvalidClockTime",
            Self::DivisionByZero => "DivisionByZero",
            Self::Overflow => "Overflow",
            Self::Host => "HostError",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type for `calendar_rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl CalendarError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Create an invalid date error.
    #[inline]
    #[must_use]
    pub const fn invalid_date() -> Self {
        Self::new(ErrorKind::InvalidDate)
    }

    /// Create an invalid clock time error.
    #[inline]
    #[must_use]
    pub const fn invalid_clock_time() -> Self {
        Self::new(ErrorKind::InvalidClockTime)
    }

    /// Create a division by zero error.
    #[inline]
    #[must_use]
    pub const fn division_by_zero() -> Self {
        Self::new(ErrorKind::DivisionByZero)
    }

    /// Create an overflow error.
    #[inline]
    #[must_use]
    pub const fn overflow() -> Self {
        Self::new(ErrorKind::Overflow)
    }

    /// Create a host error with a message.
    #[inline]
    #[must_use]
    pub const fn host(msg: &'static str) -> Self {
        Self {
            kind: ErrorKind::Host,
            msg: Cow::Borrowed(msg),
        }
    }

    /// Creates an assertion error
    #[inline]
    #[must_use]
    pub(crate) const fn assert() -> Self {
        Self::new(ErrorKind::Assert)
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.msg
    }
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl core::error::Error for CalendarError {}

#[cfg(test)]
mod tests {
    use super::{CalendarError, ErrorKind};
    use alloc::string::ToString;

    #[test]
    fn display_with_and_without_message() {
        let err = CalendarError::invalid_date();
        assert_eq!(err.to_string(), "InvalidDate");

        let err =
            CalendarError::division_by_zero().with_message("cannot divide a DayDelta by zero.");
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
        assert_eq!(
            err.to_string(),
            "DivisionByZero: cannot divide a DayDelta by zero."
        );
    }
}
