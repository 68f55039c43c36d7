//! This module implements `MonthDelta`.

use crate::{CalendarError, CalendarResult};

/// A signed span of whole calendar months.
///
/// Months have no fixed length, so a `MonthDelta` never converts to a
/// `TimeDelta`. Applying one to a `Date` moves the month and clamps the
/// day to the end of the target month.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDelta {
    months: i64,
}

impl MonthDelta {
    #[inline]
    fn checked_from(months: Option<i64>) -> CalendarResult<Self> {
        months.map(Self::from_months).ok_or(
            CalendarError::overflow().with_message("MonthDelta exceeds the i64 month range."),
        )
    }
}

impl MonthDelta {
    /// Creates a new `MonthDelta` from months.
    #[inline]
    #[must_use]
    pub const fn from_months(months: i64) -> Self {
        Self { months }
    }

    /// Creates a new `MonthDelta` from years of 12 months.
    pub fn from_years(years: i64) -> CalendarResult<Self> {
        Self::checked_from(years.checked_mul(12))
    }

    /// Creates a zero length `MonthDelta`.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::from_months(0)
    }

    /// Returns the number of months.
    #[inline]
    #[must_use]
    pub const fn months(&self) -> i64 {
        self.months
    }

    /// Returns the whole years, truncated toward zero.
    #[inline]
    #[must_use]
    pub const fn years(&self) -> i64 {
        self.months / 12
    }

    /// Returns the length in years as a float.
    #[inline]
    #[must_use]
    pub fn years_decimal(&self) -> f64 {
        (self.months / 12) as f64 + (self.months % 12) as f64 / 12.0
    }

    /// Returns whether the `MonthDelta` is less than zero.
    #[inline]
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.months < 0
    }

    /// Returns the negated `MonthDelta`.
    pub fn checked_neg(&self) -> CalendarResult<Self> {
        Self::checked_from(self.months.checked_neg())
    }

    /// Adds two `MonthDelta`s.
    pub fn checked_add(&self, other: &Self) -> CalendarResult<Self> {
        Self::checked_from(self.months.checked_add(other.months))
    }

    /// Subtracts `other` from this `MonthDelta`.
    pub fn checked_sub(&self, other: &Self) -> CalendarResult<Self> {
        Self::checked_from(self.months.checked_sub(other.months))
    }

    /// Scales this `MonthDelta` by an integer factor.
    pub fn checked_mul(&self, factor: i64) -> CalendarResult<Self> {
        Self::checked_from(self.months.checked_mul(factor))
    }

    /// Divides this `MonthDelta`, truncating toward zero.
    pub fn checked_div(&self, divisor: i64) -> CalendarResult<Self> {
        if divisor == 0 {
            return Err(CalendarError::division_by_zero()
                .with_message("cannot divide a MonthDelta by zero."));
        }
        Self::checked_from(self.months.checked_div(divisor))
    }

    /// Adds one month in place, returning the new value.
    pub fn increment(&mut self) -> CalendarResult<Self> {
        *self = self.checked_add(&Self::from_months(1))?;
        Ok(*self)
    }

    /// Removes one month in place, returning the new value.
    pub fn decrement(&mut self) -> CalendarResult<Self> {
        *self = self.checked_sub(&Self::from_months(1))?;
        Ok(*self)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for MonthDelta {
    fn arbitrary(g: &mut quickcheck::Gen) -> MonthDelta {
        let months = <i32 as quickcheck::Arbitrary>::arbitrary(g) / 512;
        MonthDelta::from_months(months.into())
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = MonthDelta>> {
        alloc::boxed::Box::new(
            quickcheck::Arbitrary::shrink(&self.months).map(MonthDelta::from_months),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::MonthDelta;
    use crate::error::ErrorKind;
    use core::cmp::Ordering;

    #[test]
    fn years() {
        assert_eq!(MonthDelta::from_years(2).unwrap(), MonthDelta::from_months(24));
        assert_eq!(MonthDelta::from_months(-20).years(), -1);
        assert_eq!(MonthDelta::from_months(100).years(), 8);
        assert_eq!(MonthDelta::from_months(100).years_decimal(), 8.333333333333334);
        assert_eq!(MonthDelta::from_months(-18).years_decimal(), -1.5);
        assert_eq!(
            MonthDelta::from_years(i64::MAX).unwrap_err().kind(),
            ErrorKind::Overflow
        );
    }

    #[test]
    fn arithmetic() {
        let a = MonthDelta::from_months(7);
        assert_eq!(a.checked_mul(3).unwrap(), MonthDelta::from_months(21));
        assert_eq!(a.checked_div(2).unwrap(), MonthDelta::from_months(3));
        assert_eq!(
            MonthDelta::from_months(-7).checked_div(2).unwrap(),
            MonthDelta::from_months(-3)
        );
        assert_eq!(
            a.checked_div(0).unwrap_err().kind(),
            ErrorKind::DivisionByZero
        );
        assert_eq!(
            a.checked_sub(&MonthDelta::from_months(10)).unwrap(),
            MonthDelta::from_months(-3)
        );
        assert!(a.checked_neg().unwrap().is_negative());
        assert!(MonthDelta::from_months(-1) < MonthDelta::zero());

        let mut delta = MonthDelta::zero();
        assert_eq!(delta.decrement().unwrap(), MonthDelta::from_months(-1));
        assert_eq!(delta.increment().unwrap(), MonthDelta::zero());
    }

    quickcheck::quickcheck! {
        fn prop_ordering_is_total(a: MonthDelta, b: MonthDelta, c: MonthDelta) -> bool {
            let antisymmetric = a.cmp(&b) == b.cmp(&a).reverse()
                && (a.cmp(&b) == Ordering::Equal) == (a == b);
            let transitive = !(a <= b && b <= c) || a <= c;
            antisymmetric && transitive && a.cmp(&b) == a.months().cmp(&b.months())
        }
    }
}
