//! Gregorian Date Calculations
//!
//! This module contains the logic for Gregorian Date Calculations.
//!
//! ## Extending Neri-Schneider shift window
//!
//! In their paper, Neri-Schneider calculated for a Rata Die shift
//! of 82 cycles, which covers roughly 32,767 years on either side of
//! the epoch. Covering every `i32` year requires the computational
//! calendar to start before `i32::MIN`, so the equations below run on
//! 64-bit integers with a shift of 5,368,710 four hundred year cycles.
//!
//! | Significant Date | Computational Rata Die (unshifted) |
//! | -----------------|------------------------------------|
//! | March 1, 0000 | 0 |
//! | January 1, 1970 | 719,468 |
//!
//! With the shift applied, the smallest representable date,
//! January 1 of `i32::MIN`, lands on a small positive Rata Die.
pub mod neri_schneider;

pub use neri_schneider::{
    epoch_days_from_gregorian_date as epoch_days_from_ymd,
    gregorian_ymd_from_epoch_days as ymd_from_epoch_days, MAX_EPOCH_DAYS, MIN_EPOCH_DAYS,
};
