//! Day count convention for the flat-rate pricing model.
//!
//! The model measures time in calendar days over a fixed-length year of
//! 365.25 days. This single convention stands in for the full families of
//! market conventions (ACT/360, 30/360, ACT/ACT, ...) that a curve-based
//! pricer would carry.

use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations provide the year fraction between two dates according
/// to a specific convention.
///
/// # Implementation Notes
///
/// - `year_fraction` is signed: negative when `end` precedes `start`
/// - Implementations must be thread-safe (`Send + Sync`)
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Can be negative if `end < start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the day count between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Actual/365.25 day count convention.
///
/// The day count is the actual number of calendar days between dates.
/// The year basis is a fixed 365.25 days, averaging over the leap cycle.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365.25}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act36525;

impl DayCount for Act36525 {
    fn name(&self) -> &'static str {
        "ACT/365.25"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 365.25
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}
