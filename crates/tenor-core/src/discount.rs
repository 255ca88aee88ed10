//! Flat-rate discounting.
//!
//! A single annual rate is applied to every maturity, with time measured
//! under ACT/365.25. There is no curve: the discount factor for a payment
//! `t` years out is simply `(1 + rate)^-t`.

use crate::daycounts::{Act36525, DayCount};
use crate::types::Date;

/// Discounts `amount` paid on `flow_date` back to `as_of` at a flat
/// annual `rate`.
///
/// Returns `amount / (1 + rate)^t` where `t` is the signed ACT/365.25
/// year fraction from `as_of` to `flow_date`. A `flow_date` before
/// `as_of` gives a negative `t`, so the function extrapolates to a
/// future value.
///
/// # Numeric domain
///
/// No bounds are checked. `rate` must exceed -1 for a meaningful result:
/// a rate of exactly -1 divides by zero and a rate below -1 raises a
/// negative base to a fractional power. Either case propagates as a
/// non-finite `f64` rather than an error.
#[must_use]
pub fn discount(amount: f64, flow_date: Date, rate: f64, as_of: Date) -> f64 {
    let year_frac = Act36525.year_fraction(as_of, flow_date);
    amount / (1.0 + rate).powf(year_frac)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn test_same_day_is_undiscounted() {
        let today = date(2025, 6, 15);
        assert_relative_eq!(discount(100.0, today, 0.05, today), 100.0);
    }

    #[test]
    fn test_one_year_at_five_percent() {
        // 2023-01-01 to 2024-01-01 is 365 days.
        let pv = discount(105.0, date(2024, 1, 1), 0.05, date(2023, 1, 1));
        let expected = 105.0 / 1.05f64.powf(365.0 / 365.25);
        assert_relative_eq!(pv, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_past_date_compounds_forward() {
        // A flow one year in the past grows at the rate.
        let fv = discount(100.0, date(2023, 1, 1), 0.05, date(2024, 1, 1));
        let expected = 100.0 * 1.05f64.powf(365.0 / 365.25);
        assert_relative_eq!(fv, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_rate_is_identity() {
        let pv = discount(100.0, date(2030, 1, 1), 0.0, date(2025, 1, 1));
        assert_relative_eq!(pv, 100.0);
    }

    #[test]
    fn test_negative_rate_above_floor() {
        let pv = discount(100.0, date(2026, 1, 1), -0.01, date(2025, 1, 1));
        assert!(pv > 100.0);
        assert!(pv.is_finite());
    }

    #[test]
    fn test_rate_of_minus_one_is_non_finite() {
        let pv = discount(100.0, date(2026, 1, 1), -1.0, date(2025, 1, 1));
        assert!(pv.is_infinite());
    }

    #[test]
    fn test_rate_below_minus_one_is_nan() {
        let pv = discount(100.0, date(2026, 1, 1), -1.5, date(2025, 1, 1));
        assert!(pv.is_nan());
    }
}
