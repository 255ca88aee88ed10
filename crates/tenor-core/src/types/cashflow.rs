//! Cash flow variants and the cash flow list.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;
use crate::discount::discount;

/// A single dated payment.
///
/// The variant fixes the present value rule at construction time:
///
/// | Variant       | Present value                              |
/// |---------------|--------------------------------------------|
/// | `Certain`     | `amount / (1+rate)^t`                      |
/// | `Uncertain`   | `amount * prob / (1+rate)^t`               |
/// | `Fx`          | `amount * fx_rate / (1+rate)^t`            |
/// | `UncertainFx` | `amount * fx_rate * prob / (1+rate)^t`     |
///
/// where `t` is the signed ACT/365.25 year fraction from the valuation
/// date to the payment date.
///
/// Constructors store their fields without validation. The meaningful
/// domains are `prob` in `[0, 1]`, `fx_rate > 0`, and a discount rate
/// above -1; values outside them are the caller's responsibility and
/// surface as scaled or non-finite present values.
///
/// # Example
///
/// ```rust
/// use tenor_core::types::{CashFlow, Date};
///
/// let payment = Date::from_ymd(2026, 1, 1).unwrap();
/// let as_of = Date::from_ymd(2025, 1, 1).unwrap();
///
/// let certain = CashFlow::certain(100.0, payment);
/// let risky = CashFlow::uncertain(100.0, payment, 0.9);
/// assert!(risky.present_value(0.05, as_of) < certain.present_value(0.05, as_of));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CashFlow {
    /// A payment received with certainty, in the instrument currency.
    Certain {
        /// Payment amount (signed).
        amount: f64,
        /// Payment date.
        date: Date,
    },
    /// A payment weighted by its probability of being received.
    Uncertain {
        /// Payment amount (signed).
        amount: f64,
        /// Payment date.
        date: Date,
        /// Probability the payment occurs, nominally in `[0, 1]`.
        prob: f64,
    },
    /// A foreign-currency payment converted at a fixed rate.
    Fx {
        /// Payment amount in the foreign currency (signed).
        amount: f64,
        /// Payment date.
        date: Date,
        /// Conversion factor to the base currency.
        fx_rate: f64,
    },
    /// A foreign-currency payment weighted by its probability.
    UncertainFx {
        /// Payment amount in the foreign currency (signed).
        amount: f64,
        /// Payment date.
        date: Date,
        /// Conversion factor to the base currency.
        fx_rate: f64,
        /// Probability the payment occurs, nominally in `[0, 1]`.
        prob: f64,
    },
}

impl CashFlow {
    /// Creates a certain cash flow.
    #[must_use]
    pub fn certain(amount: f64, date: Date) -> Self {
        Self::Certain { amount, date }
    }

    /// Creates a probability-weighted cash flow.
    #[must_use]
    pub fn uncertain(amount: f64, date: Date, prob: f64) -> Self {
        Self::Uncertain { amount, date, prob }
    }

    /// Creates a foreign-currency cash flow.
    #[must_use]
    pub fn fx(amount: f64, date: Date, fx_rate: f64) -> Self {
        Self::Fx {
            amount,
            date,
            fx_rate,
        }
    }

    /// Creates a probability-weighted foreign-currency cash flow.
    #[must_use]
    pub fn uncertain_fx(amount: f64, date: Date, fx_rate: f64, prob: f64) -> Self {
        Self::UncertainFx {
            amount,
            date,
            fx_rate,
            prob,
        }
    }

    /// Returns the raw payment amount, before any conversion or weighting.
    #[must_use]
    pub fn amount(&self) -> f64 {
        match *self {
            Self::Certain { amount, .. }
            | Self::Uncertain { amount, .. }
            | Self::Fx { amount, .. }
            | Self::UncertainFx { amount, .. } => amount,
        }
    }

    /// Returns the payment date.
    #[must_use]
    pub fn date(&self) -> Date {
        match *self {
            Self::Certain { date, .. }
            | Self::Uncertain { date, .. }
            | Self::Fx { date, .. }
            | Self::UncertainFx { date, .. } => date,
        }
    }

    /// Returns the amount expected in base currency: the raw amount times
    /// the variant's conversion and probability factors.
    #[must_use]
    pub fn expected_amount(&self) -> f64 {
        match *self {
            Self::Certain { amount, .. } => amount,
            Self::Uncertain { amount, prob, .. } => amount * prob,
            Self::Fx {
                amount, fx_rate, ..
            } => amount * fx_rate,
            Self::UncertainFx {
                amount,
                fx_rate,
                prob,
                ..
            } => amount * fx_rate * prob,
        }
    }

    /// Discounts this cash flow from its payment date back to `as_of` at
    /// a flat annual `rate`.
    ///
    /// A payment date before `as_of` is extrapolated forward (see
    /// [`discount`]).
    #[must_use]
    pub fn present_value(&self, rate: f64, as_of: Date) -> f64 {
        discount(self.expected_amount(), self.date(), rate, as_of)
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Certain { amount, date } => write!(f, "{date}: {amount}"),
            Self::Uncertain { amount, date, prob } => {
                write!(f, "{date}: {amount} (p={prob})")
            }
            Self::Fx {
                amount,
                date,
                fx_rate,
            } => write!(f, "{date}: {amount} (fx={fx_rate})"),
            Self::UncertainFx {
                amount,
                date,
                fx_rate,
                prob,
            } => write!(f, "{date}: {amount} (fx={fx_rate}, p={prob})"),
        }
    }
}

/// An ordered list of cash flows.
///
/// Insertion order is preserved for display and debugging; the net
/// present value does not depend on it. A list is created fresh for each
/// pricing call and discarded after aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlowList {
    /// Ordered list of cash flows
    cash_flows: Vec<CashFlow>,
}

impl CashFlowList {
    /// Creates a new empty cash flow list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cash_flows: Vec::new(),
        }
    }

    /// Creates a list with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cash_flows: Vec::with_capacity(capacity),
        }
    }

    /// Appends a cash flow to the list.
    pub fn push(&mut self, cf: CashFlow) {
        self.cash_flows.push(cf);
    }

    /// Returns the cash flows as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[CashFlow] {
        &self.cash_flows
    }

    /// Returns the number of cash flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cash_flows.len()
    }

    /// Returns true if there are no cash flows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cash_flows.is_empty()
    }

    /// Returns an iterator over the cash flows.
    pub fn iter(&self) -> impl Iterator<Item = &CashFlow> {
        self.cash_flows.iter()
    }

    /// Sums the present values of all cash flows at the given flat rate
    /// and valuation date.
    ///
    /// Every member is evaluated with the same `(rate, as_of)` pair.
    /// Returns exactly `0.0` for an empty list; a non-finite member
    /// present value propagates into the sum.
    #[must_use]
    pub fn npv(&self, rate: f64, as_of: Date) -> f64 {
        self.cash_flows
            .iter()
            .map(|cf| cf.present_value(rate, as_of))
            .sum()
    }
}

impl IntoIterator for CashFlowList {
    type Item = CashFlow;
    type IntoIter = std::vec::IntoIter<CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.cash_flows.into_iter()
    }
}

impl<'a> IntoIterator for &'a CashFlowList {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.cash_flows.iter()
    }
}

impl FromIterator<CashFlow> for CashFlowList {
    fn from_iter<I: IntoIterator<Item = CashFlow>>(iter: I) -> Self {
        Self {
            cash_flows: iter.into_iter().collect(),
        }
    }
}

impl Extend<CashFlow> for CashFlowList {
    fn extend<I: IntoIterator<Item = CashFlow>>(&mut self, iter: I) {
        self.cash_flows.extend(iter);
    }
}

impl fmt::Display for CashFlowList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, cf) in self.cash_flows.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cf}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn test_certain_pv() {
        let as_of = date(2020, 1, 1);
        let cf = CashFlow::certain(105.0, date(2025, 1, 1));

        // 2020-01-01 to 2025-01-01 is 1827 days (two leap years).
        let expected = 105.0 / 1.05f64.powf(1827.0 / 365.25);
        assert_relative_eq!(cf.present_value(0.05, as_of), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_uncertain_pv_scales_by_prob() {
        let as_of = date(2024, 1, 1);
        let payment = date(2026, 1, 1);
        let certain = CashFlow::certain(100.0, payment);
        let risky = CashFlow::uncertain(100.0, payment, 0.75);

        assert_relative_eq!(
            risky.present_value(0.03, as_of),
            0.75 * certain.present_value(0.03, as_of),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_fx_pv_scales_by_rate() {
        let as_of = date(2024, 1, 1);
        let payment = date(2026, 1, 1);
        let domestic = CashFlow::certain(100.0, payment);
        let foreign = CashFlow::fx(100.0, payment, 1.1);

        assert_relative_eq!(
            foreign.present_value(0.03, as_of),
            1.1 * domestic.present_value(0.03, as_of),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_uncertain_fx_pv_combines_both_factors() {
        let as_of = date(2024, 1, 1);
        let payment = date(2026, 1, 1);
        let cf = CashFlow::uncertain_fx(100.0, payment, 1.1, 0.75);

        assert_relative_eq!(cf.expected_amount(), 100.0 * 1.1 * 0.75, epsilon = 1e-12);
        assert_relative_eq!(
            cf.present_value(0.03, as_of),
            CashFlow::certain(100.0 * 1.1 * 0.75, payment).present_value(0.03, as_of),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_zero_prob_is_worthless() {
        let as_of = date(2024, 1, 1);
        let cf = CashFlow::uncertain_fx(100.0, date(2026, 1, 1), 1.4, 0.0);
        assert_eq!(cf.present_value(0.05, as_of), 0.0);
    }

    #[test]
    fn test_accessors() {
        let payment = date(2026, 1, 1);
        let cf = CashFlow::uncertain_fx(-25.0, payment, 1.1, 0.9);
        assert_eq!(cf.amount(), -25.0);
        assert_eq!(cf.date(), payment);
    }

    #[test]
    fn test_display() {
        let payment = date(2026, 1, 1);
        assert_eq!(CashFlow::certain(100.0, payment).to_string(), "2026-01-01: 100");
        assert_eq!(
            CashFlow::uncertain(100.0, payment, 0.9).to_string(),
            "2026-01-01: 100 (p=0.9)"
        );
        assert_eq!(
            CashFlow::fx(100.0, payment, 1.25).to_string(),
            "2026-01-01: 100 (fx=1.25)"
        );
        assert_eq!(
            CashFlow::uncertain_fx(100.0, payment, 1.25, 0.9).to_string(),
            "2026-01-01: 100 (fx=1.25, p=0.9)"
        );
    }

    #[test]
    fn test_empty_list_npv_is_zero() {
        let list = CashFlowList::new();
        assert_eq!(list.npv(0.05, date(2025, 1, 1)), 0.0);
    }

    #[test]
    fn test_npv_sums_members() {
        let as_of = date(2024, 1, 1);
        let a = CashFlow::certain(5.0, date(2025, 1, 1));
        let b = CashFlow::certain(105.0, date(2026, 1, 1));

        let list: CashFlowList = [a, b].into_iter().collect();
        assert_eq!(list.len(), 2);
        assert_relative_eq!(
            list.npv(0.05, as_of),
            a.present_value(0.05, as_of) + b.present_value(0.05, as_of),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut list = CashFlowList::new();
        list.push(CashFlow::certain(2.0, date(2026, 1, 1)));
        list.push(CashFlow::certain(1.0, date(2025, 1, 1)));

        let dates: Vec<Date> = list.iter().map(CashFlow::date).collect();
        assert_eq!(dates, vec![date(2026, 1, 1), date(2025, 1, 1)]);
    }

    #[test]
    fn test_non_finite_member_propagates() {
        let mut list = CashFlowList::new();
        list.push(CashFlow::certain(100.0, date(2026, 1, 1)));
        list.push(CashFlow::certain(100.0, date(2027, 1, 1)));
        assert!(!list.npv(-1.5, date(2025, 1, 1)).is_finite());
    }

    #[test]
    fn test_serde_roundtrip() {
        let cf = CashFlow::uncertain_fx(100.0, date(2026, 1, 1), 1.1, 0.9);
        let json = serde_json::to_string(&cf).unwrap();
        let back: CashFlow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cf);
    }

    #[test]
    fn test_display_list() {
        let mut list = CashFlowList::new();
        list.push(CashFlow::certain(5.0, date(2025, 1, 1)));
        list.push(CashFlow::certain(105.0, date(2026, 1, 1)));
        assert_eq!(list.to_string(), "[2025-01-01: 5, 2026-01-01: 105]");
    }
}
