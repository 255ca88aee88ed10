//! Core Instrument trait definition.
//!
//! The `Instrument` trait defines the common interface for every priceable
//! instrument: generate the remaining cash flows, then reduce them to a
//! present value.

use tenor_core::types::{CashFlowList, Date};

/// Core instrument trait.
///
/// An instrument is an immutable value that can enumerate the cash flows
/// owed between a valuation date and maturity. Pricing is a derived
/// operation: the net present value of those flows under a flat annual
/// rate.
///
/// # Design Principles
///
/// - **One required method**: implementors only describe their schedule;
///   discounting lives in the cash flow types
/// - **No instance state**: each call builds a fresh
///   [`CashFlowList`], so pricing is idempotent and safe to invoke
///   concurrently on shared references
/// - **Object safety**: works with both `dyn Instrument` and static
///   dispatch
///
/// # Example
///
/// ```rust
/// use tenor_bonds::prelude::*;
/// use tenor_core::types::Date;
///
/// fn report(instrument: &dyn Instrument, rate: f64, as_of: Date) -> String {
///     format!("{} flows, price {:.4}",
///         instrument.cash_flows(as_of).len(),
///         instrument.price(rate, as_of))
/// }
/// ```
pub trait Instrument {
    /// Generates the schedule of cash flows owed from `as_of` to maturity.
    fn cash_flows(&self, as_of: Date) -> CashFlowList;

    /// Prices the instrument: the net present value of its cash flows at
    /// a flat annual `rate`, discounted to `as_of`.
    ///
    /// The rate must exceed -1 for a finite result; misuse propagates as
    /// a non-finite `f64` (see `tenor_core::discount`).
    fn price(&self, rate: f64, as_of: Date) -> f64 {
        self.cash_flows(as_of).npv(rate, as_of)
    }
}
