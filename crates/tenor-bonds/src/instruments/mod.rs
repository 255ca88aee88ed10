//! Bond instrument implementations.
//!
//! All instruments share the same schedule: one coupon at January 1 of
//! each calendar year from the valuation year up to (but not including)
//! the maturity year, plus a combined coupon-and-principal payment at
//! maturity. The variants differ only in the cash flow type they emit.

mod bond;
mod fx_bond;
mod uncertain_fx_bond;

pub use bond::Bond;
pub use fx_bond::FxBond;
pub use uncertain_fx_bond::UncertainFxBond;

use tenor_core::types::Date;

/// Number of flows the annual schedule will produce, for pre-allocation.
pub(crate) fn schedule_capacity(as_of: Date, maturity: Date) -> usize {
    let coupon_years = i64::from(maturity.year()) - i64::from(as_of.year());
    coupon_years.max(0) as usize + 1
}
