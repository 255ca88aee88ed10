//! Foreign-currency annual-coupon bond.

use log::trace;
use serde::{Deserialize, Serialize};

use tenor_core::types::{CashFlow, CashFlowList, Date};

use super::schedule_capacity;
use crate::traits::Instrument;

/// A fixed coupon bond denominated in a foreign currency.
///
/// Identical schedule to [`Bond`](crate::instruments::Bond), but every
/// payment is converted to the base currency at a fixed `fx_rate`, so the
/// price comes out in base currency. With `fx_rate = 1` it prices
/// identically to the plain bond.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FxBond {
    maturity: Date,
    coupon: f64,
    principal: f64,
    fx_rate: f64,
}

impl FxBond {
    /// Creates a new foreign-currency bond. Fields are stored as given,
    /// without validation; a meaningful `fx_rate` is positive.
    #[must_use]
    pub fn new(maturity: Date, coupon: f64, principal: f64, fx_rate: f64) -> Self {
        Self {
            maturity,
            coupon,
            principal,
            fx_rate,
        }
    }

    /// Returns the maturity date.
    #[must_use]
    pub fn maturity(&self) -> Date {
        self.maturity
    }

    /// Returns the annual coupon amount, in the foreign currency.
    #[must_use]
    pub fn coupon(&self) -> f64 {
        self.coupon
    }

    /// Returns the principal repaid at maturity, in the foreign currency.
    #[must_use]
    pub fn principal(&self) -> f64 {
        self.principal
    }

    /// Returns the conversion factor to the base currency.
    #[must_use]
    pub fn fx_rate(&self) -> f64 {
        self.fx_rate
    }
}

impl Instrument for FxBond {
    fn cash_flows(&self, as_of: Date) -> CashFlowList {
        let mut flows = CashFlowList::with_capacity(schedule_capacity(as_of, self.maturity));
        for year in as_of.year()..self.maturity.year() {
            flows.push(CashFlow::fx(
                self.coupon,
                Date::year_start(year),
                self.fx_rate,
            ));
        }
        flows.push(CashFlow::fx(
            self.coupon + self.principal,
            self.maturity,
            self.fx_rate,
        ));
        trace!(
            "fx bond maturing {} (fx={}): {} cash flows",
            self.maturity,
            self.fx_rate,
            flows.len()
        );
        flows
    }
}
