//! Probability-weighted foreign-currency annual-coupon bond.

use log::trace;
use serde::{Deserialize, Serialize};

use tenor_core::types::{CashFlow, CashFlowList, Date};

use super::schedule_capacity;
use crate::traits::Instrument;

/// A foreign-currency bond whose payments arrive with probability `prob`.
///
/// Identical schedule to [`FxBond`](crate::instruments::FxBond), with every
/// payment additionally weighted by a single survival probability. The
/// weighting is flat: the same `prob` applies to each flow regardless of
/// its distance, so this is a crude haircut rather than a term structure
/// of default risk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UncertainFxBond {
    maturity: Date,
    coupon: f64,
    principal: f64,
    fx_rate: f64,
    prob: f64,
}

impl UncertainFxBond {
    /// Creates a new probability-weighted foreign-currency bond. Fields
    /// are stored as given, without validation; meaningful values are a
    /// positive `fx_rate` and `prob` in `[0, 1]`.
    #[must_use]
    pub fn new(maturity: Date, coupon: f64, principal: f64, fx_rate: f64, prob: f64) -> Self {
        Self {
            maturity,
            coupon,
            principal,
            fx_rate,
            prob,
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

    /// Returns the probability weight applied to every payment.
    #[must_use]
    pub fn prob(&self) -> f64 {
        self.prob
    }
}

impl Instrument for UncertainFxBond {
    fn cash_flows(&self, as_of: Date) -> CashFlowList {
        let mut flows = CashFlowList::with_capacity(schedule_capacity(as_of, self.maturity));
        for year in as_of.year()..self.maturity.year() {
            flows.push(CashFlow::uncertain_fx(
                self.coupon,
                Date::year_start(year),
                self.fx_rate,
                self.prob,
            ));
        }
        flows.push(CashFlow::uncertain_fx(
            self.coupon + self.principal,
            self.maturity,
            self.fx_rate,
            self.prob,
        ));
        trace!(
            "uncertain fx bond maturing {} (fx={}, p={}): {} cash flows",
            self.maturity,
            self.fx_rate,
            self.prob,
            flows.len()
        );
        flows
    }
}
