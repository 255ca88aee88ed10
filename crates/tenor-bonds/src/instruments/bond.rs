//! Plain annual-coupon bond.

use log::trace;
use serde::{Deserialize, Serialize};

use tenor_core::types::{CashFlow, CashFlowList, Date};

use super::schedule_capacity;
use crate::traits::Instrument;

/// A fixed coupon bond paying annually in its own currency.
///
/// Pays `coupon` at January 1 of each calendar year strictly between the
/// valuation year and the maturity year, and `coupon + principal` at
/// maturity. When the valuation year equals the maturity year only the
/// final combined payment remains.
///
/// The schedule is calendar-year based: there are no semi-annual coupons,
/// day count conventions, or issuance anniversaries.
///
/// # Example
///
/// ```rust
/// use tenor_bonds::prelude::*;
/// use tenor_core::types::Date;
///
/// let bond = Bond::new(Date::from_ymd(2030, 1, 1).unwrap(), 5.0, 100.0);
/// let as_of = Date::from_ymd(2025, 1, 1).unwrap();
///
/// // 2025..2030 coupons plus the final combined flow.
/// assert_eq!(bond.cash_flows(as_of).len(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    maturity: Date,
    coupon: f64,
    principal: f64,
}

impl Bond {
    /// Creates a new bond. Fields are stored as given, without validation.
    #[must_use]
    pub fn new(maturity: Date, coupon: f64, principal: f64) -> Self {
        Self {
            maturity,
            coupon,
            principal,
        }
    }

    /// Returns the maturity date.
    #[must_use]
    pub fn maturity(&self) -> Date {
        self.maturity
    }

    /// Returns the annual coupon amount.
    #[must_use]
    pub fn coupon(&self) -> f64 {
        self.coupon
    }

    /// Returns the principal repaid at maturity.
    #[must_use]
    pub fn principal(&self) -> f64 {
        self.principal
    }
}

impl Instrument for Bond {
    fn cash_flows(&self, as_of: Date) -> CashFlowList {
        let mut flows = CashFlowList::with_capacity(schedule_capacity(as_of, self.maturity));
        for year in as_of.year()..self.maturity.year() {
            flows.push(CashFlow::certain(self.coupon, Date::year_start(year)));
        }
        // The final payment is emitted even when maturity precedes the
        // valuation date; discounting then extrapolates forward.
        flows.push(CashFlow::certain(
            self.coupon + self.principal,
            self.maturity,
        ));
        trace!("bond maturing {}: {} cash flows", self.maturity, flows.len());
        flows
    }
}
