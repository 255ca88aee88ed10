//! Core types for fixed income pricing.

mod cashflow;
mod date;

pub use cashflow::{CashFlow, CashFlowList};
pub use date::Date;
