//! # Tenor Core
//!
//! Core types and discounting primitives for the Tenor fixed income
//! pricing library.
//!
//! This crate provides the building blocks the instrument crates are
//! assembled from:
//!
//! - **Types**: the [`Date`] newtype, the [`CashFlow`](types::CashFlow)
//!   variants and the [`CashFlowList`](types::CashFlowList) aggregate
//! - **Day Count**: the ACT/365.25 year-fraction convention used by the
//!   flat-rate model
//! - **Discounting**: the flat-rate [`discount`](discount::discount)
//!   function
//!
//! ## Design Philosophy
//!
//! - **Immutable values**: every type is a plain value; nothing mutates
//!   after construction
//! - **Unchecked numerics**: invalid numeric inputs (e.g. a rate at or
//!   below -100%) propagate as non-finite `f64` results rather than
//!   structured errors
//! - **Explicit over implicit**: errors exist only where construction can
//!   genuinely fail (dates)
//!
//! ## Example
//!
//! ```rust
//! use tenor_core::prelude::*;
//!
//! let as_of = Date::from_ymd(2024, 1, 1).unwrap();
//! let payment = Date::from_ymd(2025, 1, 1).unwrap();
//!
//! let mut flows = CashFlowList::new();
//! flows.push(CashFlow::certain(105.0, payment));
//!
//! let npv = flows.npv(0.05, as_of);
//! assert!(npv > 99.0 && npv < 101.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod daycounts;
pub mod discount;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{Act36525, DayCount};
    pub use crate::discount::discount;
    pub use crate::error::{TenorError, TenorResult};
    pub use crate::types::{CashFlow, CashFlowList, Date};
}

// Re-export commonly used types at crate root
pub use error::{TenorError, TenorResult};
pub use types::{CashFlow, CashFlowList, Date};
