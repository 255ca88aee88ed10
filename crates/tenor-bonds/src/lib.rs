//! # Tenor Bonds
//!
//! Bond instruments and flat-rate pricing for the Tenor fixed income
//! pricing library.
//!
//! This crate provides:
//!
//! - **Instruments**: plain annual-coupon bonds, foreign-currency bonds,
//!   and probability-weighted foreign-currency bonds
//! - **Pricing**: present value under a single flat annual rate via the
//!   [`Instrument`](traits::Instrument) trait
//!
//! ## Example
//!
//! ```rust
//! use tenor_bonds::prelude::*;
//! use tenor_core::types::Date;
//!
//! let maturity = Date::from_ymd(2030, 1, 1).unwrap();
//! let bond = Bond::new(maturity, 5.0, 100.0);
//!
//! let as_of = Date::from_ymd(2025, 1, 1).unwrap();
//! let price = bond.price(0.04, as_of);
//! assert!(price > 100.0); // coupon above the discount rate
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]

pub mod instruments;
pub mod traits;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::instruments::{Bond, FxBond, UncertainFxBond};
    pub use crate::traits::Instrument;
}

// Re-export commonly used types at crate root
pub use instruments::{Bond, FxBond, UncertainFxBond};
pub use traits::Instrument;
