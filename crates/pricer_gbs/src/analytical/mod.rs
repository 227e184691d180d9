//! Analytical pricing for European vanilla options.
//!
//! This module provides the closed-form Generalized Black-Scholes-Merton
//! solution:
//! - Generalized Black-Scholes-Merton value and Greeks
//! - Standard normal distribution functions
//! - Validation limits for every pricing input
//!
//! ## Design Principles
//!
//! - **Validation as construction**: [`GbsInputs::new`] is the only way
//!   to obtain inputs the kernel accepts
//! - **Numerical stability**: erfc-based CDF accurate well beyond the
//!   1e-9 contract required by the kernel

pub mod distributions;
pub mod error;
pub mod gbs;
pub mod limits;

// Re-export main types at module level
pub use distributions::{norm_cdf, norm_pdf};
pub use error::{CalculationError, PricingError, ValidationError};
pub use gbs::{price, GbsInputs, GbsResult, OptionType};
pub use limits::GbsLimits;
