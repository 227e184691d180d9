//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `ValidationError`: an input fell outside its documented domain
//! - `CalculationError`: a numerical collaborator produced a non-finite
//!   result despite validated inputs
//! - `PricingError`: umbrella over the two kinds for the public
//!   `price` entry point
//!
//! Both kinds are deterministic for fixed inputs, are never recovered
//! internally, and are never replaced by a default value.

use thiserror::Error;

/// Input validation errors.
///
/// Raised before any formula evaluation; carries the offending
/// parameter name, its actual value, and the acceptable range.
///
/// # Examples
/// ```
/// use pricer_gbs::analytical::ValidationError;
///
/// let err = ValidationError::OutOfRange {
///     parameter: "volatility",
///     value: 1.5,
///     min: 0.005,
///     max: 1.0,
/// };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// A numeric parameter fell outside its documented inclusive range.
    #[error("Invalid input {parameter} = {value}: acceptable range is {min} to {max}")]
    OutOfRange {
        /// Name of the offending parameter
        parameter: &'static str,
        /// The rejected value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// An option-type token was neither a call nor a put.
    ///
    /// Only reachable through the stringly-typed surfaces (`FromStr`);
    /// the typed API makes the state unrepresentable.
    #[error("Invalid input option_type ({given}): acceptable values are: call, put")]
    InvalidOptionType {
        /// The rejected token
        given: String,
    },
}

impl ValidationError {
    /// Returns the name of the parameter that failed validation.
    pub fn parameter(&self) -> &'static str {
        match self {
            ValidationError::OutOfRange { parameter, .. } => parameter,
            ValidationError::InvalidOptionType { .. } => "option_type",
        }
    }
}

/// Numerical calculation errors.
///
/// Raised only when a downstream collaborator (normal CDF/PDF) fails
/// to produce a finite result despite validated inputs. The kernel
/// never returns a partially-computed result.
///
/// Equality compares the failed quantity only: the stored value is
/// NaN or ±Inf by construction, and NaN never equals itself under
/// IEEE-754 comparison.
#[derive(Debug, Clone, Error)]
pub enum CalculationError {
    /// An intermediate or final quantity was NaN or infinite.
    #[error("Non-finite {quantity} = {value} during pricing")]
    NonFinite {
        /// Name of the quantity that failed the finiteness check
        quantity: &'static str,
        /// The offending value (NaN or ±Inf)
        value: f64,
    },
}

impl PartialEq for CalculationError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                CalculationError::NonFinite { quantity: a, .. },
                CalculationError::NonFinite { quantity: b, .. },
            ) => a == b,
        }
    }
}

/// Umbrella error for the public pricing entry point.
///
/// Preserves the distinction between the two kinds and their attached
/// diagnostic fields.
///
/// # Examples
/// ```
/// use pricer_gbs::analytical::{price, OptionType, PricingError};
///
/// let result = price(OptionType::Call, 0.00001, 100.0, 1.0, 0.05, 0.0, 0.15);
/// assert!(matches!(result, Err(PricingError::Validation(_))));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// An input fell outside its documented domain.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A numerical collaborator produced a non-finite result.
    #[error(transparent)]
    Calculation(#[from] CalculationError),
}
