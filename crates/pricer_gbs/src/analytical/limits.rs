//! Validation limits for Generalized Black-Scholes-Merton inputs.
//!
//! This module provides:
//! - `GbsLimits`: the fixed bound table every pricing input is checked
//!   against before any formula evaluation
//!
//! The bounds reject inputs that would produce silent numerical garbage
//! (logarithms or square roots of non-positive numbers, overflow) and
//! catch the common unit mistake of quoting a rate or volatility in
//! percent rather than as a fraction (15 instead of 0.15).

/// Fixed validation bounds for the pricing kernel.
///
/// All bounds are inclusive. They are process-wide constants with no
/// lifecycle; concurrent unsynchronised reads are safe.
///
/// # Examples
/// ```
/// use pricer_gbs::analytical::GbsLimits;
///
/// assert_eq!(GbsLimits::MIN_STRIKE, 0.01);
/// assert_eq!(GbsLimits::MAX_VOLATILITY, 1.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GbsLimits;

impl GbsLimits {
    /// Maximum magnitude accepted for any price input.
    pub const MAX_NUMERIC: f64 = 2_147_483_248.0;

    /// Minimum strike price (X).
    pub const MIN_STRIKE: f64 = 0.01;
    /// Maximum strike price (X).
    pub const MAX_STRIKE: f64 = Self::MAX_NUMERIC;

    /// Minimum price of the underlying asset (FS).
    pub const MIN_UNDERLYING: f64 = 0.01;
    /// Maximum price of the underlying asset (FS).
    pub const MAX_UNDERLYING: f64 = Self::MAX_NUMERIC;

    /// Minimum time to expiration in years (T).
    pub const MIN_EXPIRY: f64 = 0.001;
    /// Maximum time to expiration in years (T).
    pub const MAX_EXPIRY: f64 = 100.0;

    /// Minimum cost of carry (b).
    pub const MIN_CARRY: f64 = -1.0;
    /// Maximum cost of carry (b).
    pub const MAX_CARRY: f64 = 1.0;

    /// Minimum risk-free rate (r).
    pub const MIN_RATE: f64 = -1.0;
    /// Maximum risk-free rate (r).
    pub const MAX_RATE: f64 = 1.0;

    /// Minimum annualised volatility (V).
    ///
    /// Volatilities below 0.5% blow up the gamma denominator and are
    /// almost always bad inputs.
    pub const MIN_VOLATILITY: f64 = 0.005;
    /// Maximum annualised volatility (V).
    pub const MAX_VOLATILITY: f64 = 1.0;
}
