//! Generalized Black-Scholes-Merton pricing kernel.
//!
//! This module provides closed-form value and Greeks for European
//! vanilla options under the generalized model with cost of carry.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = FS·e^((b-r)T)·N(d₁) - X·e^(-rT)·N(d₂)
//! **Put Price**: P = X·e^(-rT)·N(-d₂) - FS·e^((b-r)T)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(FS/X) + (b + V²/2)T) / (V√T)
//! - d₂ = d₁ - V√T
//!
//! The cost of carry b specialises the model: b = r gives Black-Scholes
//! on a non-dividend stock, b = 0 gives Black-76 on a future, and
//! b = r - q prices an asset with continuous yield q.
//!
//! The kernel is a pure function. Validated inputs keep V·√T strictly
//! positive, so no division by zero or logarithm domain error can occur
//! once a [`GbsInputs`] has been constructed.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::{CalculationError, PricingError, ValidationError};
use super::limits::GbsLimits;

/// Side of a European vanilla option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy the underlying at the strike.
    Call,
    /// Right to sell the underlying at the strike.
    Put,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = ValidationError;

    /// Parses an option-type token.
    ///
    /// Accepts `c`, `call`, `p`, `put` in any casing; anything else is
    /// a [`ValidationError::InvalidOptionType`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" | "call" => Ok(OptionType::Call),
            "p" | "put" => Ok(OptionType::Put),
            _ => Err(ValidationError::InvalidOptionType {
                given: s.to_string(),
            }),
        }
    }
}

/// Validated inputs for the pricing kernel.
///
/// Construction through [`GbsInputs::new`] is the only way to obtain a
/// value of this type, so holding one is proof that every parameter
/// passed the [`GbsLimits`] bound table. Fields are immutable after
/// construction.
///
/// # Examples
/// ```
/// use pricer_gbs::analytical::{GbsInputs, OptionType};
///
/// let inputs = GbsInputs::new(OptionType::Call, 100.0, 100.0, 1.0, 0.05, 0.0, 0.15).unwrap();
/// let result = inputs.price().unwrap();
/// assert!((result.value - 5.68695251984796).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GbsInputs {
    /// Call or put.
    option_type: OptionType,
    /// Price of the underlying asset (FS).
    underlying: f64,
    /// Strike price (X).
    strike: f64,
    /// Time to expiration in years (T).
    expiry: f64,
    /// Risk-free rate (r), continuous compounding.
    rate: f64,
    /// Cost of carry (b), continuous compounding.
    carry: f64,
    /// Annualised volatility (V).
    volatility: f64,
}

/// Checks an inclusive range, rejecting NaN.
///
/// Written as a negated conjunction so that NaN fails the check rather
/// than slipping past both comparisons.
fn check_range(
    parameter: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    if !(value >= min && value <= max) {
        return Err(ValidationError::OutOfRange {
            parameter,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Checks that a computed quantity is finite.
fn require_finite(quantity: &'static str, value: f64) -> Result<f64, CalculationError> {
    if !value.is_finite() {
        return Err(CalculationError::NonFinite { quantity, value });
    }
    Ok(value)
}

impl GbsInputs {
    /// Creates a validated input set.
    ///
    /// Checks run in a fixed order so that when several parameters are
    /// invalid, the reported violation is reproducible: option type,
    /// strike, underlying price, time to expiration, cost of carry,
    /// risk-free rate, volatility. The first violation wins. This
    /// ordering is part of the contract, not an implementation detail.
    ///
    /// # Arguments
    /// * `option_type` - Call or put
    /// * `underlying` - Price of the underlying asset (FS)
    /// * `strike` - Strike price (X)
    /// * `expiry` - Time to expiration in years (T)
    /// * `rate` - Risk-free rate (r)
    /// * `carry` - Cost of carry (b)
    /// * `volatility` - Annualised volatility (V)
    ///
    /// # Errors
    /// [`ValidationError::OutOfRange`] naming the first parameter that
    /// falls outside the [`GbsLimits`] bound table.
    ///
    /// # Examples
    /// ```
    /// use pricer_gbs::analytical::{GbsInputs, OptionType};
    ///
    /// // Underlying below the 0.01 floor is rejected
    /// let result = GbsInputs::new(OptionType::Call, 0.00001, 100.0, 1.0, 0.05, 0.0, 0.15);
    /// assert!(result.is_err());
    /// ```
    pub fn new(
        option_type: OptionType,
        underlying: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        carry: f64,
        volatility: f64,
    ) -> Result<Self, ValidationError> {
        // option_type is structurally valid; the stringly-typed surface
        // rejects unknown tokens in OptionType::from_str.
        check_range("strike", strike, GbsLimits::MIN_STRIKE, GbsLimits::MAX_STRIKE)?;
        check_range(
            "underlying_price",
            underlying,
            GbsLimits::MIN_UNDERLYING,
            GbsLimits::MAX_UNDERLYING,
        )?;
        check_range(
            "time_to_expiration",
            expiry,
            GbsLimits::MIN_EXPIRY,
            GbsLimits::MAX_EXPIRY,
        )?;
        check_range("cost_of_carry", carry, GbsLimits::MIN_CARRY, GbsLimits::MAX_CARRY)?;
        check_range("risk_free_rate", rate, GbsLimits::MIN_RATE, GbsLimits::MAX_RATE)?;
        check_range(
            "volatility",
            volatility,
            GbsLimits::MIN_VOLATILITY,
            GbsLimits::MAX_VOLATILITY,
        )?;

        Ok(Self {
            option_type,
            underlying,
            strike,
            expiry,
            rate,
            carry,
            volatility,
        })
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the price of the underlying asset.
    #[inline]
    pub fn underlying(&self) -> f64 {
        self.underlying
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to expiration in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the cost of carry.
    #[inline]
    pub fn carry(&self) -> f64 {
        self.carry
    }

    /// Returns the annualised volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Computes value and Greeks for this input set.
    ///
    /// Evaluates the closed-form formulas in the module documentation.
    /// Every output is checked for finiteness before the result is
    /// assembled; a non-finite quantity from the CDF/PDF collaborators
    /// surfaces as [`CalculationError::NonFinite`] rather than a
    /// partially-computed result.
    ///
    /// # Errors
    /// [`CalculationError::NonFinite`] if any computed quantity is NaN
    /// or infinite. Unreachable for inputs inside the bound table with
    /// a correct CDF/PDF implementation.
    pub fn price(&self) -> Result<GbsResult, CalculationError> {
        let fs = self.underlying;
        let x = self.strike;
        let t = self.expiry;
        let r = self.rate;
        let b = self.carry;
        let v = self.volatility;

        let sqrt_t = t.sqrt();
        let d1 = ((fs / x).ln() + (b + v * v / 2.0) * t) / (v * sqrt_t);
        let d2 = d1 - v * sqrt_t;

        trace!(option_type = %self.option_type, d1, d2, "gbs preliminary terms");

        // e^((b-r)T) carries the underlying leg; e^(-rT) discounts the strike leg
        let carry_df = ((b - r) * t).exp();
        let discount = (-r * t).exp();

        let pdf_d1 = require_finite("n(d1)", norm_pdf(d1))?;

        let result = match self.option_type {
            OptionType::Call => {
                let cdf_d1 = require_finite("N(d1)", norm_cdf(d1))?;
                let cdf_d2 = require_finite("N(d2)", norm_cdf(d2))?;

                GbsResult {
                    value: fs * carry_df * cdf_d1 - x * discount * cdf_d2,
                    delta: carry_df * cdf_d1,
                    gamma: carry_df * pdf_d1 / (fs * v * sqrt_t),
                    theta: -(fs * v * carry_df * pdf_d1) / (2.0 * sqrt_t)
                        - (b - r) * fs * carry_df * cdf_d1
                        - r * x * discount * cdf_d2,
                    vega: carry_df * fs * sqrt_t * pdf_d1,
                    rho: x * t * discount * cdf_d2,
                }
            }
            OptionType::Put => {
                let cdf_neg_d1 = require_finite("N(-d1)", norm_cdf(-d1))?;
                let cdf_neg_d2 = require_finite("N(-d2)", norm_cdf(-d2))?;

                GbsResult {
                    value: x * discount * cdf_neg_d2 - fs * carry_df * cdf_neg_d1,
                    delta: -carry_df * cdf_neg_d1,
                    gamma: carry_df * pdf_d1 / (fs * v * sqrt_t),
                    theta: -(fs * v * carry_df * pdf_d1) / (2.0 * sqrt_t)
                        + (b - r) * fs * carry_df * cdf_neg_d1
                        + r * x * discount * cdf_neg_d2,
                    vega: carry_df * fs * sqrt_t * pdf_d1,
                    rho: -x * t * discount * cdf_neg_d2,
                }
            }
        };

        require_finite("value", result.value)?;
        require_finite("delta", result.delta)?;
        require_finite("gamma", result.gamma)?;
        require_finite("theta", result.theta)?;
        require_finite("vega", result.vega)?;
        require_finite("rho", result.rho)?;

        trace!(
            value = result.value,
            delta = result.delta,
            gamma = result.gamma,
            theta = result.theta,
            vega = result.vega,
            rho = result.rho,
            "gbs result"
        );

        Ok(result)
    }
}

/// Theoretical value and first/second-order sensitivities.
///
/// Produced once per call from a validated [`GbsInputs`]; no partial or
/// invalid result is ever observable.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GbsResult {
    /// Theoretical fair value.
    pub value: f64,
    /// ∂V/∂FS — sensitivity to the underlying price.
    pub delta: f64,
    /// ∂²V/∂FS² — curvature in the underlying price.
    pub gamma: f64,
    /// ∂V/∂t — time decay.
    pub theta: f64,
    /// ∂V/∂V — sensitivity to volatility.
    pub vega: f64,
    /// ∂V/∂r — sensitivity to the risk-free rate.
    pub rho: f64,
}

/// Prices a European vanilla option under the generalized model.
///
/// Validates the inputs against [`GbsLimits`], then evaluates the
/// closed-form formulas. This is the single public entry point of the
/// pricing kernel; [`GbsInputs::new`] plus [`GbsInputs::price`] expose
/// the same two steps separately.
///
/// # Arguments
/// * `option_type` - Call or put
/// * `underlying` - Price of the underlying asset (FS)
/// * `strike` - Strike price (X)
/// * `expiry` - Time to expiration in years (T)
/// * `rate` - Risk-free rate (r)
/// * `carry` - Cost of carry (b)
/// * `volatility` - Annualised volatility (V)
///
/// # Errors
/// - [`PricingError::Validation`] if any input falls outside its
///   documented domain (first in check order wins)
/// - [`PricingError::Calculation`] if a numerical collaborator yields a
///   non-finite quantity
///
/// # Examples
/// ```
/// use pricer_gbs::analytical::{price, OptionType};
///
/// let call = price(OptionType::Call, 100.0, 100.0, 1.0, 0.05, 0.0, 0.15).unwrap();
/// let put = price(OptionType::Put, 100.0, 100.0, 1.0, 0.05, 0.0, 0.15).unwrap();
///
/// // Put-call parity: C - P = FS·e^((b-r)T) - X·e^(-rT)
/// let forward = 100.0 * (-0.05_f64).exp() - 100.0 * (-0.05_f64).exp();
/// assert!((call.value - put.value - forward).abs() < 1e-9);
/// ```
pub fn price(
    option_type: OptionType,
    underlying: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    carry: f64,
    volatility: f64,
) -> Result<GbsResult, PricingError> {
    let inputs = GbsInputs::new(
        option_type,
        underlying,
        strike,
        expiry,
        rate,
        carry,
        volatility,
    )?;
    Ok(inputs.price()?)
}
