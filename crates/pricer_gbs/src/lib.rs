//! # Pricer GBS
//!
//! Closed-form pricing for European vanilla options under the
//! Generalized Black-Scholes-Merton model with cost of carry.
//!
//! This crate provides:
//! - Input validation against a fixed, documented bound table
//! - Theoretical fair value plus five analytical Greeks
//!   (Delta, Gamma, Theta, Vega, Rho)
//! - Standard normal CDF/PDF collaborators backed by `statrs`
//!
//! ## Design Principles
//!
//! - **Validate before evaluate**: a [`analytical::GbsInputs`] value is
//!   proof its parameters passed the bound table; no formula is ever
//!   evaluated on unchecked inputs
//! - **Pure kernel**: no state, no I/O, trivially thread-safe
//! - **Structured errors**: validation and calculation failures are
//!   distinct types carrying full diagnostic context

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
