//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator:
//! - API trait (`CalculatorApi`)
//! - Numeric model (`Number`) and operation selector (`Operation`)
//! - Error types (`CalculatorError`, `ParseOperationError`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorApi, Number, Operation};
//!
//! let calc: &dyn CalculatorApi = &service;
//! let sum = calc.add(Number::from(5), Number::from(3))?;
//! let quotient = calc.evaluate(Operation::Divide, 6.0.into(), 1.5.into())?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND ERRORS ===
mod api;
pub use api::{CalculatorApi, CalculatorError};

// === MODELS ===
mod models;
pub use models::{Number, Operation, ParseOperationError};
