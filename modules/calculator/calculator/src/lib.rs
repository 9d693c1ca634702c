//! Calculator Module
//!
//! Range-validated arithmetic over integer and floating-point operands.
//!
//! ## Architecture
//!
//! - `domain/range.rs` - Admissible operand range and its check
//! - `domain/service.rs` - Core business logic, implements `CalculatorApi`
//! - `config.rs` - Module configuration and loading
//!
//! The contract (`CalculatorApi`, `Number`, `CalculatorError`) lives in
//! `calculator-sdk` and is re-exported here.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod config;
pub mod domain;

pub use calculator_sdk::{CalculatorApi, CalculatorError, Number, Operation, ParseOperationError};
pub use config::{CalculatorConfig, ConfigError};
pub use domain::{OperandRange, Service};
