//! Domain layer for calculator module
//!
//! Contains the operand range rule and the arithmetic service.

pub mod range;
pub mod service;

pub use range::OperandRange;
pub use service::Service;
