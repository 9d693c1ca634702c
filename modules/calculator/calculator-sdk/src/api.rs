//! Calculator API trait and error type
//!
//! Contract trait and error taxonomy for the calculator service.

use crate::models::{Number, Operation};

/// Calculator API trait
///
/// Every operation validates both operands against the admissible range
/// before computing. Implementations hold no mutable state, so a shared
/// `Arc<dyn CalculatorApi>` can be used from any number of threads.
pub trait CalculatorApi: Send + Sync {
    /// Returns `a + b`.
    ///
    /// # Errors
    /// Returns [`CalculatorError::OutOfRange`] if either operand is outside the valid range.
    fn add(&self, a: Number, b: Number) -> Result<Number, CalculatorError>;

    /// Returns `a - b`.
    ///
    /// # Errors
    /// Returns [`CalculatorError::OutOfRange`] if either operand is outside the valid range.
    fn subtract(&self, a: Number, b: Number) -> Result<Number, CalculatorError>;

    /// Returns `a * b`.
    ///
    /// # Errors
    /// Returns [`CalculatorError::OutOfRange`] if either operand is outside the valid range.
    fn multiply(&self, a: Number, b: Number) -> Result<Number, CalculatorError>;

    /// Returns `a / b` as a float.
    ///
    /// # Errors
    /// Returns [`CalculatorError::OutOfRange`] if either operand is outside the valid range,
    /// then [`CalculatorError::DivisionByZero`] if `b` is zero.
    fn divide(&self, a: Number, b: Number) -> Result<Number, CalculatorError>;

    /// Applies `op` to `a` and `b`.
    ///
    /// # Errors
    /// Same as the operation selected by `op`.
    fn evaluate(&self, op: Operation, a: Number, b: Number) -> Result<Number, CalculatorError> {
        match op {
            Operation::Add => self.add(a, b),
            Operation::Subtract => self.subtract(a, b),
            Operation::Multiply => self.multiply(a, b),
            Operation::Divide => self.divide(a, b),
        }
    }
}

/// Error type for Calculator operations
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("operand {value} is outside the valid range [{min}, {max}]")]
    OutOfRange { value: Number, min: f64, max: f64 },

    #[error("Cannot divide by zero")]
    DivisionByZero,
}

impl CalculatorError {
    #[must_use]
    pub fn out_of_range(value: Number, min: f64, max: f64) -> Self {
        Self::OutOfRange { value, min, max }
    }

    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    #[must_use]
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero)
    }
}
