//! Domain service for calculator
//!
//! Contains the core business logic: operand validation and arithmetic.

use calculator_sdk::{CalculatorApi, CalculatorError, Number, Operation};
use tracing::{debug, info};

use super::range::OperandRange;
use crate::config::{CalculatorConfig, ConfigError};

/// Domain service that performs range-checked arithmetic.
///
/// Stateless apart from its immutable operand range, so it is `Copy` and
/// can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Service {
    range: OperandRange,
}

impl Service {
    /// Create a new service with the default operand range.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service from configuration.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidRange` if the configured bounds are invalid.
    pub fn with_config(cfg: &CalculatorConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        if !cfg.is_default() {
            info!(
                min = cfg.min_operand,
                max = cfg.max_operand,
                "calculator configured with custom operand range"
            );
        }
        Ok(Self {
            range: OperandRange::from(cfg),
        })
    }

    #[must_use]
    pub fn range(&self) -> OperandRange {
        self.range
    }

    fn apply(
        &self,
        op: Operation,
        a: Number,
        b: Number,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> Result<Number, CalculatorError> {
        self.range.check_pair(a, b)?;
        let result = match (a, b) {
            (Number::Int(x), Number::Int(y)) => int_op(x, y)
                .map_or_else(|| Number::Float(float_op(a.as_f64(), b.as_f64())), Number::Int),
            _ => Number::Float(float_op(a.as_f64(), b.as_f64())),
        };
        debug!(op = op.name(), %a, %b, %result, "performed operation");
        Ok(result)
    }
}

impl CalculatorApi for Service {
    fn add(&self, a: Number, b: Number) -> Result<Number, CalculatorError> {
        self.apply(Operation::Add, a, b, i64::checked_add, |x, y| x + y)
    }

    fn subtract(&self, a: Number, b: Number) -> Result<Number, CalculatorError> {
        self.apply(Operation::Subtract, a, b, i64::checked_sub, |x, y| x - y)
    }

    fn multiply(&self, a: Number, b: Number) -> Result<Number, CalculatorError> {
        self.apply(Operation::Multiply, a, b, i64::checked_mul, |x, y| x * y)
    }

    fn divide(&self, a: Number, b: Number) -> Result<Number, CalculatorError> {
        self.range.check_pair(a, b)?;
        if b.is_zero() {
            debug!(%a, "rejected division by zero");
            return Err(CalculatorError::DivisionByZero);
        }
        let result = Number::Float(a.as_f64() / b.as_f64());
        debug!(op = Operation::Divide.name(), %a, %b, %result, "performed operation");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    const EPS: f64 = 1e-9;

    fn assert_float(result: Number, expected: f64) {
        match result {
            Number::Float(v) => assert!((v - expected).abs() < EPS, "{v} != {expected}"),
            Number::Int(v) => panic!("expected float result, got integer {v}"),
        }
    }

    #[test]
    fn test_add() {
        let service = Service::new();
        assert_eq!(service.add(10.into(), 20.into()), Ok(Number::Int(30)));
    }

    #[test]
    fn test_add_negative() {
        let service = Service::new();
        assert_eq!(service.add((-5).into(), 3.into()), Ok(Number::Int(-2)));
    }

    #[test]
    fn test_mixed_operands_produce_float() {
        let service = Service::new();
        assert_float(service.add(1.into(), 0.5.into()).unwrap(), 1.5);
        assert_float(service.multiply(2.5.into(), 2.into()).unwrap(), 5.0);
    }

    #[test]
    fn test_integer_results_are_exact() {
        let service = Service::new();
        assert_eq!(
            service.multiply(100_000_000.into(), 100_000_000.into()),
            Ok(Number::Int(10_000_000_000_000_000))
        );
        assert_eq!(
            service.subtract((-100_000_000).into(), 100_000_000.into()),
            Ok(Number::Int(-200_000_000))
        );
    }

    #[test]
    fn test_integer_division_is_true_division() {
        let service = Service::new();
        assert_float(service.divide(7.into(), 2.into()).unwrap(), 3.5);
        assert_float(service.divide(6.into(), 3.into()).unwrap(), 2.0);
    }

    #[test]
    fn test_divide_by_negative_zero() {
        let service = Service::new();
        assert_eq!(
            service.divide(1.into(), (-0.0).into()),
            Err(CalculatorError::DivisionByZero)
        );
    }

    #[test]
    fn test_default_service_range() {
        let range = Service::new().range();
        assert_eq!(range, OperandRange::default());
        assert!((range.max() - 100_000_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_range_checked_before_zero_divisor() {
        let service = Service::new();
        let err = service.divide(100_000_001.into(), 0.into()).unwrap_err();
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_nan_operand_rejected() {
        let service = Service::new();
        for op in Operation::ALL {
            let err = service
                .evaluate(op, f64::NAN.into(), 1.into())
                .unwrap_err();
            assert!(err.is_out_of_range(), "{op} accepted NaN");
        }
    }

    #[test]
    fn test_with_config_narrows_range() {
        let cfg = CalculatorConfig {
            min_operand: -10.0,
            max_operand: 10.0,
        };
        let service = Service::with_config(&cfg).unwrap();
        assert!((service.range().min() + 10.0).abs() < f64::EPSILON);
        assert!((service.range().max() - 10.0).abs() < f64::EPSILON);
        assert_eq!(service.add(10.into(), (-10).into()), Ok(Number::Int(0)));

        let err = service.add(11.into(), 0.into()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "operand 11 is outside the valid range [-10, 10]"
        );
    }

    #[test]
    fn test_with_config_rejects_invalid_range() {
        let cfg = CalculatorConfig {
            min_operand: 1.0,
            max_operand: 0.0,
        };
        assert!(Service::with_config(&cfg).is_err());
    }

    #[test]
    fn test_integer_overflow_falls_back_to_float() {
        let cfg = CalculatorConfig {
            min_operand: -1e19,
            max_operand: 1e19,
        };
        let service = Service::with_config(&cfg).unwrap();
        let big = Number::Int(i64::MAX);
        let result = service.add(big, 1.into()).unwrap();
        assert!(!result.is_integer());
        assert!(result.as_f64() > 9.2e18);
    }

    #[test]
    #[traced_test]
    fn test_operations_are_logged() {
        let service = Service::new();
        service.add(2.into(), 2.into()).unwrap();
        assert!(logs_contain("performed operation"));

        service.divide(1.into(), 0.into()).unwrap_err();
        assert!(logs_contain("rejected division by zero"));

        service.subtract(100_000_001.into(), 0.into()).unwrap_err();
        assert!(logs_contain("operand rejected"));
    }
}
