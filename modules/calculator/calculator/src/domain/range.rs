use calculator_sdk::{CalculatorError, Number};
use tracing::debug;

use crate::config::{CalculatorConfig, DEFAULT_MAX_OPERAND, DEFAULT_MIN_OPERAND};

/// Inclusive interval of admissible operands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperandRange {
    min: f64,
    max: f64,
}

impl Default for OperandRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_OPERAND,
            max: DEFAULT_MAX_OPERAND,
        }
    }
}

impl From<&CalculatorConfig> for OperandRange {
    fn from(cfg: &CalculatorConfig) -> Self {
        Self {
            min: cfg.min_operand,
            max: cfg.max_operand,
        }
    }
}

impl OperandRange {
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// NaN is never contained. Integers are compared exactly, without a
    /// round trip through `f64`.
    #[must_use]
    pub fn contains(&self, value: Number) -> bool {
        match value {
            Number::Int(v) => self.contains_int(v),
            Number::Float(v) => (self.min..=self.max).contains(&v),
        }
    }

    // Bounds are rounded inwards to whole numbers; those in (-2^63, 2^63) convert to i64 exactly.
    #[allow(clippy::cast_possible_truncation)]
    fn contains_int(&self, v: i64) -> bool {
        const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
        let lo = self.min.ceil();
        let hi = self.max.floor();
        if lo.is_nan() || hi.is_nan() {
            return false;
        }
        let above_min = lo <= -TWO_POW_63 || (lo < TWO_POW_63 && v >= lo as i64);
        let below_max = hi >= TWO_POW_63 || (hi >= -TWO_POW_63 && v <= hi as i64);
        above_min && below_max
    }

    /// # Errors
    /// Returns `CalculatorError::OutOfRange` if `value` is not contained.
    pub fn check(&self, value: Number) -> Result<(), CalculatorError> {
        if self.contains(value) {
            return Ok(());
        }
        debug!(%value, min = self.min, max = self.max, "operand rejected");
        Err(CalculatorError::out_of_range(value, self.min, self.max))
    }

    /// Checks `a`, then `b`.
    ///
    /// # Errors
    /// Returns `CalculatorError::OutOfRange` for the first operand that is not contained.
    pub fn check_pair(&self, a: Number, b: Number) -> Result<(), CalculatorError> {
        self.check(a)?;
        self.check(b)
    }
}
