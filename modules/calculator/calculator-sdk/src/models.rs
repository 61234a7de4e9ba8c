//! Public models for the calculator module.
//!
//! These are transport-agnostic data structures shared by the keypad state
//! machine and the calculate request handler.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ArithmeticError, ParseOperationError};

/// One of the four supported binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operation {
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Resolve an operation from its button/wire symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Apply the operation to `lhs` and `rhs`.
    ///
    /// # Errors
    /// Returns `ArithmeticError::DivisionByZero` when dividing by zero and
    /// `ArithmeticError::NonFinite` when the result overflows to infinity.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, ArithmeticError> {
        let result = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(ArithmeticError::DivisionByZero);
                }
                lhs / rhs
            }
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(ArithmeticError::NonFinite)
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| ParseOperationError {
            symbol: s.to_owned(),
        })
    }
}

/// A calculation ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCalculation {
    pub operation: Operation,
    pub first_value: f64,
    pub second_value: f64,
    pub result: f64,
    pub timestamp: DateTime<Utc>,
}

/// A stored calculation. Immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub id: i64,
    pub operation: Operation,
    pub first_value: f64,
    pub second_value: f64,
    pub result: f64,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn apply_covers_all_operations() {
        assert_eq!(Operation::Add.apply(7.0, 5.0), Ok(12.0));
        assert_eq!(Operation::Subtract.apply(7.0, 5.0), Ok(2.0));
        assert_eq!(Operation::Multiply.apply(7.0, 5.0), Ok(35.0));
        assert_eq!(Operation::Divide.apply(10.0, 4.0), Ok(2.5));
    }

    #[test]
    fn divide_by_zero_is_an_error_value() {
        assert_eq!(
            Operation::Divide.apply(9.0, 0.0),
            Err(ArithmeticError::DivisionByZero)
        );
        assert_eq!(
            Operation::Divide.apply(9.0, -0.0),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn overflow_is_reported_as_non_finite() {
        assert_eq!(
            Operation::Multiply.apply(f64::MAX, 10.0),
            Err(ArithmeticError::NonFinite)
        );
    }

    #[test]
    fn symbols_round_trip_through_from_str() {
        for op in Operation::ALL {
            assert_eq!(op.symbol().parse::<Operation>().unwrap(), op);
        }
        let err = "%".parse::<Operation>().unwrap_err();
        assert_eq!(err.symbol, "%");
    }

    #[test]
    fn operation_serializes_as_symbol() {
        let json = serde_json::to_string(&Operation::Multiply).unwrap();
        assert_eq!(json, "\"*\"");
        let op: Operation = serde_json::from_str("\"/\"").unwrap();
        assert_eq!(op, Operation::Divide);
    }

    proptest! {
        #[test]
        fn apply_matches_float_arithmetic(
            a in -1.0e9f64..1.0e9,
            b in -1.0e9f64..1.0e9,
            idx in 0usize..4,
        ) {
            let op = Operation::ALL[idx];
            prop_assume!(!(op == Operation::Divide && b == 0.0));

            let expected = match op {
                Operation::Add => a + b,
                Operation::Subtract => a - b,
                Operation::Multiply => a * b,
                Operation::Divide => a / b,
            };
            prop_assume!(expected.is_finite());
            let got = op.apply(a, b).unwrap();
            let tolerance = 1e-9 * expected.abs().max(1.0);
            prop_assert!((got - expected).abs() <= tolerance);
        }
    }
}
