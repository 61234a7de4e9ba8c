//! Error types for the calculator SDK.

use thiserror::Error;

/// Arithmetic failures. These are values, never panics.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Result is not a finite number")]
    NonFinite,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported operation '{symbol}'")]
pub struct ParseOperationError {
    pub symbol: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown key '{label}'")]
pub struct ParseKeyError {
    pub label: String,
}
