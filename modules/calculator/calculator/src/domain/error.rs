use calculator_sdk::ArithmeticError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Missing required parameters")]
    MissingParameters,

    #[error("Invalid number values")]
    InvalidNumber,

    #[error("Invalid operation")]
    InvalidOperation,

    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Result is not a finite number")]
    NonFiniteResult,

    #[error("Database error: {0}")]
    Persistence(#[from] anyhow::Error),
}

impl DomainError {
    /// Client-side mistakes; nothing was written.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::Persistence(_))
    }
}

impl From<ArithmeticError> for DomainError {
    fn from(e: ArithmeticError) -> Self {
        match e {
            ArithmeticError::DivisionByZero => Self::DivisionByZero,
            ArithmeticError::NonFinite => Self::NonFiniteResult,
        }
    }
}
