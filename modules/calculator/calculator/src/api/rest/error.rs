use abacus_errors::ApiError;

use crate::domain::error::DomainError;
use crate::errors::ErrorCode;

/// Map a domain error to the catalog entry clients see.
///
/// Storage details are logged here and never leave the process.
pub fn domain_error_to_api(e: &DomainError) -> ApiError {
    if e.is_validation() {
        tracing::debug!(error = %e, "Calculation rejected");
    }
    match e {
        DomainError::MissingParameters => ErrorCode::MISSING_PARAMETERS.as_error(),
        DomainError::InvalidNumber => ErrorCode::INVALID_NUMBER.as_error(),
        DomainError::InvalidOperation => ErrorCode::INVALID_OPERATION.as_error(),
        DomainError::DivisionByZero => ErrorCode::DIVISION_BY_ZERO.as_error(),
        DomainError::NonFiniteResult => ErrorCode::NON_FINITE_RESULT.as_error(),
        DomainError::Persistence(_) => {
            tracing::error!(error = ?e, "Database error occurred");
            ErrorCode::INTERNAL.as_error()
        }
    }
}

/// Implement From<DomainError> for `ApiError` so `?` works in handlers
impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        domain_error_to_api(&e)
    }
}
