//! Error catalog support

use crate::response::ApiError;
use http::StatusCode;

/// Static error definition from a module's catalog
#[derive(Debug, Clone, Copy)]
pub struct ErrDef {
    pub status: u16,
    pub code: &'static str,
    pub message: &'static str,
}

impl ErrDef {
    /// Convert this definition into an `ApiError` carrying the catalog message.
    #[inline]
    pub fn as_error(&self) -> ApiError {
        self.with_message(self.message)
    }

    /// Convert this definition into an `ApiError` with a custom message.
    #[inline]
    pub fn with_message(&self, message: impl Into<String>) -> ApiError {
        // Fall back to 500 for codes that are not valid HTTP statuses
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        ApiError::new(status, self.code, message)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn err_def_to_error_works() {
        let def = ErrDef {
            status: StatusCode::BAD_REQUEST.as_u16(),
            code: "invalid_operation",
            message: "Invalid operation",
        };

        let err = def.as_error();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.body.code, "invalid_operation");
        assert_eq!(err.body.error, "Invalid operation");
    }

    #[test]
    fn invalid_status_falls_back_to_internal() {
        let def = ErrDef {
            status: 42,
            code: "weird",
            message: "Weird",
        };
        assert_eq!(def.as_error().status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
