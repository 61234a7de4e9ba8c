//! Error catalog for the calculator API.
//!
//! Messages are part of the public contract; clients match on `code`.

use abacus_errors::ErrDef;

pub struct ErrorCode;

impl ErrorCode {
    pub const MISSING_PARAMETERS: ErrDef = ErrDef {
        status: 400,
        code: "missing_parameters",
        message: "Missing required parameters",
    };

    pub const INVALID_NUMBER: ErrDef = ErrDef {
        status: 400,
        code: "invalid_number",
        message: "Invalid number values",
    };

    pub const INVALID_OPERATION: ErrDef = ErrDef {
        status: 400,
        code: "invalid_operation",
        message: "Invalid operation",
    };

    pub const DIVISION_BY_ZERO: ErrDef = ErrDef {
        status: 400,
        code: "division_by_zero",
        message: "Division by zero is not allowed",
    };

    pub const NON_FINITE_RESULT: ErrDef = ErrDef {
        status: 400,
        code: "non_finite_result",
        message: "Result is not a finite number",
    };

    pub const MALFORMED_BODY: ErrDef = ErrDef {
        status: 400,
        code: "malformed_body",
        message: "Request body must be a JSON object",
    };

    pub const INTERNAL: ErrDef = ErrDef {
        status: 500,
        code: "internal",
        message: "Internal server error",
    };
}
