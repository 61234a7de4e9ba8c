//! Error types shared by Abacus HTTP surfaces
//!
//! - `ErrDef`: a static catalog entry (status, machine code, public message)
//! - `ApiError`: the `{ "error", "code" }` body returned to clients
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod catalog;
pub mod response;

pub use catalog::ErrDef;
pub use response::{ApiError, ErrorBody};

/// Attach the request id (when known) to an error before it leaves the handler.
pub fn finalize(err: ApiError, request_id: Option<String>) -> ApiError {
    match request_id {
        Some(id) => err.with_request_id(id),
        None => err,
    }
}
