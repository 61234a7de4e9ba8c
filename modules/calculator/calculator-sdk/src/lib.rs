//! Calculator SDK
//!
//! This crate provides the pieces shared by every calculator consumer:
//! - `Operation` and its arithmetic (`Operation::apply`)
//! - `CalculationRecord`, the persisted history entry
//! - `keypad`, the pure keypad state machine driven by button presses
//!
//! Nothing here depends on HTTP or storage.

#![forbid(unsafe_code)]

pub mod errors;
pub mod keypad;
pub mod models;

pub use errors::{ArithmeticError, ParseKeyError, ParseOperationError};
pub use keypad::{CalculatorState, Key};
pub use models::{CalculationRecord, NewCalculation, Operation};
