//! Calculator Module
//!
//! Validates and computes `{firstValue, secondValue, operation}` requests,
//! stores every successful calculation, and serves the most recent ones.
//!
//! The shared arithmetic and the keypad state machine live in
//! `calculator-sdk` and are re-exported here.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub use calculator_sdk::{CalculationRecord, NewCalculation, Operation};

pub mod errors;

pub mod module;
pub use module::CalculatorModule;

// Internal layers, public for integration tests and the server composition root.
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
