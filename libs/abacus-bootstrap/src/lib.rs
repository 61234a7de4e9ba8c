//! Host bootstrap for Abacus binaries
//!
//! Layered configuration, logging initialization and shutdown signal handling.

pub mod config;
pub mod logging;
pub mod signals;

pub use config::*;
pub use logging::*;
pub use signals::*;
