pub mod clock;
pub mod error;
pub mod input;
pub mod repo;
pub mod service;
