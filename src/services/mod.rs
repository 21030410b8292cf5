//! Business logic services

pub mod lending;
pub mod queries;

pub use lending::LendingService;
