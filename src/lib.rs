//! São Rafael Library Management System
//!
//! A small library manager tracking a catalog of books, a membership
//! roster, and the set of currently open loans. Each collection is
//! persisted as a flat JSON file; the lending engine keeps every book's
//! availability flag consistent with the open loans that reference it.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod storage;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
