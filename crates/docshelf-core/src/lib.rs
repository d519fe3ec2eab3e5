//! # docshelf-core
//!
//! Core crate for Docshelf. Contains configuration schemas, typed
//! identifiers, logging setup, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Docshelf crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
