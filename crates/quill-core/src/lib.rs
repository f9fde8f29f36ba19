//! # quill-core
//!
//! Core crate for Quill. Contains configuration schemas, the cache
//! provider trait, logging setup, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Quill crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
