//! asset_fs library
//!
//! File-like access to assets stored in a local disk cache. Each asset is one
//! file, named by its identifier and category, and is read and written through
//! positional handles that never hold the OS file open between calls.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod prelude;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};
