//! # pypi-core
//!
//! Core types shared across the PyPI client crates.
//!
//! This crate provides:
//! - PypiError enum for unified error handling
//! - PypiResult alias for fallible operations

pub mod error;

// Re-export commonly used types
pub use error::{PypiError, PypiResult};
