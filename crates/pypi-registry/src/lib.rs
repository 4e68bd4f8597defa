//! PyPI JSON API client
//!
//! This crate provides HTTP client functionality for fetching project and
//! release metadata from the PyPI JSON API, plus typed access to the
//! decoded response: version lookup and filtered package search.

pub mod api;
pub mod client;

// Re-export main types
pub use api::{Info, Package, PackageQuery, Releases, Response};
pub use client::RegistryClient;

use pypi_core::error::PypiError;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, PypiError>;
