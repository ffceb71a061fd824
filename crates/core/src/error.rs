//! Domain error model.

use thiserror::Error;

/// Result type used across the catalog crates.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Every query is total over its inputs except for these three conditions.
/// Nothing recovers from them internally; they travel up to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// There was nothing to aggregate over (no orders, or orders without products).
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// No order matched the requested product.
    #[error("not found: {0}")]
    NotFound(String),

    /// An argument was not recognised (e.g. an unknown activation code).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl CatalogError {
    pub fn empty_input(msg: impl Into<String>) -> Self {
        Self::EmptyInput(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
