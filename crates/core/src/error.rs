//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;
use crate::value_object::Coordinate;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is detected before any state is mutated. Storage failures
/// live in the infrastructure crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Warehouse dimensions out of range.
    #[error("invalid warehouse dimension: {0}")]
    InvalidDimension(String),

    /// Non-positive stock quantity.
    #[error("quantity must be positive, got {0}")]
    InvalidQuantity(i64),

    /// A value failed validation (e.g. blank name or SKU).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Another product already uses this SKU.
    #[error("product with SKU '{0}' already exists")]
    DuplicateSku(String),

    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// No warehouse has been set up yet.
    #[error("no warehouse configured")]
    NotConfigured,

    /// The coordinate has no location (out of range, or no warehouse).
    #[error("no location at aisle {aisle}, tier {tier}")]
    LocationNotFound { aisle: i64, tier: i64 },

    #[error("no items at {0}")]
    LocationEmpty(Coordinate),

    #[error("insufficient quantity at {coordinate}: requested {requested}, available {available}")]
    InsufficientQuantity {
        coordinate: Coordinate,
        requested: u64,
        available: u64,
    },

    #[error("no available locations in warehouse")]
    NoAvailableLocation,

    /// Optimistic concurrency failure (stale read). Transient.
    #[error("concurrent modification: {0}")]
    ConcurrentConflict(String),
}

impl DomainError {
    pub fn invalid_dimension(msg: impl Into<String>) -> Self {
        Self::InvalidDimension(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::ConcurrentConflict(msg.into())
    }

    pub fn location_not_found(aisle: i64, tier: i64) -> Self {
        Self::LocationNotFound { aisle, tier }
    }

    /// Whether the caller may retry the whole operation.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::ConcurrentConflict(_))
    }
}
